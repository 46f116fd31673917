//! 标签管理

use crate::hooks::admin::use_admin;
use campusqa_shared::Tag;
use leptos::prelude::*;
use leptos::task::spawn_local;

#[component]
pub fn ManageTags() -> impl IntoView {
    let admin = use_admin();
    let loading = admin.loading;
    let error = admin.error;
    let admin = StoredValue::new(admin);

    let tags = RwSignal::new(Vec::<Tag>::new());
    let editing = RwSignal::new(Option::<u64>::None);
    let (name, set_name) = signal(String::new());

    Effect::new(move |_| {
        let admin = admin.get_value();
        spawn_local(async move {
            if let Some(list) = admin.fetch_tags().await {
                tags.set(list);
            }
        });
    });

    let reset_form = move || {
        editing.set(None);
        set_name.set(String::new());
    };

    let on_submit = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();
        let name_value = name.get();
        if name_value.trim().is_empty() {
            return;
        }

        let admin = admin.get_value();
        spawn_local(async move {
            match editing.get_untracked() {
                Some(id) => {
                    if let Some(updated) = admin.update_tag(id, name_value).await {
                        tags.update(|list| {
                            if let Some(slot) = list.iter_mut().find(|t| t.id == id) {
                                *slot = updated;
                            }
                        });
                        reset_form();
                    }
                }
                None => {
                    if let Some(created) = admin.create_tag(name_value).await {
                        tags.update(|list| list.push(created));
                        reset_form();
                    }
                }
            }
        });
    };

    let on_edit = move |tag: Tag| {
        editing.set(Some(tag.id));
        set_name.set(tag.name);
    };

    let on_delete = move |id: u64| {
        let admin = admin.get_value();
        spawn_local(async move {
            if admin.delete_tag(id).await {
                tags.update(|list| list.retain(|t| t.id != id));
            }
        });
    };

    view! {
        <div class="space-y-4">
            <h2 class="text-xl font-bold">"标签管理"</h2>

            <Show when=move || error.get().is_some()>
                <div role="alert" class="alert alert-error">
                    <span>{move || error.get().unwrap_or_default()}</span>
                </div>
            </Show>

            <div class="card bg-base-100 shadow">
                <form class="card-body flex-row items-end gap-2" on:submit=on_submit>
                    <div class="form-control flex-1">
                        <label class="label"><span class="label-text">"名称"</span></label>
                        <input
                            type="text"
                            class="input input-bordered input-sm"
                            prop:value=name
                            on:input=move |ev| set_name.set(event_target_value(&ev))
                            required
                        />
                    </div>
                    <button class="btn btn-primary btn-sm" disabled=move || loading.get()>
                        {move || if editing.get().is_some() { "保存修改" } else { "新建标签" }}
                    </button>
                    <Show when=move || editing.get().is_some()>
                        <button type="button" class="btn btn-ghost btn-sm" on:click=move |_| reset_form()>
                            "取消"
                        </button>
                    </Show>
                </form>
            </div>

            <div class="flex flex-wrap gap-2">
                <For
                    each=move || tags.get()
                    key=|t| t.id
                    children=move |tag| {
                        let id = tag.id;
                        let for_edit = tag.clone();
                        view! {
                            <div class="badge badge-lg badge-outline gap-2">
                                <span class="cursor-pointer" on:click=move |_| on_edit(for_edit.clone())>
                                    {tag.name.clone()}
                                </span>
                                <button class="text-error" on:click=move |_| on_delete(id)>
                                    "✕"
                                </button>
                            </div>
                        }
                    }
                />
            </div>
        </div>
    }
}
