//! 分类管理：创建、编辑与删除

use crate::hooks::admin::use_admin;
use campusqa_shared::Category;
use leptos::prelude::*;
use leptos::task::spawn_local;

#[component]
pub fn ManageCategories() -> impl IntoView {
    let admin = use_admin();
    let loading = admin.loading;
    let error = admin.error;
    let admin = StoredValue::new(admin);

    let categories = RwSignal::new(Vec::<Category>::new());
    // Some(id) 表示编辑既有分类，None 表示新建
    let editing = RwSignal::new(Option::<u64>::None);
    let (name, set_name) = signal(String::new());
    let (description, set_description) = signal(String::new());

    Effect::new(move |_| {
        let admin = admin.get_value();
        spawn_local(async move {
            if let Some(list) = admin.fetch_categories().await {
                categories.set(list);
            }
        });
    });

    let reset_form = move || {
        editing.set(None);
        set_name.set(String::new());
        set_description.set(String::new());
    };

    let on_submit = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();
        let name_value = name.get();
        if name_value.trim().is_empty() {
            return;
        }
        let description_value = description.get();
        let description_opt = if description_value.trim().is_empty() {
            None
        } else {
            Some(description_value)
        };

        let admin = admin.get_value();
        spawn_local(async move {
            match editing.get_untracked() {
                Some(id) => {
                    if let Some(updated) =
                        admin.update_category(id, name_value, description_opt).await
                    {
                        categories.update(|list| {
                            if let Some(slot) = list.iter_mut().find(|c| c.id == id) {
                                *slot = updated;
                            }
                        });
                        reset_form();
                    }
                }
                None => {
                    if let Some(created) = admin.create_category(name_value, description_opt).await
                    {
                        categories.update(|list| list.push(created));
                        reset_form();
                    }
                }
            }
        });
    };

    let on_edit = move |category: Category| {
        editing.set(Some(category.id));
        set_name.set(category.name);
        set_description.set(category.description.unwrap_or_default());
    };

    let on_delete = move |id: u64| {
        let admin = admin.get_value();
        spawn_local(async move {
            if admin.delete_category(id).await {
                categories.update(|list| list.retain(|c| c.id != id));
            }
        });
    };

    view! {
        <div class="space-y-4">
            <h2 class="text-xl font-bold">"分类管理"</h2>

            <Show when=move || error.get().is_some()>
                <div role="alert" class="alert alert-error">
                    <span>{move || error.get().unwrap_or_default()}</span>
                </div>
            </Show>

            <div class="card bg-base-100 shadow">
                <form class="card-body flex-row flex-wrap items-end gap-2" on:submit=on_submit>
                    <div class="form-control flex-1 min-w-48">
                        <label class="label"><span class="label-text">"名称"</span></label>
                        <input
                            type="text"
                            class="input input-bordered input-sm"
                            prop:value=name
                            on:input=move |ev| set_name.set(event_target_value(&ev))
                            required
                        />
                    </div>
                    <div class="form-control flex-1 min-w-48">
                        <label class="label"><span class="label-text">"描述 (可选)"</span></label>
                        <input
                            type="text"
                            class="input input-bordered input-sm"
                            prop:value=description
                            on:input=move |ev| set_description.set(event_target_value(&ev))
                        />
                    </div>
                    <button class="btn btn-primary btn-sm" disabled=move || loading.get()>
                        {move || if editing.get().is_some() { "保存修改" } else { "新建分类" }}
                    </button>
                    <Show when=move || editing.get().is_some()>
                        <button type="button" class="btn btn-ghost btn-sm" on:click=move |_| reset_form()>
                            "取消"
                        </button>
                    </Show>
                </form>
            </div>

            <div class="card bg-base-100 shadow">
                <div class="overflow-x-auto w-full">
                    <table class="table table-zebra w-full">
                        <thead>
                            <tr>
                                <th>"ID"</th>
                                <th>"名称"</th>
                                <th>"描述"</th>
                                <th></th>
                            </tr>
                        </thead>
                        <tbody>
                            <For
                                each=move || categories.get()
                                key=|c| c.id
                                children=move |category| {
                                    let id = category.id;
                                    let for_edit = category.clone();
                                    view! {
                                        <tr>
                                            <td>{id}</td>
                                            <td class="font-bold">{category.name.clone()}</td>
                                            <td>{category.description.clone().unwrap_or_default()}</td>
                                            <td class="flex gap-1">
                                                <button
                                                    class="btn btn-ghost btn-xs"
                                                    on:click=move |_| on_edit(for_edit.clone())
                                                >
                                                    "编辑"
                                                </button>
                                                <button
                                                    class="btn btn-ghost btn-xs text-error"
                                                    on:click=move |_| on_delete(id)
                                                >
                                                    "删除"
                                                </button>
                                            </td>
                                        </tr>
                                    }
                                }
                            />
                        </tbody>
                    </table>
                </div>
            </div>
        </div>
    }
}
