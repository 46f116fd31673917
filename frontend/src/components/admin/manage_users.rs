//! 用户管理：搜索、角色调整与删除

use crate::components::icons::Trash2;
use crate::hooks::admin::use_admin;
use campusqa_shared::{Role, User};
use leptos::prelude::*;
use leptos::task::spawn_local;

fn confirm(message: &str) -> bool {
    web_sys::window()
        .and_then(|w| w.confirm_with_message(message).ok())
        .unwrap_or(false)
}

#[component]
pub fn ManageUsers() -> impl IntoView {
    let admin = use_admin();
    let loading = admin.loading;
    let error = admin.error;
    let admin = StoredValue::new(admin);

    let users = RwSignal::new(Vec::<User>::new());
    let (search, set_search) = signal(String::new());

    Effect::new(move |_| {
        let term = search.get();
        let admin = admin.get_value();
        spawn_local(async move {
            let filter = if term.trim().is_empty() {
                None
            } else {
                Some(term)
            };
            if let Some(list) = admin.fetch_users(filter).await {
                users.set(list);
            }
        });
    });

    let on_role_change = move |user_id: u64, value: String| {
        let Some(role) = Role::parse(&value) else {
            return;
        };
        let admin = admin.get_value();
        spawn_local(async move {
            if admin.update_user_role(user_id, role).await {
                users.update(|list| {
                    if let Some(user) = list.iter_mut().find(|u| u.id == user_id) {
                        user.role = role;
                    }
                });
            }
        });
    };

    let on_delete = move |user_id: u64| {
        if !confirm("确定删除该用户？其内容会保留但无法登录。") {
            return;
        }
        let admin = admin.get_value();
        spawn_local(async move {
            if admin.delete_user(user_id).await {
                users.update(|list| list.retain(|u| u.id != user_id));
            }
        });
    };

    view! {
        <div class="space-y-4">
            <div class="flex items-center gap-2">
                <h2 class="text-xl font-bold flex-1">"用户管理"</h2>
                <input
                    type="text"
                    class="input input-bordered input-sm w-64"
                    placeholder="搜索用户..."
                    prop:value=search
                    on:input=move |ev| set_search.set(event_target_value(&ev))
                />
            </div>

            <Show when=move || error.get().is_some()>
                <div role="alert" class="alert alert-error">
                    <span>{move || error.get().unwrap_or_default()}</span>
                </div>
            </Show>

            <div class="card bg-base-100 shadow">
                <div class="overflow-x-auto w-full">
                    <table class="table table-zebra w-full">
                        <thead>
                            <tr>
                                <th>"ID"</th>
                                <th>"昵称"</th>
                                <th>"邮箱"</th>
                                <th>"角色"</th>
                                <th>"声望"</th>
                                <th></th>
                            </tr>
                        </thead>
                        <tbody>
                            <Show when=move || loading.get() && users.with(|u| u.is_empty())>
                                <tr>
                                    <td colspan="6" class="text-center py-8">
                                        <span class="loading loading-spinner loading-md"></span>
                                    </td>
                                </tr>
                            </Show>
                            <For
                                each=move || users.get()
                                key=|u| (u.id, u.role)
                                children=move |user| {
                                    let id = user.id;
                                    let role = user.role;
                                    view! {
                                        <tr>
                                            <td>{id}</td>
                                            <td class="font-bold">{user.name.clone()}</td>
                                            <td>{user.email.clone()}</td>
                                            <td>
                                                <select
                                                    class="select select-bordered select-xs"
                                                    on:change=move |ev| on_role_change(id, event_target_value(&ev))
                                                >
                                                    {Role::all()
                                                        .into_iter()
                                                        .map(|r| view! {
                                                            <option value=r.as_str() selected=move || role == r>
                                                                {r.as_str()}
                                                            </option>
                                                        })
                                                        .collect_view()}
                                                </select>
                                            </td>
                                            <td>{user.reputation}</td>
                                            <td>
                                                <button
                                                    class="btn btn-ghost btn-xs text-error gap-1"
                                                    on:click=move |_| on_delete(id)
                                                >
                                                    <Trash2 attr:class="h-3 w-3" />
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
