//! 顶部导航栏

use crate::api::use_api;
use crate::auth::{logout, use_auth};
use crate::components::icons::{GraduationCap, LogOut, Plus, SearchIcon};
use crate::web::route::AppRoute;
use crate::web::router::use_router;
use campusqa_shared::Role;
use leptos::prelude::*;
use leptos::task::spawn_local;

#[component]
pub fn Navbar() -> impl IntoView {
    let auth = use_auth();
    let router = use_router();
    // StoredValue 让非 Copy 的客户端可以进入可重入的视图闭包
    let api = StoredValue::new(use_api());

    let user = auth.user_signal();
    let is_authenticated = auth.is_authenticated_signal();
    let is_admin = Signal::derive(move || {
        user.get().map(|u| u.role == Role::Admin).unwrap_or(false)
    });

    let on_logout = move |_| {
        let api = api.get_value();
        spawn_local(async move {
            logout(&auth, &api).await;
        });
        router.navigate(AppRoute::Home);
    };

    view! {
        <div class="navbar bg-base-100 shadow-md px-4">
            <div class="flex-1 gap-1">
                <a class="btn btn-ghost text-xl gap-2" on:click=move |_| router.navigate(AppRoute::Home)>
                    <GraduationCap attr:class="h-6 w-6 text-primary" />
                    "CampusQA"
                </a>
                <a class="btn btn-ghost btn-sm" on:click=move |_| router.navigate(AppRoute::Categories)>
                    "分类"
                </a>
                <a class="btn btn-ghost btn-sm gap-1" on:click=move |_| router.navigate(AppRoute::Search)>
                    <SearchIcon attr:class="h-4 w-4" />
                    "搜索"
                </a>
            </div>
            <div class="flex-none gap-2">
                <Show
                    when=move || is_authenticated.get()
                    fallback=move || view! {
                        <a class="btn btn-ghost btn-sm" on:click=move |_| router.navigate(AppRoute::Login)>
                            "登录"
                        </a>
                        <a class="btn btn-primary btn-sm" on:click=move |_| router.navigate(AppRoute::Register)>
                            "注册"
                        </a>
                    }
                >
                    <a class="btn btn-primary btn-sm gap-1" on:click=move |_| router.navigate(AppRoute::AskQuestion)>
                        <Plus attr:class="h-4 w-4" />
                        "提问"
                    </a>
                    <a class="btn btn-ghost btn-sm" on:click=move |_| router.navigate(AppRoute::Favorites)>
                        "收藏"
                    </a>
                    <a class="btn btn-ghost btn-sm" on:click=move |_| router.navigate(AppRoute::Profile)>
                        {move || user.get().map(|u| u.name).unwrap_or_default()}
                    </a>
                    <Show when=move || is_admin.get()>
                        <a class="btn btn-outline btn-sm" on:click=move |_| router.navigate(AppRoute::Admin)>
                            "管理"
                        </a>
                    </Show>
                    <button on:click=on_logout class="btn btn-ghost btn-sm gap-1">
                        <LogOut attr:class="h-4 w-4" />
                        "退出"
                    </button>
                </Show>
            </div>
        </div>
    }
}
