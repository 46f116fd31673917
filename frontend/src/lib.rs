//! CampusQA 前端应用
//!
//! 采用 Context-Driven 的高内聚低耦合架构：
//! - `web::route` / `web::router`: 路由领域模型与服务
//! - `api`: 带请求/响应拦截的 API 客户端
//! - `auth`: 会话状态管理
//! - `toast`: 全局通知总线（含组件树外的事件桥）
//! - `hooks`: 按资源族划分的数据 Hook
//! - `components`: 守卫、部件与页面

pub mod api;
pub mod auth;
pub mod error;
pub mod toast;

mod hooks {
    pub mod admin;
    pub mod answers;
    pub mod catalog;
    pub mod favorites;
    pub mod profile;
    pub mod questions;
    pub mod reports;
    mod support;
    pub mod votes;
}

mod components {
    pub mod admin;
    pub mod answer_card;
    pub mod ask_question;
    pub mod categories;
    pub mod favorite_button;
    pub mod favorites;
    pub mod guard;
    pub mod home;
    mod icons;
    pub mod login;
    pub mod markdown_editor;
    pub mod navbar;
    pub mod profile;
    pub mod question_card;
    pub mod question_detail;
    pub mod register;
    pub mod report_button;
    pub mod search;
    pub mod vote_buttons;
}

// 原生 Web API 封装模块
// 此模块提供对浏览器原生 API 的轻量级封装，替代 gloo-* 系列 crate，
// 以减小 WASM 二进制体积。
pub(crate) mod web {
    pub mod events;
    mod http;
    pub mod route;
    pub mod router;
    mod storage;
    mod timer;

    pub use http::HttpClient;
    pub use storage::LocalStorage;
    pub use timer::Timeout;
}

use crate::api::{ApiClient, provide_api};
use crate::auth::{AuthContext, init_auth};
use crate::components::admin::AdminPage;
use crate::components::ask_question::AskQuestionPage;
use crate::components::categories::CategoriesPage;
use crate::components::favorites::FavoritesPage;
use crate::components::guard::RouteGuard;
use crate::components::home::HomePage;
use crate::components::login::LoginPage;
use crate::components::navbar::Navbar;
use crate::components::profile::ProfilePage;
use crate::components::question_detail::QuestionDetailPage;
use crate::components::register::RegisterPage;
use crate::components::search::SearchPage;
use crate::toast::{ToastContainer, provide_toast_bus};

use leptos::prelude::*;

use web::route::AppRoute;
use web::router::{Router, RouterOutlet};

/// 以守卫包裹受保护页面；允许角色来自路由定义本身
fn guarded(route: AppRoute, page: fn() -> AnyView) -> AnyView {
    debug_assert!(route.requires_auth());
    let roles = route.allowed_roles().to_vec();
    view! { <RouteGuard roles=roles>{page}</RouteGuard> }.into_any()
}

/// 路由匹配函数
///
/// 根据 AppRoute 枚举返回对应的视图组件；受保护页面包裹守卫。
fn route_matcher(route: AppRoute) -> AnyView {
    match route {
        AppRoute::Home => view! { <HomePage /> }.into_any(),
        AppRoute::Login => view! { <LoginPage /> }.into_any(),
        AppRoute::Register => view! { <RegisterPage /> }.into_any(),
        AppRoute::QuestionDetail(id) => view! { <QuestionDetailPage id=id /> }.into_any(),
        AppRoute::Categories => view! { <CategoriesPage /> }.into_any(),
        AppRoute::Search => view! { <SearchPage /> }.into_any(),
        AppRoute::AskQuestion => guarded(AppRoute::AskQuestion, || {
            view! { <AskQuestionPage /> }.into_any()
        }),
        AppRoute::Profile => guarded(AppRoute::Profile, || view! { <ProfilePage /> }.into_any()),
        AppRoute::Favorites => {
            guarded(AppRoute::Favorites, || view! { <FavoritesPage /> }.into_any())
        }
        AppRoute::Admin => guarded(AppRoute::Admin, || view! { <AdminPage /> }.into_any()),
        AppRoute::NotFound => view! {
            <div class="flex items-center justify-center min-h-screen bg-base-200">
                <div class="text-center">
                    <h1 class="text-6xl font-bold text-error">"404"</h1>
                    <p class="text-xl mt-4">"页面未找到"</p>
                </div>
            </div>
        }
        .into_any(),
    }
}

#[component]
pub fn App() -> impl IntoView {
    // 1. API 客户端（编译期配置的根路径）
    let api = ApiClient::from_env();
    provide_api(api.clone());

    // 2. 通知总线 + 全局事件桥（传输层由此触达 toast）
    provide_toast_bus();

    // 3. 认证上下文与初始会话恢复
    let auth_ctx = AuthContext::new();
    provide_context(auth_ctx);
    init_auth(&auth_ctx, &api);

    view! {
        <Router>
            <Navbar />
            <RouterOutlet matcher=route_matcher />
            <ToastContainer />
        </Router>
    }
}
