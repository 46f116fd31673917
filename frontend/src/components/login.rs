//! 登录页

use crate::api::use_api;
use crate::auth::{login, use_auth};
use crate::components::icons::GraduationCap;
use crate::web::route::AppRoute;
use crate::web::router::use_router;
use campusqa_shared::protocol::LoginRequest;
use leptos::prelude::*;
use leptos::task::spawn_local;

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = use_auth();
    let router = use_router();
    let api = StoredValue::new(use_api());

    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (is_submitting, set_is_submitting) = signal(false);
    let (local_error, set_local_error) = signal(Option::<String>::None);

    // 已认证用户应离开登录页
    Effect::new(move |_| {
        let state = auth.state.get();
        if !state.is_loading
            && state.user.is_some()
            && AppRoute::Login.should_redirect_when_authenticated()
        {
            router.replace(AppRoute::Home);
        }
    });

    // 本地校验错误优先，其次是认证层的后端消息
    let error_msg = Signal::derive(move || {
        local_error.get().or_else(|| auth.state.get().error)
    });

    let on_submit = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();
        if email.get().is_empty() || password.get().is_empty() {
            set_local_error.set(Some("请填写所有字段".to_string()));
            return;
        }

        set_is_submitting.set(true);
        set_local_error.set(None);

        let api = api.get_value();
        spawn_local(async move {
            let credentials = LoginRequest {
                email: email.get_untracked(),
                password: password.get_untracked(),
            };
            if login(&auth, &api, credentials).await {
                router.navigate(AppRoute::Home);
            }
            set_is_submitting.set(false);
        });
    };

    view! {
        <div class="hero min-h-screen bg-base-200">
            <div class="hero-content flex-col w-full max-w-md">
                <div class="text-center mb-4">
                    <div class="flex flex-col items-center gap-2">
                        <div class="p-3 bg-primary/10 rounded-2xl text-primary">
                            <GraduationCap attr:class="h-8 w-8" />
                        </div>
                        <h1 class="text-3xl font-bold">"登录 CampusQA"</h1>
                        <p class="text-base-content/70">"欢迎回来，继续提问与解答"</p>
                    </div>
                </div>

                <div class="card shrink-0 w-full shadow-2xl bg-base-100">
                    <form class="card-body" on:submit=on_submit>
                        <Show when=move || error_msg.get().is_some()>
                            <div role="alert" class="alert alert-error text-sm py-2">
                                <span>{move || error_msg.get().unwrap_or_default()}</span>
                            </div>
                        </Show>

                        <div class="form-control">
                            <label class="label" for="email">
                                <span class="label-text">"邮箱"</span>
                            </label>
                            <input
                                id="email"
                                type="email"
                                placeholder="you@university.edu"
                                on:input=move |ev| set_email.set(event_target_value(&ev))
                                prop:value=email
                                class="input input-bordered"
                                required
                            />
                        </div>
                        <div class="form-control">
                            <label class="label" for="password">
                                <span class="label-text">"密码"</span>
                            </label>
                            <input
                                id="password"
                                type="password"
                                placeholder="••••••••"
                                on:input=move |ev| set_password.set(event_target_value(&ev))
                                prop:value=password
                                class="input input-bordered"
                                required
                            />
                        </div>
                        <div class="form-control mt-6">
                            <button class="btn btn-primary" disabled=move || is_submitting.get()>
                                {move || if is_submitting.get() {
                                    view! { <span class="loading loading-spinner"></span> "登录中..." }.into_any()
                                } else {
                                    "登录".into_any()
                                }}
                            </button>
                        </div>
                        <p class="text-center text-sm text-base-content/70 mt-2">
                            "还没有账号？"
                            <a class="link link-primary" on:click=move |_| router.navigate(AppRoute::Register)>
                                "立即注册"
                            </a>
                        </p>
                    </form>
                </div>
            </div>
        </div>
    }
}
