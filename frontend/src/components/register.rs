//! 注册页
//!
//! 客户端只做最基本的前置校验；字段级规则由后端执行，
//! 返回的按字段错误在认证层被压平为一条消息展示。

use crate::api::use_api;
use crate::auth::{register, use_auth};
use crate::components::icons::GraduationCap;
use crate::web::route::AppRoute;
use crate::web::router::use_router;
use campusqa_shared::protocol::RegisterRequest;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// 提交前的本地校验；返回第一条违规消息
fn validate_registration(
    name: &str,
    email: &str,
    password: &str,
    confirmation: &str,
) -> Result<(), String> {
    if name.trim().is_empty() || email.trim().is_empty() || password.is_empty() {
        return Err("请填写所有字段".to_string());
    }
    if password.chars().count() < 8 {
        return Err("密码至少 8 个字符".to_string());
    }
    if password != confirmation {
        return Err("两次输入的密码不一致".to_string());
    }
    Ok(())
}

#[component]
pub fn RegisterPage() -> impl IntoView {
    let auth = use_auth();
    let router = use_router();
    let api = StoredValue::new(use_api());

    let (name, set_name) = signal(String::new());
    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (confirmation, set_confirmation) = signal(String::new());
    let (is_submitting, set_is_submitting) = signal(false);
    let (local_error, set_local_error) = signal(Option::<String>::None);

    // 已认证用户应离开注册页
    Effect::new(move |_| {
        let state = auth.state.get();
        if !state.is_loading
            && state.user.is_some()
            && AppRoute::Register.should_redirect_when_authenticated()
        {
            router.replace(AppRoute::Home);
        }
    });

    let error_msg = Signal::derive(move || {
        local_error.get().or_else(|| auth.state.get().error)
    });

    let on_submit = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();

        if let Err(message) = validate_registration(
            &name.get(),
            &email.get(),
            &password.get(),
            &confirmation.get(),
        ) {
            set_local_error.set(Some(message));
            return;
        }

        set_is_submitting.set(true);
        set_local_error.set(None);

        let api = api.get_value();
        spawn_local(async move {
            let data = RegisterRequest {
                name: name.get_untracked(),
                email: email.get_untracked(),
                password: password.get_untracked(),
                password_confirmation: confirmation.get_untracked(),
            };
            if register(&auth, &api, data).await {
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
                        <h1 class="text-3xl font-bold">"加入 CampusQA"</h1>
                        <p class="text-base-content/70">"创建账号，和同学一起提问与解答"</p>
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
                            <label class="label" for="name">
                                <span class="label-text">"昵称"</span>
                            </label>
                            <input
                                id="name"
                                type="text"
                                on:input=move |ev| set_name.set(event_target_value(&ev))
                                prop:value=name
                                class="input input-bordered"
                                required
                            />
                        </div>
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
                                on:input=move |ev| set_password.set(event_target_value(&ev))
                                prop:value=password
                                class="input input-bordered"
                                required
                            />
                        </div>
                        <div class="form-control">
                            <label class="label" for="confirmation">
                                <span class="label-text">"确认密码"</span>
                            </label>
                            <input
                                id="confirmation"
                                type="password"
                                on:input=move |ev| set_confirmation.set(event_target_value(&ev))
                                prop:value=confirmation
                                class="input input-bordered"
                                required
                            />
                        </div>
                        <div class="form-control mt-6">
                            <button class="btn btn-primary" disabled=move || is_submitting.get()>
                                {move || if is_submitting.get() {
                                    view! { <span class="loading loading-spinner"></span> "注册中..." }.into_any()
                                } else {
                                    "注册".into_any()
                                }}
                            </button>
                        </div>
                        <p class="text-center text-sm text-base-content/70 mt-2">
                            "已有账号？"
                            <a class="link link-primary" on:click=move |_| router.navigate(AppRoute::Login)>
                                "去登录"
                            </a>
                        </p>
                    </form>
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_fields_are_required() {
        assert!(validate_registration("", "a@b.c", "longenough", "longenough").is_err());
        assert!(validate_registration("ana", "", "longenough", "longenough").is_err());
        assert!(validate_registration("ana", "a@b.c", "", "").is_err());
    }

    #[test]
    fn short_passwords_are_rejected() {
        assert!(validate_registration("ana", "a@b.c", "short", "short").is_err());
    }

    #[test]
    fn mismatched_confirmation_is_rejected() {
        assert!(validate_registration("ana", "a@b.c", "longenough", "different").is_err());
    }

    #[test]
    fn valid_input_passes() {
        assert!(validate_registration("ana", "a@b.c", "longenough", "longenough").is_ok());
    }
}
