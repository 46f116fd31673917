//! 路由守卫组件
//!
//! 每次渲染都是认证状态的纯函数：加载中只渲染指示器；
//! 未登录重定向登录页；角色不足重定向首页；否则渲染子内容。
//! 组件自身不持有任何状态。

use crate::auth::use_auth;
use crate::web::route::AppRoute;
use crate::web::router::use_router;
use campusqa_shared::{Role, User};
use leptos::prelude::*;

/// 守卫决策
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardDecision {
    /// 会话检查未完成，先渲染加载指示
    Loading,
    /// 未登录，重定向登录页
    RedirectLogin,
    /// 已登录但角色不在允许列表，重定向首页
    RedirectHome,
    /// 放行
    Allow,
}

impl GuardDecision {
    /// 纯决策函数：认证状态 + 允许角色 -> 动作
    ///
    /// 空的角色列表表示仅要求登录。
    pub fn decide(is_loading: bool, user: Option<&User>, allowed_roles: &[Role]) -> Self {
        if is_loading {
            return GuardDecision::Loading;
        }
        let Some(user) = user else {
            return GuardDecision::RedirectLogin;
        };
        if !allowed_roles.is_empty() && !allowed_roles.contains(&user.role) {
            return GuardDecision::RedirectHome;
        }
        GuardDecision::Allow
    }
}

/// 守卫组件：包裹需要认证（可选地限定角色）的页面
#[component]
pub fn RouteGuard(
    /// 允许的角色；空表示仅要求登录
    #[prop(optional)]
    roles: Vec<Role>,
    children: ChildrenFn,
) -> impl IntoView {
    let auth = use_auth();
    let router = use_router();

    let decision = {
        let roles = roles.clone();
        Signal::derive(move || {
            let state = auth.state.get();
            GuardDecision::decide(state.is_loading, state.user.as_ref(), &roles)
        })
    };

    // 重定向作为副作用执行，渲染期只做选择
    Effect::new(move |_| match decision.get() {
        GuardDecision::RedirectLogin => router.replace(AppRoute::auth_failure_redirect()),
        GuardDecision::RedirectHome => router.replace(AppRoute::role_failure_redirect()),
        _ => {}
    });

    move || match decision.get() {
        GuardDecision::Allow => children().into_any(),
        _ => view! {
            <div class="flex items-center justify-center min-h-screen">
                <span class="loading loading-spinner loading-lg text-primary"></span>
            </div>
        }
        .into_any(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user_with_role(role: Role) -> User {
        User {
            id: 1,
            name: "ana".to_string(),
            email: "ana@uni.edu".to_string(),
            role,
            reputation: 0,
        }
    }

    #[test]
    fn loading_wins_over_everything() {
        assert_eq!(
            GuardDecision::decide(true, None, &[]),
            GuardDecision::Loading
        );
        let admin = user_with_role(Role::Admin);
        assert_eq!(
            GuardDecision::decide(true, Some(&admin), &[Role::Admin]),
            GuardDecision::Loading
        );
    }

    #[test]
    fn anonymous_user_is_sent_to_login() {
        assert_eq!(
            GuardDecision::decide(false, None, &[]),
            GuardDecision::RedirectLogin
        );
        assert_eq!(
            GuardDecision::decide(false, None, &[Role::Admin]),
            GuardDecision::RedirectLogin
        );
    }

    #[test]
    fn insufficient_role_is_sent_home() {
        let user = user_with_role(Role::User);
        assert_eq!(
            GuardDecision::decide(false, Some(&user), &[Role::Admin]),
            GuardDecision::RedirectHome
        );
        let moderator = user_with_role(Role::Moderator);
        assert_eq!(
            GuardDecision::decide(false, Some(&moderator), &[Role::Admin]),
            GuardDecision::RedirectHome
        );
    }

    #[test]
    fn matching_role_is_allowed() {
        let admin = user_with_role(Role::Admin);
        assert_eq!(
            GuardDecision::decide(false, Some(&admin), &[Role::Admin]),
            GuardDecision::Allow
        );
    }

    #[test]
    fn empty_role_list_only_requires_a_session() {
        let user = user_with_role(Role::User);
        assert_eq!(
            GuardDecision::decide(false, Some(&user), &[]),
            GuardDecision::Allow
        );
    }
}
