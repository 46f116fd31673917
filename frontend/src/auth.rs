//! 认证模块
//!
//! 管理会话状态（当前用户 + 令牌）。会话状态机：
//! unauthenticated -> loading -> {authenticated | unauthenticated}。
//! 令牌是唯一跨组件共享的可变资源：login/register 写入，
//! logout 与 401 处理清除，HTTP 客户端只读。

use crate::api::{ApiClient, TOKEN_STORAGE_KEY};
use crate::error::ApiError;
use crate::web::LocalStorage;
use campusqa_shared::User;
use campusqa_shared::protocol::{LoginRequest, LogoutRequest, MeRequest, RegisterRequest};
use leptos::prelude::*;

/// 认证状态
#[derive(Clone, Default)]
pub struct AuthState {
    /// 当前用户（仅认证成功后存在）
    pub user: Option<User>,
    /// 会话检查或登录/注册是否仍在进行
    pub is_loading: bool,
    /// 最近一次 login/register 的错误消息（表单就地展示用）
    pub error: Option<String>,
}

/// 认证上下文
///
/// 包含读写信号，通过 Context 在组件间共享。
#[derive(Clone, Copy)]
pub struct AuthContext {
    /// 认证状态（只读）
    pub state: ReadSignal<AuthState>,
    /// 设置认证状态（写入）
    pub set_state: WriteSignal<AuthState>,
}

impl AuthContext {
    /// 创建新的认证上下文
    pub fn new() -> Self {
        let (state, set_state) = signal(AuthState::default());
        Self { state, set_state }
    }

    /// 当前用户信号（守卫与导航栏使用）
    pub fn user_signal(&self) -> Signal<Option<User>> {
        let state = self.state;
        Signal::derive(move || state.get().user)
    }

    /// 是否已认证
    pub fn is_authenticated_signal(&self) -> Signal<bool> {
        let state = self.state;
        Signal::derive(move || state.get().user.is_some())
    }
}

/// 从 Context 获取认证上下文
pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>().expect("AuthContext should be provided")
}

/// 初次挂载时的会话恢复：存在令牌则拉取当前用户
pub fn init_auth(ctx: &AuthContext, api: &ApiClient) {
    if LocalStorage::get(TOKEN_STORAGE_KEY).is_none() {
        ctx.set_state.update(|state| state.is_loading = false);
        return;
    }

    ctx.set_state.update(|state| state.is_loading = true);
    let ctx = *ctx;
    let api = api.clone();
    leptos::task::spawn_local(async move {
        fetch_current_user(&ctx, &api).await;
    });
}

/// 初始会话检查对失败的分类：仅认证拒绝（401/403）清除会话。
/// 瞬时失败（网络/5xx）保留调用前的会话状态，不强制登出。
fn should_purge_session(err: &ApiError) -> bool {
    err.is_session_rejection()
}

/// 拉取当前用户并按上述弹性策略更新状态
pub async fn fetch_current_user(ctx: &AuthContext, api: &ApiClient) {
    match api.send(&MeRequest).await {
        Ok(res) => ctx.set_state.update(|state| {
            state.user = Some(res.user);
            state.is_loading = false;
        }),
        Err(err) if should_purge_session(&err) => {
            LocalStorage::delete(TOKEN_STORAGE_KEY);
            ctx.set_state.update(|state| {
                state.user = None;
                state.is_loading = false;
            });
        }
        Err(err) => {
            web_sys::console::warn_1(
                &format!("[Auth] 拉取当前用户失败（保留会话）: {}", err).into(),
            );
            ctx.set_state.update(|state| state.is_loading = false);
        }
    }
}

/// 登录；成功存储令牌与用户并返回 true，
/// 失败把后端消息写入本地错误并返回 false。
pub async fn login(ctx: &AuthContext, api: &ApiClient, credentials: LoginRequest) -> bool {
    ctx.set_state.update(|state| {
        state.is_loading = true;
        state.error = None;
    });

    match api.send(&credentials).await {
        Ok(res) => {
            LocalStorage::set(TOKEN_STORAGE_KEY, &res.token);
            ctx.set_state.update(|state| {
                state.user = Some(res.user);
                state.is_loading = false;
            });
            true
        }
        Err(err) => {
            ctx.set_state.update(|state| {
                state.error = Some(err.message.clone());
                state.is_loading = false;
            });
            false
        }
    }
}

/// 注册；与登录同构，结构化的按字段错误被压平为一条消息
pub async fn register(ctx: &AuthContext, api: &ApiClient, data: RegisterRequest) -> bool {
    ctx.set_state.update(|state| {
        state.is_loading = true;
        state.error = None;
    });

    match api.send(&data).await {
        Ok(res) => {
            LocalStorage::set(TOKEN_STORAGE_KEY, &res.token);
            ctx.set_state.update(|state| {
                state.user = Some(res.user);
                state.is_loading = false;
            });
            true
        }
        Err(err) => {
            let message = err
                .flatten_field_errors()
                .unwrap_or_else(|| err.message.clone());
            ctx.set_state.update(|state| {
                state.error = Some(message);
                state.is_loading = false;
            });
            false
        }
    }
}

/// 注销：尽力调用后端失效接口；无论其结果如何，
/// 本地令牌与用户状态无条件清除（本地注销不被后端故障阻塞）。
pub async fn logout(ctx: &AuthContext, api: &ApiClient) {
    if let Err(err) = api.send(&LogoutRequest).await {
        web_sys::console::warn_1(&format!("[Auth] 后端注销失败，继续本地注销: {}", err).into());
    }

    LocalStorage::delete(TOKEN_STORAGE_KEY);
    ctx.set_state.update(|state| {
        state.user = None;
        state.error = None;
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn session_purge_only_on_auth_rejection() {
        assert!(should_purge_session(&ApiError::from_response(401, "{}")));
        assert!(should_purge_session(&ApiError::from_response(403, "{}")));

        // 瞬时失败保留会话，不登出
        assert!(!should_purge_session(&ApiError::from_response(500, "{}")));
        assert!(!should_purge_session(&ApiError::from_response(502, "{}")));
        assert!(!should_purge_session(&ApiError::network("offline")));
    }
}
