//! API 客户端模块
//!
//! 统一的请求管线：每次请求从本地存储读取令牌并注入 Bearer 头；
//! 响应侧集中处理两类情况（422 校验失败的全局提示、401 未认证的
//! 令牌清除与条件重定向），其余错误原样上抛给调用方。
//! 客户端不持有任何实体数据。

use crate::error::{ApiError, ApiResult};
use crate::web::events::dispatch_show_toast;
use crate::web::{HttpClient, LocalStorage};
use campusqa_shared::protocol::{ApiRequest, HttpMethod};
use campusqa_shared::{BEARER_PREFIX, HEADER_AUTHORIZATION};
use leptos::prelude::*;
use serde::Serialize;
use serde::de::DeserializeOwned;

/// 本地存储中保存会话令牌的键
pub const TOKEN_STORAGE_KEY: &str = "campusqa_token";

/// 默认 API 根路径；可通过编译期环境变量 `CAMPUSQA_API_BASE` 覆盖
const DEFAULT_API_BASE: &str = "/api";

/// 401 重定向的豁免路径：公共页面偶发调用认证接口时避免重定向循环
const REDIRECT_EXEMPT_PATHS: [&str; 3] = ["/", "/login", "/register"];

// =========================================================
// 响应拦截决策
// =========================================================

/// 响应拦截决策
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Interception {
    /// 无需介入，错误原样上抛
    PassThrough,
    /// 422：以全局 toast 公告后端消息，再上抛
    ValidationToast(String),
    /// 401 未认证：清除令牌；`redirect` 指示是否跳转登录页
    SessionExpired { redirect: bool },
}

impl Interception {
    /// 纯决策函数：错误 + 当前路径 -> 动作
    ///
    /// 优先级：校验失败 > 会话失效 > 透传。
    pub fn classify(err: &ApiError, current_path: &str) -> Self {
        if err.is_validation() {
            return Interception::ValidationToast(err.message.clone());
        }
        if err.has_unauthenticated_marker() {
            let exempt = REDIRECT_EXEMPT_PATHS.contains(&current_path);
            return Interception::SessionExpired { redirect: !exempt };
        }
        Interception::PassThrough
    }
}

// =========================================================
// 客户端
// =========================================================

#[derive(Clone, Debug, PartialEq)]
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { base_url }
    }

    /// 以编译期配置的根路径构造
    pub fn from_env() -> Self {
        Self::new(option_env!("CAMPUSQA_API_BASE").unwrap_or(DEFAULT_API_BASE))
    }

    fn url(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{}", self.base_url, path)
        } else {
            format!("{}/{}", self.base_url, path)
        }
    }

    /// 发送一个类型化请求
    pub async fn send<R: ApiRequest>(&self, request: &R) -> ApiResult<R::Response> {
        let body = if R::METHOD.has_body() {
            Some(
                serde_json::to_string(request)
                    .map_err(|e| ApiError::serialization(e.to_string()))?,
            )
        } else {
            None
        };
        self.dispatch(R::METHOD, &request.path(), body).await
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> ApiResult<T> {
        self.dispatch(HttpMethod::Get, path, None).await
    }

    pub async fn post<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> ApiResult<T> {
        let body = serde_json::to_string(body).map_err(|e| ApiError::serialization(e.to_string()))?;
        self.dispatch(HttpMethod::Post, path, Some(body)).await
    }

    pub async fn put<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> ApiResult<T> {
        let body = serde_json::to_string(body).map_err(|e| ApiError::serialization(e.to_string()))?;
        self.dispatch(HttpMethod::Put, path, Some(body)).await
    }

    pub async fn delete<T: DeserializeOwned>(&self, path: &str) -> ApiResult<T> {
        self.dispatch(HttpMethod::Delete, path, None).await
    }

    async fn dispatch<T: DeserializeOwned>(
        &self,
        method: HttpMethod,
        path: &str,
        body: Option<String>,
    ) -> ApiResult<T> {
        let mut builder =
            HttpClient::request(method, &self.url(path)).header("Accept", "application/json");

        if let Some(token) = LocalStorage::get(TOKEN_STORAGE_KEY) {
            builder = builder.header(
                HEADER_AUTHORIZATION,
                &format!("{}{}", BEARER_PREFIX, token),
            );
        }

        if let Some(body) = body {
            builder = builder
                .header("Content-Type", "application/json")
                .body(body);
        }

        let response = builder
            .send()
            .await
            .map_err(|e| ApiError::network(e.to_string()))?;

        let status = response.status();
        let ok = response.ok();
        let text = response
            .text()
            .await
            .map_err(|e| ApiError::serialization(e.to_string()))?;

        if !ok {
            let err = ApiError::from_response(status, &text);
            self.intercept(&err);
            return Err(err);
        }

        // 确认类接口可能返回空体（204），按空对象解码
        let text = if text.trim().is_empty() {
            "{}".to_string()
        } else {
            text
        };
        serde_json::from_str(&text).map_err(|e| ApiError::serialization(e.to_string()))
    }

    /// 响应拦截：仅处理两类全局情况，其余错误交由调用方
    fn intercept(&self, err: &ApiError) {
        match Interception::classify(err, &current_path()) {
            Interception::ValidationToast(message) => {
                dispatch_show_toast(&message, "error");
            }
            Interception::SessionExpired { redirect } => {
                LocalStorage::delete(TOKEN_STORAGE_KEY);
                web_sys::console::warn_1(&"[Api] 会话已失效，令牌已清除".into());
                if redirect {
                    redirect_to_login();
                }
            }
            Interception::PassThrough => {}
        }
    }
}

fn current_path() -> String {
    web_sys::window()
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_else(|| "/".to_string())
}

/// 客户端位于组件树之外，重定向直接走 location 而非路由服务
fn redirect_to_login() {
    if let Some(window) = web_sys::window() {
        let _ = window.location().set_href("/login");
    }
}

// =========================================================
// Context
// =========================================================

/// 将客户端注入 Context
pub fn provide_api(client: ApiClient) {
    provide_context(client);
}

/// 从 Context 获取客户端
pub fn use_api() -> ApiClient {
    use_context::<ApiClient>().expect("ApiClient should be provided")
}

// =========================================================
// Tests
// =========================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn validation_err(message: &str) -> ApiError {
        ApiError::from_response(422, &format!(r#"{{"message":"{}"}}"#, message))
    }

    #[test]
    fn validation_failures_are_toasted_everywhere() {
        let err = validation_err("The title field is required.");
        for path in ["/", "/login", "/ask", "/questions/5"] {
            assert_eq!(
                Interception::classify(&err, path),
                Interception::ValidationToast("The title field is required.".to_string()),
            );
        }
    }

    #[test]
    fn unauthenticated_marker_redirects_outside_public_pages() {
        let err = ApiError::from_response(401, r#"{"message":"Unauthenticated."}"#);
        assert_eq!(
            Interception::classify(&err, "/questions/5"),
            Interception::SessionExpired { redirect: true },
        );
        assert_eq!(
            Interception::classify(&err, "/profile"),
            Interception::SessionExpired { redirect: true },
        );
    }

    #[test]
    fn unauthenticated_marker_skips_redirect_on_exempt_paths() {
        let err = ApiError::from_response(401, r#"{"message":"Unauthenticated."}"#);
        for path in REDIRECT_EXEMPT_PATHS {
            assert_eq!(
                Interception::classify(&err, path),
                Interception::SessionExpired { redirect: false },
            );
        }
    }

    #[test]
    fn plain_401_passes_through() {
        let err = ApiError::from_response(401, r#"{"message":"Token mismatch"}"#);
        assert_eq!(
            Interception::classify(&err, "/profile"),
            Interception::PassThrough
        );
    }

    #[test]
    fn server_and_network_errors_pass_through() {
        let server = ApiError::from_response(500, r#"{"message":"boom"}"#);
        assert_eq!(
            Interception::classify(&server, "/profile"),
            Interception::PassThrough
        );
        let network = ApiError::network("connection refused");
        assert_eq!(
            Interception::classify(&network, "/"),
            Interception::PassThrough
        );
    }

    #[test]
    fn base_url_is_normalized() {
        let client = ApiClient::new("https://api.campusqa.dev/api/");
        assert_eq!(
            client.url("/auth/me"),
            "https://api.campusqa.dev/api/auth/me"
        );
        assert_eq!(
            client.url("auth/me"),
            "https://api.campusqa.dev/api/auth/me"
        );
    }
}
