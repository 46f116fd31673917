//! API 错误类型
//!
//! 客户端侧的统一错误表示。调用方对 `ApiError` 做穷尽的模式匹配，
//! 而不是在动态结构里探查可选字段。

use campusqa_shared::UNAUTHENTICATED_MARKER;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fmt;

// =========================================================
// 错误类别
// =========================================================

/// 错误类别枚举（按 HTTP 状态语义划分）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiErrorKind {
    /// 网络层失败（未收到响应）
    Network,
    /// 请求或响应体的序列化/解析失败
    Serialization,
    /// 422: 表单校验失败
    Validation,
    /// 401: 未认证
    Unauthenticated,
    /// 403: 权限不足
    Forbidden,
    /// 404: 资源未找到
    NotFound,
    /// 409: 资源冲突
    Conflict,
    /// 5xx 及其他：服务端错误
    Server,
}

impl ApiErrorKind {
    /// 从 HTTP 状态码归类
    pub fn from_status(status: u16) -> Self {
        match status {
            401 => ApiErrorKind::Unauthenticated,
            403 => ApiErrorKind::Forbidden,
            404 => ApiErrorKind::NotFound,
            409 => ApiErrorKind::Conflict,
            422 => ApiErrorKind::Validation,
            _ => ApiErrorKind::Server,
        }
    }
}

// =========================================================
// 后端错误响应体
// =========================================================

/// 后端错误响应体：`message` + 可选的按字段错误表
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct ErrorBody {
    message: Option<String>,
    errors: Option<BTreeMap<String, Vec<String>>>,
}

// =========================================================
// 核心错误类型
// =========================================================

#[derive(Debug, Clone)]
pub struct ApiError {
    pub kind: ApiErrorKind,
    /// HTTP 状态码（网络/序列化失败时不存在）
    pub status: Option<u16>,
    pub message: String,
    /// 按字段的校验错误（通常仅 422 响应携带）
    pub field_errors: Option<BTreeMap<String, Vec<String>>>,
}

impl ApiError {
    pub fn new(kind: ApiErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            status: None,
            message: message.into(),
            field_errors: None,
        }
    }

    // --- Convenience constructors ---

    pub fn network(message: impl Into<String>) -> Self {
        Self::new(ApiErrorKind::Network, message)
    }

    pub fn serialization(message: impl Into<String>) -> Self {
        Self::new(ApiErrorKind::Serialization, message)
    }

    /// 由非 2xx 响应构造：解析响应体中的 message / errors
    pub fn from_response(status: u16, body: &str) -> Self {
        let parsed: ErrorBody = serde_json::from_str(body).unwrap_or_default();
        Self {
            kind: ApiErrorKind::from_status(status),
            status: Some(status),
            message: parsed
                .message
                .unwrap_or_else(|| format!("请求失败 ({})", status)),
            field_errors: parsed.errors,
        }
    }

    // --- Predicates ---

    pub fn is_validation(&self) -> bool {
        self.kind == ApiErrorKind::Validation
    }

    /// 401 且消息携带"未认证"标记，这是触发令牌清除与重定向的唯一条件
    pub fn has_unauthenticated_marker(&self) -> bool {
        self.kind == ApiErrorKind::Unauthenticated && self.message.contains(UNAUTHENTICATED_MARKER)
    }

    /// 会话拒绝（401/403）：初次拉取当前用户失败时据此清除本地会话
    pub fn is_session_rejection(&self) -> bool {
        matches!(
            self.kind,
            ApiErrorKind::Unauthenticated | ApiErrorKind::Forbidden
        )
    }

    /// 将按字段错误压平为一条可读消息
    ///
    /// 字段顺序由 BTreeMap 保证确定，渲染结果可复现。
    pub fn flatten_field_errors(&self) -> Option<String> {
        let errors = self.field_errors.as_ref()?;
        if errors.is_empty() {
            return None;
        }
        let parts: Vec<String> = errors
            .iter()
            .map(|(field, messages)| format!("{}: {}", field, messages.join(", ")))
            .collect();
        Some(parts.join("; "))
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.status {
            Some(status) => write!(f, "[{}] {}", status, self.message),
            None => write!(f, "[{:?}] {}", self.kind, self.message),
        }
    }
}

impl std::error::Error for ApiError {}

pub type ApiResult<T> = std::result::Result<T, ApiError>;

// =========================================================
// Tests
// =========================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_classification() {
        assert_eq!(ApiErrorKind::from_status(401), ApiErrorKind::Unauthenticated);
        assert_eq!(ApiErrorKind::from_status(403), ApiErrorKind::Forbidden);
        assert_eq!(ApiErrorKind::from_status(404), ApiErrorKind::NotFound);
        assert_eq!(ApiErrorKind::from_status(409), ApiErrorKind::Conflict);
        assert_eq!(ApiErrorKind::from_status(422), ApiErrorKind::Validation);
        assert_eq!(ApiErrorKind::from_status(500), ApiErrorKind::Server);
        assert_eq!(ApiErrorKind::from_status(503), ApiErrorKind::Server);
    }

    #[test]
    fn from_response_extracts_backend_message() {
        let err = ApiError::from_response(422, r#"{"message":"The title field is required."}"#);
        assert!(err.is_validation());
        assert_eq!(err.message, "The title field is required.");
    }

    #[test]
    fn from_response_tolerates_non_json_body() {
        let err = ApiError::from_response(502, "<html>Bad Gateway</html>");
        assert_eq!(err.kind, ApiErrorKind::Server);
        assert_eq!(err.message, "请求失败 (502)");
    }

    #[test]
    fn unauthenticated_marker_requires_both_status_and_message() {
        let with_marker = ApiError::from_response(401, r#"{"message":"Unauthenticated."}"#);
        assert!(with_marker.has_unauthenticated_marker());

        let without_marker = ApiError::from_response(401, r#"{"message":"Token mismatch"}"#);
        assert!(!without_marker.has_unauthenticated_marker());

        let wrong_status = ApiError::from_response(403, r#"{"message":"Unauthenticated."}"#);
        assert!(!wrong_status.has_unauthenticated_marker());
    }

    #[test]
    fn session_rejection_covers_401_and_403_only() {
        assert!(ApiError::from_response(401, "{}").is_session_rejection());
        assert!(ApiError::from_response(403, "{}").is_session_rejection());
        assert!(!ApiError::from_response(500, "{}").is_session_rejection());
        assert!(!ApiError::network("offline").is_session_rejection());
    }

    #[test]
    fn field_errors_flatten_deterministically() {
        let body = r#"{
            "message": "The given data was invalid.",
            "errors": {
                "name": ["The name field is required."],
                "email": ["The email has already been taken.", "The email must be valid."]
            }
        }"#;
        let err = ApiError::from_response(422, body);
        assert_eq!(
            err.flatten_field_errors().unwrap(),
            "email: The email has already been taken., The email must be valid.; \
             name: The name field is required."
        );
    }

    #[test]
    fn flatten_is_none_without_field_errors() {
        let err = ApiError::from_response(422, r#"{"message":"invalid"}"#);
        assert!(err.flatten_field_errors().is_none());

        let empty = ApiError::from_response(422, r#"{"message":"invalid","errors":{}}"#);
        assert!(empty.flatten_field_errors().is_none());
    }
}
