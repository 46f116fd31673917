//! CampusQA 共享数据模型
//!
//! 前端与后端 REST API 之间的线上契约：领域 DTO、枚举与常量。
//! 后端是唯一的数据权威，这里的记录仅作为每次请求的不可变快照。

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub mod protocol;

// =========================================================
// 常量定义 (Constants)
// =========================================================

/// 认证头名称
pub const HEADER_AUTHORIZATION: &str = "Authorization";
/// Bearer 凭据前缀
pub const BEARER_PREFIX: &str = "Bearer ";
/// 后端在 401 响应消息中携带的"未认证"标记
pub const UNAUTHENTICATED_MARKER: &str = "Unauthenticated";

// =========================================================
// 用户与权限 (Users & Roles)
// =========================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Admin,
    Moderator,
    User,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Moderator => "moderator",
            Role::User => "user",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "admin" => Some(Role::Admin),
            "moderator" => Some(Role::Moderator),
            "user" => Some(Role::User),
            _ => None,
        }
    }

    /// 所有角色，用于管理界面的下拉选择
    pub fn all() -> [Role; 3] {
        [Role::Admin, Role::Moderator, Role::User]
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: u64,
    pub name: String,
    pub email: String,
    pub role: Role,
    #[serde(default)]
    pub reputation: i64,
}

// =========================================================
// 问答领域模型 (Q&A Domain Models)
// =========================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tag {
    pub id: u64,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: u64,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionStatus {
    Open,
    Resolved,
    Closed,
}

impl QuestionStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            QuestionStatus::Open => "open",
            QuestionStatus::Resolved => "resolved",
            QuestionStatus::Closed => "closed",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Answer {
    pub id: u64,
    pub content: String,
    #[serde(default)]
    pub is_best_answer: bool,
    #[serde(default)]
    pub votes: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<User>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Question {
    pub id: u64,
    pub title: String,
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<QuestionStatus>,
    #[serde(default)]
    pub votes: i64,
    #[serde(default)]
    pub views: u64,
    pub user: User,
    pub category: Category,
    #[serde(default)]
    pub tags: Vec<Tag>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub answers: Option<Vec<Answer>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Favorite {
    pub id: u64,
    pub user_id: u64,
    pub question_id: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub question: Option<Question>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

// =========================================================
// 投票 (Votes)
// =========================================================

/// 投票目标类型
///
/// 替代后端内部的模型类名，线上值为 `question` / `answer`。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VoteTarget {
    Question,
    Answer,
}

/// 投票值，线上序列化为整数 `1` / `-1`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "i8", try_from = "i8")]
pub enum VoteValue {
    Up,
    Down,
}

impl VoteValue {
    /// 乐观更新时施加到本地显示分数上的增量
    pub fn delta(self) -> i64 {
        match self {
            VoteValue::Up => 1,
            VoteValue::Down => -1,
        }
    }
}

impl From<VoteValue> for i8 {
    fn from(v: VoteValue) -> i8 {
        match v {
            VoteValue::Up => 1,
            VoteValue::Down => -1,
        }
    }
}

impl TryFrom<i8> for VoteValue {
    type Error = String;

    fn try_from(v: i8) -> Result<Self, Self::Error> {
        match v {
            1 => Ok(VoteValue::Up),
            -1 => Ok(VoteValue::Down),
            other => Err(format!("invalid vote value: {}", other)),
        }
    }
}

/// 后端对投票请求的动作指示
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VoteAction {
    Created,
    Updated,
    Removed,
}

// =========================================================
// 举报 (Reports)
// =========================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportableType {
    Question,
    Answer,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportStatus {
    Pending,
    Reviewed,
    Dismissed,
}

impl ReportStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReportStatus::Pending => "pending",
            ReportStatus::Reviewed => "reviewed",
            ReportStatus::Dismissed => "dismissed",
        }
    }

    pub fn all() -> [ReportStatus; 3] {
        [
            ReportStatus::Pending,
            ReportStatus::Reviewed,
            ReportStatus::Dismissed,
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    pub id: u64,
    pub reason: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub status: ReportStatus,
    pub reportable_type: ReportableType,
    pub reportable_id: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<User>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

// =========================================================
// Tests
// =========================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vote_value_serializes_as_integer() {
        assert_eq!(serde_json::to_string(&VoteValue::Up).unwrap(), "1");
        assert_eq!(serde_json::to_string(&VoteValue::Down).unwrap(), "-1");
    }

    #[test]
    fn vote_value_rejects_out_of_range() {
        assert!(serde_json::from_str::<VoteValue>("0").is_err());
        assert!(serde_json::from_str::<VoteValue>("2").is_err());
        assert_eq!(
            serde_json::from_str::<VoteValue>("-1").unwrap(),
            VoteValue::Down
        );
    }

    #[test]
    fn vote_value_delta_matches_wire_value() {
        assert_eq!(VoteValue::Up.delta(), 1);
        assert_eq!(VoteValue::Down.delta(), -1);
    }

    #[test]
    fn role_round_trip() {
        for role in Role::all() {
            assert_eq!(Role::parse(role.as_str()), Some(role));
            let json = serde_json::to_string(&role).unwrap();
            assert_eq!(json, format!("\"{}\"", role.as_str()));
        }
        assert_eq!(Role::parse("root"), None);
    }

    #[test]
    fn question_deserializes_with_missing_counters() {
        let json = r#"{
            "id": 7,
            "title": "Borrow checker question",
            "content": "Why does this not compile?",
            "user": {"id": 1, "name": "ana", "email": "ana@uni.edu", "role": "user"},
            "category": {"id": 2, "name": "Rust"},
            "tags": [{"id": 3, "name": "ownership"}]
        }"#;
        let q: Question = serde_json::from_str(json).unwrap();
        assert_eq!(q.votes, 0);
        assert_eq!(q.views, 0);
        assert_eq!(q.user.reputation, 0);
        assert!(q.answers.is_none());
        assert!(q.status.is_none());
    }

    #[test]
    fn report_status_wire_names() {
        let r: ReportStatus = serde_json::from_str("\"pending\"").unwrap();
        assert_eq!(r, ReportStatus::Pending);
        assert_eq!(
            serde_json::to_string(&ReportStatus::Dismissed).unwrap(),
            "\"dismissed\""
        );
    }

    #[test]
    fn vote_target_wire_names() {
        assert_eq!(
            serde_json::to_string(&VoteTarget::Question).unwrap(),
            "\"question\""
        );
        assert_eq!(
            serde_json::from_str::<VoteTarget>("\"answer\"").unwrap(),
            VoteTarget::Answer
        );
    }
}
