//! Typed request/response protocol for the CampusQA REST API.
//!
//! Each request type carries its HTTP method, its path (including path
//! parameters and query string) and the response type it decodes to, so the
//! client and the hooks never touch raw paths or untyped payloads.

use crate::{
    Answer, Category, Favorite, Question, Report, ReportStatus, ReportableType, Role, Tag, User,
    VoteAction, VoteTarget, VoteValue,
};
use serde::{Deserialize, Serialize, de::DeserializeOwned};

/// HTTP Methods for API Requests
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Delete => "DELETE",
        }
    }

    /// Whether a request with this method carries a JSON body.
    pub fn has_body(&self) -> bool {
        matches!(self, HttpMethod::Post | HttpMethod::Put)
    }
}

/// A trait that defines the request-response relationship and metadata for an
/// API endpoint.
///
/// `path()` is a method rather than a constant because most endpoints embed a
/// resource id or a query string.
pub trait ApiRequest: Serialize {
    /// The response type returned by this request.
    type Response: DeserializeOwned;
    /// The HTTP method.
    const METHOD: HttpMethod;
    /// The URL path below the API base, starting with `/`.
    fn path(&self) -> String;
}

// =========================================================
// Query-string helpers
// =========================================================

/// Percent-encode a query value (RFC 3986 unreserved set kept verbatim).
pub fn encode_query_value(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for byte in value.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                out.push(byte as char)
            }
            _ => out.push_str(&format!("%{:02X}", byte)),
        }
    }
    out
}

/// Build a query string from (key, value) pairs; empty input yields "".
pub fn build_query(pairs: &[(&str, String)]) -> String {
    if pairs.is_empty() {
        return String::new();
    }
    let encoded: Vec<String> = pairs
        .iter()
        .map(|(k, v)| format!("{}={}", k, encode_query_value(v)))
        .collect();
    format!("?{}", encoded.join("&"))
}

// =========================================================
// Shared response envelopes
// =========================================================

/// Generic `{ "message": ... }` acknowledgement; tolerates an empty body.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MessageResponse {
    pub message: Option<String>,
}

/// Backend pagination envelope (`data` plus optional page metadata).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Paginated<T> {
    pub data: Vec<T>,
    #[serde(default)]
    pub current_page: Option<u64>,
    #[serde(default)]
    pub last_page: Option<u64>,
    #[serde(default)]
    pub total: Option<u64>,
}

// =========================================================
// Auth
// =========================================================

/// Authenticate with email + password.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthResponse {
    pub token: String,
    pub user: User,
}

impl ApiRequest for LoginRequest {
    type Response = AuthResponse;
    const METHOD: HttpMethod = HttpMethod::Post;
    fn path(&self) -> String {
        "/auth/login".to_string()
    }
}

/// Create an account; the backend validates per field and may return a
/// structured error map.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    pub password_confirmation: String,
}

impl ApiRequest for RegisterRequest {
    type Response = AuthResponse;
    const METHOD: HttpMethod = HttpMethod::Post;
    fn path(&self) -> String {
        "/auth/register".to_string()
    }
}

/// Fetch the user owning the current bearer token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MeRequest;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MeResponse {
    pub user: User,
}

impl ApiRequest for MeRequest {
    type Response = MeResponse;
    const METHOD: HttpMethod = HttpMethod::Get;
    fn path(&self) -> String {
        "/auth/me".to_string()
    }
}

/// Invalidate the current token server-side.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogoutRequest;

impl ApiRequest for LogoutRequest {
    type Response = MessageResponse;
    const METHOD: HttpMethod = HttpMethod::Post;
    fn path(&self) -> String {
        "/auth/logout".to_string()
    }
}

// =========================================================
// Questions
// =========================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortOrder {
    Recent,
    Votes,
    Views,
}

impl SortOrder {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::Recent => "recent",
            SortOrder::Votes => "votes",
            SortOrder::Views => "views",
        }
    }
}

/// Filters for the public question listing; turned into a query string with a
/// deterministic parameter order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QuestionFilters {
    pub search: Option<String>,
    pub category_id: Option<u64>,
    pub tag_id: Option<u64>,
    pub sort: Option<SortOrder>,
    pub page: Option<u64>,
}

impl QuestionFilters {
    pub fn to_query(&self) -> String {
        let mut pairs: Vec<(&str, String)> = Vec::new();
        if let Some(search) = &self.search {
            if !search.is_empty() {
                pairs.push(("search", search.clone()));
            }
        }
        if let Some(id) = self.category_id {
            pairs.push(("category_id", id.to_string()));
        }
        if let Some(id) = self.tag_id {
            pairs.push(("tag_id", id.to_string()));
        }
        if let Some(sort) = self.sort {
            pairs.push(("sort", sort.as_str().to_string()));
        }
        if let Some(page) = self.page {
            pairs.push(("page", page.to_string()));
        }
        build_query(&pairs)
    }
}

/// List public questions with optional filters.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListQuestionsRequest {
    #[serde(flatten)]
    pub filters: QuestionFilters,
}

impl ApiRequest for ListQuestionsRequest {
    type Response = Paginated<Question>;
    const METHOD: HttpMethod = HttpMethod::Get;
    fn path(&self) -> String {
        format!("/public/questions{}", self.filters.to_query())
    }
}

/// Fetch one question with its answers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GetQuestionRequest {
    pub id: u64,
}

impl ApiRequest for GetQuestionRequest {
    type Response = Question;
    const METHOD: HttpMethod = HttpMethod::Get;
    fn path(&self) -> String {
        format!("/public/questions/{}", self.id)
    }
}

/// Publish a new question.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateQuestionRequest {
    pub title: String,
    pub content: String,
    pub category_id: u64,
    pub tags: Vec<u64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreatedQuestion {
    pub question: Question,
}

impl ApiRequest for CreateQuestionRequest {
    type Response = CreatedQuestion;
    const METHOD: HttpMethod = HttpMethod::Post;
    fn path(&self) -> String {
        "/questions".to_string()
    }
}

// =========================================================
// Answers
// =========================================================

/// Post an answer to a question.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateAnswerRequest {
    pub content: String,
    pub question_id: u64,
}

impl ApiRequest for CreateAnswerRequest {
    type Response = Answer;
    const METHOD: HttpMethod = HttpMethod::Post;
    fn path(&self) -> String {
        "/answers".to_string()
    }
}

/// Mark an answer as the accepted one (question owner only, enforced
/// server-side).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarkBestAnswerRequest {
    #[serde(skip_serializing)]
    pub answer_id: u64,
}

impl ApiRequest for MarkBestAnswerRequest {
    type Response = MessageResponse;
    const METHOD: HttpMethod = HttpMethod::Post;
    fn path(&self) -> String {
        format!("/answers/{}/mark-as-best", self.answer_id)
    }
}

// =========================================================
// Votes
// =========================================================

/// Cast, flip or retract a vote on a question or answer. The backend answers
/// with the action it actually took.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VoteRequest {
    pub votable_type: VoteTarget,
    pub votable_id: u64,
    pub value: VoteValue,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VoteResponse {
    pub action: VoteAction,
    #[serde(default)]
    pub message: Option<String>,
}

impl ApiRequest for VoteRequest {
    type Response = VoteResponse;
    const METHOD: HttpMethod = HttpMethod::Post;
    fn path(&self) -> String {
        "/votes".to_string()
    }
}

// =========================================================
// Favorites
// =========================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddFavoriteRequest {
    pub question_id: u64,
}

impl ApiRequest for AddFavoriteRequest {
    type Response = MessageResponse;
    const METHOD: HttpMethod = HttpMethod::Post;
    fn path(&self) -> String {
        "/favorites".to_string()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RemoveFavoriteRequest {
    pub question_id: u64,
}

impl ApiRequest for RemoveFavoriteRequest {
    type Response = MessageResponse;
    const METHOD: HttpMethod = HttpMethod::Delete;
    fn path(&self) -> String {
        format!("/favorites/{}", self.question_id)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckFavoriteRequest {
    pub question_id: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckFavoriteResponse {
    pub is_favorite: bool,
}

impl ApiRequest for CheckFavoriteRequest {
    type Response = CheckFavoriteResponse;
    const METHOD: HttpMethod = HttpMethod::Get;
    fn path(&self) -> String {
        format!("/favorites/check/{}", self.question_id)
    }
}

/// List the current user's favorites (questions included).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListFavoritesRequest;

impl ApiRequest for ListFavoritesRequest {
    type Response = Vec<Favorite>;
    const METHOD: HttpMethod = HttpMethod::Get;
    fn path(&self) -> String {
        "/favorites".to_string()
    }
}

// =========================================================
// Reports
// =========================================================

/// Flag a question or answer for moderation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateReportRequest {
    pub reportable_type: ReportableType,
    pub reportable_id: u64,
    pub reason: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl ApiRequest for CreateReportRequest {
    type Response = MessageResponse;
    const METHOD: HttpMethod = HttpMethod::Post;
    fn path(&self) -> String {
        "/reports".to_string()
    }
}

// =========================================================
// Public catalog
// =========================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListCategoriesRequest;

impl ApiRequest for ListCategoriesRequest {
    type Response = Vec<Category>;
    const METHOD: HttpMethod = HttpMethod::Get;
    fn path(&self) -> String {
        "/public/categories".to_string()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListTagsRequest;

impl ApiRequest for ListTagsRequest {
    type Response = Vec<Tag>;
    const METHOD: HttpMethod = HttpMethod::Get;
    fn path(&self) -> String {
        "/public/tags".to_string()
    }
}

// =========================================================
// Profile
// =========================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserQuestionsRequest {
    pub user_id: u64,
}

impl ApiRequest for UserQuestionsRequest {
    type Response = Vec<Question>;
    const METHOD: HttpMethod = HttpMethod::Get;
    fn path(&self) -> String {
        format!("/users/{}/questions", self.user_id)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserAnswersRequest {
    pub user_id: u64,
}

impl ApiRequest for UserAnswersRequest {
    type Response = Vec<Answer>;
    const METHOD: HttpMethod = HttpMethod::Get;
    fn path(&self) -> String {
        format!("/users/{}/answers", self.user_id)
    }
}

/// Activity summary shown on the profile page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserActivityRequest;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserActivity {
    pub questions_count: u64,
    pub answers_count: u64,
    pub favorites_count: u64,
    pub reputation: i64,
}

impl ApiRequest for UserActivityRequest {
    type Response = UserActivity;
    const METHOD: HttpMethod = HttpMethod::Get;
    fn path(&self) -> String {
        "/dashboard/user-activity".to_string()
    }
}

// =========================================================
// Administration
// =========================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdminStatsRequest;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AdminStats {
    pub total_users: u64,
    pub total_questions: u64,
    pub total_answers: u64,
    pub total_reports: u64,
    pub recent_users: u64,
    pub recent_questions: u64,
    pub pending_reports: u64,
}

impl ApiRequest for AdminStatsRequest {
    type Response = AdminStats;
    const METHOD: HttpMethod = HttpMethod::Get;
    fn path(&self) -> String {
        "/admin/stats".to_string()
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AdminListUsersRequest {
    pub search: Option<String>,
    pub page: Option<u64>,
}

impl ApiRequest for AdminListUsersRequest {
    type Response = Paginated<User>;
    const METHOD: HttpMethod = HttpMethod::Get;
    fn path(&self) -> String {
        let mut pairs: Vec<(&str, String)> = Vec::new();
        if let Some(search) = &self.search {
            if !search.is_empty() {
                pairs.push(("search", search.clone()));
            }
        }
        if let Some(page) = self.page {
            pairs.push(("page", page.to_string()));
        }
        format!("/admin/users{}", build_query(&pairs))
    }
}

/// Change a user's role (id travels in the path, the role in the body).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdminUpdateUserRoleRequest {
    #[serde(skip_serializing)]
    pub user_id: u64,
    pub role: Role,
}

impl ApiRequest for AdminUpdateUserRoleRequest {
    type Response = MessageResponse;
    const METHOD: HttpMethod = HttpMethod::Put;
    fn path(&self) -> String {
        format!("/admin/users/{}", self.user_id)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdminDeleteUserRequest {
    pub user_id: u64,
}

impl ApiRequest for AdminDeleteUserRequest {
    type Response = MessageResponse;
    const METHOD: HttpMethod = HttpMethod::Delete;
    fn path(&self) -> String {
        format!("/admin/users/{}", self.user_id)
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AdminListReportsRequest {
    pub status: Option<ReportStatus>,
}

impl ApiRequest for AdminListReportsRequest {
    type Response = Paginated<Report>;
    const METHOD: HttpMethod = HttpMethod::Get;
    fn path(&self) -> String {
        let mut pairs: Vec<(&str, String)> = Vec::new();
        if let Some(status) = self.status {
            pairs.push(("status", status.as_str().to_string()));
        }
        format!("/admin/reports{}", build_query(&pairs))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdminUpdateReportRequest {
    #[serde(skip_serializing)]
    pub report_id: u64,
    pub status: ReportStatus,
}

impl ApiRequest for AdminUpdateReportRequest {
    type Response = MessageResponse;
    const METHOD: HttpMethod = HttpMethod::Put;
    fn path(&self) -> String {
        format!("/admin/reports/{}", self.report_id)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdminDeleteReportRequest {
    pub report_id: u64,
}

impl ApiRequest for AdminDeleteReportRequest {
    type Response = MessageResponse;
    const METHOD: HttpMethod = HttpMethod::Delete;
    fn path(&self) -> String {
        format!("/admin/reports/{}", self.report_id)
    }
}

/// Admin view of the category list (includes unused categories).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdminListCategoriesRequest;

impl ApiRequest for AdminListCategoriesRequest {
    type Response = Vec<Category>;
    const METHOD: HttpMethod = HttpMethod::Get;
    fn path(&self) -> String {
        "/admin/categories".to_string()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdminCreateCategoryRequest {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl ApiRequest for AdminCreateCategoryRequest {
    type Response = Category;
    const METHOD: HttpMethod = HttpMethod::Post;
    fn path(&self) -> String {
        "/admin/categories".to_string()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdminUpdateCategoryRequest {
    #[serde(skip_serializing)]
    pub category_id: u64,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl ApiRequest for AdminUpdateCategoryRequest {
    type Response = Category;
    const METHOD: HttpMethod = HttpMethod::Put;
    fn path(&self) -> String {
        format!("/admin/categories/{}", self.category_id)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdminDeleteCategoryRequest {
    pub category_id: u64,
}

impl ApiRequest for AdminDeleteCategoryRequest {
    type Response = MessageResponse;
    const METHOD: HttpMethod = HttpMethod::Delete;
    fn path(&self) -> String {
        format!("/admin/categories/{}", self.category_id)
    }
}

/// Admin view of the tag list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdminListTagsRequest;

impl ApiRequest for AdminListTagsRequest {
    type Response = Vec<Tag>;
    const METHOD: HttpMethod = HttpMethod::Get;
    fn path(&self) -> String {
        "/admin/tags".to_string()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdminCreateTagRequest {
    pub name: String,
}

impl ApiRequest for AdminCreateTagRequest {
    type Response = Tag;
    const METHOD: HttpMethod = HttpMethod::Post;
    fn path(&self) -> String {
        "/admin/tags".to_string()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdminUpdateTagRequest {
    #[serde(skip_serializing)]
    pub tag_id: u64,
    pub name: String,
}

impl ApiRequest for AdminUpdateTagRequest {
    type Response = Tag;
    const METHOD: HttpMethod = HttpMethod::Put;
    fn path(&self) -> String {
        format!("/admin/tags/{}", self.tag_id)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdminDeleteTagRequest {
    pub tag_id: u64,
}

impl ApiRequest for AdminDeleteTagRequest {
    type Response = MessageResponse;
    const METHOD: HttpMethod = HttpMethod::Delete;
    fn path(&self) -> String {
        format!("/admin/tags/{}", self.tag_id)
    }
}

// =========================================================
// Tests
// =========================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn auth_paths_and_methods() {
        let login = LoginRequest {
            email: "a@b.c".into(),
            password: "secret".into(),
        };
        assert_eq!(login.path(), "/auth/login");
        assert_eq!(LoginRequest::METHOD, HttpMethod::Post);
        assert_eq!(MeRequest.path(), "/auth/me");
        assert_eq!(MeRequest::METHOD, HttpMethod::Get);
        assert_eq!(LogoutRequest.path(), "/auth/logout");
    }

    #[test]
    fn resource_paths_embed_ids() {
        assert_eq!(GetQuestionRequest { id: 42 }.path(), "/public/questions/42");
        assert_eq!(
            RemoveFavoriteRequest { question_id: 9 }.path(),
            "/favorites/9"
        );
        assert_eq!(
            CheckFavoriteRequest { question_id: 9 }.path(),
            "/favorites/check/9"
        );
        assert_eq!(
            MarkBestAnswerRequest { answer_id: 3 }.path(),
            "/answers/3/mark-as-best"
        );
        assert_eq!(
            AdminUpdateUserRoleRequest {
                user_id: 5,
                role: Role::Moderator
            }
            .path(),
            "/admin/users/5"
        );
    }

    #[test]
    fn query_encoding_escapes_reserved_characters() {
        assert_eq!(encode_query_value("rust lang"), "rust%20lang");
        assert_eq!(encode_query_value("a&b=c"), "a%26b%3Dc");
        assert_eq!(encode_query_value("plain-value_1.~"), "plain-value_1.~");
    }

    #[test]
    fn question_filters_build_deterministic_query() {
        let filters = QuestionFilters {
            search: Some("borrow checker".into()),
            category_id: Some(2),
            tag_id: None,
            sort: Some(SortOrder::Votes),
            page: Some(3),
        };
        assert_eq!(
            ListQuestionsRequest { filters }.path(),
            "/public/questions?search=borrow%20checker&category_id=2&sort=votes&page=3"
        );
    }

    #[test]
    fn empty_filters_add_no_query() {
        let req = ListQuestionsRequest::default();
        assert_eq!(req.path(), "/public/questions");
        let blank_search = QuestionFilters {
            search: Some(String::new()),
            ..Default::default()
        };
        assert_eq!(blank_search.to_query(), "");
    }

    #[test]
    fn path_only_fields_stay_out_of_the_body() {
        let req = AdminUpdateUserRoleRequest {
            user_id: 5,
            role: Role::Admin,
        };
        let body = serde_json::to_value(&req).unwrap();
        assert_eq!(body, serde_json::json!({ "role": "admin" }));

        let mark = MarkBestAnswerRequest { answer_id: 3 };
        assert_eq!(serde_json::to_value(&mark).unwrap(), serde_json::json!({}));
    }

    #[test]
    fn vote_request_body_shape() {
        let req = VoteRequest {
            votable_type: VoteTarget::Answer,
            votable_id: 17,
            value: VoteValue::Down,
        };
        let body = serde_json::to_value(&req).unwrap();
        assert_eq!(
            body,
            serde_json::json!({
                "votable_type": "answer",
                "votable_id": 17,
                "value": -1
            })
        );
    }

    #[test]
    fn message_response_tolerates_empty_object() {
        let r: MessageResponse = serde_json::from_str("{}").unwrap();
        assert!(r.message.is_none());
    }

    #[test]
    fn paginated_envelope_round_trip() {
        let json = r#"{"data":[{"id":1,"name":"Rust"}],"current_page":1,"last_page":4,"total":40}"#;
        let page: Paginated<Category> = serde_json::from_str(json).unwrap();
        assert_eq!(page.data.len(), 1);
        assert_eq!(page.last_page, Some(4));
    }

    #[test]
    fn admin_report_filter_query() {
        let req = AdminListReportsRequest {
            status: Some(ReportStatus::Pending),
        };
        assert_eq!(req.path(), "/admin/reports?status=pending");
        assert_eq!(AdminListReportsRequest::default().path(), "/admin/reports");
    }
}
