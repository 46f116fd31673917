//! 投票 Hook
//!
//! 成功时返回后端的动作指示，调用方据此对本地显示分数做 ±1 的
//! 乐观增量，无需重新拉取。

use super::support::with_loading;
use crate::api::{ApiClient, use_api};
use crate::error::ApiError;
use campusqa_shared::protocol::VoteRequest;
use campusqa_shared::{VoteAction, VoteTarget, VoteValue};
use leptos::prelude::*;

/// 服务端执行的已知业务规则对应的本地提示
const OWN_CONTENT_MESSAGE: &str = "不能给自己的内容投票";

/// 非 422 拒绝时展示的本地消息；422 已由 HTTP 客户端全局提示，
/// 这里刻意不再重复。
fn rejection_message(err: &ApiError) -> Option<String> {
    if err.is_validation() {
        None
    } else {
        Some(OWN_CONTENT_MESSAGE.to_string())
    }
}

#[derive(Clone)]
pub struct VotingHook {
    api: ApiClient,
    /// 调用方应以此禁用触发控件，同一控件不允许并发投票
    pub loading: RwSignal<bool>,
    pub error: RwSignal<Option<String>>,
}

pub fn use_voting() -> VotingHook {
    VotingHook {
        api: use_api(),
        loading: RwSignal::new(false),
        error: RwSignal::new(None),
    }
}

impl VotingHook {
    /// 投票；成功返回后端动作指示（created/updated/removed）
    pub async fn vote(
        &self,
        target: VoteTarget,
        votable_id: u64,
        value: VoteValue,
    ) -> Option<VoteAction> {
        self.error.set(None);
        let request = VoteRequest {
            votable_type: target,
            votable_id,
            value,
        };
        match with_loading(&self.api, self.loading, &request).await {
            Ok(res) => Some(res.action),
            Err(err) => {
                if let Some(message) = rejection_message(&err) {
                    self.error.set(Some(message));
                }
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_failures_are_not_doubled() {
        let err = ApiError::from_response(422, r#"{"message":"invalid"}"#);
        assert_eq!(rejection_message(&err), None);
    }

    #[test]
    fn non_422_rejections_surface_the_business_rule() {
        let forbidden = ApiError::from_response(403, r#"{"message":"forbidden"}"#);
        assert_eq!(
            rejection_message(&forbidden),
            Some(OWN_CONTENT_MESSAGE.to_string())
        );

        let conflict = ApiError::from_response(409, "{}");
        assert!(rejection_message(&conflict).is_some());
    }
}
