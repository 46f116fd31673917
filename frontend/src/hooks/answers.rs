//! 回答 Hook

use super::support::with_loading;
use crate::api::{ApiClient, use_api};
use campusqa_shared::Answer;
use campusqa_shared::protocol::{CreateAnswerRequest, MarkBestAnswerRequest};
use leptos::prelude::*;

#[derive(Clone)]
pub struct AnswersHook {
    api: ApiClient,
    pub loading: RwSignal<bool>,
    pub error: RwSignal<Option<String>>,
}

pub fn use_answers() -> AnswersHook {
    AnswersHook {
        api: use_api(),
        loading: RwSignal::new(false),
        error: RwSignal::new(None),
    }
}

impl AnswersHook {
    pub async fn create_answer(&self, question_id: u64, content: String) -> Option<Answer> {
        self.error.set(None);
        let request = CreateAnswerRequest {
            content,
            question_id,
        };
        match with_loading(&self.api, self.loading, &request).await {
            Ok(answer) => Some(answer),
            Err(err) => {
                self.error.set(Some(err.message));
                None
            }
        }
    }

    /// 标记最佳回答（提问者限定，由服务端校验）
    pub async fn mark_as_best(&self, answer_id: u64) -> bool {
        self.error.set(None);
        let request = MarkBestAnswerRequest { answer_id };
        match with_loading(&self.api, self.loading, &request).await {
            Ok(_) => true,
            Err(err) => {
                self.error.set(Some(err.message));
                false
            }
        }
    }
}
