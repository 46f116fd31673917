//! 问题 Hook
//!
//! 实体缓存只存在于 hook 实例内部，随页面同生命周期，
//! 不做跨页面缓存。

use super::support::with_loading;
use crate::api::{ApiClient, use_api};
use campusqa_shared::Question;
use campusqa_shared::protocol::{
    CreateQuestionRequest, GetQuestionRequest, ListQuestionsRequest, QuestionFilters,
};
use leptos::prelude::*;

#[derive(Clone)]
pub struct QuestionsHook {
    api: ApiClient,
    /// 列表页数据
    pub questions: RwSignal<Vec<Question>>,
    /// 详情页数据
    pub question: RwSignal<Option<Question>>,
    pub loading: RwSignal<bool>,
    pub error: RwSignal<Option<String>>,
}

pub fn use_questions() -> QuestionsHook {
    QuestionsHook {
        api: use_api(),
        questions: RwSignal::new(Vec::new()),
        question: RwSignal::new(None),
        loading: RwSignal::new(false),
        error: RwSignal::new(None),
    }
}

impl QuestionsHook {
    pub async fn fetch_questions(&self, filters: QuestionFilters) {
        self.error.set(None);
        let request = ListQuestionsRequest { filters };
        match with_loading(&self.api, self.loading, &request).await {
            Ok(page) => self.questions.set(page.data),
            Err(err) => self.error.set(Some(err.message)),
        }
    }

    pub async fn fetch_question(&self, id: u64) {
        self.error.set(None);
        match with_loading(&self.api, self.loading, &GetQuestionRequest { id }).await {
            Ok(question) => self.question.set(Some(question)),
            Err(err) => self.error.set(Some(err.message)),
        }
    }

    /// 发布问题；成功返回创建的记录供调用方跳转
    pub async fn create_question(&self, request: CreateQuestionRequest) -> Option<Question> {
        self.error.set(None);
        match with_loading(&self.api, self.loading, &request).await {
            Ok(created) => Some(created.question),
            Err(err) => {
                self.error.set(Some(err.message));
                None
            }
        }
    }
}
