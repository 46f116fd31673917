//! 个人资料 Hook：活动摘要与本人的问答内容

use super::support::with_loading;
use crate::api::{ApiClient, use_api};
use campusqa_shared::protocol::{
    UserActivity, UserActivityRequest, UserAnswersRequest, UserQuestionsRequest,
};
use campusqa_shared::{Answer, Question};
use leptos::prelude::*;

#[derive(Clone)]
pub struct ProfileHook {
    api: ApiClient,
    pub activity: RwSignal<Option<UserActivity>>,
    pub questions: RwSignal<Vec<Question>>,
    pub answers: RwSignal<Vec<Answer>>,
    pub loading: RwSignal<bool>,
    pub error: RwSignal<Option<String>>,
}

pub fn use_profile() -> ProfileHook {
    ProfileHook {
        api: use_api(),
        activity: RwSignal::new(None),
        questions: RwSignal::new(Vec::new()),
        answers: RwSignal::new(Vec::new()),
        loading: RwSignal::new(false),
        error: RwSignal::new(None),
    }
}

impl ProfileHook {
    pub async fn fetch_activity(&self) {
        match with_loading(&self.api, self.loading, &UserActivityRequest).await {
            Ok(activity) => self.activity.set(Some(activity)),
            Err(err) => self.error.set(Some(err.message)),
        }
    }

    pub async fn fetch_user_questions(&self, user_id: u64) {
        match with_loading(&self.api, self.loading, &UserQuestionsRequest { user_id }).await {
            Ok(list) => self.questions.set(list),
            Err(err) => self.error.set(Some(err.message)),
        }
    }

    pub async fn fetch_user_answers(&self, user_id: u64) {
        match with_loading(&self.api, self.loading, &UserAnswersRequest { user_id }).await {
            Ok(list) => self.answers.set(list),
            Err(err) => self.error.set(Some(err.message)),
        }
    }
}
