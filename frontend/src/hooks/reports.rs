//! 举报 Hook

use super::support::with_loading;
use crate::api::{ApiClient, use_api};
use campusqa_shared::protocol::CreateReportRequest;
use leptos::prelude::*;

#[derive(Clone)]
pub struct ReportsHook {
    api: ApiClient,
    pub loading: RwSignal<bool>,
    pub error: RwSignal<Option<String>>,
}

pub fn use_reports() -> ReportsHook {
    ReportsHook {
        api: use_api(),
        loading: RwSignal::new(false),
        error: RwSignal::new(None),
    }
}

impl ReportsHook {
    /// 提交举报
    ///
    /// 422 已由 HTTP 客户端全局提示；这里只返回 false，
    /// 表单据此自行决定关闭还是停留。
    pub async fn report_content(&self, request: CreateReportRequest) -> bool {
        self.error.set(None);
        match with_loading(&self.api, self.loading, &request).await {
            Ok(_) => true,
            Err(err) => {
                if !err.is_validation() {
                    self.error.set(Some(err.message));
                }
                false
            }
        }
    }
}
