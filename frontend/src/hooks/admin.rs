//! 管理后台 Hook
//!
//! 统计、用户、分类、标签与举报的管理调用。
//! 所有权限校验在服务端：这里只传递调用并归集错误。

use super::support::with_loading;
use crate::api::{ApiClient, use_api};
use campusqa_shared::protocol::{
    AdminCreateCategoryRequest, AdminCreateTagRequest, AdminDeleteCategoryRequest,
    AdminDeleteReportRequest, AdminDeleteTagRequest, AdminDeleteUserRequest,
    AdminListCategoriesRequest, AdminListReportsRequest, AdminListTagsRequest,
    AdminListUsersRequest, AdminStats, AdminStatsRequest, AdminUpdateCategoryRequest,
    AdminUpdateReportRequest, AdminUpdateTagRequest, AdminUpdateUserRoleRequest,
};
use campusqa_shared::{Category, Report, ReportStatus, Role, Tag, User};
use leptos::prelude::*;

#[derive(Clone)]
pub struct AdminHook {
    api: ApiClient,
    pub loading: RwSignal<bool>,
    pub error: RwSignal<Option<String>>,
}

pub fn use_admin() -> AdminHook {
    AdminHook {
        api: use_api(),
        loading: RwSignal::new(false),
        error: RwSignal::new(None),
    }
}

impl AdminHook {
    async fn run<R: campusqa_shared::protocol::ApiRequest>(
        &self,
        request: &R,
    ) -> Option<R::Response> {
        self.error.set(None);
        match with_loading(&self.api, self.loading, request).await {
            Ok(res) => Some(res),
            Err(err) => {
                self.error.set(Some(err.message));
                None
            }
        }
    }

    // --- 统计 ---

    pub async fn fetch_stats(&self) -> Option<AdminStats> {
        self.run(&AdminStatsRequest).await
    }

    // --- 用户 ---

    pub async fn fetch_users(&self, search: Option<String>) -> Option<Vec<User>> {
        self.run(&AdminListUsersRequest { search, page: None })
            .await
            .map(|page| page.data)
    }

    pub async fn update_user_role(&self, user_id: u64, role: Role) -> bool {
        self.run(&AdminUpdateUserRoleRequest { user_id, role })
            .await
            .is_some()
    }

    pub async fn delete_user(&self, user_id: u64) -> bool {
        self.run(&AdminDeleteUserRequest { user_id }).await.is_some()
    }

    // --- 举报 ---

    pub async fn fetch_reports(&self, status: Option<ReportStatus>) -> Option<Vec<Report>> {
        self.run(&AdminListReportsRequest { status })
            .await
            .map(|page| page.data)
    }

    pub async fn update_report(&self, report_id: u64, status: ReportStatus) -> bool {
        self.run(&AdminUpdateReportRequest { report_id, status })
            .await
            .is_some()
    }

    pub async fn delete_report(&self, report_id: u64) -> bool {
        self.run(&AdminDeleteReportRequest { report_id })
            .await
            .is_some()
    }

    // --- 分类 ---

    pub async fn fetch_categories(&self) -> Option<Vec<Category>> {
        self.run(&AdminListCategoriesRequest).await
    }

    pub async fn create_category(
        &self,
        name: String,
        description: Option<String>,
    ) -> Option<Category> {
        self.run(&AdminCreateCategoryRequest { name, description })
            .await
    }

    pub async fn update_category(
        &self,
        category_id: u64,
        name: String,
        description: Option<String>,
    ) -> Option<Category> {
        self.run(&AdminUpdateCategoryRequest {
            category_id,
            name,
            description,
        })
        .await
    }

    pub async fn delete_category(&self, category_id: u64) -> bool {
        self.run(&AdminDeleteCategoryRequest { category_id })
            .await
            .is_some()
    }

    // --- 标签 ---

    pub async fn fetch_tags(&self) -> Option<Vec<Tag>> {
        self.run(&AdminListTagsRequest).await
    }

    pub async fn create_tag(&self, name: String) -> Option<Tag> {
        self.run(&AdminCreateTagRequest { name }).await
    }

    pub async fn update_tag(&self, tag_id: u64, name: String) -> Option<Tag> {
        self.run(&AdminUpdateTagRequest { tag_id, name }).await
    }

    pub async fn delete_tag(&self, tag_id: u64) -> bool {
        self.run(&AdminDeleteTagRequest { tag_id }).await.is_some()
    }
}
