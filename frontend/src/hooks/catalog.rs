//! 公共目录 Hook（分类与标签）

use super::support::with_loading;
use crate::api::{ApiClient, use_api};
use campusqa_shared::protocol::{ListCategoriesRequest, ListTagsRequest};
use campusqa_shared::{Category, Tag};
use leptos::prelude::*;

#[derive(Clone)]
pub struct CatalogHook {
    api: ApiClient,
    pub categories: RwSignal<Vec<Category>>,
    pub tags: RwSignal<Vec<Tag>>,
    pub loading: RwSignal<bool>,
    pub error: RwSignal<Option<String>>,
}

pub fn use_catalog() -> CatalogHook {
    CatalogHook {
        api: use_api(),
        categories: RwSignal::new(Vec::new()),
        tags: RwSignal::new(Vec::new()),
        loading: RwSignal::new(false),
        error: RwSignal::new(None),
    }
}

impl CatalogHook {
    pub async fn fetch_categories(&self) {
        match with_loading(&self.api, self.loading, &ListCategoriesRequest).await {
            Ok(list) => self.categories.set(list),
            Err(err) => self.error.set(Some(err.message)),
        }
    }

    pub async fn fetch_tags(&self) {
        match with_loading(&self.api, self.loading, &ListTagsRequest).await {
            Ok(list) => self.tags.set(list),
            Err(err) => self.error.set(Some(err.message)),
        }
    }
}
