//! 收藏 Hook

use super::support::with_loading;
use crate::api::{ApiClient, use_api};
use campusqa_shared::Favorite;
use campusqa_shared::protocol::{
    AddFavoriteRequest, CheckFavoriteRequest, ListFavoritesRequest, RemoveFavoriteRequest,
};
use leptos::prelude::*;

#[derive(Clone)]
pub struct FavoritesHook {
    api: ApiClient,
    pub favorites: RwSignal<Vec<Favorite>>,
    pub loading: RwSignal<bool>,
    pub error: RwSignal<Option<String>>,
}

pub fn use_favorites() -> FavoritesHook {
    FavoritesHook {
        api: use_api(),
        favorites: RwSignal::new(Vec::new()),
        loading: RwSignal::new(false),
        error: RwSignal::new(None),
    }
}

impl FavoritesHook {
    pub async fn add_to_favorites(&self, question_id: u64) -> bool {
        self.error.set(None);
        match with_loading(&self.api, self.loading, &AddFavoriteRequest { question_id }).await {
            Ok(_) => true,
            Err(err) => {
                self.error.set(Some(err.message));
                false
            }
        }
    }

    pub async fn remove_from_favorites(&self, question_id: u64) -> bool {
        self.error.set(None);
        let request = RemoveFavoriteRequest { question_id };
        match with_loading(&self.api, self.loading, &request).await {
            Ok(_) => true,
            Err(err) => {
                self.error.set(Some(err.message));
                false
            }
        }
    }

    /// 查询是否已收藏
    ///
    /// 失败一律视为"非收藏"，绝不向调用方抛错：
    /// 宁可按钮状态保守也不阻塞页面。
    pub async fn check_if_favorite(&self, question_id: u64) -> bool {
        self.api
            .send(&CheckFavoriteRequest { question_id })
            .await
            .map(|res| res.is_favorite)
            .unwrap_or(false)
    }

    /// 拉取收藏列表（收藏页使用）
    pub async fn fetch_favorites(&self) {
        self.error.set(None);
        match with_loading(&self.api, self.loading, &ListFavoritesRequest).await {
            Ok(list) => self.favorites.set(list),
            Err(err) => self.error.set(Some(err.message)),
        }
    }
}
