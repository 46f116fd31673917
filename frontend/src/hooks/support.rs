//! Hook 共用辅助

use crate::api::ApiClient;
use crate::error::ApiResult;
use campusqa_shared::protocol::ApiRequest;
use leptos::prelude::*;

/// 在 loading 信号的包围下执行一次类型化请求
///
/// 排序保证仅限单个 hook 实例：这里不做内部排队，调用方应以
/// loading 信号禁用触发控件来避免同一控件的并发调用。
pub(crate) async fn with_loading<R: ApiRequest>(
    api: &ApiClient,
    loading: RwSignal<bool>,
    request: &R,
) -> ApiResult<R::Response> {
    loading.set(true);
    let result = api.send(request).await;
    loading.set(false);
    result
}
