//! 收藏夹页

use crate::components::icons::Heart;
use crate::components::question_card::QuestionCard;
use crate::hooks::favorites::use_favorites;
use leptos::prelude::*;
use leptos::task::spawn_local;

#[component]
pub fn FavoritesPage() -> impl IntoView {
    let favorites_hook = use_favorites();
    let favorites = favorites_hook.favorites;
    let loading = favorites_hook.loading;
    let error = favorites_hook.error;
    let favorites_hook = StoredValue::new(favorites_hook);

    let (reload, set_reload) = signal(0u32);

    Effect::new(move |_| {
        let _ = reload.get();
        let hook = favorites_hook.get_value();
        spawn_local(async move {
            hook.fetch_favorites().await;
        });
    });

    let on_remove = move |question_id: u64| {
        let hook = favorites_hook.get_value();
        spawn_local(async move {
            if hook.remove_from_favorites(question_id).await {
                // 本地移除即可，无需整页重拉
                favorites.update(|list| list.retain(|f| f.question_id != question_id));
            }
        });
    };

    view! {
        <div class="min-h-screen bg-base-200 p-4 md:p-8">
            <div class="max-w-4xl mx-auto space-y-4">
                <h1 class="text-2xl font-bold flex items-center gap-2">
                    <Heart attr:class="h-6 w-6 text-error" />
                    "我的收藏"
                </h1>

                <Show when=move || loading.get() && favorites.with(|f| f.is_empty())>
                    <div class="flex justify-center py-16">
                        <span class="loading loading-spinner loading-lg text-primary"></span>
                    </div>
                </Show>

                <Show when=move || error.get().is_some()>
                    <div class="card bg-base-100 shadow">
                        <div class="card-body items-center text-center">
                            <p class="text-error">{move || error.get().unwrap_or_default()}</p>
                            <button class="btn btn-primary btn-sm" on:click=move |_| set_reload.update(|n| *n += 1)>
                                "重试"
                            </button>
                        </div>
                    </div>
                </Show>

                <Show when=move || !loading.get() && favorites.with(|f| f.is_empty()) && error.get().is_none()>
                    <div class="text-center py-16 text-base-content/50">
                        "收藏夹是空的。浏览问题时点击收藏按钮即可加入。"
                    </div>
                </Show>

                <For
                    each=move || favorites.get()
                    key=|f| f.id
                    children=move |favorite| {
                        let question_id = favorite.question_id;
                        view! {
                            <div class="space-y-1">
                                {favorite.question.clone().map(|q| view! { <QuestionCard question=q /> })}
                                <div class="text-right">
                                    <button
                                        class="btn btn-ghost btn-xs text-error"
                                        on:click=move |_| on_remove(question_id)
                                    >
                                        "移出收藏"
                                    </button>
                                </div>
                            </div>
                        }
                    }
                />
            </div>
        </div>
    }
}
