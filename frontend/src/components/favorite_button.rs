//! 收藏切换按钮

use crate::auth::use_auth;
use crate::components::icons::Heart;
use crate::hooks::favorites::use_favorites;
use leptos::prelude::*;
use leptos::task::spawn_local;

#[component]
pub fn FavoriteButton(question_id: u64) -> impl IntoView {
    let auth = use_auth();
    let favorites = use_favorites();
    let loading = favorites.loading;
    let favorites = StoredValue::new(favorites);

    let user = auth.user_signal();
    let (is_favorite, set_is_favorite) = signal(false);

    // 登录后查询初始收藏状态；查询失败静默按"非收藏"处理
    Effect::new(move |_| {
        if user.get().is_some() {
            let favorites = favorites.get_value();
            spawn_local(async move {
                set_is_favorite.set(favorites.check_if_favorite(question_id).await);
            });
        }
    });

    let on_toggle = move |_| {
        let favorites = favorites.get_value();
        let currently = is_favorite.get();
        spawn_local(async move {
            let success = if currently {
                favorites.remove_from_favorites(question_id).await
            } else {
                favorites.add_to_favorites(question_id).await
            };
            if success {
                set_is_favorite.set(!currently);
            }
        });
    };

    view! {
        <Show when=move || user.get().is_some()>
            <button
                class=move || {
                    if is_favorite.get() {
                        "btn btn-sm gap-1 text-error"
                    } else {
                        "btn btn-sm btn-ghost gap-1"
                    }
                }
                disabled=move || loading.get()
                on:click=on_toggle
            >
                <Heart attr:class="h-4 w-4" />
                {move || if is_favorite.get() { "取消收藏" } else { "收藏" }}
            </button>
        </Show>
    }
}
