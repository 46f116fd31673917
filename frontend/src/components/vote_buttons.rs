//! 投票按钮组
//!
//! 乐观更新：成功后把显示分数调整 ±1，不做权威分数对账。
//! 并发投票者之间显示值可能漂移，直到下一次整页拉取。
//! 控件在请求在途时禁用，同一控件不会有并发投票。

use crate::components::icons::{ThumbsDown, ThumbsUp};
use crate::hooks::votes::use_voting;
use campusqa_shared::{VoteTarget, VoteValue};
use leptos::prelude::*;
use leptos::task::spawn_local;

#[component]
pub fn VoteButtons(target: VoteTarget, votable_id: u64, initial_score: i64) -> impl IntoView {
    let voting = use_voting();
    let loading = voting.loading;
    let error = voting.error;
    let voting = StoredValue::new(voting);

    let (score, set_score) = signal(initial_score);

    let cast = move |value: VoteValue| {
        let voting = voting.get_value();
        spawn_local(async move {
            if voting.vote(target, votable_id, value).await.is_some() {
                set_score.update(|s| *s += value.delta());
            }
        });
    };

    view! {
        <div class="flex items-center gap-2">
            <button
                class="btn btn-ghost btn-sm"
                disabled=move || loading.get()
                on:click=move |_| cast(VoteValue::Up)
            >
                <ThumbsUp attr:class="h-4 w-4" />
            </button>
            <span class="font-bold text-lg min-w-8 text-center">{score}</span>
            <button
                class="btn btn-ghost btn-sm"
                disabled=move || loading.get()
                on:click=move |_| cast(VoteValue::Down)
            >
                <ThumbsDown attr:class="h-4 w-4" />
            </button>
            <Show when=move || error.get().is_some()>
                <span class="text-error text-xs">
                    {move || error.get().unwrap_or_default()}
                </span>
            </Show>
        </div>
    }
}
