//! 回答卡片

use crate::components::icons::Check;
use crate::components::vote_buttons::VoteButtons;
use campusqa_shared::{Answer, VoteTarget};
use leptos::prelude::*;

#[component]
pub fn AnswerCard(
    answer: Answer,
    /// 当前用户是否可标记最佳回答（提问者本人且尚未标记）
    can_mark_best: bool,
    on_mark_best: Callback<u64>,
) -> impl IntoView {
    let id = answer.id;
    let is_best = answer.is_best_answer;
    let votes = answer.votes;
    let content = answer.content;
    let author = answer
        .user
        .map(|u| u.name)
        .unwrap_or_else(|| "匿名".to_string());

    let card_class = if is_best {
        "card bg-base-100 shadow border-2 border-success"
    } else {
        "card bg-base-100 shadow"
    };

    view! {
        <div class=card_class>
            <div class="card-body p-5">
                <Show when=move || is_best>
                    <div class="flex items-center gap-1 text-success text-sm font-bold">
                        <Check attr:class="h-4 w-4" />
                        "最佳回答"
                    </div>
                </Show>

                <p class="whitespace-pre-wrap">{content}</p>

                <div class="flex items-center gap-4 mt-2">
                    <VoteButtons
                        target=VoteTarget::Answer
                        votable_id=id
                        initial_score=votes
                    />
                    <Show when=move || can_mark_best>
                        <button
                            class="btn btn-outline btn-success btn-sm gap-1"
                            on:click=move |_| on_mark_best.run(id)
                        >
                            <Check attr:class="h-4 w-4" />
                            "标为最佳"
                        </button>
                    </Show>
                    <span class="ml-auto text-sm text-base-content/60">{author}</span>
                </div>
            </div>
        </div>
    }
}
