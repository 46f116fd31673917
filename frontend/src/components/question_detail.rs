//! 问题详情页
//!
//! 组合投票、收藏、举报、回答与最佳答案标记。
//! 投票走乐观增量；回答与标记成功后整体重新拉取问题。

use crate::auth::use_auth;
use crate::components::answer_card::AnswerCard;
use crate::components::favorite_button::FavoriteButton;
use crate::components::report_button::ReportButton;
use crate::components::vote_buttons::VoteButtons;
use crate::hooks::answers::use_answers;
use crate::hooks::questions::use_questions;
use crate::toast::use_toast;
use campusqa_shared::{QuestionStatus, ReportableType, VoteTarget};
use leptos::prelude::*;
use leptos::task::spawn_local;

#[component]
pub fn QuestionDetailPage(id: u64) -> impl IntoView {
    let questions = use_questions();
    let question = questions.question;
    let loading = questions.loading;
    let error = questions.error;
    let questions = StoredValue::new(questions);

    let answers_hook = use_answers();
    let answer_loading = answers_hook.loading;
    let answer_error = answers_hook.error;
    let answers_hook = StoredValue::new(answers_hook);

    let auth = use_auth();
    let user = auth.user_signal();
    let toast = use_toast();

    let (reload, set_reload) = signal(0u32);
    let (answer_content, set_answer_content) = signal(String::new());

    Effect::new(move |_| {
        let _ = reload.get();
        let hook = questions.get_value();
        spawn_local(async move {
            hook.fetch_question(id).await;
        });
    });

    let on_submit_answer = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();
        let content = answer_content.get();
        if content.trim().is_empty() {
            return;
        }
        let hook = answers_hook.get_value();
        spawn_local(async move {
            if hook.create_answer(id, content).await.is_some() {
                toast.show_success("回答已发布");
                set_answer_content.set(String::new());
                set_reload.update(|n| *n += 1);
            }
        });
    };

    let on_mark_best = Callback::new(move |answer_id: u64| {
        let hook = answers_hook.get_value();
        spawn_local(async move {
            if hook.mark_as_best(answer_id).await {
                toast.show_success("已标记最佳回答");
                set_reload.update(|n| *n += 1);
            }
        });
    });

    view! {
        <div class="min-h-screen bg-base-200 p-4 md:p-8">
            <div class="max-w-4xl mx-auto space-y-4">
                <Show when=move || loading.get() && question.get().is_none()>
                    <div class="flex justify-center py-16">
                        <span class="loading loading-spinner loading-lg text-primary"></span>
                    </div>
                </Show>

                // 主内容加载失败：整页错误态 + 重试
                <Show when=move || error.get().is_some() && question.get().is_none()>
                    <div class="card bg-base-100 shadow">
                        <div class="card-body items-center text-center">
                            <p class="text-error">{move || error.get().unwrap_or_default()}</p>
                            <button class="btn btn-primary btn-sm" on:click=move |_| set_reload.update(|n| *n += 1)>
                                "重试"
                            </button>
                        </div>
                    </div>
                </Show>

                {move || question.get().map(|q| {
                    let question_owner_id = q.user.id;
                    let answers = q.answers.clone().unwrap_or_default();
                    let answers_count = answers.len();
                    let is_resolved = q.status == Some(QuestionStatus::Resolved);

                    view! {
                        <div class="card bg-base-100 shadow-xl">
                            <div class="card-body">
                                <div class="flex items-start gap-2">
                                    <h1 class="text-2xl font-bold flex-1">{q.title.clone()}</h1>
                                    <Show when=move || is_resolved>
                                        <span class="badge badge-success badge-outline">"已解决"</span>
                                    </Show>
                                </div>

                                <div class="flex flex-wrap gap-1">
                                    <span class="badge badge-primary badge-outline">{q.category.name.clone()}</span>
                                    {q.tags
                                        .iter()
                                        .map(|tag| view! { <span class="badge badge-ghost">{tag.name.clone()}</span> })
                                        .collect_view()}
                                </div>

                                <p class="whitespace-pre-wrap mt-2">{q.content.clone()}</p>

                                <div class="flex items-center gap-2 mt-4">
                                    <VoteButtons
                                        target=VoteTarget::Question
                                        votable_id=id
                                        initial_score=q.votes
                                    />
                                    <FavoriteButton question_id=id />
                                    <ReportButton
                                        reportable_type=ReportableType::Question
                                        reportable_id=id
                                    />
                                    <span class="ml-auto text-sm text-base-content/60">
                                        {q.user.name.clone()} " · " {q.views} " 次浏览"
                                    </span>
                                </div>
                            </div>
                        </div>

                        <h2 class="text-xl font-bold mt-6">{answers_count} " 个回答"</h2>

                        {answers
                            .into_iter()
                            .map(|answer| {
                                let already_best = answer.is_best_answer;
                                let can_mark_best = move || {
                                    user.get()
                                        .map(|u| u.id == question_owner_id && !already_best)
                                        .unwrap_or(false)
                                };
                                view! {
                                    <AnswerCard
                                        answer=answer
                                        can_mark_best=can_mark_best()
                                        on_mark_best=on_mark_best
                                    />
                                }
                            })
                            .collect_view()}
                    }
                })}

                <Show when=move || user.get().is_some() && question.get().is_some()>
                    <div class="card bg-base-100 shadow">
                        <form class="card-body" on:submit=on_submit_answer>
                            <h3 class="card-title text-base">"你的回答"</h3>
                            <textarea
                                class="textarea textarea-bordered w-full"
                                rows="6"
                                placeholder="分享你的解答..."
                                prop:value=answer_content
                                on:input=move |ev| set_answer_content.set(event_target_value(&ev))
                            ></textarea>
                            <Show when=move || answer_error.get().is_some()>
                                <div role="alert" class="alert alert-error text-sm py-2">
                                    <span>{move || answer_error.get().unwrap_or_default()}</span>
                                </div>
                            </Show>
                            <div class="card-actions justify-end">
                                <button class="btn btn-primary" disabled=move || answer_loading.get()>
                                    {move || if answer_loading.get() {
                                        view! { <span class="loading loading-spinner"></span> "发布中..." }.into_any()
                                    } else {
                                        "发布回答".into_any()
                                    }}
                                </button>
                            </div>
                        </form>
                    </div>
                </Show>
            </div>
        </div>
    }
}
