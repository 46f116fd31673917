//! 个人资料页：活动摘要与本人的问答内容

use crate::auth::use_auth;
use crate::components::question_card::QuestionCard;
use crate::hooks::profile::use_profile;
use leptos::prelude::*;
use leptos::task::spawn_local;

#[component]
pub fn ProfilePage() -> impl IntoView {
    let auth = use_auth();
    let user = auth.user_signal();

    let profile = use_profile();
    let activity = profile.activity;
    let my_questions = profile.questions;
    let my_answers = profile.answers;
    let loading = profile.loading;
    let error = profile.error;
    let profile = StoredValue::new(profile);

    Effect::new(move |_| {
        if let Some(user) = user.get() {
            let profile = profile.get_value();
            spawn_local(async move {
                profile.fetch_activity().await;
                profile.fetch_user_questions(user.id).await;
                profile.fetch_user_answers(user.id).await;
            });
        }
    });

    view! {
        <div class="min-h-screen bg-base-200 p-4 md:p-8">
            <div class="max-w-4xl mx-auto space-y-6">
                {move || user.get().map(|u| view! {
                    <div class="card bg-base-100 shadow-xl">
                        <div class="card-body">
                            <h1 class="card-title text-2xl">{u.name.clone()}</h1>
                            <p class="text-base-content/70">{u.email.clone()}</p>
                            <div class="flex gap-2">
                                <span class="badge badge-outline">{u.role.as_str()}</span>
                                <span class="badge badge-primary badge-outline">
                                    {u.reputation} " 声望"
                                </span>
                            </div>
                        </div>
                    </div>
                })}

                {move || activity.get().map(|a| view! {
                    <div class="stats shadow w-full stats-vertical md:stats-horizontal bg-base-100">
                        <div class="stat">
                            <div class="stat-title">"提问"</div>
                            <div class="stat-value text-primary">{a.questions_count}</div>
                        </div>
                        <div class="stat">
                            <div class="stat-title">"回答"</div>
                            <div class="stat-value text-secondary">{a.answers_count}</div>
                        </div>
                        <div class="stat">
                            <div class="stat-title">"收藏"</div>
                            <div class="stat-value">{a.favorites_count}</div>
                        </div>
                        <div class="stat">
                            <div class="stat-title">"声望"</div>
                            <div class="stat-value text-success">{a.reputation}</div>
                        </div>
                    </div>
                })}

                <Show when=move || loading.get()>
                    <div class="flex justify-center py-8">
                        <span class="loading loading-spinner loading-lg text-primary"></span>
                    </div>
                </Show>

                <Show when=move || error.get().is_some()>
                    <div role="alert" class="alert alert-error">
                        <span>{move || error.get().unwrap_or_default()}</span>
                    </div>
                </Show>

                <div>
                    <h2 class="text-xl font-bold mb-3">"我的问题"</h2>
                    <div class="space-y-3">
                        <Show when=move || my_questions.with(|q| q.is_empty())>
                            <p class="text-base-content/50">"还没有提过问题。"</p>
                        </Show>
                        <For
                            each=move || my_questions.get()
                            key=|q| q.id
                            children=move |question| view! { <QuestionCard question=question /> }
                        />
                    </div>
                </div>

                <div>
                    <h2 class="text-xl font-bold mb-3">"我的回答"</h2>
                    <div class="space-y-3">
                        <Show when=move || my_answers.with(|a| a.is_empty())>
                            <p class="text-base-content/50">"还没有回答过问题。"</p>
                        </Show>
                        <For
                            each=move || my_answers.get()
                            key=|a| a.id
                            children=move |answer| {
                                view! {
                                    <div class="card bg-base-100 shadow">
                                        <div class="card-body p-4">
                                            <p class="whitespace-pre-wrap text-sm">{answer.content.clone()}</p>
                                            <div class="text-xs text-base-content/60">
                                                {answer.votes} " 票"
                                                {if answer.is_best_answer { " · 最佳回答" } else { "" }}
                                            </div>
                                        </div>
                                    </div>
                                }
                            }
                        />
                    </div>
                </div>
            </div>
        </div>
    }
}
