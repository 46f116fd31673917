//! 首页：公开的问题列表

use crate::components::icons::RefreshCw;
use crate::components::question_card::QuestionCard;
use crate::hooks::catalog::use_catalog;
use crate::hooks::questions::use_questions;
use campusqa_shared::protocol::{QuestionFilters, SortOrder};
use leptos::prelude::*;
use leptos::task::spawn_local;

#[component]
pub fn HomePage() -> impl IntoView {
    let questions_hook = use_questions();
    let questions = questions_hook.questions;
    let loading = questions_hook.loading;
    let error = questions_hook.error;
    let questions_hook = StoredValue::new(questions_hook);

    let catalog = use_catalog();
    let categories = catalog.categories;
    let catalog = StoredValue::new(catalog);

    let (category_id, set_category_id) = signal(Option::<u64>::None);
    let (sort, set_sort) = signal(SortOrder::Recent);
    // 重试计数器：错误页的"重试"通过自增触发重新拉取
    let (reload, set_reload) = signal(0u32);

    Effect::new(move |_| {
        let catalog = catalog.get_value();
        spawn_local(async move {
            catalog.fetch_categories().await;
        });
    });

    // 过滤条件或重试计数变化时重新拉取
    Effect::new(move |_| {
        let _ = reload.get();
        let filters = QuestionFilters {
            category_id: category_id.get(),
            sort: Some(sort.get()),
            ..Default::default()
        };
        let hook = questions_hook.get_value();
        spawn_local(async move {
            hook.fetch_questions(filters).await;
        });
    });

    let is_empty = move || questions.with(|q| q.is_empty());

    view! {
        <div class="min-h-screen bg-base-200 p-4 md:p-8">
            <div class="max-w-4xl mx-auto space-y-4">
                <div class="flex items-center gap-2">
                    <h1 class="text-2xl font-bold flex-1">"最新问题"</h1>

                    <select
                        class="select select-bordered select-sm"
                        on:change=move |ev| {
                            let value = event_target_value(&ev);
                            set_category_id.set(value.parse::<u64>().ok());
                        }
                    >
                        <option value="all" selected=move || category_id.get().is_none()>"全部分类"</option>
                        <For
                            each=move || categories.get()
                            key=|c| c.id
                            children=move |category| {
                                let id = category.id;
                                view! {
                                    <option
                                        value=id.to_string()
                                        selected=move || category_id.get() == Some(id)
                                    >
                                        {category.name.clone()}
                                    </option>
                                }
                            }
                        />
                    </select>

                    <select
                        class="select select-bordered select-sm"
                        on:change=move |ev| {
                            set_sort.set(match event_target_value(&ev).as_str() {
                                "votes" => SortOrder::Votes,
                                "views" => SortOrder::Views,
                                _ => SortOrder::Recent,
                            });
                        }
                    >
                        <option value="recent" selected=move || sort.get() == SortOrder::Recent>"最新"</option>
                        <option value="votes" selected=move || sort.get() == SortOrder::Votes>"票数"</option>
                        <option value="views" selected=move || sort.get() == SortOrder::Views>"浏览量"</option>
                    </select>

                    <button
                        class="btn btn-ghost btn-circle btn-sm"
                        disabled=move || loading.get()
                        on:click=move |_| set_reload.update(|n| *n += 1)
                    >
                        <RefreshCw attr:class=move || if loading.get() { "h-4 w-4 animate-spin" } else { "h-4 w-4" } />
                    </button>
                </div>

                // 主内容加载失败：整页错误态 + 重试
                <Show when=move || error.get().is_some() && is_empty()>
                    <div class="card bg-base-100 shadow">
                        <div class="card-body items-center text-center">
                            <p class="text-error">{move || error.get().unwrap_or_default()}</p>
                            <button class="btn btn-primary btn-sm" on:click=move |_| set_reload.update(|n| *n += 1)>
                                "重试"
                            </button>
                        </div>
                    </div>
                </Show>

                <Show when=move || loading.get() && is_empty()>
                    <div class="flex justify-center py-16">
                        <span class="loading loading-spinner loading-lg text-primary"></span>
                    </div>
                </Show>

                <Show when=move || !loading.get() && is_empty() && error.get().is_none()>
                    <div class="text-center py-16 text-base-content/50">
                        "还没有问题。成为第一个提问的人吧。"
                    </div>
                </Show>

                <For
                    each=move || questions.get()
                    key=|q| q.id
                    children=move |question| view! { <QuestionCard question=question /> }
                />
            </div>
        </div>
    }
}
