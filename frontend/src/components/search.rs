//! 搜索页
//!
//! 一次性拉取问题列表，随后在客户端按关键词/分类细化并排序。

use crate::components::icons::SearchIcon;
use crate::components::question_card::QuestionCard;
use crate::hooks::catalog::use_catalog;
use crate::hooks::questions::use_questions;
use campusqa_shared::Question;
use campusqa_shared::protocol::{QuestionFilters, SortOrder};
use leptos::prelude::*;
use leptos::task::spawn_local;

/// 关键词匹配：标题或正文包含（不区分大小写）
fn matches_term(question: &Question, term: &str) -> bool {
    if term.is_empty() {
        return true;
    }
    let term = term.to_lowercase();
    question.title.to_lowercase().contains(&term) || question.content.to_lowercase().contains(&term)
}

/// 客户端过滤
fn filter_questions(list: &[Question], term: &str, category_id: Option<u64>) -> Vec<Question> {
    list.iter()
        .filter(|q| matches_term(q, term))
        .filter(|q| category_id.map(|id| q.category.id == id).unwrap_or(true))
        .cloned()
        .collect()
}

/// 客户端排序；Recent 按创建时间倒序，缺时间戳的排到末尾
fn sort_questions(list: &mut [Question], sort: SortOrder) {
    match sort {
        SortOrder::Recent => list.sort_by(|a, b| b.created_at.cmp(&a.created_at)),
        SortOrder::Votes => list.sort_by(|a, b| b.votes.cmp(&a.votes)),
        SortOrder::Views => list.sort_by(|a, b| b.views.cmp(&a.views)),
    }
}

#[component]
pub fn SearchPage() -> impl IntoView {
    let questions_hook = use_questions();
    let questions = questions_hook.questions;
    let loading = questions_hook.loading;
    let questions_hook = StoredValue::new(questions_hook);

    let catalog = use_catalog();
    let categories = catalog.categories;
    let catalog = StoredValue::new(catalog);

    let (term, set_term) = signal(String::new());
    let (category_id, set_category_id) = signal(Option::<u64>::None);
    let (sort, set_sort) = signal(SortOrder::Recent);

    Effect::new(move |_| {
        let hook = questions_hook.get_value();
        let catalog = catalog.get_value();
        spawn_local(async move {
            catalog.fetch_categories().await;
            hook.fetch_questions(QuestionFilters::default()).await;
        });
    });

    let results = Signal::derive(move || {
        let mut list = questions.with(|all| filter_questions(all, &term.get(), category_id.get()));
        sort_questions(&mut list, sort.get());
        list
    });

    view! {
        <div class="min-h-screen bg-base-200 p-4 md:p-8">
            <div class="max-w-4xl mx-auto space-y-4">
                <h1 class="text-2xl font-bold">"搜索问题"</h1>

                <div class="flex flex-wrap items-center gap-2">
                    <label class="input input-bordered flex items-center gap-2 flex-1 min-w-48">
                        <SearchIcon attr:class="h-4 w-4 opacity-50" />
                        <input
                            type="text"
                            class="grow"
                            placeholder="按标题或正文搜索..."
                            prop:value=term
                            on:input=move |ev| set_term.set(event_target_value(&ev))
                        />
                    </label>

                    <select
                        class="select select-bordered select-sm"
                        on:change=move |ev| {
                            set_category_id.set(event_target_value(&ev).parse::<u64>().ok());
                        }
                    >
                        <option value="all" selected=move || category_id.get().is_none()>"全部分类"</option>
                        <For
                            each=move || categories.get()
                            key=|c| c.id
                            children=move |category| {
                                let id = category.id;
                                view! {
                                    <option value=id.to_string() selected=move || category_id.get() == Some(id)>
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
                </div>

                <Show when=move || loading.get()>
                    <div class="flex justify-center py-16">
                        <span class="loading loading-spinner loading-lg text-primary"></span>
                    </div>
                </Show>

                <Show when=move || !loading.get() && results.get().is_empty()>
                    <div class="text-center py-16 text-base-content/50">
                        "没有匹配的问题。换个关键词试试。"
                    </div>
                </Show>

                <For
                    each=move || results.get()
                    key=|q| q.id
                    children=move |question| view! { <QuestionCard question=question /> }
                />
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use campusqa_shared::{Category, Role, User};

    fn make_question(id: u64, title: &str, category_id: u64, votes: i64, views: u64) -> Question {
        Question {
            id,
            title: title.to_string(),
            content: format!("content of {}", title),
            status: None,
            votes,
            views,
            user: User {
                id: 1,
                name: "ana".to_string(),
                email: "ana@uni.edu".to_string(),
                role: Role::User,
                reputation: 0,
            },
            category: Category {
                id: category_id,
                name: "Rust".to_string(),
                description: None,
            },
            tags: Vec::new(),
            answers: None,
            created_at: None,
            updated_at: None,
        }
    }

    #[test]
    fn term_matching_is_case_insensitive() {
        let q = make_question(1, "Borrow Checker", 1, 0, 0);
        assert!(matches_term(&q, "borrow"));
        assert!(matches_term(&q, "CHECKER"));
        assert!(matches_term(&q, ""));
        assert!(!matches_term(&q, "lifetime"));
    }

    #[test]
    fn category_filter_narrows_results() {
        let list = vec![
            make_question(1, "a", 1, 0, 0),
            make_question(2, "b", 2, 0, 0),
        ];
        let hits = filter_questions(&list, "", Some(2));
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, 2);
        assert_eq!(filter_questions(&list, "", None).len(), 2);
    }

    #[test]
    fn sort_orders_by_the_selected_key() {
        let mut list = vec![
            make_question(1, "a", 1, 5, 100),
            make_question(2, "b", 1, 10, 50),
        ];
        sort_questions(&mut list, SortOrder::Votes);
        assert_eq!(list[0].id, 2);
        sort_questions(&mut list, SortOrder::Views);
        assert_eq!(list[0].id, 1);
    }
}
