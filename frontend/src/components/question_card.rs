//! 问题卡片（列表项）

use crate::components::icons::{Eye, MessageCircle, ThumbsUp};
use crate::web::route::AppRoute;
use crate::web::router::use_router;
use campusqa_shared::{Question, QuestionStatus};
use leptos::prelude::*;

/// 列表摘要的最大字符数
const PREVIEW_CHARS: usize = 160;

/// 截取正文摘要；超长时按字符截断并追加省略号
fn preview(content: &str, max_chars: usize) -> String {
    if content.chars().count() <= max_chars {
        return content.to_string();
    }
    let cut: String = content.chars().take(max_chars).collect();
    format!("{}…", cut.trim_end())
}

fn status_badge(status: QuestionStatus) -> (&'static str, &'static str) {
    match status {
        QuestionStatus::Open => ("badge badge-info badge-outline", "开放中"),
        QuestionStatus::Resolved => ("badge badge-success badge-outline", "已解决"),
        QuestionStatus::Closed => ("badge badge-neutral badge-outline", "已关闭"),
    }
}

#[component]
pub fn QuestionCard(question: Question) -> impl IntoView {
    let router = use_router();
    let id = question.id;
    let answers_count = question.answers.as_ref().map(|a| a.len()).unwrap_or(0);
    let summary = preview(&question.content, PREVIEW_CHARS);

    view! {
        <div
            class="card bg-base-100 shadow hover:shadow-lg transition-shadow cursor-pointer"
            on:click=move |_| router.navigate(AppRoute::QuestionDetail(id))
        >
            <div class="card-body p-5">
                <div class="flex items-center gap-2">
                    <h3 class="card-title text-base flex-1">{question.title.clone()}</h3>
                    {question.status.map(|status| {
                        let (class, label) = status_badge(status);
                        view! { <span class=class>{label}</span> }
                    })}
                </div>

                <p class="text-base-content/70 text-sm">{summary}</p>

                <div class="flex flex-wrap gap-1">
                    <span class="badge badge-primary badge-outline">
                        {question.category.name.clone()}
                    </span>
                    {question
                        .tags
                        .iter()
                        .map(|tag| view! { <span class="badge badge-ghost">{tag.name.clone()}</span> })
                        .collect_view()}
                </div>

                <div class="flex items-center gap-4 text-sm text-base-content/60">
                    <span class="flex items-center gap-1">
                        <ThumbsUp attr:class="h-4 w-4" />
                        {question.votes}
                    </span>
                    <span class="flex items-center gap-1">
                        <MessageCircle attr:class="h-4 w-4" />
                        {answers_count}
                    </span>
                    <span class="flex items-center gap-1">
                        <Eye attr:class="h-4 w-4" />
                        {question.views}
                    </span>
                    <span class="ml-auto">{question.user.name.clone()}</span>
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_content_is_untouched() {
        assert_eq!(preview("hello", 10), "hello");
    }

    #[test]
    fn long_content_is_cut_with_ellipsis() {
        let text = "a".repeat(200);
        let cut = preview(&text, 160);
        assert_eq!(cut.chars().count(), 161);
        assert!(cut.ends_with('…'));
    }

    #[test]
    fn cut_respects_char_boundaries() {
        let text = "问".repeat(200);
        let cut = preview(&text, 160);
        assert!(cut.starts_with('问'));
        assert_eq!(cut.chars().count(), 161);
    }
}
