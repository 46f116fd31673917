//! 提问页
//!
//! 表单状态整合为 `QuestionFormState` 结构体，负责数据的持有、
//! 重置与到请求对象的转换。

use crate::components::markdown_editor::MarkdownEditor;
use crate::hooks::catalog::use_catalog;
use crate::hooks::questions::use_questions;
use crate::toast::use_toast;
use crate::web::route::AppRoute;
use crate::web::router::use_router;
use campusqa_shared::protocol::CreateQuestionRequest;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// 提交前的本地校验；返回第一条违规消息
fn validate_question(title: &str, content: &str, category_id: Option<u64>) -> Result<(), String> {
    if title.trim().chars().count() < 8 {
        return Err("标题至少 8 个字符".to_string());
    }
    if content.trim().chars().count() < 20 {
        return Err("正文至少 20 个字符，请描述清楚你的问题".to_string());
    }
    if category_id.is_none() {
        return Err("请选择一个分类".to_string());
    }
    Ok(())
}

/// 表单状态结构体
///
/// 使用 `RwSignal` 因为它实现了 `Copy`，适合在组件与回调间传递。
#[derive(Clone, Copy)]
struct QuestionFormState {
    title: RwSignal<String>,
    content: RwSignal<String>,
    category_id: RwSignal<Option<u64>>,
    tag_ids: RwSignal<Vec<u64>>,
}

impl QuestionFormState {
    fn new() -> Self {
        Self {
            title: RwSignal::new(String::new()),
            content: RwSignal::new(String::new()),
            category_id: RwSignal::new(None),
            tag_ids: RwSignal::new(Vec::new()),
        }
    }

    fn reset(&self) {
        self.title.set(String::new());
        self.content.set(String::new());
        self.category_id.set(None);
        self.tag_ids.set(Vec::new());
    }

    fn toggle_tag(&self, id: u64) {
        self.tag_ids.update(|tags| {
            if let Some(pos) = tags.iter().position(|t| *t == id) {
                tags.remove(pos);
            } else {
                tags.push(id);
            }
        });
    }

    fn validate(&self) -> Result<(), String> {
        validate_question(
            &self.title.get_untracked(),
            &self.content.get_untracked(),
            self.category_id.get_untracked(),
        )
    }

    fn to_request(&self) -> CreateQuestionRequest {
        CreateQuestionRequest {
            title: self.title.get_untracked().trim().to_string(),
            content: self.content.get_untracked(),
            category_id: self.category_id.get_untracked().unwrap_or_default(),
            tags: self.tag_ids.get_untracked(),
        }
    }
}

#[component]
pub fn AskQuestionPage() -> impl IntoView {
    let questions = use_questions();
    let loading = questions.loading;
    let remote_error = questions.error;
    let questions = StoredValue::new(questions);

    let catalog = use_catalog();
    let categories = catalog.categories;
    let tags = catalog.tags;
    let catalog = StoredValue::new(catalog);

    let router = use_router();
    let toast = use_toast();
    let form = QuestionFormState::new();
    let (local_error, set_local_error) = signal(Option::<String>::None);

    Effect::new(move |_| {
        let catalog = catalog.get_value();
        spawn_local(async move {
            catalog.fetch_categories().await;
            catalog.fetch_tags().await;
        });
    });

    let error_msg = Signal::derive(move || local_error.get().or_else(|| remote_error.get()));

    let on_submit = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();

        if let Err(message) = form.validate() {
            set_local_error.set(Some(message));
            return;
        }
        set_local_error.set(None);

        let request = form.to_request();
        let hook = questions.get_value();
        spawn_local(async move {
            if let Some(question) = hook.create_question(request).await {
                toast.show_success("问题已发布");
                form.reset();
                router.navigate(AppRoute::QuestionDetail(question.id));
            }
        });
    };

    view! {
        <div class="min-h-screen bg-base-200 p-4 md:p-8">
            <div class="max-w-3xl mx-auto">
                <div class="card bg-base-100 shadow-xl">
                    <form class="card-body space-y-4" on:submit=on_submit>
                        <h1 class="card-title text-xl">"提出你的问题"</h1>

                        <Show when=move || error_msg.get().is_some()>
                            <div role="alert" class="alert alert-error text-sm py-2">
                                <span>{move || error_msg.get().unwrap_or_default()}</span>
                            </div>
                        </Show>

                        <div class="form-control">
                            <label class="label" for="title">
                                <span class="label-text">"标题"</span>
                            </label>
                            <input
                                id="title"
                                type="text"
                                placeholder="一句话概括你的问题"
                                on:input=move |ev| form.title.set(event_target_value(&ev))
                                prop:value=form.title
                                class="input input-bordered"
                                required
                            />
                        </div>

                        <div class="form-control">
                            <label class="label">
                                <span class="label-text">"分类"</span>
                            </label>
                            <select
                                class="select select-bordered"
                                on:change=move |ev| {
                                    form.category_id.set(event_target_value(&ev).parse::<u64>().ok());
                                }
                            >
                                <option value="" selected=move || form.category_id.get().is_none()>
                                    "选择分类..."
                                </option>
                                <For
                                    each=move || categories.get()
                                    key=|c| c.id
                                    children=move |category| {
                                        let id = category.id;
                                        view! {
                                            <option
                                                value=id.to_string()
                                                selected=move || form.category_id.get() == Some(id)
                                            >
                                                {category.name.clone()}
                                            </option>
                                        }
                                    }
                                />
                            </select>
                        </div>

                        <div class="form-control">
                            <label class="label">
                                <span class="label-text">"标签 (可多选)"</span>
                            </label>
                            <div class="flex flex-wrap gap-2">
                                <For
                                    each=move || tags.get()
                                    key=|t| t.id
                                    children=move |tag| {
                                        let id = tag.id;
                                        let selected = move || form.tag_ids.get().contains(&id);
                                        view! {
                                            <button
                                                type="button"
                                                class=move || {
                                                    if selected() {
                                                        "badge badge-primary cursor-pointer"
                                                    } else {
                                                        "badge badge-outline cursor-pointer"
                                                    }
                                                }
                                                on:click=move |_| form.toggle_tag(id)
                                            >
                                                {tag.name.clone()}
                                            </button>
                                        }
                                    }
                                />
                            </div>
                        </div>

                        <div class="form-control">
                            <label class="label">
                                <span class="label-text">"正文 (支持 Markdown)"</span>
                            </label>
                            <MarkdownEditor
                                value=form.content
                                placeholder="描述问题背景、你尝试过什么、期望的结果..."
                            />
                        </div>

                        <div class="card-actions justify-end">
                            <button class="btn btn-primary" disabled=move || loading.get()>
                                {move || if loading.get() {
                                    view! { <span class="loading loading-spinner"></span> "发布中..." }.into_any()
                                } else {
                                    "发布问题".into_any()
                                }}
                            </button>
                        </div>
                    </form>
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_title_is_rejected() {
        assert!(validate_question("short", &"x".repeat(30), Some(1)).is_err());
    }

    #[test]
    fn short_content_is_rejected() {
        assert!(validate_question("a proper title", "too short", Some(1)).is_err());
    }

    #[test]
    fn missing_category_is_rejected() {
        assert!(validate_question("a proper title", &"x".repeat(30), None).is_err());
    }

    #[test]
    fn valid_form_passes() {
        assert!(validate_question("a proper title", &"x".repeat(30), Some(1)).is_ok());
    }
}
