//! 举报按钮与对话框
//!
//! 提交成功后关闭并全局提示；失败（含 422 的全局 toast）时
//! 对话框保持打开，让用户修正后重试。

use crate::components::icons::Flag;
use crate::hooks::reports::use_reports;
use crate::toast::use_toast;
use campusqa_shared::ReportableType;
use campusqa_shared::protocol::CreateReportRequest;
use leptos::prelude::*;
use leptos::task::spawn_local;

#[component]
pub fn ReportButton(reportable_type: ReportableType, reportable_id: u64) -> impl IntoView {
    let reports = use_reports();
    let loading = reports.loading;
    let error = reports.error;
    let reports = StoredValue::new(reports);
    let toast = use_toast();

    let (open, set_open) = signal(false);
    let dialog_ref = NodeRef::<leptos::html::Dialog>::new();

    // 表单字段
    let (reason, set_reason) = signal("spam".to_string());
    let (description, set_description) = signal(String::new());

    Effect::new(move |_| {
        if let Some(dialog) = dialog_ref.get() {
            if open.get() {
                if !dialog.open() {
                    let _ = dialog.show_modal();
                }
            } else if dialog.open() {
                dialog.close();
            }
        }
    });

    let on_submit = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();

        let description = description.get();
        let request = CreateReportRequest {
            reportable_type,
            reportable_id,
            reason: reason.get(),
            description: if description.trim().is_empty() {
                None
            } else {
                Some(description)
            },
        };

        let reports = reports.get_value();
        spawn_local(async move {
            if reports.report_content(request).await {
                toast.show_success("举报已提交，感谢你的反馈");
                set_open.set(false);
                set_reason.set("spam".to_string());
                set_description.set(String::new());
            }
        });
    };

    view! {
        <button class="btn btn-ghost btn-sm gap-1" on:click=move |_| set_open.set(true)>
            <Flag attr:class="h-4 w-4" />
            "举报"
        </button>

        <dialog class="modal" node_ref=dialog_ref on:close=move |_| set_open.set(false)>
            <div class="modal-box">
                <h3 class="font-bold text-lg">"举报内容"</h3>
                <p class="py-2 text-base-content/70">"告诉我们这条内容的问题。"</p>

                <form on:submit=on_submit class="space-y-4">
                    <div class="form-control">
                        <label class="label" for="report-reason">
                            <span class="label-text">"原因"</span>
                        </label>
                        <select
                            id="report-reason"
                            class="select select-bordered w-full"
                            on:change=move |ev| set_reason.set(event_target_value(&ev))
                        >
                            <option value="spam" selected=move || reason.get() == "spam">"垃圾信息"</option>
                            <option value="inappropriate" selected=move || reason.get() == "inappropriate">"不当内容"</option>
                            <option value="duplicated" selected=move || reason.get() == "duplicated">"重复内容"</option>
                            <option value="other" selected=move || reason.get() == "other">"其他"</option>
                        </select>
                    </div>

                    <div class="form-control">
                        <label class="label" for="report-description">
                            <span class="label-text">"补充说明 (可选)"</span>
                        </label>
                        <textarea
                            id="report-description"
                            class="textarea textarea-bordered w-full"
                            rows="3"
                            prop:value=description
                            on:input=move |ev| set_description.set(event_target_value(&ev))
                        ></textarea>
                    </div>

                    <Show when=move || error.get().is_some()>
                        <div role="alert" class="alert alert-error text-sm py-2">
                            <span>{move || error.get().unwrap_or_default()}</span>
                        </div>
                    </Show>

                    <div class="modal-action">
                        <button type="button" class="btn btn-ghost" on:click=move |_| set_open.set(false)>
                            "取消"
                        </button>
                        <button type="submit" disabled=move || loading.get() class="btn btn-primary">
                            {move || if loading.get() {
                                view! { <span class="loading loading-spinner"></span> "提交中..." }.into_any()
                            } else {
                                "提交举报".into_any()
                            }}
                        </button>
                    </div>
                </form>
            </div>
            <form method="dialog" class="modal-backdrop">
                <button>"close"</button>
            </form>
        </dialog>
    }
}
