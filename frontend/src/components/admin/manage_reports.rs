//! 举报处理：筛选、状态流转与删除

use crate::hooks::admin::use_admin;
use campusqa_shared::{Report, ReportStatus, ReportableType};
use leptos::prelude::*;
use leptos::task::spawn_local;

fn status_badge(status: ReportStatus) -> (&'static str, &'static str) {
    match status {
        ReportStatus::Pending => ("badge badge-warning", "待处理"),
        ReportStatus::Reviewed => ("badge badge-success", "已处理"),
        ReportStatus::Dismissed => ("badge badge-neutral", "已驳回"),
    }
}

fn type_label(reportable: ReportableType) -> &'static str {
    match reportable {
        ReportableType::Question => "问题",
        ReportableType::Answer => "回答",
    }
}

#[component]
pub fn ManageReports() -> impl IntoView {
    let admin = use_admin();
    let loading = admin.loading;
    let error = admin.error;
    let admin = StoredValue::new(admin);

    let reports = RwSignal::new(Vec::<Report>::new());
    let (status_filter, set_status_filter) = signal(Option::<ReportStatus>::None);

    Effect::new(move |_| {
        let filter = status_filter.get();
        let admin = admin.get_value();
        spawn_local(async move {
            if let Some(list) = admin.fetch_reports(filter).await {
                reports.set(list);
            }
        });
    });

    let on_set_status = move |report_id: u64, status: ReportStatus| {
        let admin = admin.get_value();
        spawn_local(async move {
            if admin.update_report(report_id, status).await {
                reports.update(|list| {
                    if let Some(report) = list.iter_mut().find(|r| r.id == report_id) {
                        report.status = status;
                    }
                });
            }
        });
    };

    let on_delete = move |report_id: u64| {
        let admin = admin.get_value();
        spawn_local(async move {
            if admin.delete_report(report_id).await {
                reports.update(|list| list.retain(|r| r.id != report_id));
            }
        });
    };

    view! {
        <div class="space-y-4">
            <div class="flex items-center gap-2">
                <h2 class="text-xl font-bold flex-1">"举报处理"</h2>
                <select
                    class="select select-bordered select-sm"
                    on:change=move |ev| {
                        set_status_filter.set(match event_target_value(&ev).as_str() {
                            "pending" => Some(ReportStatus::Pending),
                            "reviewed" => Some(ReportStatus::Reviewed),
                            "dismissed" => Some(ReportStatus::Dismissed),
                            _ => None,
                        });
                    }
                >
                    <option value="all" selected=move || status_filter.get().is_none()>"全部状态"</option>
                    {ReportStatus::all()
                        .into_iter()
                        .map(|s| {
                            let (_, label) = status_badge(s);
                            view! {
                                <option
                                    value=s.as_str()
                                    selected=move || status_filter.get() == Some(s)
                                >
                                    {label}
                                </option>
                            }
                        })
                        .collect_view()}
                </select>
            </div>

            <Show when=move || error.get().is_some()>
                <div role="alert" class="alert alert-error">
                    <span>{move || error.get().unwrap_or_default()}</span>
                </div>
            </Show>

            <Show when=move || !loading.get() && reports.with(|r| r.is_empty())>
                <div class="text-center py-16 text-base-content/50">
                    "没有符合条件的举报。"
                </div>
            </Show>

            <div class="card bg-base-100 shadow">
                <div class="overflow-x-auto w-full">
                    <table class="table table-zebra w-full">
                        <thead>
                            <tr>
                                <th>"类型"</th>
                                <th>"原因"</th>
                                <th>"说明"</th>
                                <th>"状态"</th>
                                <th></th>
                            </tr>
                        </thead>
                        <tbody>
                            <For
                                each=move || reports.get()
                                key=|r| (r.id, r.status)
                                children=move |report| {
                                    let id = report.id;
                                    let (badge_class, badge_label) = status_badge(report.status);
                                    let is_pending = report.status == ReportStatus::Pending;
                                    view! {
                                        <tr>
                                            <td>
                                                <span class="badge badge-outline">
                                                    {type_label(report.reportable_type)}
                                                    " #" {report.reportable_id}
                                                </span>
                                            </td>
                                            <td class="font-bold">{report.reason.clone()}</td>
                                            <td class="max-w-64 truncate">
                                                {report.description.clone().unwrap_or_default()}
                                            </td>
                                            <td><span class=badge_class>{badge_label}</span></td>
                                            <td class="flex gap-1">
                                                <Show when=move || is_pending>
                                                    <button
                                                        class="btn btn-ghost btn-xs text-success"
                                                        on:click=move |_| on_set_status(id, ReportStatus::Reviewed)
                                                    >
                                                        "处理"
                                                    </button>
                                                    <button
                                                        class="btn btn-ghost btn-xs"
                                                        on:click=move |_| on_set_status(id, ReportStatus::Dismissed)
                                                    >
                                                        "驳回"
                                                    </button>
                                                </Show>
                                                <button
                                                    class="btn btn-ghost btn-xs text-error"
                                                    on:click=move |_| on_delete(id)
                                                >
                                                    "删除"
                                                </button>
                                            </td>
                                        </tr>
                                    }
                                }
                            />
                        </tbody>
                    </table>
                </div>
            </div>
        </div>
    }
}
