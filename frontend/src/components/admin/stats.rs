//! 管理总览：平台统计

use crate::hooks::admin::use_admin;
use campusqa_shared::protocol::AdminStats;
use leptos::prelude::*;
use leptos::task::spawn_local;

#[component]
pub fn AdminStatsPanel() -> impl IntoView {
    let admin = use_admin();
    let loading = admin.loading;
    let error = admin.error;
    let admin = StoredValue::new(admin);

    let stats = RwSignal::new(Option::<AdminStats>::None);

    Effect::new(move |_| {
        let admin = admin.get_value();
        spawn_local(async move {
            if let Some(data) = admin.fetch_stats().await {
                stats.set(Some(data));
            }
        });
    });

    view! {
        <Show when=move || loading.get() && stats.get().is_none()>
            <div class="flex justify-center py-16">
                <span class="loading loading-spinner loading-lg text-primary"></span>
            </div>
        </Show>

        <Show when=move || error.get().is_some()>
            <div role="alert" class="alert alert-error">
                <span>{move || error.get().unwrap_or_default()}</span>
            </div>
        </Show>

        {move || stats.get().map(|s| view! {
            <div class="space-y-4">
                <div class="stats shadow w-full stats-vertical md:stats-horizontal bg-base-100">
                    <div class="stat">
                        <div class="stat-title">"用户总数"</div>
                        <div class="stat-value text-primary">{s.total_users}</div>
                        <div class="stat-desc">"近 7 天新增 " {s.recent_users}</div>
                    </div>
                    <div class="stat">
                        <div class="stat-title">"问题总数"</div>
                        <div class="stat-value text-secondary">{s.total_questions}</div>
                        <div class="stat-desc">"近 7 天新增 " {s.recent_questions}</div>
                    </div>
                    <div class="stat">
                        <div class="stat-title">"回答总数"</div>
                        <div class="stat-value">{s.total_answers}</div>
                    </div>
                </div>

                <div class="stats shadow w-full stats-vertical md:stats-horizontal bg-base-100">
                    <div class="stat">
                        <div class="stat-title">"举报总数"</div>
                        <div class="stat-value text-warning">{s.total_reports}</div>
                    </div>
                    <div class="stat">
                        <div class="stat-title">"待处理举报"</div>
                        <div class="stat-value text-error">{s.pending_reports}</div>
                        <div class="stat-desc">"需要尽快处理"</div>
                    </div>
                </div>
            </div>
        })}
    }
}
