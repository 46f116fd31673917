//! 管理后台
//!
//! `/admin` 下的全部子功能由本页的分节切换承载，
//! 权限（登录 + admin 角色）由外层 RouteGuard 保证。

mod manage_categories;
mod manage_reports;
mod manage_tags;
mod manage_users;
mod stats;

use leptos::prelude::*;
use manage_categories::ManageCategories;
use manage_reports::ManageReports;
use manage_tags::ManageTags;
use manage_users::ManageUsers;
use stats::AdminStatsPanel;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AdminSection {
    Stats,
    Users,
    Categories,
    Tags,
    Reports,
}

impl AdminSection {
    fn label(&self) -> &'static str {
        match self {
            AdminSection::Stats => "总览",
            AdminSection::Users => "用户",
            AdminSection::Categories => "分类",
            AdminSection::Tags => "标签",
            AdminSection::Reports => "举报",
        }
    }

    fn all() -> [AdminSection; 5] {
        [
            AdminSection::Stats,
            AdminSection::Users,
            AdminSection::Categories,
            AdminSection::Tags,
            AdminSection::Reports,
        ]
    }
}

#[component]
pub fn AdminPage() -> impl IntoView {
    let (section, set_section) = signal(AdminSection::Stats);

    view! {
        <div class="min-h-screen bg-base-200 p-4 md:p-8">
            <div class="max-w-6xl mx-auto space-y-4">
                <h1 class="text-2xl font-bold">"管理后台"</h1>

                <div role="tablist" class="tabs tabs-boxed w-fit">
                    {AdminSection::all()
                        .into_iter()
                        .map(|s| {
                            view! {
                                <a
                                    role="tab"
                                    class=move || {
                                        if section.get() == s { "tab tab-active" } else { "tab" }
                                    }
                                    on:click=move |_| set_section.set(s)
                                >
                                    {s.label()}
                                </a>
                            }
                        })
                        .collect_view()}
                </div>

                {move || match section.get() {
                    AdminSection::Stats => view! { <AdminStatsPanel /> }.into_any(),
                    AdminSection::Users => view! { <ManageUsers /> }.into_any(),
                    AdminSection::Categories => view! { <ManageCategories /> }.into_any(),
                    AdminSection::Tags => view! { <ManageTags /> }.into_any(),
                    AdminSection::Reports => view! { <ManageReports /> }.into_any(),
                }}
            </div>
        </div>
    }
}
