//! 分类浏览页

use crate::hooks::catalog::use_catalog;
use crate::web::route::AppRoute;
use crate::web::router::use_router;
use leptos::prelude::*;
use leptos::task::spawn_local;

#[component]
pub fn CategoriesPage() -> impl IntoView {
    let catalog = use_catalog();
    let categories = catalog.categories;
    let loading = catalog.loading;
    let error = catalog.error;
    let catalog = StoredValue::new(catalog);

    let router = use_router();

    Effect::new(move |_| {
        let catalog = catalog.get_value();
        spawn_local(async move {
            catalog.fetch_categories().await;
        });
    });

    view! {
        <div class="min-h-screen bg-base-200 p-4 md:p-8">
            <div class="max-w-4xl mx-auto space-y-4">
                <h1 class="text-2xl font-bold">"分类"</h1>

                <Show when=move || loading.get()>
                    <div class="flex justify-center py-16">
                        <span class="loading loading-spinner loading-lg text-primary"></span>
                    </div>
                </Show>

                <Show when=move || error.get().is_some()>
                    <div role="alert" class="alert alert-error">
                        <span>{move || error.get().unwrap_or_default()}</span>
                    </div>
                </Show>

                <div class="grid grid-cols-1 md:grid-cols-2 gap-4">
                    <For
                        each=move || categories.get()
                        key=|c| c.id
                        children=move |category| {
                            view! {
                                <div
                                    class="card bg-base-100 shadow hover:shadow-lg transition-shadow cursor-pointer"
                                    on:click=move |_| router.navigate(AppRoute::Search)
                                >
                                    <div class="card-body p-5">
                                        <h3 class="card-title text-base">{category.name.clone()}</h3>
                                        <p class="text-base-content/70 text-sm">
                                            {category.description.clone().unwrap_or_default()}
                                        </p>
                                    </div>
                                </div>
                            }
                        }
                    />
                </div>
            </div>
        </div>
    }
}
