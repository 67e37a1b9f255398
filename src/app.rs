//! Catalog Admin App
//!
//! Root component: owns the view-model for the page session.

use leptos::prelude::*;

use crate::catalog::CatalogView;
use crate::components::{CreateDialog, EditDialog, NoticeDialog, Pagination, ProductTable, Toolbar};
use crate::config::AppConfig;
use crate::context::CatalogContext;

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    let ctx = CatalogContext::new(&config);
    provide_context(ctx);

    // Initial fetch
    Effect::new(move |_| {
        ctx.reload();
    });

    let page = Memo::new(move |_| ctx.view.with(CatalogView::render));
    let loading = move || ctx.view.with(CatalogView::is_loading);

    view! {
        <div class="container">
            <h1>"Product Catalog"</h1>

            <Toolbar />

            <Show when=loading>
                <div class="loading">"Loading..."</div>
            </Show>

            <ProductTable page=page />
            <Pagination page=page />

            <p class="item-count">
                {move || {
                    let current = page.get();
                    format!("Showing {} of {} items", current.matched, current.total)
                }}
            </p>

            <EditDialog />
            <CreateDialog />
            <NoticeDialog />
        </div>
    }
}
