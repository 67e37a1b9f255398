//! Pagination Component

use leptos::prelude::*;

use crate::catalog::CatalogPage;
use crate::context::use_catalog;

#[component]
pub fn Pagination(page: Memo<CatalogPage>) -> impl IntoView {
    let ctx = use_catalog();
    let pagination = move || page.get().pagination;
    let go_to = move |n: usize| ctx.view.update(|v| v.go_to_page(n));

    view! {
        <ul class="pagination">
            <li class="page-item" class:disabled=move || !pagination().has_prev>
                <button
                    class="page-link"
                    disabled=move || !pagination().has_prev
                    on:click=move |_| go_to(pagination().current_page.saturating_sub(1))
                >
                    "Previous"
                </button>
            </li>
            {move || {
                let current = pagination();
                current.pages().map(|n| view! {
                    <li class="page-item" class:active={n == current.current_page}>
                        <button class="page-link" on:click=move |_| go_to(n)>{n}</button>
                    </li>
                }).collect_view()
            }}
            <li class="page-item" class:disabled=move || !pagination().has_next>
                <button
                    class="page-link"
                    disabled=move || !pagination().has_next
                    on:click=move |_| go_to(pagination().current_page + 1)
                >
                    "Next"
                </button>
            </li>
        </ul>
    }
}
