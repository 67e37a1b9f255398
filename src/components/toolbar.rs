//! Toolbar Component
//!
//! Search box, page-size selector, CSV export and "new product" button.

use leptos::prelude::*;

use crate::context::use_catalog;

#[component]
pub fn Toolbar() -> impl IntoView {
    let ctx = use_catalog();
    let options = ctx.page_size_options.get_value();

    view! {
        <div class="toolbar">
            <input
                type="search"
                class="search-input"
                placeholder="Search by title..."
                prop:value=move || ctx.view.with(|v| v.state.search_term.clone())
                on:input=move |ev| {
                    let term = event_target_value(&ev);
                    ctx.view.update(|v| v.set_search_term(term));
                }
            />

            <select
                class="page-size"
                on:change=move |ev| {
                    match event_target_value(&ev).parse::<usize>() {
                        Ok(size) => ctx.view.update(|v| v.set_page_size(size)),
                        Err(e) => log::warn!("[TOOLBAR] Bad page size: {}", e),
                    }
                }
            >
                {options.into_iter().map(|size| view! {
                    <option
                        value=size.to_string()
                        prop:selected=move || ctx.view.with(|v| v.state.page_size == size)
                    >
                        {format!("{} / page", size)}
                    </option>
                }).collect_view()}
            </select>

            <button type="button" class="btn export-btn" on:click=move |_| ctx.export_csv()>
                "Export CSV"
            </button>
            <button type="button" class="btn primary" on:click=move |_| ctx.view.update(|v| v.open_creator())>
                "New Product"
            </button>
        </div>
    }
}
