//! Product Table Component
//!
//! Sortable column headers and one row per visible item.

use leptos::prelude::*;

use crate::catalog::query::SortField;
use crate::catalog::CatalogPage;
use crate::context::use_catalog;

#[component]
pub fn ProductTable(page: Memo<CatalogPage>) -> impl IntoView {
    let ctx = use_catalog();

    // ▲ / ▼ next to the active sort column
    let indicator = move |field: SortField| {
        ctx.view.with(|v| match v.state.sort_field {
            Some(active) if active == field => if v.state.sort_ascending { " ▲" } else { " ▼" },
            _ => "",
        })
    };

    view! {
        <table class="product-table">
            <thead>
                <tr>
                    {SortField::ALL.into_iter().map(|field| view! {
                        <th class="sortable" on:click=move |_| ctx.view.update(|v| v.sort_by(field))>
                            {field.label()}
                            {move || indicator(field)}
                        </th>
                    }).collect_view()}
                    <th>"Image"</th>
                </tr>
            </thead>
            <tbody>
                {move || page.get().rows.into_iter().map(|row| {
                    let id = row.id;
                    view! {
                        <tr
                            class="product-row"
                            title=row.tooltip
                            on:click=move |_| {
                                if !ctx.view.try_update(|v| v.open_editor(id)).unwrap_or(false) {
                                    log::warn!("[TABLE] Product {} no longer loaded", id);
                                }
                            }
                        >
                            <td>{row.id}</td>
                            <td>{row.title.clone()}</td>
                            <td>{row.category}</td>
                            <td>{row.price_label}</td>
                            <td>
                                {row.thumbnail.map(|src| view! {
                                    <img src=src class="img-thumb" alt=row.title.clone() />
                                })}
                            </td>
                        </tr>
                    }
                }).collect_view()}
            </tbody>
        </table>
    }
}
