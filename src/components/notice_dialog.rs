//! Notice Dialog Component
//!
//! Modal message that blocks the page until acknowledged.

use leptos::prelude::*;

use crate::catalog::NoticeKind;
use crate::context::use_catalog;

#[component]
pub fn NoticeDialog() -> impl IntoView {
    let ctx = use_catalog();
    let notice = move || ctx.view.with(|v| v.notice.clone());

    view! {
        <Show when=move || notice().is_some()>
            <div class="modal-backdrop">
                <div
                    class="modal notice"
                    class:error=move || notice().map(|n| n.kind) == Some(NoticeKind::Error)
                    role="alertdialog"
                >
                    <p class="notice-message">{move || notice().map(|n| n.message).unwrap_or_default()}</p>
                    <button type="button" class="btn primary" on:click=move |_| ctx.view.update(|v| v.dismiss_notice())>
                        "OK"
                    </button>
                </div>
            </div>
        </Show>
    }
}
