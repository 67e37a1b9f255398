//! Edit Dialog Component
//!
//! Opened by selecting a row; submits title, price and description.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::catalog::EditForm;
use crate::context::{use_catalog, CatalogContext};

/// Current value of one edit form field
fn form_value(ctx: CatalogContext, get: fn(&EditForm) -> String) -> impl Fn() -> String + Clone {
    move || ctx.view.with(|v| v.editing.as_ref().map(get).unwrap_or_default())
}

/// Input handler writing into the open edit form
fn on_form_input<E: JsCast>(ctx: CatalogContext, set: fn(&mut EditForm, String)) -> impl Fn(E) + Clone {
    move |ev: E| {
        let value = event_target_value(&ev);
        ctx.view.update(|v| {
            if let Some(form) = v.editing.as_mut() {
                set(form, value);
            }
        });
    }
}

#[component]
pub fn EditDialog() -> impl IntoView {
    let ctx = use_catalog();

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        ctx.submit_edit();
    };

    view! {
        <Show when=move || ctx.view.with(|v| v.editing.is_some())>
            <div class="modal-backdrop">
                <form class="modal edit-dialog" on:submit=on_submit>
                    <div class="modal-header">
                        <h2>"Edit Product #" {move || ctx.view.with(|v| v.editing.as_ref().map(|f| f.id))}</h2>
                        <button type="button" class="btn-close" on:click=move |_| ctx.view.update(|v| v.close_editor())>
                            "✕"
                        </button>
                    </div>
                    <label>
                        "Title"
                        <input type="text" prop:value=form_value(ctx, |f| f.title.clone()) on:input=on_form_input(ctx, |f, s| f.title = s) />
                    </label>
                    <label>
                        "Price"
                        <input type="number" step="0.01" prop:value=form_value(ctx, |f| f.price.clone()) on:input=on_form_input(ctx, |f, s| f.price = s) />
                    </label>
                    <label>
                        "Description"
                        <textarea prop:value=form_value(ctx, |f| f.description.clone()) on:input=on_form_input(ctx, |f, s| f.description = s)></textarea>
                    </label>
                    <div class="modal-footer">
                        <button type="button" class="btn" on:click=move |_| ctx.view.update(|v| v.close_editor())>
                            "Cancel"
                        </button>
                        <button type="submit" class="btn primary">"Save"</button>
                    </div>
                </form>
            </div>
        </Show>
    }
}
