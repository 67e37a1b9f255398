//! Create Dialog Component
//!
//! Form for a new product. Contents survive a failed submit.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::catalog::CreateForm;
use crate::context::{use_catalog, CatalogContext};

fn draft_value(ctx: CatalogContext, get: fn(&CreateForm) -> String) -> impl Fn() -> String + Clone {
    move || ctx.view.with(|v| get(&v.draft))
}

fn on_draft_input<E: JsCast>(ctx: CatalogContext, set: fn(&mut CreateForm, String)) -> impl Fn(E) + Clone {
    move |ev: E| {
        let value = event_target_value(&ev);
        ctx.view.update(|v| set(&mut v.draft, value));
    }
}

#[component]
pub fn CreateDialog() -> impl IntoView {
    let ctx = use_catalog();

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        ctx.submit_create();
    };

    view! {
        <Show when=move || ctx.view.with(|v| v.creating)>
            <div class="modal-backdrop">
                <form class="modal create-dialog" on:submit=on_submit>
                    <div class="modal-header">
                        <h2>"New Product"</h2>
                        <button type="button" class="btn-close" on:click=move |_| ctx.view.update(|v| v.close_creator())>
                            "✕"
                        </button>
                    </div>
                    <label>
                        "Title"
                        <input type="text" prop:value=draft_value(ctx, |f| f.title.clone()) on:input=on_draft_input(ctx, |f, s| f.title = s) />
                    </label>
                    <label>
                        "Price"
                        <input type="number" step="0.01" prop:value=draft_value(ctx, |f| f.price.clone()) on:input=on_draft_input(ctx, |f, s| f.price = s) />
                    </label>
                    <label>
                        "Description"
                        <textarea prop:value=draft_value(ctx, |f| f.description.clone()) on:input=on_draft_input(ctx, |f, s| f.description = s)></textarea>
                    </label>
                    <label>
                        "Category ID"
                        <input type="number" prop:value=draft_value(ctx, |f| f.category_id.clone()) on:input=on_draft_input(ctx, |f, s| f.category_id = s) />
                    </label>
                    <label>
                        "Image URL"
                        <input type="url" prop:value=draft_value(ctx, |f| f.image.clone()) on:input=on_draft_input(ctx, |f, s| f.image = s) />
                    </label>
                    <div class="modal-footer">
                        <button type="button" class="btn" on:click=move |_| ctx.view.update(|v| v.close_creator())>
                            "Cancel"
                        </button>
                        <button type="submit" class="btn primary">"Create"</button>
                    </div>
                </form>
            </div>
        </Show>
    }
}
