//! Client-side file download via Blob URL and a transient anchor.

use gloo_timers::callback::Timeout;
use wasm_bindgen::{JsCast, JsValue};

/// Browsers may start the download after `click()` returns
const REVOKE_DELAY_MS: u32 = 1_000;

pub fn download_text(filename: &str, contents: &str) -> Result<(), JsValue> {
    let parts = js_sys::Array::of1(&JsValue::from_str(contents));
    let blob = web_sys::Blob::new_with_str_sequence(&parts)?;
    let url = web_sys::Url::create_object_url_with_blob(&blob)?;

    let document = leptos::prelude::document();
    let anchor = document
        .create_element("a")?
        .dyn_into::<web_sys::HtmlAnchorElement>()
        .map_err(JsValue::from)?;
    anchor.set_href(&url);
    anchor.set_download(filename);
    anchor.click();

    Timeout::new(REVOKE_DELAY_MS, move || {
        if let Err(err) = web_sys::Url::revoke_object_url(&url) {
            log::warn!("[EXPORT] Could not revoke {}: {:?}", url, err);
        }
    })
    .forget();
    Ok(())
}
