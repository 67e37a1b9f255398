//! Catalog Actions
//!
//! Network flows: fetch, update and create. Each one reads what it needs from
//! the view, awaits the service without holding a borrow, then applies the
//! outcome. Concurrent submissions are not deduplicated; the last response wins.

use std::cell::RefCell;

use leptos::prelude::*;

use super::CatalogView;
use crate::models::{ItemPatch, NewItem};
use crate::service::CatalogService;

/// Somewhere a [`CatalogView`] lives between awaits
pub trait ViewCell {
    /// `None` if the view has been torn down
    fn inspect<R>(&self, f: impl FnOnce(&CatalogView) -> R) -> Option<R>;
    fn modify<R>(&self, f: impl FnOnce(&mut CatalogView) -> R) -> Option<R>;
}

impl ViewCell for RwSignal<CatalogView> {
    fn inspect<R>(&self, f: impl FnOnce(&CatalogView) -> R) -> Option<R> {
        self.try_with(f)
    }

    fn modify<R>(&self, f: impl FnOnce(&mut CatalogView) -> R) -> Option<R> {
        self.try_update(f)
    }
}

impl ViewCell for RefCell<CatalogView> {
    fn inspect<R>(&self, f: impl FnOnce(&CatalogView) -> R) -> Option<R> {
        Some(f(&self.borrow()))
    }

    fn modify<R>(&self, f: impl FnOnce(&mut CatalogView) -> R) -> Option<R> {
        Some(f(&mut self.borrow_mut()))
    }
}

/// Fetch the full list and replace local state
pub async fn load(service: &impl CatalogService, view: &impl ViewCell) {
    log::info!("[LOAD] Fetching products");
    view.modify(CatalogView::begin_load);
    let result = service.list_items().await;
    match &result {
        Ok(items) => log::info!("[LOAD] Loaded {} products", items.len()),
        Err(err) => log::error!("[LOAD] {}", err),
    }
    view.modify(|v| v.finish_load(result));
}

/// Send a partial update for `id`
pub async fn update_item(service: &impl CatalogService, view: &impl ViewCell, id: u32, patch: ItemPatch) {
    log::info!("[UPDATE] Updating product {}", id);
    let result = service.update_item(id, &patch).await;
    match &result {
        Ok(()) => log::info!("[UPDATE] Product {} updated", id),
        Err(err) => log::error!("[UPDATE] Product {}: {}", id, err),
    }
    view.modify(|v| v.finish_update(id, &patch, result));
}

/// Submit the open edit dialog
pub async fn submit_edit(service: &impl CatalogService, view: &impl ViewCell) {
    let Some((id, patch)) = view
        .inspect(|v| v.editing.as_ref().map(|form| (form.id, form.to_patch())))
        .flatten()
    else {
        log::warn!("[UPDATE] Submit with no product selected");
        return;
    };
    update_item(service, view, id, patch).await;
}

/// Create, then reload so server-assigned fields are authoritative
pub async fn create_item(service: &impl CatalogService, view: &impl ViewCell, new_item: NewItem) {
    log::info!("[CREATE] Creating product {:?}", new_item.title);
    let result = service.create_item(&new_item).await;
    match &result {
        Ok(item) => log::info!("[CREATE] Created product {}", item.id),
        Err(err) => log::error!("[CREATE] {}", err),
    }
    if view.modify(|v| v.finish_create(result)).unwrap_or(false) {
        load(service, view).await;
    }
}

/// Submit the create dialog as currently filled in
pub async fn submit_create(service: &impl CatalogService, view: &impl ViewCell) {
    let Some(new_item) = view.inspect(|v| v.draft.to_new_item()) else {
        return;
    };
    create_item(service, view, new_item).await;
}
