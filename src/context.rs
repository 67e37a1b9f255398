//! Application Context
//!
//! View-model and service handle provided via Leptos Context API.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::catalog::{actions, csv, CatalogView, Notice};
use crate::config::AppConfig;
use crate::download;
use crate::service::HttpCatalogService;

/// Page-session state shared by all components
#[derive(Clone, Copy)]
pub struct CatalogContext {
    /// The view-model; dropped with the root component
    pub view: RwSignal<CatalogView>,
    service: StoredValue<HttpCatalogService, LocalStorage>,
    /// Page sizes offered in the toolbar
    pub page_size_options: StoredValue<Vec<usize>>,
}

impl CatalogContext {
    pub fn new(config: &AppConfig) -> Self {
        let service = HttpCatalogService::new(config.api_base.clone());
        log::debug!("[APP] Catalog service at {}", service.base());
        Self {
            view: RwSignal::new(CatalogView::new(config.page_size)),
            service: StoredValue::new_local(service),
            page_size_options: StoredValue::new(config.page_size_options.clone()),
        }
    }

    /// Fetch the list again
    pub fn reload(&self) {
        let view = self.view;
        let service = self.service.get_value();
        spawn_local(async move {
            actions::load(&service, &view).await;
        });
    }

    /// Submit the edit dialog
    pub fn submit_edit(&self) {
        let view = self.view;
        let service = self.service.get_value();
        spawn_local(async move {
            actions::submit_edit(&service, &view).await;
        });
    }

    /// Submit the create dialog
    pub fn submit_create(&self) {
        let view = self.view;
        let service = self.service.get_value();
        spawn_local(async move {
            actions::submit_create(&service, &view).await;
        });
    }

    /// Download every loaded item as `products.csv`
    pub fn export_csv(&self) {
        let (contents, rows) = self.view.with_untracked(|v| (v.export_csv(), v.items().len()));
        match download::download_text(csv::CSV_FILENAME, &contents) {
            Ok(()) => log::info!("[EXPORT] Exported {} products", rows),
            Err(err) => {
                log::error!("[EXPORT] Download failed: {:?}", err);
                self.view.update(|v| v.notify(Notice::error("Failed to export CSV")));
            }
        }
    }
}

/// Get the catalog context
pub fn use_catalog() -> CatalogContext {
    expect_context::<CatalogContext>()
}
