//! Catalog Service
//!
//! HTTP+JSON bindings to the remote product collection.

use crate::error::CatalogError;
use crate::models::{Item, ItemPatch, NewItem};

/// List / update / create over the remote catalog.
#[allow(async_fn_in_trait)]
pub trait CatalogService {
    /// `GET {base}`
    async fn list_items(&self) -> Result<Vec<Item>, CatalogError>;
    /// `PUT {base}/{id}`; only the status matters
    async fn update_item(&self, id: u32, patch: &ItemPatch) -> Result<(), CatalogError>;
    /// `POST {base}`
    async fn create_item(&self, new_item: &NewItem) -> Result<Item, CatalogError>;
}

#[derive(Debug, Clone)]
pub struct HttpCatalogService {
    client: reqwest::Client,
    base: String,
}

impl HttpCatalogService {
    pub fn new(base: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base: base.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    fn item_url(&self, id: u32) -> String {
        format!("{}/{}", self.base, id)
    }
}

fn network(operation: &'static str) -> impl Fn(reqwest::Error) -> CatalogError {
    move |e| CatalogError::network(operation, e.to_string())
}

impl CatalogService for HttpCatalogService {
    async fn list_items(&self) -> Result<Vec<Item>, CatalogError> {
        self.client
            .get(&self.base)
            .send()
            .await
            .and_then(reqwest::Response::error_for_status)
            .map_err(network("load"))?
            .json::<Vec<Item>>()
            .await
            .map_err(network("load"))
    }

    async fn update_item(&self, id: u32, patch: &ItemPatch) -> Result<(), CatalogError> {
        self.client
            .put(self.item_url(id))
            .json(patch)
            .send()
            .await
            .and_then(reqwest::Response::error_for_status)
            .map_err(network("update"))?;
        Ok(())
    }

    async fn create_item(&self, new_item: &NewItem) -> Result<Item, CatalogError> {
        self.client
            .post(&self.base)
            .json(new_item)
            .send()
            .await
            .and_then(reqwest::Response::error_for_status)
            .map_err(network("create"))?
            .json::<Item>()
            .await
            .map_err(network("create"))
    }
}
