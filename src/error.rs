//! Catalog Errors

use thiserror::Error;

/// The only failure the view knows about: the service call did not succeed.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CatalogError {
    #[error("{operation} failed: {message}")]
    Network {
        operation: &'static str,
        message: String,
    },
}

impl CatalogError {
    pub fn network(operation: &'static str, message: impl Into<String>) -> Self {
        Self::Network {
            operation,
            message: message.into(),
        }
    }
}
