//! Catalog Lookup Port - Read access to products and customers.

use async_trait::async_trait;

use crate::domain::catalog::{CustomerProfile, Product, ProductId};

/// Errors that can occur while reading the catalog.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum LookupError {
    #[error("Database error: {0}")]
    Database(String),

    #[error("Lookup timed out")]
    Timeout,

    #[error("Failed to decode row: {0}")]
    Decode(String),
}

/// Port for product and customer reads.
#[async_trait]
pub trait CatalogLookup: Send + Sync {
    /// Finds the customer registered with `email`.
    async fn customer_by_email(&self, email: &str)
        -> Result<Option<CustomerProfile>, LookupError>;

    /// Without a filter, returns the five best-selling products. With one,
    /// returns every product whose name contains the filter text.
    async fn products(&self, filter: Option<&str>) -> Result<Vec<Product>, LookupError>;

    async fn product_by_id(&self, id: ProductId) -> Result<Option<Product>, LookupError>;
}
