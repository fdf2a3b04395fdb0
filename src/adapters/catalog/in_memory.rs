//! In-memory catalog for tests and offline runs.
//!
//! Records every product filter, id and email lookup so tests can assert on
//! what the engine asked for.

use async_trait::async_trait;
use std::sync::{Arc, Mutex};

use crate::domain::catalog::{CustomerProfile, Product, ProductId};
use crate::ports::{CatalogLookup, LookupError};

/// How many products an unfiltered listing returns.
const TOP_PRODUCTS: usize = 5;

#[derive(Debug, Clone, Default)]
pub struct InMemoryCatalog {
    products: Vec<Product>,
    customers: Vec<CustomerProfile>,
    failure: Option<LookupError>,
    product_queries: Arc<Mutex<Vec<Option<String>>>>,
    email_queries: Arc<Mutex<Vec<String>>>,
    id_queries: Arc<Mutex<Vec<ProductId>>>,
}

impl InMemoryCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a product. Insertion order is the best-seller ranking.
    pub fn with_product(mut self, product: Product) -> Self {
        self.products.push(product);
        self
    }

    pub fn with_customer(mut self, customer: CustomerProfile) -> Self {
        self.customers.push(customer);
        self
    }

    /// Makes every lookup fail with `error`.
    pub fn failing_with(mut self, error: LookupError) -> Self {
        self.failure = Some(error);
        self
    }

    /// Filters passed to `products`, in call order.
    pub fn product_queries(&self) -> Vec<Option<String>> {
        self.product_queries.lock().map(|q| q.clone()).unwrap_or_default()
    }

    /// Emails passed to `customer_by_email`, in call order.
    pub fn email_queries(&self) -> Vec<String> {
        self.email_queries.lock().map(|q| q.clone()).unwrap_or_default()
    }

    /// Ids passed to `product_by_id`, in call order.
    pub fn id_queries(&self) -> Vec<ProductId> {
        self.id_queries.lock().map(|q| q.clone()).unwrap_or_default()
    }

    /// Total number of lookups of any kind.
    pub fn lookup_count(&self) -> usize {
        self.product_queries().len() + self.email_queries().len() + self.id_queries().len()
    }

    fn check(&self) -> Result<(), LookupError> {
        match &self.failure {
            Some(err) => Err(err.clone()),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl CatalogLookup for InMemoryCatalog {
    async fn customer_by_email(
        &self,
        email: &str,
    ) -> Result<Option<CustomerProfile>, LookupError> {
        if let Ok(mut queries) = self.email_queries.lock() {
            queries.push(email.to_string());
        }
        self.check()?;

        Ok(self
            .customers
            .iter()
            .find(|c| c.email.eq_ignore_ascii_case(email))
            .cloned())
    }

    async fn products(&self, filter: Option<&str>) -> Result<Vec<Product>, LookupError> {
        if let Ok(mut queries) = self.product_queries.lock() {
            queries.push(filter.map(str::to_string));
        }
        self.check()?;

        let found = match filter {
            None => self.products.iter().take(TOP_PRODUCTS).cloned().collect(),
            Some(text) => {
                let needle = text.to_lowercase();
                self.products
                    .iter()
                    .filter(|p| p.name.to_lowercase().contains(&needle))
                    .cloned()
                    .collect()
            }
        };
        Ok(found)
    }

    async fn product_by_id(&self, id: ProductId) -> Result<Option<Product>, LookupError> {
        if let Ok(mut queries) = self.id_queries.lock() {
            queries.push(id);
        }
        self.check()?;
        Ok(self.products.iter().find(|p| p.product_id == id).cloned())
    }
}
