//! Catalog Adapters - In-process implementations of CatalogLookup.
//!
//! The PostgreSQL reader lives in `adapters::postgres`.

mod in_memory;

pub use in_memory::InMemoryCatalog;
