//! PostgreSQL adapters - Database implementations for read ports.
//!
//! - `PostgresCatalogReader` - Product and customer reads from the `saleslt` schema

mod catalog_reader;

pub use catalog_reader::PostgresCatalogReader;
