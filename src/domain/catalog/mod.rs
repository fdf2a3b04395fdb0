//! Catalog domain.
//!
//! Read models for products and customers as the lookup adapters return
//! them, and the `Money` value object used for every price.

mod customer;
mod money;
mod product;

pub use customer::{CustomerId, CustomerProfile};
pub use money::Money;
pub use product::{Product, ProductId};
