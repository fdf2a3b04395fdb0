//! Shopping cart.

use serde::{Deserialize, Serialize};

use crate::domain::catalog::{CustomerId, Money, Product, ProductId};

/// One product added to the cart. Quantity is always one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLine {
    pub customer_id: Option<CustomerId>,
    pub product_id: ProductId,
    pub product_name: String,
    pub list_price: Money,
    pub photo_ref: String,
}

impl CartLine {
    pub fn for_product(customer_id: Option<CustomerId>, product: &Product) -> Self {
        Self {
            customer_id,
            product_id: product.product_id,
            product_name: product.name.clone(),
            list_price: product.list_price,
            photo_ref: product.photo_ref.clone(),
        }
    }
}

/// Ordered, append-only list of cart lines.
///
/// Identical products are not merged; adding the same product twice yields
/// two lines. Only checkout empties the cart.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, line: CartLine) {
        self.lines.push(line);
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn subtotal(&self) -> Money {
        self.lines.iter().map(|line| line.list_price).sum()
    }

    /// Empties the cart, returning the lines that were checked out.
    pub fn checkout(&mut self) -> Vec<CartLine> {
        std::mem::take(&mut self.lines)
    }
}
