//! Product read model.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::Money;
use crate::domain::foundation::ValidationError;

/// Catalog identifier of a product.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(i32);

impl ProductId {
    pub fn new(id: i32) -> Self {
        Self(id)
    }

    pub fn value(&self) -> i32 {
        self.0
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ProductId {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<i32>()
            .map(Self)
            .map_err(|_| ValidationError::not_a_number("product_id", s))
    }
}

/// A product as the catalog describes it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub product_id: ProductId,
    pub name: String,
    pub color: String,
    pub list_price: Money,
    /// Base64 thumbnail, rendered as a data URL on cards.
    pub photo_ref: String,
    pub category: String,
    pub model: String,
}

impl Product {
    /// `category - model - color`, the line shown under a product's title.
    pub fn description(&self) -> String {
        format!("{} - {} - {}", self.category, self.model, self.color)
    }
}
