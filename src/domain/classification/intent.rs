//! Intents the assistant knows how to act on.

use std::fmt;

/// An intent matched by exact name against the classifier's top intent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    Login,
    ProductInfo,
    AddToCart,
    PlaceOrder,
    /// Any intent name the assistant does not handle, including `None`.
    Unrecognized(String),
}

impl Intent {
    /// Exact, case-sensitive match on the intent name.
    pub fn from_name(name: &str) -> Self {
        match name {
            "Login" => Intent::Login,
            "ProductInfo" => Intent::ProductInfo,
            "AddToCart" => Intent::AddToCart,
            "PlaceOrder" => Intent::PlaceOrder,
            other => Intent::Unrecognized(other.to_string()),
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Intent::Login => "Login",
            Intent::ProductInfo => "ProductInfo",
            Intent::AddToCart => "AddToCart",
            Intent::PlaceOrder => "PlaceOrder",
            Intent::Unrecognized(name) => name,
        }
    }
}

impl fmt::Display for Intent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
