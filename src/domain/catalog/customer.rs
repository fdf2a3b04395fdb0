//! Customer read model, also stored as the session's profile.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Catalog identifier of a customer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CustomerId(i32);

impl CustomerId {
    pub fn new(id: i32) -> Self {
        Self(id)
    }

    pub fn value(&self) -> i32 {
        self.0
    }
}

impl fmt::Display for CustomerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Who the user is, as far as the assistant knows.
///
/// Starts empty. A successful login fills every field; the name prompt
/// fills only `customer_name`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerProfile {
    pub customer_id: Option<CustomerId>,
    pub customer_name: String,
    pub company_name: String,
    pub email: String,
}

impl CustomerProfile {
    pub fn has_name(&self) -> bool {
        !self.customer_name.trim().is_empty()
    }

    /// Replaces every field with the looked-up record.
    pub fn adopt(&mut self, found: CustomerProfile) {
        *self = found;
    }
}
