//! Receipt arithmetic.

use rust_decimal::Decimal;

use crate::domain::catalog::Money;

/// Subtotal, tax and total for a checkout. Nothing is rounded until display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReceiptTotals {
    pub subtotal: Money,
    pub tax: Money,
    pub total: Money,
}

impl ReceiptTotals {
    pub fn compute(prices: impl IntoIterator<Item = Money>, tax_rate: Decimal) -> Self {
        let subtotal: Money = prices.into_iter().sum();
        let tax = subtotal.times(tax_rate);
        Self {
            subtotal,
            tax,
            total: subtotal + tax,
        }
    }
}
