//! Cart summary totals.

use serde::{Deserialize, Serialize};

use crate::cart::LineItem;
use crate::error::CartError;
use crate::money::{Currency, Money};

/// Summary figures for a cart.
///
/// No taxes, shipping or fees are applied, so `total` always equals
/// `subtotal`; both are kept because the page shows both rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartTotals {
    /// Sum of quantities.
    pub item_count: u64,
    /// Sum of price × quantity.
    pub subtotal: Money,
    /// Amount due.
    pub total: Money,
}

impl CartTotals {
    /// Compute totals over line items.
    pub fn compute(items: &[LineItem], currency: Currency) -> Result<Self, CartError> {
        let item_count = items.iter().map(|i| u64::from(i.quantity)).sum();
        let line_totals = items
            .iter()
            .map(|i| i.line_total(currency))
            .collect::<Result<Vec<_>, _>>()?;
        let subtotal =
            Money::try_sum(line_totals.iter(), currency).ok_or(CartError::Overflow)?;

        Ok(Self {
            item_count,
            subtotal,
            total: subtotal,
        })
    }
}
