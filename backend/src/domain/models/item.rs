//! Domain model for a shopping list item.
use chrono::{DateTime, Utc};
use shared::PriceMode;

/// Item identifier, allocated from the list's counter and never reused
pub type ItemId = u64;

#[derive(Debug, Clone, PartialEq)]
pub struct Item {
    pub id: ItemId,
    pub name: String,
    pub note: String,
    pub min_price: f64,
    pub max_price: f64,
    pub price_mode: PriceMode,
    pub created_at: DateTime<Utc>,
}

impl Item {
    /// Check the price invariants: finite, non-negative, min ≤ max
    pub fn has_valid_prices(&self) -> bool {
        self.min_price.is_finite()
            && self.max_price.is_finite()
            && self.min_price >= 0.0
            && self.max_price >= 0.0
            && self.min_price <= self.max_price
    }
}
