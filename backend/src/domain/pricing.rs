//! Totals and price formatting.
//!
//! Formatting is presentational, but the collapsing rule is relied on by the
//! view: a range whose bounds are equal is shown as a single price.

use shared::PriceTotal;

use super::models::Item;

/// Separator between the two bounds of a formatted range
pub const RANGE_SEPARATOR: &str = " – ";

/// Sum min and max prices across all items. An empty list totals to zero.
pub fn calculate_total(items: &[Item]) -> PriceTotal {
    items.iter().fold(PriceTotal::default(), |total, item| PriceTotal {
        min: total.min + item.min_price,
        max: total.max + item.max_price,
    })
}

/// Formats prices with a currency symbol and two decimals
#[derive(Debug, Clone)]
pub struct PriceFormatter {
    currency_symbol: String,
}

impl PriceFormatter {
    pub fn new(currency_symbol: impl Into<String>) -> Self {
        Self {
            currency_symbol: currency_symbol.into(),
        }
    }

    pub fn currency_symbol(&self) -> &str {
        &self.currency_symbol
    }

    /// Format an amount for display, e.g. "¥3.50"
    pub fn format_price(&self, amount: f64) -> String {
        format!("{}{:.2}", self.currency_symbol, amount)
    }

    /// Format a price range; equal bounds collapse to a single price
    pub fn format_range(&self, min_price: f64, max_price: f64) -> String {
        if min_price == max_price {
            self.format_price(min_price)
        } else {
            format!(
                "{}{}{}",
                self.format_price(min_price),
                RANGE_SEPARATOR,
                self.format_price(max_price)
            )
        }
    }

    pub fn format_total(&self, total: &PriceTotal) -> String {
        self.format_range(total.min, total.max)
    }
}

impl Default for PriceFormatter {
    fn default() -> Self {
        Self::new(crate::config::DEFAULT_CURRENCY_SYMBOL)
    }
}
