//! Item validation for the shopping list.
//!
//! Price inputs arrive as the raw text the user typed. This module cleans and
//! parses them and checks the item rules. There are two paths, picked by the
//! entry mode: fixed (one price) and range (min and max). Every failure has
//! its own variant so the view can show a specific message.

use log::debug;

/// Reasons an item cannot be created or saved
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ItemValidationError {
    #[error("Please enter an item name")]
    MissingName,
    #[error("Please enter a valid price")]
    InvalidPrice,
    #[error("Please enter a valid minimum price")]
    InvalidMinPrice,
    #[error("Please enter a valid maximum price")]
    InvalidMaxPrice,
    #[error("The minimum price cannot be greater than the maximum price")]
    MinPriceExceedsMax,
}

/// Prices that passed validation; `min_price == max_price` for fixed prices
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValidatedPrices {
    pub min_price: f64,
    pub max_price: f64,
}

/// Validates item names and price inputs
#[derive(Debug, Clone)]
pub struct ItemValidator {
    currency_symbol: String,
}

impl ItemValidator {
    pub fn new(currency_symbol: impl Into<String>) -> Self {
        Self {
            currency_symbol: currency_symbol.into(),
        }
    }

    /// Clean and parse an amount typed by the user.
    ///
    /// Strips the currency symbol, spaces and thousands separators. Returns
    /// `None` for anything that is not a finite, non-negative number. A comma
    /// only counts as a thousands separator when it sits between groups of
    /// three digits, so a decimal comma like `3,50` is rejected.
    pub fn clean_and_parse_amount(&self, amount_input: &str) -> Option<f64> {
        let mut cleaned = amount_input.trim().to_string();
        if !self.currency_symbol.is_empty() {
            cleaned = cleaned.replace(&self.currency_symbol, "");
        }
        cleaned.retain(|c| c != ' ');

        let cleaned = match Self::strip_thousands_separators(&cleaned) {
            Some(cleaned) if !cleaned.is_empty() => cleaned,
            _ => {
                debug!("Could not read amount '{}'", amount_input);
                return None;
            }
        };

        match cleaned.parse::<f64>() {
            // "-0" parses to negative zero, which would print as "-0.00"
            Ok(amount) if amount == 0.0 => Some(0.0),
            Ok(amount) if amount.is_finite() && amount > 0.0 => Some(amount),
            Ok(amount) => {
                debug!("Rejected amount {} from input '{}'", amount, amount_input);
                None
            }
            Err(e) => {
                debug!("Could not parse amount '{}': {}", amount_input, e);
                None
            }
        }
    }

    fn strip_thousands_separators(amount: &str) -> Option<String> {
        let mut groups = amount.split(',');
        let leading = groups.next().unwrap_or_default();
        if !amount.contains(',') {
            return Some(leading.to_string());
        }

        let leading_digits = leading.trim_start_matches(['+', '-']);
        if leading_digits.is_empty()
            || leading_digits.len() > 3
            || !leading_digits.chars().all(|c| c.is_ascii_digit())
        {
            return None;
        }

        let mut joined = leading.to_string();
        let mut seen_decimal_point = false;
        for group in groups {
            if seen_decimal_point {
                return None;
            }
            let (whole, fraction) = match group.split_once('.') {
                Some((whole, fraction)) => {
                    seen_decimal_point = true;
                    (whole, Some(fraction))
                }
                None => (group, None),
            };
            if whole.len() != 3 || !whole.chars().all(|c| c.is_ascii_digit()) {
                return None;
            }
            joined.push_str(whole);
            if let Some(fraction) = fraction {
                joined.push('.');
                joined.push_str(fraction);
            }
        }

        Some(joined)
    }

    /// Fixed-price path: a name and one price
    pub fn validate_fixed_price(
        &self,
        name: &str,
        price_input: &str,
    ) -> Result<ValidatedPrices, ItemValidationError> {
        Self::validate_name(name)?;

        let price = self
            .clean_and_parse_amount(price_input)
            .ok_or(ItemValidationError::InvalidPrice)?;

        Ok(ValidatedPrices {
            min_price: price,
            max_price: price,
        })
    }

    /// Range path: a name, a min and a max, with min ≤ max.
    ///
    /// Also used when saving an edit, where a fixed price is simply min == max.
    pub fn validate_range_price(
        &self,
        name: &str,
        min_input: &str,
        max_input: &str,
    ) -> Result<ValidatedPrices, ItemValidationError> {
        Self::validate_name(name)?;

        let min_price = self
            .clean_and_parse_amount(min_input)
            .ok_or(ItemValidationError::InvalidMinPrice)?;
        let max_price = self
            .clean_and_parse_amount(max_input)
            .ok_or(ItemValidationError::InvalidMaxPrice)?;

        if min_price > max_price {
            return Err(ItemValidationError::MinPriceExceedsMax);
        }

        Ok(ValidatedPrices { min_price, max_price })
    }

    fn validate_name(name: &str) -> Result<(), ItemValidationError> {
        if name.trim().is_empty() {
            Err(ItemValidationError::MissingName)
        } else {
            Ok(())
        }
    }
}

impl Default for ItemValidator {
    fn default() -> Self {
        Self::new(crate::config::DEFAULT_CURRENCY_SYMBOL)
    }
}
