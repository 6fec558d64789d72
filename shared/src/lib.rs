use serde::{Deserialize, Serialize};
use std::fmt;

/// How an item's price is expressed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PriceMode {
    /// A single price, stored as min == max
    #[default]
    Fixed,
    /// A min–max price range
    Range,
}

impl PriceMode {
    /// The other mode (used by the entry-mode toggle)
    pub fn toggled(self) -> Self {
        match self {
            PriceMode::Fixed => PriceMode::Range,
            PriceMode::Range => PriceMode::Fixed,
        }
    }

    /// Mode implied by a pair of prices
    pub fn for_prices(min_price: f64, max_price: f64) -> Self {
        if min_price == max_price {
            PriceMode::Fixed
        } else {
            PriceMode::Range
        }
    }
}

impl fmt::Display for PriceMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PriceMode::Fixed => write!(f, "fixed"),
            PriceMode::Range => write!(f, "range"),
        }
    }
}

/// Item as exchanged with the view and written into exports
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub id: u64,
    pub name: String,
    pub note: String,
    pub min_price: f64,
    pub max_price: f64,
    pub price_mode: PriceMode,
    /// Creation time (RFC 3339, millisecond precision, UTC)
    pub created_at: String,
}

/// Sum of the minimum and maximum prices of every item
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PriceTotal {
    pub min: f64,
    pub max: f64,
}

/// Category of an operation result, mapped by the view to a banner style
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutcomeKind {
    Success,
    Error,
    Info,
}

/// Result of a list operation: what happened and what to tell the user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OperationOutcome {
    pub kind: OutcomeKind,
    pub message: String,
}

impl OperationOutcome {
    pub fn success(message: impl Into<String>) -> Self {
        Self { kind: OutcomeKind::Success, message: message.into() }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self { kind: OutcomeKind::Error, message: message.into() }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self { kind: OutcomeKind::Info, message: message.into() }
    }

    pub fn is_success(&self) -> bool {
        self.kind == OutcomeKind::Success
    }

    pub fn is_error(&self) -> bool {
        self.kind == OutcomeKind::Error
    }
}

/// A single row of the rendered list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemView {
    pub id: u64,
    pub name: String,
    pub note: String,
    /// Price formatted for display, e.g. "¥3.50" or "¥5.00 – ¥7.25"
    pub formatted_price: String,
    pub price_mode: PriceMode,
    /// Creation date (YYYY-MM-DD)
    pub created_date: String,
    pub is_editing: bool,
    pub min_price: f64,
    pub max_price: f64,
}

/// Everything the view needs to re-render after an operation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListSnapshot {
    pub items: Vec<ItemView>,
    pub total: PriceTotal,
    pub formatted_total: String,
    pub price_entry_mode: PriceMode,
    pub editing_id: Option<u64>,
    pub is_empty: bool,
}

/// Totals block of an export document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportSummary {
    pub item_count: usize,
    pub total_min_price: f64,
    pub total_max_price: f64,
}

/// Point-in-time export of the whole list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportDocument {
    pub items: Vec<Item>,
    /// Export time (RFC 3339, UTC)
    pub export_time: String,
    pub total_price: PriceTotal,
    pub summary: ExportSummary,
}
