//! # List Codec
//!
//! Converts a [`ListState`] to and from the persisted JSON blob.
//!
//! ## Blob Format
//!
//! ```json
//! {
//!   "items": [
//!     {
//!       "id": 1,
//!       "name": "Apples",
//!       "note": "",
//!       "minPrice": 3.5,
//!       "maxPrice": 3.5,
//!       "priceMode": "fixed",
//!       "createdAt": "2024-05-01T10:00:00.000Z"
//!     }
//!   ],
//!   "nextId": 2,
//!   "priceMode": "fixed"
//! }
//! ```
//!
//! The top-level `priceMode` is the entry mode; `priceEntryMode` is accepted
//! on read as well, and `priceMode` wins when both hold a usable value. `nextId` and the entry mode are tolerated field by field:
//! a missing or unusable value falls back to its default. Anything wrong with
//! the document as a whole, or with an item, is a [`DecodeError`]. Choosing
//! what to do about a decode error is left to the caller.

use chrono::{DateTime, SecondsFormat, Utc};
use log::warn;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use shared::PriceMode;
use std::collections::HashSet;

use crate::domain::models::list_state::FIRST_ITEM_ID;
use crate::domain::models::{Item, ItemId, ListState};

/// Reasons a stored blob could not be turned back into a list
#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    #[error("stored list is not valid JSON: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error("stored list is not a JSON object")]
    NotAnObject,
    #[error("item {id} has an invalid createdAt timestamp '{value}'")]
    InvalidTimestamp { id: ItemId, value: String },
    #[error("item {id} is invalid: {reason}")]
    InvalidItem { id: ItemId, reason: String },
    #[error("item id {0} appears more than once")]
    DuplicateId(ItemId),
}

/// Item as it appears in the blob, with its timestamp kept as a string
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct StoredItem {
    id: ItemId,
    name: String,
    #[serde(default)]
    note: String,
    min_price: f64,
    max_price: f64,
    #[serde(default)]
    price_mode: Option<PriceMode>,
    created_at: String,
}

/// Shape written by [`encode_list`]
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct StoredList {
    items: Vec<StoredItem>,
    next_id: ItemId,
    price_mode: PriceMode,
}

/// Shape accepted by [`decode_list`]; the scalar fields stay loose so each can
/// fall back on its own
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawStoredList {
    #[serde(default)]
    items: Option<Vec<StoredItem>>,
    #[serde(default)]
    next_id: Option<Value>,
    #[serde(default)]
    price_mode: Option<Value>,
    #[serde(default)]
    price_entry_mode: Option<Value>,
}

/// Format a timestamp the way the blob and exports store it
pub fn format_timestamp(timestamp: &DateTime<Utc>) -> String {
    timestamp.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Parse a stored timestamp back into UTC
pub fn parse_timestamp(value: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(value.trim())
        .ok()
        .map(|dt| dt.with_timezone(&Utc))
}

impl From<&Item> for StoredItem {
    fn from(item: &Item) -> Self {
        Self {
            id: item.id,
            name: item.name.clone(),
            note: item.note.clone(),
            min_price: item.min_price,
            max_price: item.max_price,
            price_mode: Some(item.price_mode),
            created_at: format_timestamp(&item.created_at),
        }
    }
}

impl StoredItem {
    fn into_domain(self) -> Result<Item, DecodeError> {
        let created_at = parse_timestamp(&self.created_at).ok_or_else(|| DecodeError::InvalidTimestamp {
            id: self.id,
            value: self.created_at.clone(),
        })?;

        if self.name.trim().is_empty() {
            return Err(DecodeError::InvalidItem {
                id: self.id,
                reason: "name is empty".to_string(),
            });
        }

        let price_mode = self
            .price_mode
            .unwrap_or_else(|| PriceMode::for_prices(self.min_price, self.max_price));

        let item = Item {
            id: self.id,
            name: self.name,
            note: self.note,
            min_price: self.min_price,
            max_price: self.max_price,
            price_mode,
            created_at,
        };

        if !item.has_valid_prices() {
            return Err(DecodeError::InvalidItem {
                id: item.id,
                reason: format!("prices {} / {} are not a valid range", item.min_price, item.max_price),
            });
        }

        Ok(item)
    }
}

/// Serialize a list into the persisted blob
pub fn encode_list(state: &ListState) -> serde_json::Result<String> {
    let stored = StoredList {
        items: state.items.iter().map(StoredItem::from).collect(),
        next_id: state.next_id,
        price_mode: state.price_entry_mode,
    };
    serde_json::to_string(&stored)
}

/// Parse a persisted blob back into a list
pub fn decode_list(blob: &str) -> Result<ListState, DecodeError> {
    let value: Value = serde_json::from_str(blob)?;
    if !value.is_object() {
        return Err(DecodeError::NotAnObject);
    }
    let raw: RawStoredList = serde_json::from_value(value)?;

    let mut seen = HashSet::new();
    let mut items = Vec::new();
    for stored in raw.items.unwrap_or_default() {
        let item = stored.into_domain()?;
        if !seen.insert(item.id) {
            return Err(DecodeError::DuplicateId(item.id));
        }
        items.push(item);
    }

    let price_entry_mode = [raw.price_mode, raw.price_entry_mode]
        .into_iter()
        .flatten()
        .find_map(|v| serde_json::from_value::<PriceMode>(v).ok())
        .unwrap_or_default();

    let stored_next_id = raw
        .next_id
        .and_then(|v| v.as_u64())
        .filter(|id| *id >= FIRST_ITEM_ID)
        .unwrap_or(FIRST_ITEM_ID);

    let mut state = ListState {
        items,
        next_id: stored_next_id,
        price_entry_mode,
    };

    // Ids must never be reused, whatever the stored counter says
    if let Some(max_id) = state.max_item_id() {
        if state.next_id <= max_id {
            let repaired = max_id.checked_add(1).ok_or_else(|| DecodeError::InvalidItem {
                id: max_id,
                reason: "id leaves no room for the next id".to_string(),
            })?;
            warn!(
                "Stored nextId {} is not above highest item id {}; repairing to {}",
                state.next_id, max_id, repaired
            );
            state.next_id = repaired;
        }
    }

    Ok(state)
}
