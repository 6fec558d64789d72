//! Export service domain logic for the shopping list.
//!
//! Builds the export document (items, export time, totals and a summary) and
//! the suggested file name. Writing or downloading the file is up to the
//! caller.

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use log::info;
use shared::{ExportDocument, ExportSummary};

use crate::domain::models::Item;
use crate::domain::pricing::calculate_total;
use crate::io::mappers::ItemMapper;
use crate::storage::codec::format_timestamp;

/// Export service that handles all export-related business logic
#[derive(Debug, Clone)]
pub struct ExportService {
    file_prefix: String,
}

impl ExportService {
    pub fn new(file_prefix: impl Into<String>) -> Self {
        Self {
            file_prefix: file_prefix.into(),
        }
    }

    /// Build the export document. Returns `None` for an empty list.
    pub fn build_document(&self, items: &[Item], exported_at: DateTime<Utc>) -> Option<ExportDocument> {
        if items.is_empty() {
            return None;
        }

        let total_price = calculate_total(items);
        let document = ExportDocument {
            items: ItemMapper::to_dto_list(items),
            export_time: format_timestamp(&exported_at),
            total_price,
            summary: ExportSummary {
                item_count: items.len(),
                total_min_price: total_price.min,
                total_max_price: total_price.max,
            },
        };

        info!("📄 EXPORT: Built export document with {} items", document.summary.item_count);
        Some(document)
    }

    /// File name for an export made at the given time: `<prefix>-<YYYY-MM-DD>.json`
    pub fn file_name(&self, exported_at: DateTime<Utc>) -> String {
        format!("{}-{}.json", self.file_prefix, exported_at.format("%Y-%m-%d"))
    }

    /// Pretty-printed JSON for the export file
    pub fn to_json(&self, document: &ExportDocument) -> Result<String> {
        serde_json::to_string_pretty(document).context("Failed to encode export document")
    }
}

impl Default for ExportService {
    fn default() -> Self {
        Self::new(crate::config::DEFAULT_EXPORT_FILE_PREFIX)
    }
}
