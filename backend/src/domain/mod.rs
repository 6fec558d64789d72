//! # Domain Module
//!
//! Business rules for the shopping list: the item model, price validation,
//! totals and formatting, export, and the [`ListStore`] that ties them
//! together. Persistence is reached only through the storage traits.

pub mod clock;
pub mod commands;
pub mod export_service;
pub mod item_validation;
pub mod list_store;
pub mod models;
pub mod pricing;

pub use clock::{Clock, FixedClock, SystemClock};
pub use export_service::ExportService;
pub use item_validation::{ItemValidationError, ItemValidator, ValidatedPrices};
pub use list_store::ListStore;
pub use pricing::{calculate_total, PriceFormatter};
