//! # Storage Module
//!
//! Handles all data persistence for the shopping list.
//!
//! The domain only depends on [`KeyValueStorage`], a string-keyed store that
//! survives restarts. The list is written as a single JSON document under one
//! key; [`codec`] owns that document's format and [`ListRepository`] ties the
//! two together.
//!
//! ## Implementations
//!
//! - **File**: one JSON file per key in the data directory, atomic writes
//! - **Memory**: a shared in-process map, for tests and embedding

pub mod codec;
pub mod file;
pub mod list_repository;
pub mod memory;
pub mod traits;

#[cfg(test)]
pub mod test_utils;

pub use codec::{decode_list, encode_list, DecodeError};
pub use file::{FileConnection, FileKeyValueRepository};
pub use list_repository::{ListRepository, LoadError};
pub use memory::InMemoryStorage;
pub use traits::KeyValueStorage;
