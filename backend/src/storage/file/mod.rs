//! # File Storage Module
//!
//! File-based implementation of [`KeyValueStorage`](crate::storage::KeyValueStorage).
//! One data directory per user; one JSON file per key.

pub mod connection;
pub mod key_value_repository;

pub use connection::{FileConnection, DATA_DIR_ENV_VAR};
pub use key_value_repository::FileKeyValueRepository;
