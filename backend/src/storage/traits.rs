//! # Storage Traits
//!
//! This module defines the storage abstraction the domain layer persists
//! through. The list store only ever needs a string-keyed, string-valued
//! store scoped to one user, so that is all the trait asks for.

use anyhow::Result;

/// Trait defining the interface for key-value persistence
///
/// Implementations must survive process restarts (except the in-memory one
/// used for tests and embedding). All operations are synchronous; a call
/// either completes or returns an error.
pub trait KeyValueStorage: Send + Sync {
    /// Store a value, overwriting any existing value for the same key
    fn put_value(&self, key: &str, value: &str) -> Result<()>;

    /// Retrieve the value stored under a key, if any
    fn get_value(&self, key: &str) -> Result<Option<String>>;
}
