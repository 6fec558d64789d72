//! # IO Module
//!
//! The adapter layer between a view and the domain. It turns domain values
//! into the `shared` DTOs a view renders or exports, so views never depend
//! on domain types directly.

pub mod mappers;
