//! Core types for Stockroom.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod id;
pub mod rating;

pub use id::ProductId;
pub use rating::Rating;
