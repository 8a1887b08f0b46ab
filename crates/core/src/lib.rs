//! Stockroom Core - Shared types library.
//!
//! This crate provides common types used across all Stockroom components:
//! - `web` - The product manager web application
//! - `integration-tests` - End-to-end tests against a running server
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no HTTP clients. This keeps
//! it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs and the rating value type

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
