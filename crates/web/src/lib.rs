//! Stockroom web application library.
//!
//! This crate provides the product manager as a library, allowing it to
//! be tested and reused by the binary in `main.rs`.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod catalog;
pub mod config;
pub mod error;
pub mod filters;
pub mod forms;
pub mod routes;
pub mod state;
pub mod store;
