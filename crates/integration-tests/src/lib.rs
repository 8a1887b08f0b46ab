//! Integration tests for Stockroom.
//!
//! # Running Tests
//!
//! ```bash
//! # Start the web app (hydrates its cache from the remote store)
//! cargo run -p stockroom-web
//!
//! # Run the ignored end-to-end tests against it
//! cargo test -p stockroom-integration-tests -- --ignored
//! ```
//!
//! The tests talk HTTP to a running server; `STOCKROOM_BASE_URL`
//! overrides the default `http://localhost:3000`.
