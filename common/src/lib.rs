//! Shared building blocks for the catalog browser.
//!
//! This crate holds the small types every other crate leans on: error
//! call-site tracking and HTTP status helpers. It carries no business logic.
//!
//! ## Architecture
//!
//! - **common** (this crate): Error plumbing shared by all layers
//! - **models**: Catalog entities decoded from the remote API
//! - **client-core**: Fetching, caching, rendering and the controller
//! - **catalog**: Desktop shell wiring everything together

pub mod error;
pub mod http_status;

#[cfg(test)]
mod tests;

pub use error::error_location::ErrorLocation;
pub use http_status::HttpStatusCode;
