//! Orchestration core of the character catalog browser.
//!
//! - [`catalog_client`]: paginated list and episode requests against the API
//! - [`cursor`]: next/previous page cursors
//! - [`detail_cache`]: memoized episode resolution on a character
//! - [`view`]: pure state → markup rendering
//! - [`controller`]: UI state machine and its actor handle
//! - [`config`]: on-disk settings

pub mod catalog_client;
pub mod config;
pub mod controller;
pub mod cursor;
pub mod detail_cache;
pub mod error;
pub mod view;

#[cfg(test)]
mod tests;

pub const CATALOG_API_HOSTNAME: &str = "rickandmortyapi.com";
pub const CATALOG_API_ROOT: &str = const_format::concatcp!("https://", CATALOG_API_HOSTNAME, "/api");
pub const CATALOG_CHARACTER_BASE_URL: &str =
    const_format::concatcp!(CATALOG_API_ROOT, "/character/");
