//! Catalog Cache Module
//!
//! Owns the upstream cloud catalog for the lifetime of the process.
//!
//! ## Workflow
//! 1. **Fetch**: A [`source::CatalogSource`] retrieves the raw document (HTTPS in production).
//! 2. **Decode**: [`parser::parse_catalog`] validates each cloud entry, assigns sequential
//!    ids and derives the provider list.
//! 3. **Cache**: [`cache::CatalogCache`] stores the resulting snapshot once and hands out
//!    shared references to it. Failed fetches are not cached.
//!
//! ## Submodules
//! - **`cache`**: Fetch-once snapshot store.
//! - **`parser`**: Upstream document decoding and provider derivation.
//! - **`source`**: The upstream seam and its HTTP implementation.
//! - **`types`**: Data model and upstream wire DTOs.

pub mod cache;
pub mod parser;
pub mod source;
pub mod types;

#[cfg(test)]
pub(crate) mod fixtures;
