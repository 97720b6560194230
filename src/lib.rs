//! Cloud Catalog Service Library
//!
//! A small HTTP backend that proxies an upstream cloud-provider catalog,
//! caches it in memory and serves filtered, distance-sorted views of it.
//!
//! ## Architecture Modules
//! - **`geo`**: Haversine great-circle distance.
//! - **`catalog`**: The fetch-once catalog cache, the upstream seam and the
//!   upstream document decoder.
//! - **`query`**: Provider filtering and distance sorting over a snapshot.
//! - **`clouds`**: The `GET /clouds/` boundary: parameter validation and the axum handler.
//! - **`server`**: Router assembly, CORS and probes.
//! - **`config`**, **`logging`**, **`error`**: Ambient plumbing.

pub mod catalog;
pub mod clouds;
pub mod config;
pub mod error;
pub mod geo;
pub mod logging;
pub mod query;
pub mod server;
