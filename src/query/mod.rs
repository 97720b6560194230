//! Query Engine Module
//!
//! Produces filtered and distance-sorted views of a catalog snapshot. Nothing
//! here mutates the snapshot; every operation returns a fresh `Vec`.
//!
//! When both a provider filter and a geolocation sort are requested, the
//! filter runs first and only the surviving records are sorted.

pub mod engine;
pub mod types;

pub use engine::{apply, filter_by_providers, sort_by_distance};
pub use types::{CloudsQuery, GeoPoint};
