//! Catalog Data Types
//!
//! The in-memory data model served to clients, plus the wire shapes of the
//! upstream catalog document.

use serde::{Deserialize, Serialize};

/// One cloud region as exposed by the service.
///
/// `cloud_id` is the entry's position in the upstream array and is only
/// stable for the lifetime of the snapshot that produced it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CloudRecord {
    pub cloud_description: String,
    pub cloud_name: String,
    pub geo_latitude: f64,
    pub geo_longitude: f64,
    pub geo_region: String,
    pub provider_description: String,
    pub provider: String,
    pub cloud_id: usize,
}

/// A distinct provider code and its display label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderSummary {
    pub value: String,
    pub label: String,
}

impl ProviderSummary {
    pub fn from_code(code: &str) -> Self {
        Self {
            value: code.to_string(),
            label: capitalize_first(code),
        }
    }
}

/// Immutable materialization of the upstream catalog.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CatalogSnapshot {
    pub clouds: Vec<CloudRecord>,
    pub providers: Vec<ProviderSummary>,
}

/// Uppercases the first character only; the rest is left untouched.
pub fn capitalize_first(code: &str) -> String {
    let mut chars = code.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

// --- Upstream wire format ---

/// Top-level upstream document. `clouds` is kept as raw values so that each
/// entry can be validated on its own and reported with its index.
#[derive(Debug, Deserialize)]
pub struct UpstreamCatalog {
    pub errors: Option<Vec<UpstreamErrorEntry>>,
    pub message: Option<String>,
    pub clouds: Option<Vec<serde_json::Value>>,
}

/// Only the `errors` list of an upstream document; used on non-2xx responses.
#[derive(Debug, Deserialize)]
pub struct UpstreamErrors {
    pub errors: Option<Vec<UpstreamErrorEntry>>,
}

#[derive(Debug, Deserialize)]
pub struct UpstreamErrorEntry {
    pub status: u16,
    pub message: String,
}

/// A single upstream cloud entry. Unknown fields are ignored.
#[derive(Debug, Deserialize)]
pub struct UpstreamCloud {
    pub cloud_description: String,
    pub cloud_name: String,
    pub geo_latitude: f64,
    pub geo_longitude: f64,
    pub geo_region: String,
    pub provider_description: String,
    pub provider: String,
}

impl UpstreamCloud {
    pub fn into_record(self, cloud_id: usize) -> CloudRecord {
        CloudRecord {
            cloud_description: self.cloud_description,
            cloud_name: self.cloud_name,
            geo_latitude: self.geo_latitude,
            geo_longitude: self.geo_longitude,
            geo_region: self.geo_region,
            provider_description: self.provider_description,
            provider: self.provider,
            cloud_id,
        }
    }
}
