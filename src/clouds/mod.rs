//! Clouds API Module
//!
//! The HTTP boundary for `GET /clouds/`.
//!
//! ## Responsibilities
//! - **Validation**: Turning raw query-string values into a typed [`crate::query::CloudsQuery`]
//!   (422 for values of the wrong type, 400 for a sort without coordinates).
//! - **Dispatch**: Loading the snapshot from the catalog cache and running the query engine.
//! - **Serialization**: Shaping the `{clouds, providers}` response.

pub mod handlers;
pub mod params;
pub mod types;
