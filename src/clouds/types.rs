use crate::catalog::types::{CloudRecord, ProviderSummary};
use serde::{Deserialize, Serialize};

/// Body of a successful `GET /clouds/`.
///
/// `providers` always lists every provider in the catalog, independent of
/// any filter applied to `clouds`.
#[derive(Debug, Serialize, Deserialize)]
pub struct CloudsResponse {
    pub clouds: Vec<CloudRecord>,
    pub providers: Vec<ProviderSummary>,
}
