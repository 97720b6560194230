use super::types::{CatalogSnapshot, CloudRecord, ProviderSummary, UpstreamCatalog, UpstreamCloud};
use crate::error::CatalogError;
use std::collections::BTreeSet;

/// Decodes an upstream catalog document into a snapshot.
///
/// Stops at the first entry of the upstream `errors` list. A non-empty
/// `message` is only logged. Cloud ids follow upstream array order.
pub fn parse_catalog(body: &str) -> Result<CatalogSnapshot, CatalogError> {
    let upstream: UpstreamCatalog = serde_json::from_str(body)?;

    if let Some(error) = upstream.errors.unwrap_or_default().into_iter().next() {
        return Err(CatalogError::Upstream {
            status: error.status,
            message: error.message,
        });
    }

    if let Some(message) = upstream.message.filter(|m| !m.is_empty()) {
        tracing::warn!("Upstream returned a message: {}", message);
    }

    tracing::info!("Processing the received clouds");
    let clouds = upstream
        .clouds
        .unwrap_or_default()
        .into_iter()
        .enumerate()
        .map(|(index, value)| {
            serde_json::from_value::<UpstreamCloud>(value)
                .map(|cloud| cloud.into_record(index))
                .map_err(|e| CatalogError::InvalidRecord {
                    index,
                    reason: e.to_string(),
                })
        })
        .collect::<Result<Vec<_>, _>>()?;

    tracing::info!("Collecting the cloud providers");
    let providers = derive_providers(&clouds);

    Ok(CatalogSnapshot { clouds, providers })
}

/// One summary per distinct provider code, ordered by label.
pub fn derive_providers(clouds: &[CloudRecord]) -> Vec<ProviderSummary> {
    let codes: BTreeSet<&str> = clouds.iter().map(|c| c.provider.as_str()).collect();

    let mut providers: Vec<ProviderSummary> =
        codes.into_iter().map(ProviderSummary::from_code).collect();
    // "aws" and "Aws" share a label; fall back to the code for a total order.
    providers.sort_by(|a, b| a.label.cmp(&b.label).then_with(|| a.value.cmp(&b.value)));
    providers
}
