use super::types::UpstreamErrors;
use crate::error::CatalogError;
use std::future::Future;
use std::time::Duration;

/// Where the raw catalog document comes from.
///
/// Implementations return the response body verbatim; decoding happens in
/// [`super::parser::parse_catalog`].
pub trait CatalogSource: Send + Sync + 'static {
    fn fetch(&self) -> impl Future<Output = Result<String, CatalogError>> + Send;
}

/// Fetches the catalog over HTTP(S) with a bounded timeout.
pub struct HttpCatalogSource {
    http_client: reqwest::Client,
    url: String,
    timeout: Duration,
}

impl HttpCatalogSource {
    pub fn new(url: impl Into<String>, timeout: Duration) -> Self {
        Self {
            http_client: reqwest::Client::new(),
            url: url.into(),
            timeout,
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

impl CatalogSource for HttpCatalogSource {
    async fn fetch(&self) -> Result<String, CatalogError> {
        tracing::info!("Connecting to upstream catalog at {}", self.url);

        let response = self
            .http_client
            .get(&self.url)
            .timeout(self.timeout)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        tracing::info!("Got upstream response ({}, {} bytes)", status, body.len());

        if !status.is_success() {
            return Err(upstream_failure(status, &body));
        }

        Ok(body)
    }
}

/// Prefers the upstream's own first error entry over the bare HTTP status.
fn upstream_failure(status: reqwest::StatusCode, body: &str) -> CatalogError {
    let first = serde_json::from_str::<UpstreamErrors>(body)
        .ok()
        .and_then(|doc| doc.errors)
        .and_then(|errors| errors.into_iter().next());

    match first {
        Some(entry) => CatalogError::Upstream {
            status: entry.status,
            message: entry.message,
        },
        None => CatalogError::Upstream {
            status: status.as_u16(),
            message: status
                .canonical_reason()
                .unwrap_or("upstream request failed")
                .to_string(),
        },
    }
}
