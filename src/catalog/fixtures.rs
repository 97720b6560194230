//! Shared test fixtures: a canned upstream document and a counting stub source.

use super::source::CatalogSource;
use crate::error::CatalogError;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

/// Seven clouds over five providers, in upstream order.
pub const SAMPLE_CATALOG: &str = r#"{
    "clouds": [
        {"cloud_description": "Europe, Finland - Google Cloud: Finland", "cloud_name": "google-europe-north1",
         "geo_latitude": 60.57, "geo_longitude": 27.19, "geo_region": "europe",
         "provider": "google", "provider_description": "Google Cloud"},
        {"cloud_description": "Africa, South Africa - Amazon Web Services: Cape Town", "cloud_name": "aws-af-south-1",
         "geo_latitude": -33.92, "geo_longitude": 18.42, "geo_region": "africa",
         "provider": "aws", "provider_description": "Amazon Web Services"},
        {"cloud_description": "Asia, Singapore - DigitalOcean: Singapore", "cloud_name": "do-sgp",
         "geo_latitude": 1.3, "geo_longitude": 103.8, "geo_region": "south east asia",
         "provider": "do", "provider_description": "DigitalOcean"},
        {"cloud_description": "Europe, Germany - Amazon Web Services: Frankfurt", "cloud_name": "aws-eu-central-1",
         "geo_latitude": 50.11, "geo_longitude": 8.68, "geo_region": "europe",
         "provider": "aws", "provider_description": "Amazon Web Services"},
        {"cloud_description": "North America, US East - Azure: Virginia", "cloud_name": "azure-eastus",
         "geo_latitude": 37.37, "geo_longitude": -79.82, "geo_region": "north america",
         "provider": "azure", "provider_description": "Microsoft Azure"},
        {"cloud_description": "Europe, Finland - UpCloud: Helsinki", "cloud_name": "upcloud-fi-hel1",
         "geo_latitude": 60.17, "geo_longitude": 24.94, "geo_region": "europe",
         "provider": "upcloud", "provider_description": "UpCloud"},
        {"cloud_description": "Africa, Ghana - Google Cloud: Accra", "cloud_name": "google-africa-west1",
         "geo_latitude": 5.6, "geo_longitude": -0.19, "geo_region": "africa",
         "provider": "google", "provider_description": "Google Cloud"}
    ],
    "message": ""
}"#;

/// In-memory [`CatalogSource`] that counts calls and can fail a number of
/// times before succeeding.
pub struct StubSource {
    body: String,
    failures_left: AtomicUsize,
    delay: Option<Duration>,
    calls: AtomicUsize,
}

impl StubSource {
    pub fn new(body: &str) -> Self {
        Self {
            body: body.to_string(),
            failures_left: AtomicUsize::new(0),
            delay: None,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn sample() -> Self {
        Self::new(SAMPLE_CATALOG)
    }

    pub fn failing_first(mut self, failures: usize) -> Self {
        self.failures_left = AtomicUsize::new(failures);
        self
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl CatalogSource for StubSource {
    async fn fetch(&self) -> Result<String, CatalogError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }

        let failed = self
            .failures_left
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| n.checked_sub(1))
            .is_ok();
        if failed {
            return Err(CatalogError::Upstream {
                status: 503,
                message: "Service Unavailable".to_string(),
            });
        }

        Ok(self.body.clone())
    }
}
