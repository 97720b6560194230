use super::parser::parse_catalog;
use super::source::CatalogSource;
use super::types::CatalogSnapshot;
use crate::error::CatalogError;
use std::sync::Arc;
use tokio::sync::OnceCell;

/// Fetch-once store for the upstream catalog.
///
/// The first successful [`snapshot`](Self::snapshot) call fetches and decodes
/// the catalog; every later call returns the same `Arc` without touching the
/// network. Concurrent first callers wait on a single in-flight fetch. A failed
/// fetch leaves the cache empty so the next caller tries again.
pub struct CatalogCache<S> {
    source: S,
    snapshot: OnceCell<Arc<CatalogSnapshot>>,
}

impl<S: CatalogSource> CatalogCache<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            snapshot: OnceCell::new(),
        }
    }

    pub async fn snapshot(&self) -> Result<Arc<CatalogSnapshot>, CatalogError> {
        if let Some(snapshot) = self.snapshot.get() {
            tracing::debug!("Clouds have already been fetched");
            return Ok(Arc::clone(snapshot));
        }

        let source = &self.source;
        let snapshot = self
            .snapshot
            .get_or_try_init(|| async move {
                tracing::info!("Starting clouds fetch");
                let body = source.fetch().await.map_err(|e| {
                    tracing::error!("Clouds fetch failed: {}", e);
                    e
                })?;
                let snapshot = parse_catalog(&body).map_err(|e| {
                    tracing::error!("Clouds payload rejected: {}", e);
                    e
                })?;
                tracing::info!(
                    "Clouds fetch is over: {} clouds, {} providers",
                    snapshot.clouds.len(),
                    snapshot.providers.len()
                );
                Ok::<_, CatalogError>(Arc::new(snapshot))
            })
            .await?;

        Ok(Arc::clone(snapshot))
    }

    pub fn is_loaded(&self) -> bool {
        self.snapshot.initialized()
    }

    pub fn source(&self) -> &S {
        &self.source
    }
}
