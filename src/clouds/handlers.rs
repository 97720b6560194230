use super::params::RawCloudsParams;
use super::types::CloudsResponse;
use crate::catalog::cache::CatalogCache;
use crate::catalog::source::CatalogSource;
use crate::error::ApiError;
use crate::query::{self, CloudsQuery};
use axum::extract::rejection::QueryRejection;
use axum::extract::Query;
use axum::{Extension, Json};
use std::sync::Arc;

pub async fn handle_get_clouds<S: CatalogSource>(
    Extension(cache): Extension<Arc<CatalogCache<S>>>,
    raw: Result<Query<RawCloudsParams>, QueryRejection>,
) -> Result<Json<CloudsResponse>, ApiError> {
    tracing::info!("Getting clouds and providers");
    let Query(raw) = raw.map_err(|rejection| {
        tracing::warn!("Unreadable clouds query: {}", rejection.body_text());
        ApiError::validation(rejection.body_text())
    })?;
    let query = CloudsQuery::try_from(raw).map_err(|e| {
        tracing::warn!("Rejected clouds query: {}", e);
        e
    })?;

    let snapshot = cache.snapshot().await?;
    let clouds = query::apply(&snapshot.clouds, &query)?;
    tracing::debug!("Returning {} of {} clouds", clouds.len(), snapshot.clouds.len());

    Ok(Json(CloudsResponse {
        clouds,
        providers: snapshot.providers.clone(),
    }))
}
