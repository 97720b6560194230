use cloud_catalog::catalog::cache::CatalogCache;
use cloud_catalog::catalog::source::HttpCatalogSource;
use cloud_catalog::config::Config;
use cloud_catalog::logging::init_logging;
use cloud_catalog::server::build_router;
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let mut config = Config::from_env()?;
    let args: Vec<String> = std::env::args().skip(1).collect();
    config.apply_args(&args)?;

    let _log_guard = init_logging(config.log_file.as_deref())?;
    tracing::info!("Starting clouds service");

    // 1. Catalog cache (fetched lazily unless prefetch is on):
    let source = HttpCatalogSource::new(config.upstream_url.clone(), config.upstream_timeout);
    tracing::info!(
        "Upstream catalog: {} (timeout {:?})",
        source.url(),
        config.upstream_timeout
    );
    let cache = Arc::new(CatalogCache::new(source));

    if config.prefetch {
        match cache.snapshot().await {
            Ok(snapshot) => tracing::info!("Prefetched {} clouds", snapshot.clouds.len()),
            // Requests will retry the fetch.
            Err(e) => tracing::warn!("Catalog prefetch failed: {}", e),
        }
    }

    // 2. HTTP Router:
    let app = build_router(cache, &config.allowed_origins);

    // 3. Start HTTP server:
    tracing::info!("HTTP server listening on {}", config.bind_addr);
    tracing::info!("Press Ctrl+C to shutdown");

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
