use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::Html;
use axum::{routing::get, Json, Router};
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;

#[derive(Clone)]
struct AppState {
    backend_url: String,
    client: reqwest::Client,
}

/// Mirrors the backend's `GET /clouds/` parameters; absent values are not forwarded.
#[derive(Debug, Default, Deserialize, Serialize)]
struct CloudsParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    providers_req: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    sorted_by_geolocation: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    user_latitude: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    user_longitude: Option<String>,
}

#[derive(Serialize)]
struct ProxyResponse {
    status: u16,
    body: serde_json::Value,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let backend_url =
        std::env::var("BACKEND_URL").unwrap_or_else(|_| "http://127.0.0.1:8000".to_string());
    let bind_addr: SocketAddr = std::env::var("UI_BIND")
        .unwrap_or_else(|_| "127.0.0.1:3000".to_string())
        .parse()?;

    let state = AppState {
        backend_url: backend_url.trim_end_matches('/').to_string(),
        client: reqwest::Client::new(),
    };

    let app = Router::new()
        .route("/", get(ui))
        .route("/api/clouds", get(api_clouds))
        .with_state(state);

    tracing::info!("UI listening on {} (backend {})", bind_addr, backend_url);
    axum::serve(tokio::net::TcpListener::bind(bind_addr).await?, app).await?;

    Ok(())
}

async fn ui() -> Html<&'static str> {
    Html(include_str!("ui.html"))
}

async fn api_clouds(
    State(state): State<AppState>,
    Query(params): Query<CloudsParams>,
) -> Result<Json<ProxyResponse>, (StatusCode, String)> {
    let url = format!("{}/clouds/", state.backend_url);
    tracing::debug!("Forwarding {:?} to {}", params, url);

    let resp = state
        .client
        .get(url)
        .query(&params)
        .send()
        .await
        .map_err(|e| (StatusCode::BAD_GATEWAY, e.to_string()))?;

    let status = resp.status().as_u16();
    let body = resp
        .json::<serde_json::Value>()
        .await
        .unwrap_or_else(|_| serde_json::json!({"detail": "invalid json"}));

    Ok(Json(ProxyResponse { status, body }))
}
