use axum::{routing::get, Router};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

mod models;
mod routes;

use routes::{health::health_check, index::index};

fn app() -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/", get(index))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter("api_service=info,tower_http=info")
        .init();

    let port = std::env::var("PORT").unwrap_or_else(|_| "7000".to_string());
    let addr = format!("0.0.0.0:{}", port);

    info!("API service starting on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await.unwrap();
    axum::serve(listener, app()).await.unwrap();
}
