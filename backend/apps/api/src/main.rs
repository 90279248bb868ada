//! API Server Entry Point
//!
//! Application entry point and server initialization.
//! Uses `anyhow` for startup errors, but request-level
//! errors go through `tracker::TrackerError` / `kernel::error::AppError`.

mod config;

use axum::{
    Router,
    http::{Method, header},
};
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use config::ApiConfig;
use tracker::{AppError, InMemoryTrackerRepository, tracker_router};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "api=info,tracker=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = ApiConfig::from_env()?;

    tracing::info!(
        public_dir = %config.public_dir.display(),
        index_file = %config.index_file.display(),
        cors_allowlist = config.allowed_origins.is_some(),
        "Configuration loaded"
    );

    // Process-local store; everything is lost on restart
    let repo = InMemoryTrackerRepository::new();

    let app = build_app(&config, repo);

    // Start server
    let addr = config.addr;
    tracing::info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await?;

    Ok(())
}

/// Assemble routes, static files and middleware
fn build_app(config: &ApiConfig, repo: InMemoryTrackerRepository) -> Router {
    let allow_origin = match &config.allowed_origins {
        Some(origins) => AllowOrigin::list(origins.iter().cloned()),
        None => AllowOrigin::any(),
    };

    let cors = CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods(AllowMethods::list([
            Method::GET,
            Method::POST,
            Method::OPTIONS,
        ]))
        .allow_headers(AllowHeaders::list([header::CONTENT_TYPE, header::ACCEPT]));

    Router::new()
        .route_service("/", ServeFile::new(&config.index_file))
        .nest_service("/public", ServeDir::new(&config.public_dir))
        .nest("/api", tracker_router(repo))
        .fallback(not_found)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}

async fn not_found() -> AppError {
    AppError::not_found("Not Found")
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use std::path::PathBuf;
    use tower::ServiceExt;

    fn workspace_root() -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../..")
    }

    fn test_app() -> Router {
        let root = workspace_root();
        let config = ApiConfig {
            public_dir: root.join("public"),
            index_file: root.join("views/index.html"),
            ..ApiConfig::default()
        };
        build_app(&config, InMemoryTrackerRepository::new())
    }

    async fn get(app: Router, uri: &str) -> (StatusCode, Vec<u8>) {
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, bytes.to_vec())
    }

    #[tokio::test]
    async fn test_api_is_mounted() {
        let (status, body) = get(test_app(), "/api/hello").await;
        assert_eq!(status, StatusCode::OK);
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["greeting"], "hello API");
    }

    #[tokio::test]
    async fn test_unknown_route_returns_json_404() {
        let (status, body) = get(test_app(), "/api/does-not-exist").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json, serde_json::json!({ "error": "Not Found" }));
    }

    #[tokio::test]
    async fn test_wrong_method_returns_json_405() {
        let request = Request::builder()
            .method(Method::DELETE)
            .uri("/api/users")
            .body(Body::empty())
            .unwrap();
        let response = test_app().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(json, serde_json::json!({ "error": "Method Not Allowed" }));
    }

    #[tokio::test]
    async fn test_home_page_served() {
        let (status, body) = get(test_app(), "/").await;
        assert_eq!(status, StatusCode::OK);
        assert!(String::from_utf8_lossy(&body).contains("Exercise Tracker"));
    }

    #[tokio::test]
    async fn test_static_assets_served() {
        let (status, _) = get(test_app(), "/public/style.css").await;
        assert_eq!(status, StatusCode::OK);
    }

    #[tokio::test]
    async fn test_cors_preflight_any_origin() {
        let request = Request::builder()
            .method(Method::OPTIONS)
            .uri("/api/users")
            .header(header::ORIGIN, "http://example.com")
            .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
            .body(Body::empty())
            .unwrap();
        let response = test_app().oneshot(request).await.unwrap();
        assert_eq!(
            response
                .headers()
                .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
                .unwrap(),
            "*"
        );
    }
}
