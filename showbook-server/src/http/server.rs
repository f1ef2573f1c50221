//! Axum server setup
//!
//! Server skeleton with:
//! - Localhost-only CORS by default
//! - Tracing and request timeout middleware
//! - Graceful shutdown on SIGTERM/Ctrl+C

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use axum::http::HeaderValue;
use axum::Router;
use sqlx::PgPool;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use super::error::not_found_fallback;
use super::routes;

/// Default request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address to bind to (default: 127.0.0.1:3000)
    pub bind_addr: SocketAddr,

    /// Allow permissive CORS (default: false = localhost only)
    ///
    /// WARNING: Setting this to true allows any origin.
    pub cors_permissive: bool,

    /// Requests running longer than this are answered with 408
    pub request_timeout: Duration,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 3000)),
            cors_permissive: false,
            request_timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
}

/// Build the application router with all routes and middleware.
pub fn build_router(pool: PgPool, config: &ServerConfig) -> Router {
    let state = AppState { pool };

    let cors = if config.cors_permissive {
        tracing::warn!("CORS: Permissive mode enabled - all origins allowed");
        CorsLayer::permissive()
    } else {
        // Localhost only
        let port = config.bind_addr.port();
        let origins: Vec<HeaderValue> = [
            format!("http://localhost:{}", port),
            format!("http://127.0.0.1:{}", port),
        ]
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();

        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods(Any)
            .allow_headers(Any)
    };

    Router::new()
        .merge(routes::home::router())
        .merge(routes::health::router())
        .merge(routes::venues::router())
        .merge(routes::artists::router())
        .merge(routes::shows::router())
        .fallback(not_found_fallback)
        .layer(cors)
        .layer(TimeoutLayer::new(config.request_timeout))
        .layer(TraceLayer::new_for_http())
        .with_state(Arc::new(state))
}

/// Run the HTTP server until a shutdown signal arrives.
///
/// # Example
///
/// ```ignore
/// let pool = create_pool(&database_url).await?;
/// let config = ServerConfig::default();
/// run_server(pool, config).await?;
/// ```
pub async fn run_server(pool: PgPool, config: ServerConfig) -> Result<(), ServerError> {
    let app = build_router(pool, &config);

    // Bind listener
    let listener = TcpListener::bind(config.bind_addr).await?;
    tracing::info!("Server listening on http://{}", config.bind_addr);

    // Run with graceful shutdown
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server shutdown complete");
    Ok(())
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, starting shutdown");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, starting shutdown");
        }
    }
}

/// Server error type
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::{header, Request, Response, StatusCode};
    use serde_json::Value;
    use sqlx::postgres::PgPoolOptions;
    use tower::ServiceExt;

    /// Router over a pool that never connects. Requests that reach storage
    /// fail quickly with 500; the rest are answered before any query runs.
    fn app() -> Router {
        let pool = PgPoolOptions::new()
            .acquire_timeout(Duration::from_millis(250))
            .connect_lazy("postgres://localhost/showbook_test")
            .unwrap();
        build_router(pool, &ServerConfig::default())
    }

    fn get(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    fn post_form(uri: &str, body: &'static str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from(body))
            .unwrap()
    }

    async fn json(response: Response<Body>) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[test]
    fn default_config() {
        let config = ServerConfig::default();
        assert_eq!(config.bind_addr.port(), 3000);
        assert!(!config.cors_permissive);
        assert_eq!(config.request_timeout, Duration::from_secs(30));
    }

    #[tokio::test]
    async fn test_health_endpoint() {
        let response = app().oneshot(get("/health")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_home_page() {
        let response = app().oneshot(get("/")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(json(response).await["name"], "showbook");
    }

    #[tokio::test]
    async fn test_unknown_route_is_404() {
        let response = app().oneshot(get("/nowhere")).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(json(response).await["error"], "not_found");
    }

    #[tokio::test]
    async fn test_non_numeric_ids_are_404() {
        for uri in ["/venues/abc", "/artists/1.5", "/venues/-2/edit", "/artists/0"] {
            let response = app().oneshot(get(uri)).await.unwrap();
            assert_eq!(response.status(), StatusCode::NOT_FOUND, "{}", uri);
        }
    }

    #[tokio::test]
    async fn test_create_forms_offer_choices() {
        let response = app().oneshot(get("/venues/create")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = json(response).await;
        assert!(body["choices"]["states"].as_array().unwrap().len() > 50);
        assert!(body.get("id").is_none());

        let response = app().oneshot(get("/shows/create")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = json(response).await;
        assert!(!body["form"]["start_time"].as_str().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_invalid_venue_is_422_and_echoed() {
        let response = app()
            .oneshot(post_form(
                "/venues/create",
                "name=The+Musical+Hop&city=&state=ZZ&address=1015+Folsom+Street&genres=Jazz&genres=Reggae",
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

        let body = json(response).await;
        let fields: Vec<_> = body["fields"]
            .as_array()
            .unwrap()
            .iter()
            .map(|f| f["field"].as_str().unwrap().to_owned())
            .collect();
        assert!(fields.contains(&"city".to_owned()));
        assert!(fields.contains(&"state".to_owned()));
        assert_eq!(body["form"]["name"], "The Musical Hop");
        assert_eq!(body["form"]["genres"][1], "Reggae");
    }

    #[tokio::test]
    async fn test_invalid_artist_is_422() {
        let response = app()
            .oneshot(post_form("/artists/create", "name=&city=San+Francisco&state=CA"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn test_invalid_show_is_422() {
        let response = app()
            .oneshot(post_form(
                "/shows/create",
                "artist_id=abc&venue_id=1&start_time=tomorrow",
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn test_search_body_that_is_not_a_form_is_400() {
        for uri in ["/venues/search", "/artists/search", "/shows/search"] {
            let request = Request::builder()
                .method("POST")
                .uri(uri)
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(r#"{"search_term": "hop"}"#))
                .unwrap();
            let response = app().oneshot(request).await.unwrap();
            assert_eq!(response.status(), StatusCode::BAD_REQUEST, "{}", uri);
            assert_eq!(json(response).await["error"], "validation_error");
        }
    }

    #[tokio::test]
    async fn test_show_search_accepts_slash_in_names() {
        // Parses as a name, so the request reaches the (unconnected) pool
        // instead of being rejected as a bad date.
        let response = app()
            .oneshot(get("/shows/search?search_term=AC%2FDC"))
            .await
            .unwrap();
        assert_ne!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_bad_show_search_date_is_400() {
        let response = app()
            .oneshot(get("/shows/search?search_term=31%2F02%2F2035"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(json(response).await["error"], "validation_error");
    }
}
