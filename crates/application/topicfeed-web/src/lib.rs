//! topicfeed HTTP API
//!
//! JSON endpoints behind the "Browse Topics" and "The Feed" page.
//!
//! ## Layers
//!
//! Requests pass through, outermost first:
//!
//! - **CORS**: the configured front-end origin, credentials allowed
//! - **Request log**: start and completion lines through the injected [`EventLog`](topicfeed_core::EventLog)
//! - **Error envelope**: every error response is rewritten into one JSON shape
//! - **Panic guard**: a panicking handler becomes an `INTERNAL_ERROR`

pub mod error;
pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod state;

use axum::{
    http::{header::CONTENT_TYPE, HeaderValue, Method},
    middleware::from_fn_with_state,
    routing::get,
    Router,
};
use std::future::Future;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;
use tracing::{error, info, warn};

pub use error::{ApiError, ErrorBody, ErrorEnvelope};
pub use state::AppState;

/// Create the main router with all routes
pub fn create_router(state: Arc<AppState>) -> Router {
    let api = Router::new()
        .route("/api", get(handlers::health))
        .route("/api/topics", get(handlers::topics))
        .route("/api/feed", get(handlers::feed))
        .route("/api/search", get(handlers::search))
        .nest_service("/assets", ServeDir::new(&state.config.assets_dir))
        .fallback(handlers::not_found);

    api.layer(CatchPanicLayer::custom(middleware::panic_response))
        .layer(from_fn_with_state(state.clone(), middleware::error_envelope))
        .layer(from_fn_with_state(state.clone(), middleware::request_logger))
        .layer(cors_layer(&state.config.frontend_url))
        .with_state(state)
}

/// `frontend_url` is validated when the config is loaded; an origin that
/// still cannot be a header value allows no cross-origin requests at all
fn cors_layer(frontend_url: &str) -> CorsLayer {
    let cors = CorsLayer::new()
        .allow_credentials(true)
        .allow_methods([Method::GET, Method::HEAD, Method::OPTIONS])
        .allow_headers([CONTENT_TYPE]);

    match HeaderValue::from_str(frontend_url) {
        Ok(origin) => cors.allow_origin(origin),
        Err(_) => {
            error!("Invalid FRONTEND_URL {frontend_url:?}, cross-origin requests are disabled");
            cors
        }
    }
}

/// Bind the configured address and serve until Ctrl+C or SIGTERM
pub async fn serve(state: Arc<AppState>) -> std::io::Result<()> {
    let addr = state.config.bind_address();
    let listener = TcpListener::bind(&addr).await?;
    info!("Server listening at http://{addr}/api");

    serve_on(listener, state, shutdown_signal()).await
}

/// Serve on an already-bound listener until `shutdown` resolves
pub async fn serve_on<F>(listener: TcpListener, state: Arc<AppState>, shutdown: F) -> std::io::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    axum::serve(listener, create_router(state))
        .with_graceful_shutdown(shutdown)
        .await
}

async fn shutdown_signal() {
    let ctrl_c = async {
        match tokio::signal::ctrl_c().await {
            Ok(()) => info!("Received Ctrl+C, shutting down"),
            Err(e) => {
                warn!("Failed to install Ctrl+C handler: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};

        match signal(SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
                info!("Received terminate signal, shutting down");
            }
            Err(e) => {
                warn!("Failed to install SIGTERM handler: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
