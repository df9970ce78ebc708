//! Request logging, error formatting and panic recovery

use axum::{
    body::Body,
    extract::{Request, State},
    http::StatusCode,
    middleware::Next,
    response::{IntoResponse, Json, Response},
};
use std::any::Any;
use std::sync::Arc;
use std::time::Instant;

use crate::error::{ApiError, ErrorEnvelope};
use crate::state::AppState;

/// Logs every request when it starts and when it completes
pub async fn request_logger(State(state): State<Arc<AppState>>, request: Request, next: Next) -> Response {
    let started = Instant::now();
    let method = request.method().clone();
    let uri = request.uri().clone();

    state.log.info(&format!("{method} {uri} - Started"));
    state.log.debug(&format!("Incoming request: {method} {uri} headers={:?}", request.headers()));

    let response = next.run(request).await;

    state.log.info(&format!(
        "{method} {uri} - {} - {}ms",
        response.status().as_u16(),
        started.elapsed().as_millis()
    ));
    response
}

/// Single place where error responses get their JSON body.
///
/// Picks up the [`ApiError`] a handler attached to its response. Bare 404s
/// and 405s from routing or static files are reported as `ROUTE_NOT_FOUND`.
pub async fn error_envelope(State(state): State<Arc<AppState>>, request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_string();

    let response = next.run(request).await;

    let error = match response.extensions().get::<ApiError>() {
        Some(error) => error.clone(),
        None if matches!(
            response.status(),
            StatusCode::NOT_FOUND | StatusCode::METHOD_NOT_ALLOWED
        ) =>
        {
            ApiError::RouteNotFound { path: path.clone() }
        }
        None => return response,
    };

    let status = error.status();
    state.log.error(&format!("{method} {path} - {} - {error}", status.as_u16()));

    let envelope = ErrorEnvelope::new(&error, &path, &method, state.config.is_production());
    (status, Json(envelope)).into_response()
}

/// Turns a handler panic into an `INTERNAL_ERROR` for [`error_envelope`] to format
pub fn panic_response(payload: Box<dyn Any + Send + 'static>) -> Response<Body> {
    let detail = if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = payload.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unknown panic".to_string()
    };

    ApiError::internal("Internal Server Error", format!("panic: {detail}")).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_panic_payloads() {
        let response = panic_response(Box::new("exploded"));
        let error = response.extensions().get::<ApiError>().unwrap();
        assert_eq!(error.code(), "INTERNAL_ERROR");
        assert_eq!(error.stack(), "panic: exploded");

        let response = panic_response(Box::new(String::from("owned")));
        assert_eq!(response.extensions().get::<ApiError>().unwrap().stack(), "panic: owned");

        let response = panic_response(Box::new(42_u8));
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
