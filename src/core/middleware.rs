//! Core middleware module: request logging, bearer auth, panic capture.

use std::any::Any;
use std::time::Instant;

use axum::{
    extract::Request,
    middleware::Next,
    response::{IntoResponse, Response},
};
use tracing::{error, info};

use crate::core::error::ApiError;

/// Exact value the `Authorization` header must carry.
pub const BEARER_TOKEN: &str = "Bearer secret-token";

/// Logs timestamp, method and path for every request, then the outcome
/// once the rest of the chain has run. Never short-circuits.
pub async fn request_logging(req: Request, next: Next) -> Response {
    let start = Instant::now();
    let method = req.method().clone();
    let path = req.uri().path().to_string();

    info!("[{}] {} {}", chrono::Utc::now().to_rfc3339(), method, path);

    let response = next.run(req).await;
    let status = response.status();
    let duration = start.elapsed();

    info!("{} {} - {} - {}ms", method, path, status, duration.as_millis());

    response
}

/// Rejects any request whose `Authorization` header is not exactly the
/// shared bearer token. Runs for every route, including `/`.
pub async fn require_bearer_token(req: Request, next: Next) -> Result<Response, ApiError> {
    let authorized = req
        .headers()
        .get("authorization")
        .and_then(|h| h.to_str().ok())
        .is_some_and(|h| h == BEARER_TOKEN);

    if !authorized {
        return Err(ApiError::Unauthorized);
    }

    Ok(next.run(req).await)
}

/// Converts a handler panic into a plain 500. The payload is logged for
/// operator diagnostics and never reaches the client.
pub fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        (*s).to_string()
    } else {
        "non-string panic payload".to_string()
    };

    error!("handler panicked: {}", detail);

    ApiError::Internal.into_response()
}
