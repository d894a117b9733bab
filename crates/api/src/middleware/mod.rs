//! Middleware components for HTTP API
//!
//! Provides CORS and request ID middleware

use axum::{
    extract::Request,
    http::{HeaderValue, StatusCode},
    middleware::Next,
    response::Response,
};
use tower_http::cors::{Any, CorsLayer};

/// CORS configuration for the API
pub fn cors_layer() -> Result<CorsLayer, Box<dyn std::error::Error>> {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Ok(cors)
}

/// Add unique request ID to response headers
pub async fn add_request_id(request: Request, next: Next) -> Result<Response, StatusCode> {
    let request_id = uuid::Uuid::new_v4().to_string();

    let mut response = next.run(request).await;

    response
        .headers_mut()
        .insert("X-Request-ID", HeaderValue::from_str(&request_id).unwrap());

    Ok(response)
}
