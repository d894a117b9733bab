//! Catering Jobs Server binary

use axum::middleware::from_fn;
use tower_http::trace::TraceLayer;
use tracing::info;

use catering_server::{build_components, ServerConfig};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    info!("Starting Catering Jobs Server");

    let config = ServerConfig::from_env()?;
    let components = build_components(&config);

    components.stats_reporter.start();

    let app = catering_api::create_router()
        .layer(TraceLayer::new_for_http())
        .layer(from_fn(catering_api::add_request_id))
        .layer(catering_api::cors_layer()?)
        .with_state(components.state);

    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", config.port)).await?;
    info!("Server listening on http://localhost:{}", config.port);

    axum::serve(listener, app).await?;

    Ok(())
}
