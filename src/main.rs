use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::EnvFilter;

use brandkit::api::{create_service_router, AppState};
use brandkit::{BuildEngine, ServiceConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("brandkit=info,tower_http=info")),
        )
        .init();

    // Load environment variables
    dotenvy::dotenv().ok();

    let config = ServiceConfig::from_env();
    info!(
        template_root = %config.template_root.display(),
        public_root = %config.public_root.display(),
        "starting service"
    );

    // The output root must exist before the static file service points at it
    tokio::fs::create_dir_all(&config.public_root).await?;

    let state = AppState::new(BuildEngine::new(
        config.template_root.clone(),
        config.public_root.clone(),
    ));

    // Build router with CORS and tracing
    let app = create_service_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        );

    let addr = format!("0.0.0.0:{}", config.port);
    info!("listening on {addr}");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
