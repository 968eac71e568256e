use std::sync::Arc;

use axum::Router;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod api;
mod inference;

use api::AppState;
use inference::{llama_server::LlamaServerBackend, GenerationService};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    // -----------------------------
    // Logging
    // -----------------------------
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    println!("🚀 Starting GPT-2 generation server...");

    // -----------------------------
    // Shared state / Dependencies
    // -----------------------------
    let backend_url =
        std::env::var("LLAMA_SERVER_URL").unwrap_or_else(|_| "http://127.0.0.1:8080".into());
    let backend = Arc::new(LlamaServerBackend::new(backend_url)?);
    let infer = Arc::new(GenerationService::new(backend));

    let state = AppState { infer };

    // -----------------------------
    // Router
    // -----------------------------
    let app = Router::new()
        .merge(api::router())
        // CORS for frontend
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_headers(Any)
                .allow_methods(Any),
        )
        .with_state(state);

    let addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:5000".into());

    println!("🌐 HTTP listening on http://{addr}");
    println!("✍️ Generation endpoint at http://{addr}/generate");

    let listener = TcpListener::bind(&addr).await?;
    axum::serve(listener, app.into_make_service()).await?;

    Ok(())
}
