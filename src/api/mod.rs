use std::sync::Arc;

use axum::{routing::post, Router};

use crate::inference::GenerationService;

pub mod handlers;
pub mod types;

use handlers::generate;

#[derive(Clone)]
pub struct AppState {
    pub infer: Arc<GenerationService>,
}

pub fn router() -> Router<AppState> {
    Router::new().route("/generate", post(generate))
}
