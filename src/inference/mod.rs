#[cfg(test)]
pub mod fixed;
pub mod llama_server;

use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;

/// The external text-generation collaborator. Owns model loading, tokenization,
/// sampling, and device placement; opaque and potentially slow from this side.
#[async_trait]
pub trait TextGenBackend: Send + Sync {
    async fn generate(
        &self,
        model_type: &str,
        length: u32,
        prompt: &str,
        model: &str,
    ) -> Result<String>;
}

pub struct GenerationService {
    backend: Arc<dyn TextGenBackend>,
}

impl GenerationService {
    pub fn new(backend: Arc<dyn TextGenBackend>) -> Self {
        Self { backend }
    }

    pub async fn generate(
        &self,
        model_type: &str,
        length: u32,
        prompt: &str,
        model: &str,
    ) -> Result<String> {
        self.backend.generate(model_type, length, prompt, model).await
    }
}
