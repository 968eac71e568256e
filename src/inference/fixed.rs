use anyhow::{anyhow, Result};
use async_trait::async_trait;

use super::TextGenBackend;

/// Canned backend for tests; replies with a fixed string or fails every call.
pub struct FixedBackend {
    reply: Option<String>,
}

impl FixedBackend {
    pub fn replying(reply: impl Into<String>) -> Self {
        Self {
            reply: Some(reply.into()),
        }
    }

    pub fn failing() -> Self {
        Self { reply: None }
    }
}

#[async_trait]
impl TextGenBackend for FixedBackend {
    async fn generate(
        &self,
        _model_type: &str,
        _length: u32,
        _prompt: &str,
        model: &str,
    ) -> Result<String> {
        self.reply
            .clone()
            .ok_or_else(|| anyhow!("unknown model identifier: {model}"))
    }
}
