use anyhow::{bail, Context, Result};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use super::TextGenBackend;

#[derive(Debug, Serialize)]
struct CompletionRequest<'a> {
    prompt: &'a str,
    n_predict: u32,
    model: &'a str,
}

#[derive(Debug, Deserialize)]
struct CompletionResponse {
    content: String,
}

/// HTTP client for a llama.cpp-server-compatible completion endpoint. The
/// model identifier is forwarded opaquely; the server decides whether it
/// names a checkpoint it can load.
pub struct LlamaServerBackend {
    client: reqwest::Client,
    base_url: String,
}

impl LlamaServerBackend {
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let client = reqwest::Client::builder()
            .build()
            .context("building http client")?;
        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }
}

#[async_trait]
impl TextGenBackend for LlamaServerBackend {
    async fn generate(
        &self,
        _model_type: &str,
        length: u32,
        prompt: &str,
        model: &str,
    ) -> Result<String> {
        let url = format!("{}/completion", self.base_url.trim_end_matches('/'));
        let resp = self
            .client
            .post(&url)
            .json(&CompletionRequest {
                prompt,
                n_predict: length,
                model,
            })
            .send()
            .await
            .context("completion request failed")?;

        if !resp.status().is_success() {
            bail!("inference server returned {}", resp.status());
        }

        let body: CompletionResponse = resp
            .json()
            .await
            .context("decoding completion response")?;
        Ok(body.content)
    }
}
