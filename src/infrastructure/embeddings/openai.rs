use crate::domain::ports::embedding_port::EmbeddingProvider;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

pub struct OpenAiEmbeddings {
    client: Client,
    api_key: String,
    model: String,
}

#[derive(Serialize)]
struct EmbeddingRequest<'a> {
    input: &'a str,
    model: &'a str,
}

#[derive(Deserialize)]
struct EmbeddingResponse {
    data: Vec<EmbeddingData>,
}

#[derive(Deserialize)]
struct EmbeddingData {
    embedding: Vec<f32>,
}

impl OpenAiEmbeddings {
    pub fn new(api_key: String, model: Option<String>, timeout: Duration) -> Self {
        Self {
            client: Client::builder()
                .timeout(timeout)
                .build()
                .unwrap_or_default(),
            api_key,
            model: model.unwrap_or_else(|| "text-embedding-ada-002".to_string()),
        }
    }
}

#[async_trait::async_trait]
impl EmbeddingProvider for OpenAiEmbeddings {
    async fn embed(&self, text: &str) -> Result<Vec<f32>, String> {
        let resp = self
            .client
            .post("https://api.openai.com/v1/embeddings")
            .bearer_auth(&self.api_key)
            .json(&EmbeddingRequest {
                input: text,
                model: &self.model,
            })
            .send()
            .await
            .map_err(|e| format!("OpenAI API error: {e}"))?;

        if !resp.status().is_success() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            return Err(format!("OpenAI API {status}: {body}"));
        }

        let result: EmbeddingResponse =
            resp.json().await.map_err(|e| format!("Parse error: {e}"))?;
        result
            .data
            .into_iter()
            .next()
            .map(|d| d.embedding)
            .ok_or_else(|| "OpenAI API returned no embedding".to_string())
    }

    fn dimension(&self) -> usize {
        1536 // text-embedding-ada-002
    }
}
