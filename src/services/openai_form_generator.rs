//! Structured-completion client implementation using reqwest.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use url::Url;

use crate::domain::{AppError, CompletionConfig, DynamicForm, GatewayError};
use crate::ports::{FormGenerator, SYSTEM_INSTRUCTION};

pub const API_KEY_ENV: &str = "OPENAI_API_KEY";

const SCHEMA_NAME: &str = "DynamicForm";

/// HTTP client for an OpenAI-compatible chat completions endpoint.
#[derive(Clone)]
pub struct OpenAiFormGenerator {
    api_key: String,
    api_url: Url,
    model: String,
    client: Client,
}

impl std::fmt::Debug for OpenAiFormGenerator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OpenAiFormGenerator")
            .field("api_url", &self.api_url)
            .field("model", &self.model)
            .field("api_key", &"[REDACTED]")
            .finish()
    }
}

impl OpenAiFormGenerator {
    /// Create a new client with the given API key and configuration.
    pub fn new(api_key: String, config: &CompletionConfig) -> Result<Self, AppError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| AppError::Config(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { api_key, api_url: config.api_url.clone(), model: config.model.clone(), client })
    }

    /// Create from the `OPENAI_API_KEY` environment variable.
    pub fn from_env(config: &CompletionConfig) -> Result<Self, AppError> {
        let api_key = std::env::var(API_KEY_ENV).map_err(|_| {
            AppError::Config(format!("{} environment variable not set", API_KEY_ENV))
        })?;

        Self::new(api_key, config)
    }
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: [ChatMessage<'a>; 2],
    response_format: ResponseFormat,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Debug, Serialize)]
struct ResponseFormat {
    #[serde(rename = "type")]
    kind: &'static str,
    json_schema: JsonSchemaFormat,
}

#[derive(Debug, Serialize)]
struct JsonSchemaFormat {
    name: &'static str,
    strict: bool,
    schema: Value,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ResponseMessage {
    #[serde(default)]
    content: Option<String>,
    #[serde(default)]
    refusal: Option<String>,
}

#[async_trait]
impl FormGenerator for OpenAiFormGenerator {
    async fn generate_form(&self, prompt: &str) -> Result<DynamicForm, GatewayError> {
        let request = ChatRequest {
            model: &self.model,
            messages: [
                ChatMessage { role: "system", content: SYSTEM_INSTRUCTION },
                ChatMessage { role: "user", content: prompt },
            ],
            response_format: ResponseFormat {
                kind: "json_schema",
                json_schema: JsonSchemaFormat {
                    name: SCHEMA_NAME,
                    strict: true,
                    schema: DynamicForm::response_schema(),
                },
            },
        };

        let response = self
            .client
            .post(self.api_url.clone())
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| GatewayError::Request(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_else(|_| "Unknown error".to_string());
            return Err(GatewayError::Status { status: status.as_u16(), body });
        }

        let body: ChatResponse = response
            .json()
            .await
            .map_err(|e| GatewayError::parse("completion response", e.to_string()))?;

        parse_message(body)
    }
}

fn parse_message(body: ChatResponse) -> Result<DynamicForm, GatewayError> {
    let message =
        body.choices.into_iter().next().map(|c| c.message).ok_or(GatewayError::EmptyResponse)?;

    if let Some(reason) = message.refusal.filter(|r| !r.is_empty()) {
        return Err(GatewayError::Refused(reason));
    }

    let content = message.content.ok_or(GatewayError::EmptyResponse)?;
    serde_json::from_str(&content).map_err(|e| GatewayError::parse("form content", e.to_string()))
}
