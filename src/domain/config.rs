//! Application configuration models.

use std::net::{Ipv4Addr, SocketAddr};

use url::Url;

use crate::domain::AppError;

/// Configuration loaded from `formsmith.toml`, with defaults for anything
/// left out.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub completion: CompletionConfig,
}

/// HTTP listener settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub bind: SocketAddr,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { bind: SocketAddr::from((Ipv4Addr::LOCALHOST, 5001)) }
    }
}

/// Structured-completion service settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletionConfig {
    /// Chat completions endpoint.
    pub api_url: Url,
    /// Model identifier sent with every request.
    pub model: String,
    /// Request timeout in seconds.
    pub timeout_secs: u64,
}

pub const DEFAULT_MODEL: &str = "gpt-4o-2024-08-06";

impl Default for CompletionConfig {
    fn default() -> Self {
        Self {
            api_url: Url::parse("https://api.openai.com/v1/chat/completions")
                .expect("default completion URL must be valid"),
            model: DEFAULT_MODEL.to_string(),
            timeout_secs: 60,
        }
    }
}

impl AppConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.completion.model.trim().is_empty() {
            return Err(AppError::Config("completion.model must not be empty".into()));
        }
        if self.completion.timeout_secs == 0 {
            return Err(AppError::Config("completion.timeout_secs must be greater than 0".into()));
        }
        Ok(())
    }
}
