use std::net::SocketAddr;

use serde::Deserialize;
use url::Url;

use crate::domain::{AppConfig, CompletionConfig, ServerConfig};

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AppConfigDto {
    pub server: Option<ServerConfigDto>,
    pub completion: Option<CompletionConfigDto>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServerConfigDto {
    pub bind: Option<SocketAddr>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CompletionConfigDto {
    pub api_url: Option<Url>,
    pub model: Option<String>,
    pub timeout_secs: Option<u64>,
}

impl From<AppConfigDto> for AppConfig {
    fn from(dto: AppConfigDto) -> Self {
        let default_server = ServerConfig::default();
        let server = if let Some(d) = dto.server {
            ServerConfig { bind: d.bind.unwrap_or(default_server.bind) }
        } else {
            default_server
        };

        let default_completion = CompletionConfig::default();
        let completion = if let Some(d) = dto.completion {
            CompletionConfig {
                api_url: d.api_url.unwrap_or(default_completion.api_url),
                model: d.model.unwrap_or(default_completion.model),
                timeout_secs: d.timeout_secs.unwrap_or(default_completion.timeout_secs),
            }
        } else {
            default_completion
        };

        AppConfig { server, completion }
    }
}
