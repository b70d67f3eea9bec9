//! Application configuration loading.

use std::fs;
use std::path::Path;

use super::config_dto::AppConfigDto;
use crate::domain::{AppConfig, AppError};

/// Config file looked up in the working directory when none is given.
pub const DEFAULT_CONFIG_FILE: &str = "formsmith.toml";

/// Load configuration from `path`, or from [`DEFAULT_CONFIG_FILE`] if present.
///
/// An explicitly requested file must exist; a missing default file yields
/// the built-in defaults.
pub fn load_config(path: Option<&Path>) -> Result<AppConfig, AppError> {
    let (config_path, explicit) = match path {
        Some(path) => (path, true),
        None => (Path::new(DEFAULT_CONFIG_FILE), false),
    };

    if !config_path.exists() {
        if explicit {
            return Err(AppError::config_error(format!(
                "Config file not found: {}",
                config_path.display()
            )));
        }
        let config = AppConfig::default();
        config.validate()?;
        return Ok(config);
    }

    let content = fs::read_to_string(config_path)?;
    parse_config_content(&content)
}

/// Parse and validate configuration from TOML content.
pub fn parse_config_content(content: &str) -> Result<AppConfig, AppError> {
    let dto: AppConfigDto = toml::from_str(content)?;
    let config = AppConfig::from(dto);
    config.validate()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn empty_content_uses_defaults() {
        let config = parse_config_content("").unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn config_parses_from_toml() {
        let toml = r#"
[server]
bind = "0.0.0.0:8080"

[completion]
api_url = "http://localhost:9000/v1/chat/completions"
model = "gpt-4o-mini"
timeout_secs = 15
"#;
        let config = parse_config_content(toml).unwrap();

        assert_eq!(config.server.bind.to_string(), "0.0.0.0:8080");
        assert_eq!(config.completion.api_url.as_str(), "http://localhost:9000/v1/chat/completions");
        assert_eq!(config.completion.model, "gpt-4o-mini");
        assert_eq!(config.completion.timeout_secs, 15);
    }

    #[test]
    fn missing_keys_fall_back_to_defaults() {
        let toml = r#"
[completion]
model = "gpt-4o-mini"
"#;
        let config = parse_config_content(toml).unwrap();

        assert_eq!(config.server.bind.to_string(), "127.0.0.1:5001");
        assert_eq!(config.completion.timeout_secs, 60);
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let toml = r#"
[completion]
max_retries = 3
"#;
        let result = parse_config_content(toml);
        assert!(matches!(result, Err(AppError::TomlParseError(_))));
    }

    #[test]
    fn invalid_values_fail_validation() {
        let toml = r#"
[completion]
timeout_secs = 0
"#;
        let result = parse_config_content(toml);
        assert!(matches!(result, Err(AppError::Config(_))));
    }

    #[test]
    fn load_reads_explicit_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("custom.toml");
        fs::write(&path, "[server]\nbind = \"127.0.0.1:7000\"\n").unwrap();

        let config = load_config(Some(&path)).unwrap();
        assert_eq!(config.server.bind.port(), 7000);
    }

    #[test]
    fn load_fails_when_explicit_file_is_missing() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("absent.toml");

        let result = load_config(Some(&path));
        assert!(matches!(result, Err(AppError::Config(msg)) if msg.contains("absent.toml")));
    }
}
