//! formsmith: turn a free-text prompt into a rendered HTML form.
//!
//! A prompt is sent to a structured-completion service, the returned
//! [`DynamicForm`] is rendered to markup, and the markup is swapped into the
//! page by htmx.

pub mod app;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
pub(crate) mod testing;

use std::path::Path;
use std::sync::Arc;

use tokio::net::TcpListener;

use app::AppState;
use services::OpenAiFormGenerator;

pub use app::config::{DEFAULT_CONFIG_FILE, load_config};
pub use app::web::build_router;
pub use domain::{
    AppConfig, AppError, DynamicForm, FieldOption, FieldType, FormField, FormIssue, GatewayError,
    MarkupNode, render,
};
pub use ports::FormGenerator;

/// Load configuration, applying an optional bind address override.
pub fn configure(
    config_path: Option<&Path>,
    bind: Option<std::net::SocketAddr>,
) -> Result<AppConfig, AppError> {
    let mut config = load_config(config_path)?;
    if let Some(bind) = bind {
        config.server.bind = bind;
    }
    Ok(config)
}

/// Serve the web application backed by the configured completion service.
///
/// Reads the API key from `OPENAI_API_KEY`.
pub async fn serve(config: AppConfig) -> Result<(), AppError> {
    let generator = OpenAiFormGenerator::from_env(&config.completion)?;
    let state = AppState::new(Arc::new(generator));

    let listener = TcpListener::bind(config.server.bind).await?;
    app::web::serve(listener, state).await
}
