//! HTTP handlers.

use axum::extract::State;
use axum::response::{Html, IntoResponse};
use axum::{Form, Json};
use serde::{Deserialize, Serialize};
use tracing::{debug, error, info, warn};

use super::page::{self, ERROR_FRAGMENT, SUBMITTED_FRAGMENT};
use crate::app::AppState;
use crate::domain::{AppError, render};

#[derive(Debug, Deserialize)]
pub struct PromptForm {
    pub prompt: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
}

/// `GET /`: page shell with the prompt box.
pub async fn index(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let prompt = state.prompts().get();
    Ok(Html(page::render_index(prompt.as_deref())?))
}

/// `POST /update-prompt`: generate and render a form for the submitted prompt.
///
/// A request without a `prompt` field reuses the stored prompt. Empty prompts
/// and generation failures both yield [`ERROR_FRAGMENT`].
pub async fn update_prompt(
    State(state): State<AppState>,
    Form(form): Form<PromptForm>,
) -> Html<String> {
    let prompt = match form.prompt {
        Some(prompt) => {
            state.prompts().set(prompt.as_str());
            prompt
        }
        None => state.prompts().get().unwrap_or_default(),
    };
    info!(prompt_len = prompt.len(), "updated prompt");
    debug!(prompt = %prompt, "prompt text");

    if prompt.trim().is_empty() {
        return Html(ERROR_FRAGMENT.to_string());
    }

    match state.generator().generate_form(&prompt).await {
        Ok(form) => {
            for issue in form.validate() {
                warn!(%issue, title = %form.title, "generated form has a structural issue");
            }
            Html(page::form_area(render(&form)))
        }
        Err(err) => {
            error!(error = %err, "form generation failed");
            Html(ERROR_FRAGMENT.to_string())
        }
    }
}

/// `POST /submit`: acknowledge a submission of the generated form.
pub async fn submit(Form(fields): Form<Vec<(String, String)>>) -> Html<&'static str> {
    info!(fields = fields.len(), "form submitted");
    Html(SUBMITTED_FRAGMENT)
}

/// `GET /health`
pub async fn health() -> impl IntoResponse {
    Json(HealthResponse { status: "healthy", version: env!("CARGO_PKG_VERSION") })
}
