//! HTTP surface: page shell, prompt submission and the terminal submit route.

mod handlers;
mod page;

use axum::Router;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::{error, info};

use crate::app::AppState;
use crate::domain::AppError;

pub use page::{ERROR_FRAGMENT, FORM_AREA_ID, SUBMITTED_FRAGMENT};

/// Build the application router.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/update-prompt", post(handlers::update_prompt))
        .route("/submit", post(handlers::submit))
        .route("/health", get(handlers::health))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Bind `listener` and serve until the process is stopped.
pub async fn serve(listener: TcpListener, state: AppState) -> Result<(), AppError> {
    info!(addr = %listener.local_addr()?, "serving formsmith");
    axum::serve(listener, build_router(state)).await?;
    Ok(())
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        error!(error = %self, "request failed");
        (StatusCode::INTERNAL_SERVER_ERROR, self.to_string()).into_response()
    }
}
