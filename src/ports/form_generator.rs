//! Form generation port definition.

use async_trait::async_trait;

use crate::domain::{DynamicForm, GatewayError};

/// Instruction sent ahead of every user prompt.
pub const SYSTEM_INSTRUCTION: &str = "You are a helpful dynamic html form creator. \
You will be provided with a dynamic form requirement, and your goal will be to output form fields.
For each field, just provide the correct configuration.";

/// Port for turning a free-text requirement into a form description.
///
/// Implementations make exactly one attempt per call and do not retry.
#[async_trait]
pub trait FormGenerator: Send + Sync {
    /// Generate a form for the given prompt.
    async fn generate_form(&self, prompt: &str) -> Result<DynamicForm, GatewayError>;
}
