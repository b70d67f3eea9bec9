pub mod config;
pub mod error;
pub mod form;
pub mod markup;
pub mod render;

pub use config::{AppConfig, CompletionConfig, ServerConfig};
pub use error::{AppError, GatewayError};
pub use form::{DynamicForm, FieldOption, FieldType, FormField, FormIssue};
pub use markup::{Element, MarkupNode};
pub use render::render;
