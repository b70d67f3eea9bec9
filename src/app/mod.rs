pub mod config;
mod context;
pub mod web;

pub use context::{AppState, PromptStore};
