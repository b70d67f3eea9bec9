use std::sync::Arc;

use parking_lot::RwLock;

use crate::ports::FormGenerator;

/// Most recently submitted prompt, shared by every client.
///
/// Writes are last-writer-wins: concurrent clients overwrite each other's
/// prompt. Only the echo on `GET /` reads it back.
#[derive(Debug, Clone, Default)]
pub struct PromptStore {
    last: Arc<RwLock<Option<String>>>,
}

impl PromptStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self) -> Option<String> {
        self.last.read().clone()
    }

    pub fn set(&self, prompt: impl Into<String>) {
        *self.last.write() = Some(prompt.into());
    }
}

/// Shared state handed to every web handler.
#[derive(Clone)]
pub struct AppState {
    generator: Arc<dyn FormGenerator>,
    prompts: PromptStore,
}

impl AppState {
    /// Create a new application state around a form generator.
    pub fn new(generator: Arc<dyn FormGenerator>) -> Self {
        Self { generator, prompts: PromptStore::new() }
    }

    /// Get a reference to the form generator.
    pub fn generator(&self) -> &dyn FormGenerator {
        self.generator.as_ref()
    }

    /// Get a reference to the prompt store.
    pub fn prompts(&self) -> &PromptStore {
        &self.prompts
    }
}
