mod form_generator;

pub use form_generator::{FormGenerator, SYSTEM_INSTRUCTION};
