mod openai_form_generator;

pub use openai_form_generator::{API_KEY_ENV, OpenAiFormGenerator};
