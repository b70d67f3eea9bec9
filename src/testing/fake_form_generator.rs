use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::domain::{DynamicForm, FieldType, FormField, GatewayError};
use crate::ports::FormGenerator;

#[derive(Clone)]
enum Outcome {
    /// Title the form after the prompt.
    Echo,
    Fixed(DynamicForm),
    Fail,
}

/// Form generator double that records every prompt it receives.
#[derive(Clone)]
pub struct FakeFormGenerator {
    calls: Arc<Mutex<Vec<String>>>,
    outcome: Outcome,
}

impl FakeFormGenerator {
    pub fn echo() -> Self {
        Self { calls: Arc::new(Mutex::new(vec![])), outcome: Outcome::Echo }
    }

    pub fn returning(form: DynamicForm) -> Self {
        Self { calls: Arc::new(Mutex::new(vec![])), outcome: Outcome::Fixed(form) }
    }

    pub fn failing() -> Self {
        Self { calls: Arc::new(Mutex::new(vec![])), outcome: Outcome::Fail }
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl FormGenerator for FakeFormGenerator {
    async fn generate_form(&self, prompt: &str) -> Result<DynamicForm, GatewayError> {
        self.calls.lock().unwrap().push(prompt.to_string());
        match &self.outcome {
            Outcome::Echo => Ok(DynamicForm::new(
                prompt,
                vec![FormField::new("Answer", FieldType::Text, "answer").required(true)],
            )),
            Outcome::Fixed(form) => Ok(form.clone()),
            Outcome::Fail => Err(GatewayError::Status { status: 503, body: "unavailable".into() }),
        }
    }
}

/// Form a model would plausibly return for a contact-form prompt.
pub fn contact_form() -> DynamicForm {
    DynamicForm::new(
        "Contact Form",
        vec![
            FormField::new("Name", FieldType::Text, "name")
                .with_placeholder("Your name")
                .required(true),
            FormField::new("Email", FieldType::Text, "email")
                .with_placeholder("you@example.com")
                .required(true),
        ],
    )
}
