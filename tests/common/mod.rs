//! Shared testing utilities for formsmith integration tests.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::Router;
use axum::body::{Body, to_bytes};
use axum::http::{Request, StatusCode, header};
use formsmith::app::AppState;
use formsmith::{DynamicForm, FieldOption, FieldType, FormField, FormGenerator, GatewayError};
use tower::ServiceExt;

/// Generator double that answers every prompt with a form built from its
/// keywords and records each prompt it sees.
#[derive(Clone, Default)]
pub struct KeywordGenerator {
    calls: Arc<Mutex<Vec<String>>>,
}

#[allow(dead_code)]
impl KeywordGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl FormGenerator for KeywordGenerator {
    async fn generate_form(&self, prompt: &str) -> Result<DynamicForm, GatewayError> {
        self.calls.lock().unwrap().push(prompt.to_string());

        let lowered = prompt.to_lowercase();
        let mut fields = Vec::new();
        if lowered.contains("name") {
            fields.push(FormField::new("Full name", FieldType::Text, "full_name").required(true));
        }
        if lowered.contains("email") {
            fields.push(
                FormField::new("Email address", FieldType::Text, "email_address")
                    .with_placeholder("you@example.com")
                    .required(true),
            );
        }
        if lowered.contains("rating") {
            fields.push(FormField::new("Rating", FieldType::Radio, "rating").with_options(vec![
                FieldOption::new("Good", "good"),
                FieldOption::new("Bad", "bad"),
            ]));
        }

        Ok(DynamicForm::new(prompt, fields))
    }
}

/// Test harness wrapping a router backed by a [`KeywordGenerator`].
pub struct TestApp {
    pub router: Router,
    pub generator: KeywordGenerator,
}

#[allow(dead_code)]
impl TestApp {
    pub fn new() -> Self {
        let generator = KeywordGenerator::new();
        let router = formsmith::build_router(AppState::new(Arc::new(generator.clone())));
        Self { router, generator }
    }

    pub async fn get(&self, uri: &str) -> (StatusCode, String) {
        self.send(Request::builder().uri(uri).body(Body::empty()).unwrap()).await
    }

    pub async fn post_form(&self, uri: &str, body: &str) -> (StatusCode, String) {
        let request = Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from(body.to_string()))
            .unwrap();
        self.send(request).await
    }

    async fn send(&self, request: Request<Body>) -> (StatusCode, String) {
        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, String::from_utf8(bytes.to_vec()).unwrap())
    }
}
