mod common;

use axum::http::StatusCode;
use common::TestApp;
use formsmith::app::web::{ERROR_FRAGMENT, SUBMITTED_FRAGMENT};

#[tokio::test]
async fn prompt_to_form_to_submission() {
    let app = TestApp::new();

    let (status, page) = app.get("/").await;
    assert_eq!(status, StatusCode::OK);
    assert!(page.contains(r#"<div id="form_area"></div>"#));

    let (status, fragment) = app
        .post_form("/update-prompt", "prompt=Create+a+contact+form+with+name+and+email")
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_ne!(fragment, ERROR_FRAGMENT);
    assert!(fragment.contains(r#"<form method="post" action="/submit">"#));
    assert!(fragment.contains(r#"name="full_name""#));
    assert!(fragment.contains(r#"name="email_address""#));
    assert_eq!(fragment.matches(r#"<button type="submit""#).count(), 1);

    let (status, page) = app.get("/").await;
    assert_eq!(status, StatusCode::OK);
    assert!(page.contains("Create a contact form with name and email</textarea>"));

    let (status, ack) = app.post_form("/submit", "full_name=Jane&email_address=jane%40x.io").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(ack, SUBMITTED_FRAGMENT);

    assert_eq!(app.generator.calls(), vec!["Create a contact form with name and email"]);
}

#[tokio::test]
async fn empty_prompt_never_reaches_generator() {
    let app = TestApp::new();

    let (_, fragment) = app.post_form("/update-prompt", "prompt=").await;

    assert_eq!(fragment, ERROR_FRAGMENT);
    assert!(app.generator.calls().is_empty());
}

#[tokio::test]
async fn each_prompt_gets_its_own_form() {
    let app = TestApp::new();

    let (_, first) = app.post_form("/update-prompt", "prompt=Ask+for+a+name").await;
    let (_, second) = app.post_form("/update-prompt", "prompt=Ask+for+a+rating").await;

    assert!(first.contains("<h1>Ask for a name</h1>"));
    assert!(first.contains(r#"name="full_name""#));
    assert!(!first.contains(r#"type="radio""#));

    assert!(second.contains("<h1>Ask for a rating</h1>"));
    assert!(second.contains(r#"id="rating_good""#));
    assert!(second.contains(r#"id="rating_bad""#));
    assert!(!second.contains(r#"name="full_name""#));

    assert_eq!(app.generator.calls(), vec!["Ask for a name", "Ask for a rating"]);
}

#[tokio::test]
async fn prompt_markup_is_escaped_in_rendered_title() {
    let app = TestApp::new();

    let (_, fragment) = app.post_form("/update-prompt", "prompt=%3Cscript%3Ename%3C%2Fscript%3E").await;

    assert!(fragment.contains("<h1>&lt;script&gt;name&lt;/script&gt;</h1>"));
    assert!(!fragment.contains("<script>"));
}
