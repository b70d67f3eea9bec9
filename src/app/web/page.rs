//! Page shell and fragment assembly.

use minijinja::{Environment, context};

use crate::domain::{AppError, Element, MarkupNode};

const INDEX_TEMPLATE_NAME: &str = "index.html";
const INDEX_TEMPLATE: &str = include_str!("templates/index.html");

/// Id of the container the generated form is swapped into.
pub const FORM_AREA_ID: &str = "form_area";

/// Fragment returned for an empty prompt or a failed generation.
pub const ERROR_FRAGMENT: &str =
    r#"<div id="form_area">Error generating form. Please try again.</div>"#;

/// Fragment returned after the generated form is posted.
pub const SUBMITTED_FRAGMENT: &str = r#"<main class="container"><p>Form submitted.</p></main>"#;

fn build_environment() -> Result<Environment<'static>, AppError> {
    let mut env = Environment::new();
    env.add_template(INDEX_TEMPLATE_NAME, INDEX_TEMPLATE)?;
    Ok(env)
}

/// Render the full page, echoing the last submitted prompt into the textarea.
pub fn render_index(prompt: Option<&str>) -> Result<String, AppError> {
    let env = build_environment()?;
    let template = env.get_template(INDEX_TEMPLATE_NAME)?;
    let html =
        template.render(context! { prompt => prompt.unwrap_or(""), target => FORM_AREA_ID })?;
    Ok(html)
}

/// Wrap rendered markup in the form-area container.
pub fn form_area(content: MarkupNode) -> String {
    MarkupNode::from(Element::new("div").attr("id", FORM_AREA_ID).child(content)).to_html()
}
