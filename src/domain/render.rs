//! Schema-driven form rendering.
//!
//! [`render`] maps a [`DynamicForm`] to a markup tree. It performs no I/O and
//! produces the same tree for the same input.

use crate::domain::form::{DynamicForm, FieldType, FormField};
use crate::domain::markup::{Element, MarkupNode};

/// Target of the rendered form's own submission.
pub const SUBMIT_ACTION: &str = "/submit";

/// CSS class carried by every per-field container.
pub const FIELD_CLASS: &str = "form-field";

const FIELD_STYLE: &str = "margin-bottom: 15px;";
const SUBMIT_STYLE: &str = "margin-top: 20px;";

/// Render a form as `<div class="container"><h1>title</h1><form>…</form></div>`.
///
/// Fields keep their input order. Choice fields without options render an
/// empty control group instead of failing.
pub fn render(form: &DynamicForm) -> MarkupNode {
    let submit = Element::new("button")
        .attr("type", "submit")
        .attr("style", SUBMIT_STYLE)
        .text("Submit");

    let body = Element::new("form")
        .attr("method", "post")
        .attr("action", SUBMIT_ACTION)
        .children(form.fields.iter().map(render_field))
        .child(submit);

    Element::new("div")
        .attr("class", "container")
        .child(Element::new("h1").text(form.title.as_str()))
        .child(body)
        .into()
}

/// Render one field block.
pub fn render_field(field: &FormField) -> MarkupNode {
    let controls = match field.field_type {
        FieldType::Text | FieldType::Number | FieldType::Date => vec![
            labelled_for(field),
            Element::new("input")
                .attr("type", field.field_type.as_str())
                .attr("name", field.name.as_str())
                .attr("id", field.name.as_str())
                .opt_attr("placeholder", field.placeholder.as_deref())
                .flag("required", field.required)
                .into(),
        ],
        FieldType::Textarea => vec![
            labelled_for(field),
            Element::new("textarea")
                .attr("name", field.name.as_str())
                .attr("id", field.name.as_str())
                .opt_attr("placeholder", field.placeholder.as_deref())
                .flag("required", field.required)
                .into(),
        ],
        FieldType::Select => {
            let options = field.options().iter().map(|option| {
                Element::new("option")
                    .attr("value", option.value.as_str())
                    .attr("label", option.label.as_str())
                    .text(option.label.as_str())
            });
            vec![
                labelled_for(field),
                Element::new("select")
                    .attr("name", field.name.as_str())
                    .attr("id", field.name.as_str())
                    .flag("required", field.required)
                    .children(options)
                    .into(),
            ]
        }
        // Browsers only honour `required` on a checkbox individually, so the
        // group is never marked required.
        FieldType::Checkbox => vec![group_label(field), option_group(field, "checkbox", false)],
        FieldType::Radio => {
            vec![group_label(field), option_group(field, "radio", field.required)]
        }
    };

    Element::new("div")
        .attr("class", FIELD_CLASS)
        .attr("style", FIELD_STYLE)
        .children(controls)
        .into()
}

fn labelled_for(field: &FormField) -> MarkupNode {
    Element::new("label").attr("for", field.name.as_str()).text(field.label.as_str()).into()
}

fn group_label(field: &FormField) -> MarkupNode {
    Element::new("label").text(field.label.as_str()).into()
}

fn option_group(field: &FormField, input_type: &'static str, required: bool) -> MarkupNode {
    let rows = field.options().iter().map(|option| {
        let id = field.option_id(option);
        Element::new("div")
            .child(
                Element::new("input")
                    .attr("type", input_type)
                    .attr("name", field.name.as_str())
                    .attr("value", option.value.as_str())
                    .attr("id", id.as_str())
                    .flag("required", required),
            )
            .child(Element::new("label").attr("for", id).text(option.label.as_str()))
    });

    Element::new("div").children(rows).into()
}
