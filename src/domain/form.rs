//! Dynamic form schema models.

use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

/// Kind of control a field renders as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    Text,
    Number,
    Date,
    Radio,
    Checkbox,
    Select,
    Textarea,
}

impl FieldType {
    pub const ALL: [FieldType; 7] = [
        FieldType::Text,
        FieldType::Number,
        FieldType::Date,
        FieldType::Radio,
        FieldType::Checkbox,
        FieldType::Select,
        FieldType::Textarea,
    ];

    /// Wire and HTML representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldType::Text => "text",
            FieldType::Number => "number",
            FieldType::Date => "date",
            FieldType::Radio => "radio",
            FieldType::Checkbox => "checkbox",
            FieldType::Select => "select",
            FieldType::Textarea => "textarea",
        }
    }

    /// Whether the field draws its controls from an options list.
    pub fn is_choice(&self) -> bool {
        matches!(self, FieldType::Radio | FieldType::Checkbox | FieldType::Select)
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One selectable entry of a choice field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldOption {
    pub label: String,
    pub value: String,
}

impl FieldOption {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self { label: label.into(), value: value.into() }
    }
}

/// A single field of a generated form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormField {
    /// Display title.
    pub label: String,
    #[serde(rename = "type")]
    pub field_type: FieldType,
    /// Submission key; also used as the DOM id.
    pub name: String,
    pub required: bool,
    /// Only meaningful for text-like fields.
    #[serde(default)]
    pub placeholder: Option<String>,
    /// Only meaningful for radio, checkbox and select.
    #[serde(default)]
    pub options: Option<Vec<FieldOption>>,
}

impl FormField {
    pub fn new(label: impl Into<String>, field_type: FieldType, name: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            field_type,
            name: name.into(),
            required: false,
            placeholder: None,
            options: None,
        }
    }

    pub fn required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    pub fn with_options(mut self, options: Vec<FieldOption>) -> Self {
        self.options = Some(options);
        self
    }

    /// Options of the field, empty when none were supplied.
    pub fn options(&self) -> &[FieldOption] {
        self.options.as_deref().unwrap_or(&[])
    }

    /// DOM id of the control for one option: `{name}_{value}`.
    pub fn option_id(&self, option: &FieldOption) -> String {
        format!("{}_{}", self.name, option.value)
    }
}

/// A form description produced from a prompt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DynamicForm {
    pub title: String,
    pub fields: Vec<FormField>,
}

/// Structural problem found in a generated form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormIssue {
    /// More than one field uses the same name.
    DuplicateName { name: String },
    /// A radio, checkbox or select field has no options.
    MissingOptions { name: String, field_type: FieldType },
}

impl fmt::Display for FormIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormIssue::DuplicateName { name } => write!(f, "duplicate field name '{}'", name),
            FormIssue::MissingOptions { name, field_type } => {
                write!(f, "{} field '{}' has no options", field_type, name)
            }
        }
    }
}

impl DynamicForm {
    pub fn new(title: impl Into<String>, fields: Vec<FormField>) -> Self {
        Self { title: title.into(), fields }
    }

    /// Report duplicate names and choice fields without options.
    ///
    /// Issues are advisory; the renderer accepts forms that have them.
    pub fn validate(&self) -> Vec<FormIssue> {
        let mut issues = Vec::new();
        let mut seen = HashSet::new();
        let mut reported = HashSet::new();

        for field in &self.fields {
            if !seen.insert(field.name.as_str()) && reported.insert(field.name.as_str()) {
                issues.push(FormIssue::DuplicateName { name: field.name.clone() });
            }
            if field.field_type.is_choice() && field.options().is_empty() {
                issues.push(FormIssue::MissingOptions {
                    name: field.name.clone(),
                    field_type: field.field_type,
                });
            }
        }

        issues
    }

    /// Strict JSON schema of this type for structured completion requests.
    ///
    /// Strict mode requires every property to be listed as required, so the
    /// optional members are expressed as nullable.
    pub fn response_schema() -> Value {
        let field_types: Vec<&str> = FieldType::ALL.iter().map(FieldType::as_str).collect();

        json!({
            "type": "object",
            "properties": {
                "title": { "type": "string", "description": "Title of the form" },
                "fields": {
                    "type": "array",
                    "description": "List of fields",
                    "items": {
                        "type": "object",
                        "properties": {
                            "label": { "type": "string", "description": "Title of the field" },
                            "type": {
                                "type": "string",
                                "enum": field_types,
                                "description": "Type of the field"
                            },
                            "name": {
                                "type": "string",
                                "description": "unique name to access the field"
                            },
                            "required": {
                                "type": "boolean",
                                "description": "Whether the field is required"
                            },
                            "placeholder": {
                                "type": ["string", "null"],
                                "description": "Placeholder for the field. only applicable for the type text and text area"
                            },
                            "options": {
                                "anyOf": [
                                    {
                                        "type": "array",
                                        "items": {
                                            "type": "object",
                                            "properties": {
                                                "label": {
                                                    "type": "string",
                                                    "description": "unique label for the option"
                                                },
                                                "value": {
                                                    "type": "string",
                                                    "description": "unique value for the option"
                                                }
                                            },
                                            "required": ["label", "value"],
                                            "additionalProperties": false
                                        }
                                    },
                                    { "type": "null" }
                                ],
                                "description": "Options for the field. only applicable for the type radio, checkbox and select"
                            }
                        },
                        "required": ["label", "type", "name", "required", "placeholder", "options"],
                        "additionalProperties": false
                    }
                }
            },
            "required": ["title", "fields"],
            "additionalProperties": false
        })
    }
}
