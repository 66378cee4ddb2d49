//! Mapping backend validation errors onto form groups.
//!
//! Error maps come in several shapes depending on the validator: a plain
//! message, a list of messages, or an object with `msg`/`message`.

use bootwire_core::Element;
use serde_json::{Map, Value};

use super::FormGroup;

/// Validation state for one field.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FieldValidation {
    pub error: Option<String>,
    pub is_invalid: bool,
}

/// Pulls a display message for `field` out of an error map.
///
/// Strings are used as-is, lists yield their first item, objects yield their
/// `msg` or `message` key. Anything else is stringified.
pub fn extract_field_error(errors: Option<&Map<String, Value>>, field: &str) -> Option<String> {
    let value = errors?.get(field)?;
    match value {
        Value::String(message) => Some(message.clone()),
        Value::Array(items) => items.first().map(display),
        Value::Object(object) => Some(
            object
                .get("msg")
                .or_else(|| object.get("message"))
                .map(display)
                .unwrap_or_else(|| value.to_string()),
        ),
        other => Some(other.to_string()),
    }
}

fn display(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

pub fn map_form_group_validation(
    errors: Option<&Map<String, Value>>,
    field: &str,
) -> FieldValidation {
    let error = extract_field_error(errors, field).filter(|e| !e.is_empty());
    FieldValidation {
        is_invalid: error.is_some(),
        error,
    }
}

/// Builds a [`FormGroup`] whose validation state comes from an error map.
pub fn form_group_from_errors(
    input: Element,
    field: &str,
    errors: Option<&Map<String, Value>>,
) -> FormGroup {
    let validation = map_form_group_validation(errors, field);
    FormGroup::new(input).error_opt(validation.error)
}
