//! JSON codec for templates and variable-name lists.
//!
//! The `try_*` functions surface errors. The plain `decode_*` functions are
//! what persisted data goes through: malformed input is logged and replaced
//! with an empty value so an editing session can always start.

use crate::{ModelError, Template};
use tracing::error;

/// Variable names offered when none are stored
pub const DEFAULT_VARIABLE_NAMES: [&str; 4] = ["firstname", "lastname", "company", "position"];

pub fn encode_template(template: &Template) -> String {
    // A tree of strings always serializes
    serde_json::to_string(template).unwrap_or_default()
}

pub fn try_decode_template(raw: &str) -> Result<Template, ModelError> {
    Ok(serde_json::from_str(raw)?)
}

pub fn decode_template(raw: &str) -> Template {
    try_decode_template(raw).unwrap_or_else(|e| {
        error!(error = %e, "Error parsing template");
        Template::empty()
    })
}

pub fn encode_variable_names(names: &[String]) -> String {
    serde_json::to_string(names).unwrap_or_default()
}

pub fn try_decode_variable_names(raw: &str) -> Result<Vec<String>, ModelError> {
    Ok(serde_json::from_str(raw)?)
}

pub fn decode_variable_names(raw: &str) -> Vec<String> {
    try_decode_variable_names(raw).unwrap_or_else(|e| {
        error!(error = %e, "Error parsing variable names");
        Vec::new()
    })
}

pub fn default_variable_names() -> Vec<String> {
    DEFAULT_VARIABLE_NAMES.iter().map(|s| s.to_string()).collect()
}
