//! # Message Preview
//!
//! Preview state for one template: the allowed variable names and a value
//! for each. Values start out as the variable's own placeholder so an unset
//! variable shows up as `{{name}}` in the rendered message.

use crate::resolver::render_template;
use crate::variables::{find_variables_in_template, generate_message, TemplateValues};
use msgtpl_model::{decode_template, encode_template, Template};
use tracing::debug;

#[derive(Debug, Clone)]
pub struct MessagePreview {
    template: Template,
    variable_names: Vec<String>,
    values: TemplateValues,
}

impl MessagePreview {
    pub fn new(template: Template, variable_names: Vec<String>) -> Self {
        let values = variable_names
            .iter()
            .map(|name| (name.clone(), format!("{{{{{}}}}}", name)))
            .collect();

        Self {
            template,
            variable_names,
            values,
        }
    }

    pub fn template(&self) -> &Template {
        &self.template
    }

    pub fn variable_names(&self) -> &[String] {
        &self.variable_names
    }

    pub fn value(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }

    pub fn set_value(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.values.insert(name.into(), value.into());
    }

    /// Allowed variables the template actually references
    pub fn variables(&self) -> Vec<String> {
        find_variables_in_template(&encode_template(&self.template), &self.variable_names)
    }

    /// Copy of the template with every placeholder substituted.
    ///
    /// Substitution runs over the encoded template, so values are
    /// JSON-escaped first to keep the result decodable.
    pub fn substituted(&self) -> Template {
        let escaped: TemplateValues = self
            .values
            .iter()
            .map(|(name, value)| (name.clone(), json_escape(value)))
            .collect();

        let message = generate_message(&encode_template(&self.template), &escaped);
        decode_template(&message)
    }

    /// Display segments after substitution and conditional resolution
    pub fn render(&self) -> Vec<String> {
        let segments = render_template(&self.substituted());
        debug!(segments = segments.len(), "Rendered preview");
        segments
    }

    /// The rendered segments joined into one message
    pub fn message(&self) -> String {
        self.render().concat()
    }
}

fn json_escape(value: &str) -> String {
    let quoted = serde_json::to_string(value).unwrap_or_default();
    quoted
        .strip_prefix('"')
        .and_then(|s| s.strip_suffix('"'))
        .unwrap_or_default()
        .to_string()
}
