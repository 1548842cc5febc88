use msgtpl_editor::{Caret, Document, FieldRef, MessagePreview};
use msgtpl_model::{decode_template, IDGenerator};
use msgtpl_preview::TemplateValues;
use wasm_bindgen::prelude::*;

#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}

fn js_error(context: &str, err: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&format!("{}: {}", context, err))
}

fn parse_caret(raw: &str) -> Result<Caret, JsValue> {
    raw.parse().map_err(|e| js_error("Invalid caret", e))
}

fn parse_field(raw: &str) -> Result<FieldRef, JsValue> {
    raw.parse().map_err(|e| js_error("Invalid field", e))
}

/// Editor over one template. Fields are addressed as `main` or
/// `<id>:<branch>`, carets as `<field>@<offset>`.
#[wasm_bindgen]
pub struct TemplateEditor {
    document: Document,
}

#[wasm_bindgen]
impl TemplateEditor {
    /// Open `template_json`, or the default template when it is absent.
    /// Malformed JSON opens as the empty template.
    /// `seed` prefixes generated block ids (there is no system clock here).
    #[wasm_bindgen(constructor)]
    pub fn new(template_json: Option<String>, seed: &str) -> TemplateEditor {
        let stored = template_json.map(|raw| decode_template(&raw));

        Self {
            document: Document::open_with_ids(stored, IDGenerator::new(seed)),
        }
    }

    /// Split the field at the caret around a new block; returns its id
    #[wasm_bindgen(js_name = insertConditional)]
    pub fn insert_conditional(&mut self, caret: &str) -> Result<String, JsValue> {
        let caret = parse_caret(caret)?;
        self.document
            .insert_conditional(&caret)
            .map_err(|e| js_error("Edit error", e))
    }

    #[wasm_bindgen(js_name = updateField)]
    pub fn update_field(&mut self, field: &str, content: &str) -> Result<(), JsValue> {
        let field = parse_field(field)?;
        self.document
            .update_field(field, content)
            .map(|_| ())
            .map_err(|e| js_error("Edit error", e))
    }

    #[wasm_bindgen(js_name = insertText)]
    pub fn insert_text(&mut self, caret: &str, text: &str) -> Result<(), JsValue> {
        let caret = parse_caret(caret)?;
        self.document
            .insert_text(caret, text)
            .map(|_| ())
            .map_err(|e| js_error("Edit error", e))
    }

    /// Insert `{{name}}`; returns the caret just after it
    #[wasm_bindgen(js_name = insertVariable)]
    pub fn insert_variable(&mut self, caret: &str, name: &str) -> Result<String, JsValue> {
        let caret = parse_caret(caret)?;
        self.document
            .insert_variable(&caret, name)
            .map(|caret| caret.to_string())
            .map_err(|e| js_error("Edit error", e))
    }

    #[wasm_bindgen(js_name = deleteConditional)]
    pub fn delete_conditional(&mut self, id: &str) -> Result<(), JsValue> {
        self.document
            .delete_conditional(id)
            .map(|_| ())
            .map_err(|e| js_error("Edit error", e))
    }

    #[wasm_bindgen(getter)]
    pub fn version(&self) -> u64 {
        self.document.version
    }

    /// Encoded template, ready for storage
    #[wasm_bindgen(js_name = toJson)]
    pub fn to_json(&self) -> String {
        self.document.to_json()
    }

    /// Mark the current template as persisted
    #[wasm_bindgen(js_name = markSaved)]
    pub fn mark_saved(&mut self) {
        self.document.mark_saved();
    }

    #[wasm_bindgen(js_name = isDirty)]
    pub fn is_dirty(&self) -> bool {
        self.document.is_dirty()
    }

    /// Rendered preview as a JSON array of segments. `values_json` maps
    /// variable names to sample values; `names_json` lists the names offered.
    #[wasm_bindgen(js_name = previewSegments)]
    pub fn preview_segments(&self, values_json: &str, names_json: &str) -> Result<String, JsValue> {
        let names: Vec<String> =
            serde_json::from_str(names_json).map_err(|e| js_error("Invalid names", e))?;
        let values: TemplateValues =
            serde_json::from_str(values_json).map_err(|e| js_error("Invalid values", e))?;

        let mut preview = MessagePreview::new(self.document.template().clone(), names);
        for (name, value) in values {
            preview.set_value(name, value);
        }

        serde_json::to_string(&preview.render())
            .map_err(|e| js_error("Serialization error", e))
    }
}
