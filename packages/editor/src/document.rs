//! # Document Handle
//!
//! A Document is one message template plus its editing state: a version
//! counter, the id generator for new blocks, and the encoded form of the
//! template as it was last persisted.
//!
//! ## Lifecycle
//!
//! ```text
//! Load → Edit → Preview → Save
//!   ↓      ↓       ↓        ↓
//! Storage Mutations Segments Storage
//! ```

use crate::locator::{field_text, find_node, split_at_caret, CaretSplit};
use crate::storage::{Storage, TEMPLATE_KEY};
use crate::{EditorError, Mutation, MutationResult};
use msgtpl_model::{
    decode_template, encode_template, try_decode_template, Caret, FieldRef, IDGenerator,
    IfThenElse, Template,
};
use tracing::{debug, warn};

/// Editable message template
#[derive(Debug)]
pub struct Document {
    /// Current version number (increments on each applied mutation)
    pub version: u64,

    template: Template,

    ids: IDGenerator,

    /// Encoded template as last loaded or saved; `None` for a template that
    /// has never been persisted
    saved: Option<String>,
}

impl Document {
    /// Fresh document holding the built-in default template
    pub fn new() -> Self {
        Self::open_with_ids(None, IDGenerator::default())
    }

    /// Document over an already persisted template
    pub fn from_template(template: Template) -> Self {
        Self::open_with_ids(Some(template), IDGenerator::default())
    }

    /// Stored template if there is one, default otherwise
    pub fn open(stored: Option<Template>) -> Self {
        Self::open_with_ids(stored, IDGenerator::default())
    }

    /// Like [`Document::open`] but with a caller-supplied id generator.
    /// Targets without a system clock must come through here.
    pub fn open_with_ids(stored: Option<Template>, ids: IDGenerator) -> Self {
        match stored {
            Some(template) => Self {
                version: 0,
                saved: Some(encode_template(&template)),
                template,
                ids,
            },
            None => Self {
                version: 0,
                template: Template::default(),
                ids,
                saved: None,
            },
        }
    }

    /// Strict decode: malformed JSON is an error
    pub fn from_json(raw: &str) -> Result<Self, EditorError> {
        Ok(Self::from_template(try_decode_template(raw)?))
    }

    /// Load from storage. Malformed stored data is logged and replaced by
    /// the empty template rather than failing
    pub fn load(storage: &impl Storage) -> Result<Self, EditorError> {
        let stored = storage.load(TEMPLATE_KEY)?.map(|raw| decode_template(&raw));
        Ok(Self::open(stored))
    }

    /// Write the encoded template to storage and mark it clean
    pub fn save(&mut self, storage: &mut impl Storage) -> Result<(), EditorError> {
        let encoded = encode_template(&self.template);
        storage.save(TEMPLATE_KEY, &encoded)?;
        debug!(version = self.version, bytes = encoded.len(), "Saved template");
        self.saved = Some(encoded);
        Ok(())
    }

    /// Use a specific id generator (deterministic ids for tests and replays)
    pub fn with_id_generator(mut self, ids: IDGenerator) -> Self {
        self.ids = ids;
        self
    }

    pub fn template(&self) -> &Template {
        &self.template
    }

    pub fn into_template(self) -> Template {
        self.template
    }

    pub fn to_json(&self) -> String {
        encode_template(&self.template)
    }

    pub fn find(&self, id: &str) -> Option<&IfThenElse> {
        find_node(&self.template.children, id)
    }

    pub fn split_at_caret(&self, at: &Caret) -> Option<CaretSplit> {
        split_at_caret(&self.template, at)
    }

    /// Apply a mutation
    pub fn apply(&mut self, mutation: Mutation) -> Result<MutationResult, EditorError> {
        if let Err(e) = mutation.apply(&mut self.template) {
            warn!(mutation = mutation.name(), error = %e, "Rejected mutation");
            return Err(e.into());
        }

        self.version += 1;
        debug!(mutation = mutation.name(), version = self.version, "Applied mutation");

        let created = match mutation {
            Mutation::InsertConditional { node_id, .. } => Some(node_id),
            _ => None,
        };

        Ok(MutationResult {
            version: self.version,
            created,
        })
    }

    /// Insert a conditional block at the caret; returns the new block's id
    pub fn insert_conditional(&mut self, at: &Caret) -> Result<String, EditorError> {
        let node_id = self.fresh_id();
        self.apply(Mutation::InsertConditional {
            at: at.clone(),
            node_id: node_id.clone(),
        })?;
        Ok(node_id)
    }

    pub fn update_field(
        &mut self,
        field: FieldRef,
        content: impl Into<String>,
    ) -> Result<MutationResult, EditorError> {
        self.apply(Mutation::UpdateField {
            field,
            content: content.into(),
        })
    }

    pub fn insert_text(&mut self, at: Caret, text: impl Into<String>) -> Result<MutationResult, EditorError> {
        self.apply(Mutation::InsertText {
            at,
            text: text.into(),
        })
    }

    /// Insert a `{{name}}` placeholder at the caret; returns the caret
    /// positioned just after it
    pub fn insert_variable(&mut self, at: &Caret, name: &str) -> Result<Caret, EditorError> {
        let placeholder = format!("{{{{{}}}}}", name);

        // Offsets past the end land at the end
        let start = field_text(&self.template, &at.field)
            .map(|text| at.offset.min(text.chars().count()))
            .unwrap_or(at.offset);

        self.insert_text(at.clone(), placeholder.as_str())?;
        Ok(Caret::new(at.field.clone(), start + placeholder.chars().count()))
    }

    pub fn delete_conditional(&mut self, node_id: &str) -> Result<MutationResult, EditorError> {
        self.apply(Mutation::DeleteConditional {
            node_id: node_id.to_string(),
        })
    }

    /// Record the current template as persisted without writing it anywhere
    pub fn mark_saved(&mut self) {
        self.saved = Some(self.to_json());
    }

    /// Check if the template differs from what was last persisted
    pub fn is_dirty(&self) -> bool {
        self.saved.as_deref() != Some(self.to_json().as_str())
    }

    fn fresh_id(&mut self) -> String {
        loop {
            let id = self.ids.new_id();
            if !self.template.contains_id(&id) {
                return id;
            }
        }
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}
