//! # Edit Session Management
//!
//! An EditSession is one open editor: the document being edited, the
//! variable names offered for insertion, and the storage both came from.

use crate::storage::{Storage, VARIABLE_NAMES_KEY};
use crate::{Document, EditorError};
use msgtpl_model::{decode_variable_names, default_variable_names, encode_variable_names};
use msgtpl_preview::MessagePreview;
use tracing::info;

/// What happened when a session was closed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CloseOutcome {
    /// Nothing changed since the last save
    Unchanged,
    /// Changes were written before closing
    Saved,
    /// Changes were dropped
    Discarded,
}

pub struct EditSession<S: Storage> {
    /// Document being edited
    pub document: Document,

    /// Names offered for `{{name}}` insertion, in display order
    pub variable_names: Vec<String>,

    storage: S,
}

impl<S: Storage> EditSession<S> {
    /// Open the stored template and variable names, falling back to the
    /// built-in defaults for whatever is missing
    pub fn open(storage: S) -> Result<Self, EditorError> {
        let document = Document::load(&storage)?;
        let variable_names = match storage.load(VARIABLE_NAMES_KEY)? {
            Some(raw) => decode_variable_names(&raw),
            None => default_variable_names(),
        };

        info!(
            blocks = document.template().node_count(),
            variables = variable_names.len(),
            "Opened edit session"
        );

        Ok(Self {
            document,
            variable_names,
            storage,
        })
    }

    /// Persist the template
    pub fn save(&mut self) -> Result<(), EditorError> {
        self.document.save(&mut self.storage)
    }

    /// Replace and persist the variable-name list
    pub fn set_variable_names(&mut self, names: Vec<String>) -> Result<(), EditorError> {
        self.storage
            .save(VARIABLE_NAMES_KEY, &encode_variable_names(&names))?;
        self.variable_names = names;
        Ok(())
    }

    pub fn has_unsaved_changes(&self) -> bool {
        self.document.is_dirty()
    }

    /// Close the session, saving pending changes when `save_changes` is set
    pub fn close(mut self, save_changes: bool) -> Result<(CloseOutcome, S), EditorError> {
        let outcome = if !self.has_unsaved_changes() {
            CloseOutcome::Unchanged
        } else if save_changes {
            self.save()?;
            CloseOutcome::Saved
        } else {
            CloseOutcome::Discarded
        };

        info!(?outcome, "Closed edit session");
        Ok((outcome, self.storage))
    }

    /// Preview of the current template snapshot
    pub fn preview(&self) -> MessagePreview {
        MessagePreview::new(self.document.template().clone(), self.variable_names.clone())
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }
}
