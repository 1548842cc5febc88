//! # Template Mutations
//!
//! Semantic edits on a message template. Every mutation is validated against
//! the tree before anything is touched, so a rejected mutation leaves the
//! template exactly as it was.
//!
//! ## Mutation Semantics
//!
//! ### InsertConditional
//! - Splits the field under the caret; the text after the caret becomes the
//!   new block's `optional`
//! - `main`: the new block is prepended to the root children
//! - `optional` of a block: the new block becomes that block's next sibling,
//!   with the same parent tag
//! - `if`/`then`/`else` of a block: the new block is prepended to that
//!   block's children, tagged with the branch
//!
//! ### UpdateField / InsertText
//! - Atomic replacement of a whole field, or a splice at a caret
//!
//! ### DeleteConditional
//! - Removes the block and its descendants
//! - Its `optional` text moves to the previous sibling in the same
//!   sequence, or to the parent's field for its branch when it was first

use crate::locator::{field_text, field_text_mut, find_node, find_node_mut, find_parent_mut, find_siblings_mut};
use msgtpl_model::{BlockType, Branch, Caret, FieldRef, IfThenElse, Template};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Semantic mutations (intent-preserving operations)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum Mutation {
    /// Insert an empty conditional block at the caret
    InsertConditional {
        at: Caret,
        /// Id for the new block
        node_id: String,
    },

    /// Replace the full text of a field
    UpdateField {
        field: FieldRef,
        content: String,
    },

    /// Splice text into a field at the caret
    InsertText {
        at: Caret,
        text: String,
    },

    /// Remove a block, keeping its `optional` text
    DeleteConditional {
        node_id: String,
    },
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum MutationError {
    #[error("Node not found: {0}")]
    NodeNotFound(String),

    #[error("Node id already in use: {0}")]
    DuplicateId(String),

    #[error("Node id must not be empty")]
    EmptyId,
}

impl Mutation {
    /// Apply mutation to the template with validation
    pub fn apply(&self, template: &mut Template) -> Result<(), MutationError> {
        self.validate(template)?;

        match self {
            Mutation::InsertConditional { at, node_id } => {
                Self::apply_insert_conditional(template, at, node_id)
            }

            Mutation::UpdateField { field, content } => {
                Self::apply_update_field(template, field, content)
            }

            Mutation::InsertText { at, text } => Self::apply_insert_text(template, at, text),

            Mutation::DeleteConditional { node_id } => Self::apply_delete(template, node_id),
        }
    }

    /// Short name for logging
    pub fn name(&self) -> &'static str {
        match self {
            Mutation::InsertConditional { .. } => "insert_conditional",
            Mutation::UpdateField { .. } => "update_field",
            Mutation::InsertText { .. } => "insert_text",
            Mutation::DeleteConditional { .. } => "delete_conditional",
        }
    }

    fn apply_insert_conditional(
        template: &mut Template,
        at: &Caret,
        node_id: &str,
    ) -> Result<(), MutationError> {
        match &at.field {
            FieldRef::Main => {
                let (before, after) = owned_split(at, &template.main);
                template.main = before;
                template
                    .children
                    .insert(0, IfThenElse::new(node_id, BlockType::Main, after));
            }

            FieldRef::Node {
                id,
                branch: Branch::Optional,
            } => {
                let (siblings, index) = find_siblings_mut(&mut template.children, id)
                    .ok_or_else(|| MutationError::NodeNotFound(id.clone()))?;

                let target = &mut siblings[index];
                let (before, after) = owned_split(at, &target.optional);
                let parent = target.parent;
                target.optional = before;

                siblings.insert(index + 1, IfThenElse::new(node_id, parent, after));
            }

            FieldRef::Node { id, branch } => {
                let target = find_node_mut(&mut template.children, id)
                    .ok_or_else(|| MutationError::NodeNotFound(id.clone()))?;

                let (before, after) = owned_split(at, target.text(*branch));
                *target.text_mut(*branch) = before;

                target
                    .children
                    .insert(0, IfThenElse::new(node_id, (*branch).into(), after));
            }
        }

        Ok(())
    }

    fn apply_update_field(
        template: &mut Template,
        field: &FieldRef,
        content: &str,
    ) -> Result<(), MutationError> {
        let text = field_text_mut(template, field).ok_or_else(|| not_found(field))?;
        *text = content.to_string();
        Ok(())
    }

    fn apply_insert_text(template: &mut Template, at: &Caret, inserted: &str) -> Result<(), MutationError> {
        let text = field_text_mut(template, &at.field).ok_or_else(|| not_found(&at.field))?;
        let index = at.byte_index(text);
        text.insert_str(index, inserted);
        Ok(())
    }

    fn apply_delete(template: &mut Template, node_id: &str) -> Result<(), MutationError> {
        if let Some(index) = template.children.iter().position(|c| c.id == node_id) {
            let removed = template.children.remove(index);

            match preceding_sibling(&mut template.children, index) {
                Some(previous) => previous.optional.push_str(&removed.optional),
                None => template.main.push_str(&removed.optional),
            }

            return Ok(());
        }

        let parent = find_parent_mut(&mut template.children, node_id)
            .ok_or_else(|| MutationError::NodeNotFound(node_id.to_string()))?;

        let index = parent
            .children
            .iter()
            .position(|c| c.id == node_id)
            .ok_or_else(|| MutationError::NodeNotFound(node_id.to_string()))?;
        let removed = parent.children.remove(index);

        match preceding_sibling(&mut parent.children, index) {
            Some(previous) => previous.optional.push_str(&removed.optional),
            None => {
                // A nested block tagged `main` has no branch of its own to
                // fall back on; its text belongs after the parent's children
                let branch = removed.parent.as_branch().unwrap_or(Branch::Optional);
                parent.text_mut(branch).push_str(&removed.optional);
            }
        }

        Ok(())
    }

    /// Validate without applying
    pub fn validate(&self, template: &Template) -> Result<(), MutationError> {
        match self {
            Mutation::InsertConditional { at, node_id } => {
                if node_id.is_empty() {
                    return Err(MutationError::EmptyId);
                }
                if template.contains_id(node_id) {
                    return Err(MutationError::DuplicateId(node_id.clone()));
                }
                field_text(template, &at.field).ok_or_else(|| not_found(&at.field))?;
                Ok(())
            }

            Mutation::UpdateField { field, .. } => {
                field_text(template, field).ok_or_else(|| not_found(field))?;
                Ok(())
            }

            Mutation::InsertText { at, .. } => {
                field_text(template, &at.field).ok_or_else(|| not_found(&at.field))?;
                Ok(())
            }

            Mutation::DeleteConditional { node_id } => {
                find_node(&template.children, node_id)
                    .ok_or_else(|| MutationError::NodeNotFound(node_id.clone()))?;
                Ok(())
            }
        }
    }
}

/// Result of applying a mutation
#[derive(Debug, Clone)]
pub struct MutationResult {
    /// New version number
    pub version: u64,

    /// Id of the block the mutation created, if any
    pub created: Option<String>,
}

fn owned_split(at: &Caret, text: &str) -> (String, String) {
    let (before, after) = at.split(text);
    (before.to_string(), after.to_string())
}

fn not_found(field: &FieldRef) -> MutationError {
    MutationError::NodeNotFound(field.node_id().unwrap_or_default().to_string())
}

/// Block directly before `index` in the same sequence, whatever its branch
fn preceding_sibling(siblings: &mut [IfThenElse], index: usize) -> Option<&mut IfThenElse> {
    index.checked_sub(1).and_then(|previous| siblings.get_mut(previous))
}
