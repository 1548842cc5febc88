//! # msgtpl Editor
//!
//! Core editing engine for message templates.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │ model: Template tree + JSON codec           │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ editor: Document lifecycle + mutations      │
//! │  - Locate blocks by id                      │
//! │  - Insert / update / delete with validation │
//! │  - Load/save through a Storage backend      │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ preview: Template → display segments        │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## Core Principles
//!
//! 1. **Ids address blocks**: every edit names its target by block id and
//!    branch, never by position in the tree
//! 2. **Validate, then apply**: a rejected mutation changes nothing
//! 3. **No text is lost**: deleting a block hands its trailing text to a
//!    neighbour
//! 4. **Focus is explicit**: the caret is passed to each edit rather than
//!    read from shared state
//!
//! ## Usage
//!
//! ```rust,ignore
//! use msgtpl_editor::{EditSession, FileStorage};
//! use msgtpl_model::{Branch, FieldRef};
//!
//! let mut session = EditSession::open(FileStorage::new(".msgtpl"))?;
//!
//! // Split `main` at the caret into a conditional block
//! let id = session.document.insert_conditional(&FieldRef::Main.at(6))?;
//! session.document.update_field(FieldRef::node(&id, Branch::If), "{{company}}")?;
//!
//! let segments = session.preview().render();
//! session.save()?;
//! ```

mod document;
mod errors;
pub mod locator;
mod mutations;
mod session;
mod storage;

pub use document::Document;
pub use errors::EditorError;
pub use locator::CaretSplit;
pub use mutations::{Mutation, MutationError, MutationResult};
pub use session::{CloseOutcome, EditSession};
pub use storage::{FileStorage, MemoryStorage, Storage, TEMPLATE_KEY, VARIABLE_NAMES_KEY};

// Re-export common types for convenience
pub use msgtpl_model::{BlockType, Branch, Caret, FieldRef, IfThenElse, Template};
pub use msgtpl_preview::MessagePreview;
