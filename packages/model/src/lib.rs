//! # msgtpl Model
//!
//! Schema for message templates: a root `main` text followed by a tree of
//! IF/THEN/ELSE conditional blocks, plus the id generator and JSON codec
//! that every other crate in the workspace builds on.

pub mod ast;
pub mod error;
pub mod id_generator;
pub mod serializer;

pub use ast::{BlockType, Branch, Caret, FieldRef, IfThenElse, Template, DEFAULT_MAIN_TEXT};
pub use error::ModelError;
pub use id_generator::{get_session_id, IDGenerator};
pub use serializer::{
    decode_template, decode_variable_names, default_variable_names, encode_template,
    encode_variable_names, try_decode_template, try_decode_variable_names, DEFAULT_VARIABLE_NAMES,
};
