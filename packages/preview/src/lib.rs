//! # msgtpl Preview
//!
//! Read-only rendering of message templates.
//!
//! ```text
//! Template ──encode──▶ JSON ──substitute {{vars}}──▶ JSON ──decode──▶ Template
//!                                                                       │
//!                                                          resolve IF children
//!                                                                       ▼
//!                                                             Vec<String> segments
//! ```
//!
//! - [`variables`]: placeholder substitution and detection on flat strings
//! - [`resolver`]: folds nested conditionals into display segments
//! - [`preview`]: the two combined, with per-variable values

pub mod preview;
pub mod resolver;
pub mod variables;

pub use preview::MessagePreview;
pub use resolver::{render_node, render_template, resolve_if_blocks};
pub use variables::{find_variables_in_template, generate_message, TemplateValues};
