use thiserror::Error;

#[derive(Error, Debug)]
pub enum ModelError {
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Unknown branch: {0} (expected if, then, else or optional)")]
    InvalidBranch(String),

    #[error("Invalid field: {0} (expected `main` or `<id>:<branch>`)")]
    InvalidField(String),

    #[error("Invalid caret: {0} (expected `<field>@<offset>`)")]
    InvalidCaret(String),
}
