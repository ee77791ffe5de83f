//! Error types for the tree adapters
//!
//! Queries never fail. Only loading a tree or a delimiter policy can.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, DomError>;

#[derive(Debug, Error)]
pub enum DomError {
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    #[error("Invalid node type: {0}")]
    InvalidNodeType(u64),

    #[error("Invalid delimiter for attribute {key:?}: expected a single character, got {value:?}")]
    InvalidDelimiter { key: String, value: String },

    #[error("Parse error: {0}")]
    ParseError(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}
