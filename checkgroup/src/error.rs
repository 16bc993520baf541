//! Error types for checkbox groups.
//!
//! Selection, normalization and attribute resolution never fail. Errors only
//! come from the edges: parsing size tokens, addressing a child that does not
//! exist, and loading a JSON config.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum GroupError {
    #[error("invalid size '{0}', expected one of: sm, md, lg")]
    InvalidSize(String),
    #[error("no option at index {index} (group has {len} options)")]
    UnknownOption { index: usize, len: usize },
    #[error("config parse error: {0}")]
    Config(#[from] serde_json::Error),
    #[error("config read error: {0}")]
    Io(#[from] std::io::Error),
}
