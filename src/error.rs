//! Error types
//!
//! None of these reach the user. Extraction and configuration failures are
//! logged and the page carries on with whatever could be recovered.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExtractError {
    #[error("payload element #{element_id} not found")]
    MissingPayload { element_id: String },

    #[error("payload is not valid JSON: {0}")]
    InvalidPayload(#[from] serde_json::Error),

    #[error("{section}[{index}] is missing `{field}`")]
    IncompleteRecord {
        section: &'static str,
        index: usize,
        field: &'static str,
    },

    #[error("{section}[{index}] has an unexpected shape: {source}")]
    MalformedRecord {
        section: &'static str,
        index: usize,
        source: serde_json::Error,
    },
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("filter config is not valid JSON: {0}")]
    Invalid(#[from] serde_json::Error),
}

pub type ExtractResult<T> = Result<T, ExtractError>;
