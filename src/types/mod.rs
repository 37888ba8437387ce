use thiserror::Error;

mod colors;
mod domain_types;
mod ids;

pub use colors::*;
pub use domain_types::*;
pub use ids::*;

#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("Invalid Notion ID format: {0}")]
    InvalidId(String),

    #[error("Invalid color: {0}")]
    InvalidColor(String),

    #[error("Collection bounds violation: {actual} items, expected {min}..={max}")]
    BoundsViolation {
        actual: usize,
        min: usize,
        max: usize,
    },

    #[error("{field} is {actual} characters, maximum is {max}")]
    TooLong {
        field: &'static str,
        actual: usize,
        max: usize,
    },

    #[error("Invalid URL: {url} - {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("Empty required field: {0}")]
    EmptyField(&'static str),

    #[error("Invalid API key format: {reason}")]
    InvalidApiKey { reason: String },

    #[error("Invalid email address: {address} - {reason}")]
    InvalidEmail { address: String, reason: String },

    #[error("Unsupported mention kind: {0}")]
    UnsupportedMentionKind(String),
}
