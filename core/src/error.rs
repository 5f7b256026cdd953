//! Error types for the products API client.
//!
//! # Design
//! Reads and writes fail differently. A failed read leaves nothing to show,
//! so it becomes `Fetch` and replaces the list view. A failed write carries
//! the server's explanation in `Validation` so the caller can show it next to
//! the input that caused it. `Display` for both is the bare message, ready to
//! put in front of a user.

use thiserror::Error;

/// Errors returned by `ProductClient` and `ProductApi`.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// A read operation failed: non-2xx status or no response at all.
    #[error("{0}")]
    Fetch(String),

    /// A write was rejected. `status` is `None` when the input never left
    /// the client.
    #[error("{message}")]
    Validation { status: Option<u16>, message: String },

    /// The server returned 404 for a single-product read.
    #[error("product not found")]
    NotFound,

    /// A write request never produced a response.
    #[error("request failed: {0}")]
    Transport(String),

    /// The response body could not be deserialized into the expected type.
    #[error("deserialization failed: {0}")]
    Deserialization(String),

    /// The request payload could not be serialized to JSON.
    #[error("serialization failed: {0}")]
    Serialization(String),
}

impl ApiError {
    pub fn validation(message: impl Into<String>) -> Self {
        ApiError::Validation {
            status: None,
            message: message.into(),
        }
    }
}
