//! Crate-wide error type.
//!
//! ERROR HANDLING
//! ==============
//! Only the clipboard write and the contact-form post can fail in a way the
//! page cares about. Missing optional elements are not errors; components
//! guard them with `Option` and skip the work.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Errors produced by page behaviors.
#[derive(Debug, thiserror::Error)]
pub enum PortfolioError {
    /// The system clipboard rejected the write.
    #[error("clipboard write failed: {0}")]
    Clipboard(String),

    /// The relay request never produced a response.
    #[error("network request failed: {0}")]
    Network(String),

    /// The relay answered with a non-success status.
    #[error("relay rejected submission: status {status}")]
    RelayStatus { status: u16 },

    /// The submission body could not be serialized.
    #[error("payload encode failed: {0}")]
    Encode(#[source] serde_json::Error),

    /// The page configuration block could not be parsed.
    #[error("config parse failed: {0}")]
    Config(#[source] serde_json::Error),
}
