//! Error types for heading indexing.

use indexer_config::ConfigError;

/// Error from indexing a document.
#[derive(Debug, thiserror::Error)]
pub enum IndexError {
    /// A matched heading could not be found in the output buffer.
    ///
    /// The scan and the rewritten text have diverged; the document is not
    /// processed further.
    #[error("heading {raw:?} not found in output at or after byte {offset}")]
    RewriteOutOfSync {
        /// Heading markup that was being rewritten.
        raw: String,
        /// Output offset where the search started.
        offset: usize,
    },

    /// Invalid configuration.
    #[error("invalid indexer configuration")]
    Config(#[from] ConfigError),
}
