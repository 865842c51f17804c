//! Error types for content loading and localization.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while parsing, loading or resolving bilingual content.
///
/// All of these are startup conditions: content is static, so a defect is
/// reported once when the catalog is built rather than at lookup time.
#[derive(Debug, Error)]
pub enum ContentError {
    /// A translation leaf has no variant for the requested locale.
    #[error("missing '{locale}' translation at '{path}'")]
    MissingTranslation { path: String, locale: String },

    /// A JSON value that has no place in the content grammar (e.g. `null`).
    #[error("unsupported {kind} value at '{path}'")]
    UnsupportedValue { path: String, kind: &'static str },

    /// A namespace document is not valid JSON.
    #[error("malformed JSON in namespace '{namespace}': {source}")]
    Malformed {
        namespace: String,
        #[source]
        source: serde_json::Error,
    },

    /// A namespace document could not be read.
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("unknown locale code: '{0}'")]
    UnknownLocale(String),

    #[error("locale '{0}' is not enabled")]
    DisabledLocale(String),
}
