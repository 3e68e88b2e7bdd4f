//! # Core Type Definitions
//!
//! This module contains the error type shared by the whole crate.
//!
//! ## Error Taxonomy
//!
//! - Unreadable input and malformed XML abort the parse of a document
//! - Unknown vocabulary tokens abort the parse of a document
//! - Missing or non-numeric attributes are never errors (see `attributes`)

use thiserror::Error;

// =============================================================================
// ERROR TYPES
// =============================================================================

/// Errors that can occur while reading or parsing KGML.
///
/// - No silent failures
/// - Use `Result<T, KgmlError>` for fallible operations
/// - The parser never panics; callers decide how to surface errors
#[derive(Debug, Error)]
pub enum KgmlError {
    /// The input could not be read (missing file, stream failure).
    #[error("I/O error: {0}")]
    IoError(String),

    /// The input is not well-formed XML.
    #[error("Malformed XML: {0}")]
    XmlError(String),

    /// A structural `type` attribute carries a token outside its vocabulary.
    #[error("Unknown {vocabulary} token: {token:?}")]
    UnknownVocabulary {
        /// Name of the vocabulary that rejected the token.
        vocabulary: &'static str,
        /// The offending token, verbatim.
        token: String,
    },

    /// A configuration file could not be read or decoded.
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// A serialization error occurred.
    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl From<std::io::Error> for KgmlError {
    fn from(e: std::io::Error) -> Self {
        Self::IoError(e.to_string())
    }
}

impl From<roxmltree::Error> for KgmlError {
    fn from(e: roxmltree::Error) -> Self {
        Self::XmlError(e.to_string())
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_vocabulary_message_names_token() {
        let err = KgmlError::UnknownVocabulary {
            vocabulary: "relation type",
            token: "XYrel".to_string(),
        };
        assert_eq!(err.to_string(), "Unknown relation type token: \"XYrel\"");
    }

    #[test]
    fn io_error_converts() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err = KgmlError::from(io);
        assert!(matches!(err, KgmlError::IoError(ref msg) if msg.contains("gone")));
    }

    #[test]
    fn xml_error_converts() {
        let err = roxmltree::Document::parse("<pathway>").map(|_| ()).map_err(KgmlError::from);
        assert!(matches!(err, Err(KgmlError::XmlError(_))));
    }
}
