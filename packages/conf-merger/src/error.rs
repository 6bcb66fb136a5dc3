//! Error types for the merger.
//!
//! The merge core itself cannot fail; these errors cover loading documents
//! and resolving sources around it.

use std::path::PathBuf;

use thiserror::Error;

/// Main error type for the merger library.
#[derive(Debug, Error)]
pub enum MergerError {
    /// HTTP request failed.
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Failed to download a source document.
    #[error("Failed to download {url}: {source}")]
    SourceDownload {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// Failed to read a document from disk.
    #[error("Failed to read {}: {source}", .path.display())]
    ReadDocument {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Source catalog is not valid JSON.
    #[error("Invalid source catalog JSON: {0}")]
    CatalogJson(#[from] serde_json::Error),

    /// Source catalog is not valid YAML.
    #[error("Invalid source catalog YAML: {0}")]
    CatalogYaml(#[from] serde_yaml_ng::Error),

    /// No source catalog was given.
    #[error("No source catalog given. Pass --sources or set {0}")]
    MissingCatalog(&'static str),

    /// Invalid platform identifier.
    #[error("Invalid platform identifier: '{0}'. Expected letters, digits, '-' or '_'")]
    InvalidPlatform(String),

    /// The catalog has no injected document for the platform.
    #[error("No injection document configured for platform '{0}'")]
    UnknownPlatform(String),

    /// The catalog has no original document for the platform/author pair.
    #[error("No source configured for platform={platform}, author={author}")]
    UnknownSource { platform: String, author: String },
}

/// Result type alias for merger operations.
pub type Result<T> = std::result::Result<T, MergerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = MergerError::UnknownSource {
            platform: "loon".to_string(),
            author: "bob".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "No source configured for platform=loon, author=bob"
        );
    }

    #[test]
    fn test_read_document_display() {
        let err = MergerError::ReadDocument {
            path: PathBuf::from("missing.conf"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
        };
        assert!(err.to_string().starts_with("Failed to read missing.conf"));
    }

    #[test]
    fn test_missing_catalog_names_env_var() {
        let err = MergerError::MissingCatalog("CONF_MERGER_SOURCES");
        assert!(err.to_string().contains("CONF_MERGER_SOURCES"));
    }
}
