//! Error types for sitemap fetching, article extraction, and batch output.
//!
//! Every fallible operation in the pipeline returns a [`ScrapeError`] so the
//! driver can decide what is logged and what is skipped. Nothing below the
//! driver swallows a failure.

use thiserror::Error;

pub type Result<T> = core::result::Result<T, ScrapeError>;

/// Failure taxonomy for a single fetch/parse/write operation.
#[derive(Debug, Error)]
pub enum ScrapeError {
    /// Network failure or non-2xx HTTP status.
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// Sitemap body was not well-formed XML.
    #[error("sitemap XML parse failed: {0}")]
    Xml(#[from] quick_xml::Error),

    /// The metadata script element was present but held invalid JSON.
    #[error("embedded metadata is not valid JSON: {0}")]
    Metadata(#[from] serde_json::Error),

    /// The configured content selector is not valid CSS.
    #[error("invalid content selector: {0}")]
    Selector(String),

    /// Batch file write failed.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metadata_error_from_serde() {
        let bad: core::result::Result<serde_json::Value, _> = serde_json::from_str("{not json");
        let err: ScrapeError = bad.unwrap_err().into();
        assert!(matches!(err, ScrapeError::Metadata(_)));
        assert!(err.to_string().contains("not valid JSON"));
    }

    #[test]
    fn test_selector_error_display() {
        let err = ScrapeError::Selector("section..broken".to_string());
        assert_eq!(
            err.to_string(),
            "invalid content selector: section..broken"
        );
    }
}
