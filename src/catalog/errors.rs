/// Errors from the catalog layer.
use thiserror::Error;

/// Errors that can occur while querying the catalog or decoding its
/// response. Each variant maps to a distinct process exit code so scripts
/// can tell transport trouble from a misbehaving service.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The request never completed: connection refused, DNS failure, TLS
    /// handshake trouble or a timeout.
    #[error("catalog request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The service answered with a non-200 status.
    #[error("catalog returned HTTP {status}: {body}")]
    HttpStatus {
        /// HTTP status code of the response.
        status: u16,
        /// Response body, carried verbatim for diagnostics.
        body: String,
    },

    /// The response body was not a well-formed catalog search document.
    #[error("malformed catalog response: {reason}")]
    Parse {
        /// What made the document unreadable.
        reason: String,
    },
}

impl From<quick_xml::Error> for CatalogError {
    fn from(err: quick_xml::Error) -> Self {
        Self::Parse {
            reason: err.to_string(),
        }
    }
}

impl CatalogError {
    /// Process exit code for this error.
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Transport(_) => 2,
            Self::HttpStatus { .. } => 3,
            Self::Parse { .. } => 4,
        }
    }

    /// Machine-readable error code for structured output.
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::Transport(_) => "transport",
            Self::HttpStatus { .. } => "http_status",
            Self::Parse { .. } => "parse",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes_are_distinct() {
        let http = CatalogError::HttpStatus {
            status: 500,
            body: "boom".to_owned(),
        };
        let parse = CatalogError::Parse {
            reason: "not xml".to_owned(),
        };

        assert_eq!(http.exit_code(), 3);
        assert_eq!(parse.exit_code(), 4);
        assert_ne!(http.exit_code(), parse.exit_code());
    }

    #[test]
    fn test_display_carries_status_and_body() {
        let err = CatalogError::HttpStatus {
            status: 503,
            body: "Service Unavailable".to_owned(),
        };

        let rendered = err.to_string();
        assert!(rendered.contains("503"));
        assert!(rendered.contains("Service Unavailable"));
    }

    #[test]
    fn test_xml_errors_become_parse() {
        let mut reader = quick_xml::Reader::from_reader(&b"<bad"[..]);
        let mut buf = Vec::new();
        let xml_err = reader
            .read_event_into(&mut buf)
            .expect_err("unclosed tag must not parse");

        let err = CatalogError::from(xml_err);
        assert!(matches!(err, CatalogError::Parse { .. }));
        assert_eq!(err.code(), "parse");
    }
}
