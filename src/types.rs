/// Shared serializable output types.
///
/// These types are what gets written for machine consumers. The search
/// result model itself lives in the catalog layer and is serialized
/// directly; here live only the envelope types with no domain logic.
use serde::{Deserialize, Serialize};

/// A structured error envelope for JSON error output.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorOutput {
    /// Always `false`.
    pub ok: bool,
    /// Error details.
    pub error: ErrorDetail,
}

/// Error detail in the JSON error envelope.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorDetail {
    /// Machine-readable error code (snake_case).
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// HTTP status, present for `http_status` errors only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<u16>,
}

impl ErrorOutput {
    /// Construct from a `CatalogError`.
    #[must_use]
    pub fn from_catalog_error(err: &crate::catalog::CatalogError) -> Self {
        use crate::catalog::CatalogError;
        let status = match err {
            CatalogError::HttpStatus { status, .. } => Some(*status),
            CatalogError::Transport(_) | CatalogError::Parse { .. } => None,
        };
        Self {
            ok: false,
            error: ErrorDetail {
                code: err.code().to_owned(),
                message: err.to_string(),
                status,
            },
        }
    }
}
