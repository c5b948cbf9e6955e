use thiserror::Error;

/// Everything the catalog can reject at run time.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShapeError {
    /// Text did not match any member of a pattern type's template union.
    #[error("{value:?} is not a valid {kind} (expected {template})")]
    PatternMismatch {
        kind: &'static str,
        value: String,
        template: String,
    },

    /// Text is not a member of a closed union.
    #[error("{value:?} is not a known {kind}")]
    UnknownToken {
        kind: &'static str,
        value: String,
    },

    /// JSON input failed to deserialize; `path` points at the offending node.
    #[error("at JSON path {path} → {message}")]
    Json {
        path: String,
        message: String,
    },
}

impl ShapeError {
    pub fn kind(&self) -> Option<&'static str> {
        match self {
            ShapeError::PatternMismatch { kind, .. } => Some(kind),
            ShapeError::UnknownToken { kind, .. } => Some(kind),
            ShapeError::Json { .. } => None,
        }
    }
}

pub type Result<T, E = ShapeError> = std::result::Result<T, E>;
