// crates/journey-core/src/error.rs
use thiserror::Error;

/// Errors raised by the dataset, globe and query layers.
#[derive(Debug, Error)]
pub enum GeoError {
    /// Neither the primary nor any fallback source could be read or parsed.
    #[error("Data unavailable: {0}")]
    DataUnavailable(String),

    /// A level, theme or numeric id outside of what the API recognises.
    #[error("Invalid parameter `{name}`: {value:?} (expected one of: {expected})")]
    InvalidParameter {
        name: &'static str,
        value: String,
        expected: String,
    },

    #[error("Malformed bounds: {0}")]
    MalformedBounds(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

impl GeoError {
    pub fn invalid_parameter(
        name: &'static str,
        value: impl Into<String>,
        expected: &[&str],
    ) -> Self {
        GeoError::InvalidParameter {
            name,
            value: value.into(),
            expected: expected.join(", "),
        }
    }

    /// `true` for errors the caller caused (mapped to a 4xx by the HTTP layer).
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            GeoError::InvalidParameter { .. } | GeoError::MalformedBounds(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, GeoError>;
