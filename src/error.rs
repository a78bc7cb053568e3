//! Error and diagnostic types for the track renderer.

use std::fmt;

use thiserror::Error;

/// Fatal conditions that abort a draw pass before anything is drawn.
#[derive(Error, Debug)]
pub enum RenderError {
    #[error("degenerate view window: end ({end}) must be greater than start ({start})")]
    DegenerateWindow { start: u64, end: u64 },
    #[error("canvas width must be a positive finite number, got {0}")]
    InvalidCanvasWidth(f64),
    #[error("invalid JSON input: {0}")]
    Json(#[from] serde_json::Error),
}

/// Non-fatal conditions reported while drawing; the pass still completes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    /// A category without a dedicated glyph was drawn with the default line.
    UnrecognizedCategory { feature_id: String, category: String },
    /// The category had no color entry; a fallback color was used.
    MissingColor {
        feature_id: String,
        category: String,
        used: String,
    },
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::UnrecognizedCategory { feature_id, category } => write!(
                f,
                "unhandled variant type {category} on {feature_id}; drawing default shape"
            ),
            Diagnostic::MissingColor {
                feature_id,
                category,
                used,
            } => write!(
                f,
                "no color for category {category} on {feature_id}; using {used}"
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn degenerate_window_message_names_bounds() {
        let err = RenderError::DegenerateWindow { start: 10, end: 10 };
        assert_eq!(
            err.to_string(),
            "degenerate view window: end (10) must be greater than start (10)"
        );
    }

    #[test]
    fn json_errors_convert() {
        let err: RenderError = serde_json::from_str::<u32>("nope").unwrap_err().into();
        assert!(matches!(err, RenderError::Json(_)));
    }

    #[test]
    fn diagnostic_display() {
        let d = Diagnostic::UnrecognizedCategory {
            feature_id: "v1".into(),
            category: "inv".into(),
        };
        assert_eq!(d.to_string(), "unhandled variant type inv on v1; drawing default shape");
    }
}
