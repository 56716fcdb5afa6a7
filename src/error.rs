use thiserror::Error;

/// Errors found while validating drawing data read from outside the process
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FormatError {
    /// A color string that is neither a hex triplet nor a known color name
    #[error("invalid color {0:?}")]
    InvalidColor(String),

    /// Wrong number of coordinates for the item kind
    #[error("{kind} needs {expected} coordinates, found {found}")]
    CoordinateCount {
        kind: &'static str,
        expected: String,
        found: usize,
    },

    /// NaN or infinite coordinate or width
    #[error("{kind} has a non-finite value")]
    NonFinite { kind: &'static str },
}
