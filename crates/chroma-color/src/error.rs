//! Error types for colorspace operations.
//!
//! Covers the failure modes of the transformation engine and the entity
//! constructors. Lookup misses are not errors: registry queries return
//! `Option` and callers null-check.

use thiserror::Error;

/// Result type alias using [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur during colorspace operations.
///
/// # Categories
///
/// - **Invalid argument**: [`MissingWhitepoint`](Error::MissingWhitepoint),
///   [`MissingMatrix`](Error::MissingMatrix),
///   [`UnknownAdaptationTransform`](Error::UnknownAdaptationTransform)
/// - **Numeric**: [`SingularMatrix`](Error::SingularMatrix)
#[derive(Debug, Error)]
pub enum Error {
    /// Chromatic adaptation was requested but one of the whitepoints needed
    /// to compute it is absent.
    #[error(
        "chromatic adaptation requested but a whitepoint is missing: \
         source={source_name:?}, target={target:?}"
    )]
    MissingWhitepoint {
        /// Name of the source whitepoint, if any.
        source_name: Option<String>,
        /// Name of the target whitepoint, if any.
        target: Option<String>,
    },

    /// A colorspace defines a gamut but lacks the XYZ conversion matrix
    /// needed for the requested direction.
    #[error("colorspace '{colorspace}' has no {direction} matrix")]
    MissingMatrix {
        /// Name of the offending colorspace.
        colorspace: String,
        /// Which matrix was needed ("to XYZ" or "from XYZ").
        direction: &'static str,
    },

    /// Degenerate primaries/whitepoint produced a singular normalized
    /// primary matrix.
    #[error("gamut '{gamut}' with whitepoint '{whitepoint}' produces a singular matrix")]
    SingularMatrix {
        /// Name of the gamut.
        gamut: String,
        /// Name of the whitepoint.
        whitepoint: String,
    },

    /// The given name does not correspond to a supported chromatic
    /// adaptation transform.
    #[error("unknown chromatic adaptation transform: '{name}'")]
    UnknownAdaptationTransform {
        /// The unrecognized name.
        name: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_whitepoint_display() {
        let err = Error::MissingWhitepoint {
            source_name: Some("D65".to_string()),
            target: None,
        };
        let msg = err.to_string();
        assert!(msg.contains("D65"));
        assert!(msg.contains("None"));
    }

    #[test]
    fn test_singular_matrix_display() {
        let err = Error::SingularMatrix {
            gamut: "degenerate".to_string(),
            whitepoint: "E".to_string(),
        };
        assert!(err.to_string().contains("degenerate"));
    }
}
