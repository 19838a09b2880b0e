//! Error type shared by all geometry operations.

use thiserror::Error;

/// Error types for geometry operations.
///
/// Every variant is a caller contract violation (an invalid argument).
/// Nothing here is transient, so there is nothing to retry.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeometryError {
    /// Rotation is not one of 0, 90, 180 or 270 degrees.
    #[error("Invalid rotation: {0} (expected 0, 90, 180 or 270)")]
    InvalidRotation(i32),

    /// Raw alignment value outside the nine known anchors.
    #[error("Invalid rectangle alignment: {0}")]
    InvalidAlignment(u8),

    /// A size or rectangle extent is zero, negative or not finite where a
    /// positive extent is required.
    #[error("Invalid {context} size: {width}x{height}")]
    InvalidSize {
        context: &'static str,
        width: f64,
        height: f64,
    },

    /// Affine transform has a zero determinant.
    #[error("Transform is not invertible")]
    NonInvertible,
}

impl GeometryError {
    /// Returns true if the error was caused by an invalid argument.
    ///
    /// This is currently every variant.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(
            self,
            GeometryError::InvalidRotation(_)
                | GeometryError::InvalidAlignment(_)
                | GeometryError::InvalidSize { .. }
                | GeometryError::NonInvertible
        )
    }

    pub(crate) fn invalid_size(context: &'static str, width: f64, height: f64) -> Self {
        log::debug!("Rejected {context} size {width}x{height}");
        GeometryError::InvalidSize {
            context,
            width,
            height,
        }
    }
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, GeometryError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            GeometryError::InvalidRotation(45).to_string(),
            "Invalid rotation: 45 (expected 0, 90, 180 or 270)"
        );
        assert_eq!(
            GeometryError::InvalidAlignment(9).to_string(),
            "Invalid rectangle alignment: 9"
        );
        assert_eq!(
            GeometryError::invalid_size("target", 0.0, 10.0).to_string(),
            "Invalid target size: 0x10"
        );
    }

    #[test]
    fn test_all_variants_are_invalid_argument() {
        assert!(GeometryError::InvalidRotation(1).is_invalid_argument());
        assert!(GeometryError::InvalidAlignment(42).is_invalid_argument());
        assert!(GeometryError::invalid_size("bounds", -1.0, 1.0).is_invalid_argument());
        assert!(GeometryError::NonInvertible.is_invalid_argument());
    }
}
