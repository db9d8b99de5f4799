//! Error type shared by the geometry calculators.

/// Geometry computation error.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, thiserror::Error)]
pub enum GeometryError {
    /// A surface or box dimension was zero, negative, or too small to form a rectangle.
    #[error("invalid {what}: {value}")]
    InvalidInput {
        /// Which input was rejected (`"surface width"`, `"box height"`, ...).
        what: &'static str,
        /// The rejected value.
        value: i32,
    },
    /// A display rotation code outside the four recognized states.
    #[error("unsupported rotation code {0}")]
    UnsupportedRotation(i32),
}

impl GeometryError {
    /// Whether the caller can keep using its previous output.
    ///
    /// Unsupported rotation codes never invalidate an earlier transform.
    pub fn is_recoverable(self) -> bool {
        matches!(self, Self::UnsupportedRotation(_))
    }
}

/// Reject values that are not strictly positive.
pub(crate) fn require_positive(what: &'static str, value: i32) -> Result<i32, GeometryError> {
    if value > 0 {
        Ok(value)
    } else {
        Err(GeometryError::InvalidInput { what, value })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positive_passes_through() {
        assert_eq!(require_positive("surface width", 1), Ok(1));
        assert_eq!(require_positive("surface width", 1080), Ok(1080));
    }

    #[test]
    fn zero_and_negative_rejected() {
        assert_eq!(
            require_positive("box width", 0),
            Err(GeometryError::InvalidInput {
                what: "box width",
                value: 0
            })
        );
        assert!(require_positive("box height", -5).is_err());
        assert!(require_positive("box height", i32::MIN).is_err());
    }

    #[test]
    fn recoverability() {
        assert!(GeometryError::UnsupportedRotation(4).is_recoverable());
        assert!(
            !GeometryError::InvalidInput {
                what: "surface width",
                value: 0
            }
            .is_recoverable()
        );
    }

    #[cfg(feature = "std")]
    #[test]
    fn display_messages() {
        let e = GeometryError::InvalidInput {
            what: "surface height",
            value: -3,
        };
        assert_eq!(e.to_string(), "invalid surface height: -3");
        assert_eq!(
            GeometryError::UnsupportedRotation(7).to_string(),
            "unsupported rotation code 7"
        );
    }
}
