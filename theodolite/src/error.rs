//! Error types used by the crate.

use theodolite_types::AxisDirection;
use thiserror::Error;

/// Validation failure. The first failure encountered aborts the validation call.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    /// A mandatory property is absent or empty.
    #[error("{0}")]
    MissingRequiredField(String),
    /// A forbidden property is populated.
    #[error("{0}")]
    UnexpectedField(String),
    /// A property value is out of its allowed range or inconsistent with other properties.
    #[error("{0}")]
    InvalidValue(String),
    /// Two axis directions of the same category are not separated by a multiple of 90°.
    #[error("Found an angle of {angle:.1}° between axis directions {first} and {second}.")]
    InconsistentGeometry {
        /// Direction of the first axis.
        first: AxisDirection,
        /// Direction of the axis compared with the first one.
        second: AxisDirection,
        /// Angle between the two directions, in degrees.
        angle: f64,
    },
    /// The axis direction has no entry in the orientation catalog. This is a defect of the library, not of
    /// the validated object.
    #[error("axis direction {0} is missing from the orientation catalog")]
    InternalCatalogFault(AxisDirection),
}

impl ValidationError {
    /// Returns true if the error is caused by the library itself rather than by the validated object.
    pub fn is_internal(&self) -> bool {
        matches!(self, Self::InternalCatalogFault(_))
    }
}
