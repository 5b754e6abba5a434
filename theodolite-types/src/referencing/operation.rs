use serde::{Deserialize, Serialize};

use super::{CoordinateReferenceSystem, IdentifiedObject, ParameterDescriptor};

/// Kind of a coordinate operation.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub enum OperationKind {
    /// Operation whose parameters are defined, not empirically derived, e.g. a map projection.
    Conversion,
    /// Operation with empirically derived parameters, between systems based on different datums.
    Transformation,
    /// Ordered sequence of two or more operations.
    Concatenated,
    /// Operation applied to a subset of the coordinates only.
    PassThrough,
}

/// Change of coordinates from one CRS to another.
pub trait CoordinateOperation: IdentifiedObject {
    /// Kind of the operation.
    fn operation_kind(&self) -> OperationKind;

    /// CRS of the input coordinates.
    fn source_crs(&self) -> Option<&dyn CoordinateReferenceSystem> {
        None
    }

    /// CRS of the output coordinates.
    fn target_crs(&self) -> Option<&dyn CoordinateReferenceSystem> {
        None
    }

    /// Version of the operation. Mandatory for transformations, forbidden for conversions.
    fn operation_version(&self) -> Option<&str> {
        None
    }

    /// Algorithm used by a conversion or a transformation.
    fn method(&self) -> Option<&dyn OperationMethod> {
        None
    }

    /// Operations wrapped by concatenated or pass-through operations, in order.
    fn steps(&self) -> Vec<&dyn CoordinateOperation> {
        Vec::new()
    }
}

/// Definition of an algorithm used to perform a coordinate operation.
pub trait OperationMethod: IdentifiedObject {
    /// Formula or procedure used by this method, or a reference to a publication.
    fn formula(&self) -> Option<&str>;

    /// Descriptors of the parameters used by this method.
    fn parameters(&self) -> Option<&dyn ParameterDescriptor> {
        None
    }
}
