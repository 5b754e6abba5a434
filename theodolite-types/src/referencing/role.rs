use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

/// Specialized capability an [`IdentifiedObject`](super::IdentifiedObject) can play.
///
/// An object may play several roles at once, e.g. a simplified implementation where the same value is both a
/// coordinate reference system and its own coordinate system.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize, Serialize)]
pub enum Role {
    /// See [`CoordinateReferenceSystem`](super::CoordinateReferenceSystem).
    CoordinateReferenceSystem,
    /// See [`CoordinateSystem`](super::CoordinateSystem).
    CoordinateSystem,
    /// See [`CoordinateSystemAxis`](super::CoordinateSystemAxis).
    CoordinateSystemAxis,
    /// See [`Datum`](super::Datum).
    Datum,
    /// See [`Ellipsoid`](super::Ellipsoid).
    Ellipsoid,
    /// See [`PrimeMeridian`](super::PrimeMeridian).
    PrimeMeridian,
    /// See [`ParameterDescriptor`](super::ParameterDescriptor).
    ParameterDescriptor,
    /// See [`CoordinateOperation`](super::CoordinateOperation).
    CoordinateOperation,
    /// See [`OperationMethod`](super::OperationMethod).
    OperationMethod,
}

impl Role {
    /// All roles, in the order objects are dispatched to them.
    pub const ALL: [Role; 9] = [
        Self::CoordinateReferenceSystem,
        Self::CoordinateSystem,
        Self::CoordinateSystemAxis,
        Self::Datum,
        Self::Ellipsoid,
        Self::PrimeMeridian,
        Self::ParameterDescriptor,
        Self::CoordinateOperation,
        Self::OperationMethod,
    ];
}

impl Display for Role {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        std::fmt::Debug::fmt(self, f)
    }
}
