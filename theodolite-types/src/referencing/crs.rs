use serde::{Deserialize, Serialize};

use super::{CoordinateSystem, CsKind, Datum, IdentifiedObject};

/// Kind of a coordinate reference system.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub enum CrsKind {
    /// Latitude and longitude on an ellipsoid.
    Geographic,
    /// Earth-centered cartesian coordinates.
    Geocentric,
    /// Map projection of a geographic system.
    Projected,
    /// Gravity-related heights or depths.
    Vertical,
    /// Time.
    Temporal,
    /// Locally defined contextual system.
    Engineering,
    /// Pixel coordinates.
    Image,
    /// Parametric values such as pressure levels.
    Parametric,
    /// Derived from another system by a conversion.
    Derived,
    /// Combination of two or more other systems.
    Compound,
}

impl CrsKind {
    /// Kinds of coordinate system allowed for this kind of CRS. `None` if any kind is acceptable.
    pub fn expected_cs_kinds(&self) -> Option<&'static [CsKind]> {
        match self {
            Self::Geographic => Some(&[CsKind::Ellipsoidal]),
            Self::Geocentric => Some(&[CsKind::Cartesian, CsKind::Spherical]),
            Self::Projected => Some(&[CsKind::Cartesian]),
            Self::Vertical => Some(&[CsKind::Vertical]),
            Self::Temporal => Some(&[CsKind::Temporal]),
            Self::Image => Some(&[CsKind::Cartesian, CsKind::Affine]),
            Self::Parametric => Some(&[CsKind::Parametric]),
            Self::Engineering | Self::Derived | Self::Compound => None,
        }
    }
}

/// Coordinate system related to an object by a datum.
pub trait CoordinateReferenceSystem: IdentifiedObject {
    /// Kind of the coordinate reference system.
    fn crs_kind(&self) -> CrsKind;

    /// Coordinate system of the CRS. Compound systems may not have one.
    fn coordinate_system(&self) -> Option<&dyn CoordinateSystem>;

    /// Datum of the CRS. Compound systems may not have one.
    fn datum(&self) -> Option<&dyn Datum>;

    /// Components of a compound CRS, in order. Empty for other kinds.
    fn components(&self) -> Vec<&dyn CoordinateReferenceSystem> {
        Vec::new()
    }
}
