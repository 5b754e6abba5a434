use serde::{Deserialize, Serialize};

use super::IdentifiedObject;

/// Kind of a datum.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub enum DatumKind {
    /// Relationship of a coordinate system to the Earth, through an ellipsoid and a prime meridian.
    Geodetic,
    /// Reference for gravity-related heights.
    Vertical,
    /// Origin of a temporal coordinate system.
    Temporal,
    /// Origin of a local engineering system.
    Engineering,
    /// Origin of an image.
    Image,
    /// Reference for parametric values.
    Parametric,
}

/// Parameters defining the position of the origin, scale and orientation of a coordinate system.
pub trait Datum: IdentifiedObject {
    /// Kind of the datum.
    fn datum_kind(&self) -> DatumKind;

    /// Description of the relationship used to anchor the coordinate system to the Earth.
    fn anchor_definition(&self) -> Option<&str> {
        None
    }

    /// Ellipsoid of a geodetic datum.
    fn ellipsoid(&self) -> Option<&dyn Ellipsoid> {
        None
    }

    /// Prime meridian of a geodetic datum.
    fn prime_meridian(&self) -> Option<&dyn PrimeMeridian> {
        None
    }
}

/// Geometric figure that can be used to describe the approximate shape of the Earth.
pub trait Ellipsoid: IdentifiedObject {
    /// Length of the semi-major axis.
    fn semi_major_axis(&self) -> f64;

    /// Length of the semi-minor axis.
    fn semi_minor_axis(&self) -> f64;

    /// Inverse flattening. Infinite for a sphere.
    fn inverse_flattening(&self) -> f64;

    /// True if the inverse flattening is the defining parameter, false if the semi-minor axis is.
    fn is_ivf_definitive(&self) -> bool;

    /// True if the ellipsoid is degenerated to a sphere.
    fn is_sphere(&self) -> bool {
        self.semi_major_axis() == self.semi_minor_axis()
    }

    /// Unit of the semi-axis lengths.
    fn axis_unit(&self) -> Option<&str>;
}

/// Origin from which longitude values are determined.
pub trait PrimeMeridian: IdentifiedObject {
    /// Longitude of the prime meridian measured from the Greenwich meridian, positive eastward.
    fn greenwich_longitude(&self) -> f64;

    /// Unit of the Greenwich longitude.
    fn angular_unit(&self) -> Option<&str>;
}
