use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

use super::IdentifiedObject;
use crate::AxisDirection;

/// Kind of a coordinate system.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub enum CsKind {
    /// Two- or three-dimensional system with straight, not necessarily orthogonal axes.
    Affine,
    /// Two- or three-dimensional system with orthogonal straight axes.
    Cartesian,
    /// Polar coordinates extended with a straight perpendicular axis.
    Cylindrical,
    /// Geodetic latitude, longitude and optionally ellipsoidal height.
    Ellipsoidal,
    /// One-dimensional system along a (possibly curved) line.
    Linear,
    /// One-dimensional system with a parameter axis.
    Parametric,
    /// Two-dimensional system of a distance from the origin and an angle.
    Polar,
    /// Three-dimensional system of a distance from the origin and two angles.
    Spherical,
    /// One-dimensional time axis.
    Temporal,
    /// One-dimensional gravity-related height or depth axis.
    Vertical,
    /// Any other coordinate system.
    Other,
}

impl CsKind {
    /// Number of dimensions a coordinate system of this kind may have.
    pub fn dimension_range(&self) -> RangeInclusive<usize> {
        match self {
            Self::Affine | Self::Cartesian | Self::Ellipsoidal | Self::Spherical => 2..=3,
            Self::Polar => 2..=2,
            Self::Cylindrical => 3..=3,
            Self::Linear | Self::Parametric | Self::Temporal | Self::Vertical => 1..=1,
            Self::Other => 1..=usize::MAX,
        }
    }
}

/// Set of axes that spans a given coordinate space.
pub trait CoordinateSystem: IdentifiedObject {
    /// Kind of the coordinate system.
    fn cs_kind(&self) -> CsKind;

    /// Number of axes of the coordinate system.
    fn dimension(&self) -> usize;

    /// Axis at the given index, `0 <= index < dimension`.
    fn axis(&self, index: usize) -> Option<&dyn CoordinateSystemAxis>;

    /// Iterates over the axes of the coordinate system. A missing axis is yielded as `None`.
    fn axes(&self) -> Box<dyn Iterator<Item = Option<&dyn CoordinateSystemAxis>> + '_> {
        Box::new((0..self.dimension()).map(|index| self.axis(index)))
    }
}

/// Meaning of the axis value range.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub enum RangeMeaning {
    /// Any value outside the range is invalid.
    Exact,
    /// The axis is continuous with values wrapping around at the range bounds, e.g. longitude.
    Wraparound,
}

/// Definition of a coordinate system axis.
pub trait CoordinateSystemAxis: IdentifiedObject {
    /// Abbreviation used for this axis, e.g. `φ` or `X`.
    fn abbreviation(&self) -> Option<&str>;

    /// Direction of this axis.
    fn direction(&self) -> Option<AxisDirection>;

    /// Unit of measure of the axis values, e.g. `degree` or `metre`.
    fn unit(&self) -> Option<&str>;

    /// Minimum value normally allowed for this axis.
    fn minimum_value(&self) -> f64 {
        f64::NEG_INFINITY
    }

    /// Maximum value normally allowed for this axis.
    fn maximum_value(&self) -> f64 {
        f64::INFINITY
    }

    /// Meaning of the axis value range. Expected only for axes with a bounded range.
    fn range_meaning(&self) -> Option<RangeMeaning> {
        None
    }
}
