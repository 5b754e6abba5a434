//! Classification of axis directions by [`Category`] and angular position (see [`lookup`]).
//!
//! Directions of the same category can be compared with each other: their positions split the full turn in
//! equal steps, in the order the members of the category are declared. Directions of different categories
//! are never compared.

use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};
use theodolite_types::AxisDirection;

use crate::error::ValidationError;

/// Number of position steps in a full turn.
pub const FULL_TURN: u8 = 16;

/// Size of one position step, in degrees.
pub const DEGREES_PER_STEP: f64 = 360.0 / FULL_TURN as f64;

/// Group of mutually comparable axis directions.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub enum Category {
    /// Compass directions.
    Geographic,
    /// Pixel row and column directions.
    Grid,
    /// Directions on a display surface.
    Display,
    /// Directions relative to a ship or vehicle.
    Ship,
    /// Up and down.
    Vertical,
    /// Future and past.
    Temporal,
    /// Clockwise and counter clockwise.
    Rotation,
    /// Towards and away from an object.
    Radial,
    /// Geocentric X alone.
    GeocentricX,
    /// Geocentric Y alone.
    GeocentricY,
    /// Geocentric Z alone.
    GeocentricZ,
    /// Unspecified direction alone.
    Unspecified,
    /// Other direction alone.
    Other,
}

impl Category {
    /// All categories.
    pub const ALL: [Category; 13] = [
        Self::Geographic,
        Self::Grid,
        Self::Display,
        Self::Ship,
        Self::Vertical,
        Self::Temporal,
        Self::Rotation,
        Self::Radial,
        Self::GeocentricX,
        Self::GeocentricY,
        Self::GeocentricZ,
        Self::Unspecified,
        Self::Other,
    ];

    /// Directions of the category, ordered clockwise starting from position 0.
    pub fn members(&self) -> &'static [AxisDirection] {
        use AxisDirection::*;

        match self {
            Self::Geographic => &[
                North,
                NorthNorthEast,
                NorthEast,
                EastNorthEast,
                East,
                EastSouthEast,
                SouthEast,
                SouthSouthEast,
                South,
                SouthSouthWest,
                SouthWest,
                WestSouthWest,
                West,
                WestNorthWest,
                NorthWest,
                NorthNorthWest,
            ],
            Self::Grid => &[RowNegative, ColumnPositive, RowPositive, ColumnNegative],
            Self::Display => &[DisplayUp, DisplayRight, DisplayDown, DisplayLeft],
            Self::Ship => &[Forward, Starboard, Aft, Port],
            Self::Vertical => &[Up, Down],
            Self::Temporal => &[Future, Past],
            Self::Rotation => &[Clockwise, CounterClockwise],
            Self::Radial => &[AwayFrom, Towards],
            Self::GeocentricX => &[GeocentricX],
            Self::GeocentricY => &[GeocentricY],
            Self::GeocentricZ => &[GeocentricZ],
            Self::Unspecified => &[Unspecified],
            Self::Other => &[Other],
        }
    }

    /// Position distance between two consecutive members.
    pub fn step(&self) -> u8 {
        FULL_TURN / self.members().len() as u8
    }
}

/// Position of an axis direction within its category.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub struct Orientation {
    category: Category,
    position: u8,
}

impl Orientation {
    /// Category of the direction.
    pub fn category(&self) -> Category {
        self.category
    }

    /// Position in the `[0, FULL_TURN)` range, measured clockwise from the first member of the category.
    pub fn position(&self) -> u8 {
        self.position
    }

    /// Position converted to degrees.
    pub fn degrees(&self) -> f64 {
        self.position as f64 * DEGREES_PER_STEP
    }

    /// Smallest number of position steps between the two orientations, in the `[0, FULL_TURN / 2]` range.
    ///
    /// Returns `None` if the orientations belong to different categories.
    pub fn separation(&self, other: &Orientation) -> Option<u8> {
        if self.category != other.category {
            return None;
        }

        let difference = self.position.abs_diff(other.position) % FULL_TURN;
        Some(difference.min(FULL_TURN - difference))
    }
}

lazy_static! {
    static ref ORIENTATIONS: Vec<Option<Orientation>> = build_orientations();
}

fn build_orientations() -> Vec<Option<Orientation>> {
    let mut table = vec![None; AxisDirection::ALL.len()];
    for category in Category::ALL {
        debug_assert_eq!(
            FULL_TURN as usize % category.members().len(),
            0,
            "{category:?} members do not split the turn evenly"
        );

        let step = category.step();
        for (index, direction) in category.members().iter().enumerate() {
            table[*direction as usize] = Some(Orientation {
                category,
                position: index as u8 * step,
            });
        }
    }

    table
}

/// Returns the orientation of the given direction.
///
/// Every direction has an entry in the catalog, so an error here is an
/// [`InternalCatalogFault`](ValidationError::InternalCatalogFault) rather than a failure of the validated object.
pub fn lookup(direction: AxisDirection) -> Result<Orientation, ValidationError> {
    ORIENTATIONS
        .get(direction as usize)
        .copied()
        .flatten()
        .ok_or(ValidationError::InternalCatalogFault(direction))
}
