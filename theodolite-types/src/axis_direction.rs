//! See documentation for [`AxisDirection`].

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::TheodoliteTypesError;

/// Direction of a coordinate system axis.
///
/// The set of directions is closed: implementations under test can only pick one of these values. Each
/// direction is displayed, serialized and parsed as its upper-case symbol, e.g. `NORTH_EAST`.
#[derive(
    Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize, Serialize,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AxisDirection {
    /// Unknown or unspecified axis orientation.
    Other,
    /// Axis positive direction is north.
    North,
    /// Axis positive direction is approximately north-north-east.
    NorthNorthEast,
    /// Axis positive direction is approximately north-east.
    NorthEast,
    /// Axis positive direction is approximately east-north-east.
    EastNorthEast,
    /// Axis positive direction is π/2 radians clockwise from north.
    East,
    /// Axis positive direction is approximately east-south-east.
    EastSouthEast,
    /// Axis positive direction is approximately south-east.
    SouthEast,
    /// Axis positive direction is approximately south-south-east.
    SouthSouthEast,
    /// Axis positive direction is π radians clockwise from north.
    South,
    /// Axis positive direction is approximately south-south-west.
    SouthSouthWest,
    /// Axis positive direction is approximately south-west.
    SouthWest,
    /// Axis positive direction is approximately west-south-west.
    WestSouthWest,
    /// Axis positive direction is 3π/2 radians clockwise from north.
    West,
    /// Axis positive direction is approximately west-north-west.
    WestNorthWest,
    /// Axis positive direction is approximately north-west.
    NorthWest,
    /// Axis positive direction is approximately north-north-west.
    NorthNorthWest,
    /// Axis positive direction is up relative to gravity.
    Up,
    /// Axis positive direction is down relative to gravity.
    Down,
    /// Axis positive direction is in the equatorial plane from the centre of the body towards the
    /// intersection of the equator with the prime meridian.
    GeocentricX,
    /// Axis positive direction is in the equatorial plane from the centre of the body towards the
    /// intersection of the equator and the meridian π/2 radians eastwards from the prime meridian.
    GeocentricY,
    /// Axis positive direction is from the centre of the body parallel to its rotation axis and
    /// towards its north pole.
    GeocentricZ,
    /// Axis positive direction is towards the future.
    Future,
    /// Axis positive direction is towards the past.
    Past,
    /// Axis positive direction is towards higher pixel column.
    ColumnPositive,
    /// Axis positive direction is towards lower pixel column.
    ColumnNegative,
    /// Axis positive direction is towards higher pixel row.
    RowPositive,
    /// Axis positive direction is towards lower pixel row.
    RowNegative,
    /// Axis positive direction is right in display.
    DisplayRight,
    /// Axis positive direction is left in display.
    DisplayLeft,
    /// Axis positive direction is towards top of approximately vertical display surface.
    DisplayUp,
    /// Axis positive direction is towards bottom of approximately vertical display surface.
    DisplayDown,
    /// Axis positive direction is forward, for an observer at the centre of the object.
    Forward,
    /// Axis positive direction is aft, for an observer at the centre of the object.
    Aft,
    /// Axis positive direction is port, for an observer at the centre of the object.
    Port,
    /// Axis positive direction is starboard, for an observer at the centre of the object.
    Starboard,
    /// Axis positive direction is clockwise from a specified direction.
    Clockwise,
    /// Axis positive direction is counter clockwise from a specified direction.
    CounterClockwise,
    /// Axis positive direction is towards the object.
    Towards,
    /// Axis positive direction is away from the object.
    AwayFrom,
    /// Axis positive direction is unspecified.
    Unspecified,
}

impl AxisDirection {
    /// All axis directions, in declaration order.
    pub const ALL: [AxisDirection; 41] = [
        Self::Other,
        Self::North,
        Self::NorthNorthEast,
        Self::NorthEast,
        Self::EastNorthEast,
        Self::East,
        Self::EastSouthEast,
        Self::SouthEast,
        Self::SouthSouthEast,
        Self::South,
        Self::SouthSouthWest,
        Self::SouthWest,
        Self::WestSouthWest,
        Self::West,
        Self::WestNorthWest,
        Self::NorthWest,
        Self::NorthNorthWest,
        Self::Up,
        Self::Down,
        Self::GeocentricX,
        Self::GeocentricY,
        Self::GeocentricZ,
        Self::Future,
        Self::Past,
        Self::ColumnPositive,
        Self::ColumnNegative,
        Self::RowPositive,
        Self::RowNegative,
        Self::DisplayRight,
        Self::DisplayLeft,
        Self::DisplayUp,
        Self::DisplayDown,
        Self::Forward,
        Self::Aft,
        Self::Port,
        Self::Starboard,
        Self::Clockwise,
        Self::CounterClockwise,
        Self::Towards,
        Self::AwayFrom,
        Self::Unspecified,
    ];

    /// Upper-case symbol of the direction, e.g. `SOUTH_EAST`.
    pub fn symbol(&self) -> &'static str {
        match self {
            Self::Other => "OTHER",
            Self::North => "NORTH",
            Self::NorthNorthEast => "NORTH_NORTH_EAST",
            Self::NorthEast => "NORTH_EAST",
            Self::EastNorthEast => "EAST_NORTH_EAST",
            Self::East => "EAST",
            Self::EastSouthEast => "EAST_SOUTH_EAST",
            Self::SouthEast => "SOUTH_EAST",
            Self::SouthSouthEast => "SOUTH_SOUTH_EAST",
            Self::South => "SOUTH",
            Self::SouthSouthWest => "SOUTH_SOUTH_WEST",
            Self::SouthWest => "SOUTH_WEST",
            Self::WestSouthWest => "WEST_SOUTH_WEST",
            Self::West => "WEST",
            Self::WestNorthWest => "WEST_NORTH_WEST",
            Self::NorthWest => "NORTH_WEST",
            Self::NorthNorthWest => "NORTH_NORTH_WEST",
            Self::Up => "UP",
            Self::Down => "DOWN",
            Self::GeocentricX => "GEOCENTRIC_X",
            Self::GeocentricY => "GEOCENTRIC_Y",
            Self::GeocentricZ => "GEOCENTRIC_Z",
            Self::Future => "FUTURE",
            Self::Past => "PAST",
            Self::ColumnPositive => "COLUMN_POSITIVE",
            Self::ColumnNegative => "COLUMN_NEGATIVE",
            Self::RowPositive => "ROW_POSITIVE",
            Self::RowNegative => "ROW_NEGATIVE",
            Self::DisplayRight => "DISPLAY_RIGHT",
            Self::DisplayLeft => "DISPLAY_LEFT",
            Self::DisplayUp => "DISPLAY_UP",
            Self::DisplayDown => "DISPLAY_DOWN",
            Self::Forward => "FORWARD",
            Self::Aft => "AFT",
            Self::Port => "PORT",
            Self::Starboard => "STARBOARD",
            Self::Clockwise => "CLOCKWISE",
            Self::CounterClockwise => "COUNTER_CLOCKWISE",
            Self::Towards => "TOWARDS",
            Self::AwayFrom => "AWAY_FROM",
            Self::Unspecified => "UNSPECIFIED",
        }
    }
}

impl Display for AxisDirection {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for AxisDirection {
    type Err = TheodoliteTypesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|direction| direction.symbol().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| TheodoliteTypesError::UnknownAxisDirection(s.to_string()))
    }
}
