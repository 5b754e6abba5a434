//! Check that the axes of a coordinate system are perpendicular to each other (see [`assert_perpendicular_axes`]).

use theodolite_types::AxisDirection;

use crate::error::ValidationError;
use crate::orientation::{lookup, DEGREES_PER_STEP, FULL_TURN};

const RIGHT_ANGLE: u8 = FULL_TURN / 4;

/// Checks that the axis directions of one coordinate system are pairwise compatible.
///
/// Directions of different [categories](crate::orientation::Category) are always compatible. Each direction
/// is paired with the first following direction of the same category that is not paired yet, and the two
/// must be separated by a multiple of 90°. A paired direction is not compared with any other one, so a
/// valid pairing can hide an inconsistency with a later direction.
///
/// The input is only read.
///
/// ```
/// use theodolite::perpendicular::assert_perpendicular_axes;
/// use theodolite::theodolite_types::AxisDirection;
///
/// assert!(assert_perpendicular_axes(&[AxisDirection::North, AxisDirection::East]).is_ok());
/// assert!(assert_perpendicular_axes(&[AxisDirection::North, AxisDirection::SouthEast]).is_err());
/// ```
pub fn assert_perpendicular_axes(directions: &[AxisDirection]) -> Result<(), ValidationError> {
    let orientations = directions
        .iter()
        .map(|direction| lookup(*direction))
        .collect::<Result<Vec<_>, _>>()?;
    let mut consumed = vec![false; directions.len()];

    for index in 0..directions.len() {
        if consumed[index] {
            continue;
        }
        consumed[index] = true;

        let orientation = &orientations[index];
        let partner = (index + 1..directions.len()).find_map(|other| {
            if consumed[other] {
                return None;
            }

            orientation
                .separation(&orientations[other])
                .map(|separation| (other, separation))
        });

        let Some((other, separation)) = partner else {
            continue;
        };

        if separation % RIGHT_ANGLE != 0 {
            return Err(ValidationError::InconsistentGeometry {
                first: directions[index],
                second: directions[other],
                angle: separation as f64 * DEGREES_PER_STEP,
            });
        }

        consumed[other] = true;
    }

    Ok(())
}
