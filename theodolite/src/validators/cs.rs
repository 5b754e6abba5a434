use std::ops::RangeInclusive;

use theodolite_types::{CoordinateSystem, CoordinateSystemAxis, CsKind};

use crate::assertions::FieldAssertions;
use crate::error::ValidationError;
use crate::perpendicular::assert_perpendicular_axes;
use crate::ValidatorContainer;

/// Validates coordinate systems and their axes.
#[derive(Debug, Clone, Copy, Default)]
pub struct CsValidator {
    assertions: FieldAssertions,
}

impl CsValidator {
    /// Creates a new validator.
    pub fn new(assertions: FieldAssertions) -> Self {
        Self { assertions }
    }

    /// Validates the coordinate system and all of its axes.
    ///
    /// The number of axes must fit the kind of the coordinate system, and the axes of cartesian and ellipsoidal
    /// systems must be perpendicular (see [`assert_perpendicular_axes`]).
    pub fn validate(
        &self,
        container: &ValidatorContainer,
        cs: &dyn CoordinateSystem,
    ) -> Result<(), ValidationError> {
        container.validate_identified_object(cs)?;

        let kind = cs.cs_kind();
        let dimension = cs.dimension();
        let allowed = kind.dimension_range();
        self.assertions.ensure(allowed.contains(&dimension), || {
            format!(
                "CoordinateSystem: {kind:?} coordinate system shall have {}, found {dimension}.",
                describe_range(&allowed)
            )
        })?;

        let mut directions = Vec::with_capacity(dimension);
        for (index, axis) in cs.axes().enumerate() {
            self.assertions.mandatory(
                &format!("CoordinateSystem: axis {index} shall not be missing."),
                &axis,
            )?;

            if let Some(axis) = axis {
                container.validate_axis(axis)?;
                directions.extend(axis.direction());
            }
        }

        if matches!(kind, CsKind::Cartesian | CsKind::Ellipsoidal) {
            assert_perpendicular_axes(&directions)?;
        }

        Ok(())
    }

    /// Validates a coordinate system axis.
    pub fn validate_axis(
        &self,
        container: &ValidatorContainer,
        axis: &dyn CoordinateSystemAxis,
    ) -> Result<(), ValidationError> {
        container.validate_identified_object(axis)?;

        self.assertions.mandatory(
            "CoordinateSystemAxis: shall have an abbreviation.",
            &axis.abbreviation(),
        )?;
        self.assertions
            .mandatory("CoordinateSystemAxis: shall have a direction.", &axis.direction())?;
        self.assertions
            .mandatory("CoordinateSystemAxis: shall have a unit.", &axis.unit())?;

        let minimum = axis.minimum_value();
        let maximum = axis.maximum_value();
        self.assertions.ensure(minimum < maximum, || {
            format!(
                "CoordinateSystemAxis: minimum value {minimum} shall be less than maximum value {maximum}."
            )
        })?;

        if minimum.is_finite() || maximum.is_finite() {
            self.assertions.mandatory(
                "CoordinateSystemAxis: shall have a range meaning when the range is bounded.",
                &axis.range_meaning(),
            )?;
        }

        Ok(())
    }
}

fn describe_range(range: &RangeInclusive<usize>) -> String {
    match (*range.start(), *range.end()) {
        (1, 1) => "1 dimension".to_string(),
        (start, end) if start == end => format!("{start} dimensions"),
        (1, usize::MAX) => "at least 1 dimension".to_string(),
        (start, usize::MAX) => format!("at least {start} dimensions"),
        (start, end) => format!("{start} to {end} dimensions"),
    }
}
