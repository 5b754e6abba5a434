use theodolite_types::{
    AxisDirection, CoordinateReferenceSystem, CoordinateSystem, CrsKind, DatumKind,
};

use crate::assertions::FieldAssertions;
use crate::error::ValidationError;
use crate::ValidatorContainer;

/// Well known axis names of geographic and geocentric systems, with the directions they can take.
const KNOWN_AXIS_NAMES: [(&str, &[AxisDirection]); 6] = [
    (
        "geodetic latitude",
        &[AxisDirection::North, AxisDirection::South],
    ),
    (
        "geodetic longitude",
        &[AxisDirection::East, AxisDirection::West],
    ),
    ("ellipsoidal height", &[AxisDirection::Up, AxisDirection::Down]),
    ("geocentric X", &[AxisDirection::GeocentricX]),
    ("geocentric Y", &[AxisDirection::GeocentricY]),
    ("geocentric Z", &[AxisDirection::GeocentricZ]),
];

/// Validates coordinate reference systems.
#[derive(Debug, Clone, Copy, Default)]
pub struct CrsValidator {
    assertions: FieldAssertions,
}

impl CrsValidator {
    /// Creates a new validator.
    pub fn new(assertions: FieldAssertions) -> Self {
        Self { assertions }
    }

    /// Validates the CRS together with its coordinate system and datum, or with its components for a
    /// compound CRS.
    pub fn validate(
        &self,
        container: &ValidatorContainer,
        crs: &dyn CoordinateReferenceSystem,
    ) -> Result<(), ValidationError> {
        container.validate_identified_object(crs)?;

        let kind = crs.crs_kind();
        if kind == CrsKind::Compound {
            return self.validate_compound(container, crs);
        }

        let cs = crs.coordinate_system();
        self.assertions.mandatory(
            "CoordinateReferenceSystem: shall have a coordinate system.",
            &cs,
        )?;
        let datum = crs.datum();
        self.assertions
            .mandatory("CoordinateReferenceSystem: shall have a datum.", &datum)?;

        if let Some(cs) = cs {
            container.validate_cs(cs)?;

            if let Some(expected) = kind.expected_cs_kinds() {
                let actual = cs.cs_kind();
                self.assertions.ensure(expected.contains(&actual), || {
                    format!(
                        "{kind:?}CRS: coordinate system shall be one of {expected:?}, found {actual:?}."
                    )
                })?;
            }

            if matches!(kind, CrsKind::Geographic | CrsKind::Geocentric) {
                self.validate_axis_names(kind, cs)?;
            }
        }

        if let Some(datum) = datum {
            container.validate_datum(datum)?;

            if let Some(expected) = expected_datum_kind(kind) {
                let actual = datum.datum_kind();
                self.assertions.ensure(actual == expected, || {
                    format!("{kind:?}CRS: datum shall be {expected:?}, found {actual:?}.")
                })?;
            }
        }

        Ok(())
    }

    fn validate_compound(
        &self,
        container: &ValidatorContainer,
        crs: &dyn CoordinateReferenceSystem,
    ) -> Result<(), ValidationError> {
        let components = crs.components();
        self.assertions.ensure(components.len() >= 2, || {
            format!(
                "CompoundCRS: shall have at least two components, found {}.",
                components.len()
            )
        })?;

        for component in components {
            container.validate_crs(component)?;
        }

        if let Some(cs) = crs.coordinate_system() {
            container.validate_cs(cs)?;
        }

        Ok(())
    }

    fn validate_axis_names(
        &self,
        kind: CrsKind,
        cs: &dyn CoordinateSystem,
    ) -> Result<(), ValidationError> {
        for axis in cs.axes().flatten() {
            let (Some(name), Some(direction)) = (
                axis.name().and_then(|name| name.code.as_deref()),
                axis.direction(),
            ) else {
                continue;
            };

            let name = to_lower_case(name);
            let Some((_, allowed)) = KNOWN_AXIS_NAMES
                .iter()
                .find(|(known, _)| *known == name)
            else {
                continue;
            };

            self.assertions.ensure(allowed.contains(&direction), || {
                format!("{kind:?}CRS: axis named \"{name}\" shall not have direction {direction}.")
            })?;
        }

        Ok(())
    }
}

fn expected_datum_kind(kind: CrsKind) -> Option<DatumKind> {
    match kind {
        CrsKind::Geographic | CrsKind::Geocentric | CrsKind::Projected => Some(DatumKind::Geodetic),
        CrsKind::Vertical => Some(DatumKind::Vertical),
        CrsKind::Temporal => Some(DatumKind::Temporal),
        CrsKind::Parametric => Some(DatumKind::Parametric),
        CrsKind::Engineering | CrsKind::Image | CrsKind::Derived | CrsKind::Compound => None,
    }
}

/// Converts the first letter of each word to lower case, unless the word looks like an acronym or a symbol.
///
/// `"Geodetic latitude"` becomes `"geodetic latitude"` but `"Geocentric X"` becomes `"geocentric X"`.
pub fn to_lower_case(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();
    let mut at_word_start = true;

    while let Some(c) = chars.next() {
        match chars.peek() {
            Some(next) if at_word_start && !next.is_whitespace() && !next.is_uppercase() => {
                result.extend(c.to_lowercase())
            }
            _ => result.push(c),
        }
        at_word_start = c.is_whitespace();
    }

    result
}
