use approx::relative_eq;
use theodolite_types::{Datum, DatumKind, Ellipsoid, PrimeMeridian};

use crate::assertions::FieldAssertions;
use crate::error::ValidationError;
use crate::ValidatorContainer;

/// Validates datums, ellipsoids and prime meridians.
#[derive(Debug, Clone, Copy, Default)]
pub struct DatumValidator {
    assertions: FieldAssertions,
}

impl DatumValidator {
    /// Creates a new validator.
    pub fn new(assertions: FieldAssertions) -> Self {
        Self { assertions }
    }

    /// Validates the datum. Geodetic datums must have an ellipsoid and a prime meridian, other datums must not.
    pub fn validate(
        &self,
        container: &ValidatorContainer,
        datum: &dyn Datum,
    ) -> Result<(), ValidationError> {
        container.validate_identified_object(datum)?;

        if let Some(anchor) = datum.anchor_definition() {
            container
                .metadata()
                .validate_text("Datum: anchor definition", anchor)?;
        }

        let ellipsoid = datum.ellipsoid();
        let prime_meridian = datum.prime_meridian();
        if datum.datum_kind() != DatumKind::Geodetic {
            self.assertions
                .forbidden("Datum: only geodetic datums shall have an ellipsoid.", &ellipsoid)?;
            return self.assertions.forbidden(
                "Datum: only geodetic datums shall have a prime meridian.",
                &prime_meridian,
            );
        }

        self.assertions
            .mandatory("GeodeticDatum: shall have an ellipsoid.", &ellipsoid)?;
        self.assertions
            .mandatory("GeodeticDatum: shall have a prime meridian.", &prime_meridian)?;

        if let Some(ellipsoid) = ellipsoid {
            container.validate_ellipsoid(ellipsoid)?;
        }
        if let Some(prime_meridian) = prime_meridian {
            container.validate_prime_meridian(prime_meridian)?;
        }

        Ok(())
    }

    /// Validates the ellipsoid axes and checks that the inverse flattening is consistent with them.
    pub fn validate_ellipsoid(
        &self,
        container: &ValidatorContainer,
        ellipsoid: &dyn Ellipsoid,
    ) -> Result<(), ValidationError> {
        container.validate_identified_object(ellipsoid)?;
        self.assertions
            .mandatory("Ellipsoid: shall have an axis unit.", &ellipsoid.axis_unit())?;

        let a = ellipsoid.semi_major_axis();
        let b = ellipsoid.semi_minor_axis();
        let ivf = ellipsoid.inverse_flattening();

        self.assertions.ensure(a.is_finite() && a > 0.0, || {
            format!("Ellipsoid: semi-major axis shall be a positive number, found {a}.")
        })?;
        self.assertions.ensure(b.is_finite() && b > 0.0, || {
            format!("Ellipsoid: semi-minor axis shall be a positive number, found {b}.")
        })?;
        self.assertions.ensure(b <= a, || {
            format!("Ellipsoid: semi-minor axis {b} shall not be greater than semi-major axis {a}.")
        })?;

        if ellipsoid.is_sphere() {
            return self
                .assertions
                .ensure(ivf.is_infinite() && ivf > 0.0, || {
                    format!("Ellipsoid: inverse flattening of a sphere shall be infinite, found {ivf}.")
                });
        }

        self.assertions.ensure(ivf.is_finite() && ivf > 1.0, || {
            format!("Ellipsoid: inverse flattening shall be a finite number greater than 1, found {ivf}.")
        })?;

        let tolerance = self.assertions.config().ellipsoid_tolerance;
        if ellipsoid.is_ivf_definitive() {
            let expected = a * (1.0 - 1.0 / ivf);
            self.assertions
                .ensure(relative_eq!(b, expected, max_relative = tolerance), || {
                    format!(
                        "Ellipsoid: semi-minor axis {b} is inconsistent with inverse flattening {ivf}, expected {expected}."
                    )
                })
        } else {
            let expected = a / (a - b);
            self.assertions
                .ensure(relative_eq!(ivf, expected, max_relative = tolerance), || {
                    format!(
                        "Ellipsoid: inverse flattening {ivf} is inconsistent with semi-minor axis {b}, expected {expected}."
                    )
                })
        }
    }

    /// Validates the prime meridian longitude.
    pub fn validate_prime_meridian(
        &self,
        container: &ValidatorContainer,
        prime_meridian: &dyn PrimeMeridian,
    ) -> Result<(), ValidationError> {
        container.validate_identified_object(prime_meridian)?;
        self.assertions.mandatory(
            "PrimeMeridian: shall have an angular unit.",
            &prime_meridian.angular_unit(),
        )?;

        let longitude = prime_meridian.greenwich_longitude();
        self.assertions
            .ensure((-180.0..=180.0).contains(&longitude), || {
                format!(
                    "PrimeMeridian: Greenwich longitude {longitude} is out of the [-180 … 180]° range."
                )
            })
    }
}
