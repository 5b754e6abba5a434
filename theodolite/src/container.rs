use log::debug;
use theodolite_types::{
    CoordinateOperation, CoordinateReferenceSystem, CoordinateSystem, CoordinateSystemAxis, Datum,
    Ellipsoid, Extent, IdentifiedObject, Identifier, ObjectDomain, OperationMethod,
    ParameterDescriptor, PrimeMeridian, Role,
};

use crate::assertions::FieldAssertions;
use crate::config::ValidatorConfig;
use crate::error::ValidationError;
use crate::validators::{
    CrsValidator, CsValidator, DatumValidator, MetadataValidator, OperationValidator,
    ParameterValidator,
};

/// Result of [`ValidatorContainer::dispatch_object`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Dispatch {
    /// No object was given, nothing was checked.
    Skipped,
    /// The object plays no specialized role, only the identified object checks were run.
    Generic,
    /// The object was validated once for each of these roles, in this order.
    Specialized(Vec<Role>),
}

/// Set of validators, one for each kind of referencing object.
///
/// Validators validate nested objects through the container, so a whole object graph is checked with one
/// call. The container is immutable and can be shared between threads.
#[derive(Debug, Clone, Default)]
pub struct ValidatorContainer {
    assertions: FieldAssertions,
    crs: CrsValidator,
    cs: CsValidator,
    datum: DatumValidator,
    metadata: MetadataValidator,
    operation: OperationValidator,
    parameter: ParameterValidator,
}

impl ValidatorContainer {
    /// Creates a new container with the given strictness.
    pub fn new(config: ValidatorConfig) -> Self {
        let assertions = FieldAssertions::new(config);
        Self {
            assertions,
            crs: CrsValidator::new(assertions),
            cs: CsValidator::new(assertions),
            datum: DatumValidator::new(assertions),
            metadata: MetadataValidator::new(assertions),
            operation: OperationValidator::new(assertions),
            parameter: ParameterValidator::new(assertions),
        }
    }

    /// Configuration of the validators.
    pub fn config(&self) -> &ValidatorConfig {
        self.assertions.config()
    }

    /// Attribute assertions shared by the validators.
    pub fn assertions(&self) -> &FieldAssertions {
        &self.assertions
    }

    /// Validator of identifiers, extents and texts.
    pub fn metadata(&self) -> &MetadataValidator {
        &self.metadata
    }

    /// Validates the object once for every role it plays.
    ///
    /// If the object plays no specialized role, only the checks common to all identified objects are run.
    /// `None` is accepted and checks nothing. The first failure aborts the dispatch.
    pub fn dispatch_object(
        &self,
        object: Option<&dyn IdentifiedObject>,
    ) -> Result<Dispatch, ValidationError> {
        let Some(object) = object else {
            return Ok(Dispatch::Skipped);
        };

        let mut roles = Vec::new();
        for role in Role::ALL {
            let result = match role {
                Role::CoordinateReferenceSystem => object.as_crs().map(|v| self.validate_crs(v)),
                Role::CoordinateSystem => object.as_cs().map(|v| self.validate_cs(v)),
                Role::CoordinateSystemAxis => object.as_axis().map(|v| self.validate_axis(v)),
                Role::Datum => object.as_datum().map(|v| self.validate_datum(v)),
                Role::Ellipsoid => object.as_ellipsoid().map(|v| self.validate_ellipsoid(v)),
                Role::PrimeMeridian => object
                    .as_prime_meridian()
                    .map(|v| self.validate_prime_meridian(v)),
                Role::ParameterDescriptor => object
                    .as_parameter_descriptor()
                    .map(|v| self.validate_parameter_descriptor(v)),
                Role::CoordinateOperation => {
                    object.as_operation().map(|v| self.validate_operation(v))
                }
                Role::OperationMethod => object
                    .as_operation_method()
                    .map(|v| self.validate_operation_method(v)),
            };

            if let Some(result) = result {
                result?;
                roles.push(role);
            }
        }

        if roles.is_empty() {
            debug!(
                "Object {} plays no specialized role, running identified object checks",
                display_name(object)
            );
            self.validate_identified_object(object)?;
            Ok(Dispatch::Generic)
        } else {
            debug!("Object {} validated as {roles:?}", display_name(object));
            Ok(Dispatch::Specialized(roles))
        }
    }

    /// Runs the checks common to all identified objects: the name is mandatory, and the name, identifiers,
    /// aliases, domains and remarks must be valid when present.
    pub fn validate_identified_object<T: IdentifiedObject + ?Sized>(
        &self,
        object: &T,
    ) -> Result<(), ValidationError> {
        let name = object.name();
        self.assertions
            .mandatory("IdentifiedObject: shall have a name.", &name)?;
        if let Some(name) = name {
            self.metadata.validate_identifier(name)?;
        }

        self.assertions
            .validate_all("identifier", object.identifiers(), false, |identifier| {
                self.metadata.validate_identifier(identifier)
            })?;
        self.assertions
            .validate_all("alias", object.alias(), false, |alias| {
                self.metadata.validate_text("IdentifiedObject: alias", alias)
            })?;
        self.assertions
            .validate_all("domain", object.domains(), false, |domain| {
                self.validate_object_domain(domain)
            })?;

        if let Some(remarks) = object.remarks() {
            self.metadata
                .validate_text("IdentifiedObject: remarks", remarks)?;
        }

        Ok(())
    }

    /// Checks that the domain has a scope and a domain of validity, and validates both.
    pub fn validate_object_domain(&self, domain: &ObjectDomain) -> Result<(), ValidationError> {
        self.assertions
            .mandatory("ObjectDomain: shall have a scope.", &domain.scope)?;
        self.assertions.mandatory(
            "ObjectDomain: shall have a domain of validity.",
            &domain.domain_of_validity,
        )?;

        if let Some(scope) = &domain.scope {
            self.metadata.validate_text("ObjectDomain: scope", scope)?;
        }
        if let Some(extent) = &domain.domain_of_validity {
            self.metadata.validate_extent(extent)?;
        }

        Ok(())
    }

    /// See [`CrsValidator::validate`].
    pub fn validate_crs(&self, crs: &dyn CoordinateReferenceSystem) -> Result<(), ValidationError> {
        self.crs.validate(self, crs)
    }

    /// See [`CsValidator::validate`].
    pub fn validate_cs(&self, cs: &dyn CoordinateSystem) -> Result<(), ValidationError> {
        self.cs.validate(self, cs)
    }

    /// See [`CsValidator::validate_axis`].
    pub fn validate_axis(&self, axis: &dyn CoordinateSystemAxis) -> Result<(), ValidationError> {
        self.cs.validate_axis(self, axis)
    }

    /// See [`DatumValidator::validate`].
    pub fn validate_datum(&self, datum: &dyn Datum) -> Result<(), ValidationError> {
        self.datum.validate(self, datum)
    }

    /// See [`DatumValidator::validate_ellipsoid`].
    pub fn validate_ellipsoid(&self, ellipsoid: &dyn Ellipsoid) -> Result<(), ValidationError> {
        self.datum.validate_ellipsoid(self, ellipsoid)
    }

    /// See [`DatumValidator::validate_prime_meridian`].
    pub fn validate_prime_meridian(
        &self,
        prime_meridian: &dyn PrimeMeridian,
    ) -> Result<(), ValidationError> {
        self.datum.validate_prime_meridian(self, prime_meridian)
    }

    /// See [`ParameterValidator::validate`].
    pub fn validate_parameter_descriptor(
        &self,
        descriptor: &dyn ParameterDescriptor,
    ) -> Result<(), ValidationError> {
        self.parameter.validate(self, descriptor)
    }

    /// See [`OperationValidator::validate`].
    pub fn validate_operation(
        &self,
        operation: &dyn CoordinateOperation,
    ) -> Result<(), ValidationError> {
        self.operation.validate(self, operation)
    }

    /// See [`OperationValidator::validate_method`].
    pub fn validate_operation_method(
        &self,
        method: &dyn OperationMethod,
    ) -> Result<(), ValidationError> {
        self.operation.validate_method(self, method)
    }

    /// See [`MetadataValidator::validate_identifier`].
    pub fn validate_identifier(&self, identifier: &Identifier) -> Result<(), ValidationError> {
        self.metadata.validate_identifier(identifier)
    }

    /// See [`MetadataValidator::validate_extent`].
    pub fn validate_extent(&self, extent: &Extent) -> Result<(), ValidationError> {
        self.metadata.validate_extent(extent)
    }
}

fn display_name<T: IdentifiedObject + ?Sized>(object: &T) -> &str {
    object
        .name()
        .and_then(|name| name.code.as_deref())
        .unwrap_or("<unnamed>")
}
