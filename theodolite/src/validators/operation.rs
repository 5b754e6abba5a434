use theodolite_types::{CoordinateOperation, OperationKind, OperationMethod};

use crate::assertions::FieldAssertions;
use crate::error::ValidationError;
use crate::ValidatorContainer;

/// Validates coordinate operations and operation methods.
#[derive(Debug, Clone, Copy, Default)]
pub struct OperationValidator {
    assertions: FieldAssertions,
}

impl OperationValidator {
    /// Creates a new validator.
    pub fn new(assertions: FieldAssertions) -> Self {
        Self { assertions }
    }

    /// Validates the operation with the attributes required by its kind, then its method and CRSs.
    pub fn validate(
        &self,
        container: &ValidatorContainer,
        operation: &dyn CoordinateOperation,
    ) -> Result<(), ValidationError> {
        container.validate_identified_object(operation)?;

        let method = operation.method();
        let source = operation.source_crs();
        let target = operation.target_crs();
        let version = operation.operation_version();

        match operation.operation_kind() {
            OperationKind::Conversion => {
                self.assertions
                    .forbidden("Conversion: shall not have an operation version.", &version)?;
                self.assertions
                    .mandatory("Conversion: shall have a method.", &method)?;
            }
            OperationKind::Transformation => {
                self.assertions
                    .mandatory("Transformation: shall have a source CRS.", &source)?;
                self.assertions
                    .mandatory("Transformation: shall have a target CRS.", &target)?;
                self.assertions.mandatory(
                    "Transformation: shall have an operation version.",
                    &version,
                )?;
                self.assertions
                    .mandatory("Transformation: shall have a method.", &method)?;
            }
            OperationKind::Concatenated => {
                let steps = operation.steps();
                self.assertions.ensure(steps.len() >= 2, || {
                    format!(
                        "ConcatenatedOperation: shall have at least two steps, found {}.",
                        steps.len()
                    )
                })?;
                self.assertions.validate_all("step", steps, true, |step| {
                    container.validate_operation(step)
                })?;
            }
            OperationKind::PassThrough => {
                let steps = operation.steps();
                self.assertions.ensure(steps.len() == 1, || {
                    format!(
                        "PassThroughOperation: shall wrap exactly one operation, found {}.",
                        steps.len()
                    )
                })?;
                self.assertions.validate_all("step", steps, true, |step| {
                    container.validate_operation(step)
                })?;
            }
        }

        if let Some(version) = version {
            container
                .metadata()
                .validate_text("CoordinateOperation: operation version", version)?;
        }
        if let Some(method) = method {
            container.validate_operation_method(method)?;
        }
        if let Some(source) = source {
            container.validate_crs(source)?;
        }
        if let Some(target) = target {
            container.validate_crs(target)?;
        }

        Ok(())
    }

    /// Validates the method formula and parameter descriptors.
    pub fn validate_method(
        &self,
        container: &ValidatorContainer,
        method: &dyn OperationMethod,
    ) -> Result<(), ValidationError> {
        container.validate_identified_object(method)?;

        let formula = method.formula();
        self.assertions
            .mandatory("OperationMethod: shall have a formula.", &formula)?;
        if let Some(formula) = formula {
            container
                .metadata()
                .validate_text("OperationMethod: formula", formula)?;
        }

        if let Some(parameters) = method.parameters() {
            container.validate_parameter_descriptor(parameters)?;
        }

        Ok(())
    }
}
