use std::collections::HashSet;

use theodolite_types::ParameterDescriptor;

use crate::assertions::FieldAssertions;
use crate::error::ValidationError;
use crate::ValidatorContainer;

/// Validates parameter descriptors and descriptor groups.
#[derive(Debug, Clone, Copy, Default)]
pub struct ParameterValidator {
    assertions: FieldAssertions,
}

impl ParameterValidator {
    /// Creates a new validator.
    pub fn new(assertions: FieldAssertions) -> Self {
        Self { assertions }
    }

    /// Validates the descriptor. Children of a group are validated recursively and must have distinct names.
    pub fn validate(
        &self,
        container: &ValidatorContainer,
        descriptor: &dyn ParameterDescriptor,
    ) -> Result<(), ValidationError> {
        container.validate_identified_object(descriptor)?;

        let minimum = descriptor.minimum_occurs();
        let maximum = descriptor.maximum_occurs();
        self.assertions.ensure(minimum <= maximum, || {
            format!(
                "ParameterDescriptor: minimum occurrences {minimum} shall not exceed maximum occurrences {maximum}."
            )
        })?;

        let Some(children) = descriptor.descriptors() else {
            return Ok(());
        };

        let mut names = HashSet::new();
        for child in children {
            container.validate_parameter_descriptor(child)?;

            if let Some(code) = child.name().and_then(|name| name.code.as_deref()) {
                self.assertions.ensure(names.insert(code.to_lowercase()), || {
                    format!("ParameterDescriptorGroup: parameter name \"{code}\" is used more than once.")
                })?;
            }
        }

        Ok(())
    }
}
