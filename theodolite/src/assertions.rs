//! Mandatory and forbidden attribute checks used by every validator.

use std::collections::{BTreeSet, HashSet};

use log::warn;

use crate::config::ValidatorConfig;
use crate::error::ValidationError;

/// Value of an attribute that can be absent: `None` or an empty collection.
pub trait Presence {
    /// Returns true if the attribute has no value.
    fn is_absent(&self) -> bool;
}

impl<T> Presence for Option<T> {
    fn is_absent(&self) -> bool {
        self.is_none()
    }
}

impl<T> Presence for [T] {
    fn is_absent(&self) -> bool {
        self.is_empty()
    }
}

impl<T> Presence for Vec<T> {
    fn is_absent(&self) -> bool {
        self.is_empty()
    }
}

impl<T, S> Presence for HashSet<T, S> {
    fn is_absent(&self) -> bool {
        self.is_empty()
    }
}

impl<T> Presence for BTreeSet<T> {
    fn is_absent(&self) -> bool {
        self.is_empty()
    }
}

impl<T: Presence + ?Sized> Presence for &T {
    fn is_absent(&self) -> bool {
        (**self).is_absent()
    }
}

/// Attribute assertions. Whether a violated assertion fails the validation or is only logged depends on the
/// [`ValidatorConfig`].
#[derive(Debug, Clone, Copy, Default)]
pub struct FieldAssertions {
    config: ValidatorConfig,
}

impl FieldAssertions {
    /// Creates a new instance with the given strictness.
    pub fn new(config: ValidatorConfig) -> Self {
        Self { config }
    }

    /// Configuration of the assertions.
    pub fn config(&self) -> &ValidatorConfig {
        &self.config
    }

    /// Fails with the given message if the value is `None` or an empty collection.
    pub fn mandatory<T: Presence + ?Sized>(
        &self,
        message: &str,
        value: &T,
    ) -> Result<(), ValidationError> {
        if !value.is_absent() {
            return Ok(());
        }

        if self.config.require_mandatory_attributes {
            Err(ValidationError::MissingRequiredField(message.to_string()))
        } else {
            warn!("{message}");
            Ok(())
        }
    }

    /// Fails with the given message if the value is present and not an empty collection.
    pub fn forbidden<T: Presence + ?Sized>(
        &self,
        message: &str,
        value: &T,
    ) -> Result<(), ValidationError> {
        if value.is_absent() {
            return Ok(());
        }

        if self.config.enforce_forbidden_attributes {
            Err(ValidationError::UnexpectedField(message.to_string()))
        } else {
            warn!("{message}");
            Ok(())
        }
    }

    /// Fails with an [`InvalidValue`](ValidationError::InvalidValue) error if the condition does not hold.
    pub fn ensure(
        &self,
        condition: bool,
        message: impl FnOnce() -> String,
    ) -> Result<(), ValidationError> {
        if condition {
            Ok(())
        } else {
            Err(ValidationError::InvalidValue(message()))
        }
    }

    /// Validates every element of a collection attribute, in order.
    ///
    /// An empty collection is accepted unless `require_non_empty` is set.
    pub fn validate_all<T>(
        &self,
        property: &str,
        items: impl IntoIterator<Item = T>,
        require_non_empty: bool,
        mut validate: impl FnMut(T) -> Result<(), ValidationError>,
    ) -> Result<(), ValidationError> {
        let mut count = 0usize;
        for item in items {
            validate(item)?;
            count += 1;
        }

        if require_non_empty {
            self.mandatory(
                &format!("Collection of {property}s shall not be empty."),
                &(count > 0).then_some(()),
            )?;
        }

        Ok(())
    }
}
