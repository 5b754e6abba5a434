//! Configuration of the validators.

use serde::{Deserialize, Serialize};

/// Strictness settings shared by all validators of a [`ValidatorContainer`](crate::ValidatorContainer).
///
/// Missing keys take the default values when deserialized:
///
/// ```
/// use theodolite::ValidatorConfig;
///
/// let config: ValidatorConfig =
///     serde_json::from_str(r#"{ "require_mandatory_attributes": false }"#).unwrap();
/// assert!(!config.require_mandatory_attributes);
/// assert!(config.enforce_forbidden_attributes);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidatorConfig {
    /// If false, a missing mandatory attribute is logged as a warning instead of failing the validation.
    pub require_mandatory_attributes: bool,
    /// If false, a populated forbidden attribute is logged as a warning instead of failing the validation.
    pub enforce_forbidden_attributes: bool,
    /// Relative tolerance when comparing ellipsoid semi-axes with the inverse flattening.
    pub ellipsoid_tolerance: f64,
}

impl Default for ValidatorConfig {
    fn default() -> Self {
        Self {
            require_mandatory_attributes: true,
            enforce_forbidden_attributes: true,
            ellipsoid_tolerance: 1e-10,
        }
    }
}

impl ValidatorConfig {
    /// Configuration that reports attribute presence problems as warnings only.
    pub fn lenient() -> Self {
        Self {
            require_mandatory_attributes: false,
            enforce_forbidden_attributes: false,
            ..Default::default()
        }
    }
}
