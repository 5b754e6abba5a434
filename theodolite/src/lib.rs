//! Theodolite checks that referencing objects (coordinate reference systems, coordinate systems, axes,
//! datums, operations etc) provided by a third-party implementation respect the structural invariants of the
//! object model: mandatory attributes are present, forbidden ones are absent, and the axes of a coordinate
//! system are mutually consistent.
//!
//! # Quick start
//!
//! Any type implementing [`IdentifiedObject`](theodolite_types::IdentifiedObject) can be validated. The
//! object is routed to the validator of every [`Role`](theodolite_types::Role) it plays:
//!
//! ```
//! use theodolite::theodolite_types::{IdentifiedObject, Identifier};
//! use theodolite::Dispatch;
//!
//! struct Unit {
//!     name: Identifier,
//! }
//!
//! impl IdentifiedObject for Unit {
//!     fn name(&self) -> Option<&Identifier> {
//!         Some(&self.name)
//!     }
//! }
//!
//! let unit = Unit { name: Identifier::new("metre") };
//! assert_eq!(theodolite::validate(Some(&unit)), Ok(Dispatch::Generic));
//! ```
//!
//! # Main components
//!
//! * [`ValidatorContainer`] holds one validator per kind of object and dispatches objects to them. Its
//!   strictness is set with [`ValidatorConfig`].
//! * [`orientation`] classifies axis directions by category and angle, and [`perpendicular`] uses it to check
//!   that the axes of a coordinate system are perpendicular.
//! * [`assertions`] provides the mandatory and forbidden attribute checks every validator is built on.
//!
//! Every check returns a [`ValidationError`] on the first failure found.

#![warn(clippy::unwrap_used)]
#![warn(missing_docs)]

pub mod assertions;
pub mod config;
mod container;
pub mod error;
pub mod orientation;
pub mod perpendicular;
pub mod validators;

#[cfg(test)]
mod tests;

use lazy_static::lazy_static;
use theodolite_types::IdentifiedObject;

pub use config::ValidatorConfig;
pub use container::{Dispatch, ValidatorContainer};
pub use error::ValidationError;
pub use perpendicular::assert_perpendicular_axes;

// Reexport theodolite_types
pub use theodolite_types;

lazy_static! {
    static ref DEFAULT_CONTAINER: ValidatorContainer = ValidatorContainer::default();
}

/// Container with the default configuration, shared by the whole process.
pub fn default_container() -> &'static ValidatorContainer {
    &DEFAULT_CONTAINER
}

/// Validates the object with the [default container](default_container).
///
/// See [`ValidatorContainer::dispatch_object`].
pub fn validate(object: Option<&dyn IdentifiedObject>) -> Result<Dispatch, ValidationError> {
    DEFAULT_CONTAINER.dispatch_object(object)
}
