//! Specialized validators, one per kind of referencing object.
//!
//! Validators are normally used through a [`ValidatorContainer`](crate::ValidatorContainer), which routes
//! nested objects (e.g. the coordinate system of a CRS) to the validator in charge of them.

mod crs;
mod cs;
mod datum;
mod metadata;
mod operation;
mod parameter;

pub use crs::{to_lower_case, CrsValidator};
pub use cs::CsValidator;
pub use datum::DatumValidator;
pub use metadata::MetadataValidator;
pub use operation::OperationValidator;
pub use parameter::ParameterValidator;
