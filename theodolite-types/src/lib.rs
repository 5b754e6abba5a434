//! Model of the referencing objects that [`theodolite`](https://docs.rs/theodolite) validates.
//!
//! Objects under test are provided by third-party implementations, so most of the model is expressed as
//! traits. The root of every object is [`IdentifiedObject`](referencing::IdentifiedObject); the specialized
//! capabilities an object exposes (coordinate system, datum, operation etc) are listed by the closed set of
//! [`Role`](referencing::Role)s.

pub mod axis_direction;
pub mod error;
pub mod referencing;

pub use axis_direction::AxisDirection;
pub use referencing::*;
