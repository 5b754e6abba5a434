//! Capability traits of referencing objects and the plain values they reference.

mod crs;
mod cs;
mod datum;
mod identified;
mod metadata;
mod operation;
mod parameter;
mod role;

pub use crs::{CoordinateReferenceSystem, CrsKind};
pub use cs::{CoordinateSystem, CoordinateSystemAxis, CsKind, RangeMeaning};
pub use datum::{Datum, DatumKind, Ellipsoid, PrimeMeridian};
pub use identified::IdentifiedObject;
pub use metadata::{Extent, GeographicBoundingBox, Identifier, ObjectDomain};
pub use operation::{CoordinateOperation, OperationKind, OperationMethod};
pub use parameter::ParameterDescriptor;
pub use role::Role;
