use super::{
    CoordinateOperation, CoordinateReferenceSystem, CoordinateSystem, CoordinateSystemAxis, Datum,
    Ellipsoid, Identifier, ObjectDomain, OperationMethod, ParameterDescriptor, PrimeMeridian, Role,
};

/// Identification and remarks shared by every referencing object.
///
/// The `as_*` methods are the capability queries: an implementation returns `Some(self)` from every method
/// matching a [`Role`] its type plays. The defaults report that no specialized role is played.
pub trait IdentifiedObject {
    /// The primary name by which this object is identified.
    fn name(&self) -> Option<&Identifier>;

    /// Identifiers which reference elsewhere the object's defining information.
    fn identifiers(&self) -> &[Identifier] {
        &[]
    }

    /// Alternative names by which this object is identified.
    fn alias(&self) -> &[String] {
        &[]
    }

    /// Scopes and domains of validity of this object.
    fn domains(&self) -> &[ObjectDomain] {
        &[]
    }

    /// Comments on or information about this object.
    fn remarks(&self) -> Option<&str> {
        None
    }

    /// Capability query for [`Role::CoordinateReferenceSystem`].
    fn as_crs(&self) -> Option<&dyn CoordinateReferenceSystem> {
        None
    }

    /// Capability query for [`Role::CoordinateSystem`].
    fn as_cs(&self) -> Option<&dyn CoordinateSystem> {
        None
    }

    /// Capability query for [`Role::CoordinateSystemAxis`].
    fn as_axis(&self) -> Option<&dyn CoordinateSystemAxis> {
        None
    }

    /// Capability query for [`Role::Datum`].
    fn as_datum(&self) -> Option<&dyn Datum> {
        None
    }

    /// Capability query for [`Role::Ellipsoid`].
    fn as_ellipsoid(&self) -> Option<&dyn Ellipsoid> {
        None
    }

    /// Capability query for [`Role::PrimeMeridian`].
    fn as_prime_meridian(&self) -> Option<&dyn PrimeMeridian> {
        None
    }

    /// Capability query for [`Role::ParameterDescriptor`].
    fn as_parameter_descriptor(&self) -> Option<&dyn ParameterDescriptor> {
        None
    }

    /// Capability query for [`Role::CoordinateOperation`].
    fn as_operation(&self) -> Option<&dyn CoordinateOperation> {
        None
    }

    /// Capability query for [`Role::OperationMethod`].
    fn as_operation_method(&self) -> Option<&dyn OperationMethod> {
        None
    }

    /// Returns true if the object plays the given role.
    fn plays(&self, role: Role) -> bool {
        match role {
            Role::CoordinateReferenceSystem => self.as_crs().is_some(),
            Role::CoordinateSystem => self.as_cs().is_some(),
            Role::CoordinateSystemAxis => self.as_axis().is_some(),
            Role::Datum => self.as_datum().is_some(),
            Role::Ellipsoid => self.as_ellipsoid().is_some(),
            Role::PrimeMeridian => self.as_prime_meridian().is_some(),
            Role::ParameterDescriptor => self.as_parameter_descriptor().is_some(),
            Role::CoordinateOperation => self.as_operation().is_some(),
            Role::OperationMethod => self.as_operation_method().is_some(),
        }
    }
}
