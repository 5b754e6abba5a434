use super::IdentifiedObject;

/// Definition of a parameter or of a group of parameters.
pub trait ParameterDescriptor: IdentifiedObject {
    /// Minimum number of times the parameter is required.
    fn minimum_occurs(&self) -> u32 {
        1
    }

    /// Maximum number of times the parameter can be included.
    fn maximum_occurs(&self) -> u32 {
        1
    }

    /// Children of a parameter group. `None` for a single value descriptor.
    fn descriptors(&self) -> Option<Vec<&dyn ParameterDescriptor>> {
        None
    }
}
