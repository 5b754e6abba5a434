use theodolite_types::{Extent, GeographicBoundingBox, Identifier};

use crate::assertions::FieldAssertions;
use crate::error::ValidationError;

/// Validates the metadata values referenced by referencing objects: identifiers, extents and texts.
#[derive(Debug, Clone, Copy, Default)]
pub struct MetadataValidator {
    assertions: FieldAssertions,
}

impl MetadataValidator {
    /// Creates a new validator.
    pub fn new(assertions: FieldAssertions) -> Self {
        Self { assertions }
    }

    /// Checks that the identifier has a non-blank code.
    pub fn validate_identifier(&self, identifier: &Identifier) -> Result<(), ValidationError> {
        self.assertions
            .mandatory("Identifier: shall have a code.", &identifier.code)?;
        if let Some(code) = &identifier.code {
            self.validate_text("Identifier: code", code)?;
        }
        if let Some(code_space) = &identifier.code_space {
            self.validate_text("Identifier: code space", code_space)?;
        }

        Ok(())
    }

    /// Checks that the extent has a description or a valid geographic bounding box.
    pub fn validate_extent(&self, extent: &Extent) -> Result<(), ValidationError> {
        let has_element = extent.description.is_some() || extent.geographic_bounding_box.is_some();
        self.assertions.mandatory(
            "Extent: shall have a description or a geographic element.",
            &has_element.then_some(()),
        )?;

        if let Some(description) = &extent.description {
            self.validate_text("Extent: description", description)?;
        }
        if let Some(bbox) = &extent.geographic_bounding_box {
            self.validate_bounding_box(bbox)?;
        }

        Ok(())
    }

    /// Checks that the bounds are valid longitudes and latitudes, with the south bound not above the north one.
    ///
    /// The west bound may be greater than the east bound, for boxes spanning the anti-meridian.
    pub fn validate_bounding_box(
        &self,
        bbox: &GeographicBoundingBox,
    ) -> Result<(), ValidationError> {
        for (bound, value) in [("west", bbox.west), ("east", bbox.east)] {
            self.assertions.ensure((-180.0..=180.0).contains(&value), || {
                format!("GeographicBoundingBox: {bound} bound {value} is out of the [-180 … 180]° range.")
            })?;
        }
        for (bound, value) in [("south", bbox.south), ("north", bbox.north)] {
            self.assertions.ensure((-90.0..=90.0).contains(&value), || {
                format!("GeographicBoundingBox: {bound} bound {value} is out of the [-90 … 90]° range.")
            })?;
        }

        self.assertions.ensure(bbox.south <= bbox.north, || {
            format!(
                "GeographicBoundingBox: south bound {} is greater than north bound {}.",
                bbox.south, bbox.north
            )
        })
    }

    /// Checks that a text attribute is not blank.
    pub fn validate_text(&self, property: &str, text: &str) -> Result<(), ValidationError> {
        self.assertions
            .ensure(!text.trim().is_empty(), || format!("{property} shall not be blank."))
    }
}
