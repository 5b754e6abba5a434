use serde::{Deserialize, Serialize};

/// Value uniquely identifying an object within a namespace.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub struct Identifier {
    /// Alphanumeric value identifying an instance in the namespace.
    pub code: Option<String>,
    /// Identifier or namespace in which the code is valid, e.g. `EPSG`.
    pub code_space: Option<String>,
    /// Version identifier for the namespace.
    pub version: Option<String>,
    /// Natural language description of the meaning of the code value.
    pub description: Option<String>,
}

impl Identifier {
    /// Creates an identifier with only a code.
    pub fn new(code: impl Into<String>) -> Self {
        Self {
            code: Some(code.into()),
            ..Default::default()
        }
    }

    /// Sets the namespace of the code.
    pub fn with_code_space(mut self, code_space: impl Into<String>) -> Self {
        self.code_space = Some(code_space.into());
        self
    }

    /// Sets the version of the namespace.
    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }
}

/// Scope and domain of validity of a referencing object.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct ObjectDomain {
    /// Description of usage, or limitations of usage, for which the object is valid.
    pub scope: Option<String>,
    /// Area or region or timeframe in which the object is valid.
    pub domain_of_validity: Option<Extent>,
}

impl ObjectDomain {
    /// Creates a new domain.
    pub fn new(scope: impl Into<String>, domain_of_validity: Extent) -> Self {
        Self {
            scope: Some(scope.into()),
            domain_of_validity: Some(domain_of_validity),
        }
    }
}

/// Extent of an object: a description, a geographic area or both.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Extent {
    /// Spatial and temporal extent of the referring object.
    pub description: Option<String>,
    /// Geographic area covered by the object.
    pub geographic_bounding_box: Option<GeographicBoundingBox>,
}

impl Extent {
    /// Creates an extent with only a description.
    pub fn described(description: impl Into<String>) -> Self {
        Self {
            description: Some(description.into()),
            geographic_bounding_box: None,
        }
    }

    /// Creates an extent with only a bounding box.
    pub fn bounded(bbox: GeographicBoundingBox) -> Self {
        Self {
            description: None,
            geographic_bounding_box: Some(bbox),
        }
    }
}

/// Geographic area given by its bounding longitudes and latitudes, in degrees.
///
/// The west bound may be greater than the east bound for boxes spanning the anti-meridian.
#[derive(Debug, Clone, Copy, Default, PartialEq, Deserialize, Serialize)]
pub struct GeographicBoundingBox {
    /// Western-most longitude.
    pub west: f64,
    /// Eastern-most longitude.
    pub east: f64,
    /// Southern-most latitude.
    pub south: f64,
    /// Northern-most latitude.
    pub north: f64,
}

impl GeographicBoundingBox {
    /// Creates a new bounding box.
    pub fn new(west: f64, east: f64, south: f64, north: f64) -> Self {
        Self {
            west,
            east,
            south,
            north,
        }
    }

    /// The whole world.
    pub const WORLD: Self = Self {
        west: -180.0,
        east: 180.0,
        south: -90.0,
        north: 90.0,
    };
}
