use theodolite_types::{
    AxisDirection, CoordinateOperation, CoordinateReferenceSystem, CoordinateSystem,
    CoordinateSystemAxis, CrsKind, CsKind, Datum, DatumKind, Ellipsoid, Extent,
    GeographicBoundingBox, IdentifiedObject, Identifier, ObjectDomain, OperationKind,
    OperationMethod, ParameterDescriptor, PrimeMeridian, RangeMeaning, Role,
};

/// Referencing object that can play any role. Only the attributes of the played roles matter.
#[derive(Debug, Clone)]
pub struct TestObject {
    pub roles: Vec<Role>,
    pub name: Option<Identifier>,
    pub identifiers: Vec<Identifier>,
    pub alias: Vec<String>,
    pub domains: Vec<ObjectDomain>,
    pub remarks: Option<String>,

    pub crs_kind: CrsKind,
    pub coordinate_system: Option<Box<TestObject>>,
    pub datum: Option<Box<TestObject>>,
    pub components: Vec<TestObject>,

    pub cs_kind: CsKind,
    pub axes: Vec<Option<TestObject>>,

    pub abbreviation: Option<String>,
    pub direction: Option<AxisDirection>,
    pub unit: Option<String>,
    pub minimum_value: f64,
    pub maximum_value: f64,
    pub range_meaning: Option<RangeMeaning>,

    pub datum_kind: DatumKind,
    pub ellipsoid: Option<Box<TestObject>>,
    pub prime_meridian: Option<Box<TestObject>>,

    pub semi_major_axis: f64,
    pub semi_minor_axis: f64,
    pub inverse_flattening: f64,
    pub ivf_definitive: bool,

    pub greenwich_longitude: f64,

    pub minimum_occurs: u32,
    pub maximum_occurs: u32,
    pub descriptors: Option<Vec<TestObject>>,

    pub operation_kind: OperationKind,
    pub source_crs: Option<Box<TestObject>>,
    pub target_crs: Option<Box<TestObject>>,
    pub operation_version: Option<String>,
    pub method: Option<Box<TestObject>>,
    pub steps: Vec<TestObject>,

    pub formula: Option<String>,
    pub parameters: Option<Box<TestObject>>,
}

impl TestObject {
    pub fn named(name: &str) -> Self {
        Self {
            roles: Vec::new(),
            name: Some(Identifier::new(name)),
            identifiers: Vec::new(),
            alias: Vec::new(),
            domains: Vec::new(),
            remarks: None,
            crs_kind: CrsKind::Engineering,
            coordinate_system: None,
            datum: None,
            components: Vec::new(),
            cs_kind: CsKind::Other,
            axes: Vec::new(),
            abbreviation: None,
            direction: None,
            unit: None,
            minimum_value: f64::NEG_INFINITY,
            maximum_value: f64::INFINITY,
            range_meaning: None,
            datum_kind: DatumKind::Engineering,
            ellipsoid: None,
            prime_meridian: None,
            semi_major_axis: f64::NAN,
            semi_minor_axis: f64::NAN,
            inverse_flattening: f64::NAN,
            ivf_definitive: false,
            greenwich_longitude: 0.0,
            minimum_occurs: 1,
            maximum_occurs: 1,
            descriptors: None,
            operation_kind: OperationKind::Conversion,
            source_crs: None,
            target_crs: None,
            operation_version: None,
            method: None,
            steps: Vec::new(),
            formula: None,
            parameters: None,
        }
    }

    pub fn with_roles(mut self, roles: &[Role]) -> Self {
        self.roles = roles.to_vec();
        self
    }

    fn plays_role(&self, role: Role) -> bool {
        self.roles.contains(&role)
    }
}

pub fn axis(name: &str, abbreviation: &str, direction: AxisDirection, unit: &str) -> TestObject {
    let mut axis = TestObject::named(name).with_roles(&[Role::CoordinateSystemAxis]);
    axis.abbreviation = Some(abbreviation.to_string());
    axis.direction = Some(direction);
    axis.unit = Some(unit.to_string());
    axis
}

pub fn latitude_axis() -> TestObject {
    let mut axis = axis("Geodetic latitude", "φ", AxisDirection::North, "degree");
    axis.minimum_value = -90.0;
    axis.maximum_value = 90.0;
    axis.range_meaning = Some(RangeMeaning::Exact);
    axis
}

pub fn longitude_axis() -> TestObject {
    let mut axis = axis("Geodetic longitude", "λ", AxisDirection::East, "degree");
    axis.minimum_value = -180.0;
    axis.maximum_value = 180.0;
    axis.range_meaning = Some(RangeMeaning::Wraparound);
    axis
}

pub fn cs(name: &str, kind: CsKind, axes: Vec<TestObject>) -> TestObject {
    let mut cs = TestObject::named(name).with_roles(&[Role::CoordinateSystem]);
    cs.cs_kind = kind;
    cs.axes = axes.into_iter().map(Some).collect();
    cs
}

pub fn ellipsoidal_cs() -> TestObject {
    cs(
        "Ellipsoidal 2D",
        CsKind::Ellipsoidal,
        vec![latitude_axis(), longitude_axis()],
    )
}

pub fn cartesian_cs() -> TestObject {
    cs(
        "Cartesian 2D",
        CsKind::Cartesian,
        vec![
            axis("Easting", "E", AxisDirection::East, "metre"),
            axis("Northing", "N", AxisDirection::North, "metre"),
        ],
    )
}

pub fn wgs84_ellipsoid() -> TestObject {
    let mut ellipsoid = TestObject::named("WGS 84").with_roles(&[Role::Ellipsoid]);
    ellipsoid.semi_major_axis = 6_378_137.0;
    ellipsoid.inverse_flattening = 298.257_223_563;
    ellipsoid.semi_minor_axis = 6_378_137.0 * (1.0 - 1.0 / 298.257_223_563);
    ellipsoid.ivf_definitive = true;
    ellipsoid.unit = Some("metre".to_string());
    ellipsoid
}

pub fn sphere() -> TestObject {
    let mut ellipsoid = TestObject::named("Sphere").with_roles(&[Role::Ellipsoid]);
    ellipsoid.semi_major_axis = 6_371_000.0;
    ellipsoid.semi_minor_axis = 6_371_000.0;
    ellipsoid.inverse_flattening = f64::INFINITY;
    ellipsoid.unit = Some("metre".to_string());
    ellipsoid
}

pub fn greenwich() -> TestObject {
    let mut meridian = TestObject::named("Greenwich").with_roles(&[Role::PrimeMeridian]);
    meridian.unit = Some("degree".to_string());
    meridian
}

pub fn geodetic_datum() -> TestObject {
    let mut datum = TestObject::named("World Geodetic System 1984").with_roles(&[Role::Datum]);
    datum.datum_kind = DatumKind::Geodetic;
    datum.ellipsoid = Some(Box::new(wgs84_ellipsoid()));
    datum.prime_meridian = Some(Box::new(greenwich()));
    datum
}

pub fn geographic_crs() -> TestObject {
    let mut crs = TestObject::named("WGS 84").with_roles(&[Role::CoordinateReferenceSystem]);
    crs.identifiers = vec![Identifier::new("4326").with_code_space("EPSG")];
    crs.domains = vec![ObjectDomain::new(
        "Horizontal component of 3D system.",
        Extent::bounded(GeographicBoundingBox::WORLD),
    )];
    crs.crs_kind = CrsKind::Geographic;
    crs.coordinate_system = Some(Box::new(ellipsoidal_cs()));
    crs.datum = Some(Box::new(geodetic_datum()));
    crs
}

pub fn projected_crs() -> TestObject {
    let mut crs =
        TestObject::named("WGS 84 / Pseudo-Mercator").with_roles(&[Role::CoordinateReferenceSystem]);
    crs.crs_kind = CrsKind::Projected;
    crs.coordinate_system = Some(Box::new(cartesian_cs()));
    crs.datum = Some(Box::new(geodetic_datum()));
    crs
}

pub fn vertical_crs() -> TestObject {
    let mut crs = TestObject::named("MSL height").with_roles(&[Role::CoordinateReferenceSystem]);
    crs.crs_kind = CrsKind::Vertical;
    crs.coordinate_system = Some(Box::new(cs(
        "Vertical",
        CsKind::Vertical,
        vec![axis("Gravity-related height", "H", AxisDirection::Up, "metre")],
    )));
    let mut datum = TestObject::named("Mean Sea Level").with_roles(&[Role::Datum]);
    datum.datum_kind = DatumKind::Vertical;
    crs.datum = Some(Box::new(datum));
    crs
}

pub fn parameter(name: &str) -> TestObject {
    TestObject::named(name).with_roles(&[Role::ParameterDescriptor])
}

pub fn parameter_group(name: &str, children: Vec<TestObject>) -> TestObject {
    let mut group = parameter(name);
    group.descriptors = Some(children);
    group
}

pub fn mercator_method() -> TestObject {
    let mut method = TestObject::named("Popular Visualisation Pseudo Mercator")
        .with_roles(&[Role::OperationMethod]);
    method.formula = Some("See EPSG guidance note 7-2.".to_string());
    method.parameters = Some(Box::new(parameter_group(
        "Pseudo Mercator",
        vec![
            parameter("Latitude of natural origin"),
            parameter("Longitude of natural origin"),
            parameter("False easting"),
            parameter("False northing"),
        ],
    )));
    method
}

pub fn conversion() -> TestObject {
    let mut operation =
        TestObject::named("Popular Visualisation Pseudo-Mercator").with_roles(&[Role::CoordinateOperation]);
    operation.operation_kind = OperationKind::Conversion;
    operation.method = Some(Box::new(mercator_method()));
    operation
}

pub fn transformation() -> TestObject {
    let mut method = TestObject::named("Geocentric translations").with_roles(&[Role::OperationMethod]);
    method.formula = Some("See EPSG guidance note 7-2.".to_string());

    let mut operation =
        TestObject::named("WGS 72 to WGS 84 (1)").with_roles(&[Role::CoordinateOperation]);
    operation.operation_kind = OperationKind::Transformation;
    operation.operation_version = Some("EPSG-wld".to_string());
    operation.source_crs = Some(Box::new(geographic_crs()));
    operation.target_crs = Some(Box::new(geographic_crs()));
    operation.method = Some(Box::new(method));
    operation
}

impl IdentifiedObject for TestObject {
    fn name(&self) -> Option<&Identifier> {
        self.name.as_ref()
    }

    fn identifiers(&self) -> &[Identifier] {
        &self.identifiers
    }

    fn alias(&self) -> &[String] {
        &self.alias
    }

    fn domains(&self) -> &[ObjectDomain] {
        &self.domains
    }

    fn remarks(&self) -> Option<&str> {
        self.remarks.as_deref()
    }

    fn as_crs(&self) -> Option<&dyn CoordinateReferenceSystem> {
        if self.plays_role(Role::CoordinateReferenceSystem) {
            Some(self as &dyn CoordinateReferenceSystem)
        } else {
            None
        }
    }

    fn as_cs(&self) -> Option<&dyn CoordinateSystem> {
        if self.plays_role(Role::CoordinateSystem) {
            Some(self as &dyn CoordinateSystem)
        } else {
            None
        }
    }

    fn as_axis(&self) -> Option<&dyn CoordinateSystemAxis> {
        if self.plays_role(Role::CoordinateSystemAxis) {
            Some(self as &dyn CoordinateSystemAxis)
        } else {
            None
        }
    }

    fn as_datum(&self) -> Option<&dyn Datum> {
        if self.plays_role(Role::Datum) {
            Some(self as &dyn Datum)
        } else {
            None
        }
    }

    fn as_ellipsoid(&self) -> Option<&dyn Ellipsoid> {
        if self.plays_role(Role::Ellipsoid) {
            Some(self as &dyn Ellipsoid)
        } else {
            None
        }
    }

    fn as_prime_meridian(&self) -> Option<&dyn PrimeMeridian> {
        if self.plays_role(Role::PrimeMeridian) {
            Some(self as &dyn PrimeMeridian)
        } else {
            None
        }
    }

    fn as_parameter_descriptor(&self) -> Option<&dyn ParameterDescriptor> {
        if self.plays_role(Role::ParameterDescriptor) {
            Some(self as &dyn ParameterDescriptor)
        } else {
            None
        }
    }

    fn as_operation(&self) -> Option<&dyn CoordinateOperation> {
        if self.plays_role(Role::CoordinateOperation) {
            Some(self as &dyn CoordinateOperation)
        } else {
            None
        }
    }

    fn as_operation_method(&self) -> Option<&dyn OperationMethod> {
        if self.plays_role(Role::OperationMethod) {
            Some(self as &dyn OperationMethod)
        } else {
            None
        }
    }
}

impl CoordinateReferenceSystem for TestObject {
    fn crs_kind(&self) -> CrsKind {
        self.crs_kind
    }

    fn coordinate_system(&self) -> Option<&dyn CoordinateSystem> {
        self.coordinate_system
            .as_deref()
            .map(|cs| cs as &dyn CoordinateSystem)
    }

    fn datum(&self) -> Option<&dyn Datum> {
        self.datum.as_deref().map(|datum| datum as &dyn Datum)
    }

    fn components(&self) -> Vec<&dyn CoordinateReferenceSystem> {
        self.components
            .iter()
            .map(|crs| crs as &dyn CoordinateReferenceSystem)
            .collect()
    }
}

impl CoordinateSystem for TestObject {
    fn cs_kind(&self) -> CsKind {
        self.cs_kind
    }

    fn dimension(&self) -> usize {
        self.axes.len()
    }

    fn axis(&self, index: usize) -> Option<&dyn CoordinateSystemAxis> {
        self.axes
            .get(index)?
            .as_ref()
            .map(|axis| axis as &dyn CoordinateSystemAxis)
    }
}

impl CoordinateSystemAxis for TestObject {
    fn abbreviation(&self) -> Option<&str> {
        self.abbreviation.as_deref()
    }

    fn direction(&self) -> Option<AxisDirection> {
        self.direction
    }

    fn unit(&self) -> Option<&str> {
        self.unit.as_deref()
    }

    fn minimum_value(&self) -> f64 {
        self.minimum_value
    }

    fn maximum_value(&self) -> f64 {
        self.maximum_value
    }

    fn range_meaning(&self) -> Option<RangeMeaning> {
        self.range_meaning
    }
}

impl Datum for TestObject {
    fn datum_kind(&self) -> DatumKind {
        self.datum_kind
    }

    fn ellipsoid(&self) -> Option<&dyn Ellipsoid> {
        self.ellipsoid
            .as_deref()
            .map(|ellipsoid| ellipsoid as &dyn Ellipsoid)
    }

    fn prime_meridian(&self) -> Option<&dyn PrimeMeridian> {
        self.prime_meridian
            .as_deref()
            .map(|meridian| meridian as &dyn PrimeMeridian)
    }
}

impl Ellipsoid for TestObject {
    fn semi_major_axis(&self) -> f64 {
        self.semi_major_axis
    }

    fn semi_minor_axis(&self) -> f64 {
        self.semi_minor_axis
    }

    fn inverse_flattening(&self) -> f64 {
        self.inverse_flattening
    }

    fn is_ivf_definitive(&self) -> bool {
        self.ivf_definitive
    }

    fn axis_unit(&self) -> Option<&str> {
        self.unit.as_deref()
    }
}

impl PrimeMeridian for TestObject {
    fn greenwich_longitude(&self) -> f64 {
        self.greenwich_longitude
    }

    fn angular_unit(&self) -> Option<&str> {
        self.unit.as_deref()
    }
}

impl ParameterDescriptor for TestObject {
    fn minimum_occurs(&self) -> u32 {
        self.minimum_occurs
    }

    fn maximum_occurs(&self) -> u32 {
        self.maximum_occurs
    }

    fn descriptors(&self) -> Option<Vec<&dyn ParameterDescriptor>> {
        self.descriptors.as_ref().map(|children| {
            children
                .iter()
                .map(|child| child as &dyn ParameterDescriptor)
                .collect()
        })
    }
}

impl CoordinateOperation for TestObject {
    fn operation_kind(&self) -> OperationKind {
        self.operation_kind
    }

    fn source_crs(&self) -> Option<&dyn CoordinateReferenceSystem> {
        self.source_crs
            .as_deref()
            .map(|crs| crs as &dyn CoordinateReferenceSystem)
    }

    fn target_crs(&self) -> Option<&dyn CoordinateReferenceSystem> {
        self.target_crs
            .as_deref()
            .map(|crs| crs as &dyn CoordinateReferenceSystem)
    }

    fn operation_version(&self) -> Option<&str> {
        self.operation_version.as_deref()
    }

    fn method(&self) -> Option<&dyn OperationMethod> {
        self.method
            .as_deref()
            .map(|method| method as &dyn OperationMethod)
    }

    fn steps(&self) -> Vec<&dyn CoordinateOperation> {
        self.steps
            .iter()
            .map(|step| step as &dyn CoordinateOperation)
            .collect()
    }
}

impl OperationMethod for TestObject {
    fn formula(&self) -> Option<&str> {
        self.formula.as_deref()
    }

    fn parameters(&self) -> Option<&dyn ParameterDescriptor> {
        self.parameters
            .as_deref()
            .map(|parameters| parameters as &dyn ParameterDescriptor)
    }
}
