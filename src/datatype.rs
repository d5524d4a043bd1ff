//! Contains [`GeoArrowType`] and the deterministic mapping between type
//! specifications and concrete Arrow storage types.

use std::collections::HashMap;

use arrow_schema::extension::{EXTENSION_TYPE_METADATA_KEY, EXTENSION_TYPE_NAME_KEY};
use arrow_schema::{DataType, Field};

use crate::error::{GeoArrowError, GeoArrowResult};
use crate::type_spec::TypeSpec;
use crate::{CoordType, Dimension, Encoding, GeometryType};

/// A concrete GeoArrow extension type: a fully resolved [`TypeSpec`]
/// together with its Arrow storage type and extension name/metadata.
///
/// The specification held here is always defaulted and canonicalized, so
/// the extension name, extension metadata, and storage type round-trip:
/// deserializing the three wire components reproduces an equal
/// `GeoArrowType`.
///
/// ```
/// use arrow_schema::DataType;
/// use geoarrow_types::{wkb, GeoArrowType};
///
/// let wkb_type = GeoArrowType::try_new(wkb()).unwrap();
/// assert_eq!(wkb_type.extension_name(), "geoarrow.wkb");
/// assert_eq!(wkb_type.storage_type(), &DataType::Binary);
/// assert_eq!(wkb_type.extension_metadata(), "{}");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeoArrowType {
    spec: TypeSpec,
    storage_type: DataType,
    extension_name: &'static str,
    extension_metadata: String,
}

impl GeoArrowType {
    /// Resolve a [`TypeSpec`] into a concrete extension type.
    ///
    /// The specification is defaulted and canonicalized first; the encoding
    /// and, for the native encoding, the geometry type must be specified.
    pub fn try_new(spec: TypeSpec) -> GeoArrowResult<Self> {
        let spec = spec.with_defaults().canonicalize();
        let storage_type = storage_type(&spec)?;
        Self::from_parts(spec, storage_type)
    }

    fn from_parts(spec: TypeSpec, storage_type: DataType) -> GeoArrowResult<Self> {
        let spec = spec.with_defaults().canonicalize();
        let extension_name = spec.extension_name()?;
        let extension_metadata = spec.extension_metadata()?;
        Ok(Self {
            spec,
            storage_type,
            extension_name,
            extension_metadata,
        })
    }

    /// Reconstruct an extension type from its wire components: a storage
    /// type, and optionally an extension name and extension metadata.
    ///
    /// Structure is inferred from the storage nesting where it is
    /// unambiguous (points, serialized encodings, and three-deep nestings).
    /// Two-deep nestings are ambiguous between polygons and
    /// multilinestrings and one-deep nestings between linestrings and
    /// multipoints; those require the extension name. A supplied extension
    /// name that conflicts with the inferred structure is an error.
    pub fn from_storage(
        storage_type: &DataType,
        extension_name: Option<&str>,
        extension_metadata: Option<&str>,
    ) -> GeoArrowResult<Self> {
        let nodes = parse_storage(storage_type)?;
        let base = nesting_spec(&nodes).ok_or_else(|| {
            GeoArrowError::InvalidGeoArrow(format!(
                "Can't guess encoding from type nesting of {storage_type}"
            ))
        })?;
        let spec = TypeSpec::from_extension_metadata(extension_metadata)?.coalesce2(&base);

        if spec.encoding().is_serialized() {
            if let Some(name) = extension_name {
                if spec.extension_name()? != name {
                    return Err(GeoArrowError::InvalidGeoArrow(format!(
                        "Can't interpret {storage_type} as {name}"
                    )));
                }
            }
            return Self::from_parts(spec, storage_type.clone());
        }

        let dimension = infer_dimension(nodes.last().unwrap())?;
        let mut spec = spec.coalesce2(&TypeSpec::from(dimension));

        if let Some(name) = extension_name {
            spec = spec.coalesce_unspecified2(&TypeSpec::from_extension_name(name)?)?;
        }

        Self::from_parts(spec, storage_type.clone())
    }

    /// The resolved specification of this type.
    pub fn spec(&self) -> &TypeSpec {
        &self.spec
    }

    /// The Arrow storage type of this type.
    pub fn storage_type(&self) -> &DataType {
        &self.storage_type
    }

    /// The GeoArrow extension name of this type.
    pub fn extension_name(&self) -> &'static str {
        self.extension_name
    }

    /// The GeoArrow extension metadata JSON of this type.
    pub fn extension_metadata(&self) -> &str {
        &self.extension_metadata
    }

    /// Retrieve the [`Encoding`].
    pub fn encoding(&self) -> Encoding {
        self.spec.encoding()
    }

    /// Retrieve the [`GeometryType`].
    pub fn geometry_type(&self) -> GeometryType {
        self.spec.geometry_type()
    }

    /// Retrieve the [`Dimension`].
    pub fn dimension(&self) -> Dimension {
        self.spec.dimension()
    }

    /// Retrieve the [`CoordType`].
    pub fn coord_type(&self) -> CoordType {
        self.spec.coord_type()
    }

    /// Convert this type to a [`Field`], writing the extension name and
    /// extension metadata into the field metadata.
    pub fn to_field(&self, name: impl Into<String>, nullable: bool) -> Field {
        let metadata = HashMap::from([
            (
                EXTENSION_TYPE_NAME_KEY.to_string(),
                self.extension_name.to_string(),
            ),
            (
                EXTENSION_TYPE_METADATA_KEY.to_string(),
                self.extension_metadata.clone(),
            ),
        ]);
        Field::new(name, self.storage_type.clone(), nullable).with_metadata(metadata)
    }
}

impl TryFrom<&Field> for GeoArrowType {
    type Error = GeoArrowError;

    fn try_from(field: &Field) -> GeoArrowResult<Self> {
        let extension_name = field
            .metadata()
            .get(EXTENSION_TYPE_NAME_KEY)
            .map(String::as_str);
        let extension_metadata = field
            .metadata()
            .get(EXTENSION_TYPE_METADATA_KEY)
            .map(String::as_str);
        Self::from_storage(field.data_type(), extension_name, extension_metadata)
    }
}

/// Compute the Arrow storage type for a specification.
///
/// Defaults are applied first. Serialized encodings map to the plain
/// binary/string types; the native encoding maps to a coordinate leaf
/// wrapped in zero to three levels of list nesting depending on the
/// geometry type.
pub fn storage_type(spec: &TypeSpec) -> GeoArrowResult<DataType> {
    let spec = spec.with_defaults();
    match spec.encoding() {
        Encoding::Wkb => Ok(DataType::Binary),
        Encoding::LargeWkb => Ok(DataType::LargeBinary),
        Encoding::WkbView => Ok(DataType::BinaryView),
        Encoding::Wkt => Ok(DataType::Utf8),
        Encoding::LargeWkt => Ok(DataType::LargeUtf8),
        Encoding::WktView => Ok(DataType::Utf8View),
        Encoding::GeoArrow => {
            native_storage_type(spec.geometry_type(), spec.coord_type(), spec.dimension())
        }
        Encoding::Unspecified => Err(GeoArrowError::IncompleteType(format!(
            "Can't compute storage type for {spec}: encoding is unspecified"
        ))),
    }
}

fn native_storage_type(
    geometry_type: GeometryType,
    coord_type: CoordType,
    dimension: Dimension,
) -> GeoArrowResult<DataType> {
    let coords = coord_storage_type(coord_type, dimension)?;
    let data_type = match geometry_type {
        GeometryType::Point => coords,
        GeometryType::LineString => DataType::List(Field::new("vertices", coords, false).into()),
        GeometryType::MultiPoint => DataType::List(Field::new("points", coords, false).into()),
        GeometryType::Polygon => {
            let vertices = Field::new("vertices", coords, false);
            DataType::List(Field::new_list("rings", vertices, false).into())
        }
        GeometryType::MultiLineString => {
            let vertices = Field::new("vertices", coords, false);
            DataType::List(Field::new_list("linestrings", vertices, false).into())
        }
        GeometryType::MultiPolygon => {
            let vertices = Field::new("vertices", coords, false);
            let rings = Field::new_list("rings", vertices, false);
            DataType::List(Field::new_list("polygons", rings, false).into())
        }
        geometry_type => {
            return Err(GeoArrowError::IncompleteType(format!(
                "No native storage layout for geometry type {geometry_type}"
            )))
        }
    };
    Ok(data_type)
}

fn coord_storage_type(coord_type: CoordType, dimension: Dimension) -> GeoArrowResult<DataType> {
    let letters = dimension.letters().ok_or_else(|| {
        GeoArrowError::IncompleteType(format!(
            "Can't build coordinate storage for dimension {dimension}"
        ))
    })?;
    match coord_type {
        CoordType::Separated => Ok(DataType::Struct(
            letters
                .chars()
                .map(|letter| Field::new(letter.to_string(), DataType::Float64, false))
                .collect(),
        )),
        CoordType::Interleaved => Ok(DataType::FixedSizeList(
            Field::new(letters, DataType::Float64, false).into(),
            letters.len() as i32,
        )),
        CoordType::Unspecified => Err(GeoArrowError::IncompleteType(
            "Can't build coordinate storage for unspecified coord type".to_string(),
        )),
    }
}

/// Simplified representation of one level of a storage type.
///
/// A parsed storage type is a run of zero or more `List` nodes followed by
/// exactly one terminal node (coordinates for native types, data for
/// serialized types).
#[derive(Debug, Clone, PartialEq)]
enum StorageNode {
    Binary,
    LargeBinary,
    BinaryView,
    Utf8,
    LargeUtf8,
    Utf8View,
    Double,
    List,
    Struct { names: Vec<String> },
    FixedSizeList { name: String, size: i32 },
}

fn parse_storage(data_type: &DataType) -> GeoArrowResult<Vec<StorageNode>> {
    match data_type {
        DataType::Binary => Ok(vec![StorageNode::Binary]),
        DataType::LargeBinary => Ok(vec![StorageNode::LargeBinary]),
        DataType::BinaryView => Ok(vec![StorageNode::BinaryView]),
        DataType::Utf8 => Ok(vec![StorageNode::Utf8]),
        DataType::LargeUtf8 => Ok(vec![StorageNode::LargeUtf8]),
        DataType::Utf8View => Ok(vec![StorageNode::Utf8View]),
        DataType::Float64 => Ok(vec![StorageNode::Double]),
        DataType::List(field) => {
            let mut nodes = vec![StorageNode::List];
            nodes.extend(parse_storage(field.data_type())?);
            Ok(nodes)
        }
        DataType::Struct(fields) => {
            for field in fields {
                if !matches!(field.data_type(), DataType::Float64) {
                    return Err(GeoArrowError::InvalidGeoArrow(format!(
                        "Expected double coordinate values but got {}",
                        field.data_type()
                    )));
                }
            }
            let names = fields.iter().map(|field| field.name().clone()).collect();
            Ok(vec![StorageNode::Struct { names }])
        }
        DataType::FixedSizeList(field, size) => {
            if !matches!(field.data_type(), DataType::Float64) {
                return Err(GeoArrowError::InvalidGeoArrow(format!(
                    "Expected double coordinate values but got {}",
                    field.data_type()
                )));
            }
            Ok(vec![StorageNode::FixedSizeList {
                name: field.name().clone(),
                size: *size,
            }])
        }
        data_type => Err(GeoArrowError::InvalidGeoArrow(format!(
            "{data_type} is not a valid GeoArrow type component"
        ))),
    }
}

/// The partial specification implied by a storage type's nesting alone.
///
/// One- and two-deep nestings leave the geometry type unspecified: a
/// one-deep list is either a linestring or a multipoint, and a two-deep
/// list either a polygon or a multilinestring. The extension name is the
/// only way to tell those apart.
fn nesting_spec(nodes: &[StorageNode]) -> Option<TypeSpec> {
    use crate::type_spec::{
        large_wkb, large_wkt, multipolygon, point, wkb, wkb_view, wkt, wkt_view,
    };

    let depth = nodes
        .iter()
        .take_while(|node| matches!(node, StorageNode::List))
        .count();
    let spec = match (depth, nodes.last()?) {
        (0, StorageNode::Binary) => wkb(),
        (0, StorageNode::LargeBinary) => large_wkb(),
        (0, StorageNode::BinaryView) => wkb_view(),
        (0, StorageNode::Utf8) => wkt(),
        (0, StorageNode::LargeUtf8) => large_wkt(),
        (0, StorageNode::Utf8View) => wkt_view(),
        (0, StorageNode::Struct { .. }) => point().with_coord_type(CoordType::Separated),
        (0, StorageNode::FixedSizeList { .. }) => {
            point().with_coord_type(CoordType::Interleaved)
        }
        (1..=2, StorageNode::Struct { .. }) => {
            TypeSpec::from(Encoding::GeoArrow).with_coord_type(CoordType::Separated)
        }
        (1..=2, StorageNode::FixedSizeList { .. }) => {
            TypeSpec::from(Encoding::GeoArrow).with_coord_type(CoordType::Interleaved)
        }
        (3, StorageNode::Struct { .. }) => multipolygon().with_coord_type(CoordType::Separated),
        (3, StorageNode::FixedSizeList { .. }) => {
            multipolygon().with_coord_type(CoordType::Interleaved)
        }
        _ => return None,
    };
    Some(spec)
}

fn infer_dimension(node: &StorageNode) -> GeoArrowResult<Dimension> {
    match node {
        StorageNode::Struct { names } => {
            let names_ref: Vec<&str> = names.iter().map(String::as_str).collect();
            match names_ref.as_slice() {
                ["x", "y"] => Ok(Dimension::XY),
                ["x", "y", "z"] => Ok(Dimension::XYZ),
                ["x", "y", "m"] => Ok(Dimension::XYM),
                ["x", "y", "z", "m"] => Ok(Dimension::XYZM),
                // Struct arity alone is not a trustworthy dimension signal:
                // only the two-field case is unambiguous.
                _ if names.len() == 2 => Ok(Dimension::XY),
                _ => Err(GeoArrowError::InvalidGeoArrow(format!(
                    "Can't infer dimensions from coordinate field names {names:?}"
                ))),
            }
        }
        StorageNode::FixedSizeList { name, size } => {
            let from_name = match name.as_str() {
                "xy" => Some(Dimension::XY),
                "xyz" => Some(Dimension::XYZ),
                "xym" => Some(Dimension::XYM),
                "xyzm" => Some(Dimension::XYZM),
                _ => None,
            };
            if let Some(dimension) = from_name {
                if dimension.size() != Some(*size as usize) {
                    return Err(GeoArrowError::InvalidGeoArrow(format!(
                        "Expected {size} dimensions but got {dimension}"
                    )));
                }
                return Ok(dimension);
            }
            match size {
                2 => Ok(Dimension::XY),
                4 => Ok(Dimension::XYZM),
                _ => Err(GeoArrowError::InvalidGeoArrow(format!(
                    "Can't infer dimensions from fixed-size list field {name:?} with size {size}"
                ))),
            }
        }
        node => Err(GeoArrowError::InvalidGeoArrow(format!(
            "Expected a coordinate node, got {node:?}"
        ))),
    }
}
