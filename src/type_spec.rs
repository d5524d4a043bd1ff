//! Contains [`TypeSpec`], the partial, mergeable specification of a GeoArrow
//! geometry type.

use std::fmt::Display;

use crate::crs::{Crs, CrsSpec};
use crate::error::{GeoArrowError, GeoArrowResult};
use crate::metadata::Metadata;
use crate::{CoordType, Dimension, Edges, Encoding, GeometryType};

/// A partial specification of a GeoArrow geometry type.
///
/// A `TypeSpec` records the encoding, geometry type, dimensions, coordinate
/// type, edge interpretation, and coordinate reference system of a geometry
/// column, each of which may independently be left unspecified. Partial
/// specifications are combined with [`coalesce`][Self::coalesce] (fill in
/// gaps), [`coalesce_unspecified`][Self::coalesce_unspecified] (merge
/// opinions that must not conflict), and [`common`][Self::common] (find a
/// type both inputs can be cast to), then resolved with
/// [`with_defaults`][Self::with_defaults] and
/// [`canonicalize`][Self::canonicalize] before being turned into a concrete
/// storage layout.
///
/// Values are immutable: every operation returns a new `TypeSpec`.
///
/// ```
/// use geoarrow_types::{point, Dimension, Encoding};
///
/// let spec = point().with_dimension(Dimension::XYZ);
/// assert_eq!(spec.encoding(), Encoding::GeoArrow);
/// assert_eq!(spec.extension_name().unwrap(), "geoarrow.point");
/// ```
#[derive(Debug, Default, Clone, PartialEq, Eq, Hash)]
pub struct TypeSpec {
    encoding: Encoding,
    geometry_type: GeometryType,
    dimension: Dimension,
    coord_type: CoordType,
    edges: Edges,
    crs: CrsSpec,
}

impl TypeSpec {
    /// Construct a new specification with every field unspecified.
    pub fn new() -> Self {
        Default::default()
    }

    /// Retrieve the [`Encoding`].
    pub fn encoding(&self) -> Encoding {
        self.encoding
    }

    /// Retrieve the [`GeometryType`].
    pub fn geometry_type(&self) -> GeometryType {
        self.geometry_type
    }

    /// Retrieve the [`Dimension`].
    pub fn dimension(&self) -> Dimension {
        self.dimension
    }

    /// Retrieve the [`CoordType`].
    pub fn coord_type(&self) -> CoordType {
        self.coord_type
    }

    /// Retrieve the [`Edges`].
    pub fn edges(&self) -> Edges {
        self.edges
    }

    /// Retrieve the [`CrsSpec`].
    pub fn crs(&self) -> &CrsSpec {
        &self.crs
    }

    /// Replace the [`Encoding`]. Passing the sentinel unsets the field.
    pub fn with_encoding(self, encoding: Encoding) -> Self {
        Self { encoding, ..self }
    }

    /// Replace the [`GeometryType`]. Passing the sentinel unsets the field.
    pub fn with_geometry_type(self, geometry_type: GeometryType) -> Self {
        Self {
            geometry_type,
            ..self
        }
    }

    /// Replace the [`Dimension`]. Passing the sentinel unsets the field.
    pub fn with_dimension(self, dimension: Dimension) -> Self {
        Self { dimension, ..self }
    }

    /// Replace the [`CoordType`]. Passing the sentinel unsets the field.
    pub fn with_coord_type(self, coord_type: CoordType) -> Self {
        Self { coord_type, ..self }
    }

    /// Replace the [`Edges`]. Passing the sentinel unsets the field.
    pub fn with_edges(self, edges: Edges) -> Self {
        Self { edges, ..self }
    }

    /// Replace the CRS field. Accepts a [`Crs`], an `Option<Crs>`, or a
    /// [`CrsSpec`]; passing [`CrsSpec::Unspecified`] unsets the field.
    pub fn with_crs(self, crs: impl Into<CrsSpec>) -> Self {
        Self {
            crs: crs.into(),
            ..self
        }
    }

    /// Whether any field required to resolve this specification into a
    /// concrete type is still unspecified.
    ///
    /// Serialized encodings carry their structure in the bytes, so only the
    /// encoding, edges, and CRS must be known; native encodings additionally
    /// require the geometry type, dimensions, and coordinate type.
    pub fn is_partial(&self) -> bool {
        if !self.encoding.is_specified() {
            return true;
        }
        if !self.edges.is_specified() || !self.crs.is_specified() {
            return true;
        }
        if self.encoding.is_serialized() {
            false
        } else {
            !(self.geometry_type.is_specified()
                && self.dimension.is_specified()
                && self.coord_type.is_specified())
        }
    }

    /// Fill unspecified fields of `self` from `other`, field by field.
    /// `self` wins wherever both are specified.
    pub fn coalesce2(&self, other: &TypeSpec) -> TypeSpec {
        TypeSpec {
            encoding: self.encoding.coalesce2(other.encoding),
            geometry_type: self.geometry_type.coalesce2(other.geometry_type),
            dimension: self.dimension.coalesce2(other.dimension),
            coord_type: self.coord_type.coalesce2(other.coord_type),
            edges: self.edges.coalesce2(other.edges),
            crs: self.crs.clone().coalesce2(other.crs.clone()),
        }
    }

    /// Merge two specifications whose fields must each be specified at most
    /// once, erroring on any conflicting field.
    ///
    /// Use this to combine information from independent sources that are
    /// supposed to be disjoint, such as an extension name and a storage
    /// layout, where a double opinion indicates an inconsistency rather
    /// than a preference.
    pub fn coalesce_unspecified2(&self, other: &TypeSpec) -> GeoArrowResult<TypeSpec> {
        Ok(TypeSpec {
            encoding: self.encoding.coalesce_unspecified2(other.encoding)?,
            geometry_type: self
                .geometry_type
                .coalesce_unspecified2(other.geometry_type)?,
            dimension: self.dimension.coalesce_unspecified2(other.dimension)?,
            coord_type: self.coord_type.coalesce_unspecified2(other.coord_type)?,
            edges: self.edges.coalesce_unspecified2(other.edges)?,
            crs: self
                .crs
                .clone()
                .coalesce_unspecified2(other.crs.clone())?,
        })
    }

    /// Compute a specification to which values of both inputs can be cast.
    ///
    /// Geometry types and dimensions promote toward supersets (falling back
    /// to heterogeneous/unknown), encodings fall back to WKB when native and
    /// serialized inputs mix, and the remaining fields must agree.
    pub fn common2(&self, other: &TypeSpec) -> GeoArrowResult<TypeSpec> {
        let encoding =
            self.encoding
                .common2(other.encoding)
                .ok_or_else(|| GeoArrowError::NoCommonType {
                    field: "encoding",
                    left: self.encoding.to_string(),
                    right: other.encoding.to_string(),
                })?;
        let coord_type =
            self.coord_type
                .common2(other.coord_type)
                .ok_or_else(|| GeoArrowError::NoCommonType {
                    field: "coord type",
                    left: self.coord_type.to_string(),
                    right: other.coord_type.to_string(),
                })?;
        let edges = self
            .edges
            .common2(other.edges)
            .ok_or_else(|| GeoArrowError::NoCommonType {
                field: "edges",
                left: self.edges.to_string(),
                right: other.edges.to_string(),
            })?;
        Ok(TypeSpec {
            encoding,
            geometry_type: self.geometry_type.common2(other.geometry_type),
            dimension: self.dimension.common2(other.dimension),
            coord_type,
            edges,
            crs: self.crs.clone().common2(other.crs.clone())?,
        })
    }

    /// Fold [`coalesce2`][Self::coalesce2] over a sequence of
    /// specifications. Earlier specifications win; later ones only fill
    /// gaps.
    pub fn coalesce(specs: impl IntoIterator<Item = TypeSpec>) -> TypeSpec {
        specs
            .into_iter()
            .fold(TypeSpec::new(), |acc, spec| acc.coalesce2(&spec))
    }

    /// Fold [`coalesce_unspecified2`][Self::coalesce_unspecified2] over a
    /// sequence of specifications.
    pub fn coalesce_unspecified(
        specs: impl IntoIterator<Item = TypeSpec>,
    ) -> GeoArrowResult<TypeSpec> {
        specs
            .into_iter()
            .try_fold(TypeSpec::new(), |acc, spec| acc.coalesce_unspecified2(&spec))
    }

    /// Fold [`common2`][Self::common2] over a sequence of specifications,
    /// computing a cast target for all of them.
    ///
    /// ```
    /// use geoarrow_types::{point, wkb, TypeSpec};
    ///
    /// let target = TypeSpec::common([wkb(), point()]).unwrap();
    /// assert_eq!(target.canonicalize(), wkb().canonicalize());
    /// ```
    pub fn common(specs: impl IntoIterator<Item = TypeSpec>) -> GeoArrowResult<TypeSpec> {
        specs
            .into_iter()
            .try_fold(TypeSpec::new(), |acc, spec| acc.common2(&spec))
    }

    /// Fill unspecified fields from the built-in defaults: XY dimensions,
    /// separated coordinates, planar edges, and no CRS.
    ///
    /// The encoding and geometry type have no default; they must be chosen
    /// explicitly.
    pub fn with_defaults(&self) -> TypeSpec {
        self.coalesce2(&TypeSpec {
            dimension: Dimension::XY,
            coord_type: CoordType::Separated,
            edges: Edges::Planar,
            crs: CrsSpec::Absent,
            ..Default::default()
        })
    }

    /// Normalize the structural fields of serialized encodings.
    ///
    /// A WKT or WKB column carries no structural type information in its
    /// Arrow type, so its geometry type is the generic
    /// [`GeometryType::Geometry`], its dimensions are
    /// [`Dimension::Unknown`], and its coordinate type is unspecified.
    /// Native and unspecified encodings are returned unchanged.
    pub fn canonicalize(&self) -> TypeSpec {
        if self.encoding.is_serialized() {
            TypeSpec {
                geometry_type: GeometryType::Geometry,
                dimension: Dimension::Unknown,
                coord_type: CoordType::Unspecified,
                ..self.clone()
            }
        } else {
            self.clone()
        }
    }

    /// The GeoArrow extension name identifying this specification.
    ///
    /// The name is a pure function of the encoding and, for the native
    /// encoding, the geometry type. Specifications whose geometry type has
    /// no single-geometry storage layout (heterogeneous geometries and
    /// geometry collections) have no extension name here.
    pub fn extension_name(&self) -> GeoArrowResult<&'static str> {
        use Encoding::*;
        match self.encoding {
            Wkb | LargeWkb | WkbView => Ok("geoarrow.wkb"),
            Wkt | LargeWkt | WktView => Ok("geoarrow.wkt"),
            GeoArrow => match self.geometry_type {
                GeometryType::Point => Ok("geoarrow.point"),
                GeometryType::LineString => Ok("geoarrow.linestring"),
                GeometryType::Polygon => Ok("geoarrow.polygon"),
                GeometryType::MultiPoint => Ok("geoarrow.multipoint"),
                GeometryType::MultiLineString => Ok("geoarrow.multilinestring"),
                GeometryType::MultiPolygon => Ok("geoarrow.multipolygon"),
                geometry_type => Err(GeoArrowError::IncompleteType(format!(
                    "Can't compute extension name for geometry type {geometry_type}"
                ))),
            },
            Unspecified => Err(GeoArrowError::IncompleteType(
                "Can't compute extension name when encoding is unspecified".to_string(),
            )),
        }
    }

    /// The partial specification implied by a GeoArrow extension name.
    ///
    /// Serialized names resolve to their non-large encoding, since the name
    /// alone does not distinguish offset widths.
    pub fn from_extension_name(extension_name: &str) -> GeoArrowResult<TypeSpec> {
        let spec = match extension_name {
            "geoarrow.wkb" => TypeSpec::from(Encoding::Wkb),
            "geoarrow.wkt" => TypeSpec::from(Encoding::Wkt),
            "geoarrow.point" => geoarrow(GeometryType::Point),
            "geoarrow.linestring" => geoarrow(GeometryType::LineString),
            "geoarrow.polygon" => geoarrow(GeometryType::Polygon),
            "geoarrow.multipoint" => geoarrow(GeometryType::MultiPoint),
            "geoarrow.multilinestring" => geoarrow(GeometryType::MultiLineString),
            "geoarrow.multipolygon" => geoarrow(GeometryType::MultiPolygon),
            name => {
                return Err(GeoArrowError::UnknownName(format!(
                    "extension name {name:?}"
                )))
            }
        };
        Ok(spec)
    }

    /// The GeoArrow extension metadata JSON for this specification.
    ///
    /// Requires the edges and CRS fields to be specified (e.g. via
    /// [`with_defaults`][Self::with_defaults]); the output is always a
    /// valid JSON object.
    pub fn extension_metadata(&self) -> GeoArrowResult<String> {
        if !self.edges.is_specified() || !self.crs.is_specified() {
            return Err(GeoArrowError::IncompleteType(format!(
                "Can't compute extension metadata for {self}: edges and crs must be specified"
            )));
        }
        Ok(Metadata::new(self.crs.clone(), self.edges).serialize())
    }

    /// The partial specification carried by GeoArrow extension metadata
    /// JSON: the edge interpretation and the coordinate reference system.
    pub fn from_extension_metadata(extension_metadata: Option<&str>) -> GeoArrowResult<TypeSpec> {
        let metadata = Metadata::deserialize(extension_metadata)?;
        Ok(TypeSpec {
            edges: metadata.edges(),
            crs: metadata.crs().clone(),
            ..Default::default()
        })
    }
}

impl Display for TypeSpec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut parts = Vec::new();
        if self.encoding.is_specified() {
            parts.push(format!("encoding={}", self.encoding));
        }
        if self.geometry_type.is_specified() {
            parts.push(format!("geometry_type={}", self.geometry_type));
        }
        if self.dimension.is_specified() {
            parts.push(format!("dimension={}", self.dimension));
        }
        if self.coord_type.is_specified() {
            parts.push(format!("coord_type={}", self.coord_type));
        }
        if self.edges.is_specified() {
            parts.push(format!("edges={}", self.edges));
        }
        if self.crs.is_specified() {
            parts.push(format!("crs={}", self.crs));
        }
        write!(f, "type_spec({})", parts.join(", "))
    }
}

impl From<Encoding> for TypeSpec {
    fn from(value: Encoding) -> Self {
        TypeSpec::new().with_encoding(value)
    }
}

impl From<GeometryType> for TypeSpec {
    fn from(value: GeometryType) -> Self {
        TypeSpec::new().with_geometry_type(value)
    }
}

impl From<Dimension> for TypeSpec {
    fn from(value: Dimension) -> Self {
        TypeSpec::new().with_dimension(value)
    }
}

impl From<CoordType> for TypeSpec {
    fn from(value: CoordType) -> Self {
        TypeSpec::new().with_coord_type(value)
    }
}

impl From<Edges> for TypeSpec {
    fn from(value: Edges) -> Self {
        TypeSpec::new().with_edges(value)
    }
}

impl From<CrsSpec> for TypeSpec {
    fn from(value: CrsSpec) -> Self {
        TypeSpec::new().with_crs(value)
    }
}

impl From<Crs> for TypeSpec {
    fn from(value: Crs) -> Self {
        TypeSpec::new().with_crs(value)
    }
}

/// Merge independently sourced partial specifications, erroring loudly when
/// any two of them disagree on a field.
///
/// ```
/// use geoarrow_types::{type_spec, Dimension, Encoding, GeometryType, TypeSpec};
///
/// let spec = type_spec([
///     TypeSpec::from(Encoding::GeoArrow),
///     TypeSpec::from(GeometryType::Point),
///     TypeSpec::from(Dimension::XYZ),
/// ])
/// .unwrap();
/// assert_eq!(spec.extension_name().unwrap(), "geoarrow.point");
/// ```
pub fn type_spec(parts: impl IntoIterator<Item = TypeSpec>) -> GeoArrowResult<TypeSpec> {
    TypeSpec::coalesce_unspecified(parts)
}

/// A specification of WKB geometries in a `Binary` array.
pub fn wkb() -> TypeSpec {
    Encoding::Wkb.into()
}

/// A specification of WKB geometries in a `LargeBinary` array.
pub fn large_wkb() -> TypeSpec {
    Encoding::LargeWkb.into()
}

/// A specification of WKB geometries in a `BinaryView` array.
pub fn wkb_view() -> TypeSpec {
    Encoding::WkbView.into()
}

/// A specification of WKT geometries in a `Utf8` array.
pub fn wkt() -> TypeSpec {
    Encoding::Wkt.into()
}

/// A specification of WKT geometries in a `LargeUtf8` array.
pub fn large_wkt() -> TypeSpec {
    Encoding::LargeWkt.into()
}

/// A specification of WKT geometries in a `Utf8View` array.
pub fn wkt_view() -> TypeSpec {
    Encoding::WktView.into()
}

/// A specification of natively encoded geometries of the given type.
pub fn geoarrow(geometry_type: GeometryType) -> TypeSpec {
    TypeSpec::new()
        .with_encoding(Encoding::GeoArrow)
        .with_geometry_type(geometry_type)
}

/// A specification of natively encoded points.
pub fn point() -> TypeSpec {
    geoarrow(GeometryType::Point)
}

/// A specification of natively encoded linestrings.
pub fn linestring() -> TypeSpec {
    geoarrow(GeometryType::LineString)
}

/// A specification of natively encoded polygons.
pub fn polygon() -> TypeSpec {
    geoarrow(GeometryType::Polygon)
}

/// A specification of natively encoded multipoints.
pub fn multipoint() -> TypeSpec {
    geoarrow(GeometryType::MultiPoint)
}

/// A specification of natively encoded multilinestrings.
pub fn multilinestring() -> TypeSpec {
    geoarrow(GeometryType::MultiLineString)
}

/// A specification of natively encoded multipolygons.
pub fn multipolygon() -> TypeSpec {
    geoarrow(GeometryType::MultiPolygon)
}

#[cfg(test)]
mod test {
    use serde_json::json;

    use super::*;

    fn full_native() -> TypeSpec {
        point()
            .with_dimension(Dimension::XYZ)
            .with_coord_type(CoordType::Interleaved)
            .with_edges(Edges::Spherical)
            .with_crs(Crs::ogc_crs84())
    }

    #[test]
    fn coalesce_identity() {
        let spec = full_native();
        assert_eq!(spec.coalesce2(&TypeSpec::new()), spec);
        assert_eq!(TypeSpec::new().coalesce2(&spec), spec);
        assert_eq!(TypeSpec::coalesce([spec.clone()]), spec);
    }

    #[test]
    fn coalesce_left_bias() {
        let left = full_native();
        let right = multipolygon()
            .with_dimension(Dimension::XY)
            .with_coord_type(CoordType::Separated)
            .with_edges(Edges::Planar)
            .with_crs(None);
        assert_eq!(TypeSpec::coalesce([left.clone(), right]), left);
    }

    #[test]
    fn coalesce_fills_gaps() {
        let merged = TypeSpec::coalesce([point(), TypeSpec::from(Dimension::XYM)]);
        assert_eq!(merged.geometry_type(), GeometryType::Point);
        assert_eq!(merged.dimension(), Dimension::XYM);
    }

    #[test]
    fn coalesce_unspecified_agreement_and_conflict() {
        let spec = full_native();
        assert_eq!(
            spec.coalesce_unspecified2(&spec).unwrap(),
            spec
        );

        let err = TypeSpec::coalesce_unspecified([wkb(), wkt()]).unwrap_err();
        assert!(matches!(
            err,
            GeoArrowError::Overspecified {
                field: "encoding",
                ..
            }
        ));
    }

    #[test]
    fn common_idempotent_and_defaults_absorbing() {
        let spec = full_native();
        assert_eq!(spec.common2(&spec).unwrap(), spec);
        assert_eq!(spec.common2(&TypeSpec::new()).unwrap(), spec);
    }

    #[test]
    fn common_promotes_via_table() {
        let merged = TypeSpec::common([point(), multipoint()]).unwrap();
        assert_eq!(merged.geometry_type(), GeometryType::MultiPoint);
        assert_eq!(merged.encoding(), Encoding::GeoArrow);

        let merged = TypeSpec::common([point(), linestring()]).unwrap();
        assert_eq!(merged.geometry_type(), GeometryType::Geometry);
    }

    #[test]
    fn common_serialized_wins_over_native() {
        let merged = TypeSpec::common([wkb(), point()]).unwrap();
        assert_eq!(merged.canonicalize(), wkb().canonicalize());

        let merged = TypeSpec::common([point(), wkt()]).unwrap();
        assert_eq!(merged.encoding(), Encoding::Wkb);
    }

    #[test]
    fn common_conflicting_edges() {
        let spherical = point().with_edges(Edges::Spherical);
        let planar = point().with_edges(Edges::Planar);
        assert!(matches!(
            spherical.common2(&planar).unwrap_err(),
            GeoArrowError::NoCommonType { field: "edges", .. }
        ));
    }

    #[test]
    fn canonicalize_serialized() {
        let stray = wkb()
            .with_geometry_type(GeometryType::Point)
            .with_dimension(Dimension::XYZ)
            .with_coord_type(CoordType::Interleaved);
        let canonical = stray.canonicalize();
        assert_eq!(canonical.geometry_type(), GeometryType::Geometry);
        assert_eq!(canonical.dimension(), Dimension::Unknown);
        assert_eq!(canonical.coord_type(), CoordType::Unspecified);
        assert_eq!(canonical.canonicalize(), canonical);
    }

    #[test]
    fn canonicalize_native_is_identity() {
        let spec = full_native();
        assert_eq!(spec.canonicalize(), spec);
    }

    #[test]
    fn extension_name_lookup() {
        assert_eq!(wkb().extension_name().unwrap(), "geoarrow.wkb");
        assert_eq!(large_wkb().extension_name().unwrap(), "geoarrow.wkb");
        assert_eq!(wkt().extension_name().unwrap(), "geoarrow.wkt");
        assert_eq!(large_wkt().extension_name().unwrap(), "geoarrow.wkt");
        assert_eq!(point().extension_name().unwrap(), "geoarrow.point");
        assert_eq!(
            multilinestring().extension_name().unwrap(),
            "geoarrow.multilinestring"
        );

        assert!(TypeSpec::new().extension_name().is_err());
        assert!(geoarrow(GeometryType::Geometry).extension_name().is_err());
        assert!(geoarrow(GeometryType::GeometryCollection)
            .extension_name()
            .is_err());
    }

    #[test]
    fn extension_name_ignores_non_identity_fields() {
        let base = point().extension_name().unwrap();
        assert_eq!(full_native().extension_name().unwrap(), base);
    }

    #[test]
    fn extension_name_bijection() {
        for name in [
            "geoarrow.wkb",
            "geoarrow.wkt",
            "geoarrow.point",
            "geoarrow.linestring",
            "geoarrow.polygon",
            "geoarrow.multipoint",
            "geoarrow.multilinestring",
            "geoarrow.multipolygon",
        ] {
            let spec = TypeSpec::from_extension_name(name).unwrap();
            assert_eq!(spec.extension_name().unwrap(), name);
        }
        assert!(TypeSpec::from_extension_name("geoarrow.box2d").is_err());
    }

    #[test]
    fn extension_metadata_requires_specified_fields() {
        assert!(point().extension_metadata().is_err());
        assert_eq!(
            point().with_defaults().extension_metadata().unwrap(),
            "{}"
        );
    }

    #[test]
    fn extension_metadata_round_trip() {
        let crs = Crs::from_json_value(json!({"id": {"authority": "EPSG", "code": 32760}}));
        let spec = point()
            .with_edges(Edges::Spherical)
            .with_crs(crs.clone());
        let metadata = spec.extension_metadata().unwrap();

        let parsed = TypeSpec::from_extension_metadata(Some(&metadata)).unwrap();
        assert_eq!(parsed.edges(), Edges::Spherical);
        assert_eq!(parsed.crs().crs(), Some(&crs));
        assert!(!parsed.encoding().is_specified());
    }

    #[test]
    fn is_partial() {
        assert!(TypeSpec::new().is_partial());
        assert!(wkb().is_partial());
        assert!(!wkb().with_defaults().is_partial());
        assert!(point().is_partial());
        assert!(!point().with_defaults().is_partial());
        assert!(geoarrow(GeometryType::Unspecified).with_defaults().is_partial());
    }

    #[test]
    fn type_spec_conflicting_parts() {
        let err = type_spec([point(), linestring()]).unwrap_err();
        assert!(matches!(
            err,
            GeoArrowError::Overspecified {
                field: "geometry type",
                ..
            }
        ));
    }

    #[test]
    fn override_unsets() {
        let spec = full_native().with_edges(Edges::Unspecified);
        assert!(!spec.edges().is_specified());
        let spec = spec.with_crs(CrsSpec::Unspecified);
        assert!(!spec.crs().is_specified());
    }

    #[test]
    fn display_lists_specified_fields() {
        assert_eq!(TypeSpec::new().to_string(), "type_spec()");
        assert_eq!(
            point().to_string(),
            "type_spec(encoding=geoarrow, geometry_type=point)"
        );
    }
}
