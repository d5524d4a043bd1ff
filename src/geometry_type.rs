use crate::combine::impl_spec_enum;
use crate::error::{GeoArrowError, GeoArrowResult};
use crate::Dimension;

/// The geometry type of a GeoArrow geometry column.
///
/// The discriminants of the real geometry types are the well-known binary
/// geometry type codes (0 through 7). [`Geometry`][Self::Geometry] is itself
/// a real value meaning "known to be heterogeneous", distinct from the
/// [`Unspecified`][Self::Unspecified] sentinel.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(i8)]
pub enum GeometryType {
    /// Geometry type has not been specified.
    #[default]
    Unspecified = -1,

    /// Heterogeneous or otherwise unconstrained geometry.
    Geometry = 0,

    /// Point geometry type.
    Point = 1,

    /// Linestring geometry type.
    LineString = 2,

    /// Polygon geometry type.
    Polygon = 3,

    /// Multipoint geometry type.
    MultiPoint = 4,

    /// Multilinestring geometry type.
    MultiLineString = 5,

    /// Multipolygon geometry type.
    MultiPolygon = 6,

    /// Geometrycollection geometry type.
    GeometryCollection = 7,
}

impl_spec_enum!(
    GeometryType,
    "geometry type",
    (Unspecified, "unspecified"),
    (Geometry, "geometry"),
    (Point, "point"),
    (LineString, "linestring"),
    (Polygon, "polygon"),
    (MultiPoint, "multipoint"),
    (MultiLineString, "multilinestring"),
    (MultiPolygon, "multipolygon"),
    (GeometryCollection, "geometrycollection"),
);

impl GeometryType {
    /// The least-specific geometry type to which values of both input types
    /// can be cast.
    ///
    /// Single geometry types promote to their multi counterpart; anything
    /// else falls back to [`Geometry`][Self::Geometry].
    pub fn common2(self, other: Self) -> Self {
        use GeometryType::*;
        match (self, other) {
            (value, Unspecified) | (Unspecified, value) => value,
            _ if self == other => self,
            (Point, MultiPoint) | (MultiPoint, Point) => MultiPoint,
            (LineString, MultiLineString) | (MultiLineString, LineString) => MultiLineString,
            (Polygon, MultiPolygon) | (MultiPolygon, Polygon) => MultiPolygon,
            _ => Geometry,
        }
    }

    /// Fold [`common2`][Self::common2] over a sequence, starting from
    /// [`Unspecified`][Self::Unspecified].
    pub fn common(values: impl IntoIterator<Item = Self>) -> Self {
        values
            .into_iter()
            .fold(GeometryType::Unspecified, |acc, value| acc.common2(value))
    }

    /// The ISO well-known binary type code for this geometry type with the
    /// given dimensions, where Z, M, and ZM variants are offset by 1000,
    /// 2000, and 3000 respectively.
    pub fn wkb_type_id(&self, dim: Dimension) -> GeoArrowResult<u32> {
        if !self.is_specified() {
            return Err(GeoArrowError::IncompleteType(
                "Can't compute WKB type id for unspecified geometry type".to_string(),
            ));
        }
        let offset = match dim {
            Dimension::XY => 0,
            Dimension::XYZ => 1000,
            Dimension::XYM => 2000,
            Dimension::XYZM => 3000,
            dim => {
                return Err(GeoArrowError::IncompleteType(format!(
                    "Can't compute WKB type id for dimension {dim}"
                )))
            }
        };
        Ok(offset + *self as i8 as u32)
    }

    /// Split an ISO well-known binary type code into its geometry type and
    /// dimensions.
    pub fn from_wkb_type_id(type_id: u32) -> GeoArrowResult<(Self, Dimension)> {
        use GeometryType::*;
        let dim = match type_id / 1000 {
            0 => Dimension::XY,
            1 => Dimension::XYZ,
            2 => Dimension::XYM,
            3 => Dimension::XYZM,
            _ => {
                return Err(GeoArrowError::UnknownName(format!(
                    "WKB geometry type id {type_id}"
                )))
            }
        };
        let geometry_type = match type_id % 1000 {
            0 => Geometry,
            1 => Point,
            2 => LineString,
            3 => Polygon,
            4 => MultiPoint,
            5 => MultiLineString,
            6 => MultiPolygon,
            7 => GeometryCollection,
            _ => {
                return Err(GeoArrowError::UnknownName(format!(
                    "WKB geometry type id {type_id}"
                )))
            }
        };
        Ok((geometry_type, dim))
    }
}
