//! GeoArrow geometry type specifications and their Arrow storage layouts.
//!
//! This crate implements the type-level core of the
//! [GeoArrow](https://geoarrow.org) specification: partial, mergeable
//! descriptions of a geometry column ([`TypeSpec`]) and the deterministic,
//! bidirectional mapping between such a description and a concrete Arrow
//! storage type tagged with an extension name and extension metadata
//! ([`GeoArrowType`]).
//!
//! A geometry column is described by six independent properties, each with
//! an explicit unspecified state: the [`Encoding`] (serialized WKT/WKB or
//! the GeoArrow native layout), the [`GeometryType`], the [`Dimension`]s,
//! the [`CoordType`], the [`Edges`] interpretation, and the coordinate
//! reference system ([`CrsSpec`]). Partial descriptions from different
//! sources are combined with `coalesce` (fill gaps), `coalesce_unspecified`
//! (merge disjoint opinions loudly), and `common` (compute a cast target,
//! e.g. falling back to WKB when mixing points with polygons).
//!
//! ```
//! use geoarrow_types::{point, Dimension, GeoArrowType};
//!
//! let spec = point().with_dimension(Dimension::XYZ);
//! let point_type = GeoArrowType::try_new(spec).unwrap();
//! let field = point_type.to_field("geometry", true);
//!
//! assert_eq!(field.metadata()["ARROW:extension:name"], "geoarrow.point");
//! assert_eq!(GeoArrowType::try_from(&field).unwrap(), point_type);
//! ```

#![warn(missing_docs)]

mod combine;
mod coord_type;
mod crs;
mod datatype;
mod dimension;
mod edges;
mod encoding;
pub mod error;
mod geometry_type;
mod metadata;
mod registry;
mod type_spec;

pub use coord_type::CoordType;
pub use crs::{Crs, CrsSpec, ToCrsJson};
pub use datatype::{storage_type, GeoArrowType};
pub use dimension::Dimension;
pub use edges::Edges;
pub use encoding::Encoding;
pub use error::{GeoArrowError, GeoArrowResult};
pub use geometry_type::GeometryType;
pub use metadata::Metadata;
pub use registry::{global_registry, ExtensionTypeRegistry, RegistrationState};
pub use type_spec::{
    geoarrow, large_wkb, large_wkt, linestring, multilinestring, multipoint, multipolygon, point,
    polygon, type_spec, wkb, wkb_view, wkt, wkt_view, TypeSpec,
};
