use serde::{Deserialize, Serialize};

use crate::combine::impl_spec_enum;

/// The edge interpretation between explicitly defined vertices.
///
/// This does not affect format conversions (e.g., parsing `geoarrow.wkb` as
/// `geoarrow.linestring`), but does affect distance, intersection, bounding,
/// overlay, length, and area calculations. In the extension metadata the
/// `edges` key is omitted to indicate planar edges or set to `"spherical"`.
#[derive(Debug, Default, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Edges {
    /// Edge interpretation has not been specified. Never written to
    /// extension metadata.
    #[default]
    #[serde(rename = "unspecified")]
    Unspecified,

    /// Edges are Cartesian lines on a plane, following the language of
    /// [Simple features access](https://www.opengeospatial.org/standards/sfa).
    #[serde(rename = "planar")]
    Planar,

    /// Edges in the longitude-latitude dimensions follow the shortest
    /// distance between vertices approximated as the shortest distance
    /// between the vertices on a perfect sphere.
    #[serde(rename = "spherical")]
    Spherical,
}

impl_spec_enum!(
    Edges,
    "edges",
    (Unspecified, "unspecified"),
    (Planar, "planar"),
    (Spherical, "spherical"),
);

impl Edges {
    /// The common edge interpretation of the two inputs, or `None` when both
    /// are specified but differ.
    ///
    /// Reinterpreting edges changes where lines lie on the globe, so there
    /// is no promotion; callers must treat `None` as an error.
    pub fn common2(self, other: Self) -> Option<Self> {
        match (self, other) {
            (value, Edges::Unspecified) | (Edges::Unspecified, value) => Some(value),
            _ if self == other => Some(self),
            _ => None,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn common() {
        assert_eq!(
            Edges::Planar.common2(Edges::Unspecified),
            Some(Edges::Planar)
        );
        assert_eq!(
            Edges::Spherical.common2(Edges::Spherical),
            Some(Edges::Spherical)
        );
        assert_eq!(Edges::Planar.common2(Edges::Spherical), None);
    }

    #[test]
    fn serde_names() {
        assert_eq!(
            serde_json::to_string(&Edges::Spherical).unwrap(),
            r#""spherical""#
        );
        assert_eq!(
            serde_json::from_str::<Edges>(r#""planar""#).unwrap(),
            Edges::Planar
        );
    }

    #[test]
    fn from_str() {
        assert_eq!("planar".parse::<Edges>().unwrap(), Edges::Planar);
        assert_eq!("Spherical".parse::<Edges>().unwrap(), Edges::Spherical);
        assert!("geodesic".parse::<Edges>().is_err());
    }
}
