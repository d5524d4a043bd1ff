use crate::combine::impl_spec_enum;

/// The encoding of a GeoArrow geometry column.
///
/// A column is either _serialized_, carrying well-known text or well-known
/// binary values whose structure lives in the bytes rather than in the Arrow
/// type, or _native_, using the GeoArrow nested list layout where the Arrow
/// type itself describes the geometry structure.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Encoding {
    /// Encoding has not been specified.
    #[default]
    Unspecified,

    /// Well-known binary in a `Binary` array, with a maximum of 2 GB of data
    /// per array chunk.
    Wkb,

    /// Well-known binary in a `LargeBinary` array.
    LargeWkb,

    /// Well-known binary in a `BinaryView` array.
    WkbView,

    /// Well-known text in a `Utf8` array, with a maximum of 2 GB of data per
    /// array chunk.
    Wkt,

    /// Well-known text in a `LargeUtf8` array.
    LargeWkt,

    /// Well-known text in a `Utf8View` array.
    WktView,

    /// GeoArrow native nested list encoding.
    GeoArrow,
}

impl_spec_enum!(
    Encoding,
    "encoding",
    (Unspecified, "unspecified"),
    (Wkb, "wkb"),
    (LargeWkb, "large_wkb"),
    (WkbView, "wkb_view"),
    (Wkt, "wkt"),
    (LargeWkt, "large_wkt"),
    (WktView, "wkt_view"),
    (GeoArrow, "geoarrow"),
);

impl Encoding {
    /// Whether this encoding stores geometries as serialized WKT or WKB
    /// values rather than in the GeoArrow native layout.
    pub fn is_serialized(&self) -> bool {
        !matches!(self, Encoding::Unspecified | Encoding::GeoArrow)
    }

    /// The least-specific encoding to which values of both input encodings
    /// can be cast, or `None` when no such encoding is defined.
    ///
    /// Mixing a serialized encoding with the native encoding falls back to
    /// WKB: every geometry can be serialized, but not every geometry fits a
    /// given native layout.
    pub fn common2(self, other: Self) -> Option<Self> {
        use Encoding::*;
        match (self, other) {
            (value, Unspecified) | (Unspecified, value) => Some(value),
            _ if self == other => Some(self),
            (Wkb, LargeWkb) | (LargeWkb, Wkb) => Some(LargeWkb),
            (Wkb, Wkt) | (Wkt, Wkb) => Some(Wkb),
            (Wkb, LargeWkt) | (LargeWkt, Wkb) => Some(LargeWkb),
            (Wkb, GeoArrow) | (GeoArrow, Wkb) => Some(Wkb),
            (Wkt, LargeWkt) | (LargeWkt, Wkt) => Some(LargeWkt),
            (Wkt, LargeWkb) | (LargeWkb, Wkt) => Some(LargeWkb),
            (Wkt, GeoArrow) | (GeoArrow, Wkt) => Some(Wkb),
            _ => None,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::error::GeoArrowError;

    #[test]
    fn serialized() {
        assert!(Encoding::Wkb.is_serialized());
        assert!(Encoding::LargeWkb.is_serialized());
        assert!(Encoding::WkbView.is_serialized());
        assert!(Encoding::Wkt.is_serialized());
        assert!(Encoding::LargeWkt.is_serialized());
        assert!(Encoding::WktView.is_serialized());
        assert!(!Encoding::GeoArrow.is_serialized());
        assert!(!Encoding::Unspecified.is_serialized());
    }

    #[test]
    fn coalesce() {
        assert_eq!(
            Encoding::Unspecified.coalesce2(Encoding::Wkb),
            Encoding::Wkb
        );
        assert_eq!(Encoding::Wkt.coalesce2(Encoding::Wkb), Encoding::Wkt);
        assert_eq!(
            Encoding::coalesce([Encoding::Unspecified, Encoding::Wkt, Encoding::Wkb]),
            Encoding::Wkt
        );
    }

    #[test]
    fn coalesce_unspecified() {
        assert_eq!(
            Encoding::Unspecified
                .coalesce_unspecified2(Encoding::GeoArrow)
                .unwrap(),
            Encoding::GeoArrow
        );
        assert_eq!(
            Encoding::GeoArrow
                .coalesce_unspecified2(Encoding::GeoArrow)
                .unwrap(),
            Encoding::GeoArrow
        );

        let err = Encoding::Wkb.coalesce_unspecified2(Encoding::Wkt).unwrap_err();
        assert!(matches!(
            err,
            GeoArrowError::Overspecified {
                field: "encoding",
                ..
            }
        ));
    }

    #[test]
    fn common() {
        assert_eq!(
            Encoding::Wkb.common2(Encoding::Unspecified),
            Some(Encoding::Wkb)
        );
        assert_eq!(
            Encoding::Wkb.common2(Encoding::LargeWkb),
            Some(Encoding::LargeWkb)
        );
        assert_eq!(Encoding::Wkt.common2(Encoding::Wkb), Some(Encoding::Wkb));
        assert_eq!(
            Encoding::LargeWkt.common2(Encoding::Wkb),
            Some(Encoding::LargeWkb)
        );
        assert_eq!(
            Encoding::GeoArrow.common2(Encoding::Wkb),
            Some(Encoding::Wkb)
        );
        assert_eq!(
            Encoding::GeoArrow.common2(Encoding::Wkt),
            Some(Encoding::Wkb)
        );
        assert_eq!(
            Encoding::Wkt.common2(Encoding::LargeWkt),
            Some(Encoding::LargeWkt)
        );

        // View encodings only combine with themselves.
        assert_eq!(Encoding::WkbView.common2(Encoding::Wkb), None);
        assert_eq!(
            Encoding::WkbView.common2(Encoding::WkbView),
            Some(Encoding::WkbView)
        );
    }

    #[test]
    fn from_str() {
        assert_eq!("wkb".parse::<Encoding>().unwrap(), Encoding::Wkb);
        assert_eq!("GEOARROW".parse::<Encoding>().unwrap(), Encoding::GeoArrow);
        assert_eq!(
            "Large_Wkt".parse::<Encoding>().unwrap(),
            Encoding::LargeWkt
        );
        assert!(matches!(
            "ewkb".parse::<Encoding>().unwrap_err(),
            GeoArrowError::UnknownName(_)
        ));
    }
}
