use crate::combine::impl_spec_enum;

/// The ordinate set of a GeoArrow geometry column.
///
/// [`Unknown`][Self::Unknown] is itself a real value meaning "known to be
/// mixed or unknown", as used by serialized encodings whose dimensions live
/// in the bytes. It is distinct from the [`Unspecified`][Self::Unspecified]
/// sentinel.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dimension {
    /// Dimensions have not been specified.
    #[default]
    Unspecified,

    /// Mixed or unknown dimensions.
    Unknown,

    /// Two-dimensional.
    XY,

    /// Three-dimensional.
    XYZ,

    /// XYM (2D with measure).
    XYM,

    /// XYZM (3D with measure).
    XYZM,
}

impl_spec_enum!(
    Dimension,
    "dimensions",
    (Unspecified, "unspecified"),
    (Unknown, "unknown"),
    (XY, "xy"),
    (XYZ, "xyz"),
    (XYM, "xym"),
    (XYZM, "xyzm"),
);

impl Dimension {
    /// The least-specific dimensions to which values of both inputs can be
    /// cast.
    ///
    /// Ordinate sets promote toward their superset; combinations without a
    /// promotion fall back to [`Unknown`][Self::Unknown].
    pub fn common2(self, other: Self) -> Self {
        use Dimension::*;
        match (self, other) {
            (value, Unspecified) | (Unspecified, value) => value,
            _ if self == other => self,
            (XY, XYZ) | (XYZ, XY) => XYZ,
            (XY, XYM) | (XYM, XY) => XYM,
            (XY, XYZM) | (XYZM, XY) => XYZM,
            (XYZ, XYM) | (XYM, XYZ) => XYZM,
            (XYZ, XYZM) | (XYZM, XYZ) => XYZM,
            (XYM, XYZM) | (XYZM, XYM) => XYZM,
            _ => Unknown,
        }
    }

    /// Fold [`common2`][Self::common2] over a sequence, starting from
    /// [`Unspecified`][Self::Unspecified].
    pub fn common(values: impl IntoIterator<Item = Self>) -> Self {
        values
            .into_iter()
            .fold(Dimension::Unspecified, |acc, value| acc.common2(value))
    }

    /// Returns the number of dimensions, or `None` for the unspecified and
    /// unknown values.
    pub fn size(&self) -> Option<usize> {
        match self {
            Dimension::XY => Some(2),
            Dimension::XYZ => Some(3),
            Dimension::XYM => Some(3),
            Dimension::XYZM => Some(4),
            Dimension::Unspecified | Dimension::Unknown => None,
        }
    }

    /// Returns the ordinate letters in order (e.g. `"xyz"`), or `None` for
    /// the unspecified and unknown values.
    ///
    /// These letters name the coordinate fields of the native storage
    /// layout: one struct field per letter for separated coordinates, or a
    /// single fixed-size-list field named by the concatenated letters for
    /// interleaved coordinates.
    pub fn letters(&self) -> Option<&'static str> {
        match self {
            Dimension::XY => Some("xy"),
            Dimension::XYZ => Some("xyz"),
            Dimension::XYM => Some("xym"),
            Dimension::XYZM => Some("xyzm"),
            Dimension::Unspecified | Dimension::Unknown => None,
        }
    }
}
