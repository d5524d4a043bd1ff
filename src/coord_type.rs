use crate::combine::impl_spec_enum;

/// The permitted GeoArrow coordinate representations.
///
/// GeoArrow permits coordinate values to either be `Interleaved`, where the
/// ordinates share a single buffer as XYXYXY, or `Separated`, where each
/// ordinate has its own buffer as XXXX and YYYY.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CoordType {
    /// Coordinate type has not been specified.
    #[default]
    Unspecified,

    /// Separated coordinates, stored as a struct with one child per
    /// ordinate.
    Separated,

    /// Interleaved coordinates, stored as a fixed-size list.
    Interleaved,
}

impl_spec_enum!(
    CoordType,
    "coord type",
    (Unspecified, "unspecified"),
    (Separated, "separated"),
    (Interleaved, "interleaved"),
);

impl CoordType {
    /// The common coordinate type of the two inputs, or `None` when both are
    /// specified but differ.
    ///
    /// There is no promotion between coordinate representations; callers
    /// must treat `None` as an error.
    pub fn common2(self, other: Self) -> Option<Self> {
        match (self, other) {
            (value, CoordType::Unspecified) | (CoordType::Unspecified, value) => Some(value),
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
            CoordType::Separated.common2(CoordType::Unspecified),
            Some(CoordType::Separated)
        );
        assert_eq!(
            CoordType::Interleaved.common2(CoordType::Interleaved),
            Some(CoordType::Interleaved)
        );
        assert_eq!(CoordType::Separated.common2(CoordType::Interleaved), None);
    }

    #[test]
    fn from_str() {
        assert_eq!(
            "separated".parse::<CoordType>().unwrap(),
            CoordType::Separated
        );
        assert_eq!(
            "Interleaved".parse::<CoordType>().unwrap(),
            CoordType::Interleaved
        );
        assert!("struct".parse::<CoordType>().is_err());
    }
}
