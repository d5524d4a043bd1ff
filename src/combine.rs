//! Shared merge semantics for partially specified values.
//!
//! Every enum in this crate carries an `Unspecified` sentinel. The macro below
//! generates the operations that treat that sentinel uniformly: filling in a
//! default (`coalesce2`), merging values that must agree (`coalesce_unspecified2`),
//! the corresponding iterator folds, and string conversions.

macro_rules! impl_spec_enum {
    (
        $type:ident,
        $field:literal,
        $(($variant:ident, $name:literal)),+ $(,)?
    ) => {
        impl $type {
            /// Whether this value carries information, as opposed to the
            /// [`Unspecified`][Self::Unspecified] sentinel.
            pub fn is_specified(&self) -> bool {
                !matches!(self, $type::Unspecified)
            }

            /// Return `self`, or `default` if `self` is unspecified.
            ///
            /// This is a pure fill-in, not a merge: `default` is ignored
            /// whenever `self` is specified, even if the two differ.
            pub fn coalesce2(self, default: Self) -> Self {
                if self.is_specified() {
                    self
                } else {
                    default
                }
            }

            /// Merge two values of which at most one may be specified.
            ///
            /// Returns the specified value (or either if both are equal), and
            /// errors when both sides are specified but differ.
            pub fn coalesce_unspecified2(self, other: Self) -> $crate::error::GeoArrowResult<Self> {
                if self == other || !other.is_specified() {
                    Ok(self)
                } else if !self.is_specified() {
                    Ok(other)
                } else {
                    Err($crate::error::GeoArrowError::Overspecified {
                        field: $field,
                        left: self.to_string(),
                        right: other.to_string(),
                    })
                }
            }

            /// Fold [`coalesce2`][Self::coalesce2] over a sequence, starting
            /// from [`Unspecified`][Self::Unspecified]. Earlier values win.
            pub fn coalesce(values: impl IntoIterator<Item = Self>) -> Self {
                values
                    .into_iter()
                    .fold($type::Unspecified, |acc, value| acc.coalesce2(value))
            }

            /// Fold [`coalesce_unspecified2`][Self::coalesce_unspecified2]
            /// over a sequence, starting from [`Unspecified`][Self::Unspecified].
            pub fn coalesce_unspecified(
                values: impl IntoIterator<Item = Self>,
            ) -> $crate::error::GeoArrowResult<Self> {
                values
                    .into_iter()
                    .try_fold($type::Unspecified, |acc, value| {
                        acc.coalesce_unspecified2(value)
                    })
            }
        }

        impl std::fmt::Display for $type {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                let name = match self {
                    $($type::$variant => $name,)+
                };
                write!(f, "{name}")
            }
        }

        impl std::str::FromStr for $type {
            type Err = $crate::error::GeoArrowError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                $(
                    if s.eq_ignore_ascii_case($name) {
                        return Ok($type::$variant);
                    }
                )+
                Err($crate::error::GeoArrowError::UnknownName(format!(
                    "{} {s:?}",
                    $field
                )))
            }
        }
    };
}

pub(crate) use impl_spec_enum;
