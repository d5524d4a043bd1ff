//! Defines [`GeoArrowError`], representing all errors returned by this crate.

use arrow_schema::ArrowError;
use thiserror::Error;

/// Enum with all errors in this crate.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum GeoArrowError {
    /// [ArrowError]
    #[error(transparent)]
    Arrow(#[from] ArrowError),

    /// CRS related error
    #[error("CRS related error: {0}")]
    Crs(String),

    /// A type specification is missing a field required by the requested
    /// operation.
    #[error("Incomplete type specification: {0}")]
    IncompleteType(String),

    /// Storage data type with no valid GeoArrow interpretation.
    #[error("Data not conforming to GeoArrow specification: {0}")]
    InvalidGeoArrow(String),

    /// Two values with no common type to which both can be cast.
    #[error("{left} and {right} have no common {field}")]
    NoCommonType {
        /// The field being merged.
        field: &'static str,
        /// Left-hand value.
        left: String,
        /// Right-hand value.
        right: String,
    },

    /// Two differing values supplied for a field that may be specified at
    /// most once.
    #[error("Overspecified {field}: {left} and {right} are both specified")]
    Overspecified {
        /// The field being merged.
        field: &'static str,
        /// Left-hand value.
        left: String,
        /// Right-hand value.
        right: String,
    },

    /// Extension type registration or unregistration failure.
    #[error("Extension type registry error: {0}")]
    Registry(String),

    /// [serde_json::Error]
    #[error(transparent)]
    Serde(#[from] serde_json::Error),

    /// String that does not name a known enum member or extension type.
    #[error("Unknown name: {0}")]
    UnknownName(String),
}

/// Crate-specific result type.
pub type GeoArrowResult<T> = std::result::Result<T, GeoArrowError>;

impl From<GeoArrowError> for ArrowError {
    /// Many APIs where we pass in a callback into the Arrow crate require the returned error type
    /// to be ArrowError, so implementing this `From` makes the conversion less verbose there.
    fn from(err: GeoArrowError) -> Self {
        match err {
            GeoArrowError::Arrow(err) => err,
            _ => ArrowError::ExternalError(Box::new(err)),
        }
    }
}
