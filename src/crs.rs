use std::fmt::Display;
use std::str::FromStr;
use std::sync::OnceLock;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{GeoArrowError, GeoArrowResult};

/// An immutable coordinate reference system value backed by
/// [PROJJSON](https://proj.org/specifications/projjson.html).
///
/// Two values compare equal when their parsed JSON content is equal,
/// regardless of the textual form they were created from.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct Crs {
    value: Value,
}

impl Crs {
    /// Construct from a PROJJSON string.
    pub fn from_json(crs_json: &str) -> GeoArrowResult<Self> {
        Ok(Self {
            value: serde_json::from_str(crs_json)?,
        })
    }

    /// Construct from a parsed PROJJSON object.
    pub fn from_json_value(value: Value) -> Self {
        Self { value }
    }

    /// Construct from UTF-8 encoded PROJJSON bytes.
    pub fn from_json_bytes(crs_json: &[u8]) -> GeoArrowResult<Self> {
        let crs_json = std::str::from_utf8(crs_json)
            .map_err(|err| GeoArrowError::Crs(format!("CRS bytes are not valid UTF-8: {err}")))?;
        Self::from_json(crs_json)
    }

    /// Construct from any value able to express itself as PROJJSON.
    pub fn create<T: ToCrsJson + ?Sized>(value: &T) -> GeoArrowResult<Self> {
        Ok(Self {
            value: value.to_crs_json()?,
        })
    }

    /// Returns the PROJJSON representation of this coordinate reference
    /// system as a JSON string.
    pub fn to_json(&self) -> String {
        self.value.to_string()
    }

    /// Returns the parsed PROJJSON representation of this coordinate
    /// reference system.
    pub fn to_json_value(&self) -> &Value {
        &self.value
    }

    /// Consume self, returning the parsed PROJJSON representation.
    pub fn into_json_value(self) -> Value {
        self.value
    }

    /// The `AUTHORITY:CODE` identifier of this CRS, if its PROJJSON carries
    /// one (e.g. `"OGC:CRS84"`).
    pub fn authority_code(&self) -> Option<String> {
        let id = self.value.get("id")?;
        let authority = id.get("authority")?.as_str()?;
        let code = id.get("code")?;
        match code {
            Value::String(code) => Some(format!("{authority}:{code}")),
            Value::Number(code) => Some(format!("{authority}:{code}")),
            _ => None,
        }
    }

    /// The longitude/latitude CRS definition (OGC:CRS84).
    ///
    /// This is the CRS implied for geographic data with no further
    /// information: axis order is longitude, then latitude.
    pub fn ogc_crs84() -> Self {
        static OGC_CRS84: OnceLock<Value> = OnceLock::new();
        let value = OGC_CRS84.get_or_init(|| serde_json::from_str(OGC_CRS84_JSON).unwrap());
        Self {
            value: value.clone(),
        }
    }
}

impl Display for Crs {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if let Some(authority_code) = self.authority_code() {
            write!(f, "Crs({authority_code})")
        } else {
            let json = self.to_json();
            let truncated = json.char_indices().nth(80).map(|(i, _)| i);
            write!(f, "Crs({})", &json[..truncated.unwrap_or(json.len())])
        }
    }
}

impl FromStr for Crs {
    type Err = GeoArrowError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_json(s)
    }
}

impl From<Value> for Crs {
    fn from(value: Value) -> Self {
        Self::from_json_value(value)
    }
}

/// Conversion capability for values that can express themselves as a
/// PROJJSON coordinate reference system.
///
/// Implement this for a concrete CRS type (e.g. a wrapper around a PROJ
/// binding) to pass it anywhere this crate accepts a CRS.
pub trait ToCrsJson {
    /// Returns the parsed PROJJSON representation of this value.
    fn to_crs_json(&self) -> GeoArrowResult<Value>;
}

impl ToCrsJson for Crs {
    fn to_crs_json(&self) -> GeoArrowResult<Value> {
        Ok(self.value.clone())
    }
}

impl ToCrsJson for Value {
    fn to_crs_json(&self) -> GeoArrowResult<Value> {
        Ok(self.clone())
    }
}

impl ToCrsJson for str {
    fn to_crs_json(&self) -> GeoArrowResult<Value> {
        Ok(serde_json::from_str(self)?)
    }
}

impl ToCrsJson for String {
    fn to_crs_json(&self) -> GeoArrowResult<Value> {
        self.as_str().to_crs_json()
    }
}

/// The coordinate reference system field of a type specification.
///
/// This field is three-valued: a CRS can be left unspecified (no opinion,
/// defer to a merge partner), declared absent (explicitly no CRS), or
/// present. [`Absent`][Self::Absent] is a specified value; merging an
/// absent CRS with a present one is a conflict, not a fill-in.
#[derive(Debug, Default, Clone, PartialEq, Eq, Hash)]
pub enum CrsSpec {
    /// No opinion about the CRS.
    #[default]
    Unspecified,

    /// Explicitly no CRS.
    Absent,

    /// A concrete CRS.
    Present(Crs),
}

impl CrsSpec {
    /// Whether this value carries information, as opposed to the
    /// [`Unspecified`][Self::Unspecified] sentinel.
    pub fn is_specified(&self) -> bool {
        !matches!(self, CrsSpec::Unspecified)
    }

    /// Return `self`, or `default` if `self` is unspecified.
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
    pub fn coalesce_unspecified2(self, other: Self) -> GeoArrowResult<Self> {
        if self == other || !other.is_specified() {
            Ok(self)
        } else if !self.is_specified() {
            Ok(other)
        } else {
            Err(GeoArrowError::Overspecified {
                field: "crs",
                left: self.to_string(),
                right: other.to_string(),
            })
        }
    }

    /// The common CRS of the two inputs.
    ///
    /// There is no notion of a cast between coordinate reference systems, so
    /// this is the same operation as
    /// [`coalesce_unspecified2`][Self::coalesce_unspecified2].
    pub fn common2(self, other: Self) -> GeoArrowResult<Self> {
        self.coalesce_unspecified2(other)
    }

    /// Fold [`coalesce2`][Self::coalesce2] over a sequence, starting from
    /// [`Unspecified`][Self::Unspecified]. Earlier values win.
    pub fn coalesce(values: impl IntoIterator<Item = Self>) -> Self {
        values
            .into_iter()
            .fold(CrsSpec::Unspecified, |acc, value| acc.coalesce2(value))
    }

    /// Fold [`coalesce_unspecified2`][Self::coalesce_unspecified2] over a
    /// sequence, starting from [`Unspecified`][Self::Unspecified].
    pub fn coalesce_unspecified(
        values: impl IntoIterator<Item = Self>,
    ) -> GeoArrowResult<Self> {
        values
            .into_iter()
            .try_fold(CrsSpec::Unspecified, |acc, value| {
                acc.coalesce_unspecified2(value)
            })
    }

    /// The concrete CRS, if one is present.
    pub fn crs(&self) -> Option<&Crs> {
        match self {
            CrsSpec::Present(crs) => Some(crs),
            _ => None,
        }
    }
}

impl Display for CrsSpec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CrsSpec::Unspecified => write!(f, "unspecified"),
            CrsSpec::Absent => write!(f, "none"),
            CrsSpec::Present(crs) => write!(f, "{crs}"),
        }
    }
}

impl From<Crs> for CrsSpec {
    fn from(value: Crs) -> Self {
        CrsSpec::Present(value)
    }
}

impl From<Option<Crs>> for CrsSpec {
    fn from(value: Option<Crs>) -> Self {
        match value {
            Some(crs) => CrsSpec::Present(crs),
            None => CrsSpec::Absent,
        }
    }
}

const OGC_CRS84_JSON: &str = r#"{
  "$schema": "https://proj.org/schemas/v0.7/projjson.schema.json",
  "type": "GeographicCRS",
  "name": "WGS 84 (CRS84)",
  "datum_ensemble": {
    "name": "World Geodetic System 1984 ensemble",
    "members": [
      {
        "name": "World Geodetic System 1984 (Transit)",
        "id": {"authority": "EPSG", "code": 1166}
      },
      {
        "name": "World Geodetic System 1984 (G730)",
        "id": {"authority": "EPSG", "code": 1152}
      },
      {
        "name": "World Geodetic System 1984 (G873)",
        "id": {"authority": "EPSG", "code": 1153}
      },
      {
        "name": "World Geodetic System 1984 (G1150)",
        "id": {"authority": "EPSG", "code": 1154}
      },
      {
        "name": "World Geodetic System 1984 (G1674)",
        "id": {"authority": "EPSG", "code": 1155}
      },
      {
        "name": "World Geodetic System 1984 (G1762)",
        "id": {"authority": "EPSG", "code": 1156}
      },
      {
        "name": "World Geodetic System 1984 (G2139)",
        "id": {"authority": "EPSG", "code": 1309}
      }
    ],
    "ellipsoid": {
      "name": "WGS 84",
      "semi_major_axis": 6378137,
      "inverse_flattening": 298.257223563
    },
    "accuracy": "2.0",
    "id": {"authority": "EPSG", "code": 6326}
  },
  "coordinate_system": {
    "subtype": "ellipsoidal",
    "axis": [
      {
        "name": "Geodetic longitude",
        "abbreviation": "Lon",
        "direction": "east",
        "unit": "degree"
      },
      {
        "name": "Geodetic latitude",
        "abbreviation": "Lat",
        "direction": "north",
        "unit": "degree"
      }
    ]
  },
  "scope": "Not known.",
  "area": "World.",
  "bbox": {
    "south_latitude": -90,
    "west_longitude": -180,
    "north_latitude": 90,
    "east_longitude": 180
  },
  "id": {"authority": "OGC", "code": "CRS84"}
}"#;
