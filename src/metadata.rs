use arrow_schema::extension::EXTENSION_TYPE_METADATA_KEY;
use arrow_schema::Field;
use serde::{Deserialize, Deserializer, Serialize};

use crate::crs::{Crs, CrsSpec};
use crate::error::GeoArrowResult;
use crate::Edges;

/// A GeoArrow metadata object following the extension metadata [defined by
/// the GeoArrow specification](https://geoarrow.org/extension-types).
///
/// This is the JSON side channel of a GeoArrow field: it carries only the
/// information that the storage type cannot, namely the edge interpretation
/// and the coordinate reference system. It is serialized to JSON when a
/// type is exported to an Arrow field and deserialized when imported from
/// one.
#[derive(Default, Debug, Clone, PartialEq, Eq, Hash)]
pub struct Metadata {
    crs: CrsSpec,
    edges: Edges,
}

/// Wire representation of [Metadata].
///
/// The double `Option` on `crs` distinguishes a missing key (no opinion)
/// from an explicit `null` (no CRS). Unknown keys are ignored rather than
/// rejected.
#[derive(Default, Serialize, Deserialize)]
struct RawMetadata {
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "deserialize_some"
    )]
    crs: Option<Option<Crs>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    edges: Option<Edges>,
}

fn deserialize_some<'de, D>(deserializer: D) -> Result<Option<Option<Crs>>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<Crs>::deserialize(deserializer).map(Some)
}

impl Metadata {
    /// Creates a new [`Metadata`] object.
    pub fn new(crs: CrsSpec, edges: Edges) -> Self {
        Self { crs, edges }
    }

    /// The coordinate reference system field.
    pub fn crs(&self) -> &CrsSpec {
        &self.crs
    }

    /// The edge interpretation field.
    pub fn edges(&self) -> Edges {
        self.edges
    }

    /// Serialize to the extension metadata JSON object.
    ///
    /// The output is always a valid JSON object. The `edges` key is present
    /// iff the edge interpretation is spherical and the `crs` key iff a CRS
    /// is present, so planar, CRS-less metadata serializes as `"{}"`.
    pub fn serialize(&self) -> String {
        let raw = RawMetadata {
            crs: self.crs.crs().map(|crs| Some(crs.clone())),
            edges: matches!(self.edges, Edges::Spherical).then_some(Edges::Spherical),
        };
        serde_json::to_string(&raw).unwrap()
    }

    /// Deserialize from extension metadata JSON.
    ///
    /// A missing key leaves the corresponding field unspecified; an explicit
    /// `"crs": null` declares the CRS absent. Missing or empty input
    /// deserializes to the all-unspecified default.
    pub fn deserialize<S: AsRef<str>>(metadata: Option<S>) -> GeoArrowResult<Self> {
        let metadata = match &metadata {
            Some(metadata) if !metadata.as_ref().trim().is_empty() => metadata.as_ref(),
            _ => return Ok(Default::default()),
        };

        let raw: RawMetadata = serde_json::from_str(metadata)?;
        let crs = match raw.crs {
            None => CrsSpec::Unspecified,
            Some(None) => CrsSpec::Absent,
            Some(Some(crs)) => CrsSpec::Present(crs),
        };
        let edges = match raw.edges {
            None => Edges::Unspecified,
            Some(edges) => edges,
        };
        Ok(Self { crs, edges })
    }
}

impl TryFrom<&Field> for Metadata {
    type Error = crate::error::GeoArrowError;

    fn try_from(value: &Field) -> GeoArrowResult<Self> {
        Self::deserialize(value.metadata().get(EXTENSION_TYPE_METADATA_KEY))
    }
}

#[cfg(test)]
mod test {
    use arrow_schema::DataType;
    use serde_json::json;

    use super::*;

    #[test]
    fn empty_metadata() {
        let metadata = Metadata::default();
        assert_eq!(metadata.serialize(), "{}");
        assert_eq!(
            Metadata::deserialize(Some("{}")).unwrap(),
            Metadata::default()
        );
        assert_eq!(
            Metadata::deserialize(None::<&str>).unwrap(),
            Metadata::default()
        );
        assert_eq!(Metadata::deserialize(Some("")).unwrap(), Metadata::default());
    }

    #[test]
    fn planar_and_absent_are_omitted() {
        let metadata = Metadata::new(CrsSpec::Absent, Edges::Planar);
        assert_eq!(metadata.serialize(), "{}");
    }

    #[test]
    fn spherical_edges() {
        let metadata = Metadata::new(CrsSpec::Absent, Edges::Spherical);
        assert_eq!(metadata.serialize(), r#"{"edges":"spherical"}"#);

        let parsed = Metadata::deserialize(Some(r#"{"edges":"spherical"}"#)).unwrap();
        assert_eq!(parsed.edges(), Edges::Spherical);
        assert_eq!(parsed.crs(), &CrsSpec::Unspecified);
    }

    #[test]
    fn crs_value() {
        let crs = Crs::from_json_value(json!({"id": {"authority": "EPSG", "code": 4326}}));
        let metadata = Metadata::new(CrsSpec::Present(crs.clone()), Edges::Planar);
        assert_eq!(
            metadata.serialize(),
            r#"{"crs":{"id":{"authority":"EPSG","code":4326}}}"#
        );

        let parsed = Metadata::deserialize(Some(metadata.serialize())).unwrap();
        assert_eq!(parsed.crs().crs(), Some(&crs));
        assert_eq!(parsed.edges(), Edges::Unspecified);
    }

    #[test]
    fn null_crs_is_absent() {
        let parsed = Metadata::deserialize(Some(r#"{"crs": null}"#)).unwrap();
        assert_eq!(parsed.crs(), &CrsSpec::Absent);

        let parsed = Metadata::deserialize(Some("{}")).unwrap();
        assert_eq!(parsed.crs(), &CrsSpec::Unspecified);
    }

    #[test]
    fn unknown_keys_are_ignored() {
        let parsed =
            Metadata::deserialize(Some(r#"{"edges":"spherical","future_key":[1,2,3]}"#)).unwrap();
        assert_eq!(parsed.edges(), Edges::Spherical);
    }

    #[test]
    fn from_field() {
        let field = Field::new("geometry", DataType::Binary, true).with_metadata(
            [(
                EXTENSION_TYPE_METADATA_KEY.to_string(),
                r#"{"edges":"spherical"}"#.to_string(),
            )]
            .into(),
        );
        let metadata = Metadata::try_from(&field).unwrap();
        assert_eq!(metadata.edges(), Edges::Spherical);

        let bare = Field::new("geometry", DataType::Binary, true);
        assert_eq!(Metadata::try_from(&bare).unwrap(), Metadata::default());
    }
}
