//! GeoJSON-like boundary document accepted by the converter.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::ConversionError;

const FEATURE_TYPE: &str = "Feature";
const POLYGON_TYPE: &str = "Polygon";
const MULTI_POLYGON_TYPE: &str = "MultiPolygon";

/// Parsed boundary file: an ordered list of features.
///
/// `P` is the type of the feature properties. By default the properties are kept as opaque JSON,
/// so every field present in the input ends up in the shape metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(bound(deserialize = "P: Deserialize<'de> + Default"))]
pub struct BoundaryDocument<P = Value> {
    /// Document type tag, usually `FeatureCollection`. Not interpreted.
    #[serde(rename = "type", default)]
    pub document_type: String,
    /// Features in the document order.
    pub features: Vec<FeatureItem<P>>,
}

/// Single feature of a boundary document.
///
/// The top level `type` is either a bare geometry type (`Polygon`, `MultiPolygon`) or `Feature`.
/// Coordinates are always read from `geometry`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(bound(deserialize = "P: Deserialize<'de> + Default"))]
pub struct FeatureItem<P = Value> {
    /// Geometry of the feature.
    #[serde(default)]
    pub geometry: GeometryDescriptor,
    /// Free form properties, at least a `tzid` for timezone boundaries.
    #[serde(default)]
    pub properties: P,
    /// Type tag of the feature.
    #[serde(rename = "type")]
    pub feature_type: String,
}

/// Geometry type tag and its still undecoded coordinates.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GeometryDescriptor {
    /// Geometry type tag.
    #[serde(rename = "type", default)]
    pub geometry_type: String,
    /// Nested coordinate arrays. Their shape depends on the geometry type.
    #[serde(default)]
    pub coordinates: Value,
}

/// Geometry kinds the converter understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GeometryKind {
    /// Array of rings.
    Polygon,
    /// Array of polygons.
    MultiPolygon,
}

impl GeometryKind {
    /// Parses a GeoJSON geometry type tag.
    pub fn from_type_tag(tag: &str) -> Option<Self> {
        match tag {
            POLYGON_TYPE => Some(Self::Polygon),
            MULTI_POLYGON_TYPE => Some(Self::MultiPolygon),
            _ => None,
        }
    }

    /// GeoJSON type tag of the kind.
    pub fn type_tag(&self) -> &'static str {
        match self {
            Self::Polygon => POLYGON_TYPE,
            Self::MultiPolygon => MULTI_POLYGON_TYPE,
        }
    }
}

/// Interpretation of the top level `type` of a feature.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeatureKind {
    /// The feature itself is a geometry of the given kind.
    Bare(GeometryKind),
    /// `Feature` wrapper. The kind is taken from the geometry type.
    Wrapped,
}

impl FeatureKind {
    /// Parses the top level `type` of a feature.
    pub fn from_type_tag(tag: &str) -> Option<Self> {
        match tag {
            FEATURE_TYPE => Some(Self::Wrapped),
            other => GeometryKind::from_type_tag(other).map(Self::Bare),
        }
    }
}

impl<P> FeatureItem<P> {
    /// Resolves the geometry kind of the feature.
    ///
    /// `index` is the position of the feature in its document and is only used for error
    /// reporting.
    pub fn geometry_kind(&self, index: usize) -> Result<GeometryKind, ConversionError> {
        match FeatureKind::from_type_tag(&self.feature_type) {
            Some(FeatureKind::Bare(kind)) => Ok(kind),
            Some(FeatureKind::Wrapped) => GeometryKind::from_type_tag(
                &self.geometry.geometry_type,
            )
            .ok_or_else(|| ConversionError::UnsupportedGeometryType {
                index,
                value: self.geometry.geometry_type.clone(),
            }),
            None => Err(ConversionError::UnsupportedFeatureType {
                index,
                value: self.feature_type.clone(),
            }),
        }
    }
}

impl FeatureItem<Value> {
    /// Timezone identifier of the feature, if the properties contain one.
    pub fn tzid(&self) -> Option<&str> {
        self.properties.get("tzid").and_then(Value::as_str)
    }
}
