//! Protobuf messages of the `polypb.v1` package and helpers to build and read them.

use bytes::Buf;
use prost::Message;
use serde::de::DeserializeOwned;

use crate::coordinates::{Position, Ring};
use crate::error::DecodeError;
use crate::metadata::MetadataFormat;

#[allow(missing_docs)]
mod generated {
    include!("polypb.v1.rs");
}

pub use generated::{Point, Polygon, Shape, ShapeCollection};

impl Point {
    /// Creates a point from a `[lng, lat]` position, narrowing both coordinates to `f32`.
    pub fn from_position(position: Position) -> Self {
        let [lng, lat] = position;
        Self {
            lng: lng as f32,
            lat: lat as f32,
        }
    }
}

impl Polygon {
    /// Creates a polygon without holes from a single ring.
    pub fn from_ring(ring: &[Position]) -> Self {
        Self {
            exterior_points: ring.iter().copied().map(Point::from_position).collect(),
            holes: vec![],
        }
    }

    /// Creates a polygon from its rings. The first ring is the exterior, every other ring becomes
    /// a hole. No rings give an empty polygon.
    pub fn from_rings(rings: &[Ring]) -> Self {
        let mut rings = rings.iter();
        let Some(exterior) = rings.next() else {
            return Self::default();
        };

        Self {
            holes: rings.map(|ring| Self::from_ring(ring)).collect(),
            ..Self::from_ring(exterior)
        }
    }

    /// Number of holes in the polygon.
    pub fn hole_count(&self) -> usize {
        self.holes.len()
    }

    /// Returns true if the polygon has neither exterior points nor holes.
    pub fn is_empty(&self) -> bool {
        self.exterior_points.is_empty() && self.holes.is_empty()
    }
}

impl Shape {
    /// Decodes the metadata of the shape.
    pub fn decode_metadata<T: DeserializeOwned>(
        &self,
        format: MetadataFormat,
    ) -> Result<T, DecodeError> {
        Ok(format.decode(&self.metadata)?)
    }
}

impl ShapeCollection {
    /// Number of shapes in the collection.
    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    /// Returns true if the collection has no shapes.
    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    /// Serializes the collection into protobuf bytes.
    pub fn to_bytes(&self) -> Vec<u8> {
        self.encode_to_vec()
    }

    /// Reads a collection from protobuf bytes.
    pub fn decode<B>(buffer: B) -> Result<Self, DecodeError>
    where
        B: Buf,
    {
        Ok(<Self as Message>::decode(buffer)?)
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use assert_matches::assert_matches;
    use serde_json::{json, Value};

    use super::*;
    use crate::coordinates::PolygonRings;
    use crate::metadata::{MetadataEncoder, MetadataError};

    #[test]
    fn narrowing_is_exact_for_representable_values() {
        let point = Point::from_position([-122.5, 37.75]);
        assert_eq!(point.lng.to_bits(), (-122.5f32).to_bits());
        assert_eq!(point.lat.to_bits(), 37.75f32.to_bits());
    }

    #[test]
    fn narrowing_loses_precision() {
        let point = Point::from_position([139.691_706_123_456_7, 35.689_487_654_321]);
        assert_relative_eq!(point.lng, 139.691_7, epsilon = 1e-4);
        assert_relative_eq!(point.lat, 35.689_49, epsilon = 1e-4);
    }

    #[test]
    fn polygon_from_rings() {
        let rings = vec![
            vec![[0.0, 0.0], [0.0, 4.0], [4.0, 4.0], [4.0, 0.0], [0.0, 0.0]],
            vec![[1.0, 1.0], [1.0, 2.0], [2.0, 2.0], [1.0, 1.0]],
            vec![[3.0, 3.0], [3.0, 3.5], [3.5, 3.5], [3.0, 3.0]],
        ];

        let polygon = Polygon::from_rings(&rings);
        assert_eq!(polygon.exterior_points.len(), 5);
        assert_eq!(polygon.hole_count(), 2);
        assert_eq!(polygon.holes[0].exterior_points[1], Point { lng: 1.0, lat: 2.0 });
        assert_eq!(polygon.holes[1].exterior_points[0], Point { lng: 3.0, lat: 3.0 });
        assert!(polygon.holes.iter().all(|hole| hole.holes.is_empty()));
    }

    #[test]
    fn polygon_from_no_rings() {
        let polygon = Polygon::from_rings(&PolygonRings::new());
        assert!(polygon.is_empty());
    }

    #[test]
    fn collection_bytes() {
        let metadata = MetadataFormat::Json
            .encode(&json!({"tzid": "UTC"}))
            .expect("encodable");
        let collection = ShapeCollection {
            shapes: vec![Shape {
                metadata,
                polygons: vec![Polygon::from_rings(&[
                    vec![[0.0, 0.0], [0.0, 1.0], [1.0, 0.0]],
                    vec![[0.1, 0.1], [0.1, 0.2], [0.2, 0.1]],
                ])],
            }],
        };

        let bytes = collection.to_bytes();
        let decoded = ShapeCollection::decode(bytes.as_slice()).expect("valid proto");
        assert_eq!(decoded, collection);
        assert_eq!(decoded.len(), 1);

        let properties: Value = decoded.shapes[0]
            .decode_metadata(MetadataFormat::Json)
            .expect("valid metadata");
        assert_eq!(properties, json!({"tzid": "UTC"}));
    }

    #[test]
    fn decode_invalid_metadata() {
        let shape = Shape {
            metadata: b"{\"tzid\":".to_vec(),
            polygons: vec![],
        };

        let err = shape
            .decode_metadata::<Value>(MetadataFormat::Json)
            .expect_err("truncated json");
        assert_matches!(err, DecodeError::Metadata(MetadataError::Json(_)));
        assert_eq!(err.to_string(), "failed to decode metadata");
    }

    #[test]
    fn decode_invalid_bytes() {
        assert_matches!(
            ShapeCollection::decode(&[0x0a, 0xff][..]),
            Err(DecodeError::Proto(_))
        );
    }
}
