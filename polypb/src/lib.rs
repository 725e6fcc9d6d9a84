//! Converts GeoJSON timezone boundary files into compact protobuf shapes.
//!
//! The input is a [`BoundaryDocument`]: a list of features, each either a bare `Polygon` /
//! `MultiPolygon` or a `Feature` wrapping one. Every feature becomes one [`Shape`]: a list of
//! [`Polygon`]s with their holes, plus the feature properties serialized as metadata.
//!
//! ```no_run
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let raw = std::fs::read("combined-with-oceans.json")?;
//! let document: polypb::BoundaryDocument = serde_json::from_slice(&raw)?;
//! let shapes = polypb::convert(&document)?;
//! std::fs::write("combined-with-oceans.pb", shapes.to_bytes())?;
//! # Ok(())
//! # }
//! ```

pub mod boundary;
mod convert;
pub mod coordinates;
pub mod error;
pub mod metadata;
mod proto;

pub use boundary::{BoundaryDocument, FeatureItem, GeometryDescriptor, GeometryKind};
pub use convert::{convert, ShapeConverter};
pub use error::{ConversionError, DecodeError};
pub use metadata::{MetadataEncoder, MetadataFormat};
pub use proto::{Point, Polygon, Shape, ShapeCollection};

#[cfg(test)]
mod tests {
    use serde_json::Value;

    use super::*;

    fn load_fixture() -> BoundaryDocument {
        serde_json::from_str(include_str!("../test-data/boundaries.json")).expect("valid fixture")
    }

    #[test]
    fn convert_fixture() {
        let document = load_fixture();
        let collection = convert(&document).expect("convertible");
        assert_eq!(collection.len(), document.features.len());

        let tzids: Vec<String> = collection
            .shapes
            .iter()
            .map(|shape| {
                let properties: Value = shape
                    .decode_metadata(MetadataFormat::Json)
                    .expect("valid metadata");
                properties["tzid"].as_str().expect("tzid").to_string()
            })
            .collect();
        assert_eq!(
            tzids,
            ["Europe/Vatican", "Europe/San_Marino", "Europe/Rome", "Etc/GMT-1"]
        );

        let polygon_counts: Vec<usize> = collection
            .shapes
            .iter()
            .map(|shape| shape.polygons.len())
            .collect();
        assert_eq!(polygon_counts, [1, 1, 2, 1]);

        let rome = &collection.shapes[2];
        assert_eq!(rome.polygons[0].hole_count(), 2);
        assert_eq!(rome.polygons[1].hole_count(), 0);

        let properties: Value = rome
            .decode_metadata(MetadataFormat::Json)
            .expect("valid metadata");
        assert_eq!(properties["source"], "osm-boundaries");
    }

    #[test]
    fn fixture_survives_encoding() {
        let collection = convert(&load_fixture()).expect("convertible");
        let bytes = collection.to_bytes();
        let decoded = ShapeCollection::decode(bytes.as_slice()).expect("valid proto");
        assert_eq!(decoded, collection);
    }
}
