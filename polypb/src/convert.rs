//! Conversion of boundary documents into protobuf shapes.

use serde::Serialize;

use crate::boundary::{BoundaryDocument, FeatureItem};
use crate::coordinates::decode_groups;
use crate::error::ConversionError;
use crate::metadata::{MetadataEncoder, MetadataFormat};
use crate::proto::{Polygon, Shape, ShapeCollection};

/// Converts boundary features into [`Shape`]s.
///
/// Conversion is a single pass over the document. Shapes are produced in the order of the input
/// features, and the first feature that cannot be converted aborts the whole conversion.
#[derive(Debug, Clone, Default)]
pub struct ShapeConverter<E = MetadataFormat> {
    encoder: E,
}

impl ShapeConverter {
    /// Creates a converter that stores properties as JSON metadata.
    pub fn new() -> Self {
        Self::default()
    }
}

impl<E: MetadataEncoder> ShapeConverter<E> {
    /// Creates a converter with a custom metadata encoder.
    pub fn with_encoder(encoder: E) -> Self {
        Self { encoder }
    }

    /// Metadata encoder used by the converter.
    pub fn encoder(&self) -> &E {
        &self.encoder
    }

    /// Converts every feature of the document.
    pub fn convert<P: Serialize>(
        &self,
        document: &BoundaryDocument<P>,
    ) -> Result<ShapeCollection, ConversionError> {
        let shapes = document
            .features
            .iter()
            .enumerate()
            .map(|(index, feature)| self.convert_feature(index, feature))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(ShapeCollection { shapes })
    }

    /// Converts a single feature. `index` is only used for error reporting.
    pub fn convert_feature<P: Serialize>(
        &self,
        index: usize,
        feature: &FeatureItem<P>,
    ) -> Result<Shape, ConversionError> {
        let metadata = self
            .encoder
            .encode(&feature.properties)
            .map_err(|source| ConversionError::MetadataEncoding { index, source })?;

        let kind = feature.geometry_kind(index)?;
        let groups = decode_groups(kind, &feature.geometry.coordinates)
            .map_err(|source| ConversionError::MalformedCoordinates { index, source })?;

        let polygons: Vec<Polygon> = groups
            .iter()
            .map(|rings| Polygon::from_rings(rings))
            .collect();

        let empty_count = polygons.iter().filter(|p| p.is_empty()).count();
        if empty_count > 0 {
            log::debug!(
                "Feature {index} ({}) contains {empty_count} polygon(s) without rings",
                kind.type_tag()
            );
        }

        Ok(Shape { metadata, polygons })
    }
}

/// Converts a boundary document using JSON metadata.
pub fn convert<P: Serialize>(
    document: &BoundaryDocument<P>,
) -> Result<ShapeCollection, ConversionError> {
    ShapeConverter::new().convert(document)
}
