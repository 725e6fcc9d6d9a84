//! Error types used by the crate.

use prost::DecodeError as ProtoDecodeError;
use thiserror::Error;

use crate::coordinates::CoordinatesError;
use crate::metadata::MetadataError;

/// Error converting a boundary document into shapes.
///
/// Every variant carries the index of the feature that failed. Conversion stops at the first
/// failing feature, so there is never more than one error per document.
#[derive(Debug, Error)]
pub enum ConversionError {
    /// Top level `type` of the feature is not `Feature`, `Polygon` or `MultiPolygon`.
    #[error("feature {index}: unsupported feature type {value:?}")]
    UnsupportedFeatureType {
        /// Index of the feature in the document.
        index: usize,
        /// The offending type tag.
        value: String,
    },

    /// Geometry of a `Feature` is neither `Polygon` nor `MultiPolygon`.
    #[error("feature {index}: unsupported geometry type {value:?}")]
    UnsupportedGeometryType {
        /// Index of the feature in the document.
        index: usize,
        /// The offending geometry type tag.
        value: String,
    },

    /// Coordinate arrays do not have the shape required by the geometry type.
    #[error("feature {index}: malformed coordinates")]
    MalformedCoordinates {
        /// Index of the feature in the document.
        index: usize,
        /// Where and how decoding failed.
        source: CoordinatesError,
    },

    /// Feature properties could not be serialized.
    #[error("feature {index}: failed to encode metadata")]
    MetadataEncoding {
        /// Index of the feature in the document.
        index: usize,
        /// Encoder error.
        source: MetadataError,
    },
}

impl ConversionError {
    /// Index of the feature that caused the error.
    pub fn feature_index(&self) -> usize {
        match self {
            Self::UnsupportedFeatureType { index, .. }
            | Self::UnsupportedGeometryType { index, .. }
            | Self::MalformedCoordinates { index, .. }
            | Self::MetadataEncoding { index, .. } => *index,
        }
    }
}

/// Error reading back an encoded shape collection.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// Protobuf decoding error.
    #[error("proto error: {0}")]
    Proto(String),

    /// Shape metadata could not be decoded.
    #[error("failed to decode metadata")]
    Metadata(#[from] MetadataError),
}

impl From<ProtoDecodeError> for DecodeError {
    fn from(value: ProtoDecodeError) -> Self {
        Self::Proto(value.to_string())
    }
}
