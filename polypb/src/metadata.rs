//! Encoding of feature properties into the opaque shape metadata payload.

use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;

/// Serializes feature properties into the bytes stored in [`Shape::metadata`](crate::Shape).
///
/// The payload must be self describing, so that it can be decoded without this crate.
pub trait MetadataEncoder {
    /// Encodes the properties of one feature.
    fn encode<P>(&self, properties: &P) -> Result<Vec<u8>, MetadataError>
    where
        P: Serialize + ?Sized;
}

/// Error encoding or decoding metadata.
#[derive(Debug, Error)]
pub enum MetadataError {
    /// JSON serialization error.
    #[error("json: {0}")]
    Json(#[from] serde_json::Error),
    /// MessagePack serialization error.
    #[error("messagepack: {0}")]
    MessagePackEncode(#[from] rmp_serde::encode::Error),
    /// MessagePack deserialization error.
    #[error("messagepack: {0}")]
    MessagePackDecode(#[from] rmp_serde::decode::Error),
}

/// Built-in metadata encodings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum MetadataFormat {
    /// UTF-8 JSON object. Readers of the original `polypb` files expect this format.
    #[default]
    Json,
    /// MessagePack map with named fields.
    MessagePack,
}

impl MetadataFormat {
    /// Decodes a metadata payload produced with this format.
    pub fn decode<T: DeserializeOwned>(&self, bytes: &[u8]) -> Result<T, MetadataError> {
        Ok(match self {
            Self::Json => serde_json::from_slice(bytes)?,
            Self::MessagePack => rmp_serde::from_slice(bytes)?,
        })
    }
}

impl MetadataEncoder for MetadataFormat {
    fn encode<P>(&self, properties: &P) -> Result<Vec<u8>, MetadataError>
    where
        P: Serialize + ?Sized,
    {
        Ok(match self {
            Self::Json => serde_json::to_vec(properties)?,
            Self::MessagePack => rmp_serde::to_vec_named(properties)?,
        })
    }
}
