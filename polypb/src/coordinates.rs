//! Explicit decoding of GeoJSON coordinate arrays.
//!
//! Coordinates are kept as untyped JSON after the document is parsed. They are decoded here
//! against the nesting expected by the geometry type, so that a malformed record is reported with
//! the exact location of the problem instead of a generic deserialization failure.

use std::fmt::{Display, Formatter};

use serde_json::Value;
use thiserror::Error;

use crate::boundary::GeometryKind;

/// `[lng, lat]` pair.
pub type Position = [f64; 2];

/// Sequence of positions.
pub type Ring = Vec<Position>;

/// Rings of one polygon. The first ring is the exterior one, the rest are holes.
pub type PolygonRings = Vec<Ring>;

/// Location inside a coordinates array, as a list of indices from the root.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CoordinatePath(Vec<usize>);

impl CoordinatePath {
    /// Indices from the coordinates root.
    pub fn indices(&self) -> &[usize] {
        &self.0
    }

    fn prepend(&mut self, index: usize) {
        self.0.insert(0, index);
    }
}

impl Display for CoordinatePath {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "coordinates")?;
        for index in &self.0 {
            write!(f, "[{index}]")?;
        }

        Ok(())
    }
}

/// Mismatch between a coordinates array and the nesting expected for its geometry type.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoordinatesError {
    /// An array was expected, but something else was found.
    #[error("expected an array at {path}, found {found}")]
    NotAnArray {
        /// Location of the value.
        path: CoordinatePath,
        /// JSON type of the value that was found.
        found: &'static str,
    },
    /// A point component is not a number.
    #[error("expected a number at {path}, found {found}")]
    NotANumber {
        /// Location of the value.
        path: CoordinatePath,
        /// JSON type of the value that was found.
        found: &'static str,
    },
    /// A point does not have exactly two components.
    #[error("point at {path} has {arity} components, expected 2")]
    InvalidArity {
        /// Location of the point.
        path: CoordinatePath,
        /// Number of components the point has.
        arity: usize,
    },
}

/// Decodes coordinates into a list of polygon coordinate groups.
///
/// A `MultiPolygon` yields one group per member polygon, a `Polygon` yields a single group.
pub fn decode_groups(
    kind: GeometryKind,
    coordinates: &Value,
) -> Result<Vec<PolygonRings>, CoordinatesError> {
    match kind {
        GeometryKind::MultiPolygon => decode_multi_polygon(coordinates),
        GeometryKind::Polygon => Ok(vec![decode_polygon(coordinates)?]),
    }
}

/// Decodes `Polygon` coordinates: an array of rings.
pub fn decode_polygon(coordinates: &Value) -> Result<PolygonRings, CoordinatesError> {
    decode_rings(coordinates)
}

/// Decodes `MultiPolygon` coordinates: an array of polygons, each an array of rings.
pub fn decode_multi_polygon(coordinates: &Value) -> Result<Vec<PolygonRings>, CoordinatesError> {
    decode_array(coordinates, decode_rings)
}

impl CoordinatesError {
    fn path_mut(&mut self) -> &mut CoordinatePath {
        match self {
            Self::NotAnArray { path, .. }
            | Self::NotANumber { path, .. }
            | Self::InvalidArity { path, .. } => path,
        }
    }

    /// Moves the error one level down, into the item `index` of the enclosing array.
    fn nested_in(mut self, index: usize) -> Self {
        self.path_mut().prepend(index);
        self
    }
}

// Error paths are relative to the value passed in. Each enclosing array prepends its index.

fn decode_rings(value: &Value) -> Result<PolygonRings, CoordinatesError> {
    decode_array(value, decode_ring)
}

fn decode_ring(value: &Value) -> Result<Ring, CoordinatesError> {
    decode_array(value, decode_position)
}

fn decode_position(value: &Value) -> Result<Position, CoordinatesError> {
    let components = as_array(value)?;
    if components.len() != 2 {
        return Err(CoordinatesError::InvalidArity {
            path: CoordinatePath::default(),
            arity: components.len(),
        });
    }

    Ok([
        decode_number(&components[0]).map_err(|err| err.nested_in(0))?,
        decode_number(&components[1]).map_err(|err| err.nested_in(1))?,
    ])
}

fn decode_number(value: &Value) -> Result<f64, CoordinatesError> {
    value.as_f64().ok_or_else(|| CoordinatesError::NotANumber {
        path: CoordinatePath::default(),
        found: json_type_name(value),
    })
}

fn decode_array<T>(
    value: &Value,
    decode_item: impl Fn(&Value) -> Result<T, CoordinatesError>,
) -> Result<Vec<T>, CoordinatesError> {
    as_array(value)?
        .iter()
        .enumerate()
        .map(|(index, item)| decode_item(item).map_err(|err| err.nested_in(index)))
        .collect()
}

fn as_array(value: &Value) -> Result<&[Value], CoordinatesError> {
    match value {
        Value::Array(items) => Ok(items.as_slice()),
        other => Err(CoordinatesError::NotAnArray {
            path: CoordinatePath::default(),
            found: json_type_name(other),
        }),
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
