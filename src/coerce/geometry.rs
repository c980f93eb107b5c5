//! Geometry coercions: points, sizes, edge insets.
//!
//! Each missing or malformed component is 0.

use std::fmt;

use super::{resolve, scalar, CoercionError, FieldPath};
use crate::config::{Mapping, Value};
use crate::geometry::{EdgeInsets, Point, Size};

fn mapping<'a>(value: Option<&'a Value>, expected: &'static str) -> Result<&'a Mapping, CoercionError> {
    let value = value.ok_or(CoercionError::MissingKey)?;
    value.as_map().ok_or_else(|| CoercionError::malformed(expected, value))
}

fn component(map: &Mapping, field: &str) -> f32 {
    let path = FieldPath { key: "", field };
    scalar::f32_or_default(map.get(field), path)
}

/// Coerce an `{x, y}` mapping.
pub fn to_point(value: Option<&Value>) -> Result<Point, CoercionError> {
    let map = mapping(value, "point mapping")?;
    Ok(Point::new(component(map, "x"), component(map, "y")))
}

/// Coerce a `{width, height}` mapping.
pub fn to_size(value: Option<&Value>) -> Result<Size, CoercionError> {
    let map = mapping(value, "size mapping")?;
    Ok(Size::new(component(map, "width"), component(map, "height")))
}

/// Coerce a `{top, left, bottom, right}` mapping.
pub fn to_edge_insets(value: Option<&Value>) -> Result<EdgeInsets, CoercionError> {
    let map = mapping(value, "edge insets mapping")?;
    Ok(EdgeInsets::new(
        component(map, "top"),
        component(map, "left"),
        component(map, "bottom"),
        component(map, "right"),
    ))
}

pub fn point_or_default(value: Option<&Value>, key: impl fmt::Display) -> Point {
    resolve(key, to_point(value), || Point::ZERO)
}

pub fn size_or_default(value: Option<&Value>, key: impl fmt::Display) -> Size {
    resolve(key, to_size(value), || Size::ZERO)
}

pub fn edge_insets_or_default(value: Option<&Value>, key: impl fmt::Display) -> EdgeInsets {
    resolve(key, to_edge_insets(value), || EdgeInsets::ZERO)
}
