//! Small extractors mapping one attribute or child element to output attributes

use crate::markup::{convert_length, LengthUsage, SourceElement};

use super::shape::AttributeMap;

/// Stroke width used when `weight` is missing or not a number
pub const DEFAULT_STROKE_WIDTH: &str = "1px";

/// Split an `x,y` coordinate pair into its raw components
///
/// No numeric validation happens here; missing components come back empty
/// and anything past the second comma is ignored.
pub fn parse_point(value: &str) -> (&str, &str) {
    let mut parts = value.split(',');
    let x = parts.next().unwrap_or_default();
    let y = parts.next().unwrap_or_default();
    (x, y)
}

/// Stroke color and width from a `v:stroke` element
pub fn parse_stroke<E: SourceElement>(stroke: &E) -> AttributeMap {
    let mut attributes = AttributeMap::new();
    if let Some(color) = stroke.attribute("color") {
        attributes.insert("stroke".to_string(), color.to_string());
    }
    let width = stroke
        .attribute("weight")
        .and_then(|weight| convert_length(weight, LengthUsage::Emu))
        .unwrap_or_else(|| DEFAULT_STROKE_WIDTH.to_string());
    attributes.insert("stroke-width".to_string(), width);
    attributes
}

/// Attributes from a `v:fill` element
///
/// Nothing is extracted yet: gradient fills (`color2`, `type`, `angle`)
/// have no mapping, so the shape keeps whatever `fillcolor` gave it.
pub fn parse_fill<E: SourceElement>(_fill: &E) -> AttributeMap {
    AttributeMap::new()
}
