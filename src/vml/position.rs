//! Rewrite of Office page-relative positioning into absolute CSS positioning

use crate::markup::StyleMap;

#[derive(Debug, Clone, Copy)]
enum Axis {
    Horizontal,
    Vertical,
}

impl Axis {
    fn relative_key(self) -> &'static str {
        match self {
            Axis::Horizontal => "mso-position-horizontal-relative",
            Axis::Vertical => "mso-position-vertical-relative",
        }
    }

    fn offset_key(self) -> &'static str {
        match self {
            Axis::Horizontal => "mso-position-horizontal",
            Axis::Vertical => "mso-position-vertical",
        }
    }

    fn edge(self) -> &'static str {
        match self {
            Axis::Horizontal => "left",
            Axis::Vertical => "top",
        }
    }
}

/// Replace `mso-position-*` page anchoring with `position: absolute`
///
/// Each axis is handled on its own. An axis only changes when its
/// `-relative` property is exactly `page`; the offset falls back to `0`.
pub fn normalize_position(mut style: StyleMap) -> StyleMap {
    for axis in [Axis::Horizontal, Axis::Vertical] {
        if style.get(axis.relative_key()).map(String::as_str) != Some("page") {
            continue;
        }

        let offset = style
            .shift_remove(axis.offset_key())
            .filter(|value| !value.is_empty())
            .unwrap_or_else(|| "0".to_string());
        style.shift_remove(axis.relative_key());

        style.insert("position".to_string(), "absolute".to_string());
        style.insert(axis.edge().to_string(), offset);
    }
    style
}
