//! Office length units and their conversion to CSS lengths

/// How a raw numeric measurement should be interpreted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LengthUsage {
    /// Twentieths of a point
    Dxa,
    /// English Metric Units, rendered in points
    Emu,
    /// Half-points
    FontSize,
    /// Eighths of a point, clamped to the range Word accepts for borders
    Border,
    /// Plain points
    Point,
    /// Fiftieths of a percent
    Percent,
    /// 240ths of a line
    LineHeight,
    /// English Metric Units inside VML path data (unitless output)
    VmlEmu,
}

impl LengthUsage {
    fn multiplier(self) -> f64 {
        match self {
            LengthUsage::Dxa => 0.05,
            LengthUsage::Emu | LengthUsage::VmlEmu => 1.0 / 12700.0,
            LengthUsage::FontSize => 0.5,
            LengthUsage::Border => 0.125,
            LengthUsage::Point => 1.0,
            LengthUsage::Percent => 0.02,
            LengthUsage::LineHeight => 1.0 / 240.0,
        }
    }

    /// Unit suffix appended to converted values
    pub fn unit(self) -> &'static str {
        match self {
            LengthUsage::Dxa
            | LengthUsage::Emu
            | LengthUsage::FontSize
            | LengthUsage::Border
            | LengthUsage::Point => "pt",
            LengthUsage::Percent => "%",
            LengthUsage::LineHeight | LengthUsage::VmlEmu => "",
        }
    }

    fn bounds(self) -> Option<(f64, f64)> {
        match self {
            LengthUsage::Border => Some((0.25, 12.0)),
            _ => None,
        }
    }
}

/// Convert a raw measurement into a formatted length string
///
/// Values that already carry a `px`, `pt` or `%` suffix are returned as-is.
/// Anything else is read as a leading integer (trailing garbage is ignored);
/// `None` means no number could be read at all.
pub fn convert_length(value: &str, usage: LengthUsage) -> Option<String> {
    if has_css_unit(value) {
        return Some(value.to_string());
    }

    let mut number = leading_integer(value)? * usage.multiplier();
    if let Some((min, max)) = usage.bounds() {
        number = number.clamp(min, max);
    }

    Some(format!("{:.2}{}", number, usage.unit()))
}

fn has_css_unit(value: &str) -> bool {
    ["px", "pt", "%"]
        .iter()
        .any(|unit| value.len() > unit.len() && value.ends_with(unit))
}

fn leading_integer(value: &str) -> Option<f64> {
    let trimmed = value.trim_start();
    let unsigned = trimmed.strip_prefix(|c: char| c == '+' || c == '-').unwrap_or(trimmed);
    let digits = unsigned.bytes().take_while(u8::is_ascii_digit).count();
    if digits == 0 {
        return None;
    }
    let sign = trimmed.len() - unsigned.len();
    trimmed[..sign + digits].parse().ok()
}
