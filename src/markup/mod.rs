//! Markup-level helpers the VML converter builds on
//!
//! These cover the pieces that sit underneath shape conversion: walking
//! XML elements, splitting inline `style` declarations and converting
//! Office length units.

pub mod element;
pub mod length;
pub mod style;

pub use element::SourceElement;
pub use length::{convert_length, LengthUsage};
pub use style::{format_css_rules, parse_css_rules, StyleMap};
