//! VML drawing conversion
//!
//! Turns a legacy VML subtree (`v:rect`, `v:oval`, `v:shape`, ...) into a
//! tree of [`ShapeNode`]s that any vector backend can serialize.

pub mod builder;
pub mod extract;
pub mod path;
pub mod position;
pub mod shape;

pub use builder::{parse_vml_element, VmlConverter};
pub use extract::{parse_fill, parse_point, parse_stroke};
pub use path::{convert_path, convert_path_with, tokenize_path, PathToken};
pub use position::normalize_position;
pub use shape::{
    AttributeMap, ContentNode, ImageReference, ShapeChild, ShapeKind, ShapeNode, VmlTag,
};
