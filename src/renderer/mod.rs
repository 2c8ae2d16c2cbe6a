//! SVG serializer for converted shape trees
//!
//! This module takes the shapes produced by the VML converter and writes
//! them out as an SVG document.

pub mod config;
pub mod image;
pub mod svg;

pub use config::SvgConfig;
pub use image::{EmbeddedImage, ImageMap, ImageResolver};
pub use svg::render_svg;
