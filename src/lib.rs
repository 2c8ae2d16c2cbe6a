//! VML Shapes - Convert legacy VML drawings into renderer-agnostic shape trees
//!
//! Office documents still carry drawings in VML, the vector markup that
//! predates DrawingML. This library turns those drawings into a uniform
//! tree of [`ShapeNode`]s and can serialize the result as SVG.
//!
//! # Example
//!
//! ```rust
//! use vml_shapes::render;
//!
//! let svg = render(r##"<oval fillcolor="#ff0000"/>"##).unwrap();
//! assert!(svg.contains("<ellipse"));
//! ```

pub mod body;
pub mod config;
pub mod document;
pub mod error;
pub mod markup;
pub mod renderer;
pub mod vml;

pub use body::{BodyParser, TextBodyParser};
pub use config::{Config, ConfigError};
pub use document::{convert_document, find_vml_roots, VML_NS};
pub use error::ConvertError;
pub use markup::SourceElement;
pub use renderer::{render_svg, EmbeddedImage, ImageMap, ImageResolver, SvgConfig};
pub use vml::{
    convert_path, parse_vml_element, ContentNode, ImageReference, ShapeChild, ShapeKind,
    ShapeNode, VmlConverter,
};

/// Configuration for the complete conversion pipeline
#[derive(Debug, Clone, Default)]
pub struct ConvertConfig {
    /// Deepest shape nesting kept below each drawing root (`None` = unbounded)
    pub max_depth: Option<usize>,
    /// SVG output configuration
    pub svg: SvgConfig,
    /// Pictures available to image shapes, keyed by relationship id
    pub images: ImageMap,
}

impl ConvertConfig {
    /// Create a new configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Limit how deep nested shapes are followed
    pub fn with_max_depth(mut self, depth: Option<usize>) -> Self {
        self.max_depth = depth;
        self
    }

    /// Set the SVG configuration
    pub fn with_svg(mut self, config: SvgConfig) -> Self {
        self.svg = config;
        self
    }

    /// Set the pictures used to resolve image references
    pub fn with_images(mut self, images: ImageMap) -> Self {
        self.images = images;
        self
    }
}

/// Convert every VML drawing in an XML document to shape trees
///
/// # Example
///
/// ```rust
/// use vml_shapes::{convert, ShapeKind};
///
/// let shapes = convert(r#"
///     <w:pict xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main"
///             xmlns:v="urn:schemas-microsoft-com:vml">
///         <v:line from="0,0" to="10pt,20pt"/>
///     </w:pict>
/// "#).unwrap();
///
/// assert_eq!(shapes.len(), 1);
/// assert_eq!(shapes[0].kind, ShapeKind::Line);
/// assert_eq!(shapes[0].attribute("y2"), Some("20pt"));
/// ```
pub fn convert(source: &str) -> Result<Vec<ShapeNode>, ConvertError> {
    convert_with_config(source, &ConvertConfig::default())
}

/// Convert every VML drawing in an XML document with custom configuration
pub fn convert_with_config(
    source: &str,
    config: &ConvertConfig,
) -> Result<Vec<ShapeNode>, ConvertError> {
    let doc = roxmltree::Document::parse(source)?;
    Ok(convert_document(&doc, &TextBodyParser, config.max_depth))
}

/// Convert VML drawings in an XML document to SVG with default configuration
pub fn render(source: &str) -> Result<String, ConvertError> {
    render_with_config(source, &ConvertConfig::default())
}

/// Convert VML drawings in an XML document to SVG with custom configuration
///
/// # Example
///
/// ```rust
/// use vml_shapes::{render_with_config, ConvertConfig, SvgConfig};
///
/// let config = ConvertConfig::new()
///     .with_svg(SvgConfig::default().with_pretty_print(false).with_standalone(false));
///
/// let svg = render_with_config("<rect/>", &config).unwrap();
/// assert!(svg.starts_with("<svg"));
/// ```
pub fn render_with_config(source: &str, config: &ConvertConfig) -> Result<String, ConvertError> {
    let shapes = convert_with_config(source, config)?;
    tracing::debug!(shapes = shapes.len(), "rendering converted drawings");
    Ok(render_svg(&shapes, &config.svg, &config.images))
}
