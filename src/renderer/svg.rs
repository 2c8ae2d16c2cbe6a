//! SVG generation from shape trees

use crate::markup::format_css_rules;
use crate::vml::{ContentNode, ShapeChild, ShapeKind, ShapeNode};

use super::{ImageResolver, SvgConfig};

const SVG_NS: &str = "http://www.w3.org/2000/svg";
const XHTML_NS: &str = "http://www.w3.org/1999/xhtml";

/// Build SVG elements incrementally
pub struct SvgBuilder<'r> {
    config: SvgConfig,
    images: &'r dyn ImageResolver,
    elements: Vec<String>,
    indent: usize,
}

impl<'r> SvgBuilder<'r> {
    /// Create a new SVG builder
    pub fn new(config: SvgConfig, images: &'r dyn ImageResolver) -> Self {
        Self {
            config,
            images,
            elements: vec![],
            indent: 1,
        }
    }

    fn indent_str(&self) -> String {
        if self.config.pretty_print {
            "  ".repeat(self.indent)
        } else {
            String::new()
        }
    }

    fn newline(&self) -> &str {
        if self.config.pretty_print {
            "\n"
        } else {
            ""
        }
    }

    fn push_line(&mut self, line: String) {
        let indent = self.indent_str();
        self.elements.push(format!("{}{}", indent, line));
    }

    /// Add a shape and everything below it
    pub fn add_shape(&mut self, node: &ShapeNode) {
        let tag = node.kind.svg_tag();
        let attrs = self.format_attributes(node);
        let title = node
            .image
            .as_ref()
            .map(|image| image.title.as_str())
            .filter(|title| !title.is_empty());

        if node.children.is_empty() && title.is_none() {
            self.push_line(format!("<{}{}/>", tag, attrs));
            return;
        }

        self.push_line(format!("<{}{}>", tag, attrs));
        self.indent += 1;
        if let Some(title) = title {
            self.push_line(format!("<title>{}</title>", escape_xml(title)));
        }
        self.add_children(node);
        self.indent -= 1;
        self.push_line(format!("</{}>", tag));
    }

    fn add_children(&mut self, node: &ShapeNode) {
        let mut pending: Vec<&ContentNode> = vec![];
        for child in &node.children {
            match child {
                ShapeChild::Shape(shape) => {
                    self.flush_content(&mut pending, node.kind);
                    self.add_shape(shape);
                }
                ShapeChild::Content(content) => pending.push(content),
            }
        }
        self.flush_content(&mut pending, node.kind);
    }

    /// Emit a run of body content inside an XHTML wrapper
    ///
    /// Content outside a text box gets its own `foreignObject` so the
    /// document stays valid SVG.
    fn flush_content(&mut self, pending: &mut Vec<&ContentNode>, parent: ShapeKind) {
        if pending.is_empty() {
            return;
        }
        let embedded = parent == ShapeKind::ForeignContent;
        if !embedded {
            self.push_line(r#"<foreignObject width="100%" height="100%">"#.to_string());
            self.indent += 1;
        }
        self.push_line(format!(r#"<div xmlns="{}">"#, XHTML_NS));
        self.indent += 1;
        for content in pending.drain(..) {
            self.add_content(content);
        }
        self.indent -= 1;
        self.push_line("</div>".to_string());
        if !embedded {
            self.indent -= 1;
            self.push_line("</foreignObject>".to_string());
        }
    }

    fn add_content(&mut self, content: &ContentNode) {
        let tag = escape_xml(&content.tag);
        let attrs: String = content
            .attributes
            .iter()
            .map(|(name, value)| format!(r#" {}="{}""#, name, escape_xml(value)))
            .collect();
        let text = content.text.as_deref().map(escape_xml).unwrap_or_default();

        if content.children.is_empty() {
            self.push_line(format!("<{tag}{attrs}>{text}</{tag}>"));
            return;
        }

        self.push_line(format!("<{tag}{attrs}>{text}"));
        self.indent += 1;
        for child in &content.children {
            self.add_content(child);
        }
        self.indent -= 1;
        self.push_line(format!("</{tag}>"));
    }

    fn format_attributes(&self, node: &ShapeNode) -> String {
        let mut parts = vec![];
        if let Some(prefix) = &self.config.class_prefix {
            parts.push(format!(r#" class="{}{}""#, prefix, node.tag()));
        }
        for (name, value) in &node.attributes {
            parts.push(format!(r#" {}="{}""#, name, escape_xml(value)));
        }
        if let Some(style) = node.style.as_ref().filter(|s| !s.is_empty()) {
            parts.push(format!(r#" style="{}""#, escape_xml(&format_css_rules(style))));
        }
        if let Some(image) = &node.image {
            match self.images.resolve(&image.id) {
                Some(data) => parts.push(format!(r#" href="{}""#, data.data_uri())),
                None => {
                    tracing::debug!(id = %image.id, "image reference not resolved");
                    parts.push(format!(r#" data-image-id="{}""#, escape_xml(&image.id)));
                }
            }
        }
        parts.join("")
    }

    /// Build the final SVG string
    pub fn build(self) -> String {
        let nl = self.newline();

        let mut svg = String::new();

        if self.config.standalone {
            svg.push_str(r#"<?xml version="1.0" encoding="UTF-8"?>"#);
            svg.push_str(nl);
        }

        svg.push_str(&format!(r#"<svg xmlns="{}""#, SVG_NS));
        if let Some(width) = &self.config.width {
            svg.push_str(&format!(r#" width="{}""#, escape_xml(width)));
        }
        if let Some(height) = &self.config.height {
            svg.push_str(&format!(r#" height="{}""#, escape_xml(height)));
        }
        svg.push('>');
        svg.push_str(nl);

        for elem in &self.elements {
            svg.push_str(elem);
            svg.push_str(nl);
        }

        svg.push_str("</svg>");

        svg
    }
}

/// Render shape trees into one SVG document
pub fn render_svg(shapes: &[ShapeNode], config: &SvgConfig, images: &dyn ImageResolver) -> String {
    let mut builder = SvgBuilder::new(config.clone(), images);
    for shape in shapes {
        builder.add_shape(shape);
    }
    builder.build()
}

/// Escape special XML characters
fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}
