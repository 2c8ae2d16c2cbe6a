//! Shape tree builder: walks a VML element and its children

use crate::body::BodyParser;
use crate::markup::{parse_css_rules, SourceElement};

use super::extract::{parse_fill, parse_point, parse_stroke};
use super::position::normalize_position;
use super::shape::{ImageReference, ShapeChild, ShapeKind, ShapeNode, VmlTag};

/// Converts VML elements into shape trees
///
/// Unrecognized elements are not errors: they simply produce no node and
/// vanish from their parent's children.
pub struct VmlConverter<'b, E: SourceElement> {
    body: &'b dyn BodyParser<E>,
    max_depth: Option<usize>,
}

impl<'b, E: SourceElement> VmlConverter<'b, E> {
    /// Create a converter delegating text box bodies to `body`
    pub fn new(body: &'b dyn BodyParser<E>) -> Self {
        Self {
            body,
            max_depth: None,
        }
    }

    /// Drop shapes nested deeper than `depth` below the root (`None` = unbounded)
    pub fn with_max_depth(mut self, depth: Option<usize>) -> Self {
        self.max_depth = depth;
        self
    }

    /// Convert one element, or `None` if its tag is not a VML shape
    pub fn convert(&self, elem: &E) -> Option<ShapeNode> {
        self.build(elem, 0)
    }

    fn build(&self, elem: &E, depth: usize) -> Option<ShapeNode> {
        let name = elem.local_name();
        let Some(kind) = VmlTag::from_local_name(name).and_then(VmlTag::shape_kind) else {
            tracing::debug!(element = name, "skipping unsupported VML element");
            return None;
        };
        if self.max_depth.is_some_and(|max| depth > max) {
            tracing::warn!(element = name, depth, "VML nesting too deep, dropping subtree");
            return None;
        }

        let mut node = ShapeNode::new(kind);

        for (attr, value) in elem.attributes() {
            match attr {
                "style" => node.style = Some(normalize_position(parse_css_rules(value))),
                "fillcolor" => node.set_attribute("fill", value),
                "from" => {
                    let (x, y) = parse_point(value);
                    node.set_attribute("x1", x);
                    node.set_attribute("y1", y);
                }
                "to" => {
                    let (x, y) = parse_point(value);
                    node.set_attribute("x2", x);
                    node.set_attribute("y2", y);
                }
                _ => {}
            }
        }

        for child in elem.child_elements() {
            match VmlTag::from_local_name(child.local_name()) {
                Some(VmlTag::Stroke) => node.merge_attributes(parse_stroke(&child)),
                Some(VmlTag::Fill) => node.merge_attributes(parse_fill(&child)),
                Some(VmlTag::ImageData) => node.set_image(ImageReference {
                    id: child.attribute("id").unwrap_or_default().to_string(),
                    title: child.attribute("title").unwrap_or_default().to_string(),
                }),
                Some(VmlTag::TextboxContent) => node.children.extend(
                    self.body
                        .parse_body_elements(&child)
                        .into_iter()
                        .map(ShapeChild::Content),
                ),
                _ => {
                    if let Some(shape) = self.build(&child, depth + 1) {
                        node.children.push(ShapeChild::Shape(shape));
                    }
                }
            }
        }

        tracing::trace!(kind = node.tag(), children = node.children.len(), "built VML shape");
        Some(node)
    }
}

/// Convert a VML element with no depth limit
pub fn parse_vml_element<E: SourceElement>(
    elem: &E,
    body: &dyn BodyParser<E>,
) -> Option<ShapeNode> {
    VmlConverter::new(body).convert(elem)
}
