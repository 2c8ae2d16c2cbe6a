//! Locating VML drawings inside a larger XML document

use roxmltree::{Document, Node};

use crate::body::BodyParser;
use crate::markup::SourceElement;
use crate::vml::{ShapeNode, VmlConverter, VmlTag};

/// Namespace of VML elements (`v:` prefix in Office documents)
pub const VML_NS: &str = "urn:schemas-microsoft-com:vml";

fn is_vml(node: &Node) -> bool {
    node.is_element() && node.tag_name().namespace() == Some(VML_NS)
}

/// Outermost VML elements of a document, in document order
///
/// A document without any VML namespace is accepted as a bare fragment when
/// its root element is itself a VML shape name (`<rect .../>`).
pub fn find_vml_roots<'a, 'input>(doc: &'a Document<'input>) -> Vec<Node<'a, 'input>> {
    let roots: Vec<_> = doc
        .root_element()
        .descendants()
        .filter(|node| is_vml(node) && !node.ancestors().skip(1).any(|a| is_vml(&a)))
        .collect();
    if !roots.is_empty() {
        return roots;
    }

    let root = doc.root_element();
    let bare_shape = root.tag_name().namespace().is_none()
        && VmlTag::from_local_name(root.local_name())
            .and_then(VmlTag::shape_kind)
            .is_some();
    if bare_shape {
        vec![root]
    } else {
        Vec::new()
    }
}

/// Convert every VML drawing in a document
///
/// Roots that do not map to a shape (e.g. a lone `v:shapetype`) are skipped.
pub fn convert_document<'a, 'input>(
    doc: &'a Document<'input>,
    body: &dyn BodyParser<Node<'a, 'input>>,
    max_depth: Option<usize>,
) -> Vec<ShapeNode> {
    let converter = VmlConverter::new(body).with_max_depth(max_depth);
    let roots = find_vml_roots(doc);
    tracing::debug!(roots = roots.len(), "found VML drawing roots");
    roots
        .iter()
        .filter_map(|root| converter.convert(root))
        .collect()
}
