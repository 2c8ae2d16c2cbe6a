//! Rich-text bodies embedded in VML text boxes

use crate::markup::SourceElement;
use crate::vml::ContentNode;

/// Parses the body of a `w:txbxContent` element into content nodes
///
/// The converter treats the result as opaque and appends it, in order, to
/// the text box's children.
pub trait BodyParser<E: SourceElement> {
    fn parse_body_elements(&self, content: &E) -> Vec<ContentNode>;
}

/// Plain-text body parser for WordprocessingML
///
/// Every `w:p` becomes a `p` node; each run (`w:r`) carrying text becomes
/// a `span`. Tables, drawings and other body elements are skipped.
#[derive(Debug, Clone, Copy, Default)]
pub struct TextBodyParser;

impl<E: SourceElement> BodyParser<E> for TextBodyParser {
    fn parse_body_elements(&self, content: &E) -> Vec<ContentNode> {
        content
            .child_elements()
            .iter()
            .filter(|child| child.local_name() == "p")
            .map(parse_paragraph)
            .collect()
    }
}

fn parse_paragraph<E: SourceElement>(paragraph: &E) -> ContentNode {
    let runs = paragraph
        .child_elements()
        .iter()
        .filter(|child| child.local_name() == "r")
        .filter_map(parse_run)
        .collect();
    ContentNode::element("p", runs)
}

fn parse_run<E: SourceElement>(run: &E) -> Option<ContentNode> {
    let mut text = String::new();
    for child in run.child_elements() {
        match child.local_name() {
            "t" => text.push_str(child.text().unwrap_or_default()),
            "tab" => text.push('\t'),
            _ => {}
        }
    }
    (!text.is_empty()).then(|| ContentNode::text("span", text))
}
