//! Integration tests for building shape trees from VML elements

use pretty_assertions::assert_eq;
use roxmltree::{Document, Node};
use vml_shapes::{
    parse_vml_element, BodyParser, ContentNode, ImageReference, ShapeChild, ShapeKind, ShapeNode,
    SourceElement, TextBodyParser,
};

const NAMESPACES: &str = r#"xmlns:v="urn:schemas-microsoft-com:vml"
    xmlns:o="urn:schemas-microsoft-com:office:office"
    xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships"
    xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main""#;

/// Body parser returning the same nodes for any content element
struct FixedBody(Vec<ContentNode>);

impl<E: SourceElement> BodyParser<E> for FixedBody {
    fn parse_body_elements(&self, _content: &E) -> Vec<ContentNode> {
        self.0.clone()
    }
}

fn build_with<B>(xml: &str, body: &B) -> Option<ShapeNode>
where
    B: for<'a, 'input> BodyParser<Node<'a, 'input>>,
{
    let doc = Document::parse(xml).expect("Should parse XML");
    let root = doc.root_element();
    parse_vml_element(&root, body)
}

fn build(xml: &str) -> Option<ShapeNode> {
    build_with(xml, &TextBodyParser)
}

fn attrs(pairs: &[(&str, &str)]) -> vml_shapes::vml::AttributeMap {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

#[test]
fn test_unrecognized_tags_are_absent() {
    for tag in ["polyline", "roundrect", "shapetype", "group", "image", "stroke", "p"] {
        let xml = format!("<v:{tag} {NAMESPACES}/>");
        assert!(build(&xml).is_none(), "tag {tag} should produce no node");
    }
}

#[test]
fn test_unrecognized_root_ignores_image_data() {
    let xml = format!(r#"<v:image {NAMESPACES}><v:imagedata r:id="rId1"/></v:image>"#);
    assert!(build(&xml).is_none());
}

#[test]
fn test_rect_seed_attributes() {
    let node = build(&format!("<v:rect {NAMESPACES}/>")).unwrap();
    assert_eq!(node.tag(), "rectangle");
    assert_eq!(node.attributes, attrs(&[("width", "100%"), ("height", "100%")]));
    assert!(node.style.is_none());
    assert!(node.image.is_none());
    assert!(node.children.is_empty());
}

#[test]
fn test_oval_seed_attributes() {
    let node = build(&format!("<v:oval {NAMESPACES}/>")).unwrap();
    assert_eq!(node.kind, ShapeKind::Ellipse);
    assert_eq!(
        node.attributes,
        attrs(&[("cx", "50%"), ("cy", "50%"), ("rx", "50%"), ("ry", "50%")])
    );
}

#[test]
fn test_oval_merges_overrides() {
    let node = build(&format!(
        r##"<v:oval {NAMESPACES} fillcolor="#123456"><v:stroke color="red" weight="12700"/></v:oval>"##
    ))
    .unwrap();
    assert_eq!(
        node.attributes,
        attrs(&[
            ("cx", "50%"),
            ("cy", "50%"),
            ("rx", "50%"),
            ("ry", "50%"),
            ("fill", "#123456"),
            ("stroke", "red"),
            ("stroke-width", "1.00pt"),
        ])
    );
}

#[test]
fn test_line_shape_and_textbox_kinds() {
    let line = build(&format!("<v:line {NAMESPACES}/>")).unwrap();
    assert_eq!(line.tag(), "line");
    assert!(line.attributes.is_empty());

    let shape = build(&format!("<v:shape {NAMESPACES}/>")).unwrap();
    assert_eq!(shape.tag(), "group-container");
    assert!(shape.attributes.is_empty());

    let textbox = build(&format!("<v:textbox {NAMESPACES}/>")).unwrap();
    assert_eq!(textbox.tag(), "foreign-content-container");
    assert_eq!(textbox.attributes, attrs(&[("width", "100%"), ("height", "100%")]));
}

#[test]
fn test_fillcolor() {
    let node = build(&format!(r##"<v:rect {NAMESPACES} fillcolor="#ff0000"/>"##)).unwrap();
    assert_eq!(node.attribute("fill"), Some("#ff0000"));
}

#[test]
fn test_from_and_to_points() {
    let node = build(&format!(r#"<v:line {NAMESPACES} from="1,2" to="3,4"/>"#)).unwrap();
    assert_eq!(
        node.attributes,
        attrs(&[("x1", "1"), ("y1", "2"), ("x2", "3"), ("y2", "4")])
    );
}

#[test]
fn test_malformed_points_pass_through() {
    let node = build(&format!(r#"<v:line {NAMESPACES} from="5" to=""/>"#)).unwrap();
    assert_eq!(
        node.attributes,
        attrs(&[("x1", "5"), ("y1", ""), ("x2", ""), ("y2", "")])
    );
}

#[test]
fn test_style_page_position_normalized() {
    let node = build(&format!(
        r#"<v:rect {NAMESPACES} style="position:absolute;margin-left:0;width:100pt;mso-position-horizontal-relative:page;mso-position-horizontal:10px"/>"#
    ))
    .unwrap();
    assert_eq!(node.style_property("position"), Some("absolute"));
    assert_eq!(node.style_property("left"), Some("10px"));
    assert_eq!(node.style_property("width"), Some("100pt"));
    assert_eq!(node.style_property("mso-position-horizontal"), None);
    assert_eq!(node.style_property("mso-position-horizontal-relative"), None);
    assert_eq!(node.style_property("top"), None);
    // Style never leaks into geometry attributes
    assert_eq!(node.attribute("left"), None);
}

#[test]
fn test_stroke_defaults_and_fill_noop() {
    let node = build(&format!(
        r#"<v:rect {NAMESPACES}><v:stroke color="blue"/><v:fill color2="yellow"/></v:rect>"#
    ))
    .unwrap();
    assert_eq!(
        node.attributes,
        attrs(&[
            ("width", "100%"),
            ("height", "100%"),
            ("stroke", "blue"),
            ("stroke-width", "1px"),
        ])
    );
}

#[test]
fn test_image_data_forces_image_kind() {
    let node = build(&format!(
        r#"<v:shape {NAMESPACES} style="width:50pt"><v:imagedata r:id="rId1" o:title="Pic"/></v:shape>"#
    ))
    .unwrap();
    assert_eq!(node.kind, ShapeKind::Image);
    assert_eq!(node.tag(), "image");
    assert_eq!(
        node.image,
        Some(ImageReference {
            id: "rId1".into(),
            title: "Pic".into(),
        })
    );
    assert_eq!(node.attributes, attrs(&[("width", "100%"), ("height", "100%")]));
    assert_eq!(node.style_property("width"), Some("50pt"));
}

#[test]
fn test_image_data_overrides_rect_and_oval() {
    for outer in ["rect", "oval", "line", "textbox"] {
        let xml = format!(r#"<v:{outer} {NAMESPACES}><v:imagedata r:id="rId2"/></v:{outer}>"#);
        let node = build(&xml).unwrap();
        assert_eq!(node.kind, ShapeKind::Image, "outer {outer}");
        assert_eq!(node.image.as_ref().map(|i| i.id.as_str()), Some("rId2"));
        assert_eq!(node.image.as_ref().map(|i| i.title.as_str()), Some(""));
    }
}

#[test]
fn test_textbox_delegates_to_body_parser() {
    let first = ContentNode::text("p", "one");
    let second = ContentNode::text("p", "two");
    let body = FixedBody(vec![first.clone(), second.clone()]);
    let node = build_with(
        &format!(r#"<v:textbox {NAMESPACES}><w:txbxContent/></v:textbox>"#),
        &body,
    )
    .unwrap();
    assert_eq!(node.kind, ShapeKind::ForeignContent);
    assert_eq!(
        node.children,
        vec![ShapeChild::Content(first), ShapeChild::Content(second)]
    );
}

#[test]
fn test_textbox_with_word_paragraphs() {
    let node = build(&format!(
        r#"<v:rect {NAMESPACES}>
            <v:textbox>
                <w:txbxContent>
                    <w:p><w:r><w:t>Caption</w:t></w:r></w:p>
                </w:txbxContent>
            </v:textbox>
        </v:rect>"#
    ))
    .unwrap();
    let textbox = node.shapes().next().expect("textbox child");
    assert_eq!(textbox.kind, ShapeKind::ForeignContent);
    assert_eq!(
        textbox.contents().cloned().collect::<Vec<_>>(),
        vec![ContentNode::element("p", vec![ContentNode::text("span", "Caption")])]
    );
}

#[test]
fn test_children_order_preserved() {
    let node = build(&format!(
        r#"<v:shape {NAMESPACES}>
            <v:line/>
            <o:lock v:ext="edit"/>
            <v:oval/>
            <v:path v="m0,0l10,10e"/>
            <v:rect/>
            <v:shape/>
        </v:shape>"#
    ))
    .unwrap();
    let kinds: Vec<_> = node.shapes().map(|s| s.kind).collect();
    assert_eq!(
        kinds,
        vec![
            ShapeKind::Line,
            ShapeKind::Ellipse,
            ShapeKind::Rectangle,
            ShapeKind::Group
        ]
    );
    assert_eq!(node.children.len(), 4);
}

#[test]
fn test_nested_groups_recurse() {
    let node = build(&format!(
        r##"<v:shape {NAMESPACES}><v:shape><v:oval fillcolor="#00f"/></v:shape></v:shape>"##
    ))
    .unwrap();
    let inner = node.shapes().next().unwrap();
    let oval = inner.shapes().next().unwrap();
    assert_eq!(oval.attribute("fill"), Some("#00f"));
}

#[test]
fn test_unprefixed_elements_match_by_local_name() {
    let node = build(r#"<rect fillcolor="green"><stroke weight="2pt"/></rect>"#).unwrap();
    assert_eq!(node.attribute("fill"), Some("green"));
    assert_eq!(node.attribute("stroke-width"), Some("2pt"));
}
