//! Shape tree types produced by the converter

use indexmap::IndexMap;

use crate::markup::StyleMap;

/// Presentation attribute name -> value
pub type AttributeMap = IndexMap<String, String>;

/// The kind of output element a VML shape maps to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    Rectangle,
    Ellipse,
    Line,
    Group,
    /// Container embedding arbitrary nested content (text boxes)
    ForeignContent,
    /// Reference to an externally resolved picture
    Image,
}

impl ShapeKind {
    /// Target-agnostic name of the kind
    pub fn name(self) -> &'static str {
        match self {
            ShapeKind::Rectangle => "rectangle",
            ShapeKind::Ellipse => "ellipse",
            ShapeKind::Line => "line",
            ShapeKind::Group => "group-container",
            ShapeKind::ForeignContent => "foreign-content-container",
            ShapeKind::Image => "image",
        }
    }

    /// SVG element name used when serializing this kind
    pub fn svg_tag(self) -> &'static str {
        match self {
            ShapeKind::Rectangle => "rect",
            ShapeKind::Ellipse => "ellipse",
            ShapeKind::Line => "line",
            ShapeKind::Group => "g",
            ShapeKind::ForeignContent => "foreignObject",
            ShapeKind::Image => "image",
        }
    }

    /// Attributes every node of this kind starts out with
    pub fn seed_attributes(self) -> &'static [(&'static str, &'static str)] {
        const FULL_SIZE: &[(&str, &str)] = &[("width", "100%"), ("height", "100%")];
        match self {
            ShapeKind::Rectangle | ShapeKind::ForeignContent | ShapeKind::Image => FULL_SIZE,
            ShapeKind::Ellipse => &[("cx", "50%"), ("cy", "50%"), ("rx", "50%"), ("ry", "50%")],
            ShapeKind::Line | ShapeKind::Group => &[],
        }
    }
}

/// Every VML local name the converter understands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VmlTag {
    Rect,
    Oval,
    Line,
    Shape,
    Textbox,
    Stroke,
    Fill,
    ImageData,
    TextboxContent,
}

impl VmlTag {
    /// Classify a local element name; unknown names yield `None`
    pub fn from_local_name(name: &str) -> Option<Self> {
        let tag = match name {
            "rect" => VmlTag::Rect,
            "oval" => VmlTag::Oval,
            "line" => VmlTag::Line,
            "shape" => VmlTag::Shape,
            "textbox" => VmlTag::Textbox,
            "stroke" => VmlTag::Stroke,
            "fill" => VmlTag::Fill,
            "imagedata" => VmlTag::ImageData,
            "txbxContent" => VmlTag::TextboxContent,
            _ => return None,
        };
        Some(tag)
    }

    /// The shape kind this tag produces, `None` for structural children
    pub fn shape_kind(self) -> Option<ShapeKind> {
        match self {
            VmlTag::Rect => Some(ShapeKind::Rectangle),
            VmlTag::Oval => Some(ShapeKind::Ellipse),
            VmlTag::Line => Some(ShapeKind::Line),
            VmlTag::Shape => Some(ShapeKind::Group),
            VmlTag::Textbox => Some(ShapeKind::ForeignContent),
            VmlTag::Stroke | VmlTag::Fill | VmlTag::ImageData | VmlTag::TextboxContent => None,
        }
    }
}

/// Identifies an embedded picture by relationship id
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ImageReference {
    pub id: String,
    pub title: String,
}

/// Opaque rich-text node produced by a body parser
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ContentNode {
    pub tag: String,
    pub attributes: AttributeMap,
    pub text: Option<String>,
    pub children: Vec<ContentNode>,
}

impl ContentNode {
    /// Create an element holding other content nodes
    pub fn element(tag: impl Into<String>, children: Vec<ContentNode>) -> Self {
        Self {
            tag: tag.into(),
            children,
            ..Default::default()
        }
    }

    /// Create a leaf element holding text
    pub fn text(tag: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            text: Some(text.into()),
            ..Default::default()
        }
    }
}

/// A child of a shape: either a nested shape or body content
#[derive(Debug, Clone, PartialEq)]
pub enum ShapeChild {
    Shape(ShapeNode),
    Content(ContentNode),
}

/// One converted VML element
#[derive(Debug, Clone, PartialEq)]
pub struct ShapeNode {
    pub kind: ShapeKind,
    /// Geometry, fill and stroke
    pub attributes: AttributeMap,
    /// Positioning and display
    pub style: Option<StyleMap>,
    /// Text wrapping mode; left for the surrounding document layer to fill in
    pub wrap_type: Option<String>,
    pub image: Option<ImageReference>,
    pub children: Vec<ShapeChild>,
}

impl ShapeNode {
    /// Create a node of the given kind with its seed attributes
    pub fn new(kind: ShapeKind) -> Self {
        let mut node = Self {
            kind,
            attributes: AttributeMap::new(),
            style: None,
            wrap_type: None,
            image: None,
            children: Vec::new(),
        };
        node.seed(kind);
        node
    }

    /// Target-agnostic tag name
    pub fn tag(&self) -> &'static str {
        self.kind.name()
    }

    /// Get an attribute value
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    /// Get a style property value
    pub fn style_property(&self, name: &str) -> Option<&str> {
        self.style.as_ref()?.get(name).map(String::as_str)
    }

    /// Set an attribute, replacing any earlier value
    pub fn set_attribute(&mut self, name: &str, value: impl Into<String>) {
        self.attributes.insert(name.to_string(), value.into());
    }

    /// Merge a partial attribute set; later values win
    pub fn merge_attributes(&mut self, attributes: AttributeMap) {
        self.attributes.extend(attributes);
    }

    /// Turn this node into an image of the given picture
    pub fn set_image(&mut self, image: ImageReference) {
        self.kind = ShapeKind::Image;
        self.seed(ShapeKind::Image);
        self.image = Some(image);
    }

    /// Nested shapes, skipping body content
    pub fn shapes(&self) -> impl Iterator<Item = &ShapeNode> {
        self.children.iter().filter_map(|child| match child {
            ShapeChild::Shape(shape) => Some(shape),
            ShapeChild::Content(_) => None,
        })
    }

    /// Body content children, skipping nested shapes
    pub fn contents(&self) -> impl Iterator<Item = &ContentNode> {
        self.children.iter().filter_map(|child| match child {
            ShapeChild::Content(content) => Some(content),
            ShapeChild::Shape(_) => None,
        })
    }

    fn seed(&mut self, kind: ShapeKind) {
        for (name, value) in kind.seed_attributes() {
            self.set_attribute(name, *value);
        }
    }
}
