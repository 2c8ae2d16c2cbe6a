//! Source element abstraction over parsed XML

/// A node in a parsed markup tree as seen by the converter
///
/// Names are always local names: namespace prefixes such as `v:` or `o:`
/// are not part of the match.
pub trait SourceElement: Sized {
    /// Local tag name of the element
    fn local_name(&self) -> &str;

    /// Attributes in document order, keyed by local name
    fn attributes(&self) -> Vec<(&str, &str)>;

    /// Child elements in document order (text and comments are skipped)
    fn child_elements(&self) -> Vec<Self>;

    /// First text child of the element, if any
    fn text(&self) -> Option<&str>;

    /// Look up an attribute by local name
    fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes()
            .into_iter()
            .find(|(attr, _)| *attr == name)
            .map(|(_, value)| value)
    }
}

impl<'a, 'input> SourceElement for roxmltree::Node<'a, 'input> {
    fn local_name(&self) -> &str {
        self.tag_name().name()
    }

    fn attributes(&self) -> Vec<(&str, &str)> {
        roxmltree::Node::attributes(self)
            .map(|attr| (attr.name(), attr.value()))
            .collect()
    }

    fn child_elements(&self) -> Vec<Self> {
        self.children().filter(|n| n.is_element()).collect()
    }

    fn text(&self) -> Option<&str> {
        roxmltree::Node::text(self)
    }
}
