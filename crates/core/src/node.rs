use crate::attrs::{AttrValue, Attributes, Attrs};

/// A markup node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// Text content, escaped on render.
    Text(String),
    /// Pre-rendered markup emitted verbatim (doctype, inline CSS/JS).
    Raw(String),
    Element(Element),
}

impl Node {
    pub fn text(value: impl Into<String>) -> Self {
        Node::Text(value.into())
    }

    pub fn raw(value: impl Into<String>) -> Self {
        Node::Raw(value.into())
    }

    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Node::Element(element) => Some(element),
            _ => None,
        }
    }

    pub fn into_element(self) -> Option<Element> {
        match self {
            Node::Element(element) => Some(element),
            _ => None,
        }
    }
}

impl From<Element> for Node {
    fn from(element: Element) -> Self {
        Node::Element(element)
    }
}

impl From<&str> for Node {
    fn from(value: &str) -> Self {
        Node::Text(value.to_string())
    }
}

impl From<String> for Node {
    fn from(value: String) -> Self {
        Node::Text(value)
    }
}

/// An element with a tag, ordered attributes and ordered children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    tag: String,
    attrs: Attrs,
    children: Vec<Node>,
}

impl Element {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            attrs: Attrs::new(),
            children: Vec::new(),
        }
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn attributes(&self) -> &Attrs {
        &self.attrs
    }

    pub fn children(&self) -> &[Node] {
        &self.children
    }

    pub fn get_attr(&self, name: &str) -> Option<&str> {
        self.attrs.get_str(name)
    }

    pub fn has_attr(&self, name: &str) -> bool {
        matches!(self.attrs.get(name), Some(AttrValue::Str(_)) | Some(AttrValue::Bool(true)))
    }

    pub fn has_class(&self, token: &str) -> bool {
        self.get_attr("class")
            .is_some_and(|classes| classes.split_whitespace().any(|c| c == token))
    }

    /// Sets an already wire-named attribute in place.
    pub fn set_attr(&mut self, name: &str, value: impl Into<AttrValue>) {
        self.attrs.set(name, value);
    }

    pub fn add_class(&mut self, classes: &str) {
        self.attrs.add_class(classes);
    }

    pub fn child(mut self, node: impl Into<Node>) -> Self {
        self.children.push(node.into());
        self
    }

    /// Appends a child only when one is given.
    pub fn child_opt(mut self, node: Option<impl Into<Node>>) -> Self {
        if let Some(node) = node {
            self.children.push(node.into());
        }
        self
    }

    pub fn children_from<I, N>(mut self, nodes: I) -> Self
    where
        I: IntoIterator<Item = N>,
        N: Into<Node>,
    {
        self.children.extend(nodes.into_iter().map(Into::into));
        self
    }

    pub fn push(&mut self, node: impl Into<Node>) {
        self.children.push(node.into());
    }

    pub fn prepend(&mut self, node: impl Into<Node>) {
        self.children.insert(0, node.into());
    }

    /// Concatenated text of all descendant text nodes.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        collect_text(&self.children, &mut out);
        out
    }
}

fn collect_text(nodes: &[Node], out: &mut String) {
    for node in nodes {
        match node {
            Node::Text(text) => out.push_str(text),
            Node::Raw(_) => {}
            Node::Element(element) => collect_text(&element.children, out),
        }
    }
}

impl Attributes for Element {
    fn attrs_mut(&mut self) -> &mut Attrs {
        &mut self.attrs
    }
}

/// An ordered sequence of sibling nodes.
///
/// Used where a component produces more than one top-level node, such as a
/// response body plus an out-of-band toast.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Fragment(Vec<Node>);

impl Fragment {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, node: impl Into<Node>) {
        self.0.push(node.into());
    }

    pub fn with(mut self, node: impl Into<Node>) -> Self {
        self.0.push(node.into());
        self
    }

    pub fn nodes(&self) -> &[Node] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_vec(self) -> Vec<Node> {
        self.0
    }
}

impl From<Vec<Node>> for Fragment {
    fn from(nodes: Vec<Node>) -> Self {
        Self(nodes)
    }
}

impl From<Node> for Fragment {
    fn from(node: Node) -> Self {
        Self(vec![node])
    }
}

impl From<Element> for Fragment {
    fn from(element: Element) -> Self {
        Self(vec![Node::Element(element)])
    }
}

impl<N: Into<Node>> FromIterator<N> for Fragment {
    fn from_iter<T: IntoIterator<Item = N>>(iter: T) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

impl IntoIterator for Fragment {
    type Item = Node;
    type IntoIter = std::vec::IntoIter<Node>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_element_builder() {
        let el = Element::new("a")
            .attr("href", "/home")
            .class("nav-link")
            .class("active nav-link")
            .child("Home");

        assert_eq!(el.tag(), "a");
        assert_eq!(el.get_attr("href"), Some("/home"));
        assert_eq!(el.get_attr("class"), Some("nav-link active"));
        assert!(el.has_class("active"));
        assert_eq!(el.text_content(), "Home");
    }

    #[test]
    fn test_has_attr_ignores_false_flags() {
        let el = Element::new("button")
            .attr("disabled", false)
            .attr("hidden", true);

        assert!(!el.has_attr("disabled"));
        assert!(el.has_attr("hidden"));
    }

    #[test]
    fn test_fragment_collects_nodes() {
        let fragment: Fragment = vec![Element::new("p"), Element::new("div")]
            .into_iter()
            .collect();

        assert_eq!(fragment.len(), 2);
        assert_eq!(fragment.nodes()[1].as_element().map(Element::tag), Some("div"));
    }
}
