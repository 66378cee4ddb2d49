//! HTML serialization.

use crate::attrs::AttrValue;
use crate::node::{Element, Fragment, Node};

/// Elements that never have a closing tag.
const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source", "track",
    "wbr",
];

/// Elements whose text children are emitted without escaping.
const RAW_TEXT_ELEMENTS: &[&str] = &["script", "style"];

/// Anything that can be serialized to HTML.
pub trait Render {
    fn render_into(&self, out: &mut String);

    fn to_html(&self) -> String {
        let mut out = String::new();
        self.render_into(&mut out);
        out
    }
}

impl Render for Node {
    fn render_into(&self, out: &mut String) {
        match self {
            Node::Text(text) => escape_into(text, out, false),
            Node::Raw(raw) => out.push_str(raw),
            Node::Element(element) => element.render_into(out),
        }
    }
}

impl Render for Element {
    fn render_into(&self, out: &mut String) {
        let tag = self.tag();
        out.push('<');
        out.push_str(tag);
        for (name, value) in self.attributes().iter() {
            match value {
                AttrValue::Str(value) => {
                    out.push(' ');
                    out.push_str(name);
                    out.push_str("=\"");
                    escape_into(value, out, true);
                    out.push('"');
                }
                AttrValue::Bool(true) => {
                    out.push(' ');
                    out.push_str(name);
                }
                AttrValue::Bool(false) => {}
            }
        }
        out.push('>');

        if VOID_ELEMENTS.contains(&tag) {
            return;
        }

        if RAW_TEXT_ELEMENTS.contains(&tag) {
            for child in self.children() {
                match child {
                    Node::Text(text) | Node::Raw(text) => out.push_str(text),
                    Node::Element(element) => element.render_into(out),
                }
            }
        } else {
            for child in self.children() {
                child.render_into(out);
            }
        }

        out.push_str("</");
        out.push_str(tag);
        out.push('>');
    }
}

impl Render for Fragment {
    fn render_into(&self, out: &mut String) {
        self.nodes().render_into(out);
    }
}

impl Render for [Node] {
    fn render_into(&self, out: &mut String) {
        for node in self {
            node.render_into(out);
        }
    }
}

impl Render for Vec<Node> {
    fn render_into(&self, out: &mut String) {
        self.as_slice().render_into(out);
    }
}

impl<A: Render, B: Render> Render for (A, B) {
    fn render_into(&self, out: &mut String) {
        self.0.render_into(out);
        self.1.render_into(out);
    }
}

impl<T: Render + ?Sized> Render for &T {
    fn render_into(&self, out: &mut String) {
        (**self).render_into(out);
    }
}

/// Escapes text for use in HTML content or a double-quoted attribute.
pub fn escape(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    escape_into(value, &mut out, true);
    out
}

fn escape_into(value: &str, out: &mut String, attribute: bool) {
    for ch in value.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' if attribute => out.push_str("&quot;"),
            _ => out.push(ch),
        }
    }
}
