use bootwire_core::{html, Attributes, Attrs, Element, Node};

/// `div.container`.
pub fn container() -> Element {
    html::div().class("container")
}

pub fn container_fluid() -> Element {
    html::div().class("container-fluid")
}

/// `div.row`.
pub fn row() -> Element {
    html::div().class("row")
}

/// Grid column with optional per-breakpoint spans.
///
/// With no span at all the column renders as a plain auto-width `col`.
#[derive(Debug, Clone, Default)]
pub struct Col {
    children: Vec<Node>,
    span: Option<u8>,
    sm: Option<u8>,
    md: Option<u8>,
    lg: Option<u8>,
    xl: Option<u8>,
    attrs: Attrs,
}

impl Col {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn child(mut self, node: impl Into<Node>) -> Self {
        self.children.push(node.into());
        self
    }

    pub fn span(mut self, span: u8) -> Self {
        self.span = Some(span.clamp(1, 12));
        self
    }

    pub fn sm(mut self, span: u8) -> Self {
        self.sm = Some(span.clamp(1, 12));
        self
    }

    pub fn md(mut self, span: u8) -> Self {
        self.md = Some(span.clamp(1, 12));
        self
    }

    pub fn lg(mut self, span: u8) -> Self {
        self.lg = Some(span.clamp(1, 12));
        self
    }

    pub fn xl(mut self, span: u8) -> Self {
        self.xl = Some(span.clamp(1, 12));
        self
    }

    fn classes(&self) -> String {
        let mut classes: Vec<String> = Vec::new();
        if let Some(span) = self.span {
            classes.push(format!("col-{span}"));
        }
        for (breakpoint, span) in [("sm", self.sm), ("md", self.md), ("lg", self.lg), ("xl", self.xl)] {
            if let Some(span) = span {
                classes.push(format!("col-{breakpoint}-{span}"));
            }
        }
        if classes.is_empty() {
            "col".to_string()
        } else {
            classes.join(" ")
        }
    }

    pub fn render(self) -> Element {
        html::div()
            .class(&self.classes())
            .attrs(self.attrs)
            .children_from(self.children)
    }
}

impl Attributes for Col {
    fn attrs_mut(&mut self) -> &mut Attrs {
        &mut self.attrs
    }
}

impl From<Col> for Node {
    fn from(col: Col) -> Self {
        col.render().into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bootwire_core::Render;

    #[test]
    fn test_plain_col() {
        assert_eq!(Col::new().child("x").render().to_html(), r#"<div class="col">x</div>"#);
    }

    #[test]
    fn test_responsive_spans() {
        let col = Col::new().span(12).md(6).lg(4).class("mb-3").render();

        assert_eq!(col.get_attr("class"), Some("col-12 col-md-6 col-lg-4 mb-3"));
    }

    #[test]
    fn test_span_is_clamped() {
        let col = Col::new().span(20).render();
        assert!(col.has_class("col-12"));
    }

    #[test]
    fn test_container_and_row() {
        let html = container()
            .child(row().child(Col::new().child("a")))
            .to_html();

        assert_eq!(
            html,
            r#"<div class="container"><div class="row"><div class="col">a</div></div></div>"#
        );
    }
}
