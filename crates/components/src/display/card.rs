use bootwire_core::{html, merge_classes, theme, Attributes, Attrs, Element, Node};

/// Bootstrap card with optional header, image, title, subtitle and footer.
#[derive(Debug, Clone, Default)]
pub struct Card {
    children: Vec<Node>,
    title: Option<String>,
    subtitle: Option<String>,
    header: Option<Node>,
    footer: Option<Node>,
    image: Option<String>,
    /// `sm`, `lg`, or `none`. Falls back to the `Card.shadow` default.
    shadow: Option<String>,
    attrs: Attrs,
}

impl Card {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn child(mut self, node: impl Into<Node>) -> Self {
        self.children.push(node.into());
        self
    }

    pub fn children<I, N>(mut self, nodes: I) -> Self
    where
        I: IntoIterator<Item = N>,
        N: Into<Node>,
    {
        self.children.extend(nodes.into_iter().map(Into::into));
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.subtitle = Some(subtitle.into());
        self
    }

    pub fn header(mut self, header: impl Into<Node>) -> Self {
        self.header = Some(header.into());
        self
    }

    pub fn footer(mut self, footer: impl Into<Node>) -> Self {
        self.footer = Some(footer.into());
        self
    }

    pub fn image(mut self, src: impl Into<String>) -> Self {
        self.image = Some(src.into());
        self
    }

    pub fn shadow(mut self, shadow: impl Into<String>) -> Self {
        self.shadow = Some(shadow.into());
        self
    }

    pub fn render(self) -> Element {
        let shadow = self
            .shadow
            .or_else(|| theme::default_str("Card", "shadow"))
            .filter(|s| s != "none")
            .map(|s| format!("shadow-{s}"));

        let mut body = html::div().class("card-body");
        if let Some(title) = self.title {
            body.push(html::h5().class("card-title").child(title));
        }
        if let Some(subtitle) = self.subtitle {
            body.push(
                html::h6()
                    .class("card-subtitle mb-2 text-muted")
                    .child(subtitle),
            );
        }
        let body = body.children_from(self.children);

        html::div()
            .class(&merge_classes(["card", shadow.as_deref().unwrap_or("")]))
            .child_opt(self.header.map(|h| html::div().class("card-header").child(h)))
            .child_opt(self.image.map(|src| {
                html::img()
                    .class("card-img-top")
                    .attr("src", src)
                    .attr("alt", "")
            }))
            .child(body)
            .child_opt(self.footer.map(|f| html::div().class("card-footer").child(f)))
            .attrs(self.attrs)
    }
}

impl Attributes for Card {
    fn attrs_mut(&mut self) -> &mut Attrs {
        &mut self.attrs
    }
}

impl From<Card> for Node {
    fn from(card: Card) -> Self {
        card.render().into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bootwire_core::Render;

    #[test]
    fn test_card_structure() {
        let html = Card::new()
            .title("Plan")
            .subtitle("Monthly")
            .footer("Cancel anytime")
            .child(html::p().child("Body"))
            .shadow("lg")
            .class("h-100")
            .render()
            .to_html();

        assert!(html.starts_with(r#"<div class="card shadow-lg h-100">"#));
        assert!(html.contains(r#"<h5 class="card-title">Plan</h5>"#));
        assert!(html.contains(r#"<h6 class="card-subtitle mb-2 text-muted">Monthly</h6>"#));
        assert!(html.contains(r#"<div class="card-footer">Cancel anytime</div>"#));
    }

    #[test]
    fn test_card_shadow_none() {
        let card = Card::new().shadow("none").render();
        assert_eq!(card.get_attr("class"), Some("card"));
    }
}
