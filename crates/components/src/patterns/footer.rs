use bootwire_core::{html, theme, Attributes, Attrs, Element, Node};

use crate::display::icon;
use crate::layout::{container, row, Col};

/// A titled column of footer links.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FooterColumn {
    pub title: String,
    pub links: Vec<(String, String)>,
}

impl FooterColumn {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            links: Vec::new(),
        }
    }

    pub fn link(mut self, text: impl Into<String>, href: impl Into<String>) -> Self {
        self.links.push((text.into(), href.into()));
        self
    }
}

/// Marketing footer: brand, link columns, social icons, copyright line.
///
/// Colours fall back to the `FooterModern.bg_variant` and
/// `FooterModern.text_variant` defaults.
#[derive(Debug, Clone, Default)]
pub struct FooterModern {
    brand: Option<Node>,
    tagline: Option<String>,
    columns: Vec<FooterColumn>,
    social_links: Vec<(String, String)>,
    copyright: Option<String>,
    bg_variant: Option<String>,
    text_variant: Option<String>,
    attrs: Attrs,
}

impl FooterModern {
    pub fn new() -> Self {
        Self::default()
    }

    /// Plain text brands render as `span.fs-4.fw-bold`.
    pub fn brand(mut self, brand: impl Into<String>) -> Self {
        self.brand = Some(html::span().class("fs-4 fw-bold").child(brand.into()).into());
        self
    }

    pub fn brand_node(mut self, brand: impl Into<Node>) -> Self {
        self.brand = Some(brand.into());
        self
    }

    pub fn tagline(mut self, tagline: impl Into<String>) -> Self {
        self.tagline = Some(tagline.into());
        self
    }

    pub fn column(mut self, column: FooterColumn) -> Self {
        self.columns.push(column);
        self
    }

    /// Social link by Bootstrap Icons name, e.g. `github`.
    pub fn social(mut self, icon: impl Into<String>, href: impl Into<String>) -> Self {
        self.social_links.push((icon.into(), href.into()));
        self
    }

    pub fn copyright(mut self, text: impl Into<String>) -> Self {
        self.copyright = Some(text.into());
        self
    }

    pub fn bg_variant(mut self, variant: impl Into<String>) -> Self {
        self.bg_variant = Some(variant.into());
        self
    }

    pub fn text_variant(mut self, variant: impl Into<String>) -> Self {
        self.text_variant = Some(variant.into());
        self
    }

    pub fn render(self) -> Element {
        let bg = self
            .bg_variant
            .or_else(|| theme::default_str("FooterModern", "bg_variant"))
            .unwrap_or_else(|| "dark".to_string());
        let text = self
            .text_variant
            .or_else(|| theme::default_str("FooterModern", "text_variant"))
            .unwrap_or_else(|| "light".to_string());

        let mut cols: Vec<Node> = Vec::new();

        if self.brand.is_some() || self.tagline.is_some() {
            let brand = html::div().child_opt(self.brand).child_opt(
                self.tagline
                    .map(|t| html::p().class("text-muted small mt-2").child(t)),
            );
            cols.push(Col::new().md(3).class("mb-4 mb-md-0").child(brand).into());
        }

        for column in self.columns {
            let links = column.links.into_iter().map(|(label, href)| {
                html::p().class("mb-2").child(
                    html::a()
                        .attr("href", href)
                        .class(&format!("text-{text} text-decoration-none"))
                        .child(label),
                )
            });
            let body = html::div()
                .child(html::p().class("fw-bold mb-3").child(column.title))
                .children_from(links);
            cols.push(Col::new().md(2).class("mb-4 mb-md-0").child(body).into());
        }

        if !self.social_links.is_empty() {
            let icons = self.social_links.into_iter().map(|(name, href)| {
                html::a()
                    .child(icon(&name))
                    .attr("href", href)
                    .class(&format!("text-{text} me-3 fs-4"))
                    .attr("target", "_blank")
                    .attr("rel", "noopener noreferrer")
            });
            let body = html::div()
                .child(html::p().class("fw-bold mb-3").child("Follow Us"))
                .child(html::div().class("d-flex").children_from(icons));
            cols.push(Col::new().md(3).class("mb-4 mb-md-0").child(body).into());
        }

        let copyright = self
            .copyright
            .unwrap_or_else(|| "\u{a9} 2026 All rights reserved".to_string());
        let bottom = html::div()
            .child(html::hr().class(&format!("border-{text} opacity-25 my-4")))
            .child(html::p().class("text-center text-muted small mb-0").child(copyright));

        let top = (!cols.is_empty()).then(|| row().children_from(cols));

        html::footer()
            .class(&format!("bg-{bg} text-{text} py-5 mt-5"))
            .attrs(self.attrs)
            .child(container().child_opt(top).child(bottom))
    }
}

impl Attributes for FooterModern {
    fn attrs_mut(&mut self) -> &mut Attrs {
        &mut self.attrs
    }
}

impl From<FooterModern> for Node {
    fn from(footer: FooterModern) -> Self {
        footer.render().into()
    }
}
