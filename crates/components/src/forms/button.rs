use bootwire_core::{html, merge_classes, theme, Attributes, Attrs, Element, Node};

use crate::variant::{themed_variant, Size, Variant};

/// Bootstrap button.
///
/// The variant falls back to the `Button.variant` registry default, so a
/// host can restyle every button that does not pick one explicitly.
#[derive(Debug, Clone, Default)]
pub struct Button {
    children: Vec<Node>,
    variant: Option<Variant>,
    size: Option<Size>,
    outline: Option<bool>,
    disabled: bool,
    loading: bool,
    icon: Option<String>,
    href: Option<String>,
    attrs: Attrs,
}

impl Button {
    pub fn new(label: impl Into<Node>) -> Self {
        Self {
            children: vec![label.into()],
            ..Self::default()
        }
    }

    pub fn child(mut self, node: impl Into<Node>) -> Self {
        self.children.push(node.into());
        self
    }

    pub fn variant(mut self, variant: Variant) -> Self {
        self.variant = Some(variant);
        self
    }

    pub fn size(mut self, size: Size) -> Self {
        self.size = Some(size);
        self
    }

    /// Outline style. Ignored for [`Variant::Link`].
    pub fn outline(mut self, outline: bool) -> Self {
        self.outline = Some(outline);
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Shows a spinner in place of the icon and disables the button.
    pub fn loading(mut self, loading: bool) -> Self {
        self.loading = loading;
        self
    }

    /// Bootstrap Icons name, e.g. `check-circle`.
    pub fn icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    /// Renders an `<a role="button">` pointing at `href` instead of a `<button>`.
    pub fn href(mut self, href: impl Into<String>) -> Self {
        self.href = Some(href.into());
        self
    }

    pub fn render(self) -> Element {
        let variant = self
            .variant
            .unwrap_or_else(|| themed_variant("Button", "variant", Variant::Primary));
        let outline = self
            .outline
            .or_else(|| theme::default_bool("Button", "outline"))
            .unwrap_or(false);

        let variant_class = if outline && variant != Variant::Link {
            format!("btn-outline-{variant}")
        } else {
            format!("btn-{variant}")
        };
        let size_class = self
            .size
            .map(|size| format!("btn-{}", size.as_str()))
            .unwrap_or_default();

        let inactive = self.loading || self.disabled;
        let mut button = match self.href {
            Some(href) => {
                let link = html::a()
                    .class(&merge_classes(["btn", &variant_class, &size_class]))
                    .attr("href", href)
                    .attr("role", "button");
                if inactive {
                    link.class("disabled").attr("aria_disabled", "true")
                } else {
                    link
                }
            }
            None => html::button()
                .class(&merge_classes(["btn", &variant_class, &size_class]))
                .attr("disabled", inactive),
        }
        .children_from(self.children);

        if self.loading {
            button.prepend(
                html::span()
                    .class("spinner-border spinner-border-sm me-2")
                    .attr("role", "status")
                    .attr("aria_hidden", "true"),
            );
        } else if let Some(icon) = self.icon {
            button.prepend(
                html::i()
                    .class(&format!("bi bi-{icon} me-2"))
                    .attr("aria_hidden", "true"),
            );
        }

        button.attrs(self.attrs)
    }
}

impl Attributes for Button {
    fn attrs_mut(&mut self) -> &mut Attrs {
        &mut self.attrs
    }
}

impl From<Button> for Node {
    fn from(button: Button) -> Self {
        button.render().into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bootwire_core::Render;

    #[test]
    fn test_button_classes() {
        let el = Button::new("Save")
            .variant(Variant::Success)
            .size(Size::Lg)
            .class("w-100 btn")
            .render();

        assert_eq!(el.get_attr("class"), Some("btn btn-success btn-lg w-100"));
    }

    #[test]
    fn test_button_outline_ignored_for_link() {
        let outline = Button::new("x").variant(Variant::Danger).outline(true).render();
        assert!(outline.has_class("btn-outline-danger"));

        let link = Button::new("x").variant(Variant::Link).outline(true).render();
        assert!(link.has_class("btn-link"));
        assert!(!link.has_class("btn-outline-link"));
    }

    #[test]
    fn test_button_loading_replaces_icon() {
        let html = Button::new("Saving")
            .variant(Variant::Primary)
            .icon("check")
            .loading(true)
            .render()
            .to_html();

        assert_eq!(
            html,
            r#"<button class="btn btn-primary" disabled><span class="spinner-border spinner-border-sm me-2" role="status" aria-hidden="true"></span>Saving</button>"#
        );
    }

    #[test]
    fn test_button_with_href_renders_link() {
        let html = Button::new("Get Started")
            .variant(Variant::Primary)
            .outline(true)
            .href("/signup")
            .render()
            .to_html();

        assert_eq!(
            html,
            r#"<a class="btn btn-outline-primary" href="/signup" role="button">Get Started</a>"#
        );
    }

    #[test]
    fn test_button_icon_and_htmx_attrs() {
        let html = Button::new("Save")
            .variant(Variant::Primary)
            .icon("check")
            .attr("hx_post", "/save")
            .render()
            .to_html();

        assert_eq!(
            html,
            r#"<button class="btn btn-primary" hx-post="/save"><i class="bi bi-check me-2" aria-hidden="true"></i>Save</button>"#
        );
    }
}
