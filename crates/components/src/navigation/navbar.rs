use bootwire_core::{html, Attributes, Attrs, Element, Node};

/// Responsive Bootstrap navbar with a brand, a collapse toggler and nav items.
#[derive(Debug, Clone)]
pub struct Navbar {
    brand: Option<Node>,
    brand_href: String,
    items: Vec<Node>,
    /// Breakpoint at which the menu expands. `None` keeps it collapsed.
    expand: Option<String>,
    bg: Option<String>,
    dark: bool,
    fluid: bool,
    collapse_id: String,
    attrs: Attrs,
}

impl Default for Navbar {
    fn default() -> Self {
        Self {
            brand: None,
            brand_href: "/".to_string(),
            items: Vec::new(),
            expand: Some("lg".to_string()),
            bg: None,
            dark: false,
            fluid: true,
            collapse_id: "navbarNav".to_string(),
            attrs: Attrs::new(),
        }
    }
}

impl Navbar {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn brand(mut self, brand: impl Into<Node>) -> Self {
        self.brand = Some(brand.into());
        self
    }

    pub fn brand_href(mut self, href: impl Into<String>) -> Self {
        self.brand_href = href.into();
        self
    }

    /// Adds an arbitrary item, wrapped in `li.nav-item`.
    pub fn item(mut self, item: impl Into<Node>) -> Self {
        self.items.push(item.into());
        self
    }

    pub fn items<I, N>(mut self, items: I) -> Self
    where
        I: IntoIterator<Item = N>,
        N: Into<Node>,
    {
        self.items.extend(items.into_iter().map(Into::into));
        self
    }

    /// Adds an `a.nav-link` item.
    pub fn link(self, text: impl Into<String>, href: impl Into<String>) -> Self {
        let link = html::a()
            .class("nav-link")
            .attr("href", href.into())
            .child(text.into());
        self.item(link)
    }

    /// Adds the current-page link.
    pub fn active_link(self, text: impl Into<String>, href: impl Into<String>) -> Self {
        let link = html::a()
            .class("nav-link active")
            .attr("href", href.into())
            .attr("aria_current", "page")
            .child(text.into());
        self.item(link)
    }

    pub fn expand(mut self, breakpoint: Option<&str>) -> Self {
        self.expand = breakpoint.map(str::to_string);
        self
    }

    pub fn bg(mut self, bg: impl Into<String>) -> Self {
        self.bg = Some(bg.into());
        self
    }

    /// Renders with `data-bs-theme="dark"`.
    pub fn dark(mut self, dark: bool) -> Self {
        self.dark = dark;
        self
    }

    pub fn fluid(mut self, fluid: bool) -> Self {
        self.fluid = fluid;
        self
    }

    pub fn collapse_id(mut self, id: impl Into<String>) -> Self {
        self.collapse_id = id.into();
        self
    }

    pub fn render(self) -> Element {
        let mut nav = html::nav().class("navbar");
        if let Some(expand) = &self.expand {
            nav.add_class(&format!("navbar-expand-{expand}"));
        }
        if let Some(bg) = &self.bg {
            nav.add_class(&format!("bg-{bg}"));
        }
        if self.dark {
            nav.set_attr("data-bs-theme", "dark");
        }

        let toggler = html::button()
            .class("navbar-toggler")
            .attr("type", "button")
            .attr("data_bs_toggle", "collapse")
            .attr("data_bs_target", format!("#{}", self.collapse_id))
            .attr("aria_controls", self.collapse_id.as_str())
            .attr("aria_expanded", "false")
            .attr("aria_label", "Toggle navigation")
            .child(html::span().class("navbar-toggler-icon"));

        let menu = html::div()
            .class("collapse navbar-collapse")
            .attr("id", self.collapse_id.as_str())
            .child(
                html::ul().class("navbar-nav ms-auto").children_from(
                    self.items
                        .into_iter()
                        .map(|item| html::li().class("nav-item").child(item)),
                ),
            );

        let inner = html::div()
            .class(if self.fluid { "container-fluid" } else { "container" })
            .child_opt(self.brand.map(|brand| {
                html::a()
                    .class("navbar-brand")
                    .attr("href", self.brand_href)
                    .child(brand)
            }))
            .child(toggler)
            .child(menu);

        nav.attrs(self.attrs).child(inner)
    }
}

impl Attributes for Navbar {
    fn attrs_mut(&mut self) -> &mut Attrs {
        &mut self.attrs
    }
}

impl From<Navbar> for Node {
    fn from(navbar: Navbar) -> Self {
        navbar.render().into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bootwire_core::Render;

    #[test]
    fn test_navbar_structure() {
        let html = Navbar::new()
            .brand("MyApp")
            .active_link("Home", "/")
            .link("Docs", "/docs")
            .bg("body-tertiary")
            .render()
            .to_html();

        assert!(html.starts_with(r#"<nav class="navbar navbar-expand-lg bg-body-tertiary">"#));
        assert!(html.contains(r#"<a class="navbar-brand" href="/">MyApp</a>"#));
        assert!(html.contains(r##"data-bs-target="#navbarNav""##));
        assert!(html.contains(
            r#"<li class="nav-item"><a class="nav-link active" href="/" aria-current="page">Home</a></li>"#
        ));
        assert!(html.contains(r#"<a class="nav-link" href="/docs">Docs</a>"#));
    }

    #[test]
    fn test_user_classes_merge_after_base() {
        let nav = Navbar::new()
            .expand(None)
            .dark(true)
            .class("sticky-top navbar")
            .render();

        assert_eq!(nav.get_attr("class"), Some("navbar sticky-top"));
        assert_eq!(nav.get_attr("data-bs-theme"), Some("dark"));
    }
}
