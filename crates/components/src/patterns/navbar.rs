use bootwire_core::{theme, Attributes, Attrs, Element, Node};

use crate::navigation::Navbar;

/// Sticky navbar with an optional glass effect.
#[derive(Debug, Clone)]
pub struct NavbarModern {
    navbar: Navbar,
    sticky: bool,
    /// Falls back to the `NavbarModern.glass` default, then `true`.
    glass: Option<bool>,
    attrs: Attrs,
}

impl NavbarModern {
    pub fn new(brand: impl Into<Node>) -> Self {
        Self {
            navbar: Navbar::new().brand(brand),
            sticky: true,
            glass: None,
            attrs: Attrs::new(),
        }
    }

    pub fn link(mut self, text: impl Into<String>, href: impl Into<String>) -> Self {
        self.navbar = self.navbar.link(text, href);
        self
    }

    pub fn item(mut self, item: impl Into<Node>) -> Self {
        self.navbar = self.navbar.item(item);
        self
    }

    pub fn sticky(mut self, sticky: bool) -> Self {
        self.sticky = sticky;
        self
    }

    pub fn glass(mut self, glass: bool) -> Self {
        self.glass = Some(glass);
        self
    }

    pub fn render(self) -> Element {
        let glass = self
            .glass
            .or_else(|| theme::default_bool("NavbarModern", "glass"))
            .unwrap_or(true);

        let mut navbar = self.navbar.expand(Some("lg"));
        if glass {
            navbar = navbar.class("navbar-glass");
        }
        if self.sticky {
            navbar = navbar.class("sticky-top");
        }
        navbar.attrs(self.attrs).render()
    }
}

impl Attributes for NavbarModern {
    fn attrs_mut(&mut self) -> &mut Attrs {
        &mut self.attrs
    }
}

impl From<NavbarModern> for Node {
    fn from(navbar: NavbarModern) -> Self {
        navbar.render().into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_modern_navbar_classes() {
        let nav = NavbarModern::new("Brand").link("Home", "/").render();

        assert_eq!(
            nav.get_attr("class"),
            Some("navbar navbar-expand-lg navbar-glass sticky-top")
        );
    }

    #[test]
    fn test_plain_modern_navbar() {
        let nav = NavbarModern::new("Brand").glass(false).sticky(false).class("shadow").render();

        assert_eq!(nav.get_attr("class"), Some("navbar navbar-expand-lg shadow"));
    }
}
