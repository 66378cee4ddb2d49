//! Accessibility helpers: skip links, screen-reader-only text, live regions
//! and focus traps.
//!
//! Focus traps are enforced by the inline interaction script shipped with
//! [`crate::assets`]; the markup only carries `data-bw-focus-trap`.

use bootwire_core::{html, Attributes, Attrs, Element, Node};

/// Link that becomes visible on keyboard focus and jumps to the main content.
#[derive(Debug, Clone)]
pub struct SkipLink {
    target: String,
    text: String,
    attrs: Attrs,
}

impl Default for SkipLink {
    fn default() -> Self {
        Self {
            target: "#main-content".to_string(),
            text: "Skip to main content".to_string(),
            attrs: Attrs::new(),
        }
    }
}

impl SkipLink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn target(mut self, target: impl Into<String>) -> Self {
        self.target = target.into();
        self
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    pub fn render(self) -> Element {
        html::a()
            .attr("href", self.target)
            .class(
                "visually-hidden-focusable position-absolute top-0 start-0 m-3 p-2 bg-body border rounded",
            )
            .attrs(self.attrs)
            .child(self.text)
    }
}

impl Attributes for SkipLink {
    fn attrs_mut(&mut self) -> &mut Attrs {
        &mut self.attrs
    }
}

impl From<SkipLink> for Node {
    fn from(link: SkipLink) -> Self {
        link.render().into()
    }
}

/// Content hidden visually but still announced by screen readers.
#[derive(Debug, Clone, Default)]
pub struct VisuallyHidden {
    children: Vec<Node>,
    focusable: bool,
    attrs: Attrs,
}

impl VisuallyHidden {
    pub fn new(content: impl Into<Node>) -> Self {
        Self {
            children: vec![content.into()],
            ..Self::default()
        }
    }

    pub fn child(mut self, node: impl Into<Node>) -> Self {
        self.children.push(node.into());
        self
    }

    /// Reveals the content while it has keyboard focus.
    pub fn focusable(mut self, focusable: bool) -> Self {
        self.focusable = focusable;
        self
    }

    pub fn render(self) -> Element {
        let class = if self.focusable {
            "visually-hidden-focusable"
        } else {
            "visually-hidden"
        };
        html::span()
            .class(class)
            .attrs(self.attrs)
            .children_from(self.children)
    }
}

impl Attributes for VisuallyHidden {
    fn attrs_mut(&mut self) -> &mut Attrs {
        &mut self.attrs
    }
}

impl From<VisuallyHidden> for Node {
    fn from(hidden: VisuallyHidden) -> Self {
        hidden.render().into()
    }
}

/// `aria-live` politeness level.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Politeness {
    Off,
    #[default]
    Polite,
    Assertive,
}

impl Politeness {
    pub fn as_str(&self) -> &'static str {
        match self {
            Politeness::Off => "off",
            Politeness::Polite => "polite",
            Politeness::Assertive => "assertive",
        }
    }
}

/// Visually hidden region announcing dynamic status messages.
#[derive(Debug, Clone)]
pub struct LiveRegion {
    children: Vec<Node>,
    politeness: Politeness,
    atomic: bool,
    relevant: String,
    attrs: Attrs,
}

impl Default for LiveRegion {
    fn default() -> Self {
        Self {
            children: Vec::new(),
            politeness: Politeness::Polite,
            atomic: true,
            relevant: "additions text".to_string(),
            attrs: Attrs::new(),
        }
    }
}

impl LiveRegion {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn child(mut self, node: impl Into<Node>) -> Self {
        self.children.push(node.into());
        self
    }

    pub fn politeness(mut self, politeness: Politeness) -> Self {
        self.politeness = politeness;
        self
    }

    pub fn atomic(mut self, atomic: bool) -> Self {
        self.atomic = atomic;
        self
    }

    pub fn relevant(mut self, relevant: impl Into<String>) -> Self {
        self.relevant = relevant.into();
        self
    }

    pub fn render(self) -> Element {
        let role = match self.politeness {
            Politeness::Polite => "status",
            _ => "alert",
        };
        html::div()
            .class("visually-hidden")
            .attr("aria_live", self.politeness.as_str())
            .attr("aria_atomic", if self.atomic { "true" } else { "false" })
            .attr("aria_relevant", self.relevant)
            .attr("role", role)
            .attrs(self.attrs)
            .children_from(self.children)
    }
}

impl Attributes for LiveRegion {
    fn attrs_mut(&mut self) -> &mut Attrs {
        &mut self.attrs
    }
}

impl From<LiveRegion> for Node {
    fn from(region: LiveRegion) -> Self {
        region.render().into()
    }
}

/// Container that keeps keyboard focus inside it while open.
#[derive(Debug, Clone, Default)]
pub struct FocusTrap {
    children: Vec<Node>,
    autofocus: Option<String>,
    attrs: Attrs,
}

impl FocusTrap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn child(mut self, node: impl Into<Node>) -> Self {
        self.children.push(node.into());
        self
    }

    /// CSS selector of the element to focus when the trap activates.
    pub fn autofocus(mut self, selector: impl Into<String>) -> Self {
        self.autofocus = Some(selector.into());
        self
    }

    pub fn render(self) -> Element {
        html::div()
            .attr("data_bw_focus_trap", "true")
            .attr("tabindex", "-1")
            .attr_opt("data_bw_autofocus", self.autofocus)
            .attrs(self.attrs)
            .children_from(self.children)
    }
}

impl Attributes for FocusTrap {
    fn attrs_mut(&mut self) -> &mut Attrs {
        &mut self.attrs
    }
}

impl From<FocusTrap> for Node {
    fn from(trap: FocusTrap) -> Self {
        trap.render().into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bootwire_core::Render;

    #[test]
    fn test_skip_link() {
        let html = SkipLink::new().target("#content").render().to_html();

        assert!(html.starts_with(r##"<a href="#content" class="visually-hidden-focusable"##));
        assert!(html.ends_with(">Skip to main content</a>"));
    }

    #[test]
    fn test_visually_hidden_focusable() {
        assert_eq!(
            VisuallyHidden::new("Close").render().to_html(),
            r#"<span class="visually-hidden">Close</span>"#
        );
        let focusable = VisuallyHidden::new("Menu").focusable(true).render();
        assert!(focusable.has_class("visually-hidden-focusable"));
    }

    #[test]
    fn test_live_region_roles() {
        let polite = LiveRegion::new().child("Saved").render();
        assert_eq!(polite.get_attr("role"), Some("status"));
        assert_eq!(polite.get_attr("aria-live"), Some("polite"));
        assert_eq!(polite.get_attr("aria-relevant"), Some("additions text"));

        let urgent = LiveRegion::new()
            .politeness(Politeness::Assertive)
            .atomic(false)
            .render();
        assert_eq!(urgent.get_attr("role"), Some("alert"));
        assert_eq!(urgent.get_attr("aria-atomic"), Some("false"));
    }

    #[test]
    fn test_focus_trap() {
        let html = FocusTrap::new()
            .autofocus("#email")
            .id("dialog")
            .child("x")
            .render()
            .to_html();

        assert_eq!(
            html,
            r##"<div data-bw-focus-trap="true" tabindex="-1" data-bw-autofocus="#email" id="dialog">x</div>"##
        );
    }
}
