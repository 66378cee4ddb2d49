//! htmx interaction presets.
//!
//! Each preset is an element with the right `hx-*` attributes already set.
//! Any attribute can be overridden through [`Attributes`]; user attributes are
//! applied last.
//!
//! ```
//! use bootwire_components::presets::ActiveSearch;
//! use bootwire_core::{Attributes, Render};
//!
//! let html = ActiveSearch::new("/search")
//!     .target("#results")
//!     .attr("hx_indicator", "#spinner")
//!     .render()
//!     .to_html();
//!
//! assert!(html.contains(r#"hx-trigger="keyup changed delay:300ms""#));
//! assert!(html.contains(r##"hx-indicator="#spinner""##));
//! ```

use bootwire_core::{html, Attributes, Attrs, Element, Node};

use crate::forms::Button;
use crate::variant::Variant;

/// Debounced live search input.
///
/// Without a target htmx swaps the results into the input itself, which is
/// almost never intended.
#[derive(Debug, Clone)]
pub struct ActiveSearch {
    endpoint: String,
    target: Option<String>,
    debounce_ms: u64,
    placeholder: String,
    name: String,
    attrs: Attrs,
}

impl ActiveSearch {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            target: None,
            debounce_ms: 300,
            placeholder: "Search...".to_string(),
            name: "q".to_string(),
            attrs: Attrs::new(),
        }
    }

    /// CSS selector receiving the results.
    pub fn target(mut self, target: impl Into<String>) -> Self {
        self.target = Some(target.into());
        self
    }

    pub fn debounce_ms(mut self, debounce_ms: u64) -> Self {
        self.debounce_ms = debounce_ms;
        self
    }

    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    /// Query parameter name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn render(self) -> Element {
        html::input()
            .class("form-control")
            .attr("type", "search")
            .attr("name", self.name)
            .attr("placeholder", self.placeholder)
            .attr("hx_get", self.endpoint)
            .attr_opt("hx_target", self.target)
            .attr(
                "hx_trigger",
                format!("keyup changed delay:{}ms", self.debounce_ms),
            )
            .attrs(self.attrs)
    }
}

/// Element that loads the next page when scrolled into view.
#[derive(Debug, Clone)]
pub struct InfiniteScroll {
    endpoint: String,
    target: String,
    trigger: String,
    threshold: Option<String>,
    content: Option<Node>,
    attrs: Attrs,
}

impl InfiniteScroll {
    pub fn new(endpoint: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            target: target.into(),
            trigger: "revealed".to_string(),
            threshold: None,
            content: None,
            attrs: Attrs::new(),
        }
    }

    pub fn trigger(mut self, trigger: impl Into<String>) -> Self {
        self.trigger = trigger.into();
        self
    }

    /// Intersection margin such as `200px`. `0px` is the same as none.
    pub fn threshold(mut self, threshold: impl Into<String>) -> Self {
        self.threshold = Some(threshold.into()).filter(|t| t != "0px");
        self
    }

    /// Replaces the default "Loading more..." indicator.
    pub fn content(mut self, content: impl Into<Node>) -> Self {
        self.content = Some(content.into());
        self
    }

    pub fn render(self) -> Element {
        let trigger = match self.threshold {
            Some(threshold) => format!("{} threshold:{threshold}", self.trigger),
            None => self.trigger,
        };
        let content = self.content.unwrap_or_else(|| {
            html::div()
                .class("text-center text-muted py-3")
                .child("Loading more...")
                .into()
        });

        html::div()
            .class("infinite-scroll-trigger")
            .attr("hx_get", self.endpoint)
            .attr("hx_target", self.target)
            .attr("hx_trigger", trigger)
            .attr("hx_swap", "beforeend")
            .attrs(self.attrs)
            .child(content)
    }
}

/// Section that polls its endpoint on an interval.
#[derive(Debug, Clone)]
pub struct AutoRefresh {
    endpoint: String,
    target: String,
    interval_ms: u64,
    content: Option<Node>,
    attrs: Attrs,
}

impl AutoRefresh {
    /// Use `"this"` as the target to replace the element's own content.
    pub fn new(endpoint: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            target: target.into(),
            interval_ms: 5000,
            content: None,
            attrs: Attrs::new(),
        }
    }

    pub fn interval_ms(mut self, interval_ms: u64) -> Self {
        self.interval_ms = interval_ms;
        self
    }

    pub fn content(mut self, content: impl Into<Node>) -> Self {
        self.content = Some(content.into());
        self
    }

    pub fn render(self) -> Element {
        let content = self
            .content
            .unwrap_or_else(|| html::div().class("text-muted").child("Loading...").into());

        html::div()
            .class("auto-refresh")
            .attr("hx_get", self.endpoint)
            .attr("hx_target", self.target)
            .attr("hx_trigger", format!("every {}ms", self.interval_ms))
            .attr("hx_swap", "innerHTML")
            .attrs(self.attrs)
            .child(content)
    }
}

/// Placeholder replaced by server content when revealed.
#[derive(Debug, Clone)]
pub struct LazyLoad {
    endpoint: String,
    trigger: String,
    placeholder: Option<Node>,
    attrs: Attrs,
}

impl LazyLoad {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            trigger: "revealed".to_string(),
            placeholder: None,
            attrs: Attrs::new(),
        }
    }

    pub fn trigger(mut self, trigger: impl Into<String>) -> Self {
        self.trigger = trigger.into();
        self
    }

    pub fn placeholder(mut self, placeholder: impl Into<Node>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    pub fn render(self) -> Element {
        let placeholder = self.placeholder.unwrap_or_else(|| {
            html::div()
                .class("text-center text-muted py-3")
                .child("Loading...")
                .into()
        });

        html::div()
            .class("lazy-load")
            .attr("hx_get", self.endpoint)
            .attr("hx_trigger", self.trigger)
            .attr("hx_swap", "outerHTML")
            .attrs(self.attrs)
            .child(placeholder)
    }
}

/// HTTP verb used by [`LoadingButton`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum HxMethod {
    Get,
    #[default]
    Post,
    Put,
    Patch,
    Delete,
}

impl HxMethod {
    fn attribute(&self) -> &'static str {
        match self {
            HxMethod::Get => "hx-get",
            HxMethod::Post => "hx-post",
            HxMethod::Put => "hx-put",
            HxMethod::Patch => "hx-patch",
            HxMethod::Delete => "hx-delete",
        }
    }
}

/// Button that disables itself and shows the request indicator while its
/// request is in flight.
#[derive(Debug, Clone)]
pub struct LoadingButton {
    label: Node,
    endpoint: String,
    method: HxMethod,
    target: Option<String>,
    variant: Variant,
    attrs: Attrs,
}

impl LoadingButton {
    pub fn new(label: impl Into<Node>, endpoint: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            endpoint: endpoint.into(),
            method: HxMethod::Post,
            target: None,
            variant: Variant::Primary,
            attrs: Attrs::new(),
        }
    }

    pub fn method(mut self, method: HxMethod) -> Self {
        self.method = method;
        self
    }

    pub fn target(mut self, target: impl Into<String>) -> Self {
        self.target = Some(target.into());
        self
    }

    pub fn variant(mut self, variant: Variant) -> Self {
        self.variant = variant;
        self
    }

    pub fn render(self) -> Element {
        Button::new(self.label)
            .variant(self.variant)
            .attr(self.method.attribute(), self.endpoint)
            .attr("hx_disabled_elt", "this")
            .attr_opt("hx_target", self.target)
            .attr("hx_indicator", "this")
            .attrs(self.attrs)
            .render()
    }
}

macro_rules! preset_node_impls {
    ($($ty:ty),*) => {
        $(
            impl Attributes for $ty {
                fn attrs_mut(&mut self) -> &mut Attrs {
                    &mut self.attrs
                }
            }

            impl From<$ty> for Node {
                fn from(preset: $ty) -> Self {
                    preset.render().into()
                }
            }
        )*
    };
}

preset_node_impls!(ActiveSearch, InfiniteScroll, AutoRefresh, LazyLoad, LoadingButton);

#[cfg(test)]
mod tests {
    use super::*;
    use bootwire_core::Render;

    #[test]
    fn test_active_search() {
        let html = ActiveSearch::new("/api/users/search")
            .target("#user-list")
            .debounce_ms(500)
            .placeholder("Search users...")
            .class("form-control-lg")
            .render()
            .to_html();

        assert_eq!(
            html,
            concat!(
                r#"<input class="form-control form-control-lg" type="search" name="q" "#,
                r#"placeholder="Search users..." hx-get="/api/users/search" "#,
                r##"hx-target="#user-list" hx-trigger="keyup changed delay:500ms">"##
            )
        );
    }

    #[test]
    fn test_active_search_without_target() {
        let input = ActiveSearch::new("/search").render();
        assert!(!input.has_attr("hx-target"));
    }

    #[test]
    fn test_infinite_scroll_threshold() {
        let el = InfiniteScroll::new("/feed?page=2", "#feed")
            .threshold("200px")
            .render();

        assert_eq!(el.get_attr("hx-trigger"), Some("revealed threshold:200px"));
        assert_eq!(el.get_attr("hx-swap"), Some("beforeend"));
        assert_eq!(el.text_content(), "Loading more...");

        let plain = InfiniteScroll::new("/feed", "#feed").threshold("0px").render();
        assert_eq!(plain.get_attr("hx-trigger"), Some("revealed"));
    }

    #[test]
    fn test_auto_refresh() {
        let el = AutoRefresh::new("/api/metrics", "this")
            .interval_ms(3000)
            .attr("hx_swap", "outerHTML")
            .render();

        assert_eq!(el.get_attr("hx-trigger"), Some("every 3000ms"));
        assert_eq!(el.get_attr("hx-swap"), Some("outerHTML"));
        assert!(el.has_class("auto-refresh"));
    }

    #[test]
    fn test_lazy_load() {
        let html = LazyLoad::new("/api/chart").render().to_html();

        assert_eq!(
            html,
            concat!(
                r#"<div class="lazy-load" hx-get="/api/chart" hx-trigger="revealed" hx-swap="outerHTML">"#,
                r#"<div class="text-center text-muted py-3">Loading...</div></div>"#
            )
        );
    }

    #[test]
    fn test_loading_button() {
        let el = LoadingButton::new("Delete", "/items/1")
            .method(HxMethod::Delete)
            .variant(Variant::Danger)
            .attr("hx_confirm", "Are you sure?")
            .render();

        assert_eq!(el.get_attr("hx-delete"), Some("/items/1"));
        assert_eq!(el.get_attr("hx-disabled-elt"), Some("this"));
        assert_eq!(el.get_attr("hx-indicator"), Some("this"));
        assert_eq!(el.get_attr("hx-confirm"), Some("Are you sure?"));
        assert!(el.has_class("btn-danger"));
        assert!(!el.has_attr("hx-target"));
    }

    #[test]
    fn test_loading_button_indicator_override() {
        let el = LoadingButton::new("Save", "/save")
            .attr("hx_indicator", "#spinner")
            .render();

        assert_eq!(el.get_attr("hx-indicator"), Some("#spinner"));
        assert_eq!(el.get_attr("hx-post"), Some("/save"));
    }
}
