use bootwire_core::{html, theme, Attributes, Attrs, Element, Node};

use crate::variant::Variant;

/// Id used by [`ToastContainer`] and the out-of-band toast response.
pub const DEFAULT_TOAST_CONTAINER_ID: &str = "toast-container";

/// Bootstrap toast.
///
/// `autohide` and `delay` fall back to the `Toast` registry defaults.
#[derive(Debug, Clone, Default)]
pub struct Toast {
    children: Vec<Node>,
    title: Option<String>,
    variant: Option<Variant>,
    autohide: Option<bool>,
    delay_ms: Option<u64>,
    animation: Option<bool>,
    attrs: Attrs,
}

impl Toast {
    pub fn new(message: impl Into<Node>) -> Self {
        Self {
            children: vec![message.into()],
            ..Self::default()
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn title_opt(mut self, title: Option<String>) -> Self {
        self.title = title;
        self
    }

    pub fn variant(mut self, variant: Variant) -> Self {
        self.variant = Some(variant);
        self
    }

    pub fn autohide(mut self, autohide: bool) -> Self {
        self.autohide = Some(autohide);
        self
    }

    pub fn delay_ms(mut self, delay_ms: u64) -> Self {
        self.delay_ms = Some(delay_ms);
        self
    }

    pub fn animation(mut self, animation: bool) -> Self {
        self.animation = Some(animation);
        self
    }

    pub fn render(self) -> Element {
        let autohide = self
            .autohide
            .or_else(|| theme::default_bool("Toast", "autohide"))
            .unwrap_or(true);
        let delay = self
            .delay_ms
            .or_else(|| theme::default_u64("Toast", "delay"))
            .unwrap_or(5000);
        let animation = self.animation.unwrap_or(true);

        let mut toast = html::div().class("toast");
        if let Some(variant) = self.variant {
            toast = toast.class(&format!("text-bg-{variant}"));
        }
        let toast = toast
            .attr("role", "alert")
            .attr("aria_live", "assertive")
            .attr("aria_atomic", "true")
            .attr("data_bs_autohide", autohide.to_string())
            .attr("data_bs_delay", delay)
            .attr("data_bs_animation", animation.to_string());

        let close = html::button()
            .attr("type", "button")
            .class("btn-close")
            .attr("data_bs_dismiss", "toast")
            .attr("aria_label", "Close");
        let body = html::div().class("toast-body").children_from(self.children);

        let toast = match self.title {
            Some(title) => toast
                .child(
                    html::div()
                        .class("toast-header")
                        .child(html::strong().class("me-auto").child(title))
                        .child(close),
                )
                .child(body),
            None => toast.child(
                html::div()
                    .class("d-flex")
                    .child(body)
                    .child(close.class("me-2 m-auto")),
            ),
        };

        toast.attrs(self.attrs)
    }
}

impl Attributes for Toast {
    fn attrs_mut(&mut self) -> &mut Attrs {
        &mut self.attrs
    }
}

impl From<Toast> for Node {
    fn from(toast: Toast) -> Self {
        toast.render().into()
    }
}

/// Placement of a toast stack within the viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ToastPosition {
    TopStart,
    TopCenter,
    #[default]
    TopEnd,
    MiddleStart,
    MiddleCenter,
    MiddleEnd,
    BottomStart,
    BottomCenter,
    BottomEnd,
}

impl ToastPosition {
    pub fn classes(&self) -> &'static str {
        match self {
            ToastPosition::TopStart => "top-0 start-0",
            ToastPosition::TopCenter => "top-0 start-50 translate-middle-x",
            ToastPosition::TopEnd => "top-0 end-0",
            ToastPosition::MiddleStart => "top-50 start-0 translate-middle-y",
            ToastPosition::MiddleCenter => "top-50 start-50 translate-middle",
            ToastPosition::MiddleEnd => "top-50 end-0 translate-middle-y",
            ToastPosition::BottomStart => "bottom-0 start-0",
            ToastPosition::BottomCenter => "bottom-0 start-50 translate-middle-x",
            ToastPosition::BottomEnd => "bottom-0 end-0",
        }
    }
}

/// Fixed container that out-of-band toasts are swapped into.
#[derive(Debug, Clone)]
pub struct ToastContainer {
    id: String,
    position: ToastPosition,
    children: Vec<Node>,
    attrs: Attrs,
}

impl Default for ToastContainer {
    fn default() -> Self {
        Self {
            id: DEFAULT_TOAST_CONTAINER_ID.to_string(),
            position: ToastPosition::default(),
            children: Vec::new(),
            attrs: Attrs::new(),
        }
    }
}

impl ToastContainer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn container_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    pub fn position(mut self, position: ToastPosition) -> Self {
        self.position = position;
        self
    }

    pub fn child(mut self, node: impl Into<Node>) -> Self {
        self.children.push(node.into());
        self
    }

    pub fn render(self) -> Element {
        html::div()
            .attr("id", self.id)
            .class("toast-container position-fixed p-3")
            .class(self.position.classes())
            .attr("style", "z-index: 1090;")
            .attrs(self.attrs)
            .children_from(self.children)
    }
}

impl Attributes for ToastContainer {
    fn attrs_mut(&mut self) -> &mut Attrs {
        &mut self.attrs
    }
}

impl From<ToastContainer> for Node {
    fn from(container: ToastContainer) -> Self {
        container.render().into()
    }
}

/// Alert-styled toast that fades out on its own, without Bootstrap JS.
#[derive(Debug, Clone)]
pub struct SimpleToast {
    message: String,
    variant: Variant,
    position: Option<ToastPosition>,
    duration_secs: f32,
    attrs: Attrs,
}

impl SimpleToast {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            variant: Variant::Info,
            position: Some(ToastPosition::TopEnd),
            duration_secs: 3.0,
            attrs: Attrs::new(),
        }
    }

    pub fn variant(mut self, variant: Variant) -> Self {
        self.variant = variant;
        self
    }

    /// Fixed placement, or inline with `None`.
    pub fn position(mut self, position: Option<ToastPosition>) -> Self {
        self.position = position;
        self
    }

    pub fn duration_secs(mut self, duration_secs: f32) -> Self {
        self.duration_secs = duration_secs;
        self
    }

    pub fn render(self) -> Element {
        let mut style = format!(
            "animation: toastFadeOut 0.5s ease {}s forwards;",
            self.duration_secs
        );
        let mut el = html::div()
            .class(&format!("alert alert-{} shadow", self.variant))
            .attr("role", "alert");
        if let Some(position) = self.position {
            el = el.class("position-fixed m-3").class(position.classes());
            style.push_str(" z-index: 1090;");
        }
        el.attr("style", style)
            .attrs(self.attrs)
            .child(self.message)
    }
}

impl Attributes for SimpleToast {
    fn attrs_mut(&mut self) -> &mut Attrs {
        &mut self.attrs
    }
}

impl From<SimpleToast> for Node {
    fn from(toast: SimpleToast) -> Self {
        toast.render().into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bootwire_core::Render;

    #[test]
    fn test_toast_with_title() {
        let html = Toast::new("Saved")
            .title("Done")
            .variant(Variant::Success)
            .autohide(false)
            .delay_ms(2000)
            .render()
            .to_html();

        assert!(html.starts_with(r#"<div class="toast text-bg-success" role="alert" aria-live="assertive" aria-atomic="true" data-bs-autohide="false" data-bs-delay="2000" data-bs-animation="true">"#));
        assert!(html.contains(r#"<div class="toast-header"><strong class="me-auto">Done</strong>"#));
        assert!(html.contains(r#"<div class="toast-body">Saved</div>"#));
    }

    #[test]
    fn test_toast_without_title_keeps_close_button() {
        let html = Toast::new("Plain").autohide(true).delay_ms(5000).render().to_html();

        assert!(!html.contains("toast-header"));
        assert!(html.contains("btn-close me-2 m-auto"));
        assert!(html.contains(r#"data-bs-autohide="true""#));
    }

    #[test]
    fn test_toast_container_positions() {
        let el = ToastContainer::new()
            .position(ToastPosition::BottomCenter)
            .render();

        assert_eq!(el.get_attr("id"), Some(DEFAULT_TOAST_CONTAINER_ID));
        assert_eq!(
            el.get_attr("class"),
            Some("toast-container position-fixed p-3 bottom-0 start-50 translate-middle-x")
        );
    }

    #[test]
    fn test_simple_toast() {
        let html = SimpleToast::new("Copied")
            .variant(Variant::Success)
            .duration_secs(2.5)
            .render()
            .to_html();

        assert!(html.contains("alert alert-success shadow position-fixed m-3 top-0 end-0"));
        assert!(html.contains("toastFadeOut 0.5s ease 2.5s forwards"));

        let inline = SimpleToast::new("x").position(None).render();
        assert!(!inline.has_class("position-fixed"));
    }
}
