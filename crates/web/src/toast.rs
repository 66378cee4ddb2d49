use bootwire_components::feedback::{Toast, DEFAULT_TOAST_CONTAINER_ID};
use bootwire_components::Variant;
use bootwire_core::{Attributes, Fragment};

/// Notification appended to a response by [`toast_response`].
#[derive(Debug, Clone)]
pub struct ToastMessage {
    message: String,
    variant: Variant,
    container_id: String,
    title: Option<String>,
    autohide: Option<bool>,
    delay_ms: Option<u64>,
}

impl ToastMessage {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            variant: Variant::Success,
            container_id: DEFAULT_TOAST_CONTAINER_ID.to_string(),
            title: None,
            autohide: None,
            delay_ms: None,
        }
    }

    pub fn variant(mut self, variant: Variant) -> Self {
        self.variant = variant;
        self
    }

    /// Id of the container the toast is swapped into.
    pub fn container_id(mut self, id: impl Into<String>) -> Self {
        self.container_id = id.into();
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
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
}

/// Returns `content` followed by an out-of-band toast.
///
/// htmx swaps the content into the request's target and prepends the toast
/// to `#{container_id}`. The page must render a
/// [`ToastContainer`](bootwire_components::feedback::ToastContainer) with
/// that id; without one, htmx drops the toast.
pub fn toast_response(content: impl Into<Fragment>, message: ToastMessage) -> Fragment {
    let mut toast = Toast::new(message.message)
        .variant(message.variant)
        .title_opt(message.title);
    if let Some(autohide) = message.autohide {
        toast = toast.autohide(autohide);
    }
    if let Some(delay_ms) = message.delay_ms {
        toast = toast.delay_ms(delay_ms);
    }
    let toast = toast.attr(
        "hx_swap_oob",
        format!("afterbegin:#{}", message.container_id),
    );

    content.into().with(toast)
}

#[cfg(test)]
mod tests {
    use super::*;
    use bootwire_core::{html, Node, Render};

    #[test]
    fn test_toast_response_appends_oob_toast() {
        let card = html::div().class("card").child("Record updated!");
        let fragment = toast_response(card.clone(), ToastMessage::new("Changes saved"));

        assert_eq!(fragment.len(), 2);
        assert_eq!(fragment.nodes()[0], Node::from(card));

        let toast = fragment.nodes()[1].as_element().unwrap();
        assert_eq!(
            toast.get_attr("hx-swap-oob"),
            Some("afterbegin:#toast-container")
        );
        assert!(toast.has_class("text-bg-success"));
        assert!(toast.to_html().contains("Changes saved"));
    }

    #[test]
    fn test_toast_response_keeps_every_content_node() {
        let content: Fragment = vec![html::p().child("one"), html::p().child("two")]
            .into_iter()
            .collect();
        let fragment = toast_response(
            content,
            ToastMessage::new("Validation failed")
                .variant(Variant::Danger)
                .container_id("alerts")
                .delay_ms(1500),
        );

        assert_eq!(fragment.len(), 3);
        let toast = fragment.nodes()[2].as_element().unwrap();
        assert_eq!(toast.get_attr("hx-swap-oob"), Some("afterbegin:#alerts"));
        assert_eq!(toast.get_attr("data-bs-delay"), Some("1500"));
        assert!(toast.has_class("text-bg-danger"));
        assert!(fragment.to_html().starts_with("<p>one</p><p>two</p>"));
    }
}
