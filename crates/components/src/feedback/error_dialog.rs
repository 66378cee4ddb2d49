use bootwire_core::{html, Attributes, Attrs, Fragment, Node};

use super::Modal;
use crate::display::icon;
use crate::forms::Button;
use crate::script::js_string;
use crate::variant::{themed_variant, Variant};

/// Modal that reports an error, with an optional retry request.
#[derive(Debug, Clone)]
pub struct ErrorDialog {
    message: String,
    title: String,
    variant: Option<Variant>,
    modal_id: String,
    retry_url: Option<String>,
    retry_text: String,
    close_text: String,
    show: bool,
    attrs: Attrs,
}

impl ErrorDialog {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            title: "Error".to_string(),
            variant: None,
            modal_id: "error-dialog".to_string(),
            retry_url: None,
            retry_text: "Retry".to_string(),
            close_text: "Close".to_string(),
            show: true,
            attrs: Attrs::new(),
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn variant(mut self, variant: Variant) -> Self {
        self.variant = Some(variant);
        self
    }

    pub fn modal_id(mut self, id: impl Into<String>) -> Self {
        self.modal_id = id.into();
        self
    }

    /// Adds a retry button that re-fetches `url` into the dialog.
    pub fn retry(mut self, url: impl Into<String>) -> Self {
        self.retry_url = Some(url.into());
        self
    }

    pub fn retry_text(mut self, text: impl Into<String>) -> Self {
        self.retry_text = text.into();
        self
    }

    pub fn close_text(mut self, text: impl Into<String>) -> Self {
        self.close_text = text.into();
        self
    }

    /// Whether to open the dialog as soon as it is inserted.
    pub fn show(mut self, show: bool) -> Self {
        self.show = show;
        self
    }

    /// Returns the modal, followed by a script that opens it when `show` is set.
    pub fn render(self) -> Fragment {
        let variant = self
            .variant
            .unwrap_or_else(|| themed_variant("ErrorDialog", "variant", Variant::Danger));
        let icon_name = match variant {
            Variant::Danger => "x-circle-fill",
            Variant::Warning => "exclamation-triangle-fill",
            Variant::Info => "info-circle-fill",
            Variant::Success => "check-circle-fill",
            _ => "exclamation-circle-fill",
        };

        let content = html::div()
            .class("text-center py-3")
            .child(
                html::div()
                    .class(&format!("text-{variant} fs-1 mb-3"))
                    .child(icon(icon_name)),
            )
            .child(html::p().class("mb-0").child(self.message));

        let mut buttons = html::div().class("d-flex gap-2 justify-content-end w-100");
        let close_variant = if self.retry_url.is_some() {
            Variant::Secondary
        } else {
            variant
        };
        if let Some(url) = self.retry_url {
            buttons.push(
                Button::new(self.retry_text)
                    .variant(variant)
                    .attr("hx_get", url)
                    .attr("hx_target", format!("#{}", self.modal_id))
                    .attr("hx_swap", "outerHTML")
                    .attr("data_bs_dismiss", "modal"),
            );
        }
        buttons.push(
            Button::new(self.close_text)
                .variant(close_variant)
                .attr("data_bs_dismiss", "modal"),
        );

        let modal = Modal::new(self.modal_id.as_str())
            .title(self.title)
            .child(content)
            .footer(buttons)
            .centered(true)
            .attrs(self.attrs);

        let mut out = Fragment::new().with(modal);
        if self.show {
            out.push(html::script().child(Node::raw(format!(
                "new bootstrap.Modal(document.getElementById({})).show();",
                js_string(&self.modal_id)
            ))));
        }
        out
    }
}

impl Attributes for ErrorDialog {
    fn attrs_mut(&mut self) -> &mut Attrs {
        &mut self.attrs
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bootwire_core::Render;

    #[test]
    fn test_dialog_with_show_script() {
        let out = ErrorDialog::new("Upload failed")
            .variant(Variant::Danger)
            .render();

        assert_eq!(out.len(), 2);
        let html = out.to_html();
        assert!(html.contains("modal-dialog-centered"));
        assert!(html.contains("bi-x-circle-fill"));
        assert!(html.contains("Upload failed"));
        assert!(html.contains(r#"new bootstrap.Modal(document.getElementById("error-dialog")).show();"#));
    }

    #[test]
    fn test_show_script_quotes_modal_id() {
        let html = ErrorDialog::new("Oops")
            .modal_id("x');alert(1);//</script>")
            .render()
            .to_html();

        assert!(html.contains(
            r#"document.getElementById("x');alert(1);//<\/script>")).show();"#
        ));
        assert_eq!(html.matches("</script>").count(), 1);
    }

    #[test]
    fn test_retry_button() {
        let html = ErrorDialog::new("Timeout")
            .variant(Variant::Warning)
            .modal_id("sync-error")
            .retry("/sync")
            .show(false)
            .render()
            .to_html();

        assert!(html.contains("bi-exclamation-triangle-fill"));
        assert!(html.contains(r#"hx-get="/sync""#));
        assert!(html.contains(r##"hx-target="#sync-error""##));
        assert!(html.contains("btn btn-secondary"));
        assert!(!html.contains("<script>"));
    }
}
