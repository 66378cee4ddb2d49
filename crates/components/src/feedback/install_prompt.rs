use bootwire_core::{html, Attributes, Attrs, Element, Node};

use crate::display::icon;

/// Toast inviting the user to install the app.
///
/// On browsers that fire `beforeinstallprompt` the toast shows an install
/// button; on iOS it shows the share-sheet hint instead. The toast appears
/// `delay_ms` after load.
#[derive(Debug, Clone)]
pub struct InstallPrompt {
    title: String,
    description: String,
    ios_text: String,
    android_text: String,
    delay_ms: u64,
    prompt_id: String,
    attrs: Attrs,
}

impl Default for InstallPrompt {
    fn default() -> Self {
        Self {
            title: "Install App".to_string(),
            description: "Install this app on your device for quick access and offline use."
                .to_string(),
            ios_text: "Tap the Share button and then 'Add to Home Screen'.".to_string(),
            android_text: "Install".to_string(),
            delay_ms: 3000,
            prompt_id: "pwa-install-toast".to_string(),
            attrs: Attrs::new(),
        }
    }
}

impl InstallPrompt {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn ios_text(mut self, text: impl Into<String>) -> Self {
        self.ios_text = text.into();
        self
    }

    /// Label of the install button.
    pub fn android_text(mut self, text: impl Into<String>) -> Self {
        self.android_text = text.into();
        self
    }

    pub fn delay_ms(mut self, delay_ms: u64) -> Self {
        self.delay_ms = delay_ms;
        self
    }

    pub fn render(self) -> Element {
        let id = self.prompt_id;

        let header = html::div()
            .class("toast-header")
            .child(icon("download").class("me-2"))
            .child(html::strong().class("me-auto").child(self.title))
            .child(
                html::button()
                    .attr("type", "button")
                    .class("btn-close")
                    .attr("data_bs_dismiss", "toast")
                    .attr("aria_label", "Close"),
            );

        let body = html::div()
            .class("toast-body")
            .child(html::p().class("mb-2").child(self.description))
            .child(
                html::p()
                    .class("small text-muted mb-0 d-none")
                    .attr("data_bw_pwa_ios", "true")
                    .child(self.ios_text),
            )
            .child(
                html::button()
                    .attr("type", "button")
                    .class("btn btn-primary btn-sm d-none")
                    .attr("data_bw_pwa_install", "true")
                    .child(self.android_text),
            );

        let toast = html::div()
            .attr("id", id.as_str())
            .class("toast pwa-install-toast")
            .attr("role", "alert")
            .attr("aria_live", "polite")
            .attr("aria_atomic", "true")
            .attr("data_bs_autohide", "false")
            .child(header)
            .child(body);

        let script = format!(
            r#"(function () {{
  const el = document.getElementById("{id}");
  if (!el || window.matchMedia("(display-mode: standalone)").matches) return;
  const installBtn = el.querySelector("[data-bw-pwa-install]");
  const iosHint = el.querySelector("[data-bw-pwa-ios]");
  let deferred = null;
  const show = () => setTimeout(() => new bootstrap.Toast(el).show(), {delay});
  window.addEventListener("beforeinstallprompt", (event) => {{
    event.preventDefault();
    deferred = event;
    installBtn.classList.remove("d-none");
    show();
  }});
  installBtn.addEventListener("click", async () => {{
    if (!deferred) return;
    deferred.prompt();
    await deferred.userChoice;
    deferred = null;
    bootstrap.Toast.getOrCreateInstance(el).hide();
  }});
  if (/iphone|ipad|ipod/i.test(navigator.userAgent)) {{
    iosHint.classList.remove("d-none");
    show();
  }}
}})();"#,
            delay = self.delay_ms,
        );

        html::div()
            .class("bootwire-pwa-prompt position-fixed bottom-0 start-50 translate-middle-x p-3")
            .attr("style", "z-index: 1090;")
            .attrs(self.attrs)
            .child(toast)
            .child(html::script().child(Node::raw(script)))
    }
}

impl Attributes for InstallPrompt {
    fn attrs_mut(&mut self) -> &mut Attrs {
        &mut self.attrs
    }
}

impl From<InstallPrompt> for Node {
    fn from(prompt: InstallPrompt) -> Self {
        prompt.render().into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bootwire_core::Render;

    #[test]
    fn test_default_prompt() {
        let html = InstallPrompt::new().render().to_html();

        assert!(html.contains("bootwire-pwa-prompt"));
        assert!(html.contains("pwa-install-toast"));
        assert!(html.contains("new bootstrap.Toast"));
        assert!(html.contains("bottom-0"));
        assert!(html.contains("translate-middle-x"));
    }

    #[test]
    fn test_custom_text() {
        let html = InstallPrompt::new()
            .title("Install FastApp")
            .description("Install for offline support.")
            .ios_text("Tap Share and then Add to Home Screen.")
            .android_text("Install Now")
            .delay_ms(1500)
            .render()
            .to_html();

        assert!(html.contains("Install FastApp"));
        assert!(html.contains("Install for offline support."));
        assert!(html.contains("Tap Share and then Add to Home Screen."));
        assert!(html.contains("Install Now"));
        assert!(html.contains("1500"));
    }
}
