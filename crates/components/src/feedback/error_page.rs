use bootwire_core::{html, Attributes, Attrs, Element};

use crate::display::EmptyState;

/// Title, message and icon shown for a status code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ErrorDefaults {
    pub title: &'static str,
    pub message: &'static str,
    pub icon: &'static str,
}

/// Display defaults for well-known status codes.
pub fn error_defaults(code: u16) -> Option<ErrorDefaults> {
    match code {
        403 => Some(ErrorDefaults {
            title: "Access Denied",
            message: "You don't have permission to access this resource.",
            icon: "shield-lock",
        }),
        404 => Some(ErrorDefaults {
            title: "Page Not Found",
            message: "The page you're looking for doesn't exist or has been moved.",
            icon: "exclamation-triangle",
        }),
        500 => Some(ErrorDefaults {
            title: "Server Error",
            message: "Something went wrong on our end. We're working to fix it.",
            icon: "x-circle",
        }),
        _ => None,
    }
}

/// Full-page error display.
///
/// Unknown codes fall back to `Error {code}` and a generic message. Every
/// field can be overridden.
#[derive(Debug, Clone)]
pub struct ErrorPage {
    code: u16,
    title: Option<String>,
    message: Option<String>,
    icon: Option<String>,
    action_text: Option<String>,
    action_href: String,
    show_code: bool,
    attrs: Attrs,
}

impl ErrorPage {
    pub fn new(code: u16) -> Self {
        Self {
            code,
            title: None,
            message: None,
            icon: None,
            action_text: Some("Go Home".to_string()),
            action_href: "/".to_string(),
            show_code: true,
            attrs: Attrs::new(),
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    pub fn icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    pub fn action(mut self, text: impl Into<String>, href: impl Into<String>) -> Self {
        self.action_text = Some(text.into());
        self.action_href = href.into();
        self
    }

    pub fn no_action(mut self) -> Self {
        self.action_text = None;
        self
    }

    pub fn show_code(mut self, show_code: bool) -> Self {
        self.show_code = show_code;
        self
    }

    /// Returns the `<title>` node and the page body.
    pub fn render(self) -> (Element, Element) {
        let defaults = error_defaults(self.code);
        let title = self
            .title
            .or_else(|| defaults.map(|d| d.title.to_string()))
            .unwrap_or_else(|| format!("Error {}", self.code));
        let message = self
            .message
            .or_else(|| defaults.map(|d| d.message.to_string()))
            .unwrap_or_else(|| "An error occurred.".to_string());
        let icon = self
            .icon
            .or_else(|| defaults.map(|d| d.icon.to_string()))
            .unwrap_or_else(|| "exclamation-circle".to_string());

        let code_display = self.show_code.then(|| {
            html::h1()
                .class("display-1 fw-bold text-muted opacity-25")
                .attr("style", "font-size: 8rem;")
                .child(self.code.to_string())
        });

        let mut state = EmptyState::new(title.as_str())
            .description(message)
            .icon(icon)
            .class("text-center");
        if let Some(text) = self.action_text {
            state = state.action(text, self.action_href);
        }

        let body = html::div()
            .class("min-vh-100 d-flex flex-column align-items-center justify-content-center")
            .attrs(self.attrs)
            .child_opt(code_display)
            .child(state.render());

        let page_title = html::title().child(format!("{} - {}", self.code, title));
        (page_title, body)
    }
}

impl Attributes for ErrorPage {
    fn attrs_mut(&mut self) -> &mut Attrs {
        &mut self.attrs
    }
}
