use bootwire_core::{html, theme, Attributes, Attrs, Element, Node};

/// Colour mode selected by the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeMode {
    Light,
    Dark,
    #[default]
    Auto,
}

impl ThemeMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
            ThemeMode::Auto => "auto",
        }
    }

    pub fn parse(name: &str) -> Option<Self> {
        match name.trim() {
            "light" => Some(ThemeMode::Light),
            "dark" => Some(ThemeMode::Dark),
            "auto" => Some(ThemeMode::Auto),
            _ => None,
        }
    }

    /// The mode a toggle switches to.
    pub fn toggled(&self) -> Self {
        match self {
            ThemeMode::Dark => ThemeMode::Light,
            ThemeMode::Light | ThemeMode::Auto => ThemeMode::Dark,
        }
    }
}

/// Dark mode switch that posts to `endpoint` on change.
///
/// The request uses `hx-swap="none"`; the handler is expected to persist the
/// choice and answer with a refresh or trigger header.
#[derive(Debug, Clone)]
pub struct ThemeToggle {
    current: Option<ThemeMode>,
    endpoint: String,
    toggle_id: String,
    show_label: bool,
    label_text: String,
    attrs: Attrs,
}

impl Default for ThemeToggle {
    fn default() -> Self {
        Self {
            current: None,
            endpoint: "/theme/toggle".to_string(),
            toggle_id: "theme-toggle".to_string(),
            show_label: false,
            label_text: "Dark Mode".to_string(),
            attrs: Attrs::new(),
        }
    }
}

impl ThemeToggle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(mut self, mode: ThemeMode) -> Self {
        self.current = Some(mode);
        self
    }

    pub fn endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    pub fn toggle_id(mut self, id: impl Into<String>) -> Self {
        self.toggle_id = id.into();
        self
    }

    pub fn label(mut self, text: impl Into<String>) -> Self {
        self.show_label = true;
        self.label_text = text.into();
        self
    }

    pub fn render(self) -> Element {
        let mode = self
            .current
            .or_else(|| {
                theme::default_str("ThemeToggle", "current_theme").and_then(|m| ThemeMode::parse(&m))
            })
            .unwrap_or_default();
        let dark = mode == ThemeMode::Dark;

        let icon = html::i().class(if dark {
            "bi bi-moon-stars-fill me-2"
        } else {
            "bi bi-sun-fill me-2"
        });

        let input = html::input()
            .attr("type", "checkbox")
            .class("form-check-input")
            .attr("id", self.toggle_id.as_str())
            .attr("checked", dark)
            .attr("role", "switch")
            .attr("hx_post", self.endpoint)
            .attr("hx_trigger", "change")
            .attr("hx_swap", "none");

        let label = self.show_label.then(|| {
            html::label()
                .class("form-check-label ms-2")
                .attr("for", self.toggle_id.as_str())
                .child(self.label_text)
        });

        html::div()
            .class("form-check form-switch d-flex align-items-center")
            .attrs(self.attrs)
            .child(icon)
            .child(input)
            .child_opt(label)
    }
}

impl Attributes for ThemeToggle {
    fn attrs_mut(&mut self) -> &mut Attrs {
        &mut self.attrs
    }
}

impl From<ThemeToggle> for Node {
    fn from(toggle: ThemeToggle) -> Self {
        toggle.render().into()
    }
}
