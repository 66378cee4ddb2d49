use bootwire_core::{html, Attributes, Attrs, Element, Node};

/// Long text shown as a preview with an expand/collapse toggle.
///
/// Text at or under `max_chars` characters is returned in a plain `div`.
#[derive(Debug, Clone)]
pub struct TextClamp {
    text: String,
    max_chars: usize,
    show_more: bool,
    expand_label: String,
    collapse_label: String,
    button_class: String,
    ellipsis: String,
    attrs: Attrs,
}

impl TextClamp {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            max_chars: 180,
            show_more: true,
            expand_label: "Show more".to_string(),
            collapse_label: "Show less".to_string(),
            button_class: "btn btn-link p-0 text-decoration-none".to_string(),
            ellipsis: "...".to_string(),
            attrs: Attrs::new(),
        }
    }

    pub fn max_chars(mut self, max_chars: usize) -> Self {
        self.max_chars = max_chars;
        self
    }

    pub fn show_more(mut self, show_more: bool) -> Self {
        self.show_more = show_more;
        self
    }

    pub fn labels(mut self, expand: impl Into<String>, collapse: impl Into<String>) -> Self {
        self.expand_label = expand.into();
        self.collapse_label = collapse.into();
        self
    }

    pub fn button_class(mut self, classes: impl Into<String>) -> Self {
        self.button_class = classes.into();
        self
    }

    pub fn ellipsis(mut self, ellipsis: impl Into<String>) -> Self {
        self.ellipsis = ellipsis.into();
        self
    }

    pub fn render(self) -> Element {
        let limit = self.max_chars.max(1);
        if self.text.chars().count() <= limit {
            return html::div().child(self.text).attrs(self.attrs);
        }

        let cut: String = self.text.chars().take(limit).collect();
        let preview = html::span()
            .attr("data_bw_preview", "true")
            .child(format!("{}{}", cut.trim_end(), self.ellipsis));

        let container = html::div().class("bw-text-clamp");
        if !self.show_more {
            return container
                .attr("data_bw_text_clamp", "false")
                .child(preview)
                .attrs(self.attrs);
        }

        let full = html::span()
            .class("d-none")
            .attr("data_bw_full", "true")
            .child(self.text);
        let toggle = html::button()
            .attr("type", "button")
            .class(&self.button_class)
            .attr("data_bw_text_toggle", "true")
            .attr("data_bw_expand_label", self.expand_label.as_str())
            .attr("data_bw_collapse_label", self.collapse_label)
            .attr("aria_expanded", "false")
            .child(self.expand_label);

        container
            .attr("data_bw_text_clamp", "true")
            .child(preview)
            .child(full)
            .child(toggle)
            .attrs(self.attrs)
    }
}

impl Attributes for TextClamp {
    fn attrs_mut(&mut self) -> &mut Attrs {
        &mut self.attrs
    }
}

impl From<TextClamp> for Node {
    fn from(clamp: TextClamp) -> Self {
        clamp.render().into()
    }
}
