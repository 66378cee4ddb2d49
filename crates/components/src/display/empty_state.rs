use bootwire_core::{html, Attributes, Attrs, Element, Node};

use super::icon;

/// Placeholder shown when there is nothing to display.
#[derive(Debug, Clone, Default)]
pub struct EmptyState {
    title: String,
    description: Option<String>,
    icon: Option<String>,
    action_text: Option<String>,
    action_href: Option<String>,
    attrs: Attrs,
}

impl EmptyState {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    /// Adds a call-to-action link. Omitted unless both text and href are set.
    pub fn action(mut self, text: impl Into<String>, href: impl Into<String>) -> Self {
        self.action_text = Some(text.into());
        self.action_href = Some(href.into());
        self
    }

    pub fn render(self) -> Element {
        let icon_el = self.icon.map(|name| {
            html::div()
                .class("mb-3")
                .child(icon(&name).class("display-4 text-muted"))
        });

        let action = match (self.action_text, self.action_href) {
            (Some(text), Some(href)) => Some(
                html::a()
                    .class("btn btn-primary mt-3")
                    .attr("href", href)
                    .child(text),
            ),
            _ => None,
        };

        html::div()
            .class("text-center py-5")
            .child_opt(icon_el)
            .child(html::h3().class("h4").child(self.title))
            .child_opt(
                self.description
                    .map(|d| html::p().class("text-muted mb-0").child(d)),
            )
            .child_opt(action)
            .attrs(self.attrs)
    }
}

impl Attributes for EmptyState {
    fn attrs_mut(&mut self) -> &mut Attrs {
        &mut self.attrs
    }
}

impl From<EmptyState> for Node {
    fn from(state: EmptyState) -> Self {
        state.render().into()
    }
}
