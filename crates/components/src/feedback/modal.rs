use bootwire_core::{html, Attributes, Attrs, Element, Node};

use crate::variant::Size;

/// Bootstrap modal dialog.
#[derive(Debug, Clone)]
pub struct Modal {
    id: String,
    title: Option<String>,
    children: Vec<Node>,
    footer: Option<Node>,
    centered: bool,
    scrollable: bool,
    size: Option<Size>,
    attrs: Attrs,
}

impl Modal {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: None,
            children: Vec::new(),
            footer: None,
            centered: false,
            scrollable: false,
            size: None,
            attrs: Attrs::new(),
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn child(mut self, node: impl Into<Node>) -> Self {
        self.children.push(node.into());
        self
    }

    pub fn footer(mut self, footer: impl Into<Node>) -> Self {
        self.footer = Some(footer.into());
        self
    }

    pub fn centered(mut self, centered: bool) -> Self {
        self.centered = centered;
        self
    }

    pub fn scrollable(mut self, scrollable: bool) -> Self {
        self.scrollable = scrollable;
        self
    }

    pub fn size(mut self, size: Size) -> Self {
        self.size = Some(size);
        self
    }

    pub fn render(self) -> Element {
        let title_id = format!("{}-title", self.id);

        let mut dialog = html::div().class("modal-dialog");
        if self.centered {
            dialog = dialog.class("modal-dialog-centered");
        }
        if self.scrollable {
            dialog = dialog.class("modal-dialog-scrollable");
        }
        if let Some(size) = self.size {
            dialog = dialog.class(&format!("modal-{}", size.as_str()));
        }

        let header = html::div()
            .class("modal-header")
            .child_opt(self.title.map(|title| {
                html::h5()
                    .class("modal-title")
                    .attr("id", title_id.as_str())
                    .child(title)
            }))
            .child(
                html::button()
                    .attr("type", "button")
                    .class("btn-close")
                    .attr("data_bs_dismiss", "modal")
                    .attr("aria_label", "Close"),
            );

        let content = html::div()
            .class("modal-content")
            .child(header)
            .child(html::div().class("modal-body").children_from(self.children))
            .child_opt(self.footer.map(|f| html::div().class("modal-footer").child(f)));

        html::div()
            .class("modal fade")
            .attr("id", self.id)
            .attr("tabindex", "-1")
            .attr("aria_labelledby", title_id)
            .attr("aria_hidden", "true")
            .attrs(self.attrs)
            .child(dialog.child(content))
    }
}

impl Attributes for Modal {
    fn attrs_mut(&mut self) -> &mut Attrs {
        &mut self.attrs
    }
}

impl From<Modal> for Node {
    fn from(modal: Modal) -> Self {
        modal.render().into()
    }
}
