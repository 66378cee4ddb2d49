use bootwire_core::{html, Attributes, Attrs, Element, Node};

use crate::variant::{themed_variant, Variant};

/// Bootstrap alert.
#[derive(Debug, Clone, Default)]
pub struct Alert {
    children: Vec<Node>,
    variant: Option<Variant>,
    heading: Option<String>,
    dismissible: bool,
    attrs: Attrs,
}

impl Alert {
    pub fn new(message: impl Into<Node>) -> Self {
        Self {
            children: vec![message.into()],
            ..Self::default()
        }
    }

    pub fn child(mut self, node: impl Into<Node>) -> Self {
        self.children.push(node.into());
        self
    }

    pub fn variant(mut self, variant: Variant) -> Self {
        self.variant = Some(variant);
        self
    }

    pub fn heading(mut self, heading: impl Into<String>) -> Self {
        self.heading = Some(heading.into());
        self
    }

    pub fn dismissible(mut self, dismissible: bool) -> Self {
        self.dismissible = dismissible;
        self
    }

    pub fn render(self) -> Element {
        let variant = self
            .variant
            .unwrap_or_else(|| themed_variant("Alert", "variant", Variant::Primary));

        let mut alert = html::div()
            .class(&format!("alert alert-{variant}"))
            .attr("role", "alert");
        if self.dismissible {
            alert = alert.class("alert-dismissible fade show");
        }

        let alert = alert
            .child_opt(
                self.heading
                    .map(|h| html::h4().class("alert-heading").child(h)),
            )
            .children_from(self.children);

        let alert = if self.dismissible {
            alert.child(
                html::button()
                    .attr("type", "button")
                    .class("btn-close")
                    .attr("data_bs_dismiss", "alert")
                    .attr("aria_label", "Close"),
            )
        } else {
            alert
        };

        alert.attrs(self.attrs)
    }
}

impl Attributes for Alert {
    fn attrs_mut(&mut self) -> &mut Attrs {
        &mut self.attrs
    }
}

impl From<Alert> for Node {
    fn from(alert: Alert) -> Self {
        alert.render().into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bootwire_core::Render;

    #[test]
    fn test_dismissible_alert() {
        let html = Alert::new("Heads up")
            .variant(Variant::Warning)
            .heading("Note")
            .dismissible(true)
            .render()
            .to_html();

        assert!(html.starts_with(
            r#"<div class="alert alert-warning alert-dismissible fade show" role="alert"><h4 class="alert-heading">Note</h4>Heads up"#
        ));
        assert!(html.contains(r#"data-bs-dismiss="alert""#));
    }
}
