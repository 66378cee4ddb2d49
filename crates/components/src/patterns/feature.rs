use bootwire_core::{html, Attributes, Attrs, Element, Node};

use crate::display::icon;
use crate::layout::{row, Col};
use crate::patterns::column_span;

/// A single feature: icon badge, title, description.
#[derive(Debug, Clone)]
pub struct Feature {
    title: String,
    description: String,
    icon: Option<Node>,
    icon_class: String,
    attrs: Attrs,
}

impl Feature {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            icon: None,
            icon_class: "bg-primary text-white".to_string(),
            attrs: Attrs::new(),
        }
    }

    /// Bootstrap Icons name.
    pub fn icon(mut self, name: &str) -> Self {
        self.icon = Some(icon(name).into());
        self
    }

    /// Custom icon content in place of a Bootstrap icon.
    pub fn icon_node(mut self, node: impl Into<Node>) -> Self {
        self.icon = Some(node.into());
        self
    }

    pub fn icon_class(mut self, classes: impl Into<String>) -> Self {
        self.icon_class = classes.into();
        self
    }

    pub fn render(self) -> Element {
        let icon_class = format!("feature-icon {}", self.icon_class);
        html::div()
            .class("feature-item")
            .attrs(self.attrs)
            .child_opt(self.icon.map(|icon| html::div().class(&icon_class).child(icon)))
            .child(html::h3().class("fs-4 fw-bold").child(self.title))
            .child(html::p().class("text-muted").child(self.description))
    }
}

impl Attributes for Feature {
    fn attrs_mut(&mut self) -> &mut Attrs {
        &mut self.attrs
    }
}

impl From<Feature> for Node {
    fn from(feature: Feature) -> Self {
        feature.render().into()
    }
}

/// Responsive grid of features.
#[derive(Debug, Clone)]
pub struct FeatureGrid {
    features: Vec<Node>,
    columns: usize,
    attrs: Attrs,
}

impl Default for FeatureGrid {
    fn default() -> Self {
        Self {
            features: Vec::new(),
            columns: 3,
            attrs: Attrs::new(),
        }
    }
}

impl FeatureGrid {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn feature(mut self, feature: impl Into<Node>) -> Self {
        self.features.push(feature.into());
        self
    }

    pub fn columns(mut self, columns: usize) -> Self {
        self.columns = columns;
        self
    }

    pub fn render(self) -> Element {
        let span = column_span(self.columns);
        html::div()
            .class("feature-grid")
            .attrs(self.attrs)
            .child(row().children_from(
                self.features
                    .into_iter()
                    .map(|feature| Col::new().md(span).class("mb-4").child(feature)),
            ))
    }
}

impl Attributes for FeatureGrid {
    fn attrs_mut(&mut self) -> &mut Attrs {
        &mut self.attrs
    }
}

impl From<FeatureGrid> for Node {
    fn from(grid: FeatureGrid) -> Self {
        grid.render().into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bootwire_core::Render;

    #[test]
    fn test_feature_with_icon() {
        let html = Feature::new("Fast", "Server rendered").icon("lightning").render().to_html();

        assert_eq!(
            html,
            concat!(
                r#"<div class="feature-item">"#,
                r#"<div class="feature-icon bg-primary text-white"><i class="bi bi-lightning" aria-hidden="true"></i></div>"#,
                r#"<h3 class="fs-4 fw-bold">Fast</h3><p class="text-muted">Server rendered</p></div>"#
            )
        );
    }

    #[test]
    fn test_grid_columns() {
        let html = FeatureGrid::new()
            .columns(2)
            .feature(Feature::new("A", "a"))
            .feature(Feature::new("B", "b"))
            .render()
            .to_html();

        assert_eq!(html.matches(r#"class="col-md-6 mb-4""#).count(), 2);
        assert!(html.starts_with(r#"<div class="feature-grid"><div class="row">"#));
    }
}
