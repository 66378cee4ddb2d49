use bootwire_core::{html, Attributes, Element, Fragment};

use crate::seo::meta_name;

/// Install and theming metadata for mobile browsers.
#[derive(Debug, Clone)]
pub struct PwaMeta {
    name: String,
    short_name: Option<String>,
    theme_color: String,
    description: Option<String>,
    icon_path: String,
}

impl PwaMeta {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            short_name: None,
            theme_color: "#ffffff".to_string(),
            description: None,
            icon_path: "/static/icon.png".to_string(),
        }
    }

    pub fn short_name(mut self, short_name: impl Into<String>) -> Self {
        self.short_name = Some(short_name.into());
        self
    }

    pub fn theme_color(mut self, color: impl Into<String>) -> Self {
        self.theme_color = color.into();
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn icon_path(mut self, path: impl Into<String>) -> Self {
        self.icon_path = path.into();
        self
    }

    pub fn elements(self) -> Vec<Element> {
        let app_title = self.short_name.unwrap_or(self.name);
        let mut tags = vec![
            meta_name(
                "viewport",
                "width=device-width, initial-scale=1, maximum-scale=1, user-scalable=0",
            ),
            meta_name("theme-color", self.theme_color.as_str()),
            meta_name("mobile-web-app-capable", "yes"),
            meta_name("apple-mobile-web-app-capable", "yes"),
            meta_name("apple-mobile-web-app-status-bar-style", "black-translucent"),
            meta_name("apple-mobile-web-app-title", app_title),
            html::link()
                .attr("rel", "apple-touch-icon")
                .attr("href", self.icon_path.as_str()),
            meta_name("msapplication-TileColor", self.theme_color),
            meta_name("msapplication-TileImage", self.icon_path),
            html::link().attr("rel", "manifest").attr("href", "/manifest.json"),
        ];
        if let Some(description) = self.description {
            tags.push(meta_name("description", description));
        }
        tags
    }

    pub fn render(self) -> Fragment {
        self.elements().into_iter().collect()
    }
}
