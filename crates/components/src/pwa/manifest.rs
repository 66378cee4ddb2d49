use serde::Serialize;

/// One entry of the manifest's `icons` list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ManifestIcon {
    pub src: String,
    pub sizes: String,
    #[serde(rename = "type")]
    pub mime_type: String,
}

/// The web app manifest served at `/manifest.json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Manifest {
    pub name: String,
    pub short_name: String,
    pub description: String,
    pub theme_color: String,
    pub background_color: String,
    pub display: String,
    pub start_url: String,
    pub scope: String,
    pub icons: Vec<ManifestIcon>,
}

impl Default for Manifest {
    fn default() -> Self {
        Self::new(
            "Bootwire App",
            "Bootwire",
            "A Progressive Web App built with bootwire",
            "/assets/icon.png",
        )
    }
}

impl Manifest {
    /// Manifest with white colours, standalone display, root scope and
    /// 192x192 plus 512x512 entries for `icon_path`.
    pub fn new(
        name: impl Into<String>,
        short_name: impl Into<String>,
        description: impl Into<String>,
        icon_path: &str,
    ) -> Self {
        let icon = |sizes: &str| ManifestIcon {
            src: icon_path.to_string(),
            sizes: sizes.to_string(),
            mime_type: "image/png".to_string(),
        };

        Self {
            name: name.into(),
            short_name: short_name.into(),
            description: description.into(),
            theme_color: "#ffffff".to_string(),
            background_color: "#ffffff".to_string(),
            display: "standalone".to_string(),
            start_url: "/".to_string(),
            scope: "/".to_string(),
            icons: vec![icon("192x192"), icon("512x512")],
        }
    }
}
