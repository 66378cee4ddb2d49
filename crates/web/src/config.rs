use std::path::PathBuf;

/// Asset configuration shared by [`add_bootstrap`](crate::add_bootstrap).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WebConfig {
    pub use_cdn: bool,
    pub static_dir: PathBuf,
}

impl Default for WebConfig {
    fn default() -> Self {
        Self {
            use_cdn: false,
            static_dir: PathBuf::from("static"),
        }
    }
}

impl WebConfig {
    /// Load from environment variables.
    ///
    /// # Environment Variables
    ///
    /// - `BOOTWIRE_USE_CDN`: Serve Bootstrap from jsDelivr when `true` (default: `false`)
    /// - `BOOTWIRE_STATIC_DIR`: Directory served at `/static` (default: `static`)
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let use_cdn = lookup("BOOTWIRE_USE_CDN")
            .map(|v| v.eq_ignore_ascii_case("true"))
            .unwrap_or(false);

        let static_dir = lookup("BOOTWIRE_STATIC_DIR")
            .filter(|dir| !dir.is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("static"));

        Self {
            use_cdn,
            static_dir,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(vars: &[(&str, &str)]) -> WebConfig {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        WebConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        assert_eq!(config(&[]), WebConfig::default());
    }

    #[test]
    fn test_overrides() {
        let config = config(&[
            ("BOOTWIRE_USE_CDN", "TRUE"),
            ("BOOTWIRE_STATIC_DIR", "public/assets"),
        ]);

        assert!(config.use_cdn);
        assert_eq!(config.static_dir, PathBuf::from("public/assets"));
    }

    #[test]
    fn test_only_true_enables_cdn() {
        assert!(!config(&[("BOOTWIRE_USE_CDN", "1")]).use_cdn);
        assert!(!config(&[("BOOTWIRE_USE_CDN", "yes")]).use_cdn);
    }
}
