use askama::Template;
use bootwire_core::{html, Element, Node};

use crate::error::Result;
use crate::script::js_string;

/// Assets every service worker tries to precache.
pub const DEFAULT_PRECACHE_URLS: &[&str] = &[
    "https://cdn.jsdelivr.net/npm/bootstrap@5.3.3/dist/css/bootstrap.min.css",
    "https://cdn.jsdelivr.net/npm/bootstrap@5.3.3/dist/js/bootstrap.bundle.min.js",
    "https://cdn.jsdelivr.net/npm/bootstrap-icons@1.11.3/font/bootstrap-icons.min.css",
];

#[derive(Template)]
#[template(path = "sw.js", escape = "none")]
struct ServiceWorkerTemplate<'a> {
    cache_name: &'a str,
    offline_fallback: &'a str,
    precache_list: &'a str,
}

/// Service worker configuration.
///
/// The generated script precaches on install (best effort), serves
/// navigations network-first with an offline fallback, serves static assets
/// stale-while-revalidate and drops caches from older versions on activate.
/// The output depends only on these fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceWorker {
    pub cache_name: String,
    pub cache_version: String,
    pub precache: Vec<String>,
    pub offline_fallback: String,
}

impl Default for ServiceWorker {
    fn default() -> Self {
        Self {
            cache_name: "bootwire-app".to_string(),
            cache_version: "v1".to_string(),
            precache: Vec::new(),
            offline_fallback: "/offline".to_string(),
        }
    }
}

impl ServiceWorker {
    pub fn new(cache_name: impl Into<String>, cache_version: impl Into<String>) -> Self {
        Self {
            cache_name: cache_name.into(),
            cache_version: cache_version.into(),
            ..Self::default()
        }
    }

    /// Extra URLs to precache after the defaults.
    pub fn precache<I, S>(mut self, urls: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.precache.extend(urls.into_iter().map(Into::into));
        self
    }

    /// `{cache_name}-{cache_version}`.
    pub fn full_cache_name(&self) -> String {
        format!("{}-{}", self.cache_name, self.cache_version)
    }

    /// Defaults, then extra URLs, then the offline fallback, without
    /// duplicates and in first-seen order.
    pub fn precache_urls(&self) -> Vec<String> {
        let candidates = DEFAULT_PRECACHE_URLS
            .iter()
            .copied()
            .chain(self.precache.iter().map(String::as_str))
            .chain(std::iter::once(self.offline_fallback.as_str()));

        let mut urls: Vec<String> = Vec::new();
        for url in candidates {
            if !urls.iter().any(|seen| seen == url) {
                urls.push(url.to_string());
            }
        }
        urls
    }

    pub fn render(&self) -> Result<String> {
        let cache_name = js_string(&self.full_cache_name());
        let offline_fallback = js_string(&self.offline_fallback);
        let precache_list = self
            .precache_urls()
            .iter()
            .map(|url| js_string(url))
            .collect::<Vec<_>>()
            .join(",\n  ");

        let script = ServiceWorkerTemplate {
            cache_name: &cache_name,
            offline_fallback: &offline_fallback,
            precache_list: &precache_list,
        }
        .render()?;
        Ok(script)
    }
}

/// Registers `/sw.js` once the page has loaded.
pub fn register_script() -> Element {
    html::script().child(Node::raw(
        r#"
if ('serviceWorker' in navigator) {
    window.addEventListener('load', () => {
        navigator.serviceWorker.register('/sw.js')
            .then(reg => console.log('SW registered!', reg))
            .catch(err => console.log('SW failed', err));
    });
}
"#,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_precache_dedup_order() {
        let sw = ServiceWorker::default().precache([
            "/static/app.css",
            DEFAULT_PRECACHE_URLS[0],
            "/offline",
            "/static/app.css",
        ]);

        let urls = sw.precache_urls();
        assert_eq!(urls.len(), DEFAULT_PRECACHE_URLS.len() + 2);
        assert_eq!(urls[0], DEFAULT_PRECACHE_URLS[0]);
        assert_eq!(urls[DEFAULT_PRECACHE_URLS.len()], "/static/app.css");
        assert_eq!(urls.last().map(String::as_str), Some("/offline"));
    }

    #[test]
    fn test_render_is_deterministic() {
        let sw = ServiceWorker::new("notes", "v3").precache(["/static/app.js"]);

        let first = sw.render().unwrap();
        let second = sw.clone().render().unwrap();

        assert_eq!(first, second);
        assert!(first.starts_with(r#"const CACHE_NAME = "notes-v3";"#));
        assert!(first.contains(r#"const OFFLINE_FALLBACK = "/offline";"#));
        assert!(first.contains("\"/static/app.js\",\n  \"/offline\"\n];"));
        assert!(first.contains("Promise.allSettled"));
        assert!(first.contains("staleWhileRevalidate"));
        assert!(first.contains("name !== CACHE_NAME"));
    }

    #[test]
    fn test_render_escapes_urls() {
        let script = ServiceWorker::new("notes\"", "v1")
            .precache([r#"/search?q=");alert(1);//"#, "/</script>"])
            .render()
            .unwrap();

        assert!(script.starts_with(r#"const CACHE_NAME = "notes\"-v1";"#));
        assert!(script.contains(r#""/search?q=\");alert(1);//""#));
        assert!(script.contains(r#""/<\/script>""#));
        assert!(!script.contains("</script>"));
    }

    #[test]
    fn test_version_changes_cache_name() {
        let v1 = ServiceWorker::new("notes", "v1").render().unwrap();
        let v2 = ServiceWorker::new("notes", "v2").render().unwrap();

        assert_ne!(v1, v2);
        assert!(v2.contains("\"notes-v2\""));
    }

    #[test]
    fn test_register_script() {
        let html = bootwire_core::Render::to_html(&register_script());
        assert!(html.starts_with("<script>"));
        assert!(html.contains("navigator.serviceWorker.register('/sw.js')"));
    }
}
