use std::future::ready;

use axum::{http::header, response::Html, routing::get, Json, Router};
use bootwire_components::pwa::{offline_page, register_script, Manifest, PwaMeta, ServiceWorker};
use bootwire_core::Render;

use crate::error::Result;
use crate::shell::Shell;

/// Options for [`add_pwa`].
#[derive(Debug, Clone)]
pub struct PwaOptions {
    pub name: String,
    pub short_name: String,
    pub description: String,
    pub theme_color: String,
    pub background_color: String,
    pub icon_path: String,
    pub display: String,
    pub start_url: String,
    pub scope: String,
    /// Serve `/sw.js` and register it from the head.
    pub service_worker: bool,
    /// Serve `/offline`.
    pub offline_page: bool,
    pub cache_name: String,
    pub cache_version: String,
    /// Precached in addition to the defaults.
    pub precache: Vec<String>,
}

impl Default for PwaOptions {
    fn default() -> Self {
        Self {
            name: "Bootwire App".to_string(),
            short_name: "Bootwire".to_string(),
            description: "A Progressive Web App built with bootwire".to_string(),
            theme_color: "#ffffff".to_string(),
            background_color: "#ffffff".to_string(),
            icon_path: "/assets/icon.png".to_string(),
            display: "standalone".to_string(),
            start_url: "/".to_string(),
            scope: "/".to_string(),
            service_worker: true,
            offline_page: true,
            cache_name: "bootwire-app".to_string(),
            cache_version: "v1".to_string(),
            precache: Vec::new(),
        }
    }
}

impl PwaOptions {
    pub fn new(name: impl Into<String>, short_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            short_name: short_name.into(),
            ..Self::default()
        }
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn theme_color(mut self, color: impl Into<String>) -> Self {
        self.theme_color = color.into();
        self
    }

    pub fn icon_path(mut self, path: impl Into<String>) -> Self {
        self.icon_path = path.into();
        self
    }

    pub fn service_worker(mut self, enabled: bool) -> Self {
        self.service_worker = enabled;
        self
    }

    pub fn offline_page(mut self, enabled: bool) -> Self {
        self.offline_page = enabled;
        self
    }

    pub fn cache(mut self, name: impl Into<String>, version: impl Into<String>) -> Self {
        self.cache_name = name.into();
        self.cache_version = version.into();
        self
    }

    pub fn precache<I, S>(mut self, urls: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.precache.extend(urls.into_iter().map(Into::into));
        self
    }

    pub fn manifest(&self) -> Manifest {
        let mut manifest = Manifest::new(
            self.name.as_str(),
            self.short_name.as_str(),
            self.description.as_str(),
            &self.icon_path,
        );
        manifest.theme_color = self.theme_color.clone();
        manifest.background_color = self.background_color.clone();
        manifest.display = self.display.clone();
        manifest.start_url = self.start_url.clone();
        manifest.scope = self.scope.clone();
        manifest
    }

    pub fn service_worker_config(&self) -> ServiceWorker {
        ServiceWorker::new(self.cache_name.as_str(), self.cache_version.as_str())
            .precache(self.precache.iter().cloned())
    }
}

/// Adds install metadata to the head and registers `/manifest.json`, plus
/// `/sw.js` and `/offline` when enabled.
///
/// The service worker script is rendered once, here.
pub fn add_pwa<S>(
    mut shell: Shell,
    router: Router<S>,
    options: PwaOptions,
) -> Result<(Shell, Router<S>)>
where
    S: Clone + Send + Sync + 'static,
{
    for tag in PwaMeta::new(options.name.as_str())
        .short_name(options.short_name.as_str())
        .theme_color(options.theme_color.as_str())
        .description(options.description.as_str())
        .icon_path(options.icon_path.as_str())
        .elements()
    {
        shell.push_head(tag);
    }

    let manifest = Json(options.manifest());
    let mut router = router.route("/manifest.json", get(move || ready(manifest.clone())));

    if options.service_worker {
        let script = options.service_worker_config().render()?;
        let serve_script = move || {
            ready((
                [(header::CONTENT_TYPE, "application/javascript")],
                script.clone(),
            ))
        };
        router = router.route("/sw.js", get(serve_script));
        shell.push_head(register_script());
    }

    if options.offline_page {
        let (title, body) = offline_page(&options.name, &options.start_url);
        let page = Html(shell.page(title, body).to_html());
        router = router.route("/offline", get(move || ready(page.clone())));
    }

    tracing::info!(
        name = %options.name,
        service_worker = options.service_worker,
        offline_page = options.offline_page,
        "PWA routes registered"
    );

    Ok((shell, router))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use http_body_util::BodyExt;
    use serde_json::Value;
    use tower::ServiceExt;

    async fn get_body(router: Router, uri: &str) -> (StatusCode, Option<String>, String) {
        let response = router
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let content_type = response
            .headers()
            .get(header::CONTENT_TYPE)
            .map(|v| v.to_str().unwrap().to_string());
        let body = response.into_body().collect().await.unwrap().to_bytes();
        (status, content_type, String::from_utf8(body.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn test_manifest_route() {
        let options = PwaOptions::new("Field Notes", "Notes").theme_color("#0d6efd");
        let (_shell, router) = add_pwa(Shell::new(), Router::new(), options).unwrap();

        let (status, _, body) = get_body(router, "/manifest.json").await;
        assert_eq!(status, StatusCode::OK);

        let manifest: Value = serde_json::from_str(&body).unwrap();
        assert_eq!(manifest["name"], "Field Notes");
        assert_eq!(manifest["short_name"], "Notes");
        assert_eq!(manifest["theme_color"], "#0d6efd");
        assert_eq!(manifest["display"], "standalone");
        assert_eq!(manifest["icons"][1]["sizes"], "512x512");
    }

    #[tokio::test]
    async fn test_service_worker_route() {
        let options = PwaOptions::default()
            .cache("notes", "v3")
            .precache(["/static/app.css"]);
        let (shell, router) = add_pwa(Shell::new(), Router::new(), options).unwrap();

        let (status, content_type, body) = get_body(router, "/sw.js").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(content_type.as_deref(), Some("application/javascript"));
        assert!(body.contains("notes-v3"));
        assert!(body.contains("\"/static/app.css\""));

        let last = shell.head().last().and_then(|n| n.as_element()).unwrap();
        assert_eq!(last.tag(), "script");
        assert!(last.to_html().contains("serviceWorker.register('/sw.js')"));
    }

    #[tokio::test]
    async fn test_offline_route() {
        let (_shell, router) =
            add_pwa(Shell::new(), Router::new(), PwaOptions::new("Field Notes", "Notes")).unwrap();

        let (status, _, body) = get_body(router, "/offline").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.starts_with("<!doctype html>"));
        assert!(body.contains("<title>Offline - Field Notes</title>"));
        assert!(body.contains("No Internet Connection"));
        assert!(body.contains(r#"<link rel="manifest" href="/manifest.json">"#));
    }

    #[tokio::test]
    async fn test_disabled_routes() {
        let options = PwaOptions::default()
            .service_worker(false)
            .offline_page(false);
        let (shell, router) = add_pwa(Shell::new(), Router::new(), options).unwrap();

        let (status, _, _) = get_body(router.clone(), "/sw.js").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        let (status, _, _) = get_body(router, "/offline").await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        assert!(shell
            .head()
            .iter()
            .filter_map(|n| n.as_element())
            .all(|el| el.tag() != "script"));
    }
}
