use std::path::PathBuf;

use axum::Router;
use bootwire_components::assets::get_assets;
use tower_http::services::ServeDir;

use crate::config::WebConfig;
use crate::shell::Shell;

/// Value of the `data-bs-theme` attribute on `<html>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorMode {
    Light,
    Dark,
}

impl ColorMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }
}

/// Options for [`add_bootstrap`]. Defaults match [`WebConfig::default`].
#[derive(Debug, Clone)]
pub struct BootstrapOptions {
    pub theme: Option<ColorMode>,
    pub use_cdn: bool,
    pub mount_static: bool,
    pub static_dir: PathBuf,
}

impl Default for BootstrapOptions {
    fn default() -> Self {
        Self::from_config(&WebConfig::default())
    }
}

impl BootstrapOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Asset source and static directory taken from an already loaded config.
    pub fn from_config(config: &WebConfig) -> Self {
        Self {
            theme: None,
            use_cdn: config.use_cdn,
            mount_static: true,
            static_dir: config.static_dir.clone(),
        }
    }

    pub fn theme(mut self, theme: ColorMode) -> Self {
        self.theme = Some(theme);
        self
    }

    pub fn use_cdn(mut self, use_cdn: bool) -> Self {
        self.use_cdn = use_cdn;
        self
    }

    pub fn mount_static(mut self, mount_static: bool) -> Self {
        self.mount_static = mount_static;
        self
    }

    pub fn static_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.static_dir = dir.into();
        self
    }
}

/// Puts the Bootstrap assets at the top of the head and, for local assets,
/// serves the static directory at `/static`.
///
/// The mount is skipped, with a debug log, when the shell already records a
/// `/static` service or the directory does not exist.
pub fn add_bootstrap<S>(
    mut shell: Shell,
    router: Router<S>,
    options: BootstrapOptions,
) -> (Shell, Router<S>)
where
    S: Clone + Send + Sync + 'static,
{
    shell.prepend_head(get_assets(options.use_cdn, true));
    if let Some(theme) = options.theme {
        shell.set_html_attr("data-bs-theme", theme.as_str());
    }

    if options.use_cdn || !options.mount_static {
        return (shell, router);
    }

    let static_dir = options.static_dir;
    if shell.static_mounted() {
        tracing::debug!("/static is already mounted, skipping");
        return (shell, router);
    }
    if !static_dir.is_dir() {
        tracing::debug!(
            dir = %static_dir.display(),
            "Static directory missing, skipping /static mount"
        );
        return (shell, router);
    }

    tracing::info!(dir = %static_dir.display(), "Serving /static");
    shell.mark_static_mounted();
    let router = router.nest_service("/static", ServeDir::new(static_dir));
    (shell, router)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use bootwire_core::{html, Node};
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    fn first_href(shell: &Shell) -> Option<String> {
        shell
            .head()
            .first()
            .and_then(Node::as_element)
            .and_then(|el| el.get_attr("href"))
            .map(str::to_string)
    }

    #[test]
    fn test_cdn_assets_prepended() {
        let shell = Shell::new().with_head(html::title().child("App"));
        let (shell, _router) = add_bootstrap(
            shell,
            Router::<()>::new(),
            BootstrapOptions::new().use_cdn(true).theme(ColorMode::Dark),
        );

        assert!(first_href(&shell)
            .unwrap()
            .starts_with("https://cdn.jsdelivr.net/npm/bootstrap@5.3.3/"));
        assert_eq!(shell.head().len(), 6);
        assert_eq!(shell.head()[3].as_element().unwrap().tag(), "style");
        assert_eq!(shell.html_attrs().get_str("data-bs-theme"), Some("dark"));
        assert!(!shell.static_mounted());
    }

    #[test]
    fn test_missing_static_dir_is_skipped() {
        let (shell, _router) = add_bootstrap(
            Shell::new(),
            Router::<()>::new(),
            BootstrapOptions::new()
                .use_cdn(false)
                .static_dir("/definitely/not/here"),
        );

        assert_eq!(
            first_href(&shell).as_deref(),
            Some("/static/css/bootstrap.min.css")
        );
        assert!(!shell.static_mounted());
    }

    #[test]
    fn test_already_mounted_is_skipped() {
        let dir = tempfile::tempdir().unwrap();
        let mut shell = Shell::new();
        shell.mark_static_mounted();

        // A second nest at /static would panic.
        let router = Router::<()>::new().nest_service("/static", ServeDir::new(dir.path()));
        let (shell, _router) = add_bootstrap(
            shell,
            router,
            BootstrapOptions::new().use_cdn(false).static_dir(dir.path()),
        );

        assert!(shell.static_mounted());
    }

    #[tokio::test]
    async fn test_static_dir_is_served() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir_all(dir.path().join("css")).unwrap();
        std::fs::write(dir.path().join("css/app.css"), "body { margin: 0; }").unwrap();

        let (shell, router) = add_bootstrap(
            Shell::new(),
            Router::<()>::new(),
            BootstrapOptions::new().use_cdn(false).static_dir(dir.path()),
        );
        assert!(shell.static_mounted());

        let response = router
            .oneshot(
                Request::builder()
                    .uri("/static/css/app.css")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = response.into_body().collect().await.unwrap().to_bytes();
        assert_eq!(&body[..], b"body { margin: 0; }");
    }

    #[test]
    fn test_options_from_config() {
        let config = WebConfig {
            use_cdn: true,
            static_dir: PathBuf::from("assets"),
        };
        let options = BootstrapOptions::from_config(&config);
        assert!(options.use_cdn);
        assert_eq!(options.static_dir, PathBuf::from("assets"));
        assert!(options.mount_static);

        let defaults = BootstrapOptions::new();
        assert!(!defaults.use_cdn);
        assert_eq!(defaults.static_dir, PathBuf::from("static"));
    }

    #[test]
    fn test_options_ignore_environment() {
        std::env::set_var("BOOTWIRE_USE_CDN", "true");
        let (shell, _router) = add_bootstrap(
            Shell::new(),
            Router::<()>::new(),
            BootstrapOptions::new().static_dir("/definitely/not/here"),
        );
        std::env::remove_var("BOOTWIRE_USE_CDN");

        assert_eq!(
            first_href(&shell).as_deref(),
            Some("/static/css/bootstrap.min.css")
        );
    }

    #[test]
    fn test_mount_static_opt_out() {
        let dir = tempfile::tempdir().unwrap();
        let (shell, _router) = add_bootstrap(
            Shell::new(),
            Router::<()>::new(),
            BootstrapOptions::new()
                .use_cdn(false)
                .mount_static(false)
                .static_dir(dir.path()),
        );

        assert!(!shell.static_mounted());
    }
}
