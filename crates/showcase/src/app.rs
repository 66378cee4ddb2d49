use std::time::Duration;

use anyhow::Result;
use axum::{
    http::StatusCode,
    middleware,
    routing::{get, post},
    Router,
};
use bootwire_core::{html, Attributes};
use bootwire_web::{
    add_bootstrap, add_pwa, session_middleware, BootstrapOptions, PwaOptions, RequireAuth, Shell,
    WebConfig,
};
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};

use crate::{
    handlers::{
        demos::{clock, items, lazy, notify, save, search, toggle_theme},
        login::{login, login_page, logout},
        pages::{components, dashboard, error_page, index, not_found},
    },
    state::AppState,
};

const HTMX_URL: &str = "https://unpkg.com/htmx.org@2.0.4";

/// Create the application router with all routes and middleware.
pub fn create_app(config: &WebConfig) -> Result<Router> {
    let shell = Shell::new().with_head(html::script().attr("src", HTMX_URL).attr("defer", true));

    let bootstrap = BootstrapOptions::from_config(config);
    let (shell, router) = add_bootstrap(shell, Router::<AppState>::new(), bootstrap);

    let pwa = PwaOptions::new("bootwire showcase", "bootwire")
        .description("Every bootwire component in one place.")
        .cache("bootwire-showcase", "v1")
        .precache(["/", "/components"]);
    let (shell, router) = add_pwa(shell, router, pwa)?;

    let state = AppState::new(shell);

    let protected = RequireAuth::new().protect(Router::new().route("/dashboard", get(dashboard)));

    let app = router
        .route("/", get(index))
        .route("/components", get(components))
        .route("/errors/{code}", get(error_page))
        // htmx partials
        .route("/search", get(search))
        .route("/items", get(items))
        .route("/clock", get(clock))
        .route("/lazy", get(lazy))
        .route("/save", post(save))
        .route("/notify", post(notify))
        .route("/theme/toggle", post(toggle_theme))
        // Sign-in
        .route("/login", get(login_page).post(login))
        .route("/logout", post(logout))
        .merge(protected)
        .fallback(not_found)
        .layer(middleware::from_fn_with_state(
            state.sessions.clone(),
            session_middleware,
        ))
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            Duration::from_secs(10),
        ))
        .with_state(state);

    Ok(app)
}
