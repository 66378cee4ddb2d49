//! Session-presence route guard.
//!
//! The guard only checks that a session key is set. Logging in, token
//! validation and permissions are left to the application.

use std::future::Future;
use std::sync::Arc;

use axum::{
    extract::{Request, State},
    http::{header, StatusCode, Uri},
    middleware::{self, Next},
    response::{IntoResponse, Response},
    Router,
};

use crate::session::Session;

/// 303 redirect to the login page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthRedirect {
    location: String,
}

impl AuthRedirect {
    pub fn location(&self) -> &str {
        &self.location
    }
}

impl IntoResponse for AuthRedirect {
    fn into_response(self) -> Response {
        (StatusCode::SEE_OTHER, [(header::LOCATION, self.location)]).into_response()
    }
}

/// Redirects requests whose session lacks `session_key` to `login_url`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequireAuth {
    pub login_url: String,
    pub session_key: String,
    /// Query parameter carrying the original path and query, `None` to omit it.
    pub redirect_param: Option<String>,
}

impl Default for RequireAuth {
    fn default() -> Self {
        Self {
            login_url: "/login".to_string(),
            session_key: "user".to_string(),
            redirect_param: Some("next".to_string()),
        }
    }
}

impl RequireAuth {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn login_url(mut self, url: impl Into<String>) -> Self {
        self.login_url = url.into();
        self
    }

    pub fn session_key(mut self, key: impl Into<String>) -> Self {
        self.session_key = key.into();
        self
    }

    pub fn redirect_param(mut self, param: Option<&str>) -> Self {
        self.redirect_param = param.map(str::to_string);
        self
    }

    /// Where an unauthenticated request for `uri` is sent.
    pub fn login_location(&self, uri: &Uri) -> String {
        let Some(param) = &self.redirect_param else {
            return self.login_url.clone();
        };
        let original = uri
            .path_and_query()
            .map(|pq| pq.as_str())
            .unwrap_or_else(|| uri.path());
        let separator = if self.login_url.contains('?') { '&' } else { '?' };
        format!(
            "{}{separator}{param}={}",
            self.login_url,
            urlencoding::encode(original)
        )
    }

    /// `Ok` when the session holds the key, otherwise the redirect to send.
    pub fn check(&self, session: Option<&Session>, uri: &Uri) -> Result<(), AuthRedirect> {
        if session.is_some_and(|session| session.contains(&self.session_key)) {
            return Ok(());
        }

        let location = self.login_location(uri);
        tracing::debug!(path = %uri.path(), %location, "Redirecting unauthenticated request");
        Err(AuthRedirect { location })
    }

    /// Awaits `handler` once if the request is authenticated.
    pub async fn guard<F, Fut, T>(
        &self,
        session: Option<&Session>,
        uri: &Uri,
        handler: F,
    ) -> Result<T, AuthRedirect>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = T>,
    {
        self.check(session, uri)?;
        Ok(handler().await)
    }

    /// Calls `handler` once if the request is authenticated.
    pub fn guard_sync<F, T>(
        &self,
        session: Option<&Session>,
        uri: &Uri,
        handler: F,
    ) -> Result<T, AuthRedirect>
    where
        F: FnOnce() -> T,
    {
        self.check(session, uri)?;
        Ok(handler())
    }

    /// Guards every route already registered on `router`.
    ///
    /// Needs [`session_middleware`](crate::session::session_middleware)
    /// applied outside of it; without a session every request is redirected.
    pub fn protect<S>(self, router: Router<S>) -> Router<S>
    where
        S: Clone + Send + Sync + 'static,
    {
        router.route_layer(middleware::from_fn_with_state(
            Arc::new(self),
            require_auth,
        ))
    }
}

/// Middleware form of [`RequireAuth`].
///
/// Install with `axum::middleware::from_fn_with_state(Arc::new(guard), require_auth)`.
pub async fn require_auth(
    State(guard): State<Arc<RequireAuth>>,
    req: Request,
    next: Next,
) -> Response {
    match guard.check(req.extensions().get::<Session>(), req.uri()) {
        Ok(()) => next.run(req).await,
        Err(redirect) => redirect.into_response(),
    }
}
