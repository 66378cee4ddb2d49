//! Cookie-keyed in-memory sessions.
//!
//! [`session_middleware`] resolves the session cookie to a [`Session`] and
//! stores it in the request extensions, where [`RequireAuth`](crate::RequireAuth)
//! and the [`Session`] extractor find it.
//!
//! Visitors without a known cookie get a detached session. It is stored, and
//! the cookie issued, only once a handler writes to it. The store keeps at
//! most [`DEFAULT_CAPACITY`] sessions and evicts the least recently used.

use std::num::NonZeroUsize;
use std::sync::{Arc, Mutex, PoisonError, RwLock};

use axum::{
    extract::{FromRequestParts, Request, State},
    http::{request::Parts, StatusCode},
    middleware::Next,
    response::IntoResponse,
};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use lru::LruCache;
use serde_json::{Map, Value};

/// Default name of the session cookie.
pub const DEFAULT_COOKIE_NAME: &str = "bootwire_session";

/// Default number of sessions kept in memory.
pub const DEFAULT_CAPACITY: NonZeroUsize = match NonZeroUsize::new(10_000) {
    Some(capacity) => capacity,
    None => unreachable!(),
};

/// What the middleware does with a session once the handler returns.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
enum Lifecycle {
    #[default]
    Keep,
    Regenerate,
    Destroy,
}

#[derive(Debug, Default)]
struct SessionInner {
    data: RwLock<Map<String, Value>>,
    lifecycle: Mutex<Lifecycle>,
}

/// Key/value data for one visitor.
///
/// Clones share the same data, so writes made by a handler are visible to
/// later requests carrying the same cookie.
#[derive(Debug, Clone, Default)]
pub struct Session {
    inner: Arc<SessionInner>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<Value> {
        self.inner
            .data
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(key)
            .cloned()
    }

    pub fn contains(&self, key: &str) -> bool {
        self.inner
            .data
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .contains_key(key)
    }

    pub fn is_empty(&self) -> bool {
        self.inner
            .data
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .is_empty()
    }

    pub fn insert(&self, key: impl Into<String>, value: impl Into<Value>) {
        self.inner
            .data
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key.into(), value.into());
    }

    pub fn remove(&self, key: &str) -> Option<Value> {
        self.inner
            .data
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(key)
    }

    pub fn clear(&self) {
        self.inner
            .data
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }

    /// Moves the data to a fresh id when the response is sent. Call on
    /// sign-in so an id set before authentication stops being valid.
    pub fn regenerate(&self) {
        self.set_lifecycle(Lifecycle::Regenerate);
    }

    /// Clears the data, drops the session from the store and expires the
    /// cookie when the response is sent.
    pub fn destroy(&self) {
        self.clear();
        self.set_lifecycle(Lifecycle::Destroy);
    }

    fn set_lifecycle(&self, lifecycle: Lifecycle) {
        *self
            .inner
            .lifecycle
            .lock()
            .unwrap_or_else(PoisonError::into_inner) = lifecycle;
    }

    fn take_lifecycle(&self) -> Lifecycle {
        std::mem::take(
            &mut *self
                .inner
                .lifecycle
                .lock()
                .unwrap_or_else(PoisonError::into_inner),
        )
    }
}

impl<S> FromRequestParts<S> for Session
where
    S: Send + Sync,
{
    type Rejection = (StatusCode, &'static str);

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<Session>()
            .cloned()
            .ok_or((StatusCode::INTERNAL_SERVER_ERROR, "Session layer not installed"))
    }
}

/// Sessions indexed by cookie value, bounded by an LRU.
#[derive(Debug, Clone)]
pub struct SessionStore {
    sessions: Arc<Mutex<LruCache<String, Session>>>,
    cookie_name: String,
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new(DEFAULT_COOKIE_NAME)
    }
}

impl SessionStore {
    pub fn new(cookie_name: impl Into<String>) -> Self {
        Self::with_capacity(cookie_name, DEFAULT_CAPACITY)
    }

    pub fn with_capacity(cookie_name: impl Into<String>, capacity: NonZeroUsize) -> Self {
        Self {
            sessions: Arc::new(Mutex::new(LruCache::new(capacity))),
            cookie_name: cookie_name.into(),
        }
    }

    pub fn cookie_name(&self) -> &str {
        &self.cookie_name
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, LruCache<String, Session>> {
        self.sessions.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn get(&self, id: &str) -> Option<Session> {
        self.lock().get(id).cloned()
    }

    /// Stores `session` under a new id and returns the id.
    pub fn insert(&self, session: Session) -> String {
        let id = uuid::Uuid::new_v4().to_string();
        if let Some((evicted, _)) = self.lock().push(id.clone(), session) {
            if evicted != id {
                tracing::debug!(session_id = %evicted, "Evicted least recently used session");
            }
        }
        id
    }

    /// Starts a new, stored session and returns its id.
    pub fn create(&self) -> (String, Session) {
        let session = Session::new();
        let id = self.insert(session.clone());
        (id, session)
    }

    /// Removes a session. Returns `true` if it existed.
    pub fn delete(&self, id: &str) -> bool {
        self.lock().pop(id).is_some()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn cookie(&self, id: String) -> Cookie<'static> {
        Cookie::build((self.cookie_name.clone(), id))
            .path("/")
            .http_only(true)
            .same_site(SameSite::Lax)
            .build()
    }

    fn issue(&self, jar: CookieJar, session: &Session) -> CookieJar {
        let id = self.insert(session.clone());
        tracing::debug!(session_id = %id, "Started new session");
        jar.add(self.cookie(id))
    }

    /// Applies the handler's changes to `session` and returns the cookies
    /// to send. `id` is the stored id the request arrived with, if any.
    fn commit(&self, jar: CookieJar, id: Option<String>, session: &Session) -> CookieJar {
        match (session.take_lifecycle(), id) {
            (Lifecycle::Destroy, Some(id)) => {
                self.delete(&id);
                tracing::debug!(session_id = %id, "Destroyed session");
                jar.remove(Cookie::build(self.cookie_name.clone()).path("/"))
            }
            (Lifecycle::Destroy, None) => jar,
            (Lifecycle::Regenerate, Some(old)) => {
                self.delete(&old);
                self.issue(jar, session)
            }
            (_, None) if !session.is_empty() => self.issue(jar, session),
            _ => jar,
        }
    }
}

/// Attaches the visitor's [`Session`] to the request and, after the
/// handler runs, stores new or regenerated sessions and sets the cookie.
///
/// Install with `axum::middleware::from_fn_with_state(store, session_middleware)`.
pub async fn session_middleware(
    State(store): State<SessionStore>,
    jar: CookieJar,
    mut req: Request,
    next: Next,
) -> impl IntoResponse {
    let known = jar.get(store.cookie_name()).and_then(|cookie| {
        let id = cookie.value().to_string();
        store.get(&id).map(|session| (id, session))
    });
    let (id, session) = match known {
        Some((id, session)) => (Some(id), session),
        None => (None, Session::new()),
    };

    req.extensions_mut().insert(session.clone());
    let response = next.run(req).await;
    (store.commit(jar, id, &session), response)
}
