//! axum integration for bootwire.
//!
//! This crate provides:
//! - [`Markup`] and [`Page`] HTML responses, with [`Shell`] composing documents
//! - htmx response headers ([`htmx`]) and out-of-band toasts ([`toast_response`])
//! - Cookie sessions and the [`RequireAuth`] route guard
//! - [`add_bootstrap`] and [`add_pwa`] for head assets and their routes
//!
//! # Example
//!
//! ```no_run
//! use axum::{routing::get, Router};
//! use bootwire_core::html;
//! use bootwire_web::{add_bootstrap, BootstrapOptions, Shell};
//!
//! let (shell, router) = add_bootstrap(Shell::new(), Router::new(), BootstrapOptions::new());
//! let app: Router = router.route(
//!     "/",
//!     get(move || async move {
//!         shell.page(html::title().child("Home"), html::h1().child("Hello"))
//!     }),
//! );
//! # let _ = app;
//! ```

mod bootstrap;
mod config;
mod error;
mod guard;
pub mod htmx;
mod markup;
mod pwa;
pub mod session;
mod shell;
mod toast;

pub use bootstrap::{add_bootstrap, BootstrapOptions, ColorMode};
pub use config::WebConfig;
pub use error::{Result, WebError};
pub use guard::{require_auth, AuthRedirect, RequireAuth};
pub use htmx::{hx_redirect, hx_refresh, hx_reswap, hx_retarget, hx_trigger, HxResponse, Trigger};
pub use markup::Markup;
pub use pwa::{add_pwa, PwaOptions};
pub use session::{session_middleware, Session, SessionStore};
pub use shell::{Page, Shell};
pub use toast::{toast_response, ToastMessage};
