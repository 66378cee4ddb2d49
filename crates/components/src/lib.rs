//! Server-rendered Bootstrap 5 components for htmx applications.
//!
//! Every component is a builder that renders to a [`bootwire_core::Element`]
//! (or a [`bootwire_core::Fragment`] where it produces several siblings).
//! Extra attributes go through [`bootwire_core::Attributes`], so
//! `.attr("hx_post", "/save")` becomes `hx-post="/save"`.
//!
//! Options left unset fall back to the component default registry in
//! [`bootwire_core::theme`].
//!
//! # Example
//!
//! ```
//! use bootwire_components::forms::Button;
//! use bootwire_components::Variant;
//! use bootwire_core::{Attributes, Render};
//!
//! let html = Button::new("Save")
//!     .variant(Variant::Success)
//!     .attr("hx_post", "/save")
//!     .render()
//!     .to_html();
//!
//! assert_eq!(html, r#"<button class="btn btn-success" hx-post="/save">Save</button>"#);
//! ```

pub mod accessibility;
pub mod assets;
pub mod display;
mod error;
pub mod feedback;
pub mod forms;
pub mod layout;
pub mod navigation;
pub mod patterns;
pub mod presets;
pub mod pwa;
pub mod registry;
mod script;
pub mod seo;
mod variant;

pub use error::{Error, Result};
pub use variant::{Size, Variant};
