//! Pure markup logic for bootwire - no I/O, no async.
//!
//! This crate provides:
//! - The markup tree ([`Node`], [`Element`], [`Fragment`]) and HTML rendering
//! - Class merging and attribute-name conversion
//! - The component default registry ([`theme`])
//! - Stability metadata types and construction errors
//!
//! # Example
//!
//! ```
//! use bootwire_core::{html, Attributes, Render};
//!
//! let link = html::a()
//!     .attr("href", "/docs")
//!     .attr("hx_boost", "true")
//!     .class("nav-link")
//!     .child("Docs");
//!
//! assert_eq!(
//!     link.to_html(),
//!     r#"<a href="/docs" hx-boost="true" class="nav-link">Docs</a>"#
//! );
//! ```

mod attrs;
mod classes;
mod error;
pub mod html;
mod node;
mod render;
mod stability;
pub mod theme;

pub use attrs::{convert_attrs, convert_name, AttrValue, Attributes, Attrs};
pub use classes::merge_classes;
pub use error::{ComponentError, ThemeError};
pub use node::{Element, Fragment, Node};
pub use render::{escape, Render};
pub use stability::{ComponentInfo, Stability};
