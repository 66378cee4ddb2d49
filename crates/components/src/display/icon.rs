use bootwire_core::{html, Attributes, Element};

/// A Bootstrap Icons glyph, hidden from assistive technology.
///
/// ```
/// use bootwire_components::display::icon;
/// use bootwire_core::Render;
///
/// assert_eq!(
///     icon("check").to_html(),
///     r#"<i class="bi bi-check" aria-hidden="true"></i>"#
/// );
/// ```
pub fn icon(name: &str) -> Element {
    html::i()
        .class(&format!("bi bi-{name}"))
        .attr("aria_hidden", "true")
}
