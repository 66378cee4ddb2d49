//! Shorthand constructors for the tags the components use.

use crate::node::Element;

macro_rules! tags {
    ($($name:ident),* $(,)?) => {
        $(
            #[inline]
            pub fn $name() -> Element {
                Element::new(stringify!($name))
            }
        )*
    };
}

tags!(
    a, blockquote, button, div, footer, form, h1, h2, h3, h4, h5, h6, header, hr, i, img, input,
    label, li, link, meta, nav, option, p, script, section, select, small, span, strong, style,
    title, ul,
);

/// `<main>`.
pub fn main_el() -> Element {
    Element::new("main")
}
