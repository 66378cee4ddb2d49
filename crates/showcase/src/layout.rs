//! Page chrome shared by the showcase pages.

use bootwire_components::accessibility::SkipLink;
use bootwire_components::feedback::{InstallPrompt, ToastContainer};
use bootwire_components::patterns::{FooterColumn, FooterModern, NavbarModern};
use bootwire_core::{html, Attributes, Fragment, Node};
use bootwire_web::{Page, Session};

use crate::state::AppState;

const BRAND: &str = "bootwire";

fn navbar(signed_in: bool) -> NavbarModern {
    let nav = NavbarModern::new(BRAND)
        .link("Home", "/")
        .link("Components", "/components")
        .link("Dashboard", "/dashboard");
    if signed_in {
        nav
    } else {
        nav.link("Sign In", "/login")
    }
}

fn footer() -> FooterModern {
    FooterModern::new()
        .brand(BRAND)
        .tagline("Bootstrap components for htmx applications.")
        .column(
            FooterColumn::new("Product")
                .link("Components", "/components")
                .link("Pricing", "/#pricing"),
        )
        .column(FooterColumn::new("Account").link("Dashboard", "/dashboard"))
        .social("github", "https://github.com/cloudbridgeuy/bootwire")
}

/// Wraps `content` with navigation, toasts and the footer.
pub fn render_page(
    state: &AppState,
    session: &Session,
    head: impl Into<Fragment>,
    content: impl Into<Node>,
) -> Page {
    let signed_in = session.contains("user");
    let body = Fragment::new()
        .with(SkipLink::new().render())
        .with(navbar(signed_in).render())
        .with(html::main_el().id("main-content").child(content))
        .with(footer().render())
        .with(ToastContainer::new().render())
        .with(InstallPrompt::new().render());

    let theme = session.get("theme");
    match theme.as_ref().and_then(|value| value.as_str()) {
        Some(theme) => {
            let mut shell = (*state.shell).clone();
            shell.set_html_attr("data-bs-theme", theme);
            shell.page(head, body)
        }
        None => state.shell.page(head, body),
    }
}
