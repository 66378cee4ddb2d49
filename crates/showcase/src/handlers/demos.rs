//! htmx partials and actions used by the component gallery.

use axum::extract::{Query, State};
use bootwire_components::display::{Card, EmptyState};
use bootwire_components::feedback::Alert;
use bootwire_components::forms::ThemeMode;
use bootwire_components::presets::InfiniteScroll;
use bootwire_components::Variant;
use bootwire_core::{html, Attributes, Element, Fragment};
use bootwire_web::{
    hx_refresh, hx_trigger, toast_response, HxResponse, Markup, Session, ToastMessage, Trigger,
};
use serde::Deserialize;
use serde_json::json;

use crate::state::AppState;

/// Names searched by the active search demo.
pub const COMPONENT_NAMES: &[&str] = &[
    "Alert",
    "AuthLayout",
    "Button",
    "Card",
    "EmptyState",
    "ErrorPage",
    "FeatureGrid",
    "FooterModern",
    "FormGroup",
    "InstallPrompt",
    "Modal",
    "Navbar",
    "NavbarModern",
    "PricingGroup",
    "SearchableSelect",
    "SkipLink",
    "TextClamp",
    "ThemeToggle",
    "Toast",
    "ToggleGroup",
];

const PAGE_SIZE: u32 = 10;
const LAST_PAGE: u32 = 5;

#[derive(Deserialize, Default)]
pub struct SearchQuery {
    #[serde(default)]
    pub q: String,
}

/// GET /search
pub async fn search(Query(query): Query<SearchQuery>) -> Markup<Fragment> {
    let needle = query.q.trim().to_lowercase();
    let matches: Fragment = COMPONENT_NAMES
        .iter()
        .filter(|name| name.to_lowercase().contains(&needle))
        .map(|name| html::li().class("list-group-item").child(*name))
        .collect();

    if matches.is_empty() {
        let empty = EmptyState::new("No matches")
            .description(format!("Nothing matches \"{}\".", query.q.trim()))
            .icon("search")
            .render();
        return Markup(Fragment::from(html::li().class("list-group-item").child(empty)));
    }
    Markup(matches)
}

#[derive(Deserialize)]
pub struct ItemsQuery {
    pub page: Option<u32>,
}

/// GET /items?page=N
///
/// Appends one page of items; every page but the last ends with the trigger
/// for the next one.
pub async fn items(Query(query): Query<ItemsQuery>) -> Markup<Fragment> {
    let page = query.page.unwrap_or(1).clamp(1, LAST_PAGE);
    let first = (page - 1) * PAGE_SIZE + 1;

    let mut fragment: Fragment = (first..first + PAGE_SIZE)
        .map(|n| html::li().class("list-group-item").child(format!("Item {n}")))
        .collect();

    if page < LAST_PAGE {
        fragment.push(
            html::li().class("list-group-item border-0 p-0").child(
                InfiniteScroll::new(format!("/items?page={}", page + 1), "closest li")
                    .attr("hx_swap", "outerHTML")
                    .render(),
            ),
        );
    }
    Markup(fragment)
}

fn format_uptime(secs: u64) -> String {
    format!("{:02}:{:02}:{:02}", secs / 3600, (secs / 60) % 60, secs % 60)
}

/// GET /clock
pub async fn clock(State(state): State<AppState>) -> Markup<Element> {
    let uptime = format_uptime(state.started.elapsed().as_secs());
    Markup(
        html::span()
            .class("font-monospace fs-4")
            .child(format!("Up {uptime}")),
    )
}

/// GET /lazy
pub async fn lazy() -> Markup<Element> {
    Markup(
        Card::new()
            .title("Loaded on demand")
            .child(html::p().child("This card was fetched when it scrolled into view."))
            .render(),
    )
}

/// POST /save
pub async fn save() -> Markup<Fragment> {
    let content = Alert::new("Your changes were saved.")
        .variant(Variant::Success)
        .render();
    Markup(toast_response(
        content,
        ToastMessage::new("Changes saved").title("Saved"),
    ))
}

/// POST /notify
pub async fn notify() -> HxResponse {
    hx_trigger(Trigger::with_detail(
        "showMessage",
        json!({ "level": "info", "message": "Hello from the server" }),
    ))
}

/// POST /theme/toggle
///
/// Flips the theme stored in the session and asks htmx to reload the page.
pub async fn toggle_theme(session: Session) -> HxResponse {
    let current = session
        .get("theme")
        .and_then(|value| value.as_str().and_then(ThemeMode::parse))
        .unwrap_or_default();
    let next = current.toggled();
    tracing::debug!(theme = next.as_str(), "Switched theme");
    session.insert("theme", next.as_str());
    hx_refresh()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_uptime() {
        assert_eq!(format_uptime(0), "00:00:00");
        assert_eq!(format_uptime(3_725), "01:02:05");
    }
}
