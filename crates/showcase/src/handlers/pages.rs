//! Full-page handlers.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use bootwire_components::display::{Card, EmptyState, TextClamp};
use bootwire_components::feedback::{error_defaults, Alert, ErrorPage, Modal};
use bootwire_components::forms::{Button, SearchableSelect, ThemeMode, ThemeToggle, ToggleGroup};
use bootwire_components::layout::{container, row, Col};
use bootwire_components::patterns::{
    Feature, FeatureGrid, PricingGroup, PricingTier, Testimonial, TestimonialSection,
};
use bootwire_components::presets::{
    ActiveSearch, AutoRefresh, InfiniteScroll, LazyLoad, LoadingButton,
};
use bootwire_components::seo::{Organization, PageMeta, StructuredData};
use bootwire_components::Variant;
use bootwire_core::{html, Attributes, Element, Node};
use bootwire_web::{Page, Session};

use crate::handlers::AppError;
use crate::layout::render_page;
use crate::state::AppState;

fn page_meta(title: &str, description: &str, path: &str) -> PageMeta {
    PageMeta::new()
        .title(title)
        .description(description)
        .url(format!("https://bootwire.dev{path}"))
}

fn hero() -> Element {
    html::section().class("py-5 text-center").child(
        container()
            .child(html::h1().class("display-5 fw-bold").child("bootwire"))
            .child(
                html::p()
                    .class("lead text-muted mb-4")
                    .child("Server-rendered Bootstrap 5 components with htmx built in."),
            )
            .child(
                Button::new("Browse components")
                    .variant(Variant::Primary)
                    .href("/components")
                    .render(),
            ),
    )
}

/// GET /
pub async fn index(State(state): State<AppState>, session: Session) -> Result<Page, AppError> {
    let organization = StructuredData::organization(&Organization {
        name: "bootwire".to_string(),
        url: "https://bootwire.dev".to_string(),
        logo: "https://bootwire.dev/assets/icon.png".to_string(),
        social_links: vec!["https://github.com/cloudbridgeuy/bootwire".to_string()],
    })?;

    let mut head = page_meta(
        "bootwire",
        "Bootstrap 5 components for htmx applications.",
        "/",
    )
    .render();
    head.push(organization.render()?);

    let features = FeatureGrid::new()
        .columns(3)
        .feature(
            Feature::new("htmx presets", "Active search, infinite scroll and polling in one call.")
                .icon("lightning-charge")
                .render(),
        )
        .feature(
            Feature::new("Theme defaults", "Set component defaults once for the whole app.")
                .icon("palette")
                .render(),
        )
        .feature(
            Feature::new("PWA ready", "Manifest, service worker and offline page included.")
                .icon("phone")
                .render(),
        );

    let pricing = PricingGroup::new()
        .title("Pricing")
        .subtitle("Free for every project.")
        .attr("id", "pricing")
        .tier(
            PricingTier::new("Community", 0)
                .features(["All components", "htmx presets"])
                .button("Get started", "/components")
                .render(),
        )
        .tier(
            PricingTier::new("Support", 49)
                .period("month")
                .features(["All components", "Priority answers"])
                .button("Contact", "/login")
                .highlighted(true)
                .render(),
        );

    let testimonials = TestimonialSection::new().title("What people say").testimonial(
        Testimonial::new("Our admin screens took a day instead of a week.", "Sam Rivera")
            .role("Backend engineer")
            .rating(5)
            .render(),
    );

    let content = html::div()
        .child(hero())
        .child(container().class("py-5").child(features.render()))
        .child(pricing.render())
        .child(testimonials.render());

    Ok(render_page(&state, &session, head, content))
}

fn section(title: &str, body: impl Into<Node>) -> Element {
    Col::new()
        .md(6)
        .child(Card::new().title(title).child(body).render())
        .render()
        .class("mb-4")
}

fn current_theme(session: &Session) -> ThemeMode {
    session
        .get("theme")
        .and_then(|value| value.as_str().and_then(ThemeMode::parse))
        .unwrap_or_default()
}

/// GET /components
pub async fn components(
    State(state): State<AppState>,
    session: Session,
) -> Result<Page, AppError> {
    let toggle_group = ToggleGroup::new([
        Button::new("Day").outline(true).render(),
        Button::new("Week").outline(true).render(),
        Button::new("Month").outline(true).render(),
    ])
    .name("view")
    .values(["day", "week", "month"])
    .active_index(1)
    .render()?;

    let search = html::div()
        .child(ActiveSearch::new("/search").target("#search-results").render())
        .child(html::ul().class("list-group mt-2").id("search-results"));

    let items = html::ul()
        .class("list-group")
        .id("items")
        .child(
            html::li().class("list-group-item border-0 p-0").child(
                InfiniteScroll::new("/items?page=1", "closest li")
                    .attr("hx_swap", "outerHTML")
                    .render(),
            ),
        );

    let modal = Modal::new("demo-modal")
        .title("Hello")
        .child(html::p().child("Modals render on the server too."))
        .render();

    let grid = row()
        .child(section(
            "Alerts",
            html::div()
                .child(Alert::new("Saved successfully.").variant(Variant::Success).render())
                .child(
                    Alert::new("Check your input.")
                        .variant(Variant::Warning)
                        .dismissible(true)
                        .render(),
                ),
        ))
        .child(section(
            "Buttons",
            html::div()
                .class("d-flex gap-2 flex-wrap")
                .child(Button::new("Primary").render())
                .child(Button::new("Outline").outline(true).render())
                .child(
                    Button::new("Open modal")
                        .variant(Variant::Secondary)
                        .attr("data_bs_toggle", "modal")
                        .attr("data_bs_target", "#demo-modal")
                        .render(),
                ),
        ))
        .child(section(
            "Save with toast",
            html::div()
                .child(
                    LoadingButton::new("Save", "/save")
                        .target("#save-result")
                        .render(),
                )
                .child(html::div().id("save-result").class("mt-2")),
        ))
        .child(section(
            "Client event",
            Button::new("Notify me")
                .variant(Variant::Info)
                .attr("hx_post", "/notify")
                .attr("hx_swap", "none")
                .render(),
        ))
        .child(section("Active search", search))
        .child(section("Toggle group", toggle_group))
        .child(section(
            "Searchable select",
            SearchableSelect::new("/search", "component")
                .placeholder("Pick a component")
                .render(),
        ))
        .child(section(
            "Theme",
            ThemeToggle::new()
                .current(current_theme(&session))
                .endpoint("/theme/toggle")
                .label("Dark mode")
                .render(),
        ))
        .child(section(
            "Uptime",
            AutoRefresh::new("/clock", "this")
                .interval_ms(1000)
                .render(),
        ))
        .child(section("Lazy content", LazyLoad::new("/lazy").render()))
        .child(section(
            "Text clamp",
            TextClamp::new(
                "Components read their defaults from a shared registry, so a theme \
                 can change every button in the app without touching call sites.",
            )
            .max_chars(60)
            .render(),
        ))
        .child(section(
            "Empty state",
            EmptyState::new("No projects yet")
                .description("Create one to get started.")
                .icon("folder")
                .render(),
        ))
        .child(section("Infinite scroll", items));

    let content = container()
        .class("py-4")
        .child(html::h1().class("mb-4").child("Components"))
        .child(grid)
        .child(modal);

    let head = page_meta(
        "Components | bootwire",
        "Every bootwire component and htmx preset.",
        "/components",
    )
    .render();

    Ok(render_page(&state, &session, head, content))
}

/// GET /dashboard, behind `RequireAuth`.
pub async fn dashboard(State(state): State<AppState>, session: Session) -> Page {
    let user = session
        .get("user")
        .and_then(|value| value.as_str().map(str::to_string))
        .unwrap_or_default();

    let content = container()
        .class("py-4")
        .child(html::h1().child(format!("Welcome, {user}")))
        .child(
            Card::new()
                .title("Session")
                .child(html::p().child("This page is only visible after signing in."))
                .footer(
                    Button::new("Sign out")
                        .variant(Variant::Danger)
                        .outline(true)
                        .attr("hx_post", "/logout")
                        .render(),
                )
                .render(),
        );

    let head = PageMeta::new()
        .title("Dashboard | bootwire")
        .robots(Some("noindex, nofollow"))
        .render();

    render_page(&state, &session, head, content)
}

fn error_response(state: &AppState, session: &Session, code: u16) -> impl IntoResponse {
    let status = StatusCode::from_u16(code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    let (title, body) = ErrorPage::new(code).render();
    (status, render_page(state, session, title, body))
}

/// GET /errors/{code}. Unknown codes answer with the 404 page.
pub async fn error_page(
    State(state): State<AppState>,
    session: Session,
    Path(code): Path<u16>,
) -> impl IntoResponse {
    let code = if error_defaults(code).is_some() { code } else { 404 };
    error_response(&state, &session, code)
}

/// Fallback for unmatched routes.
pub async fn not_found(State(state): State<AppState>, session: Session) -> impl IntoResponse {
    error_response(&state, &session, 404)
}
