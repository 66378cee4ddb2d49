//! Demo sign-in flow backed by the cookie session.

use axum::{
    extract::{Query, State},
    response::{IntoResponse, Redirect, Response},
    Form,
};
use bootwire_components::forms::{Button, FormGroup};
use bootwire_components::layout::AuthLayout;
use bootwire_components::seo::PageMeta;
use bootwire_components::Variant;
use bootwire_core::{html, Attributes};
use bootwire_web::{hx_redirect, HxResponse, Session};
use serde::Deserialize;

use crate::layout::render_page;
use crate::state::AppState;

const DEFAULT_NEXT: &str = "/dashboard";

#[derive(Deserialize, Default)]
pub struct LoginQuery {
    pub next: Option<String>,
}

#[derive(Deserialize)]
pub struct LoginForm {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub next: String,
}

/// Only same-site absolute paths are followed after sign-in.
fn safe_next(next: Option<&str>) -> &str {
    match next {
        Some(path) if path.starts_with('/') && !path.starts_with("//") && !path.contains('\\') => {
            path
        }
        _ => DEFAULT_NEXT,
    }
}

fn login_form(state: &AppState, session: &Session, next: &str, error: Option<&str>) -> Response {
    let mut username = FormGroup::new(
        html::input()
            .attr("type", "text")
            .attr("name", "username")
            .attr("autocomplete", "username"),
    )
    .label("Username")
    .required(true);
    if let Some(error) = error {
        username = username.error(error);
    }

    let form = AuthLayout::new()
        .brand_name("bootwire")
        .subtitle("Any username works in the demo.")
        .field(username.render())
        .field(
            html::input()
                .attr("type", "hidden")
                .attr("name", "next")
                .attr("value", next),
        )
        .field(
            Button::new("Sign In")
                .variant(Variant::Primary)
                .attr("type", "submit")
                .class("w-100")
                .render(),
        )
        .footer_text("Back to")
        .footer_link("/", "the home page")
        .render();

    let head = PageMeta::new()
        .title("Sign In | bootwire")
        .robots(Some("noindex, nofollow"))
        .render();

    render_page(state, session, head, form).into_response()
}

/// GET /login
pub async fn login_page(
    State(state): State<AppState>,
    session: Session,
    Query(query): Query<LoginQuery>,
) -> Response {
    let next = safe_next(query.next.as_deref());
    if session.contains("user") {
        return Redirect::to(next).into_response();
    }
    login_form(&state, &session, next, None)
}

/// POST /login
pub async fn login(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<LoginForm>,
) -> Response {
    let next = safe_next(Some(form.next.as_str()));
    let username = form.username.trim();
    if username.is_empty() {
        return login_form(&state, &session, next, Some("Enter a username."));
    }

    tracing::info!(user = %username, "Signed in");
    session.regenerate();
    session.insert("user", username);
    Redirect::to(next).into_response()
}

/// POST /logout
pub async fn logout(session: Session) -> HxResponse {
    session.destroy();
    hx_redirect("/")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_safe_next() {
        assert_eq!(safe_next(Some("/dashboard?tab=1")), "/dashboard?tab=1");
        assert_eq!(safe_next(Some("https://evil.example")), DEFAULT_NEXT);
        assert_eq!(safe_next(Some("//evil.example")), DEFAULT_NEXT);
        assert_eq!(safe_next(Some("/\\evil.example")), DEFAULT_NEXT);
        assert_eq!(safe_next(None), DEFAULT_NEXT);
    }
}
