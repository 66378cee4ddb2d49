//! htmx response headers.
//!
//! Each helper returns an [`HxResponse`] that can be refined further before
//! being returned from a handler:
//!
//! ```
//! use axum::http::StatusCode;
//! use bootwire_web::htmx::hx_redirect;
//!
//! let response = hx_redirect("/dashboard").status(StatusCode::SEE_OTHER);
//! # let _ = response;
//! ```

use axum::{
    http::{HeaderName, HeaderValue, StatusCode},
    response::{Html, IntoResponse, Response},
};
use bootwire_core::Render;
use serde_json::{Map, Value};

use crate::error::WebError;

pub const HX_REDIRECT: HeaderName = HeaderName::from_static("hx-redirect");
pub const HX_REFRESH: HeaderName = HeaderName::from_static("hx-refresh");
pub const HX_TRIGGER: HeaderName = HeaderName::from_static("hx-trigger");
pub const HX_RESWAP: HeaderName = HeaderName::from_static("hx-reswap");
pub const HX_RETARGET: HeaderName = HeaderName::from_static("hx-retarget");

/// Client-side event(s) announced through `HX-Trigger`.
#[derive(Debug, Clone, PartialEq)]
pub enum Trigger {
    /// A bare event name.
    Event(String),
    /// One event carrying a JSON detail.
    WithDetail(String, Value),
    /// Several events, each with its own detail.
    Events(Map<String, Value>),
}

impl Trigger {
    pub fn event(name: impl Into<String>) -> Self {
        Self::Event(name.into())
    }

    pub fn with_detail(name: impl Into<String>, detail: Value) -> Self {
        Self::WithDetail(name.into(), detail)
    }

    /// The header value: the plain name, or a compact JSON object.
    pub fn header_value(&self) -> String {
        match self {
            Self::Event(name) => name.clone(),
            Self::WithDetail(name, detail) => {
                let mut events = Map::new();
                events.insert(name.clone(), detail.clone());
                Value::Object(events).to_string()
            }
            Self::Events(events) => Value::Object(events.clone()).to_string(),
        }
    }
}

impl From<&str> for Trigger {
    fn from(name: &str) -> Self {
        Self::Event(name.to_string())
    }
}

impl From<String> for Trigger {
    fn from(name: String) -> Self {
        Self::Event(name)
    }
}

impl From<Map<String, Value>> for Trigger {
    fn from(events: Map<String, Value>) -> Self {
        Self::Events(events)
    }
}

/// A response carrying htmx headers, a status (200 unless set) and an
/// optional HTML body.
#[derive(Debug, Clone)]
pub struct HxResponse {
    status: StatusCode,
    headers: Vec<(HeaderName, String)>,
    body: String,
}

impl Default for HxResponse {
    fn default() -> Self {
        Self {
            status: StatusCode::OK,
            headers: Vec::new(),
            body: String::new(),
        }
    }
}

impl HxResponse {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn status(mut self, status: StatusCode) -> Self {
        self.status = status;
        self
    }

    /// Sets a header, replacing an earlier value for the same name.
    pub fn header(mut self, name: HeaderName, value: impl Into<String>) -> Self {
        self.headers.retain(|(existing, _)| *existing != name);
        self.headers.push((name, value.into()));
        self
    }

    /// Renders `content` as the response body.
    pub fn content(mut self, content: impl Render) -> Self {
        self.body = content.to_html();
        self
    }

    /// Uses an already rendered string as the response body.
    pub fn html(mut self, body: impl Into<String>) -> Self {
        self.body = body.into();
        self
    }

    pub fn redirect(self, url: impl Into<String>) -> Self {
        self.header(HX_REDIRECT, url)
    }

    pub fn refresh(self) -> Self {
        self.header(HX_REFRESH, "true")
    }

    pub fn trigger(self, trigger: impl Into<Trigger>) -> Self {
        let value = trigger.into().header_value();
        self.header(HX_TRIGGER, value)
    }

    pub fn reswap(self, strategy: impl Into<String>) -> Self {
        self.header(HX_RESWAP, strategy)
    }

    pub fn retarget(self, selector: impl Into<String>) -> Self {
        self.header(HX_RETARGET, selector)
    }

    pub fn header_value(&self, name: &HeaderName) -> Option<&str> {
        self.headers
            .iter()
            .find(|(existing, _)| existing == name)
            .map(|(_, value)| value.as_str())
    }

    pub fn status_code(&self) -> StatusCode {
        self.status
    }

    pub fn body(&self) -> &str {
        &self.body
    }
}

impl IntoResponse for HxResponse {
    fn into_response(self) -> Response {
        let mut response = (self.status, Html(self.body)).into_response();
        for (name, value) in self.headers {
            match HeaderValue::from_str(&value) {
                Ok(value) => {
                    response.headers_mut().insert(name, value);
                }
                Err(err) => return WebError::from(err).into_response(),
            }
        }
        response
    }
}

/// Full-page client-side redirect.
pub fn hx_redirect(url: impl Into<String>) -> HxResponse {
    HxResponse::new().redirect(url)
}

/// Full page refresh.
pub fn hx_refresh() -> HxResponse {
    HxResponse::new().refresh()
}

/// Fires client-side events after the swap.
pub fn hx_trigger(trigger: impl Into<Trigger>) -> HxResponse {
    HxResponse::new().trigger(trigger)
}

/// Overrides the swap strategy the request asked for.
pub fn hx_reswap(strategy: impl Into<String>) -> HxResponse {
    HxResponse::new().reswap(strategy)
}

/// Overrides the swap target the request asked for.
pub fn hx_retarget(selector: impl Into<String>) -> HxResponse {
    HxResponse::new().retarget(selector)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::header;
    use bootwire_core::html;
    use http_body_util::BodyExt;
    use serde_json::json;

    #[tokio::test]
    async fn test_hx_redirect() {
        let response = hx_redirect("/dashboard").into_response();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers().get("HX-Redirect").unwrap(), "/dashboard");

        let body = response.into_body().collect().await.unwrap().to_bytes();
        assert!(body.is_empty());
    }

    #[test]
    fn test_hx_redirect_with_status() {
        let response = hx_redirect("/done")
            .status(StatusCode::SEE_OTHER)
            .into_response();

        assert_eq!(response.status(), StatusCode::SEE_OTHER);
    }

    #[test]
    fn test_hx_refresh() {
        let response = hx_refresh().into_response();
        assert_eq!(response.headers().get("HX-Refresh").unwrap(), "true");
    }

    #[test]
    fn test_hx_trigger_forms() {
        let plain = hx_trigger("itemUpdated");
        assert_eq!(plain.header_value(&HX_TRIGGER), Some("itemUpdated"));

        let detailed = hx_trigger(Trigger::with_detail("itemUpdated", json!({ "id": 123 })));
        assert_eq!(
            detailed.header_value(&HX_TRIGGER),
            Some(r#"{"itemUpdated":{"id":123}}"#)
        );

        let mut events = Map::new();
        events.insert("itemUpdated".to_string(), json!({ "id": 123 }));
        events.insert("showNotification".to_string(), json!({ "message": "Saved!" }));
        let many = hx_trigger(events);
        assert_eq!(
            many.header_value(&HX_TRIGGER),
            Some(r#"{"itemUpdated":{"id":123},"showNotification":{"message":"Saved!"}}"#)
        );
    }

    #[tokio::test]
    async fn test_hx_reswap_with_content() {
        let response = hx_reswap("outerHTML")
            .content(html::div().child("New widget"))
            .into_response();

        assert_eq!(response.headers().get("HX-Reswap").unwrap(), "outerHTML");
        assert_eq!(
            response.headers().get(header::CONTENT_TYPE).unwrap(),
            "text/html; charset=utf-8"
        );
        let body = response.into_body().collect().await.unwrap().to_bytes();
        assert_eq!(&body[..], b"<div>New widget</div>");
    }

    #[test]
    fn test_hx_retarget_replaces_header() {
        let response = hx_retarget("#errors").retarget("#success-panel");

        assert_eq!(response.header_value(&HX_RETARGET), Some("#success-panel"));
        assert_eq!(response.status_code(), StatusCode::OK);
    }

    #[test]
    fn test_invalid_header_value_is_500() {
        let response = hx_redirect("/bad\nurl").into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
