use axum::response::{Html, IntoResponse, Response};
use bootwire_core::Render;

/// Wrapper that turns rendered markup into an HTML response.
#[derive(Debug, Clone)]
pub struct Markup<T>(pub T);

impl<T> IntoResponse for Markup<T>
where
    T: Render,
{
    fn into_response(self) -> Response {
        Html(self.0.to_html()).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::{header, StatusCode};
    use bootwire_core::{html, Attributes};
    use http_body_util::BodyExt;

    #[tokio::test]
    async fn test_markup_response() {
        let response = Markup(html::p().class("lead").child("Hello")).into_response();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers().get(header::CONTENT_TYPE).unwrap(),
            "text/html; charset=utf-8"
        );

        let body = response.into_body().collect().await.unwrap().to_bytes();
        assert_eq!(&body[..], br#"<p class="lead">Hello</p>"#);
    }
}
