use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use bootwire_components::feedback::ErrorPage;
use bootwire_core::Fragment;
use bootwire_web::Markup;

/// Handler error that answers with the generic 500 page.
///
/// Anything convertible into `anyhow::Error` can be raised with `?`.
pub struct AppError(anyhow::Error);

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        tracing::error!(error = %self.0, "Handler failed");

        let (title, body) = ErrorPage::new(500).render();
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Markup(Fragment::new().with(title).with(body)),
        )
            .into_response()
    }
}

impl<E> From<E> for AppError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_error_is_server_error_page() {
        let response = AppError::from(anyhow::anyhow!("boom")).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
