use bootwire_core::{html, Attributes, Element};

use crate::display::EmptyState;

/// Title and body for the offline fallback page.
pub fn offline_page(app_name: &str, start_url: &str) -> (Element, Element) {
    let title = html::title().child(format!("Offline - {app_name}"));
    let body = EmptyState::new("No Internet Connection")
        .description("You are currently offline. Please check your connection and try again.")
        .icon("wifi-off")
        .action("Retry", start_url)
        .class("min-vh-100 d-flex align-items-center justify-content-center")
        .render();
    (title, body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use bootwire_core::Render;

    #[test]
    fn test_offline_page() {
        let (title, body) = offline_page("Field Notes", "/");

        assert_eq!(title.to_html(), "<title>Offline - Field Notes</title>");
        let html = body.to_html();
        assert!(html.contains("No Internet Connection"));
        assert!(html.contains("bi-wifi-off"));
        assert!(html.contains(r#"href="/""#));
        assert!(body.has_class("min-vh-100"));
    }
}
