use bootwire_core::{html, Attributes, Attrs, Element, Node};

use crate::display::Card;
use crate::layout::container;

/// Centered authentication page: branding, title, form, footer link.
///
/// The form fields are passed through untouched; they should carry their
/// own labels (for example via [`FormGroup`](crate::forms::FormGroup)).
#[derive(Debug, Clone)]
pub struct AuthLayout {
    fields: Vec<Node>,
    title: String,
    subtitle: Option<String>,
    logo: Option<String>,
    brand_name: Option<String>,
    action: String,
    method: String,
    footer_text: Option<String>,
    footer_link: Option<(String, String)>,
    attrs: Attrs,
}

impl Default for AuthLayout {
    fn default() -> Self {
        Self {
            fields: Vec::new(),
            title: "Sign In".to_string(),
            subtitle: None,
            logo: None,
            brand_name: None,
            action: "/login".to_string(),
            method: "post".to_string(),
            footer_text: None,
            footer_link: None,
            attrs: Attrs::new(),
        }
    }
}

impl AuthLayout {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn field(mut self, field: impl Into<Node>) -> Self {
        self.fields.push(field.into());
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.subtitle = Some(subtitle.into());
        self
    }

    /// Logo image URL. Takes precedence over the brand name.
    pub fn logo(mut self, src: impl Into<String>) -> Self {
        self.logo = Some(src.into());
        self
    }

    pub fn brand_name(mut self, name: impl Into<String>) -> Self {
        self.brand_name = Some(name.into());
        self
    }

    pub fn action(mut self, action: impl Into<String>) -> Self {
        self.action = action.into();
        self
    }

    pub fn method(mut self, method: impl Into<String>) -> Self {
        self.method = method.into();
        self
    }

    pub fn footer_text(mut self, text: impl Into<String>) -> Self {
        self.footer_text = Some(text.into());
        self
    }

    pub fn footer_link(mut self, href: impl Into<String>, text: impl Into<String>) -> Self {
        self.footer_link = Some((href.into(), text.into()));
        self
    }

    pub fn render(self) -> Element {
        let mut card = Card::new().shadow("sm").attr("style", "max-width: 400px; width: 100%;");

        if let Some(logo) = self.logo {
            card = card.child(
                html::img()
                    .attr("src", logo)
                    .attr("alt", self.brand_name.as_deref().unwrap_or("Logo"))
                    .class("mb-4")
                    .attr("style", "max-width: 150px; height: auto;"),
            );
        } else if let Some(brand) = self.brand_name {
            card = card.child(html::h1().class("h3 mb-4").child(brand));
        }

        card = card.child(html::h1().class("h4 mb-2").child(self.title));
        if let Some(subtitle) = self.subtitle {
            card = card.child(html::p().class("text-muted mb-4").child(subtitle));
        }

        card = card.child(
            html::form()
                .attr("action", self.action)
                .attr("method", self.method)
                .children_from(self.fields),
        );

        if self.footer_text.is_some() || self.footer_link.is_some() {
            let mut footer = html::p().class("text-center text-muted mt-4 mb-0");
            if let Some(text) = self.footer_text {
                footer.push(text);
                footer.push(" ");
            }
            if let Some((href, text)) = self.footer_link {
                footer.push(
                    html::a()
                        .attr("href", href)
                        .class("text-decoration-none")
                        .child(text),
                );
            }
            card = card.child(footer);
        }

        html::div()
            .class("min-vh-100 d-flex align-items-center justify-content-center py-5")
            .attrs(self.attrs)
            .child(container().child(html::div().class("d-flex justify-content-center").child(card)))
    }
}

impl Attributes for AuthLayout {
    fn attrs_mut(&mut self) -> &mut Attrs {
        &mut self.attrs
    }
}

impl From<AuthLayout> for Node {
    fn from(layout: AuthLayout) -> Self {
        layout.render().into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bootwire_core::Render;

    #[test]
    fn test_login_layout() {
        let html = AuthLayout::new()
            .field(html::input().attr("name", "email"))
            .title("Welcome Back")
            .subtitle("Sign in to your account")
            .brand_name("MyApp")
            .footer_text("Don't have an account?")
            .footer_link("/register", "Sign up")
            .render()
            .to_html();

        assert!(html.contains("min-vh-100"));
        assert!(html.contains(r#"<h1 class="h3 mb-4">MyApp</h1>"#));
        assert!(html.contains(r#"<h1 class="h4 mb-2">Welcome Back</h1>"#));
        assert!(html.contains(r#"<form action="/login" method="post"><input name="email"></form>"#));
        assert!(html.contains(r#"<a href="/register" class="text-decoration-none">Sign up</a>"#));
        assert!(html.contains("max-width: 400px"));
    }

    #[test]
    fn test_logo_replaces_brand_heading() {
        let html = AuthLayout::new()
            .logo("/static/logo.png")
            .brand_name("MyApp")
            .render()
            .to_html();

        assert!(html.contains(r#"alt="MyApp""#));
        assert!(!html.contains("h3 mb-4"));
    }

    #[test]
    fn test_extra_attributes_reach_wrapper() {
        let layout = AuthLayout::new()
            .class("bg-light")
            .attr("hx_post", "/auth/login")
            .render();

        assert!(layout.has_class("bg-light"));
        assert_eq!(layout.get_attr("hx-post"), Some("/auth/login"));
    }
}
