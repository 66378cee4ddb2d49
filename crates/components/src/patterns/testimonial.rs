use bootwire_core::{html, Attributes, Attrs, Element, Node};

use crate::display::{icon, Card};
use crate::layout::{container, row, Col};
use crate::patterns::column_span;

/// Customer quote card with optional avatar and star rating.
#[derive(Debug, Clone)]
pub struct Testimonial {
    quote: String,
    author: String,
    role: Option<String>,
    avatar: Option<String>,
    /// Stars out of five.
    rating: Option<u8>,
    attrs: Attrs,
}

impl Testimonial {
    pub fn new(quote: impl Into<String>, author: impl Into<String>) -> Self {
        Self {
            quote: quote.into(),
            author: author.into(),
            role: None,
            avatar: None,
            rating: None,
            attrs: Attrs::new(),
        }
    }

    pub fn role(mut self, role: impl Into<String>) -> Self {
        self.role = Some(role.into());
        self
    }

    pub fn avatar(mut self, src: impl Into<String>) -> Self {
        self.avatar = Some(src.into());
        self
    }

    pub fn rating(mut self, rating: u8) -> Self {
        self.rating = Some(rating.min(5));
        self
    }

    pub fn render(self) -> Element {
        let rating = self.rating.map(|rating| {
            html::div().class("mb-3").children_from((0..5).map(|i| {
                icon(if i < rating { "star-fill" } else { "star" }).class("text-warning")
            }))
        });

        let quote = html::blockquote()
            .class("mb-3")
            .child(html::p().class("mb-0 fst-italic").child(format!("\"{}\"", self.quote)));

        let avatar = self.avatar.map(|src| {
            html::img()
                .attr("src", src)
                .attr("alt", self.author.as_str())
                .class("rounded-circle me-3")
                .attr("style", "width: 48px; height: 48px; object-fit: cover;")
        });

        let info = html::div()
            .child(html::span().class("fw-bold d-block").child(self.author))
            .child_opt(self.role.map(|r| html::span().class("text-muted small").child(r)));

        let author = html::div().class("mt-3").child(
            html::div()
                .class("d-flex align-items-center")
                .child_opt(avatar)
                .child(info),
        );

        Card::new()
            .class("h-100")
            .attrs(self.attrs)
            .children(rating)
            .child(quote)
            .child(author)
            .render()
    }
}

impl Attributes for Testimonial {
    fn attrs_mut(&mut self) -> &mut Attrs {
        &mut self.attrs
    }
}

impl From<Testimonial> for Node {
    fn from(testimonial: Testimonial) -> Self {
        testimonial.render().into()
    }
}

/// Titled grid of testimonials.
#[derive(Debug, Clone)]
pub struct TestimonialSection {
    testimonials: Vec<Node>,
    title: String,
    subtitle: Option<String>,
    columns: usize,
    attrs: Attrs,
}

impl Default for TestimonialSection {
    fn default() -> Self {
        Self {
            testimonials: Vec::new(),
            title: "What Our Customers Say".to_string(),
            subtitle: None,
            columns: 3,
            attrs: Attrs::new(),
        }
    }
}

impl TestimonialSection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn testimonial(mut self, testimonial: impl Into<Node>) -> Self {
        self.testimonials.push(testimonial.into());
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

    pub fn columns(mut self, columns: usize) -> Self {
        self.columns = columns;
        self
    }

    pub fn render(self) -> Element {
        let span = column_span(self.columns);
        let header = html::div()
            .child(html::div().class("h2 text-center mb-2").child(self.title))
            .child_opt(
                self.subtitle
                    .map(|s| html::p().class("text-center text-muted mb-5").child(s)),
            );

        let grid = row().children_from(
            self.testimonials
                .into_iter()
                .map(|t| Col::new().md(span).class("mb-4").child(t)),
        );

        html::div()
            .class("py-5")
            .attrs(self.attrs)
            .child(container().child(header).child(grid))
    }
}

impl Attributes for TestimonialSection {
    fn attrs_mut(&mut self) -> &mut Attrs {
        &mut self.attrs
    }
}

impl From<TestimonialSection> for Node {
    fn from(section: TestimonialSection) -> Self {
        section.render().into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bootwire_core::Render;

    #[test]
    fn test_testimonial_with_avatar_and_rating() {
        let html = Testimonial::new("Great product!", "Jane Smith")
            .role("CEO, Acme Corp")
            .avatar("/static/avatar.jpg")
            .rating(4)
            .render()
            .to_html();

        assert!(html.contains(r#"<p class="mb-0 fst-italic">"Great product!"</p>"#));
        assert!(html.contains(r#"src="/static/avatar.jpg" alt="Jane Smith" class="rounded-circle me-3""#));
        assert!(html.contains("CEO, Acme Corp"));
        assert_eq!(html.matches("bi-star-fill").count(), 4);
        assert_eq!(html.matches(r#"bi bi-star text-warning"#).count(), 1);
    }

    #[test]
    fn test_testimonial_without_rating() {
        let html = Testimonial::new("Nice", "Bob").render().to_html();
        assert!(!html.contains("bi-star"));
    }

    #[test]
    fn test_section_layout() {
        let html = TestimonialSection::new()
            .title("Customer Reviews")
            .subtitle("Hear from our happy customers")
            .columns(2)
            .testimonial(Testimonial::new("Great!", "Alice"))
            .testimonial(Testimonial::new("Amazing!", "Carol"))
            .render()
            .to_html();

        assert!(html.contains(r#"<div class="h2 text-center mb-2">Customer Reviews</div>"#));
        assert!(html.contains("Hear from our happy customers"));
        assert_eq!(html.matches("col-md-6 mb-4").count(), 2);
    }
}
