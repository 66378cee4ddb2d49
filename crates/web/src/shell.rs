//! Document shell shared by every full-page response.

use axum::response::{Html, IntoResponse, Response};
use bootwire_core::{html, Attributes, Attrs, Element, Fragment, Node, Render};

/// The ordered `<head>` nodes and `<html>` attributes of every page.
///
/// [`add_bootstrap`](crate::add_bootstrap) and [`add_pwa`](crate::add_pwa)
/// extend it; handlers wrap their content with [`Shell::page`].
#[derive(Debug, Clone, Default)]
pub struct Shell {
    head: Vec<Node>,
    html_attrs: Attrs,
    lang: Option<String>,
    static_mounted: bool,
}

impl Shell {
    pub fn new() -> Self {
        Self {
            lang: Some("en".to_string()),
            ..Self::default()
        }
    }

    pub fn head(&self) -> &[Node] {
        &self.head
    }

    pub fn html_attrs(&self) -> &Attrs {
        &self.html_attrs
    }

    /// Appends a node to the head.
    pub fn push_head(&mut self, node: impl Into<Node>) {
        self.head.push(node.into());
    }

    pub fn with_head(mut self, node: impl Into<Node>) -> Self {
        self.push_head(node);
        self
    }

    /// Inserts nodes at the top of the head, keeping their order.
    pub fn prepend_head<I, N>(&mut self, nodes: I)
    where
        I: IntoIterator<Item = N>,
        N: Into<Node>,
    {
        let nodes: Vec<Node> = nodes.into_iter().map(Into::into).collect();
        self.head.splice(0..0, nodes);
    }

    pub fn set_html_attr(&mut self, name: &str, value: &str) {
        self.html_attrs.set(name, value);
    }

    pub fn lang(mut self, lang: Option<&str>) -> Self {
        self.lang = lang.map(str::to_string);
        self
    }

    /// Whether something already serves `/static`.
    pub fn static_mounted(&self) -> bool {
        self.static_mounted
    }

    /// Records that the application serves `/static` itself.
    pub fn mark_static_mounted(&mut self) {
        self.static_mounted = true;
    }

    /// Wraps body content in a full document. `head` nodes (a title, page
    /// metadata) follow the shared head nodes.
    pub fn page(&self, head: impl Into<Fragment>, body: impl Into<Fragment>) -> Page {
        let head = Element::new("head")
            .child(html::meta().attr("charset", "utf-8"))
            .children_from(self.head.iter().cloned())
            .children_from(head.into());

        let mut root = Element::new("html").attrs(self.html_attrs.clone());
        if let Some(lang) = &self.lang {
            root = root.attr("lang", lang.as_str());
        }
        let root = root
            .child(head)
            .child(Element::new("body").children_from(body.into()));

        Page(Fragment::new().with(Node::raw("<!doctype html>")).with(root))
    }
}

/// A rendered document, returned by [`Shell::page`].
#[derive(Debug, Clone)]
pub struct Page(Fragment);

impl Render for Page {
    fn render_into(&self, out: &mut String) {
        self.0.render_into(out);
    }
}

impl IntoResponse for Page {
    fn into_response(self) -> Response {
        Html(self.to_html()).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prepend_keeps_order() {
        let mut shell = Shell::new().with_head(html::title().child("App"));
        shell.prepend_head([
            html::link().attr("rel", "stylesheet").attr("href", "/a.css"),
            html::link().attr("rel", "stylesheet").attr("href", "/b.css"),
        ]);

        let hrefs: Vec<_> = shell
            .head()
            .iter()
            .filter_map(Node::as_element)
            .map(|el| el.get_attr("href").unwrap_or(el.tag()))
            .collect();
        assert_eq!(hrefs, ["/a.css", "/b.css", "title"]);
    }

    #[test]
    fn test_page_document() {
        let mut shell =
            Shell::new().with_head(html::meta().attr("name", "robots").attr("content", "index"));
        shell.set_html_attr("data-bs-theme", "dark");

        let html = shell
            .page(html::title().child("Home"), html::main_el().child("Hello"))
            .to_html();

        assert_eq!(
            html,
            concat!(
                "<!doctype html>",
                r#"<html data-bs-theme="dark" lang="en"><head><meta charset="utf-8">"#,
                r#"<meta name="robots" content="index"><title>Home</title></head>"#,
                "<body><main>Hello</main></body></html>"
            )
        );
    }

    #[test]
    fn test_page_without_lang() {
        let html = Shell::new()
            .lang(None)
            .page(Fragment::new(), Node::text("x"))
            .to_html();
        assert!(html.contains("<html><head>"));
    }
}
