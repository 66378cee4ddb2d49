use bootwire_core::{html, theme, Attributes, Attrs, Element, Node};
use uuid::Uuid;

use crate::variant::Size;

/// Server-filtered select: a debounced search box, a result list and a hidden
/// `<select>` that carries the chosen value.
#[derive(Debug, Clone)]
pub struct SearchableSelect {
    endpoint: String,
    name: String,
    placeholder: String,
    debounce_ms: u64,
    options: Vec<(String, String)>,
    required: bool,
    size: Option<Size>,
    select_id: Option<String>,
    attrs: Attrs,
}

impl SearchableSelect {
    pub fn new(endpoint: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            name: name.into(),
            placeholder: "Search...".to_string(),
            debounce_ms: 300,
            options: Vec::new(),
            required: false,
            size: None,
            select_id: None,
            attrs: Attrs::new(),
        }
    }

    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    pub fn debounce_ms(mut self, debounce_ms: u64) -> Self {
        self.debounce_ms = debounce_ms;
        self
    }

    /// Initial `(value, text)` options shown before any search.
    pub fn options<I, V, T>(mut self, options: I) -> Self
    where
        I: IntoIterator<Item = (V, T)>,
        V: Into<String>,
        T: Into<String>,
    {
        self.options = options
            .into_iter()
            .map(|(value, text)| (value.into(), text.into()))
            .collect();
        self
    }

    pub fn required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    pub fn size(mut self, size: Size) -> Self {
        self.size = Some(size);
        self
    }

    pub fn select_id(mut self, id: impl Into<String>) -> Self {
        self.select_id = Some(id.into());
        self
    }

    pub fn render(self) -> Element {
        let size = self.size.or_else(|| {
            theme::default_str("SearchableSelect", "size").and_then(|s| Size::parse(&s))
        });
        let select_id = self.select_id.unwrap_or_else(|| {
            let hex = Uuid::new_v4().simple().to_string();
            format!("searchable-select-{}", &hex[..8])
        });
        let results_id = format!("{select_id}-results");

        let input_class = match size {
            Some(size) => format!("form-control form-control-{} mb-2", size.as_str()),
            None => "form-control mb-2".to_string(),
        };

        let search = html::input()
            .attr("type", "search")
            .attr("placeholder", self.placeholder)
            .class(&input_class)
            .attr("hx_get", self.endpoint)
            .attr("hx_trigger", format!("keyup changed delay:{}ms", self.debounce_ms))
            .attr("hx_target", format!("#{results_id}"))
            .attr("hx_swap", "innerHTML")
            .attr("autocomplete", "off");

        let results = html::div()
            .attr("id", results_id)
            .class("list-group")
            .attr("style", "max-height: 300px; overflow-y: auto;")
            .children_from(self.options.into_iter().map(|(value, text)| {
                html::a()
                    .attr("href", "#")
                    .class("list-group-item list-group-item-action")
                    .attr("data_value", value)
                    .child(text)
            }));

        let select = html::select()
            .attr("name", self.name)
            .attr("id", select_id)
            .class("d-none")
            .attr("required", self.required);

        html::div()
            .class("searchable-select")
            .attrs(self.attrs)
            .child(search)
            .child(results)
            .child(select)
    }
}

impl Attributes for SearchableSelect {
    fn attrs_mut(&mut self) -> &mut Attrs {
        &mut self.attrs
    }
}

impl From<SearchableSelect> for Node {
    fn from(select: SearchableSelect) -> Self {
        select.render().into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bootwire_core::Render;

    #[test]
    fn test_searchable_select_wiring() {
        let html = SearchableSelect::new("/api/countries", "country")
            .select_id("country")
            .debounce_ms(250)
            .size(Size::Sm)
            .options([("uy", "Uruguay"), ("ar", "Argentina")])
            .render()
            .to_html();

        assert!(html.contains(r#"hx-get="/api/countries""#));
        assert!(html.contains(r#"hx-trigger="keyup changed delay:250ms""#));
        assert!(html.contains(r##"hx-target="#country-results""##));
        assert!(html.contains("form-control form-control-sm mb-2"));
        assert!(html.contains(r#"data-value="uy">Uruguay</a>"#));
        assert!(html.contains(r#"<select name="country" id="country" class="d-none"></select>"#));
    }

    #[test]
    fn test_generated_select_id() {
        let el = SearchableSelect::new("/s", "q").render();
        let select = el
            .children()
            .iter()
            .filter_map(Node::as_element)
            .find(|child| child.tag() == "select")
            .unwrap();

        assert!(select.get_attr("id").unwrap().starts_with("searchable-select-"));
    }
}
