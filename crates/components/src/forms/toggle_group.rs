use bootwire_core::{html, Attributes, Attrs, ComponentError, Element};
use uuid::Uuid;

/// Button group where exactly one button is active.
///
/// Each button is tagged with `data-bw-toggle-item` and `data-bw-value`; the
/// bundled interaction script keeps the active marker unique when the user
/// clicks. With a `name`, a hidden input carries the selected value so the
/// group can take part in a regular form post.
#[derive(Debug, Clone)]
pub struct ToggleGroup {
    buttons: Vec<Element>,
    name: Option<String>,
    values: Option<Vec<String>>,
    active_index: usize,
    active_class: String,
    hidden_input: bool,
    input_id: Option<String>,
    attrs: Attrs,
}

impl ToggleGroup {
    pub fn new<I, B>(buttons: I) -> Self
    where
        I: IntoIterator<Item = B>,
        B: Into<Element>,
    {
        Self {
            buttons: buttons.into_iter().map(Into::into).collect(),
            name: None,
            values: None,
            active_index: 0,
            active_class: "active".to_string(),
            hidden_input: true,
            input_id: None,
            attrs: Attrs::new(),
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Explicit per-button values. Defaults to each button's index.
    pub fn values<I, S>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.values = Some(values.into_iter().map(Into::into).collect());
        self
    }

    /// Index of the initially active button, clamped into range.
    pub fn active_index(mut self, index: usize) -> Self {
        self.active_index = index;
        self
    }

    pub fn active_class(mut self, class: impl Into<String>) -> Self {
        self.active_class = class.into();
        self
    }

    pub fn hidden_input(mut self, hidden_input: bool) -> Self {
        self.hidden_input = hidden_input;
        self
    }

    /// Id for the hidden input. A random `bw-toggle-*` id is used otherwise.
    pub fn input_id(mut self, id: impl Into<String>) -> Self {
        self.input_id = Some(id.into());
        self
    }

    pub fn render(self) -> Result<Element, ComponentError> {
        if self.buttons.is_empty() {
            return Err(ComponentError::EmptyToggleGroup);
        }
        if let Some(values) = &self.values {
            if values.len() != self.buttons.len() {
                return Err(ComponentError::ValuesLengthMismatch {
                    buttons: self.buttons.len(),
                    values: values.len(),
                });
            }
        }

        let active = self.active_index.min(self.buttons.len() - 1);
        let value_at = |i: usize| -> String {
            self.values
                .as_ref()
                .and_then(|values| values.get(i).cloned())
                .unwrap_or_else(|| i.to_string())
        };

        let mut buttons = Vec::with_capacity(self.buttons.len());
        for (i, mut button) in self.buttons.iter().cloned().enumerate() {
            button.set_attr("data-bw-toggle-item", "true");
            button.set_attr("data-bw-value", value_at(i));
            let pressed = if i == active { "true" } else { "false" };
            if i == active {
                button.add_class(&self.active_class);
            }
            button.set_attr("aria-pressed", pressed);
            button.set_attr("aria-current", pressed);
            buttons.push(button);
        }

        let mut group = html::div()
            .class("btn-group")
            .attr("role", "group")
            .attr("data_bw_toggle_group", "true")
            .attr("data_bw_active_class", self.active_class.as_str());

        let hidden = match (&self.name, self.hidden_input) {
            (Some(name), true) => {
                let id = self.input_id.clone().unwrap_or_else(|| {
                    let hex = Uuid::new_v4().simple().to_string();
                    format!("bw-toggle-{}", &hex[..8])
                });
                group = group.attr("data_bw_input_id", id.as_str());
                Some(
                    html::input()
                        .attr("type", "hidden")
                        .attr("name", name.as_str())
                        .attr("value", value_at(active))
                        .attr("id", id),
                )
            }
            _ => None,
        };

        Ok(group
            .attrs(self.attrs)
            .children_from(buttons)
            .child_opt(hidden))
    }
}

impl Attributes for ToggleGroup {
    fn attrs_mut(&mut self) -> &mut Attrs {
        &mut self.attrs
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forms::Button;
    use crate::variant::Variant;
    use bootwire_core::{Node, Render};

    fn buttons(n: usize) -> Vec<Element> {
        (0..n)
            .map(|i| {
                Button::new(format!("Option {i}"))
                    .variant(Variant::Secondary)
                    .render()
            })
            .collect()
    }

    fn items(group: &Element) -> Vec<&Element> {
        group
            .children()
            .iter()
            .filter_map(Node::as_element)
            .filter(|el| el.tag() == "button")
            .collect()
    }

    #[test]
    fn test_empty_group_is_rejected() {
        let err = ToggleGroup::new(Vec::<Element>::new()).render().unwrap_err();
        assert_eq!(err, ComponentError::EmptyToggleGroup);
    }

    #[test]
    fn test_values_length_mismatch() {
        let err = ToggleGroup::new(buttons(2))
            .values(["a"])
            .render()
            .unwrap_err();

        assert_eq!(
            err,
            ComponentError::ValuesLengthMismatch {
                buttons: 2,
                values: 1
            }
        );
    }

    #[test]
    fn test_exactly_one_active() {
        let group = ToggleGroup::new(buttons(3)).active_index(1).render().unwrap();
        let items = items(&group);

        let active: Vec<usize> = items
            .iter()
            .enumerate()
            .filter(|(_, el)| el.has_class("active"))
            .map(|(i, _)| i)
            .collect();
        assert_eq!(active, vec![1]);

        let pressed: Vec<Option<&str>> = items.iter().map(|el| el.get_attr("aria-pressed")).collect();
        assert_eq!(pressed, vec![Some("false"), Some("true"), Some("false")]);
        assert_eq!(items[1].get_attr("aria-current"), Some("true"));
        assert_eq!(items[2].get_attr("data-bw-value"), Some("2"));
    }

    #[test]
    fn test_active_index_is_clamped() {
        let group = ToggleGroup::new(buttons(2)).active_index(9).render().unwrap();
        let items = items(&group);

        assert!(!items[0].has_class("active"));
        assert!(items[1].has_class("active"));
    }

    #[test]
    fn test_hidden_input_carries_selected_value() {
        let group = ToggleGroup::new(buttons(3))
            .name("plan")
            .values(["free", "pro", "team"])
            .active_index(2)
            .input_id("plan-input")
            .render()
            .unwrap();
        let html = group.to_html();

        assert_eq!(group.get_attr("data-bw-input-id"), Some("plan-input"));
        assert!(html.contains(r#"<input type="hidden" name="plan" value="team" id="plan-input">"#));
    }

    #[test]
    fn test_generated_input_id() {
        let group = ToggleGroup::new(buttons(1)).name("mode").render().unwrap();
        let id = group.get_attr("data-bw-input-id").unwrap();

        assert!(id.starts_with("bw-toggle-"));
        assert_eq!(id.len(), "bw-toggle-".len() + 8);
    }
}
