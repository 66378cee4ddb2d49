use bootwire_core::{html, Attributes, Attrs, Element, Node};

/// Label, input, help text and validation feedback wrapped in `.mb-3`.
#[derive(Debug, Clone)]
pub struct FormGroup {
    input: Element,
    label: Option<String>,
    help_text: Option<String>,
    error: Option<String>,
    success: Option<String>,
    is_invalid: bool,
    is_valid: bool,
    required: bool,
    attrs: Attrs,
}

impl FormGroup {
    pub fn new(input: Element) -> Self {
        Self {
            input,
            label: None,
            help_text: None,
            error: None,
            success: None,
            is_invalid: false,
            is_valid: false,
            required: false,
            attrs: Attrs::new(),
        }
    }

    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Shown only while no validation state is set.
    pub fn help_text(mut self, help_text: impl Into<String>) -> Self {
        self.help_text = Some(help_text.into());
        self
    }

    /// Marks the input invalid and shows `message` as feedback.
    pub fn error(mut self, message: impl Into<String>) -> Self {
        self.error = Some(message.into());
        self.is_invalid = true;
        self
    }

    /// Marks the input valid and shows `message` as feedback.
    pub fn success(mut self, message: impl Into<String>) -> Self {
        self.success = Some(message.into());
        self.is_valid = true;
        self
    }

    pub fn invalid(mut self, is_invalid: bool) -> Self {
        self.is_invalid = is_invalid;
        self
    }

    pub fn valid(mut self, is_valid: bool) -> Self {
        self.is_valid = is_valid;
        self
    }

    pub fn required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    pub(crate) fn error_opt(mut self, message: Option<String>) -> Self {
        self.is_invalid = message.is_some();
        self.error = message;
        self
    }

    pub fn render(self) -> Element {
        let label = self.label.map(|text| {
            let label = html::label().class("form-label").child(text);
            if self.required {
                label.child(html::span().class("text-danger").child(" *"))
            } else {
                label
            }
        });

        let mut input = self.input;
        if self.is_invalid {
            input.add_class("is-invalid");
        } else if self.is_valid {
            input.add_class("is-valid");
        }

        let help = self
            .help_text
            .filter(|_| !(self.is_invalid || self.is_valid))
            .map(|text| html::small().class("form-text text-muted").child(text));

        let feedback = match (self.is_invalid, self.error, self.is_valid, self.success) {
            (true, Some(error), _, _) => {
                Some(html::div().class("invalid-feedback d-block").child(error))
            }
            (false, _, true, Some(success)) => {
                Some(html::div().class("valid-feedback d-block").child(success))
            }
            _ => None,
        };

        html::div()
            .class("mb-3")
            .attrs(self.attrs)
            .child_opt(label)
            .child(input)
            .child_opt(help)
            .child_opt(feedback)
    }
}

impl Attributes for FormGroup {
    fn attrs_mut(&mut self) -> &mut Attrs {
        &mut self.attrs
    }
}

impl From<FormGroup> for Node {
    fn from(group: FormGroup) -> Self {
        group.render().into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bootwire_core::Render;

    fn email_input() -> Element {
        html::input()
            .attr("type", "email")
            .attr("name", "email")
            .class("form-control")
    }

    #[test]
    fn test_required_label_and_help() {
        let html = FormGroup::new(email_input())
            .label("Email")
            .help_text("We never share it.")
            .required(true)
            .render()
            .to_html();

        assert!(html.contains(
            r#"<label class="form-label">Email<span class="text-danger"> *</span></label>"#
        ));
        assert!(html.contains(r#"<small class="form-text text-muted">We never share it.</small>"#));
    }

    #[test]
    fn test_error_hides_help_and_marks_input() {
        let html = FormGroup::new(email_input())
            .help_text("hint")
            .error("Invalid email")
            .render()
            .to_html();

        assert!(html.contains(r#"class="form-control is-invalid""#));
        assert!(html.contains(r#"<div class="invalid-feedback d-block">Invalid email</div>"#));
        assert!(!html.contains("hint"));
    }

    #[test]
    fn test_success_feedback() {
        let html = FormGroup::new(email_input())
            .success("Looks good")
            .render()
            .to_html();

        assert!(html.contains("is-valid"));
        assert!(html.contains(r#"<div class="valid-feedback d-block">Looks good</div>"#));
    }
}
