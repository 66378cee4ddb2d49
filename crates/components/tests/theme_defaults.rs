//! Behaviour of the process-wide default registry.
//!
//! Everything runs in one test because the registry is global and the test
//! harness runs tests in parallel.

use bootwire_components::display::Card;
use bootwire_components::feedback::{Alert, Toast};
use bootwire_components::forms::Button;
use bootwire_components::Variant;
use bootwire_core::theme::{self, Defaults};
use bootwire_core::{Render, ThemeError};
use serde_json::json;

fn defaults(pairs: &[(&str, serde_json::Value)]) -> Defaults {
    pairs
        .iter()
        .map(|(key, value)| (key.to_string(), value.clone()))
        .collect()
}

#[test]
fn test_global_defaults_flow_into_components() {
    theme::reset_component_defaults(None);

    let button = Button::new("Go").render();
    assert!(button.has_class("btn-primary"));

    theme::set_component_defaults("Button", defaults(&[("variant", json!("success"))]));
    assert!(Button::new("Go").render().has_class("btn-success"));
    assert!(Button::new("Go")
        .variant(Variant::Danger)
        .render()
        .has_class("btn-danger"));

    theme::reset_component_defaults(Some("Button"));
    assert!(Button::new("Go").render().has_class("btn-primary"));

    theme::set_component_defaults("Toast", defaults(&[("delay", json!(1500))]));
    let toast = Toast::new("Saved").render().to_html();
    assert!(toast.contains(r#"data-bs-delay="1500""#));

    theme::apply_theme("minimal").unwrap();
    let button = Button::new("Go").render();
    assert!(button.has_class("btn-outline-dark"));
    assert!(!Card::new().render().get_attr("class").unwrap_or_default().contains("shadow"));

    theme::apply_theme("corporate").unwrap();
    assert!(Alert::new("Heads up").render().has_class("alert-info"));

    assert_eq!(
        theme::apply_theme("neon"),
        Err(ThemeError::UnknownTheme("neon".to_string()))
    );

    theme::reset_component_defaults(None);
    assert!(Button::new("Go").render().has_class("btn-primary"));
    assert!(Card::new().render().has_class("shadow-sm"));
}
