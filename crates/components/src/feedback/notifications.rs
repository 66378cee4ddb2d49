//! Toast and alert presets for the common notification kinds.

use super::{Alert, Toast};
use crate::variant::Variant;

pub fn notice_toast(message: impl Into<String>, kind: Variant, title: Option<&str>) -> Toast {
    Toast::new(message.into())
        .title_opt(title.map(str::to_string))
        .variant(kind)
}

pub fn notice_alert(message: impl Into<String>, kind: Variant) -> Alert {
    Alert::new(message.into()).variant(kind)
}

pub fn success_toast(message: impl Into<String>) -> Toast {
    notice_toast(message, Variant::Success, Some("Success"))
}

pub fn error_toast(message: impl Into<String>) -> Toast {
    notice_toast(message, Variant::Danger, Some("Error"))
}

pub fn warning_toast(message: impl Into<String>) -> Toast {
    notice_toast(message, Variant::Warning, Some("Warning"))
}

pub fn info_toast(message: impl Into<String>) -> Toast {
    notice_toast(message, Variant::Info, Some("Info"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use bootwire_core::Render;

    #[test]
    fn test_preset_titles_and_variants() {
        let html = error_toast("Disk full").render().to_html();
        assert!(html.contains("text-bg-danger"));
        assert!(html.contains(">Error</strong>"));

        let html = success_toast("Saved").render().to_html();
        assert!(html.contains("text-bg-success"));
        assert!(html.contains(">Success</strong>"));

        assert!(warning_toast("w").render().has_class("text-bg-warning"));
        assert!(info_toast("i").render().has_class("text-bg-info"));
    }

    #[test]
    fn test_notice_alert() {
        let el = notice_alert("Maintenance tonight", Variant::Info).render();
        assert!(el.has_class("alert-info"));
        assert_eq!(el.text_content(), "Maintenance tonight");
    }
}
