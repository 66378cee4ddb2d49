//! Values embedded in inline scripts.

use serde_json::Value;

/// `value` as a JavaScript string literal that cannot close the surrounding
/// `<script>` element.
pub(crate) fn js_string(value: &str) -> String {
    Value::from(value).to_string().replace("</", "<\\/")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_js_string() {
        assert_eq!(js_string("error-dialog"), r#""error-dialog""#);
        assert_eq!(js_string(r#"a'b"c\d"#), r#""a'b\"c\\d""#);
        assert_eq!(js_string("</script>"), r#""<\/script>""#);
        assert_eq!(js_string("line\nbreak"), r#""line\nbreak""#);
    }
}
