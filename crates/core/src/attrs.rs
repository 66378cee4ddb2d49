//! Attribute names and values.
//!
//! Builder code spells attributes with underscores (`hx_get`, `data_value`,
//! `aria_live`) because they read like Rust identifiers. On the wire they are
//! hyphenated. `cls` is the builder spelling of `class`.

use crate::classes::merge_classes;

/// Converts a builder-style attribute name into its wire form.
///
/// Underscores become hyphens, which covers the `hx_`, `data_` and `aria_`
/// families as well as plain names like `tab_index`. `cls` is returned
/// unchanged; [`Attrs::set`] stores it as `class`.
pub fn convert_name(name: &str) -> String {
    match name {
        "cls" => name.to_string(),
        _ => name.replace('_', "-"),
    }
}

/// Converts every name in a sequence of pairs, leaving values untouched.
///
/// Keys that collide after conversion keep the last value, placed where the
/// first one was.
pub fn convert_attrs<K, V, I>(pairs: I) -> Vec<(String, V)>
where
    K: AsRef<str>,
    I: IntoIterator<Item = (K, V)>,
{
    let mut out: Vec<(String, V)> = Vec::new();
    for (key, value) in pairs {
        let key = convert_name(key.as_ref());
        match out.iter_mut().find(|(existing, _)| *existing == key) {
            Some(slot) => slot.1 = value,
            None => out.push((key, value)),
        }
    }
    out
}

/// An attribute value: a string, or a boolean flag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttrValue {
    Str(String),
    /// `true` renders as a bare attribute name, `false` is omitted.
    Bool(bool),
}

impl AttrValue {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            AttrValue::Str(s) => Some(s),
            AttrValue::Bool(_) => None,
        }
    }
}

impl From<&str> for AttrValue {
    fn from(value: &str) -> Self {
        AttrValue::Str(value.to_string())
    }
}

impl From<String> for AttrValue {
    fn from(value: String) -> Self {
        AttrValue::Str(value)
    }
}

impl From<&String> for AttrValue {
    fn from(value: &String) -> Self {
        AttrValue::Str(value.clone())
    }
}

impl From<bool> for AttrValue {
    fn from(value: bool) -> Self {
        AttrValue::Bool(value)
    }
}

macro_rules! numeric_attr {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for AttrValue {
                fn from(value: $ty) -> Self {
                    AttrValue::Str(value.to_string())
                }
            }
        )*
    };
}

numeric_attr!(u8, u16, u32, u64, usize, i32, i64);

/// Ordered attribute list with unique keys.
///
/// Setting an existing key replaces its value in place, so the rendered order
/// is the order of first insertion.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Attrs(Vec<(String, AttrValue)>);

impl Attrs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a wire-named attribute. `cls` is stored as `class`.
    pub fn set(&mut self, name: &str, value: impl Into<AttrValue>) {
        let name = if name == "cls" { "class" } else { name };
        let value = value.into();
        match self.0.iter_mut().find(|(key, _)| key == name) {
            Some(slot) => slot.1 = value,
            None => self.0.push((name.to_string(), value)),
        }
    }

    /// Merges class tokens into the `class` attribute, keeping first-seen order.
    pub fn add_class(&mut self, classes: &str) {
        let merged = match self.get_str("class") {
            Some(existing) => merge_classes([existing, classes]),
            None => merge_classes([classes]),
        };
        if !merged.is_empty() {
            self.set("class", merged);
        }
    }

    pub fn get(&self, name: &str) -> Option<&AttrValue> {
        self.0
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value)
    }

    pub fn get_str(&self, name: &str) -> Option<&str> {
        self.get(name).and_then(AttrValue::as_str)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn remove(&mut self, name: &str) -> Option<AttrValue> {
        let index = self.0.iter().position(|(key, _)| key == name)?;
        Some(self.0.remove(index).1)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &AttrValue)> {
        self.0.iter().map(|(key, value)| (key.as_str(), value))
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Applies `other` on top of `self`: classes merge, everything else is
    /// overwritten.
    pub fn merge(&mut self, other: Attrs) {
        for (key, value) in other.0 {
            if let ("class", AttrValue::Str(classes)) = (key.as_str(), &value) {
                self.add_class(classes);
                continue;
            }
            self.set(&key, value);
        }
    }
}

/// Builder methods shared by elements and component option structs.
///
/// Names go through [`convert_name`], so `.attr("hx_get", "/items")` and
/// `.attr("hx-get", "/items")` are equivalent.
pub trait Attributes: Sized {
    fn attrs_mut(&mut self) -> &mut Attrs;

    fn attr(mut self, name: &str, value: impl Into<AttrValue>) -> Self {
        let name = convert_name(name);
        self.attrs_mut().set(&name, value);
        self
    }

    /// Sets the attribute only when a value is present.
    fn attr_opt<V: Into<AttrValue>>(self, name: &str, value: Option<V>) -> Self {
        match value {
            Some(value) => self.attr(name, value),
            None => self,
        }
    }

    fn class(mut self, classes: &str) -> Self {
        self.attrs_mut().add_class(classes);
        self
    }

    fn id(self, id: impl Into<String>) -> Self {
        self.attr("id", id.into())
    }

    fn attrs(mut self, attrs: Attrs) -> Self {
        self.attrs_mut().merge(attrs);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_convert_name() {
        assert_eq!(convert_name("hx_get"), "hx-get");
        assert_eq!(convert_name("hx_swap_oob"), "hx-swap-oob");
        assert_eq!(convert_name("data_value"), "data-value");
        assert_eq!(convert_name("aria_live"), "aria-live");
        assert_eq!(convert_name("cls"), "cls");
        assert_eq!(convert_name("tab_index"), "tab-index");
        assert_eq!(convert_name("href"), "href");
    }

    #[test]
    fn test_convert_attrs_keeps_values_and_last_write() {
        let converted = convert_attrs([("hx_get", "/a"), ("data_x", "1"), ("hx-get", "/b")]);

        assert_eq!(
            converted,
            vec![
                ("hx-get".to_string(), "/b"),
                ("data-x".to_string(), "1"),
            ]
        );
    }

    #[test]
    fn test_set_aliases_cls_to_class() {
        let mut attrs = Attrs::new();
        attrs.set("cls", "btn");

        assert_eq!(attrs.get_str("class"), Some("btn"));
        assert!(!attrs.contains("cls"));
    }

    #[test]
    fn test_set_replaces_in_place() {
        let mut attrs = Attrs::new();
        attrs.set("id", "a");
        attrs.set("role", "button");
        attrs.set("id", "b");

        let keys: Vec<&str> = attrs.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["id", "role"]);
        assert_eq!(attrs.get_str("id"), Some("b"));
    }

    #[test]
    fn test_merge_combines_classes() {
        let mut base = Attrs::new();
        base.set("class", "btn btn-primary");
        base.set("type", "button");

        let mut extra = Attrs::new();
        extra.set("class", "btn w-100");
        extra.set("type", "submit");

        base.merge(extra);

        assert_eq!(base.get_str("class"), Some("btn btn-primary w-100"));
        assert_eq!(base.get_str("type"), Some("submit"));
    }
}
