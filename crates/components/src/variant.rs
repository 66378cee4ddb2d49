//! Closed option sets shared across components.

use std::fmt;

/// Bootstrap colour variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Variant {
    #[default]
    Primary,
    Secondary,
    Success,
    Danger,
    Warning,
    Info,
    Light,
    Dark,
    Link,
}

impl Variant {
    pub const ALL: [Variant; 9] = [
        Variant::Primary,
        Variant::Secondary,
        Variant::Success,
        Variant::Danger,
        Variant::Warning,
        Variant::Info,
        Variant::Light,
        Variant::Dark,
        Variant::Link,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Variant::Primary => "primary",
            Variant::Secondary => "secondary",
            Variant::Success => "success",
            Variant::Danger => "danger",
            Variant::Warning => "warning",
            Variant::Info => "info",
            Variant::Light => "light",
            Variant::Dark => "dark",
            Variant::Link => "link",
        }
    }

    pub fn parse(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|variant| variant.as_str().eq_ignore_ascii_case(name.trim()))
    }

    /// Parses a variant name, falling back to `fallback` for unknown names.
    pub fn parse_or(name: &str, fallback: Variant) -> Self {
        Self::parse(name).unwrap_or(fallback)
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Component size modifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Size {
    Sm,
    Lg,
}

impl Size {
    pub fn as_str(&self) -> &'static str {
        match self {
            Size::Sm => "sm",
            Size::Lg => "lg",
        }
    }

    pub fn parse(name: &str) -> Option<Self> {
        match name.trim() {
            "sm" => Some(Size::Sm),
            "lg" => Some(Size::Lg),
            _ => None,
        }
    }
}

/// Resolves a variant from the global default registry.
pub(crate) fn themed_variant(component: &str, key: &str, fallback: Variant) -> Variant {
    bootwire_core::theme::default_str(component, key)
        .map(|name| Variant::parse_or(&name, fallback))
        .unwrap_or(fallback)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_variant() {
        assert_eq!(Variant::parse("success"), Some(Variant::Success));
        assert_eq!(Variant::parse("Danger"), Some(Variant::Danger));
        assert_eq!(Variant::parse("neon"), None);
        assert_eq!(Variant::parse_or("neon", Variant::Secondary), Variant::Secondary);
    }

    #[test]
    fn test_parse_size() {
        assert_eq!(Size::parse("lg"), Some(Size::Lg));
        assert_eq!(Size::parse("xl"), None);
    }
}
