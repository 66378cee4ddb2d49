//! Component default registry.
//!
//! Components fall back to registry values for options the caller left unset.
//! Lookups go: call-site value, then runtime override, then built-in default.
//!
//! The registry is copy-on-write. Every write builds a new [`Snapshot`] and
//! swaps it in behind the lock, so a reader holding an `Arc<Snapshot>` always
//! sees a complete set of overrides.
//!
//! # Example
//!
//! ```
//! use bootwire_core::theme::{Defaults, DefaultsRegistry};
//! use serde_json::json;
//!
//! let registry = DefaultsRegistry::new();
//! assert_eq!(registry.lookup("Button", "variant"), Some(json!("primary")));
//!
//! registry.set_component_defaults("Button", Defaults::from([("variant".into(), json!("success"))]));
//! assert_eq!(registry.lookup("Button", "variant"), Some(json!("success")));
//!
//! registry.reset_component_defaults(Some("Button"));
//! assert_eq!(registry.lookup("Button", "variant"), Some(json!("primary")));
//! ```

use std::collections::BTreeMap;
use std::sync::{Arc, LazyLock, PoisonError, RwLock};

use serde_json::{json, Value};

use crate::error::ThemeError;

/// Option values for one component, keyed by option name.
pub type Defaults = BTreeMap<String, Value>;

/// Per-component defaults for a whole theme.
pub type ThemeDefaults = BTreeMap<String, Defaults>;

/// Name of the theme whose values back every lookup.
pub const DEFAULT_THEME: &str = "default";

const BUILTIN_THEMES: &[&str] = &[DEFAULT_THEME, "dark", "minimal", "corporate"];

/// Returns the names of all built-in themes.
pub fn list_builtin_themes() -> Vec<&'static str> {
    BUILTIN_THEMES.to_vec()
}

/// Returns a built-in theme by name.
pub fn get_builtin_theme(name: &str) -> Option<ThemeDefaults> {
    let entries: Vec<(&str, Value)> = match name {
        DEFAULT_THEME => vec![
            ("Alert", json!({ "variant": "primary" })),
            ("Button", json!({ "variant": "primary" })),
            ("Card", json!({ "shadow": "sm" })),
            ("ErrorDialog", json!({ "variant": "danger" })),
            ("FooterModern", json!({ "bg_variant": "dark", "text_variant": "light" })),
            ("Toast", json!({ "autohide": true, "delay": 5000 })),
        ],
        "dark" => vec![
            ("Button", json!({ "variant": "light" })),
            ("Card", json!({ "shadow": "lg" })),
            ("FooterModern", json!({ "bg_variant": "black", "text_variant": "light" })),
            ("NavbarModern", json!({ "glass": true })),
            ("ThemeToggle", json!({ "current_theme": "dark" })),
        ],
        "minimal" => vec![
            ("Button", json!({ "variant": "dark", "outline": true })),
            ("Card", json!({ "shadow": "none" })),
            ("FooterModern", json!({ "bg_variant": "light", "text_variant": "dark" })),
            ("Toast", json!({ "autohide": true, "delay": 3000 })),
        ],
        "corporate" => vec![
            ("Alert", json!({ "variant": "info" })),
            ("Button", json!({ "variant": "secondary" })),
            ("ErrorDialog", json!({ "variant": "warning" })),
            ("SearchableSelect", json!({ "size": "sm" })),
        ],
        _ => return None,
    };

    Some(
        entries
            .into_iter()
            .map(|(component, values)| (component.to_string(), as_defaults(values)))
            .collect(),
    )
}

fn as_defaults(value: Value) -> Defaults {
    match value {
        Value::Object(map) => map.into_iter().collect(),
        _ => Defaults::new(),
    }
}

/// An immutable view of the runtime overrides.
#[derive(Debug, Clone, Default)]
pub struct Snapshot {
    overrides: ThemeDefaults,
}

impl Snapshot {
    /// Runtime overrides for a component, if any were set.
    pub fn overrides(&self, component: &str) -> Option<&Defaults> {
        self.overrides.get(component)
    }
}

/// Copy-on-write store of per-component defaults.
#[derive(Debug)]
pub struct DefaultsRegistry {
    builtin: ThemeDefaults,
    current: RwLock<Arc<Snapshot>>,
}

impl Default for DefaultsRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl DefaultsRegistry {
    /// Creates a registry backed by the `default` theme with no overrides.
    pub fn new() -> Self {
        Self {
            builtin: get_builtin_theme(DEFAULT_THEME).unwrap_or_default(),
            current: RwLock::new(Arc::new(Snapshot::default())),
        }
    }

    /// Returns the current snapshot.
    pub fn snapshot(&self) -> Arc<Snapshot> {
        self.current
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn publish(&self, update: impl FnOnce(&mut ThemeDefaults)) {
        let mut guard = self.current.write().unwrap_or_else(PoisonError::into_inner);
        let mut overrides = guard.overrides.clone();
        update(&mut overrides);
        *guard = Arc::new(Snapshot { overrides });
    }

    /// Merges `defaults` into the overrides for `component`.
    pub fn set_component_defaults(&self, component: &str, defaults: Defaults) {
        self.publish(|overrides| {
            overrides
                .entry(component.to_string())
                .or_default()
                .extend(defaults);
        });
    }

    /// Clears overrides for one component, or for all of them with `None`.
    pub fn reset_component_defaults(&self, component: Option<&str>) {
        self.publish(|overrides| match component {
            Some(component) => {
                overrides.remove(component);
            }
            None => overrides.clear(),
        });
    }

    /// Installs every component default from a built-in theme as overrides.
    pub fn apply_theme(&self, name: &str) -> Result<(), ThemeError> {
        let theme =
            get_builtin_theme(name).ok_or_else(|| ThemeError::UnknownTheme(name.to_string()))?;
        self.publish(|overrides| {
            for (component, defaults) in theme {
                overrides.entry(component).or_default().extend(defaults);
            }
        });
        Ok(())
    }

    /// Runtime override or built-in value for a single option.
    pub fn lookup(&self, component: &str, key: &str) -> Option<Value> {
        let snapshot = self.snapshot();
        snapshot
            .overrides(component)
            .and_then(|defaults| defaults.get(key))
            .or_else(|| self.builtin.get(component).and_then(|d| d.get(key)))
            .cloned()
    }

    /// Merges call-site values over overrides over built-in defaults.
    ///
    /// `None` call-site values do not shadow anything. Keys present nowhere
    /// are absent from the result.
    pub fn resolve<'a, I>(&self, component: &str, call_site: I) -> Defaults
    where
        I: IntoIterator<Item = (&'a str, Option<Value>)>,
    {
        let snapshot = self.snapshot();
        let mut resolved = self.builtin.get(component).cloned().unwrap_or_default();
        if let Some(overrides) = snapshot.overrides(component) {
            resolved.extend(overrides.iter().map(|(k, v)| (k.clone(), v.clone())));
        }
        for (key, value) in call_site {
            if let Some(value) = value {
                resolved.insert(key.to_string(), value);
            }
        }
        resolved
    }
}

static GLOBAL: LazyLock<DefaultsRegistry> = LazyLock::new(DefaultsRegistry::new);

/// The process-wide registry consulted by components.
pub fn global() -> &'static DefaultsRegistry {
    &GLOBAL
}

pub fn set_component_defaults(component: &str, defaults: Defaults) {
    GLOBAL.set_component_defaults(component, defaults);
}

pub fn reset_component_defaults(component: Option<&str>) {
    GLOBAL.reset_component_defaults(component);
}

pub fn resolve_defaults<'a, I>(component: &str, call_site: I) -> Defaults
where
    I: IntoIterator<Item = (&'a str, Option<Value>)>,
{
    GLOBAL.resolve(component, call_site)
}

pub fn apply_theme(name: &str) -> Result<(), ThemeError> {
    GLOBAL.apply_theme(name)
}

/// String option from the global registry.
pub fn default_str(component: &str, key: &str) -> Option<String> {
    GLOBAL
        .lookup(component, key)
        .and_then(|value| value.as_str().map(str::to_string))
}

pub fn default_bool(component: &str, key: &str) -> Option<bool> {
    GLOBAL.lookup(component, key).and_then(|value| value.as_bool())
}

pub fn default_u64(component: &str, key: &str) -> Option<u64> {
    GLOBAL.lookup(component, key).and_then(|value| value.as_u64())
}
