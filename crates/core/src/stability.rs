use std::fmt;

use serde::Serialize;

/// How settled a component's API is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Stability {
    /// Covered by semver.
    Stable,
    /// Usable, but options may still change between minor versions.
    Beta,
    /// May change or disappear in any release.
    Experimental,
}

impl Stability {
    pub fn as_str(&self) -> &'static str {
        match self {
            Stability::Stable => "stable",
            Stability::Beta => "beta",
            Stability::Experimental => "experimental",
        }
    }
}

impl fmt::Display for Stability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Metadata record describing one component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ComponentInfo {
    pub name: &'static str,
    pub module: &'static str,
    pub stability: Stability,
    /// Version the component first shipped in.
    pub since: &'static str,
}

impl ComponentInfo {
    pub const fn new(
        name: &'static str,
        module: &'static str,
        stability: Stability,
        since: &'static str,
    ) -> Self {
        Self {
            name,
            module,
            stability,
            since,
        }
    }
}
