//! Static checks for common bootwire mistakes.
//!
//! Source checks are text heuristics; manifests are parsed as TOML.
//! Findings are warnings; nothing here fails the scan.

mod scan;

use std::path::Path;

use serde::Serialize;
use toml_edit::{DocumentMut, Item, TableLike};

pub use scan::{Project, SourceFile, SKIPPED_DIRS};

use crate::error::Result;

const DEPENDENCY_TABLES: [&str; 3] = ["dependencies", "dev-dependencies", "build-dependencies"];

/// Severity of a finding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    Warn,
}

impl std::fmt::Display for Level {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Level::Warn => write!(f, "warn"),
        }
    }
}

/// One finding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Issue {
    pub level: Level,
    pub code: &'static str,
    pub message: String,
}

impl Issue {
    fn warn(code: &'static str, message: impl Into<String>) -> Self {
        Self {
            level: Level::Warn,
            code,
            message: message.into(),
        }
    }
}

/// Outcome of a doctor run.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Report {
    pub issues: Vec<Issue>,
}

impl Report {
    pub fn is_ok(&self) -> bool {
        self.issues.is_empty()
    }
}

/// Scans `root` and runs every check.
pub fn run_doctor(root: &Path) -> Result<Report> {
    let project = Project::scan(root)?;
    Ok(diagnose(&project))
}

pub fn diagnose(project: &Project) -> Report {
    let mut issues = Vec::new();
    issues.extend(check_import_source(project));
    issues.extend(check_static_conflicts(project));
    issues.extend(check_toast_container(project));
    issues.extend(check_preset_targets(project));
    Report { issues }
}

/// A local checkout of the library next to a registry dependency on it.
pub fn check_import_source(project: &Project) -> Vec<Issue> {
    let manifests: Vec<(&SourceFile, DocumentMut)> = project
        .manifests
        .iter()
        .filter_map(|manifest| parse_manifest(manifest).map(|doc| (manifest, doc)))
        .collect();

    let has_checkout = manifests
        .iter()
        .any(|(_, doc)| declares_package(doc, "bootwire_components"));
    if !has_checkout {
        return Vec::new();
    }

    manifests
        .iter()
        .filter_map(|(manifest, doc)| {
            let names = registry_dependencies(doc);
            if names.is_empty() {
                return None;
            }
            Some(Issue::warn(
                "import-source",
                format!(
                    "{} depends on {} from the registry while a local checkout exists",
                    manifest.path.display(),
                    names.join(", ")
                ),
            ))
        })
        .collect()
}

fn parse_manifest(manifest: &SourceFile) -> Option<DocumentMut> {
    match manifest.text.parse::<DocumentMut>() {
        Ok(doc) => Some(doc),
        Err(err) => {
            tracing::debug!(
                path = %manifest.path.display(),
                error = %err,
                "Skipping manifest that does not parse"
            );
            None
        }
    }
}

fn declares_package(doc: &DocumentMut, name: &str) -> bool {
    doc.get("package")
        .and_then(|package| package.get("name"))
        .and_then(Item::as_str)
        == Some(name)
}

fn is_bootwire_crate(name: &str) -> bool {
    name.starts_with("bootwire_") || name.starts_with("bootwire-") || name == "bootwire"
}

fn dependency_tables_in(item: &Item) -> Vec<&dyn TableLike> {
    DEPENDENCY_TABLES
        .iter()
        .filter_map(|name| item.get(name))
        .filter_map(Item::as_table_like)
        .collect()
}

/// Every dependency table of a manifest, including target-specific and
/// `[workspace.dependencies]` ones.
fn dependency_tables(doc: &DocumentMut) -> Vec<&dyn TableLike> {
    let mut tables = dependency_tables_in(doc.as_item());
    if let Some(targets) = doc.get("target").and_then(Item::as_table_like) {
        for (_, target) in targets.iter() {
            tables.extend(dependency_tables_in(target));
        }
    }
    if let Some(workspace) = doc.get("workspace") {
        tables.extend(dependency_tables_in(workspace));
    }
    tables
}

/// Names of bootwire dependencies resolved from a registry.
///
/// `bootwire_web = "0.1"` counts; entries with `path` or `workspace`, in
/// inline, dotted or table form, do not.
fn registry_dependencies(doc: &DocumentMut) -> Vec<String> {
    let mut names = Vec::new();
    for table in dependency_tables(doc) {
        for (key, item) in table.iter() {
            let spec = item.as_table_like();
            let package = spec
                .and_then(|spec| spec.get("package"))
                .and_then(Item::as_str);
            if !is_bootwire_crate(package.unwrap_or(key)) {
                continue;
            }
            let local =
                spec.is_some_and(|spec| spec.contains_key("path") || spec.contains_key("workspace"));
            if !local && !names.iter().any(|name| name == key) {
                names.push(key.to_string());
            }
        }
    }
    names
}

/// A file mounting its own `/static` while `add_bootstrap` mounts one too.
pub fn check_static_conflicts(project: &Project) -> Vec<Issue> {
    project
        .sources
        .iter()
        .filter(|file| {
            file.text.contains("add_bootstrap(")
                && file.text.contains("\"/static\"")
                && !file.text.contains("mount_static(false)")
        })
        .map(|file| {
            Issue::warn(
                "static-conflict",
                format!("Potential /static conflict in {}", file.path.display()),
            )
        })
        .collect()
}

/// `toast_response` used without a `ToastContainer` anywhere in the project.
pub fn check_toast_container(project: &Project) -> Vec<Issue> {
    let uses_toast_response = project
        .sources
        .iter()
        .any(|file| file.text.contains("toast_response("));
    let has_container = project
        .sources
        .iter()
        .any(|file| file.text.contains("ToastContainer"));

    if uses_toast_response && !has_container {
        vec![Issue::warn(
            "missing-toast-container",
            "Found toast_response usage but no ToastContainer in project files.",
        )]
    } else {
        Vec::new()
    }
}

/// `ActiveSearch` in a file that never sets a target.
pub fn check_preset_targets(project: &Project) -> Vec<Issue> {
    project
        .sources
        .iter()
        .filter(|file| file.text.contains("ActiveSearch") && !file.text.contains(".target("))
        .map(|file| {
            Issue::warn(
                "preset-target",
                format!(
                    "ActiveSearch may be missing a target in {}",
                    file.path.display()
                ),
            )
        })
        .collect()
}
