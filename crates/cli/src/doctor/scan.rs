//! Project file discovery.

use std::path::{Path, PathBuf};

use walkdir::{DirEntry, WalkDir};

use crate::error::{DoctorError, Result};

/// Build output and dependency directories that are never scanned.
pub const SKIPPED_DIRS: &[&str] = &[
    "target",
    "vendor",
    ".git",
    "node_modules",
    ".venv",
    "site-packages",
];

/// A scanned file and its contents.
#[derive(Debug, Clone)]
pub struct SourceFile {
    /// Path relative to the project root.
    pub path: PathBuf,
    pub text: String,
}

/// Rust sources and Cargo manifests found under a project root.
#[derive(Debug, Clone, Default)]
pub struct Project {
    pub root: PathBuf,
    pub sources: Vec<SourceFile>,
    pub manifests: Vec<SourceFile>,
}

fn is_skipped(entry: &DirEntry) -> bool {
    entry.depth() > 0
        && entry.file_type().is_dir()
        && entry
            .file_name()
            .to_str()
            .is_some_and(|name| SKIPPED_DIRS.contains(&name))
}

fn read_lossy(path: &Path) -> Result<String> {
    let bytes = std::fs::read(path).map_err(|source| DoctorError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

impl Project {
    /// Walks `root` collecting `*.rs` files and `Cargo.toml` manifests.
    pub fn scan(root: &Path) -> Result<Self> {
        if !root.is_dir() {
            return Err(DoctorError::NotADirectory(root.to_path_buf()));
        }

        let mut project = Project {
            root: root.to_path_buf(),
            ..Project::default()
        };

        for entry in WalkDir::new(root)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|entry| !is_skipped(entry))
        {
            let entry = entry.map_err(|source| DoctorError::Walk {
                path: root.to_path_buf(),
                source,
            })?;
            if !entry.file_type().is_file() {
                continue;
            }

            let path = entry.path();
            let is_manifest = entry.file_name() == "Cargo.toml";
            let is_source = path.extension().is_some_and(|ext| ext == "rs");
            if !is_manifest && !is_source {
                continue;
            }

            let file = SourceFile {
                path: path.strip_prefix(root).unwrap_or(path).to_path_buf(),
                text: read_lossy(path)?,
            };
            if is_manifest {
                project.manifests.push(file);
            } else {
                project.sources.push(file);
            }
        }

        tracing::debug!(
            root = %root.display(),
            sources = project.sources.len(),
            manifests = project.manifests.len(),
            "Scanned project"
        );
        Ok(project)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_scan_skips_build_and_dependency_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        fs::create_dir_all(root.join("src")).unwrap();
        fs::create_dir_all(root.join("target/debug")).unwrap();
        fs::create_dir_all(root.join("vendor/dep/src")).unwrap();
        fs::write(root.join("Cargo.toml"), "[package]\nname = \"app\"\n").unwrap();
        fs::write(root.join("src/main.rs"), "fn main() {}").unwrap();
        fs::write(root.join("src/notes.md"), "# notes").unwrap();
        fs::write(root.join("target/debug/build.rs"), "fn main() {}").unwrap();
        fs::write(root.join("vendor/dep/src/lib.rs"), "pub fn dep() {}").unwrap();

        let project = Project::scan(root).unwrap();

        let sources: Vec<_> = project.sources.iter().map(|f| f.path.clone()).collect();
        assert_eq!(sources, [PathBuf::from("src/main.rs")]);
        assert_eq!(project.manifests.len(), 1);
        assert_eq!(project.manifests[0].path, PathBuf::from("Cargo.toml"));
    }

    #[test]
    fn test_scan_reads_invalid_utf8_lossily() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("lib.rs"), b"// \xff\nfn toast_response() {}").unwrap();

        let project = Project::scan(dir.path()).unwrap();
        assert!(project.sources[0].text.contains("toast_response("));
    }

    #[test]
    fn test_scan_rejects_missing_root() {
        let dir = tempfile::tempdir().unwrap();
        let err = Project::scan(&dir.path().join("missing")).unwrap_err();
        assert!(matches!(err, DoctorError::NotADirectory(_)));
    }
}
