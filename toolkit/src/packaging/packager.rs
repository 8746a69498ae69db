//! Single-file source bundles.
//!
//! A bundle is a plain concatenation of `###<path>##!<body>` records. Paths
//! are relative to the bundled root, `/`-separated and prefixed with `./`.

use std::fs;
use std::path::{Component, Path, PathBuf};

use walkdir::WalkDir;

use crate::utils::errors::{Result, ToolkitError};

pub const RECORD_MARKER: &str = "###";
pub const BODY_MARKER: &str = "##!";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BundleEntry {
    pub path: String,
    pub body: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Bundle {
    entries: Vec<BundleEntry>,
}

impl Bundle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> &[BundleEntry] {
        &self.entries
    }

    pub fn push(&mut self, path: impl Into<String>, body: impl Into<String>) {
        self.entries.push(BundleEntry {
            path: path.into(),
            body: body.into(),
        });
    }

    /// Gather every file under `root` whose extension is `extension`, in
    /// file-name order.
    pub fn collect(root: &Path, extension: &str) -> Result<Self> {
        let mut bundle = Bundle::new();
        for entry in WalkDir::new(root).sort_by_file_name() {
            let entry = entry?;
            let path = entry.path();
            if !entry.file_type().is_file()
                || path.extension().map_or(true, |ext| ext != extension)
            {
                continue;
            }
            let relative = path
                .strip_prefix(root)
                .map_err(|_| ToolkitError::InvalidPath(path.display().to_string()))?;
            let name = relative
                .components()
                .map(|c| c.as_os_str().to_string_lossy())
                .collect::<Vec<_>>()
                .join("/");
            tracing::debug!(file = %name, "bundling");
            bundle.push(format!("./{}", name), fs::read_to_string(path)?);
        }
        Ok(bundle)
    }

    pub fn encode(&self) -> String {
        self.entries
            .iter()
            .map(|e| format!("{}{}{}{}", RECORD_MARKER, e.path, BODY_MARKER, e.body))
            .collect()
    }

    /// Parse a bundle. Chunks that do not split into exactly a path and a
    /// body are skipped.
    pub fn decode(text: &str) -> Self {
        let mut bundle = Bundle::new();
        for chunk in text.split(RECORD_MARKER) {
            let parts: Vec<&str> = chunk.split(BODY_MARKER).collect();
            if let [path, body] = parts.as_slice() {
                bundle.push(*path, *body);
            } else if !chunk.is_empty() {
                tracing::debug!(len = chunk.len(), "skipping malformed record");
            }
        }
        bundle
    }

    /// Write every entry below `prefix`, creating directories as needed.
    /// All paths are checked before anything is written.
    pub fn write_to(&self, prefix: &Path) -> Result<Vec<PathBuf>> {
        let mut targets = Vec::with_capacity(self.entries.len());
        for entry in &self.entries {
            targets.push((prefix.join(relative_path(&entry.path)?), entry));
        }

        let mut written = Vec::with_capacity(targets.len());
        for (target, entry) in targets {
            if let Some(parent) = target.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::write(&target, &entry.body)?;
            tracing::info!(path = %target.display(), "wrote");
            written.push(target);
        }
        Ok(written)
    }
}

fn relative_path(path: &str) -> Result<PathBuf> {
    let stripped = path.strip_prefix("./").unwrap_or(path);
    let relative = PathBuf::from(stripped);
    let safe = !stripped.is_empty()
        && relative
            .components()
            .all(|c| matches!(c, Component::Normal(_) | Component::CurDir));
    if !safe {
        return Err(ToolkitError::InvalidPath(path.to_string()));
    }
    Ok(relative)
}

/// Bundle `root` into a single string.
pub fn package(root: &Path, extension: &str) -> Result<String> {
    Ok(Bundle::collect(root, extension)?.encode())
}

/// Unpack `text` below `prefix`, returning the files written.
pub fn unpackage(text: &str, prefix: &Path) -> Result<Vec<PathBuf>> {
    Bundle::decode(text).write_to(prefix)
}
