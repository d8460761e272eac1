//! Content map types: the ordered set of files a provisioning run applies.
//!
//! Pure types only, no I/O. Paths are validated once, when an entry is
//! inserted, so every `FileEntry` reaching the application layer is already
//! known to stay inside the project root.

use std::path::{Path, PathBuf};

use crate::domain::error::ProvisionError;

/// A `/`-separated path relative to the project root.
///
/// Invariant: non-empty, not absolute, no `\`, no NUL, no empty, `.` or `..`
/// segments.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RelPath(String);

impl RelPath {
    /// Validate and wrap a relative path.
    ///
    /// # Errors
    ///
    /// Returns [`ProvisionError::InvalidEntry`] if the path could resolve
    /// outside the root or is not in canonical `/`-separated form.
    pub fn new(raw: impl Into<String>) -> Result<Self, ProvisionError> {
        let raw = raw.into();
        if let Some(reason) = path_violation(&raw) {
            return Err(ProvisionError::InvalidEntry { path: raw, reason });
        }
        Ok(Self(raw))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Join onto `root`, one segment at a time.
    #[must_use]
    pub fn resolve(&self, root: &Path) -> PathBuf {
        self.0.split('/').fold(root.to_path_buf(), |acc, seg| acc.join(seg))
    }
}

impl std::fmt::Display for RelPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

fn path_violation(raw: &str) -> Option<&'static str> {
    if raw.is_empty() {
        return Some("path is empty");
    }
    if raw.starts_with('/') {
        return Some("path must be relative");
    }
    if raw.contains('\\') {
        return Some("use '/' as the separator");
    }
    if raw.contains('\0') {
        return Some("path contains a NUL byte");
    }
    // A drive or prefix segment such as `C:` would replace the root on join.
    if raw.contains(':') {
        return Some("path contains a drive or prefix separator ':'");
    }
    for seg in raw.split('/') {
        match seg {
            "" => return Some("path contains an empty segment"),
            "." => return Some("path contains a '.' segment"),
            ".." => return Some("escapes the project root"),
            _ => {}
        }
    }
    None
}

/// One file to provision: where it goes and its exact bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileEntry {
    pub path: RelPath,
    pub content: Vec<u8>,
}

/// Ordered, key-unique collection of [`FileEntry`].
///
/// Inserting a path that is already present replaces its content but keeps
/// the position of the first insertion.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContentMap {
    entries: Vec<FileEntry>,
}

impl ContentMap {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an entry; last content wins for a repeated path.
    ///
    /// # Errors
    ///
    /// Returns [`ProvisionError::InvalidEntry`] if `path` fails validation.
    pub fn insert(
        &mut self,
        path: impl Into<String>,
        content: impl Into<Vec<u8>>,
    ) -> Result<(), ProvisionError> {
        let path = RelPath::new(path)?;
        let content = content.into();
        match self.entries.iter_mut().find(|e| e.path == path) {
            Some(existing) => existing.content = content,
            None => self.entries.push(FileEntry { path, content }),
        }
        Ok(())
    }

    /// Build a map from `(path, content)` pairs, in order.
    ///
    /// # Errors
    ///
    /// Returns the first path validation failure.
    pub fn from_pairs<P, C>(pairs: impl IntoIterator<Item = (P, C)>) -> Result<Self, ProvisionError>
    where
        P: Into<String>,
        C: Into<Vec<u8>>,
    {
        let mut map = Self::new();
        for (path, content) in pairs {
            map.insert(path, content)?;
        }
        Ok(map)
    }

    pub fn iter(&self) -> impl Iterator<Item = &FileEntry> {
        self.entries.iter()
    }

    #[must_use]
    pub fn get(&self, path: &str) -> Option<&[u8]> {
        self.entries
            .iter()
            .find(|e| e.path.as_str() == path)
            .map(|e| e.content.as_slice())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'a> IntoIterator for &'a ContentMap {
    type Item = &'a FileEntry;
    type IntoIter = std::slice::Iter<'a, FileEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
