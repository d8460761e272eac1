//! Write report: what a provisioning run did, in application order.

use serde::Serialize;
use sha2::{Digest, Sha256};

use crate::domain::manifest::RelPath;

/// How a single write changed the file at its target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum WriteOutcome {
    /// No file existed at the target.
    Created,
    /// A file with different bytes was replaced.
    Overwritten,
    /// A file with identical bytes was rewritten.
    Unchanged,
}

impl WriteOutcome {
    /// Classify a write given the bytes currently at the target, if any.
    #[must_use]
    pub fn classify(existing: Option<&[u8]>, content: &[u8]) -> Self {
        match existing {
            None => Self::Created,
            Some(old) if old == content => Self::Unchanged,
            Some(_) => Self::Overwritten,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Created => "created",
            Self::Overwritten => "overwritten",
            Self::Unchanged => "unchanged",
        }
    }
}

/// One successfully written entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WrittenFile {
    #[serde(serialize_with = "serialize_rel_path")]
    pub path: RelPath,
    pub outcome: WriteOutcome,
    pub bytes: usize,
    pub sha256: String,
}

impl WrittenFile {
    #[must_use]
    pub fn new(path: RelPath, outcome: WriteOutcome, content: &[u8]) -> Self {
        Self {
            path,
            outcome,
            bytes: content.len(),
            sha256: sha256_hex(content),
        }
    }
}

fn serialize_rel_path<S: serde::Serializer>(path: &RelPath, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_str(path.as_str())
}

/// Ordered record of a provisioning run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct WriteReport {
    pub dry_run: bool,
    pub written: Vec<WrittenFile>,
}

impl WriteReport {
    #[must_use]
    pub fn dry_run() -> Self {
        Self {
            dry_run: true,
            written: Vec::new(),
        }
    }

    pub fn push(&mut self, file: WrittenFile) {
        self.written.push(file);
    }

    /// Relative paths in application order.
    pub fn paths(&self) -> impl Iterator<Item = &str> {
        self.written.iter().map(|f| f.path.as_str())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.written.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.written.is_empty()
    }

    /// Number of entries with the given outcome.
    #[must_use]
    pub fn count(&self, outcome: WriteOutcome) -> usize {
        self.written.iter().filter(|f| f.outcome == outcome).count()
    }
}

/// Lowercase hex SHA-256 of `data`.
#[must_use]
pub fn sha256_hex(data: &[u8]) -> String {
    use std::fmt::Write as _;
    Sha256::digest(data)
        .iter()
        .fold(String::with_capacity(64), |mut out, b| {
            let _ = write!(out, "{b:02x}");
            out
        })
}
