//! Shared mock infrastructure for unit tests.
//!
//! Provides an in-memory [`ProjectFs`], a fault-injecting wrapper and a
//! recording [`ProgressReporter`] so each test file doesn't have to re-define
//! the same boilerplate.

#![allow(clippy::expect_used, dead_code)]

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::io;
use std::path::{Path, PathBuf};

use scaffold_cli::application::ports::{ProgressReporter, ProjectFs};

// ── In-memory filesystem ──────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Dir,
    File(Vec<u8>),
}

/// A tiny POSIX-like tree: directories must exist before files land in them,
/// and a file blocks any directory at or below its path.
#[derive(Default)]
pub struct MemFs {
    nodes: RefCell<BTreeMap<PathBuf, Node>>,
    writes: RefCell<Vec<PathBuf>>,
    reads: RefCell<Vec<PathBuf>>,
}

impl MemFs {
    pub fn new() -> Self {
        let fs = Self::default();
        fs.nodes.borrow_mut().insert(PathBuf::from("/"), Node::Dir);
        fs
    }

    /// Seed a directory (and its ancestors).
    pub fn with_dir(self, path: &str) -> Self {
        self.create_dir_all(Path::new(path)).expect("seed dir");
        self
    }

    /// Seed a file, creating its parent chain.
    pub fn with_file(self, path: &str, content: &[u8]) -> Self {
        let p = Path::new(path);
        if let Some(parent) = p.parent() {
            self.create_dir_all(parent).expect("seed parent");
        }
        self.nodes
            .borrow_mut()
            .insert(p.to_path_buf(), Node::File(content.to_vec()));
        self
    }

    pub fn file(&self, path: &str) -> Option<Vec<u8>> {
        match self.nodes.borrow().get(Path::new(path)) {
            Some(Node::File(c)) => Some(c.clone()),
            _ => None,
        }
    }

    pub fn has_dir(&self, path: &str) -> bool {
        self.is_dir(Path::new(path))
    }

    pub fn snapshot(&self) -> BTreeMap<PathBuf, Node> {
        self.nodes.borrow().clone()
    }

    /// Every path passed to `write`, in call order.
    pub fn writes(&self) -> Vec<PathBuf> {
        self.writes.borrow().clone()
    }

    /// Every path passed to `read`, in call order.
    pub fn reads(&self) -> Vec<PathBuf> {
        self.reads.borrow().clone()
    }
}

impl ProjectFs for MemFs {
    fn is_dir(&self, path: &Path) -> bool {
        matches!(self.nodes.borrow().get(path), Some(Node::Dir))
    }

    fn exists(&self, path: &Path) -> bool {
        self.nodes.borrow().contains_key(path)
    }

    fn create_dir_all(&self, path: &Path) -> io::Result<()> {
        let mut nodes = self.nodes.borrow_mut();
        for ancestor in path.ancestors().collect::<Vec<_>>().into_iter().rev() {
            match nodes.get(ancestor) {
                Some(Node::Dir) => {}
                Some(Node::File(_)) => {
                    return Err(io::Error::new(
                        io::ErrorKind::AlreadyExists,
                        format!("{} is a file", ancestor.display()),
                    ));
                }
                None => {
                    nodes.insert(ancestor.to_path_buf(), Node::Dir);
                }
            }
        }
        Ok(())
    }

    fn read(&self, path: &Path) -> io::Result<Vec<u8>> {
        self.reads.borrow_mut().push(path.to_path_buf());
        match self.nodes.borrow().get(path) {
            Some(Node::File(c)) => Ok(c.clone()),
            Some(Node::Dir) => Err(io::Error::other("is a directory")),
            None => Err(io::Error::from(io::ErrorKind::NotFound)),
        }
    }

    fn write(&self, path: &Path, content: &[u8]) -> io::Result<()> {
        self.writes.borrow_mut().push(path.to_path_buf());
        let mut nodes = self.nodes.borrow_mut();
        let parent_ok = path
            .parent()
            .is_some_and(|p| matches!(nodes.get(p), Some(Node::Dir)));
        if !parent_ok {
            return Err(io::Error::from(io::ErrorKind::NotFound));
        }
        if matches!(nodes.get(path), Some(Node::Dir)) {
            return Err(io::Error::other("is a directory"));
        }
        nodes.insert(path.to_path_buf(), Node::File(content.to_vec()));
        Ok(())
    }
}

// ── Fault injection ───────────────────────────────────────────────────────────

/// Delegates to an inner [`MemFs`] but fails every write whose path ends with
/// `fail_suffix`.
pub struct FailingWriteFs {
    pub inner: MemFs,
    pub fail_suffix: &'static str,
    pub kind: io::ErrorKind,
}

impl ProjectFs for FailingWriteFs {
    fn is_dir(&self, path: &Path) -> bool {
        self.inner.is_dir(path)
    }

    fn exists(&self, path: &Path) -> bool {
        self.inner.exists(path)
    }

    fn create_dir_all(&self, path: &Path) -> io::Result<()> {
        self.inner.create_dir_all(path)
    }

    fn read(&self, path: &Path) -> io::Result<Vec<u8>> {
        self.inner.read(path)
    }

    fn write(&self, path: &Path, content: &[u8]) -> io::Result<()> {
        if path.to_string_lossy().ends_with(self.fail_suffix) {
            return Err(io::Error::from(self.kind));
        }
        self.inner.write(path, content)
    }
}

// ── Reporter ──────────────────────────────────────────────────────────────────

/// Records every progress event as `"step: …"` / `"warn: …"`.
#[derive(Default)]
pub struct RecordingReporter {
    pub events: RefCell<Vec<String>>,
}

impl RecordingReporter {
    pub fn events(&self) -> Vec<String> {
        self.events.borrow().clone()
    }
}

impl ProgressReporter for RecordingReporter {
    fn step(&self, message: &str) {
        self.events.borrow_mut().push(format!("step: {message}"));
    }

    fn warn(&self, message: &str) {
        self.events.borrow_mut().push(format!("warn: {message}"));
    }
}
