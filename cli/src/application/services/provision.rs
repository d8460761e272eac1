//! Application service: materialise a content map under a project root.
//!
//! Single linear pass in map order, abort on the first filesystem error.
//! Files under the root that the map does not name are never opened.

use std::collections::HashSet;
use std::io;
use std::path::{Path, PathBuf};

use crate::application::ports::{ProgressReporter, ProjectFs};
use crate::domain::error::{ApplyFailure, ProvisionError};
use crate::domain::manifest::{ContentMap, RelPath};
use crate::domain::report::{WriteOutcome, WriteReport, WrittenFile};

/// Create `root` and each of `dirs` beneath it.
///
/// Directories that already exist are left alone; only missing ones are
/// announced through `reporter`.
///
/// # Errors
///
/// Returns [`ProvisionError::InvalidEntry`] for a malformed directory path and
/// [`ProvisionError::DirectoryCreation`] if any directory cannot be created.
pub fn ensure_directories(
    fs: &impl ProjectFs,
    root: &Path,
    dirs: &[&str],
    reporter: &impl ProgressReporter,
) -> Result<(), ProvisionError> {
    ensure_dir(fs, root, reporter)?;
    for dir in dirs {
        let rel = RelPath::new(*dir)?;
        ensure_dir(fs, &rel.resolve(root), reporter)?;
    }
    Ok(())
}

fn ensure_dir(
    fs: &impl ProjectFs,
    path: &Path,
    reporter: &impl ProgressReporter,
) -> Result<(), ProvisionError> {
    if fs.is_dir(path) {
        return Ok(());
    }
    fs.create_dir_all(path)
        .map_err(|source| ProvisionError::DirectoryCreation {
            path: path.to_path_buf(),
            source,
        })?;
    reporter.step(&format!("created directory {}", path.display()));
    Ok(())
}

/// Write every entry of `map` under `root`, in order.
///
/// Each target's parent chain is created on demand and any existing file is
/// overwritten. On success every target holds exactly its entry's bytes.
///
/// # Errors
///
/// Stops at the first failing entry and returns an [`ApplyFailure`] holding
/// the error and the report of the entries written before it.
pub fn apply(
    fs: &impl ProjectFs,
    root: &Path,
    map: &ContentMap,
    reporter: &impl ProgressReporter,
) -> Result<WriteReport, ApplyFailure> {
    let mut report = WriteReport::default();
    for entry in map {
        match write_entry(fs, root, &entry.path, &entry.content, reporter) {
            Ok(outcome) => report.push(WrittenFile::new(
                entry.path.clone(),
                outcome,
                &entry.content,
            )),
            Err(error) => {
                return Err(ApplyFailure {
                    written: report,
                    error,
                });
            }
        }
    }
    Ok(report)
}

fn write_entry(
    fs: &impl ProjectFs,
    root: &Path,
    rel: &RelPath,
    content: &[u8],
    reporter: &impl ProgressReporter,
) -> Result<WriteOutcome, ProvisionError> {
    let target = rel.resolve(root);
    if let Some(parent) = target.parent() {
        ensure_dir(fs, parent, reporter)?;
    }
    let outcome = classify(fs, &target, content);
    fs.write(&target, content)
        .map_err(|source| ProvisionError::Write {
            path: target.clone(),
            source,
        })?;
    if outcome == WriteOutcome::Overwritten {
        reporter.warn(&format!("replaced existing contents of {rel}"));
    }
    Ok(outcome)
}

/// Preview what [`provision`] would do, without touching the filesystem.
///
/// Walks the layout and every entry the way a real run would, tracking the
/// directories and files it would create, so collisions a real run hits are
/// reported here too.
///
/// # Errors
///
/// Returns an [`ApplyFailure`] holding the error a real run would stop at and
/// the entries planned before it.
pub fn plan(
    fs: &impl ProjectFs,
    root: &Path,
    dirs: &[&str],
    map: &ContentMap,
) -> Result<WriteReport, ApplyFailure> {
    let mut planned = Planned::default();
    let mut report = WriteReport::dry_run();
    if let Err(error) = planned.layout(fs, root, dirs) {
        return Err(ApplyFailure {
            written: report,
            error,
        });
    }
    for entry in map {
        match planned.entry(fs, &entry.path.resolve(root), &entry.content) {
            Ok(outcome) => report.push(WrittenFile::new(
                entry.path.clone(),
                outcome,
                &entry.content,
            )),
            Err(error) => {
                return Err(ApplyFailure {
                    written: report,
                    error,
                });
            }
        }
    }
    Ok(report)
}

/// Paths a dry run has already accounted for.
#[derive(Default)]
struct Planned {
    dirs: HashSet<PathBuf>,
    files: HashSet<PathBuf>,
}

impl Planned {
    fn layout(
        &mut self,
        fs: &impl ProjectFs,
        root: &Path,
        dirs: &[&str],
    ) -> Result<(), ProvisionError> {
        self.dir(fs, root)?;
        for dir in dirs {
            self.dir(fs, &RelPath::new(*dir)?.resolve(root))?;
        }
        Ok(())
    }

    /// Mirror of `create_dir_all`: the nearest existing ancestor must be a
    /// directory.
    fn dir(&mut self, fs: &impl ProjectFs, path: &Path) -> Result<(), ProvisionError> {
        let mut missing = Vec::new();
        for ancestor in path.ancestors() {
            if self.dirs.contains(ancestor) || fs.is_dir(ancestor) {
                break;
            }
            if self.files.contains(ancestor) || fs.exists(ancestor) {
                return Err(ProvisionError::DirectoryCreation {
                    path: path.to_path_buf(),
                    source: io::Error::new(
                        io::ErrorKind::AlreadyExists,
                        format!("{} is not a directory", ancestor.display()),
                    ),
                });
            }
            missing.push(ancestor.to_path_buf());
        }
        self.dirs.extend(missing);
        Ok(())
    }

    fn entry(
        &mut self,
        fs: &impl ProjectFs,
        target: &Path,
        content: &[u8],
    ) -> Result<WriteOutcome, ProvisionError> {
        if let Some(parent) = target.parent() {
            self.dir(fs, parent)?;
        }
        if self.dirs.contains(target) || fs.is_dir(target) {
            return Err(ProvisionError::Write {
                path: target.to_path_buf(),
                source: io::Error::new(
                    io::ErrorKind::IsADirectory,
                    format!("{} is a directory", target.display()),
                ),
            });
        }
        let outcome = classify(fs, target, content);
        self.files.insert(target.to_path_buf());
        Ok(outcome)
    }
}

/// Anything unreadable other than "not found" counts as an existing file.
fn classify(fs: &impl ProjectFs, target: &Path, content: &[u8]) -> WriteOutcome {
    match fs.read(target) {
        Ok(existing) => WriteOutcome::classify(Some(existing.as_slice()), content),
        Err(e) if e.kind() == io::ErrorKind::NotFound => WriteOutcome::Created,
        Err(_) => WriteOutcome::Overwritten,
    }
}

/// Full provisioning run: layout, then content, or a dry-run preview.
///
/// # Errors
///
/// Returns an [`ApplyFailure`] if the layout cannot be created (with an
/// empty report) or if any write fails. A dry run fails wherever the real
/// run would.
pub fn provision(
    fs: &impl ProjectFs,
    root: &Path,
    dirs: &[&str],
    map: &ContentMap,
    reporter: &impl ProgressReporter,
    dry_run: bool,
) -> Result<WriteReport, ApplyFailure> {
    if dry_run {
        return plan(fs, root, dirs, map);
    }
    ensure_directories(fs, root, dirs, reporter).map_err(|error| ApplyFailure {
        written: WriteReport::default(),
        error,
    })?;
    apply(fs, root, map, reporter)
}
