//! `scaffold apply` - write the embedded bootstrap files into the project.

use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::Args;

use crate::app::AppContext;
use crate::application::services::provision;
use crate::commands::effective_root;
use crate::domain::ContentMap;
use crate::payload;

/// Arguments for the `scaffold apply` command.
#[derive(Args, Default)]
pub struct ApplyArgs {
    /// Project root to provision.
    /// Defaults to $SCAFFOLD_ROOT, then the config file, then the current directory.
    #[arg(long)]
    pub root: Option<PathBuf>,

    /// List what would be written, without creating or modifying anything.
    #[arg(long)]
    pub dry_run: bool,
}

/// Entry point for `scaffold apply` (and bare `scaffold`).
///
/// # Errors
///
/// Returns an error if the root cannot be resolved or any directory or file
/// cannot be written. Files written before the failure are left in place.
pub fn run(app: &AppContext, args: &ApplyArgs) -> Result<()> {
    let (root, _) = effective_root(app, args.root.as_deref())?;
    let map = payload::content_map()?;
    provision_into(app, &root, payload::REQUIRED_DIRS, &map, args.dry_run)
}

/// Provision `map` under `root` and render the outcome.
///
/// # Errors
///
/// Returns the [`crate::domain::ApplyFailure`] of an aborted run, after
/// rendering the partial report.
pub fn provision_into(
    app: &AppContext,
    root: &Path,
    dirs: &[&str],
    map: &ContentMap,
    dry_run: bool,
) -> Result<()> {
    match provision::provision(&app.fs, root, dirs, map, &app.reporter(), dry_run) {
        Ok(report) => app.renderer().render_report(root, &report),
        Err(failure) => {
            app.renderer().render_partial(&failure.written, map.len());
            Err(failure.into())
        }
    }
}
