//! JSON output helpers.
//!
//! Success payloads go to stdout; [`error_object`] builds the error object
//! that `main` prints to stderr when a command fails under `--json`.

use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;

use crate::domain::{
    ApplyFailure, ConfigError, ContentMap, ProvisionError, RootSource, ScaffoldConfig, WriteReport,
};

/// Renders domain types as pretty-printed JSON on stdout.
pub struct JsonRenderer;

#[derive(Serialize)]
struct ReportOut<'a> {
    root: &'a Path,
    #[serde(flatten)]
    report: &'a WriteReport,
}

#[derive(Serialize)]
struct EntryOut<'a> {
    path: &'a str,
    bytes: usize,
}

impl JsonRenderer {
    /// Render a provisioning report.
    ///
    /// # Errors
    ///
    /// Returns an error if JSON serialization fails.
    pub fn render_report(&self, root: &Path, report: &WriteReport) -> Result<()> {
        print_json(&ReportOut { root, report })
    }

    /// Render the embedded entries.
    ///
    /// # Errors
    ///
    /// Returns an error if JSON serialization fails.
    pub fn render_entries(&self, map: &ContentMap) -> Result<()> {
        let entries: Vec<_> = map
            .iter()
            .map(|e| EntryOut {
                path: e.path.as_str(),
                bytes: e.content.len(),
            })
            .collect();
        print_json(&serde_json::json!({ "entries": entries }))
    }

    /// Render the effective configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if JSON serialization fails.
    pub fn render_config(
        &self,
        config: &ScaffoldConfig,
        path: &Path,
        root: &Path,
        source: RootSource,
    ) -> Result<()> {
        print_json(&serde_json::json!({
            "path": path.display().to_string(),
            "config": config,
            "effective_root": root.display().to_string(),
            "root_source": source.label(),
        }))
    }

    /// Render the CLI version.
    ///
    /// # Errors
    ///
    /// Returns an error if JSON serialization fails.
    pub fn render_version(&self, version: &str) -> Result<()> {
        print_json(&serde_json::json!({ "version": version }))
    }
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!(
        "{}",
        serde_json::to_string_pretty(value).context("JSON serialization failed")?
    );
    Ok(())
}

/// Format a JSON error object.
///
/// Output (pretty-printed):
/// ```json
/// {
///   "error": true,
///   "message": "...",
///   "code": "...",
///   "written": ["..."]
/// }
/// ```
///
/// `written` lists the paths that landed before an aborted run and is empty
/// for every other failure.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn format_error(message: &str, code: &str, written: &[&str]) -> Result<String> {
    let obj = serde_json::json!({
        "error": true,
        "message": message,
        "code": code,
        "written": written,
    });
    serde_json::to_string_pretty(&obj).context("JSON serialization failed")
}

/// Build the `--json` error object for any command failure.
///
/// Typed provisioning and config errors map to their stable codes;
/// everything else is `internal`.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn error_object(err: &anyhow::Error) -> Result<String> {
    let message = err.to_string();
    if let Some(failure) = err.downcast_ref::<ApplyFailure>() {
        let written: Vec<&str> = failure.written.paths().collect();
        return format_error(&message, failure.error.code(), &written);
    }
    let code = if let Some(e) = err.downcast_ref::<ProvisionError>() {
        e.code()
    } else if err.downcast_ref::<ConfigError>().is_some() {
        "config"
    } else {
        "internal"
    };
    format_error(&message, code, &[])
}
