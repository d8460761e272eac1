//! Output formatting module

pub mod human;
pub mod json;
pub mod reporter;
pub mod styles;

use std::path::Path;

use anyhow::Result;
use console::Term;
use owo_colors::OwoColorize as _;
pub use human::HumanRenderer;
pub use json::JsonRenderer;
pub use reporter::TerminalReporter;
pub use styles::Styles;

use crate::domain::{ContentMap, RootSource, ScaffoldConfig, WriteReport};

/// Output context carrying styling and terminal state.
pub struct OutputContext {
    /// Stylesheet for colored output.
    pub styles: Styles,
    /// Whether to suppress non-error output.
    pub quiet: bool,
}

impl OutputContext {
    /// Create output context based on CLI flags and environment.
    #[must_use]
    pub fn new(no_color: bool, quiet: bool) -> Self {
        let is_tty = Term::stdout().is_term();
        let use_colors = !no_color && is_tty && std::env::var("NO_COLOR").is_err();

        let mut styles = Styles::default();
        if use_colors {
            styles.colorize();
        }

        Self { styles, quiet }
    }

    /// Print a success message prefixed with `✓`. Suppressed when `quiet`.
    pub fn success(&self, msg: &str) {
        if !self.quiet {
            println!("  {} {msg}", "✓".style(self.styles.success));
        }
    }

    /// Print a warning message prefixed with `⚠`. Suppressed when `quiet`.
    pub fn warn(&self, msg: &str) {
        if !self.quiet {
            println!("  {} {msg}", "⚠".style(self.styles.warning));
        }
    }

    /// Print an info message prefixed with `ℹ`. Suppressed when `quiet`.
    pub fn info(&self, msg: &str) {
        if !self.quiet {
            println!("  {} {msg}", "ℹ".style(self.styles.info));
        }
    }

    /// Print a section header. Suppressed when `quiet`.
    pub fn header(&self, msg: &str) {
        if !self.quiet {
            println!("{}", msg.style(self.styles.header));
        }
    }
}

/// Mode-dispatching renderer handed out by `AppContext::renderer()`.
pub enum Renderer<'a> {
    Human(HumanRenderer<'a>),
    Json(JsonRenderer),
}

impl Renderer<'_> {
    /// Render a completed (or dry-run) provisioning report.
    ///
    /// # Errors
    ///
    /// Returns an error if JSON serialization fails.
    pub fn render_report(&self, root: &Path, report: &WriteReport) -> Result<()> {
        match self {
            Self::Human(r) => {
                r.render_report(root, report);
                Ok(())
            }
            Self::Json(r) => r.render_report(root, report),
        }
    }

    /// Render what was written before a run aborted.
    pub fn render_partial(&self, report: &WriteReport, total: usize) {
        match self {
            Self::Human(r) => r.render_partial(report, total),
            // The JSON error object carries the partial list.
            Self::Json(_) => {}
        }
    }

    /// Render the embedded entries in application order.
    ///
    /// # Errors
    ///
    /// Returns an error if JSON serialization fails.
    pub fn render_entries(&self, map: &ContentMap) -> Result<()> {
        match self {
            Self::Human(r) => {
                r.render_entries(map);
                Ok(())
            }
            Self::Json(r) => r.render_entries(map),
        }
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
        match self {
            Self::Human(r) => {
                r.render_config(config, path, root, source);
                Ok(())
            }
            Self::Json(r) => r.render_config(config, path, root, source),
        }
    }

    /// Render the CLI version.
    ///
    /// # Errors
    ///
    /// Returns an error if JSON serialization fails.
    pub fn render_version(&self, version: &str) -> Result<()> {
        match self {
            Self::Human(r) => {
                r.render_version(version);
                Ok(())
            }
            Self::Json(r) => r.render_version(version),
        }
    }
}
