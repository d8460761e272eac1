//! Human-readable terminal renderer.

use std::path::Path;

use owo_colors::OwoColorize as _;

use crate::domain::{ContentMap, RootSource, ScaffoldConfig, WriteOutcome, WriteReport};
use crate::output::OutputContext;

/// Renders domain types as human-readable terminal output using `OutputContext`.
pub struct HumanRenderer<'a> {
    ctx: &'a OutputContext,
}

impl<'a> HumanRenderer<'a> {
    /// Create a new `HumanRenderer` wrapping the given output context.
    #[must_use]
    pub fn new(ctx: &'a OutputContext) -> Self {
        Self { ctx }
    }

    /// Render the CLI version information.
    pub fn render_version(&self, version: &str) {
        if self.ctx.quiet {
            return;
        }
        println!("scaffold {version}");
    }

    /// Render the confirmation line, then one line per written path.
    pub fn render_report(&self, root: &Path, report: &WriteReport) {
        if self.ctx.quiet {
            return;
        }
        self.ctx.header(&confirmation_line(root, report));
        for line in report_lines(report) {
            println!("{line}");
        }
        if !report.is_empty() {
            self.ctx.info(&outcome_summary(report));
        }
    }

    /// Render the files that landed (or would land) before an aborted run.
    pub fn render_partial(&self, report: &WriteReport, total: usize) {
        if self.ctx.quiet {
            return;
        }
        self.ctx.warn(&partial_line(report, total));
        for line in report_lines(report) {
            println!("{line}");
        }
    }

    /// Render the embedded entries with their sizes.
    pub fn render_entries(&self, map: &ContentMap) {
        for entry in map {
            println!(
                "{:<28} {}",
                entry.path.as_str(),
                format!("{} bytes", entry.content.len()).style(self.ctx.styles.dim)
            );
        }
    }

    /// Render the current scaffold configuration.
    pub fn render_config(
        &self,
        config: &ScaffoldConfig,
        path: &Path,
        root: &Path,
        source: RootSource,
    ) {
        println!();
        println!(
            "  {}",
            format!("Configuration ({})", path.display()).style(self.ctx.styles.header)
        );
        println!();
        println!(
            "  {:<20} {}",
            "root:",
            config
                .root
                .as_ref()
                .map_or_else(|| "(not set)".to_string(), |r| r.display().to_string())
        );
        println!(
            "  {:<20} {} {}",
            "effective root:",
            root.display(),
            format!("(from {})", source.label()).style(self.ctx.styles.dim)
        );
        println!();
        println!("  {}", "Environment:".style(self.ctx.styles.bold));
        for var in ["SCAFFOLD_CONFIG", "SCAFFOLD_ROOT", "NO_COLOR"] {
            println!(
                "    {:<18} {}",
                format!("{var}:"),
                std::env::var(var).unwrap_or_else(|_| "(not set)".to_string())
            );
        }
        println!();
    }
}

/// First line of the report.
#[must_use]
pub fn confirmation_line(root: &Path, report: &WriteReport) -> String {
    if report.dry_run {
        format!(
            "Dry run: would write {} files under {}:",
            report.len(),
            root.display()
        )
    } else {
        format!("OK: wrote {} files under {}:", report.len(), root.display())
    }
}

/// Heading for the entries that precede a failure.
#[must_use]
pub fn partial_line(report: &WriteReport, total: usize) -> String {
    if report.dry_run {
        format!(
            "Dry run: would write {} of {total} files before the failure:",
            report.len()
        )
    } else {
        format!("Wrote {} of {total} files before the failure:", report.len())
    }
}

/// One ` - path` line per entry; dry runs append the predicted outcome.
#[must_use]
pub fn report_lines(report: &WriteReport) -> Vec<String> {
    report
        .written
        .iter()
        .map(|f| {
            if report.dry_run {
                format!(" - {} ({})", f.path, f.outcome.as_str())
            } else {
                format!(" - {}", f.path)
            }
        })
        .collect()
}

/// e.g. `"2 created, 1 overwritten, 2 unchanged"`.
#[must_use]
pub fn outcome_summary(report: &WriteReport) -> String {
    [
        WriteOutcome::Created,
        WriteOutcome::Overwritten,
        WriteOutcome::Unchanged,
    ]
    .iter()
    .map(|o| format!("{} {}", report.count(*o), o.as_str()))
    .collect::<Vec<_>>()
    .join(", ")
}
