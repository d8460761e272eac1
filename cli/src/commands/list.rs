//! `scaffold list` - show the embedded files in application order.

use anyhow::Result;

use crate::app::AppContext;
use crate::payload;

/// Run the list command.
///
/// # Errors
///
/// Returns an error if the embedded payload is incomplete or rendering fails.
pub fn run(app: &AppContext) -> Result<()> {
    let map = payload::content_map()?;
    app.renderer().render_entries(&map)
}
