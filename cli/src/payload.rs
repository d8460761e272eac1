//! Embedded payload: the project bootstrap files compiled into the binary.
//!
//! At compile time, `include_dir!` embeds everything under `payload/`:
//!   - `lib/supabaseClient.ts` - auth/data client setup
//!   - `app/layout.tsx`        - root layout importing the global stylesheet
//!   - `app/globals.css`       - Tailwind layers and theme variables
//!   - `tailwind.config.ts`    - content globs and font family
//!   - `postcss.config.mjs`    - PostCSS plugin list
//!
//! Contents are passed through byte-for-byte; nothing here parses them.

use anyhow::Result;
use include_dir::{Dir, include_dir};

use crate::domain::manifest::ContentMap;

static EMBEDDED_PAYLOAD: Dir<'_> = include_dir!("$CARGO_MANIFEST_DIR/payload");

/// Application order of the embedded files.
pub const PAYLOAD_ORDER: &[&str] = &[
    "lib/supabaseClient.ts",
    "app/layout.tsx",
    "app/globals.css",
    "tailwind.config.ts",
    "postcss.config.mjs",
];

/// Directories the project layout needs even before any file lands in them.
pub const REQUIRED_DIRS: &[&str] = &["app/login", "app/vendor", "app/admin", "lib"];

/// Build the content map for the embedded payload, in [`PAYLOAD_ORDER`].
///
/// # Errors
///
/// Returns an error if a listed file is missing from the embedded directory.
pub fn content_map() -> Result<ContentMap> {
    let mut map = ContentMap::new();
    for name in PAYLOAD_ORDER {
        map.insert(*name, get_file(name)?)?;
    }
    Ok(map)
}

/// Return the raw bytes of a single embedded file.
///
/// # Errors
///
/// Returns an error if no file with the given `name` exists.
pub fn get_file(name: &str) -> Result<&'static [u8]> {
    EMBEDDED_PAYLOAD
        .get_file(name)
        .map(|f| f.contents())
        .ok_or_else(|| anyhow::anyhow!("embedded payload file not found: {name}"))
}

/// Relative paths of every embedded file, in directory-walk order.
#[must_use]
pub fn embedded_paths() -> Vec<String> {
    fn walk(dir: &Dir<'_>, out: &mut Vec<String>) {
        for file in dir.files() {
            out.push(file.path().to_string_lossy().replace('\\', "/"));
        }
        for sub in dir.dirs() {
            walk(sub, out);
        }
    }
    let mut out = Vec::new();
    walk(&EMBEDDED_PAYLOAD, &mut out);
    out
}
