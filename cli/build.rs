/// Fail early if `payload/` is missing and re-embed it whenever it changes.
///
/// `include_dir!()` does not track the files it embeds, so without the
/// `rerun-if-changed` line an edited payload would ship stale bytes.
use std::path::PathBuf;

fn main() {
    let payload: PathBuf = [env!("CARGO_MANIFEST_DIR"), "payload"].iter().collect();

    assert!(
        payload.is_dir(),
        "payload directory missing: {}",
        payload.display()
    );

    println!("cargo::rerun-if-changed=payload");
}
