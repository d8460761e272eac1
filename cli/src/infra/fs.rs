//! Filesystem infrastructure: implements `ProjectFs` over `std::fs`.

use std::io;
use std::path::Path;

use crate::application::ports::ProjectFs;

/// Production filesystem implementation of `ProjectFs`.
///
/// Blocking calls, no locking; concurrent runs against one root are
/// last-writer-wins per file.
#[derive(Debug, Default, Clone, Copy)]
pub struct LocalFs;

impl ProjectFs for LocalFs {
    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }

    fn exists(&self, path: &Path) -> bool {
        path.symlink_metadata().is_ok()
    }

    fn create_dir_all(&self, path: &Path) -> io::Result<()> {
        std::fs::create_dir_all(path)
    }

    fn read(&self, path: &Path) -> io::Result<Vec<u8>> {
        std::fs::read(path)
    }

    fn write(&self, path: &Path, content: &[u8]) -> io::Result<()> {
        std::fs::write(path, content)
    }
}
