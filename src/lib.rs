mod error;
pub mod load;
pub mod memory;
pub mod port;
mod reading;
mod tokenize;

use std::fs;
use std::io;
use std::path::Path;
use std::result;

pub use crate::error::ProbeError;
pub use crate::reading::Reading;
pub use crate::tokenize::tokenize;

pub type Result<T> = result::Result<T, error::ProbeError>;

/// Whether `path` is not known to be absent.
///
/// Only a "not found" error from stat makes this return `false`. Any other
/// failure, such as permission denied on a parent directory, counts as the
/// path existing.
pub fn file_exists<P: AsRef<Path>>(path: P) -> bool {
    match fs::metadata(path) {
        Ok(_) => true,
        Err(ref e) if e.kind() == io::ErrorKind::NotFound => false,
        Err(_) => true,
    }
}

/// Open a kernel file, mapping an open failure to `None`.
///
/// The proc readers treat a file that cannot be opened as data the platform
/// does not provide, not as an error.
#[inline]
fn open_optional(path: &Path) -> Option<fs::File> {
    match fs::File::open(path) {
        Ok(file) => Some(file),
        Err(e) => {
            tracing::debug!(path = %path.display(), error = %e, "kernel source unavailable");
            None
        }
    }
}

#[inline]
fn path_to_string(path: &Path) -> String {
    path.to_string_lossy().to_string()
}
