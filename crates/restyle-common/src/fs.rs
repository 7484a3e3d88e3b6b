//! File replacement helpers.

use std::fs;
use std::io::{self, Write};
use std::path::Path;

use tempfile::{Builder, NamedTempFile};

/// Replace the contents of `path` with `contents`, all or nothing.
///
/// The data is written to a temporary file in the destination directory,
/// flushed to disk, and renamed over `path`. If anything fails before the
/// rename, the temporary file is removed on drop and `path` is untouched.
///
/// An existing file keeps its permissions. A new file gets the mode a plain
/// create would give it (0666 minus the umask on Unix).
///
/// # Errors
///
/// Returns an I/O error if the temporary file cannot be created or written,
/// or if the final rename fails (for example when the destination directory
/// does not exist or is read-only).
pub fn write_atomic(path: &Path, contents: &str) -> io::Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut tmp = new_temp_file(dir)?;
    match fs::metadata(path) {
        Ok(existing) => tmp.as_file().set_permissions(existing.permissions())?,
        Err(err) if err.kind() == io::ErrorKind::NotFound => {}
        Err(err) => return Err(err),
    }

    tmp.write_all(contents.as_bytes())?;
    tmp.as_file().sync_all()?;
    tmp.persist(path).map(drop).map_err(|err| err.error)
}

/// Temp files default to 0600; ask for 0666 so the umask decides, as it
/// would for a regular create.
#[cfg(unix)]
fn new_temp_file(dir: &Path) -> io::Result<NamedTempFile> {
    use std::os::unix::fs::PermissionsExt;

    Builder::new()
        .permissions(fs::Permissions::from_mode(0o666))
        .tempfile_in(dir)
}

#[cfg(not(unix))]
fn new_temp_file(dir: &Path) -> io::Result<NamedTempFile> {
    Builder::new().tempfile_in(dir)
}
