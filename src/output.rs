use std::fs;
use std::path::Path;

use crate::error::Error;

/// Writes the generated code to `path` with a single trailing newline,
/// creating or truncating the file. Permissions are the platform
/// defaults for a fresh file (0644 under the usual umask).
pub fn write_code(path: &Path, code: &str) -> Result<(), Error> {
    fs::write(path, format!("{}\n", code)).map_err(|source| Error::WriteFile {
        path: path.to_path_buf(),
        source,
    })
}
