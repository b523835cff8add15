//! Output directory and file extension policy.
//!
//! All filesystem-path knowledge lives here; the template and card modules
//! operate purely in memory.

use std::ffi::OsString;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Directory that collects generated cards, relative to the working
/// directory.
pub const OUTPUT_DIR: &str = "output";

/// Resolves `file_name` into the output directory, creating it if missing.
pub fn resolve_output_path(file_name: &Path) -> io::Result<PathBuf> {
    resolve_in(Path::new(OUTPUT_DIR), file_name)
}

/// Absolute paths and paths already under `base` pass through untouched;
/// anything else lands inside `base`. `base` is created either way.
pub fn resolve_in(base: &Path, file_name: &Path) -> io::Result<PathBuf> {
    fs::create_dir_all(base)?;

    if file_name.is_absolute() || file_name.starts_with(base) {
        return Ok(file_name.to_path_buf());
    }

    Ok(base.join(file_name))
}

/// Appends `extension` unless the path already carries it. An existing
/// different extension is kept (`card.v2` becomes `card.v2.svg`).
pub fn ensure_extension(path: &Path, extension: &str) -> PathBuf {
    let already = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case(extension));
    if already {
        return path.to_path_buf();
    }

    let mut name = OsString::from(path);
    name.push(".");
    name.push(extension);
    PathBuf::from(name)
}

/// Derives an export path next to the card (`output/card.svg` ->
/// `output/card.pdf`).
pub fn sibling_with_extension(path: &Path, extension: &str) -> PathBuf {
    path.with_extension(extension)
}
