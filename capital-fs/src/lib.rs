//! Capability-based file access for country data files.
//!
//! Paths are UTF-8 ([`camino`]) and every open goes through `cap-std` with
//! ambient authority, so callers never touch `std::fs` directly.
#![forbid(unsafe_code)]

use camino::Utf8Path;
use cap_std::{ambient_authority, fs_utf8};
use std::io;

/// Open a data file for reading.
///
/// # Errors
/// Returns the underlying I/O error when the file cannot be opened.
pub fn open_utf8_file(path: &Utf8Path) -> io::Result<fs_utf8::File> {
    fs_utf8::File::open_ambient(path, ambient_authority())
}

/// Open the directory containing `path` and return it with the file name.
///
/// A bare file name resolves against the current directory.
///
/// # Errors
/// Fails when `path` has no file name or its directory cannot be opened.
pub fn open_parent_dir(path: &Utf8Path) -> io::Result<(fs_utf8::Dir, String)> {
    let file_name = path
        .file_name()
        .ok_or_else(|| io::Error::other(format!("{path} does not name a file")))?
        .to_owned();
    let parent = path
        .parent()
        .filter(|parent| !parent.as_str().is_empty())
        .unwrap_or_else(|| Utf8Path::new("."));
    let dir = fs_utf8::Dir::open_ambient_dir(parent, ambient_authority())?;
    Ok((dir, file_name))
}

/// Report whether `path` names an existing regular file.
///
/// Missing files and missing parent directories yield `Ok(false)`.
///
/// # Errors
/// Returns any I/O error other than "not found" raised while inspecting the
/// path.
pub fn is_regular_file(path: &Utf8Path) -> io::Result<bool> {
    let lookup = open_parent_dir(path).and_then(|(dir, name)| dir.metadata(name.as_str()));
    match lookup {
        Ok(metadata) => Ok(metadata.is_file()),
        Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(false),
        Err(err) => Err(err),
    }
}
