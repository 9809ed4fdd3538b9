//! Small file system helpers shared by the record and archive steps

use std::fs;
use std::io::{self, Write};
use std::path::Path;
use tempfile::NamedTempFile;
use walkdir::WalkDir;

/// Names of the entries directly inside `dir`, sorted by name
///
/// Files and sub-directories are both listed; nothing below the first
/// level is visited.
pub fn list_entry_names(dir: &Path) -> io::Result<Vec<String>> {
    let mut names = Vec::new();
    for entry in WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
    {
        let entry = entry.map_err(io::Error::from)?;
        names.push(entry.file_name().to_string_lossy().into_owned());
    }
    Ok(names)
}

/// Write `content` through a temporary file in the same directory, then
/// rename it over `path`
pub fn write_atomic(path: &Path, content: &str) -> io::Result<()> {
    let parent_dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut temp_file = NamedTempFile::new_in(parent_dir)?;
    temp_file.write_all(content.as_bytes())?;
    temp_file.flush()?;

    temp_file.persist(path).map_err(|e| {
        io::Error::new(
            e.error.kind(),
            format!("failed to persist temporary file: {}", e.error),
        )
    })?;
    Ok(())
}

/// Read a whole file as UTF-8 text
pub fn read_to_string(path: &Path) -> io::Result<String> {
    fs::read_to_string(path)
}
