//! Readability checks and small read helpers.

use penknife_core::{Error, Result};
use std::fs::{self, File};
use std::io::{BufRead, BufReader};
use std::path::Path;

/// True iff `path` exists and is readable: a file that can be opened
/// for reading, or a directory that can be listed. Never errors.
pub fn file_readable(path: &Path) -> bool {
    match fs::metadata(path) {
        Ok(meta) if meta.is_dir() => fs::read_dir(path).is_ok(),
        Ok(_) => File::open(path).is_ok(),
        Err(_) => false,
    }
}

/// Read the entire file into a string.
pub fn read(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| Error::file_system(path.to_path_buf(), "read", e))
}

/// Visit the file line by line (without terminators) until `action`
/// returns `false` or the file is exhausted.
pub fn each_line<F>(path: &Path, mut action: F) -> Result<()>
where
    F: FnMut(&str) -> bool,
{
    let file =
        File::open(path).map_err(|e| Error::file_system(path.to_path_buf(), "open", e))?;
    for line in BufReader::new(file).lines() {
        let line = line.map_err(|e| Error::file_system(path.to_path_buf(), "read line", e))?;
        if !action(&line) {
            break;
        }
    }
    Ok(())
}
