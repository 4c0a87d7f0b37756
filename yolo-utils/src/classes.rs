use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReadClassesError {
    #[error("Class file not found: {}", .0.display())]
    NotFound(PathBuf),
    #[error("Error reading class file")]
    Io(#[from] io::Error),
}

/// Reads class names from a newline-delimited label file, one name per line
/// with surrounding whitespace stripped. File order is significant: class ids
/// produced by the model index into the returned list.
pub fn read_classes(path: impl AsRef<Path>) -> Result<Vec<String>, ReadClassesError> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path).map_err(|err| match err.kind() {
        io::ErrorKind::NotFound => ReadClassesError::NotFound(path.to_path_buf()),
        _ => ReadClassesError::Io(err),
    })?;
    Ok(contents
        .lines()
        .map(|line| line.trim().to_string())
        .collect())
}
