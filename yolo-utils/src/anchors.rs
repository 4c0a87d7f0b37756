use std::fs;
use std::io;
use std::num::ParseFloatError;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::Anchor;

#[derive(Error, Debug)]
pub enum ReadAnchorsError {
    #[error("Anchor file not found: {}", .0.display())]
    NotFound(PathBuf),
    #[error("Error reading anchor file")]
    Io(#[from] io::Error),
    #[error("Invalid anchor value")]
    InvalidNumber(#[from] ParseFloatError),
    #[error("Anchor values cannot be paired: got {0} values")]
    OddCount(usize),
}

/// Reads anchor-box shapes from the first line of a comma-delimited file,
/// pairing consecutive values as (width, height) in file order.
pub fn read_anchors(path: impl AsRef<Path>) -> Result<Vec<Anchor>, ReadAnchorsError> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path).map_err(|err| match err.kind() {
        io::ErrorKind::NotFound => ReadAnchorsError::NotFound(path.to_path_buf()),
        _ => ReadAnchorsError::Io(err),
    })?;
    let line = contents.lines().next().unwrap_or("");
    let values = line
        .split(',')
        .map(|token| token.trim().parse::<f32>())
        .collect::<Result<Vec<_>, _>>()?;
    if values.len() % 2 != 0 {
        return Err(ReadAnchorsError::OddCount(values.len()));
    }
    Ok(values
        .chunks_exact(2)
        .map(|pair| Anchor {
            width: pair[0],
            height: pair[1],
        })
        .collect())
}
