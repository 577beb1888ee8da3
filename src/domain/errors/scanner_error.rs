use crate::domain::errors::path_error::PathOutsideBuildPathError;
use std::io;
use std::path::{PathBuf, StripPrefixError};

#[derive(Debug, thiserror::Error)]
pub enum DirectoryScannerError {
    #[error(transparent)]
    PathOutsideBuildPath(#[from] PathOutsideBuildPathError),
    #[error("Relative path error: {0}")]
    RelativePath(#[from] StripPrefixError),
    #[error("File metadata error: {0}")]
    FileMetadata(#[from] jwalk::Error),
    #[error("Cannot canonicalize path {}: {source}", path.display())]
    Canonicalize { path: PathBuf, source: io::Error },
    #[error("Scan path {} is not a directory", .0.display())]
    NotADirectory(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}
