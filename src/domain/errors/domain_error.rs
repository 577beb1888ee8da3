use crate::domain::errors::path_error::PathOutsideBuildPathError;
use crate::domain::errors::scanner_error::DirectoryScannerError;

#[derive(Debug, thiserror::Error)]
pub enum DomainError {
    #[error("Directory scan failed: {0}")]
    DirectoryScannerError(#[from] DirectoryScannerError),
}

impl DomainError {
    /// Returns the path error when the scan path escaped the build directory.
    #[must_use]
    pub const fn as_path_outside_build_path(&self) -> Option<&PathOutsideBuildPathError> {
        match self {
            Self::DirectoryScannerError(DirectoryScannerError::PathOutsideBuildPath(e)) => Some(e),
            Self::DirectoryScannerError(_) => None,
        }
    }
}

impl From<PathOutsideBuildPathError> for DomainError {
    fn from(e: PathOutsideBuildPathError) -> Self {
        Self::DirectoryScannerError(e.into())
    }
}
