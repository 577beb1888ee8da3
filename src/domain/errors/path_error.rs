use std::path::Path;

/// Raised when a scan path does not resolve inside the build directory.
///
/// Both paths are kept exactly as the caller gave them.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("Scan path {scanned_path} outside of build directory {build_path}")]
pub struct PathOutsideBuildPathError {
    scanned_path: String,
    build_path: String,
}

impl PathOutsideBuildPathError {
    #[must_use]
    pub fn new(scanned_path: impl Into<String>, build_path: impl Into<String>) -> Self {
        Self {
            scanned_path: scanned_path.into(),
            build_path: build_path.into(),
        }
    }

    #[must_use]
    pub fn from_paths(scanned_path: &Path, build_path: &Path) -> Self {
        Self::new(
            scanned_path.display().to_string(),
            build_path.display().to_string(),
        )
    }

    pub fn scanned_path(&self) -> &str {
        &self.scanned_path
    }

    pub fn build_path(&self) -> &str {
        &self.build_path
    }
}
