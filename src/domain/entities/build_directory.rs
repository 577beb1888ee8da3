use crate::domain::errors::scanner_error::DirectoryScannerError;
use crate::domain::services::path_containment::normalize;
use std::path::{Path, PathBuf};

/// Root directory every scan path has to stay inside.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BuildDirectory {
    root: PathBuf,
}

impl BuildDirectory {
    /// Creates a build directory, resolving a relative path against the
    /// current working directory.
    ///
    /// The path is normalized lexically and does not need to exist yet.
    ///
    /// # Errors
    ///
    /// Returns a [`DirectoryScannerError`] if:
    /// - An [`Io`](DirectoryScannerError::Io) error occurs while reading the
    ///   current working directory.
    pub fn new(root: impl AsRef<Path>) -> Result<Self, DirectoryScannerError> {
        let absolute = std::path::absolute(root.as_ref())?;
        Ok(Self {
            root: normalize(&absolute),
        })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn last_folder_name(&self) -> String {
        self.root
            .file_name()
            .map(|f| f.to_string_lossy().into_owned())
            .unwrap_or_default()
    }
}
