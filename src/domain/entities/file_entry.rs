use crate::domain::entities::types::Bytes;
use std::path::Path;

/// A regular file found under the build directory.
///
/// `path` is relative to the build directory root.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FileEntry {
    pub path: String,
    pub size_bytes: Bytes,
}

impl FileEntry {
    pub fn parent_directory(&self) -> String {
        Path::new(&self.path)
            .parent()
            .map(|p| p.to_string_lossy().into_owned())
            .unwrap_or_default()
    }

    pub fn filename(&self) -> String {
        Path::new(&self.path)
            .file_name()
            .map(|f| f.to_string_lossy().into_owned())
            .unwrap_or_default()
    }
}
