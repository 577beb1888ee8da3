use crate::domain::entities::file_entry::FileEntry;
use crate::domain::entities::types::Bytes;
use serde_json::{Value, json};
use std::path::PathBuf;

/// Files collected from one or more scan paths under a build directory.
#[derive(Clone, Debug)]
pub struct ScanReport {
    pub build_path: PathBuf,
    pub scan_path: PathBuf,
    pub files: Vec<FileEntry>,
    pub total_size: Bytes,
}

impl ScanReport {
    #[must_use]
    pub fn new(build_path: PathBuf, scan_path: PathBuf, mut files: Vec<FileEntry>) -> Self {
        files.sort_by(|a, b| a.path.cmp(&b.path));
        files.dedup_by(|a, b| a.path == b.path);
        let total_size = files.iter().map(|f| f.size_bytes).sum();
        Self {
            build_path,
            scan_path,
            files,
            total_size,
        }
    }

    pub fn file_count(&self) -> usize {
        self.files.len()
    }

    pub fn to_json(&self) -> Value {
        let files: Vec<Value> = self
            .files
            .iter()
            .map(|f| json!({ "path": f.path, "size": f.size_bytes.as_u64() }))
            .collect();

        json!({
            "buildPath": self.build_path.to_string_lossy(),
            "scanPath": self.scan_path.to_string_lossy(),
            "totalSize": self.total_size.as_u64(),
            "files": files,
        })
    }
}
