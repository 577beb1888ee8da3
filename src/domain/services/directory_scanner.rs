use crate::config::scan_options::ScanOptions;
use crate::domain::entities::build_directory::BuildDirectory;
use crate::domain::entities::file_entry::FileEntry;
use crate::domain::entities::types::Bytes;
use crate::domain::errors::scanner_error::DirectoryScannerError;
use crate::domain::services::path_containment::{
    ensure_canonical_within_build_path, ensure_within_build_path,
};
use jwalk::{DirEntry, WalkDir};
use std::path::Path;
use tracing::{debug, warn};

/// Recursively scans a directory inside the build directory and returns a
/// list of [`FileEntry`] values with paths relative to the build root.
///
/// Uses [`jwalk`](https://docs.rs/jwalk) to traverse all subdirectories,
/// filtering out directories and keeping only files. Entries that cannot be
/// read during the walk are logged and skipped.
///
/// # Errors
///
/// Returns a [`DirectoryScannerError`] if:
/// - A [`PathOutsideBuildPath`](DirectoryScannerError::PathOutsideBuildPath)
///   error occurs when the scan path, a symlink on the way to it, or a
///   followed symlink below it resolves outside the build directory.
/// - A [`NotADirectory`](DirectoryScannerError::NotADirectory) error occurs
///   when the scan path is missing or not a directory.
/// - A [`RelativePath`](DirectoryScannerError::RelativePath) error occurs when
///   stripping the build directory prefix from a file path.
/// - A [`FileMetadata`](DirectoryScannerError::FileMetadata) error occurs when retrieving
///   file metadata (e.g., file size).
pub fn scan_directory(
    build: &BuildDirectory,
    scan_path: &Path,
    options: &ScanOptions,
) -> Result<Vec<FileEntry>, DirectoryScannerError> {
    let directory = ensure_within_build_path(scan_path, build.root())?;
    walk_directory(build, &directory, options)
}

/// Walks a scan path already resolved by [`ensure_within_build_path`].
///
/// The directory itself is re-checked on disk, so a symlinked scan root
/// pointing outside the build directory is refused even when links are not
/// followed below it.
pub(crate) fn walk_directory(
    build: &BuildDirectory,
    directory: &Path,
    options: &ScanOptions,
) -> Result<Vec<FileEntry>, DirectoryScannerError> {
    if !directory.is_dir() {
        return Err(DirectoryScannerError::NotADirectory(directory.to_path_buf()));
    }
    ensure_canonical_within_build_path(directory, build.root())?;

    debug!("Scanning {} with {:?}", directory.display(), options);

    let mut walker = WalkDir::new(directory)
        .skip_hidden(options.skip_hidden)
        .follow_links(options.follow_links);
    if let Some(max_depth) = options.max_depth {
        walker = walker.max_depth(max_depth);
    }

    let mut files = walker
        .into_iter()
        .filter_map(|entry| {
            entry
                .inspect_err(|e| warn!("Skipping unreadable entry: {e}"))
                .ok()
        })
        .filter(|e| e.file_type().is_file())
        .map(|e| extract_file_info(build.root(), &e, options))
        .collect::<Result<Vec<_>, _>>()?;

    files.sort_by(|a, b| a.path.cmp(&b.path));
    debug!("Found {} files under {}", files.len(), directory.display());
    Ok(files)
}

fn extract_file_info(
    build_root: &Path,
    entry: &DirEntry<((), ())>,
    options: &ScanOptions,
) -> Result<FileEntry, DirectoryScannerError> {
    let path = entry.path();
    if options.follow_links {
        ensure_canonical_within_build_path(&path, build_root)?;
    }

    let metadata = entry.metadata()?;
    Ok(FileEntry {
        path: relative_path(build_root, &path)?,
        size_bytes: Bytes(metadata.len()),
    })
}

fn relative_path(build_root: &Path, file_path: &Path) -> Result<String, DirectoryScannerError> {
    let relative_path = file_path
        .strip_prefix(build_root)
        .map(|p| p.to_string_lossy().into_owned())?;
    Ok(relative_path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn build_tree() -> (TempDir, BuildDirectory) {
        let temp_dir = tempfile::Builder::new().prefix("rpmbuild").tempdir().unwrap();
        let root = temp_dir.path();
        fs::create_dir_all(root.join("usr/bin")).unwrap();
        fs::create_dir_all(root.join("etc")).unwrap();
        fs::write(root.join("usr/bin/tool"), b"#!/bin/sh\n").unwrap();
        fs::write(root.join("usr/.hidden"), b"x").unwrap();
        fs::write(root.join("etc/tool.conf"), b"key=value").unwrap();
        let build = BuildDirectory::new(root).unwrap();
        (temp_dir, build)
    }

    #[test]
    fn lists_files_relative_to_build_root() {
        let (_temp_dir, build) = build_tree();

        let files = scan_directory(&build, Path::new("usr"), &ScanOptions::default()).unwrap();

        let paths: Vec<_> = files.iter().map(|f| f.path.as_str()).collect();
        assert_eq!(
            paths,
            vec![
                Path::new("usr").join(".hidden").to_string_lossy(),
                Path::new("usr").join("bin").join("tool").to_string_lossy(),
            ]
        );
        assert_eq!(files[1].size_bytes, Bytes(10));
    }

    #[test]
    fn skips_hidden_files_when_asked() {
        let (_temp_dir, build) = build_tree();
        let options = ScanOptions::default().with_skip_hidden(true);

        let files = scan_directory(&build, Path::new("."), &options).unwrap();

        assert_eq!(files.len(), 2);
        assert!(files.iter().all(|f| !f.filename().starts_with('.')));
    }

    #[test]
    fn respects_max_depth() {
        let (_temp_dir, build) = build_tree();
        let options = ScanOptions::default().with_max_depth(1);

        let files = scan_directory(&build, Path::new("usr"), &options).unwrap();

        assert_eq!(files.len(), 1);
        assert_eq!(files[0].filename(), ".hidden");
    }

    #[test]
    fn rejects_scan_path_outside_build_directory() {
        let (_temp_dir, build) = build_tree();

        let error =
            scan_directory(&build, Path::new("../elsewhere"), &ScanOptions::default()).unwrap_err();

        assert_eq!(
            error.to_string(),
            format!(
                "Scan path ../elsewhere outside of build directory {}",
                build.root().display()
            )
        );
    }

    #[test]
    fn rejects_missing_directory() {
        let (_temp_dir, build) = build_tree();

        let error =
            scan_directory(&build, Path::new("missing"), &ScanOptions::default()).unwrap_err();

        assert!(matches!(error, DirectoryScannerError::NotADirectory(_)));
    }

    #[cfg(unix)]
    #[test]
    fn followed_symlink_escaping_build_directory_fails() {
        let (_temp_dir, build) = build_tree();
        let outside = TempDir::new().unwrap();
        fs::write(outside.path().join("secret"), b"s").unwrap();
        std::os::unix::fs::symlink(outside.path(), build.root().join("usr/link")).unwrap();

        let ignored = scan_directory(&build, Path::new("usr"), &ScanOptions::default()).unwrap();
        assert_eq!(ignored.len(), 2);

        let options = ScanOptions::default().with_follow_links(true);
        let error = scan_directory(&build, Path::new("usr"), &options).unwrap_err();
        assert!(matches!(error, DirectoryScannerError::PathOutsideBuildPath(_)));
    }

    #[cfg(unix)]
    #[test]
    fn symlinked_scan_root_escaping_build_directory_fails_without_following_links() {
        let (_temp_dir, build) = build_tree();
        let outside = TempDir::new().unwrap();
        fs::write(outside.path().join("secret"), b"s").unwrap();
        std::os::unix::fs::symlink(outside.path(), build.root().join("link")).unwrap();

        let error = scan_directory(&build, Path::new("link"), &ScanOptions::default()).unwrap_err();

        assert!(matches!(
            error,
            DirectoryScannerError::PathOutsideBuildPath(ref e)
                if e.scanned_path() == build.root().join("link").display().to_string()
        ));
    }

    #[cfg(unix)]
    #[test]
    fn symlinked_scan_root_inside_build_directory_is_walked() {
        let (_temp_dir, build) = build_tree();
        std::os::unix::fs::symlink(build.root().join("etc"), build.root().join("config")).unwrap();

        let files = scan_directory(&build, Path::new("config"), &ScanOptions::default()).unwrap();

        assert_eq!(files.len(), 1);
        assert_eq!(files[0].path, Path::new("config").join("tool.conf").to_string_lossy());
    }
}
