use crate::domain::errors::path_error::PathOutsideBuildPathError;
use crate::domain::errors::scanner_error::DirectoryScannerError;
use rayon::prelude::*;
use std::path::{Component, Path, PathBuf};
use tracing::{debug, warn};

/// Lexically normalizes a path without touching the file system.
///
/// `.` components are dropped and `..` removes the preceding normal
/// component. A `..` never climbs above the root of an absolute path; on a
/// relative path with nothing left to remove it is kept.
pub fn normalize(path: &Path) -> PathBuf {
    let mut normalized = PathBuf::new();

    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match normalized.components().next_back() {
                Some(Component::Normal(_)) => {
                    normalized.pop();
                }
                Some(Component::RootDir | Component::Prefix(_)) => {}
                _ => normalized.push(component),
            },
            Component::Prefix(_) | Component::RootDir | Component::Normal(_) => {
                normalized.push(component);
            }
        }
    }

    normalized
}

/// Checks that `scan_path` resolves inside `build_path` and returns the
/// normalized scan path.
///
/// A relative scan path is taken relative to the build path. The build path
/// itself counts as inside. Comparison is component-wise, so `/build-other`
/// is not inside `/build`. A relative build path such as `.` or `""` only
/// contains relative paths that stay below it.
///
/// # Errors
///
/// Returns a [`PathOutsideBuildPathError`] carrying both arguments as given
/// when the scan path escapes the build path.
pub fn ensure_within_build_path(
    scan_path: &Path,
    build_path: &Path,
) -> Result<PathBuf, PathOutsideBuildPathError> {
    let build_root = normalize(build_path);
    let resolved = normalize(&build_path.join(scan_path));

    if is_within(&resolved, &build_root) {
        debug!("Scan path {} resolved to {}", scan_path.display(), resolved.display());
        Ok(resolved)
    } else {
        let error = PathOutsideBuildPathError::from_paths(scan_path, build_path);
        warn!("{error}");
        Err(error)
    }
}

/// Checks many scan paths in parallel.
///
/// Results keep the input order; on failure the error of the first
/// offending path in input order is returned.
///
/// # Errors
///
/// Returns a [`PathOutsideBuildPathError`] for the first scan path outside
/// the build path.
pub fn ensure_all_within_build_path<P>(
    scan_paths: &[P],
    build_path: &Path,
) -> Result<Vec<PathBuf>, PathOutsideBuildPathError>
where
    P: AsRef<Path> + Sync,
{
    scan_paths
        .par_iter()
        .map(|p| ensure_within_build_path(p.as_ref(), build_path))
        .collect::<Vec<_>>()
        .into_iter()
        .collect()
}

/// Checks containment on existing paths after resolving symlinks.
///
/// # Errors
///
/// Returns a [`DirectoryScannerError`] if:
/// - A [`Canonicalize`](DirectoryScannerError::Canonicalize) error occurs when
///   either path cannot be resolved.
/// - A [`PathOutsideBuildPath`](DirectoryScannerError::PathOutsideBuildPath)
///   error occurs when the resolved scan path is outside the resolved build path.
pub fn ensure_canonical_within_build_path(
    scan_path: &Path,
    build_path: &Path,
) -> Result<PathBuf, DirectoryScannerError> {
    let canonical_build = canonicalize(build_path)?;
    let canonical_scan = canonicalize(&build_path.join(scan_path))?;

    if is_within(&canonical_scan, &canonical_build) {
        Ok(canonical_scan)
    } else {
        let error = PathOutsideBuildPathError::from_paths(scan_path, build_path);
        warn!("{error} (resolves to {})", canonical_scan.display());
        Err(error.into())
    }
}

/// Both paths must already be normalized. Whatever is left after the root
/// has to be plain names; a leftover `..`, root or prefix means the path
/// climbed out or never shared the root (an empty root prefixes everything).
fn is_within(resolved: &Path, root: &Path) -> bool {
    resolved
        .strip_prefix(root)
        .is_ok_and(|rest| rest.components().all(|c| matches!(c, Component::Normal(_))))
}

fn canonicalize(path: &Path) -> Result<PathBuf, DirectoryScannerError> {
    path.canonicalize()
        .map_err(|source| DirectoryScannerError::Canonicalize {
            path: path.to_path_buf(),
            source,
        })
}
