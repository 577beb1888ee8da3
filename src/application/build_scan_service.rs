use crate::config::scan_options::ScanOptions;
use crate::domain::entities::build_directory::BuildDirectory;
use crate::domain::entities::scan_report::ScanReport;
use crate::domain::errors::domain_error::DomainError;
use crate::domain::ports::primary::build_scan_use_case::BuildScanUseCase;
use crate::domain::services::directory_scanner;
use crate::domain::services::path_containment::{
    ensure_all_within_build_path, ensure_within_build_path,
};
use std::path::{Path, PathBuf};
use tracing::{info, instrument};

/// Collects files from scan paths that must stay inside one build directory.
#[derive(Clone, Debug)]
pub struct BuildScanService {
    build: BuildDirectory,
    options: ScanOptions,
}

impl BuildScanService {
    #[must_use]
    pub const fn new(build: BuildDirectory, options: ScanOptions) -> Self {
        Self { build, options }
    }

    pub const fn build_directory(&self) -> &BuildDirectory {
        &self.build
    }
}

impl BuildScanUseCase for BuildScanService {
    /// Resolves a scan path against the build directory without scanning it.
    ///
    /// # Errors
    ///
    /// Returns a [`DomainError`] if:
    /// - The scan path resolves outside the build directory.
    fn check_path(&self, scan_path: &Path) -> Result<PathBuf, DomainError> {
        let resolved = ensure_within_build_path(scan_path, self.build.root())?;
        Ok(resolved)
    }

    /// Scans one directory and summarizes the files found.
    ///
    /// # Errors
    ///
    /// Returns a [`DomainError`] if:
    /// - A [`DirectoryScannerError`](DomainError::DirectoryScannerError) occurs during file system traversal.
    #[instrument(skip(self), fields(build = %self.build.root().display()))]
    fn scan(&self, scan_path: &Path) -> Result<ScanReport, DomainError> {
        let resolved = self.check_path(scan_path)?;
        let files = directory_scanner::walk_directory(&self.build, &resolved, &self.options)?;
        let report = ScanReport::new(self.build.root().to_path_buf(), resolved, files);

        info!(
            "Scanned {} files ({}) from {}",
            report.file_count(),
            report.total_size,
            report.scan_path.display()
        );
        Ok(report)
    }

    /// Scans several directories into a single report.
    ///
    /// Every scan path is checked before any directory is walked, and files
    /// reached through overlapping scan paths are listed once. The report's
    /// scan path is the build directory.
    ///
    /// # Errors
    ///
    /// Returns a [`DomainError`] if:
    /// - Any scan path resolves outside the build directory.
    /// - A [`DirectoryScannerError`](DomainError::DirectoryScannerError) occurs during file system traversal.
    #[instrument(skip_all, fields(build = %self.build.root().display(), paths = scan_paths.len()))]
    fn scan_all(&self, scan_paths: &[PathBuf]) -> Result<ScanReport, DomainError> {
        let directories = ensure_all_within_build_path(scan_paths, self.build.root())?;

        let mut files = Vec::new();
        for directory in &directories {
            files.extend(directory_scanner::walk_directory(
                &self.build,
                directory,
                &self.options,
            )?);
        }

        let report = ScanReport::new(
            self.build.root().to_path_buf(),
            self.build.root().to_path_buf(),
            files,
        );
        info!(
            "Scanned {} files ({}) from {} scan paths",
            report.file_count(),
            report.total_size,
            scan_paths.len()
        );
        Ok(report)
    }
}
