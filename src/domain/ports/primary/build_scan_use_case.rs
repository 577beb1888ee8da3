use crate::domain::entities::scan_report::ScanReport;
use crate::domain::errors::domain_error::DomainError;
use std::path::{Path, PathBuf};

pub trait BuildScanUseCase: Send + Sync {
    fn check_path(&self, scan_path: &Path) -> Result<PathBuf, DomainError>;

    fn scan(&self, scan_path: &Path) -> Result<ScanReport, DomainError>;

    fn scan_all(&self, scan_paths: &[PathBuf]) -> Result<ScanReport, DomainError>;
}
