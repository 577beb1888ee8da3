//! Build directory scanning for RPM packaging.
//!
//! Scan paths are resolved against a build directory and rejected with a
//! [`PathOutsideBuildPathError`] when they escape it. Paths that pass are
//! walked into a [`ScanReport`] listing the files found.

pub mod application;
pub mod config;
pub mod domain;

pub use application::build_scan_service::BuildScanService;
pub use config::scan_options::ScanOptions;
pub use domain::entities::build_directory::BuildDirectory;
pub use domain::entities::scan_report::ScanReport;
pub use domain::errors::domain_error::DomainError;
pub use domain::errors::path_error::PathOutsideBuildPathError;
pub use domain::errors::scanner_error::DirectoryScannerError;
