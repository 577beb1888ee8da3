pub mod build_directory;
pub mod file_entry;
pub mod scan_report;
pub mod types;
