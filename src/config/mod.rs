pub mod constants;
pub mod scan_options;
