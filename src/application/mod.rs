pub mod build_scan_service;
