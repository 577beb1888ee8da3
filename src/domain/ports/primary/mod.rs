pub mod build_scan_use_case;
