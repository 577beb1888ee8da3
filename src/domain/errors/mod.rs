pub mod domain_error;
pub mod path_error;
pub mod scanner_error;
