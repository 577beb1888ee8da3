pub mod directory_scanner;
pub mod path_containment;
