pub mod error;
pub mod file_header_record;
pub mod scan;
