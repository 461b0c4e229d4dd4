// Spreadsheet file import

pub mod excel;

pub use excel::{import_bytes, import_file, Import, ImportError, ImportReport};
