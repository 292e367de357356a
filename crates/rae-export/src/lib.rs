#![deny(unsafe_code)]

pub mod csv_export;
pub mod error;
pub mod pdf_export;
pub mod records;

pub use csv_export::to_csv;
pub use error::{ExportError, Result};
pub use pdf_export::to_pdf;
pub use records::{AssignmentRecord, csv_file_name, flatten_assignments};
