pub mod parser;
pub mod widget;

pub use parser::{parse_sheet_rows, read_sheet_from_file};
pub use widget::ExcelImporter;
