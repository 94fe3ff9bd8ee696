//! Parser Module
//!
//! calamineを使用したワークブックの読み込みと、シート・行・セルの走査を提供します。

mod sheet;
mod workbook;

pub use sheet::{Cell, Row, Rows, Sheet};
pub use workbook::Workbook;
pub(crate) use workbook::check_sheet_index;
