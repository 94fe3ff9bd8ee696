//! xlsx2csv - Dump the sheets of an XLSX workbook as CSV
//!
//! This crate converts each worksheet of an XLSX workbook into a CSV file
//! (or standard output), with a configurable field delimiter and an output
//! file name pattern.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use xlsx2csv::{Destination, ExporterBuilder, Workbook};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Create an exporter with default settings
//!     let exporter = ExporterBuilder::new().build()?;
//!
//!     // Open the workbook once, then export its first sheet
//!     let mut workbook = Workbook::open("example.xlsx")?;
//!     exporter.export_sheet(&mut workbook, 0, &Destination::from_name("example.csv"))?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Exporting Every Sheet
//!
//! An [`ExportPlan`] resolves the sheets to export and their file names from
//! a pattern. A `%d` in the pattern is replaced by the sheet index; without
//! one, the index is inserted before the extension.
//!
//! ```rust,no_run
//! use xlsx2csv::{ExportPlan, ExporterBuilder, SheetSelector, Workbook};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let exporter = ExporterBuilder::new().with_delimiter(';').build()?;
//!     let mut workbook = Workbook::open("report.xlsx")?;
//!
//!     // report.0.csv, report.1.csv, ...
//!     let plan = ExportPlan::new("report.csv", SheetSelector::All, workbook.sheet_count())?;
//!     exporter.export_plan(&mut workbook, &plan)?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # In-Memory Conversion
//!
//! ```rust,no_run
//! use std::io::Cursor;
//! use xlsx2csv::{ExporterBuilder, Workbook};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let excel_data: Vec<u8> = vec![]; // Your Excel file bytes
//! let mut workbook = Workbook::from_reader(Cursor::new(excel_data))?;
//! let mut csv_output = Vec::new();
//! ExporterBuilder::new()
//!     .build()?
//!     .export_to_writer(&mut workbook, 0, &mut csv_output)?;
//! # Ok(())
//! # }
//! ```

mod api;
mod builder;
mod error;
mod formatter;
mod naming;
mod output;
mod parser;
mod plan;
mod types;

// 公開API
pub use api::{DateFormat, Destination, SheetSelector};
pub use builder::{ExporterBuilder, SheetExporter};
pub use error::XlsxToCsvError;
pub use naming::{default_pattern, derive_name};
pub use parser::{Cell, Row, Rows, Sheet, Workbook};
pub use plan::{ExportPlan, PlannedExport};
pub use types::CellCoord;
