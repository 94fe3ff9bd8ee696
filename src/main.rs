//! xlsx2csv command-line tool
//!
//! Dumps the chosen sheets of an XLSX workbook as CSV files.

use clap::Parser;
use log::{error, warn};
use std::path::PathBuf;
use std::process;
use xlsx2csv::{
    default_pattern, ExportPlan, ExporterBuilder, SheetSelector, Workbook, XlsxToCsvError,
};

/// `-o` value that redirects output to standard output
const STDOUT_PATTERN: &str = "stdout";

const AFTER_HELP: &str = "\
Defaults:
- If -i is not given or is negative, all sheets are converted.
- If -o is not given, the output filename is derived from the input filename
  by replacing its extension with .csv
- If -o is \"stdout\", output is written to standard output
  (only the first sheet unless -i is given).
- If multiple sheets are converted, the sheet index is added to the output filename.
  If the output filename has a %d, it is replaced with the sheet index,
  if not, the index is added before the extension.
- If -d is not given, comma (,) is used as the delimiter

Examples:
- Convert all sheets in input.xlsx to CSV files named input.0.csv, input.1.csv, etc:
  > xlsx2csv input.xlsx
- Convert only the second sheet (index 1) to output.csv using semicolon as delimiter:
  > xlsx2csv -i 1 -o output.csv -d ';' input.xlsx
- Convert the first sheet to stdout:
  > xlsx2csv -o stdout input.xlsx";

#[derive(Parser, Debug)]
#[command(name = "xlsx2csv")]
#[command(
    version,
    about = "Dumps the given xlsx file's chosen sheet as a CSV,\nwith the specified delimiter, into the specified output.",
    after_help = AFTER_HELP
)]
struct Cli {
    /// XLSX file to be read
    input: PathBuf,

    /// Filename to output to ("stdout" for standard output)
    #[arg(short = 'o')]
    output: Option<String>,

    /// Index of sheet to convert, zero based (negative: all sheets)
    #[arg(short = 'i', default_value_t = -1, allow_negative_numbers = true)]
    index: i64,

    /// Delimiter to use between fields (only the first character is used;
    /// it must be a single-byte ASCII character other than '"', CR or LF)
    #[arg(short = 'd', default_value = ",")]
    delimiter: String,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // --help and --version are not usage errors
            let code = if e.use_stderr() { 1 } else { 0 };
            let _ = e.print();
            process::exit(code);
        }
    };

    if let Err(e) = run(&cli) {
        error!("{}", e);
        process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<(), XlsxToCsvError> {
    let delimiter = parse_delimiter(&cli.delimiter)?;
    let exporter = ExporterBuilder::new().with_delimiter(delimiter).build()?;

    let mut workbook = Workbook::open(&cli.input)?;

    let output = cli.output.as_deref().unwrap_or("");
    let pattern = resolve_pattern(output, &cli.input.to_string_lossy());
    let selector = resolve_selector(cli.index, &pattern);

    let plan = ExportPlan::new(&pattern, selector, workbook.sheet_count())?;
    exporter.export_plan(&mut workbook, &plan)
}

/// `-o` の値から出力パターンを決定する（空文字列は標準出力）
fn resolve_pattern(output: &str, input: &str) -> String {
    match output {
        "" => default_pattern(input),
        STDOUT_PATTERN => String::new(),
        pattern => pattern.to_string(),
    }
}

/// `-i` の値と出力パターンからシート選択を決定する
///
/// 標準出力にはシートを1つしか書き出せないため、全シート指定は先頭シートに置き換える。
fn resolve_selector(index: i64, pattern: &str) -> SheetSelector {
    match SheetSelector::from_signed(index) {
        SheetSelector::All if pattern.is_empty() => SheetSelector::Index(0),
        selector => selector,
    }
}

/// `-d` の値から区切り文字を取り出す
fn parse_delimiter(value: &str) -> Result<char, XlsxToCsvError> {
    let mut chars = value.chars();
    let delimiter = chars
        .next()
        .ok_or_else(|| XlsxToCsvError::Config("Delimiter must not be empty".to_string()))?;
    if chars.next().is_some() {
        warn!(
            "delimiter {:?} has more than one character, using {:?}",
            value, delimiter
        );
    }
    Ok(delimiter)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_pattern() {
        assert_eq!(resolve_pattern("", "data/book.xlsx"), "data/book.csv");
        assert_eq!(resolve_pattern("stdout", "book.xlsx"), "");
        assert_eq!(resolve_pattern("out_%d.csv", "book.xlsx"), "out_%d.csv");
    }

    #[test]
    fn test_resolve_selector() {
        // stdout without an index converts only the first sheet
        assert_eq!(resolve_selector(-1, ""), SheetSelector::Index(0));
        assert_eq!(resolve_selector(-7, ""), SheetSelector::Index(0));
        assert_eq!(resolve_selector(2, ""), SheetSelector::Index(2));
        assert_eq!(resolve_selector(-1, "book.csv"), SheetSelector::All);
        assert_eq!(resolve_selector(1, "book.csv"), SheetSelector::Index(1));
    }

    #[test]
    fn test_stdout_plan_writes_one_sheet() {
        let pattern = resolve_pattern("stdout", "book.xlsx");
        let plan = ExportPlan::new(&pattern, resolve_selector(-1, &pattern), 3).unwrap();

        assert_eq!(plan.len(), 1);
        let export = plan.iter().next().unwrap();
        assert_eq!(export.sheet_index, 0);
        assert_eq!(export.destination, xlsx2csv::Destination::Stdout);
    }

    #[test]
    fn test_non_ascii_delimiter_is_rejected_by_build() {
        let delimiter = parse_delimiter("§").unwrap();
        let result = ExporterBuilder::new().with_delimiter(delimiter).build();
        assert!(matches!(result, Err(XlsxToCsvError::Config(_))));
    }

    #[test]
    fn test_parse_delimiter() {
        assert_eq!(parse_delimiter(",").unwrap(), ',');
        assert_eq!(parse_delimiter(";;").unwrap(), ';');
        assert_eq!(parse_delimiter("\t").unwrap(), '\t');
        assert!(matches!(parse_delimiter(""), Err(XlsxToCsvError::Config(_))));
    }

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::try_parse_from(["xlsx2csv", "book.xlsx"]).unwrap();
        assert_eq!(cli.input, PathBuf::from("book.xlsx"));
        assert_eq!(cli.output, None);
        assert_eq!(cli.index, -1);
        assert_eq!(cli.delimiter, ",");
    }

    #[test]
    fn test_cli_flags() {
        let cli =
            Cli::try_parse_from(["xlsx2csv", "-i", "2", "-o", "out.csv", "-d", ";", "book.xlsx"])
                .unwrap();
        assert_eq!(cli.index, 2);
        assert_eq!(cli.output.as_deref(), Some("out.csv"));
        assert_eq!(cli.delimiter, ";");

        let cli = Cli::try_parse_from(["xlsx2csv", "-i", "-1", "book.xlsx"]).unwrap();
        assert_eq!(cli.index, -1);
    }

    #[test]
    fn test_cli_requires_exactly_one_input() {
        assert!(Cli::try_parse_from(["xlsx2csv"]).is_err());
        assert!(Cli::try_parse_from(["xlsx2csv", "a.xlsx", "b.xlsx"]).is_err());
    }
}
