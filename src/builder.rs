//! Builder Module
//!
//! Fluent Builder APIを提供し、`SheetExporter`インスタンスを段階的に構築する。

use log::{debug, info, trace};
use std::io::{Read, Seek, Write};

use crate::api::{DateFormat, Destination};
use crate::error::XlsxToCsvError;
use crate::formatter::{validate_date_format, CellFormatter};
use crate::output::{OutputSink, RecordWriter};
use crate::parser::{check_sheet_index, Sheet, Workbook};
use crate::plan::ExportPlan;

/// エクスポート処理の設定を保持する内部構造体
#[derive(Debug, Clone)]
pub(crate) struct ExportConfig {
    /// フィールドの区切り文字
    pub delimiter: char,

    /// 日付形式
    pub date_format: DateFormat,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            delimiter: ',',
            date_format: DateFormat::Iso8601,
        }
    }
}

/// Fluent Builder APIを提供する構造体
///
/// すべての設定項目にデフォルト値が設定されており、必要な設定のみをオーバーライドできます。
///
/// # 使用例
///
/// ```rust,no_run
/// use xlsx2csv::ExporterBuilder;
///
/// # fn main() -> Result<(), xlsx2csv::XlsxToCsvError> {
/// let exporter = ExporterBuilder::new()
///     .with_delimiter(';')
///     .build()?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Default)]
pub struct ExporterBuilder {
    /// 内部設定（構築中）
    config: ExportConfig,
}

impl ExporterBuilder {
    /// デフォルト設定を持つビルダーインスタンスを生成する
    ///
    /// # デフォルト設定
    ///
    /// - 区切り文字: `,`
    /// - 日付形式: ISO 8601
    pub fn new() -> Self {
        Self {
            config: ExportConfig::default(),
        }
    }

    /// フィールドの区切り文字を指定する
    ///
    /// 1バイトのASCII文字で、`"`・CR・LF以外である必要があります。
    /// 制約違反の場合、`build()`時に`XlsxToCsvError::Config`を返します。
    pub fn with_delimiter(mut self, delimiter: char) -> Self {
        self.config.delimiter = delimiter;
        self
    }

    /// 日付の出力形式を指定する
    ///
    /// ```rust,no_run
    /// use xlsx2csv::{DateFormat, ExporterBuilder};
    ///
    /// let builder = ExporterBuilder::new()
    ///     .with_date_format(DateFormat::Custom("%Y/%m/%d".to_string()));
    /// ```
    pub fn with_date_format(mut self, format: DateFormat) -> Self {
        self.config.date_format = format;
        self
    }

    /// 設定を検証し、`SheetExporter`インスタンスを生成する
    ///
    /// # 発生し得るエラー
    ///
    /// * `XlsxToCsvError::Config(String)`: 設定の検証に失敗した場合
    ///   * 区切り文字が1バイトのASCII文字でない、または`"`・CR・LF
    ///   * カスタム日付形式が不正な書式文字列
    pub fn build(self) -> Result<SheetExporter, XlsxToCsvError> {
        // 1. 区切り文字の検証
        let delimiter = self.config.delimiter;
        if !delimiter.is_ascii() {
            return Err(XlsxToCsvError::Config(format!(
                "Invalid delimiter {:?}: must be a single-byte ASCII character",
                delimiter
            )));
        }
        if matches!(delimiter, '"' | '\r' | '\n') {
            return Err(XlsxToCsvError::Config(format!(
                "Invalid delimiter {:?}: quote and line break characters are reserved",
                delimiter
            )));
        }

        // 2. カスタム日付形式の検証
        if let DateFormat::Custom(ref format_str) = self.config.date_format {
            validate_date_format(format_str)?;
        }

        Ok(SheetExporter::new(self.config))
    }
}

/// シートをCSVに書き出すエクスポーター
///
/// # 使用例
///
/// ```rust,no_run
/// use xlsx2csv::{Destination, ExporterBuilder, Workbook};
///
/// # fn main() -> Result<(), xlsx2csv::XlsxToCsvError> {
/// let exporter = ExporterBuilder::new().build()?;
/// let mut workbook = Workbook::open("example.xlsx")?;
/// exporter.export_sheet(&mut workbook, 0, &Destination::from_name("example.csv"))?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct SheetExporter {
    /// エクスポート設定
    config: ExportConfig,

    /// セルフォーマッター
    formatter: CellFormatter,
}

impl SheetExporter {
    pub(crate) fn new(config: ExportConfig) -> Self {
        Self {
            formatter: CellFormatter::new(config.date_format.clone()),
            config,
        }
    }

    /// 1つのシートを出力先に書き出す
    ///
    /// # 引数
    ///
    /// * `workbook` - 開いたワークブック
    /// * `index` - シートインデックス（0始まり）
    /// * `destination` - 出力先（標準出力またはファイル）
    ///
    /// # 処理フロー
    ///
    /// 1. シート数とインデックスを検証（出力先には触れない）
    /// 2. シートを読み込む
    /// 3. 出力先を開く（ファイルは作成または切り詰め）
    /// 4. 行ごとにCSVレコードを書き込み、最後にフラッシュする
    ///
    /// 途中で失敗した場合、書きかけのファイルはそのまま残ります。
    pub fn export_sheet<R: Read + Seek>(
        &self,
        workbook: &mut Workbook<R>,
        index: usize,
        destination: &Destination,
    ) -> Result<(), XlsxToCsvError> {
        check_sheet_index(index, workbook.sheet_count())?;
        let sheet = workbook.sheet(index)?;

        let sink = OutputSink::open(destination)?;
        let rows = self.write_sheet(&sheet, sink)?;

        info!(
            "wrote {} row(s) from sheet {} '{}' to {}",
            rows,
            sheet.index(),
            sheet.name(),
            destination
        );
        Ok(())
    }

    /// 1つのシートを任意のライターに書き出す
    pub fn export_to_writer<R: Read + Seek, W: Write>(
        &self,
        workbook: &mut Workbook<R>,
        index: usize,
        writer: W,
    ) -> Result<(), XlsxToCsvError> {
        check_sheet_index(index, workbook.sheet_count())?;
        let sheet = workbook.sheet(index)?;
        self.write_sheet(&sheet, writer)?;
        Ok(())
    }

    /// 計画に従ってシートを順番に書き出す
    ///
    /// 最初のエラーで中断し、残りのシートは処理しません。
    pub fn export_plan<R: Read + Seek>(
        &self,
        workbook: &mut Workbook<R>,
        plan: &ExportPlan,
    ) -> Result<(), XlsxToCsvError> {
        for export in plan.iter() {
            self.export_sheet(workbook, export.sheet_index, &export.destination)?;
        }
        Ok(())
    }

    /// シートの全行をCSVレコードとして書き込み、書き込んだ行数を返す
    fn write_sheet<W: Write>(&self, sheet: &Sheet, writer: W) -> Result<usize, XlsxToCsvError> {
        let mut out = RecordWriter::new(writer, self.delimiter_byte());
        let mut record = Vec::with_capacity(sheet.column_count());

        for row in sheet.rows() {
            if row.is_absent() {
                trace!(
                    "sheet '{}': row {} has no stored cells",
                    sheet.name(),
                    row.index() + 1
                );
            }
            record.clear();
            for cell in row.cells() {
                record.push(self.formatter.format_cell(sheet.name(), &cell)?);
            }
            out.write_record(&record)?;
        }

        let rows = out.finish()?;
        debug!("sheet '{}': {} record(s) flushed", sheet.name(), rows);
        Ok(rows)
    }

    fn delimiter_byte(&self) -> u8 {
        // build() guarantees ASCII
        self.config.delimiter as u8
    }
}
