//! Error Types Module
//!
//! クレート全体で使用する構造化エラー型を定義するモジュール。
//! `thiserror`を使用して、エラーの自動変換とメッセージフォーマットを実現する。

use thiserror::Error;

/// xlsx2csvクレート全体で使用するエラー型
///
/// ワークブックの読み込み、シートの走査、CSV出力中に発生する
/// すべてのエラーを統一的に扱うために使用されます。
///
/// # エラーの種類
///
/// - `Io`: 出力ファイルの作成・書き込み・フラッシュの失敗
/// - `Parse`: ワークブックの解析失敗（calamine由来）
/// - `Csv`: CSVライターのエラー
/// - `Config`: 設定の検証に失敗したエラー（無効な区切り文字など）
/// - `NoSheets` / `SheetOutOfRange`: ワークブック構造に関するエラー
/// - `CellFormat`: セル値のフォーマットに失敗したエラー
///
/// # 使用例
///
/// ```rust,no_run
/// use xlsx2csv::XlsxToCsvError;
/// use std::fs::File;
///
/// fn create_output(path: &str) -> Result<(), XlsxToCsvError> {
///     let _file = File::create(path)?;  // Ioエラーが自動的に変換される
///     Ok(())
/// }
/// ```
#[derive(Error, Debug)]
pub enum XlsxToCsvError {
    /// I/O操作中に発生したエラー
    ///
    /// `#[from]`属性により、`std::io::Error`から自動的に変換されます。
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Excelファイルの解析中に発生したエラー
    ///
    /// ファイル形式が不正、破損したファイル、XLSX以外の形式などが原因となります。
    #[error("Failed to parse Excel file: {0}")]
    Parse(#[from] calamine::Error),

    /// CSVレコードの書き込み中に発生したエラー
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// 設定の検証に失敗したエラー
    ///
    /// `ExporterBuilder::build()`時に設定を検証し、無効な設定が検出された
    /// 場合に発生します。
    ///
    /// # 例
    ///
    /// ```rust,no_run
    /// use xlsx2csv::{ExporterBuilder, XlsxToCsvError};
    ///
    /// let result = ExporterBuilder::new()
    ///     .with_delimiter('"')  // 引用符は区切り文字にできない
    ///     .build();
    ///
    /// match result {
    ///     Err(XlsxToCsvError::Config(msg)) => {
    ///         println!("設定エラー: {}", msg);
    ///     }
    ///     _ => {}
    /// }
    /// ```
    #[error("Configuration error: {0}")]
    Config(String),

    /// ワークブックにシートが1つも存在しない
    #[error("This XLSX file contains no sheets")]
    NoSheets,

    /// 指定されたシートインデックスが範囲外
    ///
    /// メッセージには有効な範囲 `[0, count-1]` が含まれます。
    #[error(
        "No sheet {index} available, please select a sheet between 0 and {}",
        last_index(.count)
    )]
    SheetOutOfRange {
        /// 要求されたシートインデックス（0始まり）
        index: usize,
        /// ワークブック内のシート数
        count: usize,
    },

    /// セル値のフォーマットに失敗したエラー
    ///
    /// エラーメッセージには、シート名、セル座標（A1記法）、詳細が含まれます。
    #[error("Failed to format cell {cell} in sheet '{sheet}': {message}")]
    CellFormat {
        /// エラーが発生したシート名
        sheet: String,
        /// エラーが発生したセルの座標（A1記法）
        cell: String,
        /// エラーの詳細メッセージ
        message: String,
    },
}

/// 有効なシートインデックスの上限（シート数が0の場合は0）
fn last_index(count: &usize) -> usize {
    count.saturating_sub(1)
}
