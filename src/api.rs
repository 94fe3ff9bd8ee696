//! Public API Types
//!
//! 公開APIで使用する列挙型を定義するモジュール。

use std::path::{Path, PathBuf};

/// 日付の出力形式
///
/// Excelの日付セルをCSVに変換する際の出力形式を指定します。
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum DateFormat {
    /// ISO 8601形式
    ///
    /// 時刻部分が0時ちょうどの場合は日付のみ（例: `2025-11-20`）、
    /// それ以外は日時（例: `2025-11-20 13:45:00`）を出力します。
    Iso8601,

    /// カスタム形式（chrono互換フォーマット文字列）
    ///
    /// # 使用例
    ///
    /// ```rust,no_run
    /// use xlsx2csv::{DateFormat, ExporterBuilder};
    ///
    /// # fn main() -> Result<(), xlsx2csv::XlsxToCsvError> {
    /// let exporter = ExporterBuilder::new()
    ///     .with_date_format(DateFormat::Custom("%d/%m/%Y".to_string()))
    ///     .build()?;
    /// # Ok(())
    /// # }
    /// ```
    Custom(String),
}

/// シート選択方式
///
/// 変換対象のシートを選択する方法を指定します。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum SheetSelector {
    /// すべてのシートを変換（デフォルト）
    All,

    /// インデックス指定（0始まり）
    ///
    /// 例: `SheetSelector::Index(0)` は最初のシートを選択
    Index(usize),
}

impl SheetSelector {
    /// コマンドラインの整数インデックスから生成する
    ///
    /// 負の値は「すべてのシート」を意味します。
    pub fn from_signed(index: i64) -> Self {
        match usize::try_from(index) {
            Ok(index) => SheetSelector::Index(index),
            Err(_) => SheetSelector::All,
        }
    }
}

impl Default for SheetSelector {
    fn default() -> Self {
        SheetSelector::All
    }
}

/// CSVの出力先
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Destination {
    /// プロセスの標準出力（このクレートが閉じることはない）
    Stdout,

    /// ファイル（作成または切り詰めて上書き）
    File(PathBuf),
}

impl Destination {
    /// 導出済みのファイル名から出力先を決定する
    ///
    /// 空文字列は標準出力を意味します。
    pub fn from_name(name: &str) -> Self {
        if name.is_empty() {
            Destination::Stdout
        } else {
            Destination::File(PathBuf::from(name))
        }
    }

    /// ファイル出力先の場合はそのパスを返す
    pub fn path(&self) -> Option<&Path> {
        match self {
            Destination::Stdout => None,
            Destination::File(path) => Some(path),
        }
    }
}

impl std::fmt::Display for Destination {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Destination::Stdout => write!(f, "<stdout>"),
            Destination::File(path) => write!(f, "{}", path.display()),
        }
    }
}
