//! Formatter Module
//!
//! セル値を表示用の文字列（フォーマット済みの値）に変換するモジュール。

use calamine::{Data, ExcelDateTime};
use chrono::format::{Item, StrftimeItems};
use chrono::{NaiveDateTime, Timelike};
use std::fmt::Write as _;

use crate::api::DateFormat;
use crate::error::XlsxToCsvError;
use crate::parser::Cell;

/// 1日の秒数
const SECONDS_PER_DAY: f64 = 86_400.0;

/// セルフォーマッター
///
/// セル値のフォーマット処理のファサードとして機能します。
#[derive(Debug, Clone)]
pub(crate) struct CellFormatter {
    /// 日付フォーマッター
    date_formatter: DateFormatter,
}

impl CellFormatter {
    /// 新しいCellFormatterインスタンスを生成
    pub fn new(date_format: DateFormat) -> Self {
        Self {
            date_formatter: DateFormatter { date_format },
        }
    }

    /// セル値をフォーマット
    ///
    /// # 引数
    ///
    /// * `sheet` - シート名（エラーメッセージ用）
    /// * `cell` - フォーマットするセル
    ///
    /// # 戻り値
    ///
    /// * `Ok(String)` - フォーマット済み文字列
    /// * `Err(XlsxToCsvError::CellFormat)` - フォーマットに失敗した場合
    pub fn format_cell(&self, sheet: &str, cell: &Cell<'_>) -> Result<String, XlsxToCsvError> {
        self.format_value(cell.value())
            .map_err(|message| XlsxToCsvError::CellFormat {
                sheet: sheet.to_string(),
                cell: cell.coord().to_a1_notation(),
                message,
            })
    }

    fn format_value(&self, value: &Data) -> Result<String, String> {
        let formatted = match value {
            Data::Empty => String::new(),
            Data::String(s) => s.clone(),
            Data::Int(i) => i.to_string(),
            Data::Float(f) => f.to_string(),
            Data::Bool(b) => if *b { "TRUE" } else { "FALSE" }.to_string(),
            Data::Error(e) => e.to_string(),
            Data::DateTime(dt) => self.date_formatter.format(dt)?,
            Data::DateTimeIso(s) | Data::DurationIso(s) => s.clone(),
        };
        Ok(formatted)
    }
}

/// 日付フォーマッター
///
/// Excelのシリアル日付値を文字列に変換します。
/// 1900年/1904年エポックの解決はcalamineが行います。
#[derive(Debug, Clone)]
pub(crate) struct DateFormatter {
    date_format: DateFormat,
}

impl DateFormatter {
    /// 日付・時間値をフォーマット
    ///
    /// 経過時間（duration）は `H:MM:SS` 形式、日時は`DateFormat`に従います。
    pub fn format(&self, value: &ExcelDateTime) -> Result<String, String> {
        if value.is_duration() {
            return Ok(format_duration(value.as_f64()));
        }

        let datetime = value.as_datetime().ok_or_else(|| {
            format!(
                "date serial value {} is outside the supported range",
                value.as_f64()
            )
        })?;
        self.format_datetime(&datetime)
    }

    fn format_datetime(&self, datetime: &NaiveDateTime) -> Result<String, String> {
        let pattern = match &self.date_format {
            DateFormat::Iso8601 if datetime.num_seconds_from_midnight() == 0 => "%Y-%m-%d",
            DateFormat::Iso8601 => "%Y-%m-%d %H:%M:%S",
            DateFormat::Custom(pattern) => pattern.as_str(),
        };

        let mut formatted = String::new();
        write!(formatted, "{}", datetime.format(pattern))
            .map_err(|_| format!("invalid date format string: '{}'", pattern))?;
        Ok(formatted)
    }
}

/// 日数で表された経過時間を `H:MM:SS` 形式に変換
fn format_duration(days: f64) -> String {
    let total = (days * SECONDS_PER_DAY).round() as i64;
    let sign = if total < 0 { "-" } else { "" };
    let total = total.unsigned_abs();
    format!(
        "{}{}:{:02}:{:02}",
        sign,
        total / 3600,
        total / 60 % 60,
        total % 60
    )
}

/// chrono互換のフォーマット文字列を検証する
pub(crate) fn validate_date_format(pattern: &str) -> Result<(), XlsxToCsvError> {
    if pattern.is_empty() {
        return Err(XlsxToCsvError::Config(
            "Invalid date format string: ''".to_string(),
        ));
    }
    if StrftimeItems::new(pattern).any(|item| matches!(item, Item::Error)) {
        return Err(XlsxToCsvError::Config(format!(
            "Invalid date format string: '{}'",
            pattern
        )));
    }
    Ok(())
}
