//! CSV Record Writer
//!
//! `csv`クレートのライターを包み、1行を1レコードとして書き込みます。

use csv::{Terminator, WriterBuilder};
use std::io::Write;

use crate::error::XlsxToCsvError;

/// CSVレコードライター
///
/// 区切り文字、引用符、改行を含むフィールドは引用符で囲まれ、
/// フィールド内の引用符は2つに重ねてエスケープされます。
pub(crate) struct RecordWriter<W: Write> {
    writer: csv::Writer<W>,
    records_written: usize,
}

impl<W: Write> RecordWriter<W> {
    /// 区切り文字を指定してライターを生成
    pub fn new(inner: W, delimiter: u8) -> Self {
        let writer = WriterBuilder::new()
            .delimiter(delimiter)
            .terminator(Terminator::Any(b'\n'))
            .has_headers(false)
            .from_writer(inner);
        Self {
            writer,
            records_written: 0,
        }
    }

    /// 1レコードを書き込む
    pub fn write_record(&mut self, fields: &[String]) -> Result<(), XlsxToCsvError> {
        self.writer.write_record(fields)?;
        self.records_written += 1;
        Ok(())
    }

    /// バッファをフラッシュし、書き込んだレコード数を返す
    ///
    /// バッファリングされた書き込みのエラーはここで報告されます。
    pub fn finish(mut self) -> Result<usize, XlsxToCsvError> {
        self.writer.flush()?;
        Ok(self.records_written)
    }
}
