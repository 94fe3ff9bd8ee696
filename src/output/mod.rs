//! Output Module
//!
//! CSVの出力先（標準出力またはファイル）と、レコードの書き込みを提供するモジュール。

mod record;

use std::fs::File;
use std::io::{self, Write};

use crate::api::Destination;

pub(crate) use record::RecordWriter;

/// 1回のエクスポートの間だけ開かれる出力先
///
/// ファイルはドロップ時に閉じられます。標準出力は閉じません。
#[derive(Debug)]
pub(crate) enum OutputSink {
    Stdout(io::Stdout),
    File(File),
}

impl OutputSink {
    /// 出力先を開く（ファイルは作成または切り詰め）
    pub fn open(destination: &Destination) -> io::Result<Self> {
        match destination.path() {
            None => Ok(OutputSink::Stdout(io::stdout())),
            Some(path) => File::create(path).map(OutputSink::File),
        }
    }
}

impl Write for OutputSink {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self {
            OutputSink::Stdout(stdout) => stdout.write(buf),
            OutputSink::File(file) => file.write(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self {
            OutputSink::Stdout(stdout) => stdout.flush(),
            OutputSink::File(file) => file.flush(),
        }
    }
}
