//! Workbook Module
//!
//! calamineのラッパーとして、ワークブックレベルの操作を提供します。

use calamine::{Reader, Xlsx};
use log::debug;
use std::fs::File;
use std::io::{BufReader, Read, Seek};
use std::path::Path;

use crate::error::XlsxToCsvError;
use crate::parser::Sheet;

/// ワークブック
///
/// 読み込み専用で、シート名の順序はファイル内の順序と一致します。
pub struct Workbook<R: Read + Seek> {
    /// calamineのワークブック（XLSX形式のみサポート）
    workbook: Xlsx<R>,
    /// シート名（ファイル内の順序）
    sheet_names: Vec<String>,
}

impl Workbook<BufReader<File>> {
    /// パスを指定してワークブックを開く
    ///
    /// # 戻り値
    ///
    /// * `Ok(Workbook)` - ワークブックの読み込みに成功した場合
    /// * `Err(XlsxToCsvError::Io)` - ファイルを開けなかった場合
    /// * `Err(XlsxToCsvError::Parse)` - XLSXとして解析できなかった場合
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, XlsxToCsvError> {
        let path = path.as_ref();
        debug!("opening workbook {}", path.display());
        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file))
    }
}

impl<R: Read + Seek> Workbook<R> {
    /// リーダーからワークブックを開く
    ///
    /// メモリ上のデータを扱う場合は`Cursor`を使用してください。
    pub fn from_reader(reader: R) -> Result<Self, XlsxToCsvError> {
        let workbook: Xlsx<R> =
            Xlsx::new(reader).map_err(|e| XlsxToCsvError::Parse(e.into()))?;
        let sheet_names = workbook.sheet_names().to_vec();
        debug!("workbook has {} sheet(s)", sheet_names.len());

        Ok(Self {
            workbook,
            sheet_names,
        })
    }

    /// シート数
    pub fn sheet_count(&self) -> usize {
        self.sheet_names.len()
    }

    /// すべてのシート名を取得
    pub fn sheet_names(&self) -> &[String] {
        &self.sheet_names
    }

    /// インデックスを指定してシートを読み込む
    ///
    /// # 引数
    ///
    /// * `index` - シートインデックス（0始まり）
    ///
    /// # 戻り値
    ///
    /// * `Ok(Sheet)` - シートの読み込みに成功した場合
    /// * `Err(XlsxToCsvError::NoSheets)` - ワークブックにシートがない場合
    /// * `Err(XlsxToCsvError::SheetOutOfRange)` - インデックスが範囲外の場合
    /// * `Err(XlsxToCsvError::Parse)` - シートの解析に失敗した場合
    pub fn sheet(&mut self, index: usize) -> Result<Sheet, XlsxToCsvError> {
        check_sheet_index(index, self.sheet_count())?;

        let name = self.sheet_names[index].clone();
        let range = self
            .workbook
            .worksheet_range(&name)
            .map_err(|e| XlsxToCsvError::Parse(e.into()))?;
        debug!(
            "loaded sheet {} '{}' ({} x {} cells)",
            index,
            name,
            range.height(),
            range.width()
        );

        Ok(Sheet::new(name, index, range))
    }
}

/// シートインデックスを検証する
///
/// シートが1つもない場合は、インデックスに関係なく`NoSheets`を返します。
pub(crate) fn check_sheet_index(index: usize, count: usize) -> Result<(), XlsxToCsvError> {
    if count == 0 {
        return Err(XlsxToCsvError::NoSheets);
    }
    if index >= count {
        return Err(XlsxToCsvError::SheetOutOfRange { index, count });
    }
    Ok(())
}
