//! Export Plan Module
//!
//! 出力パターンとシート選択から、書き出すシートとその出力先の一覧を決定する。

use crate::api::{Destination, SheetSelector};
use crate::error::XlsxToCsvError;
use crate::naming::derive_name;
use crate::parser::check_sheet_index;

/// 1つのシートの書き出し
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedExport {
    /// シートインデックス（0始まり）
    pub sheet_index: usize,
    /// 出力先
    pub destination: Destination,
}

/// 書き出すシートの一覧（インデックス順）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportPlan {
    exports: Vec<PlannedExport>,
}

impl ExportPlan {
    /// 書き出し計画を作成する
    ///
    /// # 引数
    ///
    /// * `pattern` - 出力ファイル名のパターン（空文字列は標準出力）
    /// * `selector` - シート選択方式
    /// * `sheet_count` - ワークブック内のシート数
    ///
    /// 複数のシートを書き出す場合は各ファイル名にシートインデックスを付け、
    /// 1つだけの場合は付けません。
    ///
    /// # 使用例
    ///
    /// ```rust
    /// use xlsx2csv::{Destination, ExportPlan, SheetSelector};
    ///
    /// # fn main() -> Result<(), xlsx2csv::XlsxToCsvError> {
    /// let plan = ExportPlan::new("book.csv", SheetSelector::All, 2)?;
    /// let names: Vec<String> = plan.iter().map(|e| e.destination.to_string()).collect();
    /// assert_eq!(names, vec!["book.0.csv", "book.1.csv"]);
    /// # Ok(())
    /// # }
    /// ```
    pub fn new(
        pattern: &str,
        selector: SheetSelector,
        sheet_count: usize,
    ) -> Result<Self, XlsxToCsvError> {
        let (first, last) = match selector {
            SheetSelector::All => {
                check_sheet_index(0, sheet_count)?;
                (0, sheet_count - 1)
            }
            SheetSelector::Index(index) => {
                check_sheet_index(index, sheet_count)?;
                (index, index)
            }
        };

        let single = first == last;
        let exports = (first..=last)
            .map(|sheet_index| {
                let index = if single { None } else { Some(sheet_index) };
                PlannedExport {
                    sheet_index,
                    destination: Destination::from_name(&derive_name(pattern, index)),
                }
            })
            .collect();

        Ok(Self { exports })
    }

    /// 書き出しのイテレーター
    pub fn iter(&self) -> std::slice::Iter<'_, PlannedExport> {
        self.exports.iter()
    }

    /// 書き出すシート数
    pub fn len(&self) -> usize {
        self.exports.len()
    }

    /// 書き出すシートがないかどうか（作成に成功した計画では常に`false`）
    pub fn is_empty(&self) -> bool {
        self.exports.is_empty()
    }
}

impl<'a> IntoIterator for &'a ExportPlan {
    type Item = &'a PlannedExport;
    type IntoIter = std::slice::Iter<'a, PlannedExport>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
