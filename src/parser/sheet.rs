//! Sheet Module
//!
//! シートの行とセルを、上から下・左から右の順に遅延評価で走査します。
//!
//! 行はシートの1行目（インデックス0）から、列はA列から列挙されます。
//! 使用範囲より前の行や、セルが1つも存在しない行も空のセルとして列挙されるため、
//! 出力の行位置はシート上の行位置と常に一致します。

use calamine::{Data, Range};

use crate::types::CellCoord;

/// 存在しないセルの値
static EMPTY: Data = Data::Empty;

/// ワークブック内の1つのシート
#[derive(Debug, Clone)]
pub struct Sheet {
    /// シート名
    name: String,
    /// ワークブック内のインデックス（0始まり）
    index: usize,
    /// calamineのセル範囲（使用範囲のみ）
    range: Range<Data>,
}

impl Sheet {
    pub(crate) fn new(name: String, index: usize, range: Range<Data>) -> Self {
        Self { name, index, range }
    }

    /// シート名
    pub fn name(&self) -> &str {
        &self.name
    }

    /// ワークブック内のインデックス
    pub fn index(&self) -> usize {
        self.index
    }

    /// 出力される行数（1行目から最後の使用行まで）
    pub fn row_count(&self) -> usize {
        self.range
            .end()
            .map(|(row, _)| row as usize + 1)
            .unwrap_or(0)
    }

    /// 各行のセル数（A列から最後の使用列まで）
    pub fn column_count(&self) -> usize {
        self.range
            .end()
            .map(|(_, col)| col as usize + 1)
            .unwrap_or(0)
    }

    /// 行のイテレーターを返す
    ///
    /// 呼び出すたびに先頭から走査をやり直します。
    pub fn rows(&self) -> Rows<'_> {
        let (first_row, first_col) = self.range.start().unwrap_or((0, 0));
        Rows {
            inner: self.range.rows(),
            position: 0,
            first_row: first_row as usize,
            first_col: first_col as usize,
            row_count: self.row_count(),
            width: self.column_count(),
        }
    }
}

/// シートの行イテレーター
pub struct Rows<'a> {
    inner: calamine::Rows<'a, Data>,
    position: usize,
    first_row: usize,
    first_col: usize,
    row_count: usize,
    width: usize,
}

impl<'a> Iterator for Rows<'a> {
    type Item = Row<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.position >= self.row_count {
            return None;
        }

        let cells = if self.position < self.first_row {
            None
        } else {
            self.inner.next()
        };
        let row = Row {
            index: self.position,
            first_col: self.first_col,
            width: self.width,
            cells,
        };
        self.position += 1;
        Some(row)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.row_count - self.position;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Rows<'_> {}

/// シートの1行
///
/// セルが1つも保存されていない行は「不在」として扱われますが、
/// 空のセルを同じ列数だけ列挙します。
#[derive(Debug, Clone, Copy)]
pub struct Row<'a> {
    index: usize,
    first_col: usize,
    width: usize,
    cells: Option<&'a [Data]>,
}

impl<'a> Row<'a> {
    /// 行インデックス（0始まり）
    pub fn index(&self) -> usize {
        self.index
    }

    /// 保存されたセルが1つもない行かどうか
    pub fn is_absent(&self) -> bool {
        self.cells
            .map_or(true, |cells| cells.iter().all(|cell| *cell == Data::Empty))
    }

    /// セルのイテレーターを返す（左から右）
    pub fn cells(&self) -> impl Iterator<Item = Cell<'a>> + 'a {
        let Row {
            index,
            first_col,
            width,
            cells,
        } = *self;

        (0..width).map(move |col| {
            let value = col
                .checked_sub(first_col)
                .and_then(|offset| cells.and_then(|cells| cells.get(offset)))
                .unwrap_or(&EMPTY);
            Cell {
                coord: CellCoord::new(index as u32, col as u32),
                value,
            }
        })
    }
}

/// シートの1セル
#[derive(Debug, Clone, Copy)]
pub struct Cell<'a> {
    coord: CellCoord,
    value: &'a Data,
}

impl<'a> Cell<'a> {
    /// セル座標
    pub fn coord(&self) -> CellCoord {
        self.coord
    }

    /// calamineのセル値
    pub fn value(&self) -> &'a Data {
        self.value
    }
}
