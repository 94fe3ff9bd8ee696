//! Output Naming Module
//!
//! 出力ファイル名のパターンとシートインデックスから、
//! 実際のCSVファイル名を導出するモジュール。

/// インデックスの埋め込み位置を示すプレースホルダー
const INDEX_PLACEHOLDER: &str = "%d";

/// 拡張子がないパターンに付与する拡張子
const DEFAULT_EXTENSION: &str = ".csv";

/// パターンとシートインデックスからCSVファイル名を導出する
///
/// # 引数
///
/// * `pattern` - 出力ファイル名のパターン（空文字列は標準出力を意味する）
/// * `sheet_index` - シートインデックス（`None`の場合はインデックスを付けない）
///
/// # 規則
///
/// - パターンが空の場合は空文字列を返す
/// - 拡張子がない場合は `.csv` を付与する（インデックス挿入の後）
/// - インデックスがあり、`%d` を含む場合は最初の `%d` をインデックスに置換する
/// - インデックスがあり、`%d` を含まない場合は拡張子の前に `.{index}` を挿入する
/// - インデックスがない場合は最初の `%d` を削除する
///
/// # 使用例
///
/// ```rust
/// use xlsx2csv::derive_name;
///
/// assert_eq!(derive_name("out_%d_v1.csv", Some(5)), "out_5_v1.csv");
/// assert_eq!(derive_name("out_%d_v1.csv", None), "out__v1.csv");
/// assert_eq!(derive_name("report", Some(2)), "report.2.csv");
/// assert_eq!(derive_name("", Some(2)), "");
/// ```
pub fn derive_name(pattern: &str, sheet_index: Option<usize>) -> String {
    if pattern.is_empty() {
        return String::new();
    }

    let (base, ext) = match split_extension(pattern) {
        (base, "") => (base, DEFAULT_EXTENSION),
        split => split,
    };

    let base = match sheet_index {
        Some(index) if base.contains(INDEX_PLACEHOLDER) => {
            base.replacen(INDEX_PLACEHOLDER, &index.to_string(), 1)
        }
        Some(index) => format!("{}.{}", base, index),
        None => base.replacen(INDEX_PLACEHOLDER, "", 1),
    };

    base + ext
}

/// 入力ファイルのパスからデフォルトの出力パターンを導出する
///
/// 拡張子を `.csv` に置き換えます（拡張子がない場合は付与します）。
///
/// ```rust
/// use xlsx2csv::default_pattern;
///
/// assert_eq!(default_pattern("report.xlsx"), "report.csv");
/// assert_eq!(default_pattern("data/report"), "data/report.csv");
/// ```
pub fn default_pattern(input: &str) -> String {
    let (base, _) = split_extension(input);
    format!("{}{}", base, DEFAULT_EXTENSION)
}

/// パスを拡張子の前後で分割する
///
/// 拡張子は最後のパス要素における最後の `.` 以降（`.` を含む）です。
/// 拡張子がない場合、後半は空文字列になります。
fn split_extension(path: &str) -> (&str, &str) {
    for (pos, ch) in path.char_indices().rev() {
        if std::path::is_separator(ch) {
            break;
        }
        if ch == '.' {
            return path.split_at(pos);
        }
    }
    (path, "")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_extension() {
        assert_eq!(split_extension("report.xlsx"), ("report", ".xlsx"));
        assert_eq!(split_extension("a.b.c"), ("a.b", ".c"));
        assert_eq!(split_extension("report"), ("report", ""));
        assert_eq!(split_extension("dir.v2/report"), ("dir.v2/report", ""));
        assert_eq!(split_extension(".hidden"), ("", ".hidden"));
        assert_eq!(split_extension("trailing."), ("trailing", "."));
    }

    #[test]
    fn test_empty_pattern_means_stdout() {
        assert_eq!(derive_name("", Some(0)), "");
        assert_eq!(derive_name("", Some(7)), "");
        assert_eq!(derive_name("", None), "");
    }

    #[test]
    fn test_index_appended_before_extension() {
        assert_eq!(derive_name("report.csv", Some(2)), "report.2.csv");
        assert_eq!(derive_name("report.xlsx", Some(2)), "report.2.xlsx");
        assert_eq!(derive_name("out.tsv", Some(0)), "out.0.tsv");
    }

    #[test]
    fn test_missing_extension_gets_csv_after_index() {
        assert_eq!(derive_name("report", Some(3)), "report.3.csv");
        assert_eq!(derive_name("report", None), "report.csv");
        assert_eq!(derive_name("sheet_%d", Some(1)), "sheet_1.csv");
    }

    #[test]
    fn test_placeholder_replacement() {
        assert_eq!(derive_name("out_%d_v1.csv", Some(5)), "out_5_v1.csv");
        assert_eq!(derive_name("%d.csv", Some(12)), "12.csv");
        assert_eq!(derive_name("%d", Some(4)), "4.csv");
    }

    #[test]
    fn test_only_first_placeholder_is_touched() {
        assert_eq!(derive_name("a%d_b%d.csv", Some(9)), "a9_b%d.csv");
        assert_eq!(derive_name("a%d_b%d.csv", None), "a_b%d.csv");
    }

    #[test]
    fn test_placeholder_removed_without_index() {
        assert_eq!(derive_name("out_%d_v1.csv", None), "out__v1.csv");
        assert_eq!(derive_name("%d.csv", None), ".csv");
        assert_eq!(derive_name("plain.csv", None), "plain.csv");
    }

    #[test]
    fn test_directory_dots_are_not_extensions() {
        assert_eq!(derive_name("out.d/sheet", Some(1)), "out.d/sheet.1.csv");
        assert_eq!(derive_name("out.d/sheet", None), "out.d/sheet.csv");
    }

    #[test]
    fn test_default_pattern() {
        assert_eq!(default_pattern("report.xlsx"), "report.csv");
        assert_eq!(default_pattern("archive.v1.xlsx"), "archive.v1.csv");
        assert_eq!(default_pattern("report"), "report.csv");
        assert_eq!(derive_name(&default_pattern("report.xlsx"), Some(2)), "report.2.csv");
    }

    mod property_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn test_plain_pattern_without_extension(
                pattern in "[a-zA-Z0-9_]{1,16}",
                index in 0usize..10_000
            ) {
                prop_assert_eq!(
                    derive_name(&pattern, Some(index)),
                    format!("{}.{}.csv", pattern, index)
                );
            }

            #[test]
            fn test_first_placeholder_replaced(
                prefix in "[a-z_]{0,8}",
                middle in "[a-z_]{0,8}",
                index in 0usize..10_000
            ) {
                let pattern = format!("{}%d{}%d.csv", prefix, middle);
                prop_assert_eq!(
                    derive_name(&pattern, Some(index)),
                    format!("{}{}{}%d.csv", prefix, index, middle)
                );
            }

            #[test]
            fn test_no_index_is_idempotent(
                prefix in "[a-z_]{0,8}",
                suffix in "[a-z_]{0,8}"
            ) {
                let pattern = format!("{}%d{}.csv", prefix, suffix);
                let derived = derive_name(&pattern, None);
                prop_assert_eq!(derive_name(&derived, None), derived);
            }
        }
    }
}
