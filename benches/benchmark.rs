//! パフォーマンスベンチマーク
//!
//! ベンチマーク用のワークブックはrust_xlsxwriterでメモリ上に生成します。
//!
//! 実装するベンチマーク:
//! - 小規模シート（100行 x 10列）の変換速度
//! - 大規模シート（10,000行 x 20列）の変換速度
//! - 疎なシート（空行の多いシート）の変換速度

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use std::io::Cursor;
use xlsx2csv::{ExporterBuilder, Workbook};

/// 数値と文字列が交互に並ぶシートを生成
fn generate_grid(rows: u32, cols: u16) -> Vec<u8> {
    let mut workbook = rust_xlsxwriter::Workbook::new();
    let worksheet = workbook.add_worksheet();

    for row in 0..rows {
        for col in 0..cols {
            let result = if col % 2 == 0 {
                worksheet.write_number(row, col, (row * cols as u32 + col as u32) as f64)
            } else {
                worksheet.write_string(row, col, format!("text, {} \"{}\"", row, col))
            };
            result.unwrap();
        }
    }

    workbook.save_to_buffer().unwrap()
}

/// 100行ごとに1セルだけ値を持つシートを生成
fn generate_sparse(rows: u32) -> Vec<u8> {
    let mut workbook = rust_xlsxwriter::Workbook::new();
    let worksheet = workbook.add_worksheet();

    for row in (0..rows).step_by(100) {
        worksheet.write_number(row, 15, row as f64).unwrap();
    }

    workbook.save_to_buffer().unwrap()
}

fn bench_export(c: &mut Criterion, group_name: &str, data: Vec<u8>, sample_size: usize) {
    let exporter = ExporterBuilder::new().build().unwrap();

    let mut group = c.benchmark_group(group_name);
    group.throughput(Throughput::Bytes(data.len() as u64));
    group.sample_size(sample_size);

    group.bench_function("export_to_writer", |b| {
        b.iter(|| {
            let mut workbook = Workbook::from_reader(Cursor::new(black_box(&data))).unwrap();
            let mut output = Vec::new();
            exporter
                .export_to_writer(&mut workbook, 0, &mut output)
                .unwrap();
            black_box(output);
        });
    });

    group.finish();
}

fn benchmark_small_sheet(c: &mut Criterion) {
    bench_export(c, "small_sheet", generate_grid(100, 10), 50);
}

/// 大規模シートは時間がかかるため、サンプル数を減らす
fn benchmark_large_sheet(c: &mut Criterion) {
    bench_export(c, "large_sheet", generate_grid(10_000, 20), 10);
}

fn benchmark_sparse_sheet(c: &mut Criterion) {
    bench_export(c, "sparse_sheet", generate_sparse(50_000), 10);
}

criterion_group!(
    benches,
    benchmark_small_sheet,
    benchmark_large_sheet,
    benchmark_sparse_sheet
);
criterion_main!(benches);
