//! Payline Evaluation Benchmarks
//!
//! Single-line evaluation and full 20-line spins.

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use rf_payline::{Evaluator, PayTable, SymbolId, WildSet, standard_paylines};

fn classic_evaluator() -> Evaluator {
    let mut table = PayTable::new();
    for symbol in 1..=10 {
        let base = (11 - symbol) as f64;
        table.set(symbol, 3, base * 2.0);
        table.set(symbol, 4, base * 10.0);
        table.set(symbol, 5, base * 50.0);
    }
    table.set(11, 5, 1000.0);
    Evaluator::new(table, WildSet::from_ids(&[11]))
}

fn bench_single_line(c: &mut Criterion) {
    let evaluator = classic_evaluator();
    let mut group = c.benchmark_group("evaluate_line");

    let lines: [(&str, Vec<SymbolId>); 3] = [
        ("no_win", vec![1, 2, 3, 4, 5]),
        ("wild_run", vec![11, 3, 11, 3, 7]),
        ("all_wild", vec![11; 5]),
    ];

    for (name, line) in &lines {
        group.bench_with_input(BenchmarkId::from_parameter(name), line, |b, line| {
            b.iter(|| black_box(evaluator.evaluate_line(1, black_box(line))))
        });
    }

    group.finish();
}

fn bench_spin(c: &mut Criterion) {
    let evaluator = classic_evaluator();
    let patterns = standard_paylines();
    let matrix: Vec<Vec<SymbolId>> = vec![
        vec![1, 11, 3],
        vec![1, 2, 11],
        vec![4, 1, 1],
        vec![1, 5, 6],
        vec![7, 1, 8],
    ];

    c.bench_function("evaluate_spin_20_lines", |b| {
        b.iter(|| black_box(evaluator.evaluate_spin(black_box(&matrix), &patterns)))
    });
}

criterion_group!(benches, bench_single_line, bench_spin);
criterion_main!(benches);
