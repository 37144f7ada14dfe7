//! Throughput benchmarks for line highlighting.
//!
//! `raw` drives the core scanner directly over a reused line buffer; `driver`
//! goes through `Highlighter` and builds positioned spans; `rescan` measures
//! the state cache after a one-line edit near the top of the document.

use std::hint::black_box;

use caml_lexer_core::{LineBuffer, LineScanner, ScanState};
use caml_mode::{Highlighter, LineStates};
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

/// Generate `n` small definitions mixing every scanner mode.
fn generate_source(n: usize) -> String {
    (0..n)
        .map(|i| {
            format!(
                "let f{i} x = (* step {i}\n   of the loop *) match x with\n  | Some v -> v + {i} (* {{| *)\n  | None -> failwith \"f{i}: none\"\n"
            )
        })
        .collect()
}

fn bench_highlight(c: &mut Criterion) {
    let mut group = c.benchmark_group("caml_mode/highlight");

    for n in [10, 100, 1000] {
        let source = generate_source(n);
        let lines: Vec<&str> = source.split('\n').collect();
        group.throughput(Throughput::Bytes(source.len() as u64));

        group.bench_with_input(BenchmarkId::new("raw", n), &lines, |b, lines| {
            b.iter(|| {
                let mut state = ScanState::new();
                let mut buffer = LineBuffer::new("");
                for line in lines {
                    buffer.reset(line);
                    for token in LineScanner::new(buffer.cursor(), &mut state) {
                        black_box(token);
                    }
                }
                state
            });
        });

        group.bench_with_input(BenchmarkId::new("driver", n), &lines, |b, lines| {
            b.iter(|| {
                let mut hl = Highlighter::new();
                for line in lines {
                    black_box(hl.highlight_line(line));
                }
                hl.state()
            });
        });

        group.bench_with_input(BenchmarkId::new("rescan", n), &lines, |b, lines| {
            let cache = LineStates::from_lines(lines);
            let mut edited = lines.clone();
            edited[1] = "   of the loop";
            b.iter(|| {
                let mut cache = cache.clone();
                black_box(cache.rescan(&edited, 1))
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_highlight);
criterion_main!(benches);
