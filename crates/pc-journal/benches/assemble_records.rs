//! Criterion benchmarks for record assembly and serialization.
//!
//! These run on synthetic problem data so they stay deterministic in CI.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use pc_journal::{serialize_entry, DumpMode, EntryAssembler, RecordBuffer};
use pc_problem::ProblemData;
use pc_report::Report;

fn synthetic_data(extra_fields: usize) -> ProblemData {
    let mut data = ProblemData::new();
    data.insert_text("executable", "/usr/bin/will_segfault");
    data.insert_text("pid", "4242");
    data.insert_text("reason", "will_segfault killed by SIGSEGV");
    data.insert_text("cmdline", "/usr/bin/will_segfault --now");
    data.insert_text("type", "CCpp");
    data.insert_text("uid", "1000");
    for i in 0..extra_fields {
        data.insert_text(format!("extra_field_{i}"), "x".repeat(48));
    }
    data
}

fn synthetic_report() -> Report {
    Report {
        summary: "will_segfault killed by SIGSEGV".to_string(),
        description: Some("Process:\npid: 4242\n\nBacktrace:\n#0 crash()".to_string()),
    }
}

fn bench_buffer_append(c: &mut Criterion) {
    let mut group = c.benchmark_group("record_buffer");
    for count in [4usize, 16, 64] {
        group.bench_with_input(BenchmarkId::new("append", count), &count, |b, &count| {
            b.iter(|| {
                let mut buffer = RecordBuffer::new();
                for _ in 0..count {
                    buffer.append(black_box("problem_field"), black_box("some value text"));
                }
                black_box(buffer);
            });
        });
    }
    group.finish();
}

fn bench_assemble(c: &mut Criterion) {
    let data = synthetic_data(24);
    let report = synthetic_report();

    let mut group = c.benchmark_group("assemble");
    for mode in [DumpMode::None, DumpMode::Essential, DumpMode::Full] {
        group.bench_with_input(
            BenchmarkId::new("mode", mode.to_string()),
            &mode,
            |b, &mode| {
                b.iter(|| {
                    let buffer = EntryAssembler::new(black_box(&data), black_box(&report))
                        .with_dump_mode(mode)
                        .assemble();
                    black_box(buffer);
                });
            },
        );
    }
    group.finish();
}

fn bench_serialize(c: &mut Criterion) {
    let data = synthetic_data(24);
    let report = synthetic_report();
    let buffer = EntryAssembler::new(&data, &report)
        .with_dump_mode(DumpMode::Full)
        .assemble();

    c.bench_function("serialize_entry", |b| {
        b.iter(|| black_box(serialize_entry(black_box(&buffer))));
    });
}

criterion_group!(benches, bench_buffer_append, bench_assemble, bench_serialize);
criterion_main!(benches);
