//! Criterion benchmarks for console_print

use console_print::prelude::*;
use console_print::{extract_config, StackTrace};
use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use serde_json::json;
use std::sync::Arc;

fn memory_print(ambient: Option<&str>) -> (Arc<MemoryConsole>, Print) {
    let console = Arc::new(MemoryConsole::new());
    let builder = Print::builder().console(console.clone());
    let print = match ambient {
        Some(ambient) => builder.ambient_environment(ambient),
        None => builder.without_ambient_environment(),
    }
    .build();
    (console, print)
}

// ============================================================================
// Facade Creation Benchmarks
// ============================================================================

fn bench_facade_creation(c: &mut Criterion) {
    let mut group = c.benchmark_group("facade_creation");
    group.throughput(Throughput::Elements(1));

    group.bench_function("builder_memory", |b| {
        b.iter(|| {
            let print = Print::builder()
                .console(Arc::new(MemoryConsole::new()))
                .without_ambient_environment()
                .build();
            black_box(print)
        });
    });

    group.bench_function("builder_with_defaults", |b| {
        b.iter(|| {
            let print = Print::builder()
                .environment(Environment::Development)
                .options(FormatOptions::new().show_type(true).color(Color::Blue))
                .console(Arc::new(MemoryConsole::new()))
                .ambient_environment("development")
                .build();
            black_box(print)
        });
    });

    group.finish();
}

// ============================================================================
// Printing Benchmarks
// ============================================================================

fn bench_printing(c: &mut Criterion) {
    let mut group = c.benchmark_group("printing");
    group.throughput(Throughput::Elements(1));

    let (console, print) = memory_print(None);

    group.bench_function("log_plain", |b| {
        b.iter(|| {
            print.log(args![black_box("Plain message")]);
            console.clear();
        });
    });

    group.bench_function("warn_with_prefixes", |b| {
        b.iter(|| {
            print.warn(args![
                black_box("Warning"),
                FormatOptions::new()
                    .show_type(true)
                    .show_environment_type(true)
                    .show_caller_info(true)
            ]);
            console.clear();
        });
    });

    group.bench_function("info_with_timestamp", |b| {
        b.iter(|| {
            print.info(args![
                black_box("Timed"),
                FormatOptions::new().show_timestamp(true)
            ]);
            console.clear();
        });
    });

    group.bench_function("debug_with_context", |b| {
        b.iter(|| {
            print.debug(args![
                black_box("Debug"),
                FormatOptions::new().context_data(&json!({ "user": 1, "roles": ["a", "b"] }))
            ]);
            console.clear();
        });
    });

    group.finish();
}

// ============================================================================
// Suppression Benchmarks
// ============================================================================

fn bench_suppression(c: &mut Criterion) {
    let mut group = c.benchmark_group("suppression");
    group.throughput(Throughput::Elements(1));

    let (_, gated) = memory_print(Some("production"));
    group.bench_function("environment_mismatch", |b| {
        b.iter(|| {
            gated.log(args![
                black_box("hidden"),
                PrintConfig::new().environment(Environment::Development)
            ]);
        });
    });

    let (_, print) = memory_print(None);
    group.bench_function("condition_false", |b| {
        b.iter(|| {
            print.log(args![
                black_box("hidden"),
                FormatOptions::new().condition(|_| false)
            ]);
        });
    });

    group.bench_function("when_false", |b| {
        b.iter(|| {
            print.when(black_box(false), args!["hidden"]);
        });
    });

    group.finish();
}

// ============================================================================
// Configuration Extraction Benchmarks
// ============================================================================

fn bench_extract_config(c: &mut Criterion) {
    let mut group = c.benchmark_group("extract_config");

    group.bench_function("no_config", |b| {
        b.iter(|| {
            let result = extract_config(black_box(args!["a", 1, true]));
            black_box(result)
        });
    });

    group.bench_function("explicit_config", |b| {
        b.iter(|| {
            let result = extract_config(black_box(args![
                "a",
                PrintConfig::new().log_level(LogLevel::Warn)
            ]));
            black_box(result)
        });
    });

    group.bench_function("structural_config", |b| {
        b.iter(|| {
            let result = extract_config(black_box(args![
                "a",
                json!({ "logLevel": "warn", "options": { "showType": true } })
            ]));
            black_box(result)
        });
    });

    group.finish();
}

// ============================================================================
// Stack Trace Benchmarks
// ============================================================================

fn bench_stack_trace(c: &mut Criterion) {
    let mut group = c.benchmark_group("stack_trace");
    group.sample_size(20);

    group.bench_function("capture_and_render", |b| {
        b.iter(|| {
            let trace = StackTrace::capture();
            black_box(trace.render())
        });
    });

    group.finish();
}

// ============================================================================
// Criterion Configuration
// ============================================================================

criterion_group!(
    benches,
    bench_facade_creation,
    bench_printing,
    bench_suppression,
    bench_extract_config,
    bench_stack_trace
);

criterion_main!(benches);
