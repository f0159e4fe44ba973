//! Lexer Benchmarks
//!
//! Run with: `cargo bench --package viperc-lex`

use std::collections::HashSet;

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use viperc_lex::tokenize;

fn keywords() -> HashSet<String> {
    [
        "and", "as", "assert", "break", "class", "continue", "def", "del", "elif", "else",
        "except", "exec", "False", "finally", "for", "from", "global", "if", "import", "in",
        "is", "lambda", "None", "not", "or", "pass", "raise", "return", "True", "try", "while",
        "with", "yield",
    ]
    .iter()
    .map(|s| (*s).to_owned())
    .collect()
}

fn token_count(source: &str, keywords: &HashSet<String>) -> usize {
    tokenize(source, keywords).len()
}

fn bench_lexer_statements(c: &mut Criterion) {
    let keywords = keywords();
    let mut group = c.benchmark_group("lexer");

    let source = "x = 42\nif x:\n    y = x + 1\n";
    group.throughput(Throughput::Bytes(source.len() as u64));

    group.bench_function("simple_assignment", |b| {
        b.iter(|| token_count(black_box("x = 42\n"), &keywords))
    });

    group.bench_function("if_block", |b| {
        b.iter(|| token_count(black_box(source), &keywords))
    });

    group.finish();
}

fn bench_lexer_complex(c: &mut Criterion) {
    let keywords = keywords();
    let mut group = c.benchmark_group("lexer_complex");

    let source = "\
def fibonacci(n):
    if n <= 1:
        return n
    return fibonacci(n - 1) + fibonacci(n - 2)

class Point:
    def __init__(self, x, y):
        self.x = x
        self.y = y

    def scaled(self, factor):
        # component-wise scaling
        return Point(self.x * factor, self.y * factor)

result = fibonacci(10) ** 2 // 3
";

    group.throughput(Throughput::Bytes(source.len() as u64));

    group.bench_function("complex_source", |b| {
        b.iter(|| token_count(black_box(source), &keywords))
    });

    group.finish();
}

fn bench_lexer_strings(c: &mut Criterion) {
    let keywords = keywords();
    let mut group = c.benchmark_group("lexer_strings");

    group.bench_function("short_string", |b| {
        b.iter(|| token_count(black_box("s = 'hello'\n"), &keywords))
    });

    group.bench_function("escaped_string", |b| {
        b.iter(|| token_count(black_box("s = 'line one\\nline two\\t(indented)'\n"), &keywords))
    });

    group.bench_function("triple_quoted_string", |b| {
        let source = "doc = '''A longer string\nspanning several lines\nwith 'quotes' inside.'''\n";
        b.iter(|| token_count(black_box(source), &keywords))
    });

    group.finish();
}

fn bench_lexer_numbers(c: &mut Criterion) {
    let keywords = keywords();
    let mut group = c.benchmark_group("lexer_numbers");

    group.bench_function("integer", |b| {
        b.iter(|| token_count(black_box("x = 123456\n"), &keywords))
    });

    group.bench_function("float_with_exponent", |b| {
        b.iter(|| token_count(black_box("x = 3.14159e-10\n"), &keywords))
    });

    group.bench_function("hex", |b| {
        b.iter(|| token_count(black_box("x = 0xDEADBEEF\n"), &keywords))
    });

    group.bench_function("imaginary", |b| {
        b.iter(|| token_count(black_box("x = 2.5j\n"), &keywords))
    });

    group.finish();
}

fn bench_lexer_indentation(c: &mut Criterion) {
    let keywords = keywords();
    let mut group = c.benchmark_group("lexer_indentation");

    let mut source = String::from("def f():\n");
    for depth in 1..=8 {
        source.push_str(&" ".repeat(depth * 4));
        source.push_str("if x:\n");
    }
    source.push_str(&" ".repeat(36));
    source.push_str("pass\n");

    group.throughput(Throughput::Bytes(source.len() as u64));

    group.bench_function("nested_blocks", |b| {
        b.iter(|| token_count(black_box(&source), &keywords))
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_lexer_statements,
    bench_lexer_complex,
    bench_lexer_strings,
    bench_lexer_numbers,
    bench_lexer_indentation
);
criterion_main!(benches);
