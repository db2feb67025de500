use std::hint::black_box;
use std::str::FromStr;

use criterion::{criterion_group, criterion_main, Criterion};
use decimal64::{CeilingRoundPolicy, Decimal};

type Money = Decimal<4>;

fn bench_addition(c: &mut Criterion) {
    c.bench_function("decimal_addition", |b| {
        let x = Money::from_str("123.4567").unwrap();
        let y = Money::from_str("987.6543").unwrap();
        b.iter(|| black_box(black_box(x) + black_box(y)));
    });
}

fn bench_subtraction(c: &mut Criterion) {
    c.bench_function("decimal_subtraction", |b| {
        let x = Money::from_str("987.6543").unwrap();
        let y = Money::from_str("123.4567").unwrap();
        b.iter(|| black_box(black_box(x) - black_box(y)));
    });
}

fn bench_multiplication(c: &mut Criterion) {
    c.bench_function("decimal_multiplication", |b| {
        let x = Money::from_str("123.4567").unwrap();
        let y = Money::from_str("9.8765").unwrap();
        b.iter(|| black_box(black_box(x) * black_box(y)));
    });
}

fn bench_division(c: &mut Criterion) {
    c.bench_function("decimal_division", |b| {
        let x = Money::from_str("123.4567").unwrap();
        let y = Money::from_str("9.8765").unwrap();
        b.iter(|| black_box(black_box(x) / black_box(y)));
    });
}

fn bench_division_by_int(c: &mut Criterion) {
    c.bench_function("decimal_division_by_int", |b| {
        let x = Money::from_str("123.4567").unwrap();
        b.iter(|| black_box(black_box(x) / black_box(3i64)));
    });
}

fn bench_strict_parsing(c: &mut Criterion) {
    c.bench_function("decimal_strict_parsing", |b| {
        b.iter(|| black_box(Money::from_str(black_box("123.4567")).unwrap()));
    });
}

fn bench_permissive_parsing(c: &mut Criterion) {
    c.bench_function("decimal_permissive_parsing", |b| {
        b.iter(|| black_box(Money::from_string_permissive(black_box(" 123.456789 ")).unwrap()));
    });
}

fn bench_formatting(c: &mut Criterion) {
    c.bench_function("decimal_formatting", |b| {
        let d = Money::from_str("123.4567").unwrap();
        b.iter(|| black_box(format!("{}", black_box(d))));
    });
}

fn bench_formatting_trailing_zeros(c: &mut Criterion) {
    c.bench_function("decimal_formatting_trailing_zeros", |b| {
        let d = Money::from_str("123.45").unwrap();
        b.iter(|| black_box(black_box(d).to_string_trailing_zeros()));
    });
}

fn bench_to_integer(c: &mut Criterion) {
    c.bench_function("decimal_to_integer", |b| {
        let d = Money::from_str("123.4567").unwrap();
        b.iter(|| black_box(black_box(d).to_integer()));
    });
}

fn bench_cast(c: &mut Criterion) {
    c.bench_function("decimal_cast", |b| {
        let d = Money::from_str("123.4567").unwrap();
        b.iter(|| black_box(black_box(d).cast::<2, CeilingRoundPolicy>()));
    });
}

criterion_group!(
    benches,
    bench_addition,
    bench_subtraction,
    bench_multiplication,
    bench_division,
    bench_division_by_int,
    bench_strict_parsing,
    bench_permissive_parsing,
    bench_formatting,
    bench_formatting_trailing_zeros,
    bench_to_integer,
    bench_cast,
);
criterion_main!(benches);
