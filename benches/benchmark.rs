//! Criterion benchmarks for the hot paths: per-keystroke formatting,
//! masking, and the submission gate.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use card_form::{
    checksum, format_card_number, mask_display, CardFieldController, FormConfig, FormData,
};

const AMEX: &str = "371449635398431";
const VISA: &str = "4532015112830366";
const VISA_DISPLAY: &str = "4532 0151 1283 0366";

fn bench_format(c: &mut Criterion) {
    let mut group = c.benchmark_group("format");

    group.bench_function("amex", |b| {
        b.iter(|| format_card_number(black_box(AMEX)))
    });
    group.bench_function("default", |b| {
        b.iter(|| format_card_number(black_box(VISA)))
    });
    group.bench_function("already_formatted", |b| {
        b.iter(|| format_card_number(black_box(VISA_DISPLAY)))
    });

    group.finish();
}

fn bench_mask(c: &mut Criterion) {
    c.bench_function("mask_display", |b| {
        b.iter(|| mask_display(black_box(VISA_DISPLAY)))
    });
}

fn bench_checksum(c: &mut Criterion) {
    let mut group = c.benchmark_group("checksum");

    group.bench_function("gate", |b| {
        b.iter(|| checksum::passes_gate(black_box(VISA_DISPLAY)))
    });
    group.bench_function("luhn", |b| {
        b.iter(|| checksum::luhn(black_box(VISA)))
    });

    group.finish();
}

fn bench_keystroke_session(c: &mut Criterion) {
    // a full entry session: every keystroke reformats from scratch
    c.bench_function("keystroke_session", |b| {
        b.iter(|| {
            let mut form = CardFieldController::new(FormConfig::default());
            form.initialize(FormData::default());
            form.focus_number();
            let mut typed = String::new();
            for ch in VISA.chars() {
                typed.push(ch);
                form.input_number(black_box(&typed));
            }
            form.blur_number();
            form.submit().is_ok()
        })
    });
}

criterion_group!(
    benches,
    bench_format,
    bench_mask,
    bench_checksum,
    bench_keystroke_session
);
criterion_main!(benches);
