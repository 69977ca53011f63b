//! Performance benchmarks for the form mapping engine
//!
//! Run with: `cargo bench`

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use form_interrogatories::forms::templates::{disc001, disc002};
use form_interrogatories::forms::{FormEngine, FormEvent, IntakeData, OrderingRule};
use form_interrogatories::pdf::MemoryForm;

/// A form with one checkbox per fill entry, spread over pages
fn checkbox_form(patterns: &[&str]) -> MemoryForm {
    let mut form = MemoryForm::new(1);
    for (i, pattern) in patterns.iter().enumerate() {
        let page = i / 10;
        let token = pattern.strip_suffix("[0]").unwrap_or(pattern);
        form.add_checkbox(page, format!("F[0].Page{}[0].Sect{}[0].{}[0]", page + 1, i, token));
    }
    form
}

fn intake_for(ids: &[&str]) -> IntakeData {
    IntakeData {
        selected_sections: ids.iter().map(|&id| id.into()).collect(),
        case_number: Some("23STCV12345".to_string()),
        county: Some("Los Angeles".to_string()),
        ..Default::default()
    }
}

/// Benchmark checkbox resolution on both templates
fn bench_fill(c: &mut Criterion) {
    let mut group = c.benchmark_group("fill");

    for (name, engine, patterns, ids) in [
        (
            "disc001",
            FormEngine::new(&disc001::SCHEMA),
            disc001::FILL.iter().map(|e| e.pattern).collect::<Vec<_>>(),
            disc001::FILL.iter().map(|e| e.id).collect::<Vec<_>>(),
        ),
        (
            "disc002",
            FormEngine::new(&disc002::SCHEMA),
            disc002::FILL.iter().map(|e| e.pattern).collect::<Vec<_>>(),
            disc002::FILL.iter().map(|e| e.id).collect::<Vec<_>>(),
        ),
    ] {
        let form = checkbox_form(&patterns);
        let intake = intake_for(&ids);
        group.throughput(Throughput::Elements(ids.len() as u64));

        group.bench_function(BenchmarkId::new("all_sections", name), |b| {
            b.iter(|| {
                let mut form = form.clone();
                let mut events: Vec<FormEvent> = Vec::new();
                engine
                    .fill(&mut form, black_box(&intake), &mut events)
                    .unwrap()
            });
        });
    }

    group.finish();
}

/// Benchmark reading a fully checked form
fn bench_read(c: &mut Criterion) {
    let engine = FormEngine::new(&disc002::SCHEMA);
    let ids: Vec<&str> = disc002::FILL.iter().map(|e| e.id).collect();
    let mut form = checkbox_form(&disc002::FILL.iter().map(|e| e.pattern).collect::<Vec<_>>());
    let mut events: Vec<FormEvent> = Vec::new();
    engine.fill(&mut form, &intake_for(&ids), &mut events).unwrap();

    let mut group = c.benchmark_group("read");
    group.throughput(Throughput::Elements(ids.len() as u64));

    group.bench_function("disc002_all_checked", |b| {
        b.iter(|| {
            let mut events: Vec<FormEvent> = Vec::new();
            engine.read(black_box(&form), &mut events, false)
        });
    });

    group.finish();
}

/// Benchmark the two identifier orderings
fn bench_ordering(c: &mut Criterion) {
    let mut decimal: Vec<String> = disc001::FILL.iter().rev().map(|e| e.id.to_string()).collect();
    let mut section: Vec<String> = disc002::FILL.iter().rev().map(|e| e.id.to_string()).collect();
    decimal.push("not-an-id".to_string());
    section.push("not-an-id".to_string());

    let mut group = c.benchmark_group("ordering");

    group.bench_function("decimal", |b| {
        b.iter(|| {
            let mut ids = decimal.clone();
            OrderingRule::Decimal.sort(black_box(&mut ids));
            ids
        });
    });

    group.bench_function("section_pair", |b| {
        b.iter(|| {
            let mut ids = section.clone();
            OrderingRule::SectionPair.sort(black_box(&mut ids));
            ids
        });
    });

    group.finish();
}

criterion_group!(benches, bench_fill, bench_read, bench_ordering);
criterion_main!(benches);
