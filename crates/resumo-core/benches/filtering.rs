use criterion::{black_box, criterion_group, criterion_main, Criterion};

use resumo_core::model::AttemptRecord;
use resumo_core::query::{self, FilterState};

fn bench_filtering(c: &mut Criterion) {
    let mut group = c.benchmark_group("filtering");

    let records = generate_records(1000);
    let by_identifier = FilterState {
        identifier_query: "estudante 1".into(),
        exact_date: None,
    };
    let by_date = FilterState {
        identifier_query: String::new(),
        exact_date: Some("2023 - Dia 1 (ingles)".into()),
    };
    let combined = FilterState {
        identifier_query: "estudante 1".into(),
        exact_date: Some("2023 - Dia 1 (ingles)".into()),
    };

    group.bench_function("identifier_1000_records", |b| {
        b.iter(|| query::filter(black_box(&records), black_box(&by_identifier)))
    });

    group.bench_function("date_1000_records", |b| {
        b.iter(|| query::filter(black_box(&records), black_box(&by_date)))
    });

    group.bench_function("combined_1000_records", |b| {
        b.iter(|| query::filter(black_box(&records), black_box(&combined)))
    });

    group.bench_function("no_filters_1000_records", |b| {
        b.iter(|| query::filter(black_box(&records), black_box(&FilterState::default())))
    });

    group.finish();
}

fn generate_records(n: usize) -> Vec<AttemptRecord> {
    (0..n)
        .map(|i| {
            AttemptRecord::new(
                format!("Estudante {i}"),
                2020 + (i % 5) as u16,
                (i % 2 + 1) as u8,
                if i % 2 == 0 { "ingles" } else { "espanhol" },
                (25 + i % 25) as u32,
                50,
            )
        })
        .collect()
}

criterion_group!(benches, bench_filtering);
criterion_main!(benches);
