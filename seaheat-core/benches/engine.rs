use chrono::NaiveDate;
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use seaheat_core::{DailyObservation, HeatRiskEngine};

fn season(days: usize) -> Vec<DailyObservation> {
    let start = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
    start
        .iter_days()
        .take(days)
        .enumerate()
        .map(|(i, d)| DailyObservation::new(d, 26.0 + 4.0 * ((i as f64) / 15.0).sin()))
        .collect()
}

fn bench_assess(c: &mut Criterion) {
    let engine = HeatRiskEngine::default();
    let series = season(365);

    c.bench_function("assess_365_days", |b| {
        b.iter(|| engine.assess(black_box(&series)).unwrap())
    });

    c.bench_function("assess_and_emit_365_days", |b| {
        b.iter(|| {
            let assessment = engine.assess(black_box(&series)).unwrap();
            assessment.trigger_events().count()
        })
    });
}

criterion_group!(benches, bench_assess);
criterion_main!(benches);
