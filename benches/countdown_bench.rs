// Benchmark for the vote deadline computation
// Measures a full week's worth of hourly instants per iteration

use chrono::{Duration, TimeZone, Utc};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

use devhunt_panel::services::countdown::compute_remaining;

fn bench_compute_remaining(c: &mut Criterion) {
    let base = Utc.with_ymd_and_hms(2025, 6, 2, 0, 0, 0).unwrap();

    c.bench_function("compute_remaining_week_sweep", |b| {
        b.iter(|| {
            for hour in 0..(7 * 24) {
                let now = base + Duration::hours(hour);
                black_box(compute_remaining(black_box(now)));
            }
        })
    });
}

criterion_group!(benches, bench_compute_remaining);
criterion_main!(benches);
