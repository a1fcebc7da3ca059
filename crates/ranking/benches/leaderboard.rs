//! Benchmarks for leaderboard ranking
//!
//! Run with: cargo bench --package ranking
//!
//! This will benchmark the full three-stage pipeline on synthetic record
//! collections of increasing size.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use ranking::build_leaderboard;
use records::UserRecord;

/// Deterministic synthetic records: roughly a third land in the target
/// location, counts spread out via fixed multipliers.
fn synthetic_users(n: usize) -> Vec<UserRecord> {
    (0..n)
        .map(|i| {
            let location = match i % 3 {
                0 => "Indonesia",
                1 => "Singapore",
                _ => "Japan",
            };
            UserRecord::new(
                &format!("user{}", i),
                location,
                ((i * 37) % 10_000) as u64,
                ((i * 101) % 5_000) as u64,
            )
        })
        .collect()
}

fn bench_leaderboard_10k(c: &mut Criterion) {
    let users = synthetic_users(10_000);

    c.bench_function("build_leaderboard_10k", |b| {
        b.iter(|| {
            let ranked = build_leaderboard(black_box(users.clone())).unwrap();
            black_box(ranked)
        })
    });
}

fn bench_leaderboard_100k(c: &mut Criterion) {
    let users = synthetic_users(100_000);

    c.bench_function("build_leaderboard_100k", |b| {
        b.iter(|| {
            let ranked = build_leaderboard(black_box(users.clone())).unwrap();
            black_box(ranked)
        })
    });
}

criterion_group!(benches, bench_leaderboard_10k, bench_leaderboard_100k);
criterion_main!(benches);
