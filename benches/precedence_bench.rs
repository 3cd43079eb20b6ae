//! Criterion benchmarks for u-precedence rule enforcement.
//!
//! Uses random sequences of integer keys with acyclic rules (lower key
//! before higher key) so every rule addition succeeds.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use u_precedence::key::Identity;
use u_precedence::limits::compute_limits;
use u_precedence::list::SuspendedList;
use u_precedence::rules::RuleIndex;

// ===========================================================================
// Synthetic workload
// ===========================================================================

fn random_sequence(rng: &mut StdRng, len: usize, keys: u32) -> Vec<u32> {
    (0..len).map(|_| rng.random_range(0..keys)).collect()
}

fn random_rules(rng: &mut StdRng, count: usize, keys: u32) -> Vec<(u32, u32)> {
    (0..count)
        .map(|_| {
            let a = rng.random_range(0..keys);
            let b = rng.random_range(0..keys);
            (a.min(b), a.max(b))
        })
        .filter(|(p, s)| p != s)
        .collect()
}

fn populated_list(len: usize, keys: u32) -> SuspendedList<u32> {
    let mut rng = StdRng::seed_from_u64(42);
    let mut list = SuspendedList::new();
    for item in random_sequence(&mut rng, len, keys) {
        let _ = list.push_right(item);
    }
    list
}

// ===========================================================================
// Benchmarks
// ===========================================================================

fn bench_compute_limits(c: &mut Criterion) {
    let mut group = c.benchmark_group("compute_limits");

    for &len in &[100usize, 1_000, 10_000] {
        let mut rng = StdRng::seed_from_u64(42);
        let keys = (len / 4) as u32;
        let seq = random_sequence(&mut rng, len, keys);
        let mut rules = RuleIndex::new();
        for (p, s) in random_rules(&mut rng, len, keys) {
            rules.add_rule(p, s);
        }

        group.bench_with_input(BenchmarkId::from_parameter(len), &(seq, rules), |b, (s, r)| {
            b.iter(|| black_box(compute_limits(black_box(s), black_box(r), &Identity)))
        });
    }
    group.finish();
}

#[cfg(feature = "parallel")]
fn bench_compute_limits_par(c: &mut Criterion) {
    use u_precedence::limits::compute_limits_par;

    let mut group = c.benchmark_group("compute_limits_par");

    for &len in &[1_000usize, 10_000] {
        let mut rng = StdRng::seed_from_u64(42);
        let keys = (len / 4) as u32;
        let seq = random_sequence(&mut rng, len, keys);
        let mut rules = RuleIndex::new();
        for (p, s) in random_rules(&mut rng, len, keys) {
            rules.add_rule(p, s);
        }

        group.bench_with_input(BenchmarkId::from_parameter(len), &(seq, rules), |b, (s, r)| {
            b.iter(|| black_box(compute_limits_par(black_box(s), black_box(r), &Identity)))
        });
    }
    group.finish();
}

#[cfg(not(feature = "parallel"))]
fn bench_compute_limits_par(_c: &mut Criterion) {}

fn bench_add_rules(c: &mut Criterion) {
    let mut group = c.benchmark_group("add_rule_before");
    group.sample_size(20);

    for &(len, count) in &[(50usize, 50usize), (200, 200), (500, 500)] {
        let keys = (len / 2) as u32;
        let list = populated_list(len, keys);
        let mut rng = StdRng::seed_from_u64(7);
        let rules = random_rules(&mut rng, count, keys);

        group.bench_with_input(
            BenchmarkId::new(format!("n{}_r{}", len, count), len),
            &(list, rules),
            |b, (l, r)| {
                b.iter(|| {
                    let mut list = l.copy();
                    for (p, s) in r {
                        let _ = list.add_rule_before(p, s);
                    }
                    black_box(list)
                })
            },
        );
    }
    group.finish();
}

fn bench_insert_with_rules(c: &mut Criterion) {
    let mut group = c.benchmark_group("insert_at");
    group.sample_size(20);

    for &len in &[50usize, 200, 500] {
        let keys = (len / 2) as u32;
        let mut list = populated_list(len, keys);
        let mut rng = StdRng::seed_from_u64(7);
        for (p, s) in random_rules(&mut rng, len, keys) {
            let _ = list.add_rule_before(&p, &s);
        }
        let inserts: Vec<(u32, usize)> = (0..len)
            .map(|_| (rng.random_range(0..keys), rng.random_range(0..=len)))
            .collect();

        group.bench_with_input(
            BenchmarkId::from_parameter(len),
            &(list, inserts),
            |b, (l, ins)| {
                b.iter(|| {
                    let mut list = l.copy();
                    for &(item, pos) in ins {
                        let index = pos.min(list.len());
                        let _ = list.insert_at(item, index);
                    }
                    black_box(list)
                })
            },
        );
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_compute_limits,
    bench_compute_limits_par,
    bench_add_rules,
    bench_insert_with_rules
);
criterion_main!(benches);
