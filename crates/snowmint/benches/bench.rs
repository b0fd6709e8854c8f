use core::hint::black_box;
use criterion::{Criterion, Throughput, criterion_group, criterion_main};
use snowmint::{
    BasicSnowflakeGenerator, IdGenStatus, LockSnowflakeGenerator, MonotonicClock, ObjectId,
    SnowflakeGenerator, SnowflakeId, SnowflakeMintId, TimeSource, Uuid,
};
use std::{
    sync::{Arc, Barrier},
    thread::scope,
    time::Instant,
};

struct FixedMockTime {
    millis: u64,
}

impl TimeSource<u64> for FixedMockTime {
    fn current_millis(&self) -> u64 {
        self.millis
    }
}

// Number of IDs generated per benchmark iteration (per-thread for
// multi-threaded).
const TOTAL_IDS: usize = 4096;

/// Benchmarks a hot-path generator where IDs are always `Ready`.
fn bench_generator<ID, G, T>(c: &mut Criterion, group_name: &str, generator_factory: impl Fn() -> G)
where
    ID: SnowflakeId,
    G: SnowflakeGenerator<ID, T>,
    T: TimeSource<ID::Ty>,
{
    let mut group = c.benchmark_group(group_name);
    group.throughput(Throughput::Elements(TOTAL_IDS as u64));

    group.bench_function(format!("elems/{TOTAL_IDS}"), |b| {
        b.iter_custom(|iters| {
            let start = Instant::now();

            for _ in 0..iters {
                let generator = generator_factory();
                for _ in 0..TOTAL_IDS {
                    match generator.poll_id() {
                        IdGenStatus::Ready { id } => {
                            black_box(id);
                        }
                        IdGenStatus::Pending { .. } => unreachable!(),
                    }
                }
            }

            start.elapsed()
        });
    });

    group.finish();
}

/// Benchmarks generators that may yield on clock stall (realistic wallclock
/// behavior).
fn bench_generator_yield<ID, G, T>(
    c: &mut Criterion,
    group_name: &str,
    generator_factory: impl Fn() -> G,
) where
    ID: SnowflakeId,
    G: SnowflakeGenerator<ID, T>,
    T: TimeSource<ID::Ty>,
{
    let mut group = c.benchmark_group(group_name);
    group.throughput(Throughput::Elements(TOTAL_IDS as u64));

    group.bench_function(format!("elems/{TOTAL_IDS}"), |b| {
        b.iter_custom(|iters| {
            let start = Instant::now();

            for _ in 0..iters {
                let generator = generator_factory();
                for _ in 0..TOTAL_IDS {
                    let id = generator.next_id();
                    black_box(id);
                }
            }

            start.elapsed()
        });
    });

    group.finish();
}

/// Benchmarks a shared generator across threads, with no yielding (fixed
/// clock).
fn bench_generator_contended<ID, G, T>(
    c: &mut Criterion,
    group_name: &str,
    generator_fn: impl Fn() -> G,
) where
    ID: SnowflakeId,
    G: SnowflakeGenerator<ID, T> + Send + Sync,
    T: TimeSource<ID::Ty>,
{
    let mut group = c.benchmark_group(group_name);

    for thread_count in [1, 2, 4, 8, 16] {
        let ids_per_thread = TOTAL_IDS / thread_count;

        group.throughput(Throughput::Elements(TOTAL_IDS as u64));
        group.bench_function(format!("elems/{TOTAL_IDS}/threads/{thread_count}"), |b| {
            b.iter_custom(|iters| {
                let start = Instant::now();

                for _ in 0..iters {
                    let generator = Arc::new(generator_fn());
                    let barrier = Arc::new(Barrier::new(thread_count + 1));
                    scope(|s| {
                        for _ in 0..thread_count {
                            let generator = Arc::clone(&generator);
                            let barrier = Arc::clone(&barrier);
                            s.spawn(move || {
                                barrier.wait();
                                for _ in 0..ids_per_thread {
                                    match generator.poll_id() {
                                        IdGenStatus::Ready { id } => {
                                            black_box(id);
                                        }
                                        IdGenStatus::Pending { .. } => unreachable!(),
                                    }
                                }
                            });
                        }
                        barrier.wait();
                    });
                }

                start.elapsed()
            });
        });
    }

    group.finish();
}

/// Benchmarks a shared generator across threads with yielding on `Pending`.
fn bench_generator_contended_yield<ID, G, T>(
    c: &mut Criterion,
    group_name: &str,
    generator_fn: impl Fn() -> G,
) where
    ID: SnowflakeId,
    G: SnowflakeGenerator<ID, T> + Send + Sync,
    T: TimeSource<ID::Ty>,
{
    let mut group = c.benchmark_group(group_name);

    for thread_count in [1, 2, 4, 8, 16] {
        let ids_per_thread = TOTAL_IDS / thread_count;

        group.throughput(Throughput::Elements(TOTAL_IDS as u64));
        group.bench_function(format!("elems/{TOTAL_IDS}/threads/{thread_count}"), |b| {
            b.iter_custom(|iters| {
                let start = Instant::now();

                for _ in 0..iters {
                    let generator = Arc::new(generator_fn());
                    let barrier = Arc::new(Barrier::new(thread_count + 1));
                    scope(|s| {
                        for _ in 0..thread_count {
                            let generator = Arc::clone(&generator);
                            let barrier = Arc::clone(&barrier);
                            s.spawn(move || {
                                barrier.wait();
                                for _ in 0..ids_per_thread {
                                    let id = generator.next_id();
                                    black_box(id);
                                }
                            });
                        }
                        barrier.wait();
                    });
                }

                start.elapsed()
            });
        });
    }

    group.finish();
}

// --- MOCK CLOCK (fixed, non-advancing time) ---

/// Single-threaded benchmark for `BasicSnowflakeGenerator` with a fixed clock.
/// Always returns `Ready` (no yielding).
fn benchmark_mock_sequential_basic(c: &mut Criterion) {
    bench_generator::<SnowflakeMintId, _, _>(c, "mock/sequential/basic", || {
        BasicSnowflakeGenerator::new(0, FixedMockTime { millis: 1 }).unwrap()
    });
}

/// Single-threaded benchmark for `LockSnowflakeGenerator` with a fixed clock.
fn benchmark_mock_sequential_lock(c: &mut Criterion) {
    bench_generator::<SnowflakeMintId, _, _>(c, "mock/sequential/lock", || {
        LockSnowflakeGenerator::new(0, FixedMockTime { millis: 1 }).unwrap()
    });
}

/// Multithreaded benchmark for `LockSnowflakeGenerator` with a fixed clock. No
/// yielding; measures raw contention.
fn benchmark_mock_contended_lock(c: &mut Criterion) {
    bench_generator_contended::<SnowflakeMintId, _, _>(c, "mock/contended/lock", || {
        LockSnowflakeGenerator::new(0, FixedMockTime { millis: 1 }).unwrap()
    });
}

// --- MONOTONIC CLOCK (realistic time with potential yielding) ---

/// Single-threaded benchmark for `BasicSnowflakeGenerator` with
/// `MonotonicClock`.
fn benchmark_mono_sequential_basic(c: &mut Criterion) {
    let clock = MonotonicClock::default();
    bench_generator_yield::<SnowflakeMintId, _, _>(c, "mono/sequential/basic", || {
        BasicSnowflakeGenerator::new(0, clock.clone()).unwrap()
    });
}

/// Single-threaded benchmark for `LockSnowflakeGenerator` with
/// `MonotonicClock`.
fn benchmark_mono_sequential_lock(c: &mut Criterion) {
    let clock = MonotonicClock::default();
    bench_generator_yield::<SnowflakeMintId, _, _>(c, "mono/sequential/lock", || {
        LockSnowflakeGenerator::new(0, clock.clone()).unwrap()
    });
}

/// Multithreaded benchmark for `LockSnowflakeGenerator` with `MonotonicClock`.
/// Threads yield on sequence exhaustion.
fn benchmark_mono_contended_lock(c: &mut Criterion) {
    let clock = MonotonicClock::default();
    bench_generator_contended_yield::<SnowflakeMintId, _, _>(c, "mono/contended/lock", || {
        LockSnowflakeGenerator::new(0, clock.clone()).unwrap()
    });
}

// --- STATELESS IDS ---

/// Throughput of random version-4 UUID generation.
fn benchmark_uuid_v4(c: &mut Criterion) {
    let mut group = c.benchmark_group("stateless/uuid_v4");
    group.throughput(Throughput::Elements(TOTAL_IDS as u64));

    group.bench_function(format!("elems/{TOTAL_IDS}"), |b| {
        b.iter(|| {
            for _ in 0..TOTAL_IDS {
                black_box(Uuid::new_v4());
            }
        });
    });

    group.finish();
}

/// Throughput of ObjectId generation, including the system time read.
fn benchmark_object_id(c: &mut Criterion) {
    let mut group = c.benchmark_group("stateless/object_id");
    group.throughput(Throughput::Elements(TOTAL_IDS as u64));

    group.bench_function(format!("elems/{TOTAL_IDS}"), |b| {
        b.iter(|| {
            for _ in 0..TOTAL_IDS {
                black_box(ObjectId::new());
            }
        });
    });

    group.finish();
}

criterion_group!(
    benches,
    // Mock clock
    benchmark_mock_sequential_basic,
    benchmark_mock_sequential_lock,
    benchmark_mock_contended_lock,
    // Monotonic clock (yielding)
    benchmark_mono_sequential_basic,
    benchmark_mono_sequential_lock,
    benchmark_mono_contended_lock,
    // Stateless ids
    benchmark_uuid_v4,
    benchmark_object_id,
);
criterion_main!(benches);
