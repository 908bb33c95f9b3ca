//! # Miner Registry Benchmarks
//!
//! | Operation | Cost | Target |
//! |-----------|------|--------|
//! | join | O(n) membership scan | < 50µs at 1k miners |
//! | leave_self | O(n) scan + O(1) swap removal | < 50µs at 1k miners |
//! | leave_by_committee | O(n) scan + O(1) swap removal | < 50µs at 1k miners |

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use primitive_types::H160;
use qc_miner_registry::{Amount, MinerRegistryApi, RegistryConfig};
use qc_tests::integration::host::Host;
use std::time::Duration;

const BOND: u64 = 1000;

fn committee() -> H160 {
    H160::from_low_u64_be(u64::MAX)
}

fn populated_host(size: u64) -> Host {
    let host = Host::new(RegistryConfig::new(Amount::from(BOND), vec![committee()]))
        .expect("valid config");
    for i in 0..size {
        host.join(H160::from_low_u64_be(i), Amount::from(BOND));
    }
    host
}

fn bench_join_leave_cycle(c: &mut Criterion) {
    let mut group = c.benchmark_group("qc-miner-registry");
    group.measurement_time(Duration::from_secs(5));

    for size in [10u64, 100, 1_000] {
        let host = populated_host(size);
        let newcomer = H160::from_low_u64_be(size + 1);

        group.throughput(Throughput::Elements(2));
        group.bench_with_input(BenchmarkId::new("join_leave_self", size), &host, |b, host| {
            b.iter(|| {
                black_box(host.join(newcomer, Amount::from(BOND + 1)));
                black_box(host.leave_self(newcomer));
            })
        });

        group.bench_with_input(
            BenchmarkId::new("join_leave_by_committee", size),
            &host,
            |b, host| {
                b.iter(|| {
                    black_box(host.join(newcomer, Amount::from(BOND)));
                    black_box(host.leave_by_committee(committee(), newcomer));
                })
            },
        );

        group.bench_with_input(BenchmarkId::new("is_member_miss", size), &host, |b, host| {
            b.iter(|| black_box(host.registry.is_member(&newcomer)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_join_leave_cycle);
criterion_main!(benches);
