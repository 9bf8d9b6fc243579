use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use flatmesh_core::MacAddress;
use flatmesh_routing::route::table::RouteTable;
use flatmesh_routing::route::types::InterfaceId;

fn make_dest(i: u32) -> MacAddress {
    let mut bytes = [0u8; 6];
    bytes[..4].copy_from_slice(&i.to_be_bytes());
    bytes[5] = 0x01;
    MacAddress::new(bytes)
}

fn populate_range(table: &mut RouteTable, range: std::ops::Range<u32>, now: u64) {
    for i in range {
        table.add_path(
            make_dest(i),
            MacAddress::new([0xB0, 0, 0, 0, 0, 1]),
            InterfaceId(1),
            (i % 200) as u8,
            (i % 0xffff) as u16,
            now,
        );
    }
}

fn populate_table(table: &mut RouteTable, count: u32, now: u64) {
    populate_range(table, 0..count, now);
}

fn bench_route_table(c: &mut Criterion) {
    let mut group = c.benchmark_group("route_table");

    let now = 1_000_000u64;

    for (label, count) in [("100", 100u32), ("1K", 1_000), ("10K", 10_000)] {
        let mut table = RouteTable::new(3600);
        populate_table(&mut table, count, now);

        let hit_dest = make_dest(count / 2);
        let miss_dest = make_dest(0xFFFF_FF00);

        group.bench_with_input(BenchmarkId::new("lookup_hit", label), &table, |b, t| {
            b.iter(|| t.lookup(&hit_dest, now));
        });

        group.bench_with_input(BenchmarkId::new("lookup_miss", label), &table, |b, t| {
            b.iter(|| t.lookup(&miss_dest, now));
        });
    }

    // add_path from empty
    group.bench_function("add_path", |b| {
        b.iter_custom(|iters| {
            let mut table = RouteTable::new(3600);
            let start = std::time::Instant::now();
            for i in 0..iters {
                table.add_path(
                    make_dest(i as u32),
                    MacAddress::new([0xB0, 0, 0, 0, 0, 1]),
                    InterfaceId(1),
                    1,
                    1,
                    now,
                );
            }
            start.elapsed()
        });
    });

    // refresh path: repeated identical adds against one entry
    group.bench_function("add_path_refresh", |b| {
        let mut table = RouteTable::new(3600);
        populate_table(&mut table, 1_000, now);
        let dest = make_dest(500);
        b.iter(|| {
            table.add_path(
                dest,
                MacAddress::new([0xB0, 0, 0, 0, 0, 1]),
                InterfaceId(1),
                244,
                500,
                now,
            );
        });
    });

    group.finish();
}

fn bench_cull(c: &mut Criterion) {
    let mut group = c.benchmark_group("cull");

    for (label, count) in [("1K", 1_000u32), ("10K", 10_000)] {
        group.bench_function(BenchmarkId::new("half_expired", label), |b| {
            b.iter_custom(|iters| {
                let mut elapsed = std::time::Duration::ZERO;
                for _ in 0..iters {
                    let mut table = RouteTable::new(100);
                    // First half added early enough to be expired at cull time
                    populate_range(&mut table, 0..count / 2, 1_000);
                    populate_range(&mut table, count / 2..count, 2_000);
                    let start = std::time::Instant::now();
                    table.cull(2_050);
                    elapsed += start.elapsed();
                }
                elapsed
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_route_table, bench_cull);
criterion_main!(benches);
