use core::hint::black_box;
use criterion::{Criterion, Throughput, criterion_group, criterion_main};
use hashuid::{BinaryUidExt, Extra, HashUid, HashUidBuilder, Uid, UidBuilder, UidWritable};
use std::time::{Duration, UNIX_EPOCH};

// Number of identifiers processed per benchmark iteration.
const TOTAL_IDS: usize = 4096;

fn records() -> Vec<Vec<u8>> {
    (0..TOTAL_IDS)
        .map(|i| format!("2010090{}: record number {i}", i % 10).into_bytes())
        .collect()
}

fn uids() -> Vec<HashUid> {
    let builder = HashUidBuilder::new();
    let date = UNIX_EPOCH + Duration::from_millis(123_412_341);
    records()
        .iter()
        .enumerate()
        .map(|(i, data)| {
            let extra = (i % 2 == 0).then(|| Extra::new(format!("attachment.{i}")).unwrap());
            builder.new_id_with_extra(Some(data.as_slice()), Some(date), extra)
        })
        .collect()
}

fn bench_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("build");
    group.throughput(Throughput::Elements(TOTAL_IDS as u64));
    let builder = HashUidBuilder::new();
    let records = records();

    group.bench_function(format!("elems/{TOTAL_IDS}"), |b| {
        b.iter(|| {
            for data in &records {
                black_box(builder.new_id(Some(data.as_slice())));
            }
        });
    });
    group.finish();
}

fn bench_text(c: &mut Criterion) {
    let mut group = c.benchmark_group("text");
    group.throughput(Throughput::Elements(TOTAL_IDS as u64));
    let uids = uids();
    let rendered: Vec<String> = uids.iter().map(ToString::to_string).collect();

    group.bench_function("format", |b| {
        b.iter(|| {
            for uid in &uids {
                black_box(uid.to_string());
            }
        });
    });
    group.bench_function("parse", |b| {
        b.iter(|| {
            for s in &rendered {
                black_box(HashUid::parse(s).unwrap());
            }
        });
    });
    group.bench_function("parse_base", |b| {
        b.iter(|| {
            for s in &rendered {
                black_box(HashUid::parse_base(s).unwrap());
            }
        });
    });
    group.bench_function("sort", |b| {
        b.iter(|| {
            let mut sorted = uids.clone();
            sorted.sort();
            black_box(sorted);
        });
    });
    group.finish();
}

fn bench_binary(c: &mut Criterion) {
    let mut group = c.benchmark_group("binary");
    group.throughput(Throughput::Elements(TOTAL_IDS as u64));
    let uids = uids();
    let encoded: Vec<_> = uids.iter().map(|uid| uid.to_bytes().unwrap()).collect();

    group.bench_function("write", |b| {
        let mut out = Vec::with_capacity(TOTAL_IDS * 48);
        b.iter(|| {
            out.clear();
            for uid in &uids {
                uid.write_to(&mut out).unwrap();
            }
            black_box(&out);
        });
    });
    group.bench_function("read", |b| {
        b.iter(|| {
            for bytes in &encoded {
                black_box(HashUid::from_bytes(bytes.clone()).unwrap());
            }
        });
    });
    group.finish();
}

criterion_group!(benches, bench_build, bench_text, bench_binary);
criterion_main!(benches);
