//! Benchmarks for rtmpio.
//!
//! Run with:
//!     cargo bench

use criterion::{Criterion, Throughput, black_box, criterion_group, criterion_main};

use bytes::Bytes;
use futures_util::io::Cursor;
use rtmpio::{AsyncReadBytesExt, escape_bytes};

fn bench_escape(c: &mut Criterion) {
    let mut group = c.benchmark_group("escape");

    let ascii: Vec<u8> = b"rtmp://live.example.com/app/stream?key=0123456789"
        .iter()
        .copied()
        .cycle()
        .take(4096)
        .collect();
    let binary: Vec<u8> = (0..4096).map(|i| (i * 7 + 13) as u8).collect();
    let unicode: Vec<u8> = "é€中😀".as_bytes().iter().copied().cycle().take(4096).collect();

    for (name, data) in [("ascii", &ascii), ("binary", &binary), ("unicode", &unicode)] {
        group.throughput(Throughput::Bytes(data.len() as u64));
        group.bench_with_input(name, data, |b, data| {
            b.iter(|| black_box(escape_bytes(black_box(data))).len());
        });
    }

    group.finish();
}

fn bench_read_all(c: &mut Criterion) {
    let mut group = c.benchmark_group("read_all_bytes");
    let runtime = tokio::runtime::Builder::new_current_thread()
        .build()
        .expect("runtime");

    // Typical RTMP sizes: chunk header, default chunk, handshake block
    for count in [12usize, 128, 1536] {
        let data = Bytes::from(vec![0xA5u8; count * 64]);
        group.throughput(Throughput::Bytes(data.len() as u64));
        group.bench_with_input(format!("count_{}", count), &data, |b, data| {
            b.iter(|| {
                runtime.block_on(async {
                    let mut reader = Cursor::new(data.clone());
                    for _ in 0..64 {
                        let bytes = reader.read_all_bytes(count).await.expect("read");
                        black_box(bytes.len());
                    }
                })
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_escape, bench_read_all);
criterion_main!(benches);
