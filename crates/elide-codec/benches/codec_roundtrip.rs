use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;

fn bench_codec_roundtrip(c: &mut Criterion) {
    let text = include_str!("../src/codec.rs").repeat(8);

    c.bench_function("encode_32k", |b| {
        b.iter(|| elide_codec::encode(black_box(&text)).unwrap())
    });

    let blob = elide_codec::encode(&text).unwrap();
    c.bench_function("decode_32k", |b| {
        b.iter(|| elide_codec::decode(black_box(&blob)).unwrap())
    });
}

criterion_group!(benches, bench_codec_roundtrip);
criterion_main!(benches);
