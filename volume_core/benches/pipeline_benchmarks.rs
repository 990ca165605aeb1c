use crate::common::*;

use volume_core::{
    classify::{classify, classify_sequential},
    premade::transfer_functions::{ct_default, default_2d},
    transfer_function::{TF2D_TABLE_SIZE, TF_TABLE_WIDTH},
    volumetric::decode_slice,
};

pub fn decode_uint8(c: &mut Criterion) {
    let (bytes, config) = raw_volume(SampleFormat::Uint8);
    c.bench_function("decode uint8", |b| {
        b.iter(|| decode_slice(black_box(&bytes), &config).unwrap())
    });
}

pub fn decode_int16(c: &mut Criterion) {
    let (bytes, config) = raw_volume(SampleFormat::Int16);
    c.bench_function("decode int16", |b| {
        b.iter(|| decode_slice(black_box(&bytes), &config).unwrap())
    });
}

pub fn classify_parallel(c: &mut Criterion) {
    let dataset = ramp_dataset(dims());
    c.bench_function("classify parallel", |b| {
        b.iter(|| classify(black_box(&dataset)))
    });
}

pub fn classify_single_thread(c: &mut Criterion) {
    let dataset = ramp_dataset(dims());
    c.bench_function("classify single thread", |b| {
        b.iter(|| classify_sequential(black_box(&dataset)))
    });
}

pub fn generate_tf(c: &mut Criterion) {
    let tf = ct_default();
    c.bench_function("tf table", |b| {
        b.iter(|| tf.build_table(black_box(TF_TABLE_WIDTH)))
    });
}

pub fn generate_tf_2d(c: &mut Criterion) {
    let tf = default_2d();
    c.bench_function("tf 2d table", |b| {
        b.iter(|| tf.build_table(black_box(TF2D_TABLE_SIZE), TF2D_TABLE_SIZE))
    });
}
