use criterion::{criterion_group, criterion_main};

mod common;
mod pipeline_benchmarks;

use pipeline_benchmarks::*;

criterion_group! {
    name = decoding;
    config = common::config();
    targets = decode_uint8, decode_int16
}

criterion_group! {
    name = classification;
    config = common::config();
    targets = classify_parallel, classify_single_thread
}

criterion_group! {
    name = transfer_functions;
    config = common::config();
    targets = generate_tf, generate_tf_2d
}

criterion_main!(decoding, classification, transfer_functions);
