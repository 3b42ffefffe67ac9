/*
 * SPDX-FileCopyrightText: 2023 Tommaso Fontana
 * SPDX-FileCopyrightText: 2023 Inria
 * SPDX-FileCopyrightText: 2023 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use bitcursor::prelude::*;
use criterion::{Criterion, criterion_group, criterion_main};
use rand::rngs::SmallRng;
use rand::{RngCore, SeedableRng};
use std::hint::black_box;

const LEN: usize = 1 << 16;

pub fn criterion_benchmark(c: &mut Criterion) {
    let mut data = vec![0_u8; LEN];
    SmallRng::seed_from_u64(0).fill_bytes(&mut data);

    c.bench_function("read_bit", |b| {
        b.iter(|| {
            let mut reader = BitReader::new(MemByteReader::new(&data));
            while let Ok(bit) = reader.read_bit() {
                black_box(bit);
            }
        })
    });

    c.bench_function("read_byte (unaligned)", |b| {
        b.iter(|| {
            let mut reader = BitReader::new(MemByteReader::new(&data));
            reader.read_bit().unwrap();
            while let Ok(byte) = reader.read_byte() {
                black_box(byte);
            }
        })
    });

    c.bench_function("write_bit", |b| {
        b.iter(|| {
            let mut writer = BitWriter::new(MemByteWriterVec::new(Vec::<u8>::with_capacity(LEN)));
            for &byte in &data {
                writer.write_bit(black_box(byte & 1 != 0)).unwrap();
            }
            black_box(writer.into_inner());
        })
    });

    c.bench_function("write_byte (unaligned)", |b| {
        b.iter(|| {
            let mut writer =
                BitWriter::new(MemByteWriterVec::new(Vec::<u8>::with_capacity(LEN + 1)));
            writer.write_bit(true).unwrap();
            for &byte in &data {
                writer.write_byte(black_box(byte)).unwrap();
            }
            black_box(writer.into_inner());
        })
    });

    c.bench_function("copy", |b| {
        b.iter(|| {
            let mut reader = BitReader::new(MemByteReader::new(&data));
            let mut writer = BitWriter::new(MemByteWriterVec::new(Vec::<u8>::with_capacity(LEN)));
            writer.write_bit(reader.read_bit().unwrap()).unwrap();
            reader.copy_to(&mut writer, (LEN * 8 - 1) as u64).unwrap();
            black_box(writer.into_inner());
        })
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
