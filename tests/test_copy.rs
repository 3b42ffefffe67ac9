/*
 * SPDX-FileCopyrightText: 2023 Tommaso Fontana
 * SPDX-FileCopyrightText: 2023 Inria
 * SPDX-FileCopyrightText: 2023 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use bitcursor::prelude::{
    BitRead, BitReader, BitWrite, BitWriter, CopyError, CountBitRead, CountBitWrite, Error,
    MemByteReader, MemByteWriter, MemByteWriterVec,
};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

#[test]
fn test_copy() -> Result<(), Box<dyn std::error::Error>> {
    for len in 0..1000 {
        let mut write = BitWriter::new(MemByteWriterVec::new(Vec::<u8>::new()));

        let mut r = SmallRng::seed_from_u64(0);
        for _ in 0..len {
            write.write_bit(r.random())?;
        }
        let buffer = write.finish(false)?.into_inner();

        // start unaligned on both sides
        let skip = len % 8;
        let mut read = BitReader::new(MemByteReader::new(buffer));
        let mut copy_write = CountBitWrite::new(BitWriter::new(MemByteWriterVec::new(
            Vec::<u8>::new(),
        )));
        for _ in 0..skip {
            copy_write.write_bit(read.read_bit()?)?;
        }

        read.copy_to(&mut copy_write, (len - skip) as u64)?;
        assert_eq!(copy_write.bits_written, len as u64);

        let mut read = BitReader::new(MemByteReader::new(
            copy_write.into_inner().finish(false)?.into_inner(),
        ));

        let mut r = SmallRng::seed_from_u64(0);
        for _ in 0..len {
            assert_eq!(read.read_bit()?, r.random::<bool>());
        }

        let mut read = BitReader::new(MemByteReader::new(read.into_inner().into_inner()));
        let mut copy_write = BitWriter::new(MemByteWriterVec::new(Vec::<u8>::new()));
        copy_write.copy_from(&mut CountBitRead::new(&mut read), len as u64)?;

        let mut read = BitReader::new(MemByteReader::new(
            copy_write.finish(false)?.into_inner(),
        ));

        let mut r = SmallRng::seed_from_u64(0);
        for _ in 0..len {
            assert_eq!(read.read_bit()?, r.random::<bool>());
        }
    }

    Ok(())
}

#[test]
fn test_copy_errors() {
    let data = [0xab_u8, 0xcd];

    // source too short
    let mut read = BitReader::new(MemByteReader::new(&data));
    let mut write = BitWriter::new(MemByteWriterVec::new(Vec::<u8>::new()));
    match read.copy_to(&mut write, 17) {
        Err(CopyError::ReadError(Error::EndOfStream)) => (),
        v => panic!("Expected a read error, got: {:?}", v),
    }
    assert_eq!(write.into_inner().into_inner(), data);

    // destination too short
    let mut read = BitReader::new(MemByteReader::new(&data));
    let mut write = BitWriter::new(MemByteWriter::new([0_u8; 1]));
    match write.copy_from(&mut read, 16) {
        Err(CopyError::WriteError(Error::ShortTransfer {
            expected: 1,
            actual: 0,
        })) => (),
        v => panic!("Expected a write error, got: {:?}", v),
    }
    assert_eq!(write.into_inner().into_inner(), [0xab]);
}
