/*
 * SPDX-FileCopyrightText: 2023 Inria
 * SPDX-FileCopyrightText: 2023 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use crate::prelude::*;
use alloc::vec::Vec;
use arbitrary::Arbitrary;

#[derive(Arbitrary, Debug, Clone)]
pub struct FuzzCase {
    pub commands: Vec<RandomCommand>,
}

#[derive(Arbitrary, Debug, Clone, Copy)]
pub enum RandomCommand {
    WriteBit(bool),
    WriteByte(u8),
    Flush(bool),
}

/// Write the commands, then read them back with the same granularity.
pub fn harness(data: FuzzCase) {
    let mut writer = BitWriter::new(MemByteWriterVec::new(Vec::<u8>::new()));
    // bits written so far, padding included
    let mut pos = 0_usize;

    for command in data.commands.iter() {
        match *command {
            RandomCommand::WriteBit(bit) => {
                writer.write_bit(bit).unwrap();
                pos += 1;
            }
            RandomCommand::WriteByte(byte) => {
                writer.write_byte(byte).unwrap();
                pos += 8;
            }
            RandomCommand::Flush(pad) => {
                writer.flush(pad).unwrap();
                pos = pos.next_multiple_of(8);
            }
        }
        assert_eq!(writer.pending_bits(), pos % 8);
        assert_eq!(writer.get_ref().len(), pos / 8);
    }

    let total = pos;
    let buffer = writer.finish(false).unwrap().into_inner();
    assert_eq!(buffer.len(), total.div_ceil(8));

    let mut reader = BitReader::new(MemByteReader::new(&buffer));
    let mut pos = 0_usize;

    for command in data.commands.iter() {
        match *command {
            RandomCommand::WriteBit(bit) => {
                assert_eq!(reader.read_bit().unwrap(), bit, "bit at position {}", pos);
                pos += 1;
            }
            RandomCommand::WriteByte(byte) => {
                assert_eq!(
                    reader.read_byte().unwrap(),
                    byte,
                    "byte at position {}",
                    pos
                );
                pos += 8;
            }
            RandomCommand::Flush(pad) => {
                while pos % 8 != 0 {
                    assert_eq!(reader.read_bit().unwrap(), pad, "padding at position {}", pos);
                    pos += 1;
                }
            }
        }
        assert_eq!(reader.bits_in_buffer(), (8 - pos % 8) % 8);
    }

    // final padding
    while pos % 8 != 0 {
        assert!(!reader.read_bit().unwrap());
        pos += 1;
    }
    assert!(reader.read_bit().unwrap_err().is_end_of_stream());
    assert!(reader.read_byte().unwrap_err().is_end_of_stream());
}
