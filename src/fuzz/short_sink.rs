/*
 * SPDX-FileCopyrightText: 2023 Inria
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use super::round_trip::RandomCommand;
use crate::prelude::*;
use alloc::vec;
use alloc::vec::Vec;
use arbitrary::Arbitrary;

#[derive(Arbitrary, Debug, Clone)]
pub struct FuzzCase {
    pub capacity: u8,
    pub commands: Vec<RandomCommand>,
}

/// Write the commands both on a growable and on a fixed-size sink: the
/// latter must agree with the former until it fills up, and then fail with
/// a short transfer.
pub fn harness(data: FuzzCase) {
    let capacity = data.capacity as usize;
    let mut reference = BitWriter::new(MemByteWriterVec::new(Vec::<u8>::new()));
    let mut limited = BitWriter::new(MemByteWriter::new(vec![0_u8; capacity]));

    for command in data.commands.iter() {
        let (expected, result) = match *command {
            RandomCommand::WriteBit(bit) => (reference.write_bit(bit), limited.write_bit(bit)),
            RandomCommand::WriteByte(byte) => {
                (reference.write_byte(byte), limited.write_byte(byte))
            }
            RandomCommand::Flush(pad) => (reference.flush(pad), limited.flush(pad)),
        };
        expected.unwrap();

        match result {
            Ok(()) => {
                assert_eq!(limited.pending_bits(), reference.pending_bits());
                assert_eq!(limited.get_ref().byte_pos(), reference.get_ref().len());
            }
            Err(Error::ShortTransfer {
                expected: 1,
                actual: 0,
            }) => {
                assert_eq!(limited.get_ref().byte_pos(), capacity);
                break;
            }
            Err(e) => panic!("Unexpected error {:?}", e),
        }
    }

    let written = limited.get_ref().byte_pos();
    let limited = limited.into_inner().into_inner();
    let reference = reference.into_inner().into_inner();
    assert_eq!(&limited[..written], &reference[..written]);
}
