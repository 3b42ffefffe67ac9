/*
 * SPDX-FileCopyrightText: 2023 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use crate::traits::*;
#[cfg(feature = "mem_dbg")]
use mem_dbg::{MemDbg, MemSize};

/// Wrapping struct that keeps track of written bits.
///
/// Only successful operations are counted; padding written by
/// [`flush`](BitWrite::flush) is counted too.
///
/// The padding is computed from the bits counted so far, so the wrapped
/// [`BitWrite`] must be aligned when it is wrapped.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "mem_dbg", derive(MemDbg, MemSize))]
pub struct CountBitWrite<BW: BitWrite> {
    bit_write: BW,
    /// The number of bits written so far on the underlying [`BitWrite`].
    pub bits_written: u64,
}

impl<BW: BitWrite> CountBitWrite<BW> {
    pub fn new(bit_write: BW) -> Self {
        Self {
            bit_write,
            bits_written: 0,
        }
    }

    pub fn into_inner(self) -> BW {
        self.bit_write
    }
}

impl<BW: BitWrite> BitWrite for CountBitWrite<BW> {
    type Error = BW::Error;

    fn write_bit(&mut self, bit: bool) -> Result<(), Self::Error> {
        self.bit_write.write_bit(bit)?;
        self.bits_written += 1;
        Ok(())
    }

    fn write_byte(&mut self, byte: u8) -> Result<(), Self::Error> {
        self.bit_write.write_byte(byte)?;
        self.bits_written += 8;
        Ok(())
    }

    fn flush(&mut self, pad: bool) -> Result<(), Self::Error> {
        self.bit_write.flush(pad)?;
        // pad up to the next byte boundary
        self.bits_written = self.bits_written.next_multiple_of(8);
        Ok(())
    }
}

/// Wrapping struct that keeps track of read bits.
///
/// Only successful operations are counted.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "mem_dbg", derive(MemDbg, MemSize))]
pub struct CountBitRead<BR: BitRead> {
    bit_read: BR,
    /// The number of bits read so far from the underlying [`BitRead`].
    pub bits_read: u64,
}

impl<BR: BitRead> CountBitRead<BR> {
    pub fn new(bit_read: BR) -> Self {
        Self {
            bit_read,
            bits_read: 0,
        }
    }

    pub fn into_inner(self) -> BR {
        self.bit_read
    }
}

impl<BR: BitRead> BitRead for CountBitRead<BR> {
    type Error = BR::Error;

    fn read_bit(&mut self) -> Result<bool, Self::Error> {
        let bit = self.bit_read.read_bit()?;
        self.bits_read += 1;
        Ok(bit)
    }

    fn read_byte(&mut self) -> Result<u8, Self::Error> {
        let byte = self.bit_read.read_byte()?;
        self.bits_read += 8;
        Ok(byte)
    }
}
