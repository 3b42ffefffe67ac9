/*
 * SPDX-FileCopyrightText: 2023 Tommaso Fontana
 * SPDX-FileCopyrightText: 2023 Inria
 * SPDX-FileCopyrightText: 2023 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use crate::error::Error;
use crate::traits::*;
use log::trace;
#[cfg(feature = "mem_dbg")]
use mem_dbg::{MemDbg, MemSize};

/// An implementation of [`BitWrite`] for a [`ByteWrite`].
///
/// Bits are accumulated from the top of a staging byte; as soon as the
/// staging byte is complete it is written to the backend, which must accept
/// it whole, and the staging byte is cleared. Nothing is written at
/// construction.
///
/// [`write_byte`](BitWrite::write_byte) completes the staging byte with the
/// top bits of its argument, writes it, and stages the remaining low bits,
/// so the alignment does not change.
///
/// Pending bits are not written on drop: call
/// [`flush`](BitWrite::flush) or [`finish`](BitWriter::finish) to pad and
/// write them.
///
/// If the backend fails, the operation that triggered the write has no
/// effect on the state of the writer.
///
/// # Example
/// ```
/// use bitcursor::prelude::*;
///
/// let mut bit_writer = BitWriter::new(MemByteWriterVec::new(Vec::<u8>::new()));
///
/// bit_writer.write_bit(false).unwrap();
/// bit_writer.write_bit(true).unwrap();
/// bit_writer.write_byte(0xff).unwrap();
/// assert_eq!(bit_writer.pending_bits(), 2);
/// bit_writer.flush(false).unwrap();
///
/// assert_eq!(bit_writer.into_inner().into_inner(), [0b0111_1111, 0b1100_0000]);
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "mem_dbg", derive(MemDbg, MemSize))]
pub struct BitWriter<BW> {
    /// The [`ByteWrite`] receiving complete bytes.
    backend: BW,
    /// The staging byte. Written bits are at the top, free slots are zero.
    byte: u8,
    /// Number of free slots at the bottom of the staging byte, in `[1..8]`.
    free_bits: u8,
}

impl<BW> BitWriter<BW> {
    /// Create a new [`BitWriter`] around a [`ByteWrite`].
    #[must_use]
    pub fn new(backend: BW) -> Self {
        Self {
            backend,
            byte: 0,
            free_bits: 8,
        }
    }

    /// Return the number of free bits in the staging byte.
    #[inline(always)]
    pub fn free_bits(&self) -> usize {
        self.free_bits as usize
    }

    /// Return the number of bits written but not yet passed to the backend.
    #[inline(always)]
    pub fn pending_bits(&self) -> usize {
        8 - self.free_bits as usize
    }

    /// Return true if no bits are pending.
    #[inline(always)]
    pub fn is_aligned(&self) -> bool {
        self.free_bits == 8
    }

    pub fn get_ref(&self) -> &BW {
        &self.backend
    }

    pub fn get_mut(&mut self) -> &mut BW {
        &mut self.backend
    }

    /// Return the backend. Pending bits are discarded.
    pub fn into_inner(self) -> BW {
        self.backend
    }

    #[inline(always)]
    fn check_state(&self) {
        #[cfg(feature = "checks")]
        {
            assert!((1..=8).contains(&self.free_bits));
            assert_eq!(
                self.byte & ((1_u16 << self.free_bits) - 1) as u8,
                0,
                "free slots of the staging byte are not zero"
            );
        }
    }
}

impl<BW: ByteWrite> BitWriter<BW> {
    /// Write exactly one byte to the backend.
    #[inline]
    fn emit(&mut self, byte: u8) -> Result<(), Error<BW::Error>> {
        match self.backend.write_bytes(&[byte]).map_err(Error::Io)? {
            1 => Ok(()),
            actual => Err(Error::ShortTransfer {
                expected: 1,
                actual,
            }),
        }
    }

    /// Pad with `pad`, flush the backend and return it.
    pub fn finish(mut self, pad: bool) -> Result<BW, Error<BW::Error>> {
        BitWrite::flush(&mut self, pad)?;
        ByteWrite::flush(&mut self.backend).map_err(Error::Io)?;
        Ok(self.backend)
    }
}

impl<BW: ByteWrite> BitWrite for BitWriter<BW> {
    type Error = Error<BW::Error>;

    #[inline]
    fn write_bit(&mut self, bit: bool) -> Result<(), Self::Error> {
        let byte = if bit {
            self.byte | (1 << (self.free_bits - 1))
        } else {
            self.byte
        };

        if self.free_bits == 1 {
            self.emit(byte)?;
            self.byte = 0;
            self.free_bits = 8;
        } else {
            self.byte = byte;
            self.free_bits -= 1;
        }
        self.check_state();
        Ok(())
    }

    #[inline]
    fn write_byte(&mut self, byte: u8) -> Result<(), Self::Error> {
        self.emit(self.byte | (byte >> (8 - self.free_bits)))?;
        // when aligned the whole byte has been written and nothing is staged
        self.byte = ((byte as u16) << self.free_bits) as u8;
        self.check_state();
        Ok(())
    }

    fn flush(&mut self, pad: bool) -> Result<(), Self::Error> {
        if self.is_aligned() {
            return Ok(());
        }
        trace!("padding {} bits with {}", self.free_bits, pad as u8);
        let padding = if pad {
            ((1_u16 << self.free_bits) - 1) as u8
        } else {
            0
        };
        self.emit(self.byte | padding)?;
        self.byte = 0;
        self.free_bits = 8;
        self.check_state();
        Ok(())
    }
}
