/*
 * SPDX-FileCopyrightText: 2023 Tommaso Fontana
 * SPDX-FileCopyrightText: 2023 Inria
 * SPDX-FileCopyrightText: 2023 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use crate::error::Error;
use crate::traits::*;
#[cfg(feature = "mem_dbg")]
use mem_dbg::{MemDbg, MemSize};

/// An implementation of [`BitRead`] for a [`ByteRead`].
///
/// The reader keeps a single byte of look-ahead: bits not yet returned sit
/// at the top of the staging byte, and a new byte is requested from the
/// backend only when the staging byte is empty. Nothing is read at
/// construction.
///
/// [`read_byte`](BitRead::read_byte) on an aligned reader hands out a fresh
/// byte of the backend directly, leaving the staging byte empty; on a
/// misaligned reader it combines the staged bits with the top bits of a
/// fresh byte and stages the rest, so the alignment does not change.
///
/// # Example
/// ```
/// use bitcursor::prelude::*;
///
/// let mut bit_reader = BitReader::new(MemByteReader::new(b"hi"));
///
/// // 'h' is 0b0110_1000
/// assert!(!bit_reader.read_bit().unwrap());
/// assert!(bit_reader.read_bit().unwrap());
/// assert!(bit_reader.read_bit().unwrap());
/// // the next eight bits straddle the two bytes
/// assert_eq!(bit_reader.read_byte().unwrap(), 0b0100_0011);
/// assert_eq!(bit_reader.bits_in_buffer(), 5);
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "mem_dbg", derive(MemDbg, MemSize))]
pub struct BitReader<BR> {
    /// The [`ByteRead`] used to fill the staging byte.
    backend: BR,
    /// The staging byte. Valid bits are left-justified, the others are zero.
    byte: u8,
    /// Number of valid bits in the staging byte, in `[0..8]`.
    bits_in_buffer: u8,
}

impl<BR> BitReader<BR> {
    /// Create a new [`BitReader`] around a [`ByteRead`].
    #[must_use]
    pub fn new(backend: BR) -> Self {
        Self {
            backend,
            byte: 0,
            bits_in_buffer: 0,
        }
    }

    /// Return the number of bits read from the backend but not yet returned.
    #[inline(always)]
    pub fn bits_in_buffer(&self) -> usize {
        self.bits_in_buffer as usize
    }

    /// Return true if the next bit returned will be the highest bit of a
    /// byte of the backend.
    #[inline(always)]
    pub fn is_aligned(&self) -> bool {
        self.bits_in_buffer == 0
    }

    pub fn get_ref(&self) -> &BR {
        &self.backend
    }

    pub fn get_mut(&mut self) -> &mut BR {
        &mut self.backend
    }

    /// Return the backend. Buffered bits are lost.
    pub fn into_inner(self) -> BR {
        self.backend
    }

    #[inline(always)]
    fn check_state(&self) {
        #[cfg(feature = "checks")]
        {
            assert!(self.bits_in_buffer <= 8);
            assert_eq!(
                self.byte & (0xff_u8.checked_shr(self.bits_in_buffer as u32).unwrap_or(0)),
                0,
                "stale bits below the valid ones in the staging byte"
            );
        }
    }
}

impl<BR: ByteRead> BitReader<BR> {
    /// Read exactly one byte from the backend, without touching the state.
    #[inline]
    fn fetch(&mut self) -> Result<u8, Error<BR::Error>> {
        let mut buf = [0_u8; 1];
        match self.backend.read_bytes(&mut buf).map_err(Error::Io)? {
            1 => Ok(buf[0]),
            0 => Err(Error::EndOfStream),
            actual => Err(Error::ShortTransfer {
                expected: 1,
                actual,
            }),
        }
    }
}

impl<BR: ByteRead> BitRead for BitReader<BR> {
    type Error = Error<BR::Error>;

    #[inline]
    fn read_bit(&mut self) -> Result<bool, Self::Error> {
        if self.bits_in_buffer == 0 {
            self.byte = self.fetch()?;
            self.bits_in_buffer = 8;
        }
        let bit = self.byte & 0x80 != 0;
        self.byte <<= 1;
        self.bits_in_buffer -= 1;
        self.check_state();
        Ok(bit)
    }

    #[inline]
    fn read_byte(&mut self) -> Result<u8, Self::Error> {
        if self.bits_in_buffer == 0 {
            return self.fetch();
        }
        let new_byte = self.fetch()?;
        // the staged bits are the top of the result, the fresh byte
        // provides the rest and its unused low bits are staged
        let result = self.byte | (new_byte >> self.bits_in_buffer);
        self.byte = new_byte << (8 - self.bits_in_buffer);
        self.check_state();
        Ok(result)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::impls::MemByteReader;
    use std::collections::VecDeque;

    macro_rules! assert_eos {
        ($br: ident) => {
            match $br.read_bit() {
                Err(Error::EndOfStream) => (),
                v => panic!("Expected end of stream, got: {:?}", v),
            }
        };
    }

    /// A source replaying a script of results.
    struct Scripted(VecDeque<Result<Vec<u8>, std::io::Error>>);

    impl ByteRead for Scripted {
        type Error = std::io::Error;

        fn read_bytes(&mut self, buf: &mut [u8]) -> Result<usize, Self::Error> {
            match self.0.pop_front() {
                None => Ok(0),
                Some(Err(e)) => Err(e),
                Some(Ok(bytes)) => {
                    // deliberately ignore the buffer length
                    let n = bytes.len().min(buf.len());
                    buf[..n].copy_from_slice(&bytes[..n]);
                    Ok(bytes.len())
                }
            }
        }
    }

    #[test]
    fn test_read_bit() {
        let mut br = BitReader::new(MemByteReader::new([0x55_u8, 0xaa]));
        assert_eq!(br.bits_in_buffer(), 0);

        for expected in [
            false, true, false, true, false, true, false, true, true, false, true, false, true,
            false, true, false,
        ] {
            assert_eq!(br.read_bit().unwrap(), expected);
        }
        assert!(br.is_aligned());

        assert_eos!(br);
    }

    #[test]
    fn test_read_byte() {
        let mut br = BitReader::new(MemByteReader::new([0x55_u8, 0xaa, 0x55, 0xaa]));

        assert_eq!(br.read_byte().unwrap(), 0x55);
        // aligned reads do not stage anything
        assert_eq!(br.bits_in_buffer(), 0);
        assert_eq!(br.read_byte().unwrap(), 0xaa);

        assert!(!br.read_bit().unwrap());
        assert!(br.read_bit().unwrap());

        assert_eq!(br.read_byte().unwrap(), 0x56);
        assert_eq!(br.bits_in_buffer(), 6);

        for expected in [true, false, true, false, true, false] {
            assert_eq!(br.read_bit().unwrap(), expected);
        }

        assert_eos!(br);
    }

    #[test]
    fn test_end_of_stream_keeps_staged_bits() {
        let mut br = BitReader::new(MemByteReader::new([0b1010_0000_u8]));
        assert!(br.read_bit().unwrap());
        assert!(br.read_byte().unwrap_err().is_end_of_stream());
        // the seven staged bits are still there
        assert_eq!(br.bits_in_buffer(), 7);
        assert!(!br.read_bit().unwrap());
        assert!(br.read_bit().unwrap());
    }

    #[test]
    fn test_empty_source() {
        let mut br = BitReader::new(MemByteReader::new([0_u8; 0]));
        assert!(br.read_byte().unwrap_err().is_end_of_stream());
        assert_eos!(br);
    }

    #[test]
    fn test_short_transfer() {
        let mut br = BitReader::new(Scripted(VecDeque::from([Ok(vec![0x01, 0x02])])));
        match br.read_bit() {
            Err(Error::ShortTransfer {
                expected: 1,
                actual: 2,
            }) => (),
            v => panic!("Expected short transfer, got: {:?}", v),
        }
    }

    #[test]
    fn test_backend_error() {
        let mut br = BitReader::new(Scripted(VecDeque::from([
            Ok(vec![0xff]),
            Err(std::io::Error::new(std::io::ErrorKind::BrokenPipe, "gone")),
        ])));
        assert_eq!(br.read_byte().unwrap(), 0xff);
        match br.read_bit() {
            Err(Error::Io(e)) => assert_eq!(e.kind(), std::io::ErrorKind::BrokenPipe),
            v => panic!("Expected backend error, got: {:?}", v),
        }
    }
}
