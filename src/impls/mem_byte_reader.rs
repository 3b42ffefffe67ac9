/*
 * SPDX-FileCopyrightText: 2023 Tommaso Fontana
 * SPDX-FileCopyrightText: 2023 Inria
 * SPDX-FileCopyrightText: 2023 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use crate::traits::*;
use core::convert::Infallible;
#[cfg(feature = "mem_dbg")]
use mem_dbg::{MemDbg, MemSize};

/// An implementation of [`ByteRead`] for a slice of memory.
///
/// Reads past the end of the slice return zero bytes, which
/// [`BitReader`](crate::impls::BitReader) reports as the end of the stream.
///
/// # Example
/// ```
/// use bitcursor::prelude::*;
///
/// let data = [0x68_u8, 0x69];
/// let mut byte_reader = MemByteReader::new(&data);
/// let mut buf = [0; 1];
///
/// assert_eq!(byte_reader.read_bytes(&mut buf).unwrap(), 1);
/// assert_eq!(buf[0], 0x68);
/// assert_eq!(byte_reader.byte_pos(), 1);
/// assert_eq!(byte_reader.read_bytes(&mut buf).unwrap(), 1);
/// assert_eq!(buf[0], 0x69);
/// // exhausted
/// assert_eq!(byte_reader.read_bytes(&mut buf).unwrap(), 0);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "mem_dbg", derive(MemDbg, MemSize))]
pub struct MemByteReader<B: AsRef<[u8]>> {
    data: B,
    byte_index: usize,
}

impl<B: AsRef<[u8]>> MemByteReader<B> {
    /// Create a new [`MemByteReader`] reading from the start of `data`.
    #[must_use]
    pub fn new(data: B) -> Self {
        Self {
            data,
            byte_index: 0,
        }
    }

    /// Return the index of the next byte to be read.
    #[inline(always)]
    pub fn byte_pos(&self) -> usize {
        self.byte_index
    }

    /// Return the number of bytes not yet read.
    pub fn remaining(&self) -> usize {
        self.data.as_ref().len() - self.byte_index
    }

    pub fn into_inner(self) -> B {
        self.data
    }
}

impl<B: AsRef<[u8]>> ByteRead for MemByteReader<B> {
    type Error = Infallible;

    #[inline]
    fn read_bytes(&mut self, buf: &mut [u8]) -> Result<usize, Infallible> {
        let data = &self.data.as_ref()[self.byte_index..];
        let n = buf.len().min(data.len());
        buf[..n].copy_from_slice(&data[..n]);
        self.byte_index += n;
        Ok(n)
    }
}
