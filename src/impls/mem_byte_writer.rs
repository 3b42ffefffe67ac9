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

/// An implementation of [`ByteWrite`] for a mutable slice of memory.
///
/// Once the slice is full, writes accept zero bytes, which
/// [`BitWriter`](crate::impls::BitWriter) reports as a short transfer.
///
/// # Example
/// ```
/// use bitcursor::prelude::*;
///
/// let mut bytes = [0_u8; 2];
/// let mut byte_writer = MemByteWriter::new(&mut bytes);
///
/// assert_eq!(byte_writer.write_bytes(&[0x68]).unwrap(), 1);
/// assert_eq!(byte_writer.byte_pos(), 1);
/// assert_eq!(byte_writer.write_bytes(&[0x69, 0x21]).unwrap(), 1);
/// // no room left
/// assert_eq!(byte_writer.write_bytes(&[0x21]).unwrap(), 0);
/// assert_eq!(bytes, [0x68, 0x69]);
/// ```
#[derive(Debug, PartialEq)]
#[cfg_attr(feature = "mem_dbg", derive(MemDbg, MemSize))]
pub struct MemByteWriter<B: AsMut<[u8]>> {
    data: B,
    byte_index: usize,
}

impl<B: AsMut<[u8]>> MemByteWriter<B> {
    /// Create a new [`MemByteWriter`] writing from the start of `data`.
    #[must_use]
    pub fn new(data: B) -> Self {
        Self {
            data,
            byte_index: 0,
        }
    }

    /// Return the index of the next byte to be written.
    #[inline(always)]
    pub fn byte_pos(&self) -> usize {
        self.byte_index
    }

    pub fn into_inner(self) -> B {
        self.data
    }
}

impl<B: AsMut<[u8]>> ByteWrite for MemByteWriter<B> {
    type Error = Infallible;

    #[inline]
    fn write_bytes(&mut self, buf: &[u8]) -> Result<usize, Infallible> {
        let data = &mut self.data.as_mut()[self.byte_index..];
        let n = buf.len().min(data.len());
        data[..n].copy_from_slice(&buf[..n]);
        self.byte_index += n;
        Ok(n)
    }

    fn flush(&mut self) -> Result<(), Infallible> {
        Ok(())
    }
}

/// An implementation of [`ByteWrite`] for a mutable [`Vec<u8>`].
///
/// Bytes are always appended, so writes never fall short.
///
/// # Example
/// ```
/// use bitcursor::prelude::*;
///
/// let mut byte_writer = MemByteWriterVec::new(Vec::<u8>::new());
/// assert_eq!(byte_writer.write_bytes(b"hi").unwrap(), 2);
/// assert_eq!(byte_writer.into_inner(), b"hi");
/// ```
#[derive(Debug, PartialEq)]
#[cfg(feature = "alloc")]
#[cfg_attr(feature = "mem_dbg", derive(MemDbg, MemSize))]
pub struct MemByteWriterVec<B: AsMut<alloc::vec::Vec<u8>>> {
    data: B,
}

#[cfg(feature = "alloc")]
impl<B: AsMut<alloc::vec::Vec<u8>>> MemByteWriterVec<B> {
    /// Create a new [`MemByteWriterVec`] appending to `data`.
    #[must_use]
    pub fn new(data: B) -> Self {
        Self { data }
    }

    pub fn into_inner(self) -> B {
        self.data
    }
}

#[cfg(feature = "alloc")]
impl<B: AsMut<alloc::vec::Vec<u8>> + AsRef<alloc::vec::Vec<u8>>> MemByteWriterVec<B> {
    /// Return the number of bytes in the vector.
    pub fn len(&self) -> usize {
        self.data.as_ref().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(feature = "alloc")]
impl<B: AsMut<alloc::vec::Vec<u8>>> ByteWrite for MemByteWriterVec<B> {
    type Error = Infallible;

    #[inline]
    fn write_bytes(&mut self, buf: &[u8]) -> Result<usize, Infallible> {
        self.data.as_mut().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> Result<(), Infallible> {
        Ok(())
    }
}
