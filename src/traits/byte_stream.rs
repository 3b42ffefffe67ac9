/*
 * SPDX-FileCopyrightText: 2023 Tommaso Fontana
 * SPDX-FileCopyrightText: 2023 Inria
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use core::error::Error;

/// Sequential, streaming byte reads.
///
/// This is the only capability [`BitReader`](crate::impls::BitReader)
/// needs from its source, which always asks for exactly one byte.
pub trait ByteRead {
    type Error: Error + Send + Sync + 'static;

    /// Read up to `buf.len()` bytes into `buf` and return the number of
    /// bytes read.
    ///
    /// Returning zero for a nonempty buffer means that the source is
    /// exhausted.
    fn read_bytes(&mut self, buf: &mut [u8]) -> Result<usize, Self::Error>;
}

/// Sequential, streaming byte writes.
///
/// This is the only capability [`BitWriter`](crate::impls::BitWriter)
/// needs from its sink, which always emits exactly one byte.
pub trait ByteWrite {
    type Error: Error + Send + Sync + 'static;

    /// Write up to `buf.len()` bytes from `buf` and return the number of
    /// bytes written.
    fn write_bytes(&mut self, buf: &[u8]) -> Result<usize, Self::Error>;

    /// Push written bytes to the underlying device, if any.
    fn flush(&mut self) -> Result<(), Self::Error>;
}

impl<T: ByteRead + ?Sized> ByteRead for &mut T {
    type Error = T::Error;

    #[inline(always)]
    fn read_bytes(&mut self, buf: &mut [u8]) -> Result<usize, Self::Error> {
        (**self).read_bytes(buf)
    }
}

impl<T: ByteWrite + ?Sized> ByteWrite for &mut T {
    type Error = T::Error;

    #[inline(always)]
    fn write_bytes(&mut self, buf: &[u8]) -> Result<usize, Self::Error> {
        (**self).write_bytes(buf)
    }

    #[inline(always)]
    fn flush(&mut self) -> Result<(), Self::Error> {
        (**self).flush()
    }
}
