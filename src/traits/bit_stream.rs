/*
 * SPDX-FileCopyrightText: 2023 Tommaso Fontana
 * SPDX-FileCopyrightText: 2023 Inria
 * SPDX-FileCopyrightText: 2023 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use core::error::Error;
use core::fmt::{Display, Formatter};

/// The error returned by the bit copy methods [`BitRead::copy_to`] and
/// [`BitWrite::copy_from`].
///
/// It can be a read or a write error, depending on which stream (source or
/// destination) generated the error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CopyError<RE: Error + Send + Sync + 'static, WE: Error + Send + Sync + 'static> {
    ReadError(RE),
    WriteError(WE),
}

impl<RE: Error + Send + Sync + 'static, WE: Error + Send + Sync + 'static> Display
    for CopyError<RE, WE>
{
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            CopyError::ReadError(e) => write!(f, "Read error while copying: {}", e),
            CopyError::WriteError(e) => write!(f, "Write error while copying: {}", e),
        }
    }
}

impl<RE: Error + Send + Sync + 'static, WE: Error + Send + Sync + 'static> Error
    for CopyError<RE, WE>
{
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            CopyError::ReadError(e) => Some(e),
            CopyError::WriteError(e) => Some(e),
        }
    }
}

/// Sequential, streaming bit-by-bit reads.
///
/// Bits are returned most significant first: the first bit of the stream
/// is the highest bit of its first byte. A `true` is a one, a `false` is a
/// zero.
pub trait BitRead {
    type Error: Error + Send + Sync + 'static;

    /// Read the next bit.
    fn read_bit(&mut self) -> Result<bool, Self::Error>;

    /// Read the next eight bits as a byte, whatever the current
    /// alignment. The first bit read is the highest bit of the result.
    fn read_byte(&mut self) -> Result<u8, Self::Error>;

    /// Copy `n` bits from this stream to a [`BitWrite`].
    ///
    /// Whole bytes are moved using [`read_byte`](BitRead::read_byte) and
    /// [`write_byte`](BitWrite::write_byte), the remaining bits one at a
    /// time.
    fn copy_to<W: BitWrite>(
        &mut self,
        bit_write: &mut W,
        mut n: u64,
    ) -> Result<(), CopyError<Self::Error, W::Error>> {
        while n >= 8 {
            let byte = self.read_byte().map_err(CopyError::ReadError)?;
            bit_write
                .write_byte(byte)
                .map_err(CopyError::WriteError)?;
            n -= 8;
        }
        for _ in 0..n {
            let bit = self.read_bit().map_err(CopyError::ReadError)?;
            bit_write.write_bit(bit).map_err(CopyError::WriteError)?;
        }
        Ok(())
    }
}

/// Sequential, streaming bit-by-bit writes.
///
/// Bits are written most significant first; a byte reaches the
/// underlying sink as soon as its eighth bit has been written.
pub trait BitWrite {
    type Error: Error + Send + Sync + 'static;

    /// Write a single bit.
    fn write_bit(&mut self, bit: bool) -> Result<(), Self::Error>;

    /// Write the eight bits of `byte`, highest first, whatever the current
    /// alignment.
    fn write_byte(&mut self, byte: u8) -> Result<(), Self::Error>;

    /// Complete the current partial byte, if any, by writing copies of
    /// `pad`.
    ///
    /// Exactly one byte reaches the sink if the stream was not aligned,
    /// none otherwise.
    fn flush(&mut self, pad: bool) -> Result<(), Self::Error>;

    /// Copy `n` bits from a [`BitRead`] to this stream.
    fn copy_from<R: BitRead>(
        &mut self,
        bit_read: &mut R,
        n: u64,
    ) -> Result<(), CopyError<R::Error, Self::Error>>
    where
        Self: Sized,
    {
        bit_read.copy_to(self, n)
    }
}

impl<T: BitRead + ?Sized> BitRead for &mut T {
    type Error = T::Error;

    #[inline(always)]
    fn read_bit(&mut self) -> Result<bool, Self::Error> {
        (**self).read_bit()
    }

    #[inline(always)]
    fn read_byte(&mut self) -> Result<u8, Self::Error> {
        (**self).read_byte()
    }
}

impl<T: BitWrite + ?Sized> BitWrite for &mut T {
    type Error = T::Error;

    #[inline(always)]
    fn write_bit(&mut self, bit: bool) -> Result<(), Self::Error> {
        (**self).write_bit(bit)
    }

    #[inline(always)]
    fn write_byte(&mut self, byte: u8) -> Result<(), Self::Error> {
        (**self).write_byte(byte)
    }

    #[inline(always)]
    fn flush(&mut self, pad: bool) -> Result<(), Self::Error> {
        (**self).flush(pad)
    }
}
