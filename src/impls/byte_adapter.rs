/*
 * SPDX-FileCopyrightText: 2023 Tommaso Fontana
 * SPDX-FileCopyrightText: 2023 Inria
 * SPDX-FileCopyrightText: 2023 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use crate::traits::*;
#[cfg(feature = "mem_dbg")]
use mem_dbg::{MemDbg, MemSize};
use std::io::{Read, Write};

/// An adapter from [`Read`] and [`Write`] to [`ByteRead`] and [`ByteWrite`],
/// respectively.
///
/// Instances of this struct can be created using [`ByteAdapter::new`]. They
/// turn every standard source or destination of bytes (such as
/// [`std::fs::File`], [`std::io::BufReader`], sockets, etc.) into a backend
/// for [`BitReader`](crate::impls::BitReader) and
/// [`BitWriter`](crate::impls::BitWriter).
///
/// Calls are forwarded as they are: a read returning zero bytes is the end
/// of the stream, and errors (including [`std::io::ErrorKind::Interrupted`])
/// are returned to the caller without retrying.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "mem_dbg", derive(MemDbg, MemSize))]
pub struct ByteAdapter<B> {
    backend: B,
}

impl<B> ByteAdapter<B> {
    /// Create a new ByteAdapter
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    pub fn get_ref(&self) -> &B {
        &self.backend
    }

    pub fn into_inner(self) -> B {
        self.backend
    }
}

impl<B: Read> ByteRead for ByteAdapter<B> {
    type Error = std::io::Error;

    #[inline(always)]
    fn read_bytes(&mut self, buf: &mut [u8]) -> Result<usize, std::io::Error> {
        self.backend.read(buf)
    }
}

impl<B: Write> ByteWrite for ByteAdapter<B> {
    type Error = std::io::Error;

    #[inline(always)]
    fn write_bytes(&mut self, buf: &[u8]) -> Result<usize, std::io::Error> {
        self.backend.write(buf)
    }

    fn flush(&mut self) -> Result<(), std::io::Error> {
        self.backend.flush()
    }
}
