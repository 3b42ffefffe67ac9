/*
 * SPDX-FileCopyrightText: 2023 Inria
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use crate::traits::*;
use log::debug;

/// A wrapper over a [`BitRead`] that logs at debug level all the
/// operations performed, together with their results.
#[derive(Debug, Clone)]
pub struct DbgBitRead<BR: BitRead> {
    reader: BR,
}

impl<BR: BitRead> DbgBitRead<BR> {
    pub fn new(reader: BR) -> Self {
        Self { reader }
    }

    pub fn into_inner(self) -> BR {
        self.reader
    }
}

impl<BR: BitRead> BitRead for DbgBitRead<BR> {
    type Error = BR::Error;

    fn read_bit(&mut self) -> Result<bool, Self::Error> {
        match self.reader.read_bit() {
            Ok(bit) => {
                debug!("read_bit(): {}", bit as u8);
                Ok(bit)
            }
            Err(e) => {
                debug!("read_bit() failed: {}", e);
                Err(e)
            }
        }
    }

    fn read_byte(&mut self) -> Result<u8, Self::Error> {
        match self.reader.read_byte() {
            Ok(byte) => {
                debug!("read_byte(): {:#04x}", byte);
                Ok(byte)
            }
            Err(e) => {
                debug!("read_byte() failed: {}", e);
                Err(e)
            }
        }
    }
}

/// A wrapper over a [`BitWrite`] that logs at debug level all the
/// operations performed.
#[derive(Debug, Clone)]
pub struct DbgBitWrite<BW: BitWrite> {
    writer: BW,
}

impl<BW: BitWrite> DbgBitWrite<BW> {
    pub fn new(writer: BW) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> BW {
        self.writer
    }
}

impl<BW: BitWrite> BitWrite for DbgBitWrite<BW> {
    type Error = BW::Error;

    fn write_bit(&mut self, bit: bool) -> Result<(), Self::Error> {
        debug!("write_bit({})", bit as u8);
        self.writer.write_bit(bit).inspect_err(|e| {
            debug!("write_bit({}) failed: {}", bit as u8, e);
        })
    }

    fn write_byte(&mut self, byte: u8) -> Result<(), Self::Error> {
        debug!("write_byte({:#04x})", byte);
        self.writer.write_byte(byte).inspect_err(|e| {
            debug!("write_byte({:#04x}) failed: {}", byte, e);
        })
    }

    fn flush(&mut self, pad: bool) -> Result<(), Self::Error> {
        debug!("flush({})", pad as u8);
        self.writer.flush(pad).inspect_err(|e| {
            debug!("flush({}) failed: {}", pad as u8, e);
        })
    }
}
