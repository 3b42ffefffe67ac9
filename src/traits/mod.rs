/*
 * SPDX-FileCopyrightText: 2023 Tommaso Fontana
 * SPDX-FileCopyrightText: 2023 Inria
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

/*!

Traits

[`ByteRead`] and [`ByteWrite`] are the capabilities the cursors need from
their source and sink; [`BitRead`] and [`BitWrite`] are the bit-level
operations the cursors (and the wrappers in [`utils`](crate::utils))
provide.

*/

mod bit_stream;
pub use bit_stream::*;

mod byte_stream;
pub use byte_stream::*;
