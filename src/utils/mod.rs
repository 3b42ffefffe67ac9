/*
 * SPDX-FileCopyrightText: 2023 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

/*!

Debug helpers.

[`CountBitRead`] and [`CountBitWrite`] keep track of the number
of bits read or written to a [`BitRead`](crate::traits::BitRead)
and [`BitWrite`](crate::traits::BitWrite), respectively.

[`DbgBitRead`] and [`DbgBitWrite`] log, using the [`log`] facade, all
operations performed on a [`BitRead`](crate::traits::BitRead) or
[`BitWrite`](crate::traits::BitWrite).

*/

mod count;
pub use count::*;

mod dbg;
pub use dbg::*;
