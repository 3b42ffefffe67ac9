/*
 * SPDX-FileCopyrightText: 2023 Tommaso Fontana
 * SPDX-FileCopyrightText: 2023 Inria
 * SPDX-FileCopyrightText: 2023 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

/// Errors returned by [`BitReader`](crate::impls::BitReader) and
/// [`BitWriter`](crate::impls::BitWriter).
///
/// The type parameter is the error type of the underlying
/// [`ByteRead`](crate::traits::ByteRead) or
/// [`ByteWrite`](crate::traits::ByteWrite).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error<E> {
    /// The source is exhausted.
    ///
    /// This is the expected way a read loop terminates, and it is
    /// never returned by writes.
    #[error("end of stream")]
    EndOfStream,
    /// The backend transferred a number of bytes different from the one
    /// requested without reporting an error.
    #[error("short transfer: expected {expected} byte(s), got {actual}")]
    ShortTransfer { expected: usize, actual: usize },
    /// The backend failed.
    #[error("backend error: {0}")]
    Io(#[source] E),
}

impl<E> Error<E> {
    /// Return true if this is [`Error::EndOfStream`].
    #[inline(always)]
    pub fn is_end_of_stream(&self) -> bool {
        matches!(self, Error::EndOfStream)
    }

    /// Return the backend error, if any.
    pub fn into_backend(self) -> Option<E> {
        match self {
            Error::Io(e) => Some(e),
            _ => None,
        }
    }

    /// Apply a function to the backend error, if any.
    pub fn map_backend<F, G: FnOnce(E) -> F>(self, f: G) -> Error<F> {
        match self {
            Error::EndOfStream => Error::EndOfStream,
            Error::ShortTransfer { expected, actual } => Error::ShortTransfer { expected, actual },
            Error::Io(e) => Error::Io(f(e)),
        }
    }
}

#[cfg(feature = "std")]
impl From<Error<std::io::Error>> for std::io::Error {
    fn from(error: Error<std::io::Error>) -> Self {
        use std::io::ErrorKind;
        match error {
            Error::EndOfStream => std::io::Error::new(ErrorKind::UnexpectedEof, "end of stream"),
            Error::ShortTransfer { actual: 0, .. } => {
                std::io::Error::new(ErrorKind::WriteZero, error.to_string())
            }
            Error::ShortTransfer { .. } => std::io::Error::other(error.to_string()),
            Error::Io(e) => e,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use core::convert::Infallible;

    #[test]
    fn test_display() {
        let cases: [(Error<Infallible>, &str); 2] = [
            (Error::EndOfStream, "end of stream"),
            (
                Error::ShortTransfer {
                    expected: 1,
                    actual: 0,
                },
                "short transfer: expected 1 byte(s), got 0",
            ),
        ];
        for (error, expected) in cases {
            assert_eq!(error.to_string(), expected);
        }
    }

    #[cfg(feature = "std")]
    #[test]
    fn test_into_io_error() {
        use std::io::ErrorKind;
        let e: std::io::Error = Error::<std::io::Error>::EndOfStream.into();
        assert_eq!(e.kind(), ErrorKind::UnexpectedEof);
        let e: std::io::Error = Error::<std::io::Error>::ShortTransfer {
            expected: 1,
            actual: 0,
        }
        .into();
        assert_eq!(e.kind(), ErrorKind::WriteZero);
        let e: std::io::Error =
            Error::Io(std::io::Error::new(ErrorKind::BrokenPipe, "gone")).into();
        assert_eq!(e.kind(), ErrorKind::BrokenPipe);
    }

    #[test]
    fn test_map_backend() {
        let e: Error<u8> = Error::Io(3);
        assert_eq!(e.map_backend(u32::from), Error::Io(3_u32));
        assert!(Error::<u8>::EndOfStream.into_backend().is_none());
        assert!(Error::<u8>::EndOfStream.is_end_of_stream());
    }
}
