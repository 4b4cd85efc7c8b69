//! Reader-based decoder implementation.
//!
//! _Requires Cargo feature `std`._

use std::io::{Bytes, Read};

use either::Either::{Left, Right};
use thiserror::Error;

use crate::sans::{Decoder, decoder::SequenceError};

extern crate std;

/// Errors occurring while decoding from a reader.
#[derive(Debug, Error)]
pub enum Error {
    /// An error from the supplied reader.
    #[error(transparent)]
    Io(#[from] std::io::Error),
    /// A byte that does not fit the sequence.
    #[error("Malformed byte at offset {offset}: {source}")]
    Malformed {
        offset: usize,
        source: SequenceError,
    },
    /// The reader ends in the middle of a code point.
    #[error("Truncated sequence starting at offset {offset}.")]
    Truncated { offset: usize },
}

/// Decode code points from a reader, publishing each to a receiver.
///
/// Bytes are read one at a time. Wrap unbuffered readers, such as files or
/// standard input, in a [`std::io::BufReader`].
///
/// Returns the number of code points.
pub fn decode(r: &mut impl Read, mut o: impl FnMut(u32)) -> Result<usize, Error> {
    let r = &mut r.bytes();
    let i = &mut 0; // Counter of bytes read, used to report offsets.
    let mut n = 0;

    while let Some(byte) = take(r, i)? {
        let start = *i - 1;

        let mut successor = Decoder
            .advance(byte)
            .map_err(|source| Error::Malformed {
                offset: start,
                source,
            })?;

        let codepoint = loop {
            let state = match successor {
                Left(codepoint) => break codepoint,
                Right(state) => state,
            };

            let byte = take(r, i)?.ok_or(Error::Truncated { offset: start })?;

            successor = state.advance(byte).map_err(|source| Error::Malformed {
                offset: *i - 1,
                source,
            })?;
        };

        o(codepoint);
        n += 1;
    }

    Ok(n)
}

/// Validate a reader's bytes and count its code points.
///
/// This method is also re-exported as `utf8dfa::avec::count_reader`.
///
/// _Requires Cargo feature `std`._
pub fn count(r: &mut impl Read) -> Result<usize, Error> {
    decode(r, |_| ())
}

/// Take a single byte from a reader, advancing a counter. Returns `None` at
/// the end of input.
fn take<R: Read>(r: &mut Bytes<R>, i: &mut usize) -> Result<Option<u8>, Error> {
    let byte = r.next().transpose()?;

    if byte.is_some() {
        *i += 1;
    }

    Ok(byte)
}
