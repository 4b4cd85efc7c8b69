//! Slice-based decoder implementation.

use thiserror::Error;

use crate::sans::{State, Status, step};

/// Errors occurring while decoding from a slice.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum Error {
    /// A byte that does not fit the sequence.
    #[error("Malformed byte ({byte:#04x}) at offset {offset}.")]
    Malformed { offset: usize, byte: u8 },
    /// The slice ends in the middle of a code point.
    #[error("Truncated sequence starting at offset {offset}.")]
    Truncated { offset: usize },
}

/// Validate a slice and count its code points.
///
/// This method is also re-exported as `utf8dfa::avec::count_slice`.
pub fn count(r: &[u8]) -> Result<usize, Error> {
    let (mut state, mut codepoint) = (State::ACCEPT, 0);
    let mut n = 0;
    let mut start = 0; // Offset of the code point being decoded.

    for (i, &byte) in r.iter().enumerate() {
        let (next, value, status) = step(state, codepoint, byte);
        (state, codepoint) = (next, value);

        match status {
            Status::Complete => {
                n += 1;
                start = i + 1;
            }
            Status::Incomplete => {}
            Status::Rejected => return Err(Error::Malformed { offset: i, byte }),
        }
    }

    if !state.is_accept() {
        Err(Error::Truncated { offset: start })?;
    }

    Ok(n)
}

/// Determine whether a slice is well-formed UTF-8.
pub fn is_valid(r: &[u8]) -> bool {
    count(r).is_ok()
}

/// A position within a slice, advanced one code point at a time.
#[derive(Clone, Debug)]
pub struct Cursor<'a> {
    r: &'a [u8],
    i: usize,
}

impl<'a> Cursor<'a> {
    /// Create a cursor at the start of a slice.
    pub fn new(r: &'a [u8]) -> Self {
        Self { r, i: 0 }
    }

    /// Get the offset of the next byte.
    pub fn offset(&self) -> usize {
        self.i
    }

    /// Get the number of bytes not yet consumed.
    pub fn remaining(&self) -> usize {
        self.r.len() - self.i
    }

    /// Determine whether all bytes have been consumed.
    pub fn is_empty(&self) -> bool {
        self.remaining() == 0
    }

    /// Get the bytes not yet consumed.
    pub fn as_slice(&self) -> &'a [u8] {
        &self.r[self.i..]
    }

    /// Decode the next code point and move past it.
    ///
    /// Once all bytes have been consumed, this method returns zero. Since zero
    /// is also the value of U+0000, use [`Cursor::is_empty`] to tell the two
    /// apart, or loop over [`Cursor::code_points`] instead.
    ///
    /// After an error, the cursor stays put. Decoding should not continue.
    pub fn next_code_point(&mut self) -> Result<u32, Error> {
        let (mut state, mut codepoint) = (State::ACCEPT, 0);

        for (j, &byte) in self.as_slice().iter().enumerate() {
            let (next, value, status) = step(state, codepoint, byte);
            (state, codepoint) = (next, value);

            match status {
                Status::Complete => {
                    self.i += j + 1;
                    return Ok(codepoint);
                }
                Status::Incomplete => {}
                Status::Rejected => {
                    return Err(Error::Malformed {
                        offset: self.i + j,
                        byte,
                    });
                }
            }
        }

        if !self.is_empty() {
            Err(Error::Truncated { offset: self.i })?;
        }

        Ok(0)
    }

    /// Turn this cursor into an iterator over the remaining code points.
    pub fn code_points(self) -> CodePoints<'a> {
        CodePoints {
            cursor: self,
            failed: false,
        }
    }
}

/// An iterator over the code points of a slice.
///
/// Iteration ends with the slice, or after the first error.
#[derive(Clone, Debug)]
pub struct CodePoints<'a> {
    cursor: Cursor<'a>,
    failed: bool,
}

impl CodePoints<'_> {
    /// Get the offset of the next byte.
    pub fn offset(&self) -> usize {
        self.cursor.offset()
    }
}

impl Iterator for CodePoints<'_> {
    type Item = Result<u32, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed || self.cursor.is_empty() {
            return None;
        }

        let result = self.cursor.next_code_point();
        self.failed = result.is_err();

        Some(result)
    }
}
