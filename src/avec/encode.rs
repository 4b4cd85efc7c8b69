//! Encoding scalar values as UTF-8.

use thiserror::Error;

/// Errors occurring while encoding.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum Error {
    /// The value is past the last Unicode code point.
    #[error("Code point {0:#x} is past U+10FFFF.")]
    OutOfRange(u32),
    /// The output slice cannot hold the encoding and one spare byte.
    #[error("Encoding needs {needed} bytes plus one spare, but only {remaining} remain.")]
    Capacity { needed: usize, remaining: usize },
}

/// The largest Unicode code point.
pub const MAX: u32 = 0x10FFFF;

/// Determine whether a value is within the Unicode code point range.
///
/// **This check does not exclude surrogates (U+D800 to U+DFFF).** They pass
/// here and are encoded by [`encode`] and [`Writer::append`], even though the
/// decoder rejects the resulting bytes.
pub const fn is_valid_scalar(codepoint: u32) -> bool {
    codepoint <= MAX
}

/// Get the number of bytes encoding a value.
pub const fn encoded_len(codepoint: u32) -> usize {
    match codepoint {
        0..0x80 => 1,
        0x80..0x800 => 2,
        0x800..0x10000 => 3,
        _ => 4,
    }
}

// 00000000 -- 0000007F: 0xxxxxxx
// 00000080 -- 000007FF: 110xxxxx 10xxxxxx
// 00000800 -- 0000FFFF: 1110xxxx 10xxxxxx 10xxxxxx
// 00010000 -- 0010FFFF: 11110xxx 10xxxxxx 10xxxxxx 10xxxxxx

/// Encode a single value.
///
/// Returns a buffer holding the encoding in its leading bytes, and the number
/// of those bytes.
pub fn encode(codepoint: u32) -> Result<([u8; 4], usize), Error> {
    if !is_valid_scalar(codepoint) {
        Err(Error::OutOfRange(codepoint))?;
    }

    let c = codepoint;
    let len = encoded_len(c);

    let r = match len {
        1 => [c as u8, 0, 0, 0],
        2 => [lead(0xC0, 0x1F, c >> 6), tail(c), 0, 0],
        3 => [lead(0xE0, 0x0F, c >> 12), tail(c >> 6), tail(c), 0],
        _ => [lead(0xF0, 0x07, c >> 18), tail(c >> 12), tail(c >> 6), tail(c)],
    };

    Ok((r, len))
}

fn lead(marker: u8, mask: u32, bits: u32) -> u8 {
    marker | (bits & mask) as u8
}

fn tail(bits: u32) -> u8 {
    0x80 | (bits & 0x3F) as u8
}

/// A position within an output slice, advanced one code point at a time.
///
/// The writer always keeps one byte of the slice spare, e.g., for a
/// terminating NUL. A slice of length `n` thus holds at most `n - 1` encoded
/// bytes.
#[derive(Debug)]
pub struct Writer<'a> {
    w: &'a mut [u8],
    i: usize,
}

impl<'a> Writer<'a> {
    /// Create a writer at the start of an output slice.
    pub fn new(w: &'a mut [u8]) -> Self {
        Self { w, i: 0 }
    }

    /// Get the offset of the next byte to write.
    pub fn position(&self) -> usize {
        self.i
    }

    /// Get the number of bytes not yet written, including the spare byte.
    pub fn remaining(&self) -> usize {
        self.w.len() - self.i
    }

    /// Get the bytes written so far.
    pub fn written(&self) -> &[u8] {
        &self.w[..self.i]
    }

    /// Give up the writer, keeping the bytes written so far.
    pub fn into_written(self) -> &'a [u8] {
        let Self { w, i } = self;
        &w[..i]
    }

    /// Append the encoding of a value.
    ///
    /// On error, nothing is written.
    pub fn append(&mut self, codepoint: u32) -> Result<(), Error> {
        let (r, needed) = encode(codepoint)?;

        let remaining = self.remaining();
        if remaining <= needed {
            Err(Error::Capacity { needed, remaining })?;
        }

        self.w[self.i..self.i + needed].copy_from_slice(&r[..needed]);
        self.i += needed;

        Ok(())
    }
}
