//! State tokens decoding one code point at a time.

use either::Either::{self, Left, Right};
use thiserror::Error;

use super::{State, Status, step, table::class_of};

/// An error advancing over a byte.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum SequenceError {
    /// A byte that never occurs in UTF-8.
    #[error("Byte {0:#04x} never occurs in UTF-8.")]
    Forbidden(u8),
    /// A continuation byte where a code point should start.
    #[error("Continuation byte {0:#04x} does not follow a lead byte.")]
    UnexpectedContinuation(u8),
    /// A byte that does not continue the current code point. This includes
    /// continuation bytes that would produce an overlong form, a surrogate, or
    /// a value past U+10FFFF.
    #[error("Byte {byte:#04x} does not continue the sequence ({needed} more expected).")]
    Unexpected { byte: u8, needed: u8 },
}

/// State token to decode the first byte of a code point.
#[derive(Debug, Default)]
pub struct Lead;

impl Lead {
    /// Transition to another state by decoding the first byte of a code point.
    ///
    /// Returns the code point if the byte is ASCII, or a successor state token
    /// otherwise.
    pub fn advance(self, byte: u8) -> Result<Either<u32, Trail>, SequenceError> {
        let (state, codepoint, status) = step(State::ACCEPT, 0, byte);

        match status {
            Status::Complete => Ok(Left(codepoint)),
            Status::Incomplete => Ok(Right(Trail { state, codepoint })),
            Status::Rejected if class_of(byte).is_continuation() => {
                Err(SequenceError::UnexpectedContinuation(byte))
            }
            Status::Rejected => Err(SequenceError::Forbidden(byte)),
        }
    }
}

/// State token to decode a continuation byte.
#[derive(Debug)]
pub struct Trail {
    state: State,
    codepoint: u32,
}

impl Trail {
    /// Get the number of continuation bytes still expected, including the next.
    pub fn needed(&self) -> u8 {
        self.state.needed()
    }

    /// Transition to another state by decoding a continuation byte.
    ///
    /// Returns the code point if the byte completes it, or a successor state
    /// token otherwise.
    pub fn advance(self, byte: u8) -> Result<Either<u32, Trail>, SequenceError> {
        let needed = self.needed();
        let (state, codepoint, status) = step(self.state, self.codepoint, byte);

        match status {
            Status::Complete => Ok(Left(codepoint)),
            Status::Incomplete => Ok(Right(Self { state, codepoint })),
            Status::Rejected => Err(SequenceError::Unexpected { byte, needed }),
        }
    }
}
