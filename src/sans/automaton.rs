use super::table::{class_of, next_state};

/// A state of the automaton.
///
/// Only [`State::ACCEPT`] can be named; every other state results from calling
/// [`step`]. Beyond accepting and rejecting, a state only tells how many
/// continuation bytes are still expected.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct State(pub(super) u8);

impl State {
    /// Ready for the first byte of a code point.
    pub const ACCEPT: Self = Self(0);
    /// The bytes seen so far are not UTF-8. There is no way out of this state.
    pub const REJECT: Self = Self(1);

    /// Determine whether the automaton is between code points.
    pub const fn is_accept(self) -> bool {
        self.0 == Self::ACCEPT.0
    }

    /// Determine whether the automaton has rejected its input.
    pub const fn is_reject(self) -> bool {
        self.0 == Self::REJECT.0
    }

    /// Get the number of continuation bytes needed to complete the current
    /// code point. Zero when accepting or rejecting.
    pub const fn needed(self) -> u8 {
        match self.0 {
            2 => 1,
            3..=5 => 2,
            6..=8 => 3,
            _ => 0,
        }
    }

    /// Classify this state.
    pub const fn status(self) -> Status {
        match self {
            Self::ACCEPT => Status::Complete,
            Self::REJECT => Status::Rejected,
            _ => Status::Incomplete,
        }
    }
}

impl Default for State {
    fn default() -> Self {
        Self::ACCEPT
    }
}

/// The outcome of a single [`step`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Status {
    /// A code point has just been completed.
    Complete,
    /// More continuation bytes are needed.
    Incomplete,
    /// The byte does not fit the sequence. Stop feeding bytes.
    Rejected,
}

impl Status {
    /// Get the status as a number: negative when rejected, zero when complete,
    /// and positive when incomplete.
    pub const fn code(self) -> i8 {
        match self {
            Self::Rejected => -1,
            Self::Complete => 0,
            Self::Incomplete => 1,
        }
    }
}

/// Feed one byte to the automaton.
///
/// Starting a session requires [`State::ACCEPT`] and a code point of zero.
/// Thereafter, pass back the state and code point returned by the previous
/// call. Once the status is [`Status::Complete`], the returned code point is
/// the decoded scalar value and the state is ready for the next code point.
///
/// Returns the successor state, the accumulated code point, and a status.
pub const fn step(state: State, codepoint: u32, byte: u8) -> (State, u32, Status) {
    let class = class_of(byte);

    let codepoint = if state.is_accept() {
        class.lead_payload(byte)
    } else {
        (byte as u32 & 0x3F) | (codepoint << 6)
    };

    let state = next_state(state, class);

    (state, codepoint, state.status())
}
