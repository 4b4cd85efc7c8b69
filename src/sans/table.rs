//! Constant tables driving the automaton.

use super::State;

/// The class of a byte, reflecting its structural role in UTF-8.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Class(u8);

impl Class {
    /// `0x00..=0x7F`
    pub const ASCII: Self = Self(0);
    /// `0xC0`, `0xC1`, and `0xF5..=0xFF`, which never occur in UTF-8.
    pub const FORBIDDEN: Self = Self(8);

    /// Determine whether bytes of this class have the form `10xxxxxx`.
    pub const fn is_continuation(self) -> bool {
        matches!(self.0, 1 | 7 | 9)
    }

    /// Determine whether bytes of this class may start a code point.
    pub const fn is_lead(self) -> bool {
        !self.is_continuation() && self.0 != Self::FORBIDDEN.0
    }

    /// Mask the payload bits of a lead byte of this class.
    ///
    /// Shifting `0xFF` by the class number strips the length-indicating high
    /// bits for every lead byte class. The classes for `0xE0` and `0xF0` leave
    /// no bits, as those bytes carry none.
    pub(super) const fn lead_payload(self, byte: u8) -> u32 {
        (0xFF >> self.0) & byte as u32
    }
}

/// Look up the class of a byte.
pub const fn class_of(byte: u8) -> Class {
    Class(CLASSES[byte as usize])
}

/// Look up the state following `state` on a byte of class `class`.
pub const fn next_state(state: State, class: Class) -> State {
    State(TRANSITIONS[state.0 as usize * COLUMNS + class.0 as usize])
}

const COLUMNS: usize = 16;

#[rustfmt::skip]
const CLASSES: [u8; 256] = [
    // 0  1  2  3  4  5  6  7  8  9  A  B  C  D  E  F
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, // 0
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, // 1
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, // 2
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, // 3
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, // 4
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, // 5
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, // 6
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, // 7
    1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, // 8
    9, 9, 9, 9, 9, 9, 9, 9, 9, 9, 9, 9, 9, 9, 9, 9, // 9
    7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, // A
    7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, // B
    8, 8, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, // C
    2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, // D
   10, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 4, 3, 3, // E
   11, 6, 6, 6, 5, 8, 8, 8, 8, 8, 8, 8, 8, 8, 8, 8, // F
];

// Rows are states, columns are classes. State 0 accepts, state 1 rejects.
// States 2 and 3 expect one and two arbitrary continuation bytes, state 7 three.
// States 4, 5, 6, and 8 follow E0, ED, F0, and F4 and restrict the second byte,
// so that overlong forms, surrogates, and values past U+10FFFF are rejected.
#[rustfmt::skip]
const TRANSITIONS: [u8; 9 * COLUMNS] = [
    // 0  1  2  3  4  5  6  7  8  9  A  B  C  D  E  F
    0, 1, 2, 3, 5, 8, 7, 1, 1, 1, 4, 6, 1, 1, 1, 1, // 0
    1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, // 1
    1, 0, 1, 1, 1, 1, 1, 0, 1, 0, 1, 1, 1, 1, 1, 1, // 2
    1, 2, 1, 1, 1, 1, 1, 2, 1, 2, 1, 1, 1, 1, 1, 1, // 3
    1, 1, 1, 1, 1, 1, 1, 2, 1, 1, 1, 1, 1, 1, 1, 1, // 4
    1, 2, 1, 1, 1, 1, 1, 1, 1, 2, 1, 1, 1, 1, 1, 1, // 5
    1, 1, 1, 1, 1, 1, 1, 3, 1, 3, 1, 1, 1, 1, 1, 1, // 6
    1, 3, 1, 1, 1, 1, 1, 3, 1, 3, 1, 1, 1, 1, 1, 1, // 7
    1, 3, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, // 8
];
