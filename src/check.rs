//! Self-test over embedded fixtures.
//!
//! The command-line validator runs [`self_test`] before touching any input.

use either::Either::{Left, Right};
use thiserror::Error;

use crate::{
    avec::{Cursor, Writer, count_slice},
    sans::Decoder,
};

/// A failed fixture.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum SelfTestError {
    /// Decoding the fixture's bytes did not produce its code points.
    #[error("Decoding fixture '{0}' failed.")]
    Decode(&'static str),
    /// Encoding the fixture's code points did not produce its bytes.
    #[error("Encoding fixture '{0}' failed.")]
    Encode(&'static str),
}

struct Fixture {
    name: &'static str,
    bytes: &'static [u8],
    codepoints: &'static [u32],
}

#[rustfmt::skip]
const FIXTURES: &[Fixture] = &[
    Fixture { name: "Latin A", bytes: &[0x41], codepoints: &[0x41] },
    Fixture { name: "Latin o with diaeresis", bytes: &[0xC3, 0xB6], codepoints: &[0xF6] },
    Fixture { name: "Cyrillic Zhe", bytes: &[0xD0, 0x96], codepoints: &[0x416] },
    Fixture { name: "Euro sign", bytes: &[0xE2, 0x82, 0xAC], codepoints: &[0x20AC] },
    Fixture { name: "G clef", bytes: &[0xF0, 0x9D, 0x84, 0x9E], codepoints: &[0x1D11E] },
    Fixture {
        name: "Mixed",
        bytes: &[0x41, 0xF0, 0x9D, 0x84, 0x9E, 0x41, 0xC3, 0xB6],
        codepoints: &[0x41, 0x1D11E, 0x41, 0xF6],
    },
    Fixture {
        name: "Everything",
        bytes: &[0x41, 0xC3, 0xB6, 0xD0, 0x96, 0xE2, 0x82, 0xAC, 0xF0, 0x9D, 0x84, 0x9E],
        codepoints: &[0x41, 0xF6, 0x416, 0x20AC, 0x1D11E],
    },
];

/// Run every fixture through the counter, the cursor, the state tokens, and
/// the writer.
pub fn self_test() -> Result<(), SelfTestError> {
    for fixture in FIXTURES {
        let decode = SelfTestError::Decode(fixture.name);

        if !decodes(fixture) {
            Err(decode)?;
        }
        if !decodes_by_token(fixture).unwrap_or(false) {
            Err(decode)?;
        }
        if !encodes(fixture) {
            Err(SelfTestError::Encode(fixture.name))?;
        }
    }

    Ok(())
}

fn decodes(fixture: &Fixture) -> bool {
    if count_slice(fixture.bytes) != Ok(fixture.codepoints.len()) {
        return false;
    }

    let mut cursor = Cursor::new(fixture.bytes);
    for &expected in fixture.codepoints {
        if cursor.next_code_point() != Ok(expected) {
            return false;
        }
    }

    cursor.is_empty() && cursor.next_code_point() == Ok(0)
}

fn decodes_by_token(fixture: &Fixture) -> Option<bool> {
    let mut bytes = fixture.bytes.iter().copied();
    let mut expected = fixture.codepoints.iter().copied();

    while let Some(byte) = bytes.next() {
        let mut successor = Decoder.advance(byte).ok()?;

        let codepoint = loop {
            successor = match successor {
                Left(codepoint) => break codepoint,
                Right(state) => state.advance(bytes.next()?).ok()?,
            };
        };

        if expected.next() != Some(codepoint) {
            return Some(false);
        }
    }

    Some(expected.next().is_none())
}

fn encodes(fixture: &Fixture) -> bool {
    let mut buf = [0; 16];
    let mut w = Writer::new(&mut buf);

    for &codepoint in fixture.codepoints {
        if w.append(codepoint).is_err() {
            return false;
        }
    }

    w.written() == fixture.bytes
}
