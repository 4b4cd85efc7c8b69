use either::Either::{Left, Right};
use utf8dfa::sans::{
    Decoder, State, Status,
    decoder::SequenceError,
    step,
    table::{Class, class_of},
};

fn feed(bytes: &[u8]) -> (State, u32, Status) {
    let mut last = (State::ACCEPT, 0, Status::Complete);
    for &byte in bytes {
        last = step(last.0, last.1, byte);
    }
    last
}

#[test]
fn ascii_decodes_to_itself() {
    for byte in 0x00..0x80u8 {
        assert_eq!(
            step(State::ACCEPT, 0, byte),
            (State::ACCEPT, byte as u32, Status::Complete)
        );
    }
}

#[test]
fn multi_byte_fixtures() {
    let cases: [(&[u8], u32); 4] = [
        (&[0xC3, 0xB6], 0xF6),
        (&[0xD0, 0x96], 0x416),
        (&[0xE2, 0x82, 0xAC], 0x20AC),
        (&[0xF0, 0x9D, 0x84, 0x9E], 0x1D11E),
    ];

    for (bytes, expected) in cases {
        let (init, last) = bytes.split_at(bytes.len() - 1);

        let (state, _, status) = feed(init);
        assert_eq!(status, Status::Incomplete);
        assert_eq!(state.needed(), 1);

        let (state, codepoint, status) = feed(bytes);
        assert_eq!(status, Status::Complete);
        assert!(state.is_accept());
        assert_eq!(codepoint, expected, "decoding {bytes:x?} then {last:x?}");
    }
}

#[test]
fn needed_counts_down() {
    let (state, _, _) = feed(&[0xF0]);
    assert_eq!(state.needed(), 3);
    let (state, _, _) = feed(&[0xF0, 0x9D]);
    assert_eq!(state.needed(), 2);
    let (state, _, _) = feed(&[0xE2]);
    assert_eq!(state.needed(), 2);
    let (state, _, _) = feed(&[0xC3]);
    assert_eq!(state.needed(), 1);
    assert_eq!(State::ACCEPT.needed(), 0);
    assert_eq!(State::REJECT.needed(), 0);
}

#[test]
fn forbidden_leads_reject_immediately() {
    for byte in [0xC0, 0xC1].into_iter().chain(0xF5..=0xFF) {
        assert_eq!(class_of(byte), Class::FORBIDDEN);
        let (state, _, status) = step(State::ACCEPT, 0, byte);
        assert_eq!(status, Status::Rejected, "byte {byte:#04x}");
        assert!(state.is_reject());
    }
}

#[test]
fn continuation_bytes_cannot_lead() {
    for byte in 0x80..=0xBF {
        assert!(class_of(byte).is_continuation());
        assert!(!class_of(byte).is_lead());
        assert_eq!(step(State::ACCEPT, 0, byte).2, Status::Rejected);
    }
}

#[test]
fn restricted_second_bytes_reject() {
    // Overlong, surrogate, and past U+10FFFF forms.
    for bytes in [
        [0xE0, 0x80],
        [0xE0, 0x9F],
        [0xED, 0xA0],
        [0xED, 0xBF],
        [0xF0, 0x80],
        [0xF0, 0x8F],
        [0xF4, 0x90],
        [0xF4, 0xBF],
    ] {
        assert_eq!(feed(&bytes).2, Status::Rejected, "bytes {bytes:x?}");
    }
}

#[test]
fn rejection_is_sticky() {
    let (state, codepoint, status) = feed(&[0x41, 0xC0]);
    assert_eq!(status, Status::Rejected);

    for byte in 0..=0xFF {
        let (next, _, status) = step(state, codepoint, byte);
        assert_eq!(status, Status::Rejected, "byte {byte:#04x}");
        assert_eq!(next, State::REJECT);
    }
}

#[test]
fn status_codes() {
    assert_eq!(Status::Rejected.code(), -1);
    assert_eq!(Status::Complete.code(), 0);
    assert!(Status::Incomplete.code() > 0);
    assert_eq!(feed(&[0xE2]).2.code(), 1);
}

#[test]
fn tokens_decode_euro_sign() {
    let Ok(Right(state)) = Decoder.advance(0xE2) else {
        panic!("expected a trail state");
    };
    assert_eq!(state.needed(), 2);

    let Ok(Right(state)) = state.advance(0x82) else {
        panic!("expected a trail state");
    };
    assert_eq!(state.needed(), 1);

    assert!(matches!(state.advance(0xAC), Ok(Left(0x20AC))));
}

#[test]
fn tokens_decode_ascii() {
    assert!(matches!(Decoder.advance(b'A'), Ok(Left(0x41))));
}

#[test]
fn tokens_classify_errors() {
    assert!(matches!(
        Decoder.advance(0x80),
        Err(SequenceError::UnexpectedContinuation(0x80))
    ));
    assert!(matches!(
        Decoder.advance(0xC0),
        Err(SequenceError::Forbidden(0xC0))
    ));

    let Ok(Right(state)) = Decoder.advance(0xE0) else {
        panic!("expected a trail state");
    };
    assert!(matches!(
        state.advance(0x80),
        Err(SequenceError::Unexpected {
            byte: 0x80,
            needed: 2
        })
    ));
}
