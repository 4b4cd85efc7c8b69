#![cfg(feature = "std")]

use std::io::{self, BufReader, Read};

use utf8dfa::{
    avec::{count_reader, reader},
    sans::decoder::SequenceError,
};

#[test]
fn count_fixtures() {
    let bytes: &[u8] = &[0x41, 0xF0, 0x9D, 0x84, 0x9E, 0x41, 0xC3, 0xB6];
    assert_eq!(count_reader(&mut &bytes[..]).unwrap(), 4);

    let mut empty: &[u8] = &[];
    assert_eq!(count_reader(&mut empty).unwrap(), 0);
}

#[test]
fn count_buffered_text() {
    let text = "Grüße aus Москва, 1 € pro 𝄞\n".repeat(100);
    let mut r = BufReader::new(text.as_bytes());
    assert_eq!(count_reader(&mut r).unwrap(), text.chars().count());
}

#[test]
fn decode_publishes_code_points() {
    let mut decoded = Vec::new();
    let n = reader::decode(&mut "A€\u{1D11E}".as_bytes(), |c| decoded.push(c)).unwrap();
    assert_eq!(n, 3);
    assert_eq!(decoded, [0x41, 0x20AC, 0x1D11E]);
}

#[test]
fn reports_offset_of_malformed_byte() {
    let err = count_reader(&mut &b"AB\xC0"[..]).unwrap_err();
    assert!(matches!(
        err,
        reader::Error::Malformed {
            offset: 2,
            source: SequenceError::Forbidden(0xC0)
        }
    ));
    assert_eq!(
        err.to_string(),
        "Malformed byte at offset 2: Byte 0xc0 never occurs in UTF-8."
    );

    let err = count_reader(&mut &b"A\xE2\x82A"[..]).unwrap_err();
    assert!(matches!(
        err,
        reader::Error::Malformed {
            offset: 3,
            source: SequenceError::Unexpected {
                byte: b'A',
                needed: 1
            }
        }
    ));
}

#[test]
fn reports_truncated_tail() {
    let err = count_reader(&mut &b"AB\xF0\x9D\x84"[..]).unwrap_err();
    assert!(matches!(err, reader::Error::Truncated { offset: 2 }));
}

#[test]
fn stops_at_first_error() {
    let mut decoded = Vec::new();
    let result = reader::decode(&mut &b"AB\x80CD"[..], |c| decoded.push(c));
    assert!(result.is_err());
    assert_eq!(decoded, [0x41, 0x42]);
}

struct Failing;

impl Read for Failing {
    fn read(&mut self, _: &mut [u8]) -> io::Result<usize> {
        Err(io::Error::other("broken pipe"))
    }
}

#[test]
fn forwards_io_errors() {
    let err = count_reader(&mut Failing).unwrap_err();
    assert!(matches!(err, reader::Error::Io(_)));
    assert_eq!(err.to_string(), "broken pipe");
}

struct Interrupted(bool, &'static [u8]);

impl Read for Interrupted {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        self.0 = !self.0;
        if self.0 {
            return Err(io::ErrorKind::Interrupted.into());
        }
        self.1.read(buf)
    }
}

#[test]
fn retries_interrupted_reads() {
    let mut r = Interrupted(false, "Жорж".as_bytes());
    assert_eq!(count_reader(&mut r).unwrap(), 4);
}
