//! Convenience interfaces for common decoding and encoding patterns.
//!
//! The functions in this module are suited to validating and walking byte
//! slices and readers, and to building UTF-8 from scalar values:
//!
//! - [`count_slice`] validates a slice and counts its code points.
//! - [`Cursor`] walks a slice one code point at a time.
//! - [`Writer`] appends the encoding of one scalar value at a time to an
//! output slice.
//! - [`count_reader`] validates and counts a reader's bytes as they arrive.
//!
//! All of them report errors as soon as the offending byte is seen, and treat
//! input ending in the middle of a code point as an error too.

pub mod encode;
#[cfg(feature = "std")]
pub mod reader;
pub mod slice;

pub use encode::{Writer, encode, is_valid_scalar};
#[cfg(feature = "std")]
pub use reader::count as count_reader;
pub use slice::{Cursor, count as count_slice};
