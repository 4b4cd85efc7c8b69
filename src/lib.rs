#![no_std]

//! A table-driven UTF-8 validator, decoder, and encoder.
//!
//! Utf8dfa decodes UTF-8 one byte at a time with a deterministic finite
//! automaton (after Bjoern Hoehrmann's design), and builds a small set of
//! buffer operations on top of it: counting code points, walking a buffer one
//! code point at a time, and appending the encoding of a scalar value to an
//! output buffer.
//!
//! Most users should begin with the functions in the [`avec`] module. If these
//! prove insufficient (for example when bytes arrive one at a time from a
//! device), drive the automaton directly as described in the [`sans`] module.
//!
//! ## Cargo Features
//!
//! The following crate feature flags are available:
//!
//! - `std`: enable reader-based counting (default).
//! - `cli`: build the `utf8dfa` command-line validator (default).

pub mod avec;
pub mod check;
pub mod sans;
