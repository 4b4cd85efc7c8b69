//! Internal finite-state machine for implementing decoders.
//!
//! This module is intended for applications that need fine control over
//! decoding, such as those receiving bytes one at a time from a device. See
//! [`crate::avec`] for implementations covering common decoding patterns.
//!
//! # Architecture
//!
//! The automaton is driven by two constant tables in the [`table`] module. The
//! first collapses the 256 byte values into a handful of classes reflecting
//! their role in UTF-8 (ASCII, continuation byte, each range of lead bytes, and
//! bytes that never occur). The second maps a state and a class to the next
//! state.
//!
//! Two interfaces sit on top of the tables:
//!
//! - [`step`] is the raw transition function. It threads an explicit
//! [`State`] and an accumulated code point through each call, and reports a
//! [`Status`]. The rejecting state is a sink: once entered, every further call
//! rejects again, whatever the byte.
//!
//! - The state tokens in the [`decoder`] module wrap the same transitions.
//! Call [`Decoder::advance`] with a byte to receive either a complete code
//! point or a [`decoder::Trail`] token awaiting continuation bytes. Tokens are
//! consumed on error, so a rejected sequence cannot be continued.
//!
//! Neither interface knows where a buffer ends. Callers must check for an
//! incomplete sequence once their input runs out.

mod automaton;
pub mod decoder;
pub mod table;

pub use automaton::{State, Status, step};
/// Entrypoint to the finite-state machine.
pub use decoder::Lead as Decoder;
