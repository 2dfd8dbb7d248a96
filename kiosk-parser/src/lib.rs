//! Kiosk Token Parsers
//!
//! This crate implements the two input-driven state machines behind the
//! kiosk REPLs. Both share one architecture:
//!
//! - Streaming: exactly one whitespace-delimited token per `advance` call
//! - Stateful: the current state and any accumulated request live in the
//!   parser between calls
//! - Deterministic: transitions are a pure function of (state, token)
//! - Effect-free: transitions return semantic [`action`]s; printing and
//!   inventory mutation are the driver's job
//!
//! Every error path returns the machine to a continuable state; no input,
//! however malformed, can wedge or panic a parser.

pub mod action;
pub mod converter;
pub mod machine;

pub use action::{ConvertAction, MachineAction};
pub use converter::ConvertParser;
pub use machine::MachineParser;
