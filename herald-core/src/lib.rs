//! Transport-agnostic command interpretation
//!
//! This crate contains the interpreter core shared by every Herald front
//! end: capability traits for the byte transport, a fixed command registry,
//! the arity-checking dispatcher, and the interactive line console.
//!
//! The core has zero hardware dependency. A platform provides "read next
//! available byte, if any" and "write bytes" (plus an optional busy line),
//! and the interpreter does the rest:
//!
//! ```text
//! byte -> framer -> (complete frame) -> tokenizer -> registry lookup
//!      -> arity check -> handler invocation -> output via sink
//! ```
//!
//! One frame is fully processed before the next byte is consumed, so the
//! pipeline is single-threaded and poll-driven by construction.

#![no_std]
#![deny(unsafe_code)]

pub mod config;
pub mod console;
pub mod dispatch;
pub mod registry;
pub mod traits;

pub use config::{ConsoleConfig, MAX_FRAME_LEN, MAX_TOKENS};
pub use console::Console;
pub use dispatch::{run_command, Outcome};
pub use registry::{Command, Handler, Registry, RegistryError};
pub use traits::{BusySignal, ByteSink, ByteSource, NoBusy, Transport};
