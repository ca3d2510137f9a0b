//! Capability traits decoupling the interpreter from hardware
//!
//! These traits define the interface between the interpreter core and the
//! physical transport (UART, USB CDC, or a host-side buffer in tests).

pub mod io;

pub use io::{BusySignal, ByteSink, ByteSource, Fmt, NoBusy, Transport};
