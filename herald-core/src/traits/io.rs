//! Byte-level I/O capability traits
//!
//! The interpreter core talks to the outside world exclusively through
//! these traits: a non-blocking byte source, an infallible byte sink, and
//! an optional out-of-band busy line. Chip HALs implement them over a
//! UART RX ring buffer and TX FIFO; host tests implement them over plain
//! in-memory buffers.

use core::fmt;

/// Non-blocking byte source
pub trait ByteSource {
    /// Check whether at least one byte is waiting to be read
    fn has_data(&self) -> bool;

    /// Read the next pending byte, if any
    fn read(&mut self) -> Option<u8>;
}

/// Byte sink
///
/// Sinks are infallible by contract. A transport whose TX path can fail is
/// expected to drop or buffer internally; nothing in the interpreter core
/// has a useful recovery path for a broken output line.
pub trait ByteSink {
    /// Write raw bytes to the sink
    fn write(&mut self, bytes: &[u8]);

    /// Write a string slice to the sink
    fn write_str(&mut self, s: &str) {
        self.write(s.as_bytes());
    }
}

/// Out-of-band busy indicator
///
/// Asserted for the duration of handler execution so an external peer
/// knows when it is safe to send the next command.
pub trait BusySignal {
    /// Assert or deassert the busy line
    fn set_signal(&mut self, active: bool);
}

impl<T: BusySignal + ?Sized> BusySignal for &mut T {
    fn set_signal(&mut self, active: bool) {
        (**self).set_signal(active);
    }
}

/// No-op busy signal for interpreters without a busy line
#[derive(Debug, Clone, Copy, Default)]
pub struct NoBusy;

impl BusySignal for NoBusy {
    fn set_signal(&mut self, _active: bool) {}
}

/// Combined transport interface
///
/// For transports that provide both RX and TX.
pub trait Transport: ByteSource + ByteSink {}

// Blanket implementation
impl<T: ByteSource + ByteSink> Transport for T {}

/// [`core::fmt::Write`] adapter over a byte sink
///
/// Lets presenters and handlers use `write!` for formatted output.
pub struct Fmt<'a>(pub &'a mut dyn ByteSink);

impl fmt::Write for Fmt<'_> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.0.write(s.as_bytes());
        Ok(())
    }
}
