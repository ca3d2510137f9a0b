//! Sentence link interpreter
//!
//! Byte-at-a-time framer for checksummed sentences, feeding the shared
//! registry dispatch from `herald-core`. Compared to the interactive
//! console there is no backspace handling, no bell, and no prompt; echo
//! is all-or-nothing via the silent flag, and every failure emits one
//! structured `$PXERR` reply.

use core::fmt::Write;

use heapless::Vec;

use herald_core::config::MAX_FRAME_LEN;
use herald_core::dispatch::{run_command, Outcome};
use herald_core::registry::Registry;
use herald_core::traits::{BusySignal, ByteSink, Fmt, NoBusy, Transport};

use crate::checksum::{ChecksumProvider, FixedChecksum};
use crate::sentence::{split_sentence, SentenceError};

/// Talker prefix on error replies
pub const ERROR_PREFIX: &str = "PXERR";

/// Fixed messages carried in `$PXERR` replies
pub const ERR_TOO_FEW_ARGS: &str = "Too few arguments";
pub const ERR_TOO_MANY_ARGS: &str = "Too many arguments";
pub const ERR_UNKNOWN_COMMAND: &str = "Unknown command";
pub const ERR_MISSING_CHECKSUM: &str = "Missing checksum";
pub const ERR_SENTENCE_TOO_LONG: &str = "Sentence too long";

/// Sentence link configuration
#[derive(Debug, Clone)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct LinkConfig {
    /// Suppress echo of incoming bytes
    pub silent: bool,
    /// Drop incoming carriage returns instead of treating them as line ends
    pub drop_cr: bool,
    /// Line terminator for outgoing replies
    pub newline: &'static str,
    /// Frame length limit; clamped to [`MAX_FRAME_LEN`]
    pub max_len: usize,
}

impl Default for LinkConfig {
    fn default() -> Self {
        Self {
            silent: false,
            drop_cr: false,
            newline: "\r\n",
            max_len: MAX_FRAME_LEN,
        }
    }
}

/// Checksummed-protocol interpreter
///
/// Owns its frame buffer; the transport is borrowed per call. The
/// checksum provider stamps outgoing replies only. Incoming checksum
/// text is parsed off the frame but not verified, matching the peer
/// devices this protocol was built against.
pub struct SentenceLink<'t, B: BusySignal = NoBusy, C: ChecksumProvider = FixedChecksum> {
    registry: Registry<'t>,
    config: LinkConfig,
    checksum: C,
    buffer: Vec<u8, MAX_FRAME_LEN>,
    overflowed: bool,
    busy: B,
}

impl<'t> SentenceLink<'t, NoBusy, FixedChecksum> {
    /// Create a link with no busy line and the observed `*00` reply stamp
    pub fn new(registry: Registry<'t>, config: LinkConfig) -> Self {
        Self::with_parts(registry, config, NoBusy, FixedChecksum::default())
    }
}

impl<'t, B: BusySignal, C: ChecksumProvider> SentenceLink<'t, B, C> {
    /// Create a link with an explicit busy line and checksum policy
    pub fn with_parts(registry: Registry<'t>, mut config: LinkConfig, busy: B, checksum: C) -> Self {
        config.max_len = config.max_len.min(MAX_FRAME_LEN);
        Self {
            registry,
            config,
            checksum,
            buffer: Vec::new(),
            overflowed: false,
            busy,
        }
    }

    /// Active configuration
    pub fn config(&self) -> &LinkConfig {
        &self.config
    }

    /// Drain all pending bytes from the source
    ///
    /// Returns the outcome of the last frame completed during this poll,
    /// if any frame completed at all.
    pub fn poll(&mut self, io: &mut impl Transport) -> Option<Outcome> {
        let mut last = None;
        while let Some(byte) = io.read() {
            if let Some(outcome) = self.rx(io, byte) {
                last = Some(outcome);
            }
        }
        last
    }

    /// Feed one received byte through the framer
    ///
    /// Returns `Some` when this byte completed a frame.
    pub fn rx(&mut self, io: &mut impl Transport, byte: u8) -> Option<Outcome> {
        match byte {
            b'\r' if self.config.drop_cr => None,
            b'\r' | b'\n' => {
                if !self.config.silent {
                    io.write_str(self.config.newline);
                }
                let outcome = self.finish_frame(io);
                self.buffer.clear();
                self.overflowed = false;
                Some(outcome)
            }
            0x20..=0x7E => {
                if !self.config.silent {
                    io.write(&[byte]);
                }
                if self.buffer.len() >= self.config.max_len || self.buffer.push(byte).is_err() {
                    // Byte dropped, state intact; reported when the frame
                    // terminates.
                    self.overflowed = true;
                }
                None
            }
            _ => None,
        }
    }

    /// Tokenize, validate, and dispatch a completed frame
    fn finish_frame(&mut self, io: &mut impl Transport) -> Outcome {
        let Self {
            registry,
            config,
            checksum,
            buffer,
            overflowed,
            busy,
        } = self;

        if *overflowed {
            write_error(io, config, checksum, ERR_SENTENCE_TOO_LONG);
            return Outcome::BufferOverflow;
        }

        // The framer admits printable ASCII only, so this cannot fail.
        let line = core::str::from_utf8(buffer).unwrap_or("");

        // Checksum presence is validated before any registry lookup
        let sentence = match split_sentence(line) {
            Ok(sentence) => sentence,
            Err(SentenceError::MissingChecksum) => {
                write_error(io, config, checksum, ERR_MISSING_CHECKSUM);
                return Outcome::MissingChecksum;
            }
        };

        // split_sentence yields at least one field
        let (name, args) = match sentence.fields.split_first() {
            Some((name, args)) => (*name, args),
            None => {
                write_error(io, config, checksum, ERR_UNKNOWN_COMMAND);
                return Outcome::UnknownCommand;
            }
        };

        let cmd = match registry.find(name) {
            Some(cmd) => cmd,
            None => {
                write_error(io, config, checksum, ERR_UNKNOWN_COMMAND);
                return Outcome::UnknownCommand;
            }
        };

        let outcome = run_command(cmd, io, busy, args);
        match outcome {
            Outcome::TooFewArgs => write_error(io, config, checksum, ERR_TOO_FEW_ARGS),
            Outcome::TooManyArgs => write_error(io, config, checksum, ERR_TOO_MANY_ARGS),
            _ => {}
        }
        outcome
    }
}

/// Write one `$body*CS` sentence with the given terminator
///
/// Also usable by handlers that reply in sentence form.
pub fn write_sentence(
    out: &mut dyn ByteSink,
    newline: &str,
    checksum: &dyn ChecksumProvider,
    body: &str,
) {
    let sum = checksum.sum(body.as_bytes());
    let _ = write!(Fmt(out), "${}*{:02X}{}", body, sum, newline);
}

/// Emit one structured error reply
fn write_error(
    out: &mut dyn ByteSink,
    config: &LinkConfig,
    checksum: &dyn ChecksumProvider,
    message: &str,
) {
    let mut body: heapless::String<96> = heapless::String::new();
    let _ = write!(body, "{},{}", ERROR_PREFIX, message);
    write_sentence(out, config.newline, checksum, &body);
}
