//! Interactive line console
//!
//! Byte-at-a-time line framer with backspace editing, a space-delimited
//! tokenizer, and prompt/echo handling, feeding the shared registry
//! dispatch. The console owns its line buffer and cursor, so multiple
//! consoles on independent transports never interfere; the transport is
//! borrowed per call and can live wherever the platform needs it.
//!
//! Frames are printable ASCII. Bytes outside `0x20..=0x7E` that are not
//! line terminators or backspace are discarded.

pub mod presenter;

use heapless::Vec;

use crate::config::{ConsoleConfig, MAX_FRAME_LEN, MAX_TOKENS};
use crate::dispatch::{run_command, Outcome};
use crate::registry::Registry;
use crate::traits::{BusySignal, NoBusy, Transport};

const BELL: u8 = 0x07;
const BACKSPACE: u8 = 0x08;
const DELETE: u8 = 0x7F;

/// Interactive console interpreter
pub struct Console<'t, B: BusySignal = NoBusy> {
    registry: Registry<'t>,
    config: ConsoleConfig,
    buffer: Vec<u8, MAX_FRAME_LEN>,
    overflowed: bool,
    busy: B,
}

impl<'t> Console<'t, NoBusy> {
    /// Create a console without a busy line
    pub fn new(registry: Registry<'t>, config: ConsoleConfig) -> Self {
        Self::with_busy(registry, config, NoBusy)
    }
}

impl<'t, B: BusySignal> Console<'t, B> {
    /// Create a console that asserts `busy` around handler execution
    pub fn with_busy(registry: Registry<'t>, mut config: ConsoleConfig, busy: B) -> Self {
        config.max_len = config.max_len.min(MAX_FRAME_LEN);
        Self {
            registry,
            config,
            buffer: Vec::new(),
            overflowed: false,
            busy,
        }
    }

    /// Active configuration
    pub fn config(&self) -> &ConsoleConfig {
        &self.config
    }

    /// The command table this console dispatches into
    pub fn registry(&self) -> &Registry<'t> {
        &self.registry
    }

    /// Print the startup banner (if any) and the first prompt
    pub fn greet(&self, io: &mut impl Transport) {
        if !self.config.silent {
            if let Some(banner) = self.config.banner {
                io.write_str(banner);
                io.write_str("\n");
            }
        }
        presenter::write_prompt(io, &self.config);
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
    /// Returns `Some` when this byte completed a frame. Empty frames
    /// redisplay the prompt and report nothing.
    pub fn rx(&mut self, io: &mut impl Transport, byte: u8) -> Option<Outcome> {
        if !self.collect(io, byte) {
            return None;
        }
        if !self.config.silent {
            io.write_str("\n");
        }
        let outcome = self.finish_frame(io);
        self.buffer.clear();
        self.overflowed = false;
        presenter::write_prompt(io, &self.config);
        outcome
    }

    /// Read one full line, busy-waiting on the source
    ///
    /// Suspension point: blocks with no timeout until a line terminator
    /// arrives. Callers needing responsiveness should use
    /// [`poll`](Self::poll) instead. Applies the same editing rules as
    /// the poll path but does not tokenize or dispatch the line; any
    /// partially collected frame is discarded on entry.
    pub fn read_line<'a>(&'a mut self, io: &mut impl Transport) -> &'a str {
        self.buffer.clear();
        self.overflowed = false;
        loop {
            if !io.has_data() {
                continue;
            }
            if let Some(byte) = io.read() {
                if self.collect(io, byte) {
                    break;
                }
            }
        }
        if !self.config.silent {
            io.write_str("\n");
        }
        core::str::from_utf8(&self.buffer).unwrap_or("")
    }

    /// Accumulate one byte; true when a line terminator arrived
    fn collect(&mut self, io: &mut impl Transport, byte: u8) -> bool {
        match byte {
            b'\r' if self.config.drop_cr => false,
            b'\r' | b'\n' => true,
            BACKSPACE | DELETE => {
                if !self.config.silent {
                    io.write(&[BACKSPACE]);
                }
                if self.buffer.pop().is_none() {
                    // At start of line: bell, plus a space to hold the
                    // visual column. The cursor never retreats past the
                    // buffer start.
                    if !self.config.silent {
                        io.write(&[BELL, b' ']);
                    }
                } else if !self.config.silent {
                    // Erase the echoed character
                    io.write(b" \x08");
                }
                false
            }
            0x20..=0x7E => {
                if self.buffer.len() < self.config.max_len && self.buffer.push(byte).is_ok() {
                    if !self.config.silent {
                        io.write(&[byte]);
                    }
                } else {
                    // Byte dropped, state intact; reported when the frame
                    // terminates.
                    self.overflowed = true;
                }
                false
            }
            _ => false,
        }
    }

    /// Tokenize and dispatch a completed frame
    fn finish_frame(&mut self, io: &mut impl Transport) -> Option<Outcome> {
        let Self {
            registry,
            config,
            buffer,
            overflowed,
            busy,
        } = self;

        if *overflowed {
            presenter::write_overflow(io, config);
            return Some(Outcome::BufferOverflow);
        }

        // The framer admits printable ASCII only, so this cannot fail.
        let line = core::str::from_utf8(buffer).unwrap_or("");

        let mut tokens: Vec<&str, MAX_TOKENS> = Vec::new();
        for token in line.split(' ').filter(|t| !t.is_empty()) {
            if tokens.push(token).is_err() {
                // Truncate rather than corrupt
                break;
            }
        }

        // Empty frame: nothing to look up
        let (name, args) = match tokens.split_first() {
            Some((name, args)) => (*name, args),
            None => return None,
        };

        let cmd = match registry.find(name) {
            Some(cmd) => cmd,
            None => {
                presenter::write_unknown_command(io, config, name);
                return Some(Outcome::UnknownCommand);
            }
        };

        // The help query takes priority over arity validation
        if args.len() == 1 && args[0] == "?" {
            presenter::write_help(io, cmd);
            return Some(Outcome::HelpPrinted);
        }

        let outcome = run_command(cmd, io, busy, args);
        match outcome {
            Outcome::TooFewArgs => presenter::write_too_few_args(io, config, cmd),
            Outcome::TooManyArgs => presenter::write_too_many_args(io, config, cmd),
            _ => {}
        }
        Some(outcome)
    }
}
