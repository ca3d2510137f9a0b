//! Frame outcomes and the shared dispatch contract
//!
//! Both front ends (interactive console and sentence link) funnel into
//! [`run_command`]: arity validation followed by a busy-signal-wrapped
//! handler invocation. Presentation of failures stays with the caller,
//! since the two front ends render errors very differently.

use crate::registry::Command;
use crate::traits::{BusySignal, ByteSink};

/// Result of processing one complete frame
///
/// Every variant is recoverable at the frame boundary: the buffer is reset
/// and the next frame is processed normally.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Outcome {
    /// Handler invoked with a valid argument count
    Dispatched,
    /// `cmd ?` help query answered; handler not invoked
    HelpPrinted,
    /// Fewer arguments than the command's minimum
    TooFewArgs,
    /// More arguments than the command's maximum
    TooManyArgs,
    /// No registry entry matched the command name
    UnknownCommand,
    /// Sentence arrived without a checksum field (protocol links only)
    MissingChecksum,
    /// Frame exceeded the configured length limit
    BufferOverflow,
}

/// Validate arity and invoke the handler
///
/// The busy signal wraps only the handler invocation, never validation:
/// a peer watching the line sees it high exactly while a command runs.
/// Boundary argument counts (`== min_args`, `== max_args`) dispatch.
pub fn run_command(
    cmd: &Command,
    out: &mut dyn ByteSink,
    busy: &mut dyn BusySignal,
    args: &[&str],
) -> Outcome {
    if args.len() < cmd.min_args {
        return Outcome::TooFewArgs;
    }
    if args.len() > cmd.max_args {
        return Outcome::TooManyArgs;
    }
    busy.set_signal(true);
    (cmd.handler)(out, args);
    busy.set_signal(false);
    Outcome::Dispatched
}

#[cfg(test)]
mod tests {
    use super::*;
    use heapless::Vec;

    struct BufSink(Vec<u8, 128>);

    impl ByteSink for BufSink {
        fn write(&mut self, bytes: &[u8]) {
            self.0.extend_from_slice(bytes).unwrap();
        }
    }

    /// Records busy transitions interleaved with handler execution
    struct Recorder(Vec<&'static str, 8>);

    impl BusySignal for Recorder {
        fn set_signal(&mut self, active: bool) {
            self.0.push(if active { "busy" } else { "idle" }).unwrap();
        }
    }

    fn echo_args(out: &mut dyn ByteSink, args: &[&str]) {
        for arg in args {
            out.write_str(arg);
            out.write_str(";");
        }
    }

    fn cmd(min_args: usize, max_args: usize) -> Command {
        Command {
            name: "motor",
            handler: echo_args,
            min_args,
            max_args,
            description: "",
            parameters: "",
            hidden: false,
        }
    }

    #[test]
    fn handler_receives_argument_tokens() {
        let mut out = BufSink(Vec::new());
        let mut busy = crate::traits::NoBusy;
        let outcome = run_command(&cmd(0, 3), &mut out, &mut busy, &["a", "b"]);

        assert_eq!(outcome, Outcome::Dispatched);
        assert_eq!(out.0.as_slice(), b"a;b;");
    }

    #[test]
    fn arity_bounds_are_inclusive() {
        let mut out = BufSink(Vec::new());
        let mut busy = crate::traits::NoBusy;
        let c = cmd(1, 2);

        assert_eq!(run_command(&c, &mut out, &mut busy, &[]), Outcome::TooFewArgs);
        assert_eq!(
            run_command(&c, &mut out, &mut busy, &["x"]),
            Outcome::Dispatched
        );
        assert_eq!(
            run_command(&c, &mut out, &mut busy, &["x", "y"]),
            Outcome::Dispatched
        );
        assert_eq!(
            run_command(&c, &mut out, &mut busy, &["x", "y", "z"]),
            Outcome::TooManyArgs
        );
    }

    #[test]
    fn busy_signal_wraps_only_the_invocation() {
        let mut out = BufSink(Vec::new());
        let mut busy = Recorder(Vec::new());

        // Validation failure: the busy line must never move
        run_command(&cmd(2, 2), &mut out, &mut busy, &["only-one"]);
        assert!(busy.0.is_empty());

        run_command(&cmd(2, 2), &mut out, &mut busy, &["a", "b"]);
        assert_eq!(busy.0.as_slice(), &["busy", "idle"]);
    }
}
