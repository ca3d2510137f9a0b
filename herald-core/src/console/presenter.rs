//! Prompt, help, and error rendering for the interactive console
//!
//! Two rendering policies exist, selected by configuration: verbose
//! sentences naming the violated bound plus a `'<command> ?'` hint, or
//! fixed short tokens for constrained-bandwidth links.

use core::fmt::Write;

use crate::config::ConsoleConfig;
use crate::registry::{Command, Registry};
use crate::traits::{ByteSink, Fmt};

/// Fixed error tokens for short-error mode
pub const SHORT_TOO_FEW_ARGS: &str = "Too few arguments";
pub const SHORT_TOO_MANY_ARGS: &str = "Too many arguments";
pub const SHORT_UNKNOWN_COMMAND: &str = "Unknown command";
pub const SHORT_LINE_TOO_LONG: &str = "Line too long";

/// Display the command prompt
///
/// The ready confirmation (when configured) is printed even in silent
/// mode so a machine peer can synchronize on it.
pub fn write_prompt(out: &mut dyn ByteSink, config: &ConsoleConfig) {
    if !config.silent {
        out.write_str("\n");
        out.write_str(config.prompt);
    }
    if let Some(text) = config.confirm_ready {
        let _ = write!(Fmt(out), "{}\n", text);
    }
}

/// Render the `cmd ?` help query reply
pub fn write_help(out: &mut dyn ByteSink, cmd: &Command) {
    let _ = write!(Fmt(out), "{}\n\n{}\n", cmd.description, cmd.parameters);
}

/// Render the too-few-arguments reply
pub fn write_too_few_args(out: &mut dyn ByteSink, config: &ConsoleConfig, cmd: &Command) {
    if config.short_errors {
        let _ = write!(Fmt(out), "{}\n", SHORT_TOO_FEW_ARGS);
    } else {
        let _ = write!(
            Fmt(out),
            "Too few arguments (expected {})\n\n'{} ?' for more information\n\n",
            cmd.min_args, cmd.name
        );
    }
}

/// Render the too-many-arguments reply
pub fn write_too_many_args(out: &mut dyn ByteSink, config: &ConsoleConfig, cmd: &Command) {
    if config.short_errors {
        let _ = write!(Fmt(out), "{}\n", SHORT_TOO_MANY_ARGS);
    } else {
        let _ = write!(
            Fmt(out),
            "Too many arguments (maximum {})\n\n'{} ?' for more information\n\n",
            cmd.max_args, cmd.name
        );
    }
}

/// Render the unknown-command reply
pub fn write_unknown_command(out: &mut dyn ByteSink, config: &ConsoleConfig, name: &str) {
    if config.short_errors {
        let _ = write!(Fmt(out), "{}\n", SHORT_UNKNOWN_COMMAND);
    } else {
        let _ = write!(Fmt(out), "Command not recognized: '{}'\n\n", name);
        if !config.silent {
            let _ = write!(Fmt(out), "Type 'help' for a list of available commands\n");
        }
    }
}

/// Render the overlong-line reply
pub fn write_overflow(out: &mut dyn ByteSink, config: &ConsoleConfig) {
    if config.short_errors {
        let _ = write!(Fmt(out), "{}\n", SHORT_LINE_TOO_LONG);
    } else {
        let _ = write!(
            Fmt(out),
            "Line too long (maximum {} bytes)\n",
            config.max_len
        );
    }
}

/// Render the full command listing
///
/// Intended as the body of an application's `help` handler. Hidden
/// entries are skipped.
pub fn write_command_table(out: &mut dyn ByteSink, registry: &Registry<'_>) {
    let _ = write!(Fmt(out), "Command      Description\n-------      -----------\n");
    for cmd in registry.iter() {
        if !cmd.hidden {
            let _ = write!(Fmt(out), "{:<10}   {}\n", cmd.name, cmd.description);
        }
    }
    let _ = write!(Fmt(out), "\nCommand parameters can be seen with '<command> ?'\n");
}
