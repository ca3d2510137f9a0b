//! Console configuration
//!
//! Defaults mirror a typical serial console: 256-byte frames, carriage
//! returns treated as line terminators, verbose error text, echo on.

/// Line buffer capacity in bytes
pub const MAX_FRAME_LEN: usize = 256;

/// Maximum tokens per frame (command name included)
pub const MAX_TOKENS: usize = 30;

/// Interactive console configuration
#[derive(Debug, Clone)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ConsoleConfig {
    /// Prompt text displayed at the start of every entry line
    pub prompt: &'static str,
    /// Optional banner printed once by [`greet`](crate::Console::greet)
    pub banner: Option<&'static str>,
    /// Optional ready confirmation printed after every prompt
    ///
    /// Printed even in silent mode, so a peer that suppresses echo can
    /// still synchronize on it.
    pub confirm_ready: Option<&'static str>,
    /// Suppress echo, prompts, and banners entirely
    pub silent: bool,
    /// Drop incoming carriage returns instead of treating them as line ends
    pub drop_cr: bool,
    /// Emit fixed short error tokens instead of verbose sentences
    pub short_errors: bool,
    /// Frame length limit; clamped to [`MAX_FRAME_LEN`]
    pub max_len: usize,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            prompt: "herald >> ",
            banner: None,
            confirm_ready: None,
            silent: false,
            drop_cr: false,
            short_errors: false,
            max_len: MAX_FRAME_LEN,
        }
    }
}
