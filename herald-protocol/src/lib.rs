//! Checksummed machine-protocol command link
//!
//! The machine-facing twin of the interactive console in `herald-core`:
//! the same poll-driven framing and registry dispatch, but frames are
//! comma-delimited checksummed sentences with no line editing, and every
//! failure produces one structured error reply instead of free text.
//!
//! # Sentence format
//!
//! ```text
//! field0,field1,...,fieldN*checksum\n
//! ```
//!
//! `field0` is the command name; the checksum rides the last field behind
//! a `*`. A sentence without the `*` marker is malformed and is rejected
//! before any registry lookup. Error replies take the form
//! `$PXERR,<message>*<checksum>` followed by the configured terminator.

#![no_std]
#![deny(unsafe_code)]

pub mod checksum;
pub mod link;
pub mod sentence;

pub use checksum::{ChecksumProvider, FixedChecksum, XorChecksum};
pub use link::{LinkConfig, SentenceLink, ERROR_PREFIX};
pub use sentence::{split_sentence, Sentence, SentenceError, MAX_FIELDS};
