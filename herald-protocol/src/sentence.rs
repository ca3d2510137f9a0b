//! Sentence field tokenizer
//!
//! Splits a completed frame into comma-delimited fields, then peels the
//! checksum off the last field. Empty fields are preserved: positional
//! protocols use them to mean "no value for this slot".
//!
//! The received checksum text is carried but not verified here; whether
//! and how to validate it is the link's policy (see the `checksum`
//! module).

use heapless::Vec;

/// Maximum fields per sentence (command name included)
pub const MAX_FIELDS: usize = 30;

/// A tokenized sentence
///
/// Borrows from the frame buffer; entries are valid only until the buffer
/// is reused for the next frame.
#[derive(Debug, PartialEq, Eq)]
pub struct Sentence<'a> {
    /// Command name plus data fields, checksum stripped
    pub fields: Vec<&'a str, MAX_FIELDS>,
    /// Checksum text exactly as received
    pub checksum: &'a str,
}

/// Sentence framing errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SentenceError {
    /// No `*` checksum marker present
    MissingChecksum,
}

/// Split a completed frame into fields and checksum
///
/// The checksum presence check runs before anything else: a frame without
/// `*` is rejected even when the command name is unknown. Fields beyond
/// [`MAX_FIELDS`] are truncated, never written out of bounds.
pub fn split_sentence(line: &str) -> Result<Sentence<'_>, SentenceError> {
    let mut fields: Vec<&str, MAX_FIELDS> = Vec::new();
    for field in line.split(',') {
        if fields.push(field).is_err() {
            // Truncate rather than corrupt
            break;
        }
    }

    // split() always yields at least one entry, so last() cannot fail
    let last = fields.len() - 1;
    match fields[last].split_once('*') {
        Some((data, checksum)) => {
            fields[last] = data;
            Ok(Sentence { fields, checksum })
        }
        None => Err(SentenceError::MissingChecksum),
    }
}
