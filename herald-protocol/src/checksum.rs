//! Outgoing-reply checksum policy
//!
//! The original interface firmware stamps a literal `00` on every error
//! reply and never computes a real checksum. That behavior is preserved
//! as the default [`FixedChecksum`] strategy rather than hard-coded;
//! peers that verify replies can opt into [`XorChecksum`], the NMEA 0183
//! XOR over the sentence body.

/// Strategy for checksumming outgoing sentences
pub trait ChecksumProvider {
    /// Checksum over the sentence body (the bytes between `$` and `*`)
    fn sum(&self, body: &[u8]) -> u8;
}

/// Constant checksum, rendered as two uppercase hex digits
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct FixedChecksum(pub u8);

impl ChecksumProvider for FixedChecksum {
    fn sum(&self, _body: &[u8]) -> u8 {
        self.0
    }
}

/// NMEA 0183 style XOR checksum
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct XorChecksum;

impl ChecksumProvider for XorChecksum {
    fn sum(&self, body: &[u8]) -> u8 {
        body.iter().fold(0, |acc, &b| acc ^ b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_ignores_the_body() {
        let fixed = FixedChecksum(0x00);
        assert_eq!(fixed.sum(b"PXERR,Unknown command"), 0x00);
        assert_eq!(fixed.sum(b"anything else"), 0x00);
    }

    #[test]
    fn xor_matches_nmea_reference() {
        // Worked example from the NMEA 0183 spec style: XOR of the body
        assert_eq!(XorChecksum.sum(b""), 0x00);
        assert_eq!(XorChecksum.sum(b"A"), 0x41);
        assert_eq!(XorChecksum.sum(b"AB"), 0x41 ^ 0x42);
        assert_eq!(XorChecksum.sum(b"GPGGA,123519"), 0x77);
    }
}
