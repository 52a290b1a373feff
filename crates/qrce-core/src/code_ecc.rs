/// The error correction level in a QR Code symbol.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Debug)]
pub enum CodeEcc {
    /// The QR Code can tolerate about  7% erroneous codewords.
    Low,
    /// The QR Code can tolerate about 15% erroneous codewords.
    Medium,
    /// The QR Code can tolerate about 25% erroneous codewords.
    Quartile,
    /// The QR Code can tolerate about 30% erroneous codewords.
    High,
}

impl CodeEcc {
    // Returns an unsigned 2-bit integer (in the range 0 to 3).
    pub fn ordinal(self) -> usize {
        use CodeEcc::*;
        match self {
            Low => 0,
            Medium => 1,
            Quartile => 2,
            High => 3,
        }
    }

    // Returns an unsigned 2-bit integer (in the range 0 to 3).
    //
    // Format information uses a different bit ordering than the ordinal
    // index: L=01, M=00, Q=11, H=10. Equivalent to `(5 - ordinal) & 3`.
    pub fn format_bits(self) -> u8 {
        use CodeEcc::*;
        match self {
            Low => 1,
            Medium => 0,
            Quartile => 3,
            High => 2,
        }
    }

    /// Parses a single-character error correction level, case-insensitively.
    pub fn from_letter(c: char) -> Option<Self> {
        use CodeEcc::*;
        match c.to_ascii_uppercase() {
            'L' => Some(Low),
            'M' => Some(Medium),
            'Q' => Some(Quartile),
            'H' => Some(High),
            _ => None,
        }
    }
}
