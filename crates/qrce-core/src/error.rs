/// The error type returned when a payload cannot be encoded as a QR Code
/// symbol under the requested constraints.
///
/// Ways to handle this exception include:
///
/// - Decrease the error correction level.
/// - Raise or drop a requested maximum/target version.
/// - Enable segmentation optimization, or change the text to fit a cheaper
///   segment mode (e.g. numeric or alphanumeric).
/// - Change the payload to be shorter.
/// - Propagate the error upward to the caller/user.
#[derive(Debug, Clone)]
pub enum QrError {
    /// No version in the searched range could hold the segmented data.
    SegmentTooLong,
    /// The encoded bit length exceeds the chosen version's data capacity,
    /// or a caller-supplied version is smaller than the recommended one.
    DataOverCapacity(usize, usize),
    /// The input payload exceeds the maximum length this encoder accepts
    /// (7089 bytes, the largest payload any version/EC combination holds).
    InputTooLong(usize),
}

impl std::error::Error for QrError {}

impl std::fmt::Display for QrError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match *self {
            Self::SegmentTooLong => write!(f, "Segment too long"),
            Self::DataOverCapacity(datalen, maxcapacity) => write!(
                f,
                "Data length = {} bits, Max capacity = {} bits",
                datalen, maxcapacity
            ),
            Self::InputTooLong(len) => write!(f, "Input of {} bytes is too long", len),
        }
    }
}
