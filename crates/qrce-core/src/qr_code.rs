use crate::code_ecc::CodeEcc;
use crate::data_analysis::create_mixed_mode_segments;
use crate::data_encoding::{encode_data_codewords, recommend_version};
use crate::error::QrError;
use crate::final_message::construct_final_message;
use crate::mask::apply_lowest_penalty_mask;
use crate::module::Matrix;
use crate::module_placement::place_modules;
use crate::rs_block::get_rs_block;
use crate::segment::{create_mode_segment, Segment};
use crate::version::{Version, VersionClass};

/// The largest payload any version/EC-level combination can hold (version
/// 40, numeric mode, Low EC).
const MAX_DATA_LENGTH: usize = 7089;

/// Caller-supplied knobs for [`encode`], mirroring the original command-line
/// collaborator's `/V`, `/K`, and `/O` flags.
#[derive(Debug, Clone, Copy, Default)]
pub struct EncodeOptions {
    /// Forces a specific version rather than the smallest one that fits.
    /// Rejected with [`QrError::DataOverCapacity`] if it is smaller than
    /// the version the payload actually needs.
    pub version: Option<Version>,
    /// Allows the analyzer to read Shift_JIS Kanji pairs as Kanji-mode runs.
    pub use_kanji_mode: bool,
    /// Runs the Annex J mixed-mode segmentation instead of the single-mode
    /// shortcut.
    pub optimize: bool,
}

/// A QR Code symbol: an immutable square grid of dark and light modules,
/// plus the scalar parameters that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QrCode {
    pub version: Version,
    pub error_correction_level: CodeEcc,
    pub mask_pattern: u8,
    matrix: Matrix,
}

impl QrCode {
    /// The side length of the symbol, in modules.
    pub fn size(&self) -> i32 {
        self.matrix.size as i32
    }

    /// Returns whether the module at `(x, y)` is dark. Both coordinates
    /// must be in `0..size()`.
    pub fn get_module(&self, x: i32, y: i32) -> bool {
        self.matrix.get(x, y).is_dark()
    }
}

fn segments_for_class(
    payload: &[u8],
    options: EncodeOptions,
    version_class: VersionClass,
) -> Vec<Segment> {
    if options.optimize {
        create_mixed_mode_segments(payload, options.use_kanji_mode, version_class)
    } else {
        vec![create_mode_segment(payload, options.use_kanji_mode)]
    }
}

// Scans version classes Small -> Medium -> Large, segmenting the payload
// fresh for each class (mixed-mode segmentation's run-length thresholds
// themselves depend on the class), and returns the first class whose
// segments fit some version in that class.
fn recommend_segments_and_version(
    payload: &[u8],
    ecl: CodeEcc,
    options: EncodeOptions,
) -> Option<(Vec<Segment>, Version)> {
    for version_class in VersionClass::ALL {
        let segments = segments_for_class(payload, options, version_class);
        if let Some(version) = recommend_version(&segments, ecl, version_class) {
            return Some((segments, version));
        }
    }
    None
}

/// Encodes `payload` as a QR Code symbol at error correction level `ecl`,
/// per `options`.
///
/// Segments the payload (single-mode, or Annex J mixed-mode if
/// `options.optimize`), finds the smallest version whose data capacity
/// holds the segmented bit stream, packs the data codewords, computes and
/// interleaves the Reed-Solomon error correction codewords, places the
/// function patterns and codeword stream into the matrix, then applies the
/// lowest-penalty mask and embeds format and version information.
pub fn encode(payload: &[u8], ecl: CodeEcc, options: EncodeOptions) -> Result<QrCode, QrError> {
    if payload.len() > MAX_DATA_LENGTH {
        return Err(QrError::InputTooLong(payload.len()));
    }

    let (segments, recommended) = recommend_segments_and_version(payload, ecl, options)
        .ok_or(QrError::SegmentTooLong)?;

    let version = match options.version {
        Some(requested) if requested < recommended => {
            let needed = get_rs_block(recommended, ecl).total_data_codewords() * 8;
            let available = get_rs_block(requested, ecl).total_data_codewords() * 8;
            return Err(QrError::DataOverCapacity(needed, available));
        }
        Some(requested) => requested,
        None => recommended,
    };

    let data_codewords = encode_data_codewords(payload, &segments, version, ecl);
    let block = get_rs_block(version, ecl);
    let final_message = construct_final_message(&data_codewords, block);

    let unmasked = place_modules(version.value(), &final_message);
    let (mut matrix, mask_pattern) = apply_lowest_penalty_mask(&unmasked);

    crate::format_version::place_format_information(&mut matrix, ecl.format_bits(), mask_pattern);
    crate::format_version::place_version_information(&mut matrix, version.value());

    Ok(QrCode {
        version,
        error_correction_level: ecl,
        mask_pattern,
        matrix,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encodes_short_text_at_version_1() {
        let qr = encode(b"HELLO WORLD", CodeEcc::Quartile, EncodeOptions::default()).unwrap();
        assert_eq!(qr.version.value(), 1);
        assert_eq!(qr.size(), 21);
        assert!(qr.mask_pattern < 8);
    }

    #[test]
    fn encodes_numeric_payload() {
        let qr = encode(b"0123456789", CodeEcc::Low, EncodeOptions::default()).unwrap();
        assert!(qr.version.value() >= 1);
    }

    #[test]
    fn optimize_flag_uses_mixed_mode_segmentation() {
        let options = EncodeOptions {
            optimize: true,
            ..Default::default()
        };
        let qr = encode(b"ABC123xyz", CodeEcc::Medium, options).unwrap();
        assert!(qr.size() >= 21);
    }

    #[test]
    fn requested_version_smaller_than_recommended_is_rejected() {
        let long_payload = vec![b'A'; 200];
        let options = EncodeOptions {
            version: Some(Version::new(1)),
            ..Default::default()
        };
        let result = encode(&long_payload, CodeEcc::High, options);
        assert!(matches!(result, Err(QrError::DataOverCapacity(_, _))));
    }

    #[test]
    fn requested_version_at_or_above_recommended_is_honored() {
        let options = EncodeOptions {
            version: Some(Version::new(5)),
            ..Default::default()
        };
        let qr = encode(b"hi", CodeEcc::Low, options).unwrap();
        assert_eq!(qr.version.value(), 5);
    }

    #[test]
    fn payload_past_max_data_length_is_rejected_before_segmentation() {
        let payload = vec![b'9'; MAX_DATA_LENGTH + 1];
        let result = encode(&payload, CodeEcc::Low, EncodeOptions::default());
        assert!(matches!(result, Err(QrError::InputTooLong(len)) if len == MAX_DATA_LENGTH + 1));
    }

    #[test]
    fn kanji_mode_flag_accepts_shift_jis_pairs() {
        let data = [0x81u8, 0x40, 0x81, 0x41, 0x81, 0x42];
        let options = EncodeOptions {
            use_kanji_mode: true,
            ..Default::default()
        };
        let qr = encode(&data, CodeEcc::Medium, options).unwrap();
        assert_eq!(qr.version.value(), 1);
    }
}
