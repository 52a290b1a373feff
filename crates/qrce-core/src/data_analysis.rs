use crate::charset::{
    is_alphanumeric, is_exclusive_8bit_byte_subset, is_exclusive_alphanumeric_subset, is_numeric,
    is_shift_jis_kanji,
};
use crate::segment::{create_mode_segment, Segment};
use crate::segment_mode::Mode;
use crate::version::VersionClass;

// Look-ahead tables are indexed by VersionClass::index() (Small, Medium, Large).

fn select_initial_mode(data: &[u8], use_kanji_mode: bool, version_class: VersionClass) -> Mode {
    let class = version_class.index();

    if is_numeric(data[0]) {
        let lookahead = [4, 4, 5][class];
        for i in 1..lookahead {
            if is_numeric(data[i]) {
                continue;
            } else if is_exclusive_8bit_byte_subset(data[i]) {
                return Mode::Byte;
            } else {
                break;
            }
        }

        let lookahead = [7, 8, 9][class];
        for i in 1..lookahead {
            if is_numeric(data[i]) {
                continue;
            } else if is_alphanumeric(data[i]) {
                return Mode::Alphanumeric;
            } else {
                break;
            }
        }

        return Mode::Numeric;
    }

    if is_alphanumeric(data[0]) {
        let lookahead = [6, 7, 8][class];
        for i in 1..lookahead {
            if !is_alphanumeric(data[i]) {
                return Mode::Byte;
            }
        }
        return Mode::Alphanumeric;
    }

    if use_kanji_mode && is_shift_jis_kanji(data[0], data[1]) {
        if !is_exclusive_8bit_byte_subset(data[2]) {
            return Mode::Kanji;
        }

        let lookahead = [5, 5, 6][class] * 2;
        let mut i = 0;
        while i < lookahead {
            if !is_shift_jis_kanji(data[3 + i], data[4 + i]) {
                return Mode::Kanji;
            }
            i += 2;
        }
    }

    Mode::Byte
}

fn recommend_next_mode(data: &[u8], length: usize, use_kanji_mode: bool) -> Mode {
    if is_numeric(data[0]) {
        return Mode::Numeric;
    }

    if is_alphanumeric(data[0]) {
        return Mode::Alphanumeric;
    }

    if use_kanji_mode && length >= 2 && is_shift_jis_kanji(data[0], data[1]) {
        return Mode::Kanji;
    }

    Mode::Byte
}

/// Minimizes the encoded bit-stream length by partitioning `data` into
/// mode-tagged runs, per Annex J of JIS X 0510:2018.
///
/// Below the single-segment shortcut threshold (9 bytes, or 15 when Kanji
/// mode is enabled) this falls back to [`create_mode_segment`].
pub fn create_mixed_mode_segments(
    data: &[u8],
    use_kanji_mode: bool,
    version_class: VersionClass,
) -> Vec<Segment> {
    let length = data.len();
    if length < 9 || (use_kanji_mode && length < 15) {
        return vec![create_mode_segment(data, use_kanji_mode)];
    }

    let class = version_class.index();
    let byte_to_kanji_run_length = [9, 12, 13][class] * 2;
    let byte_to_alnum_run_length = [11, 15, 16][class];
    let byte_to_num1_run_length = [6, 7, 8][class];
    let byte_to_num2_run_length = [6, 8, 9][class];
    let alnum_to_num_run_length = [13, 15, 17][class];

    let mut kanji_run_length = 0usize;
    let mut alnum_run_length = 0usize;
    let mut num_run_length = 0usize;

    let mut mode = select_initial_mode(data, use_kanji_mode, version_class);
    let mut chrlen = if mode == Mode::Kanji { 2 } else { 1 };

    let mut segment_mode = mode;
    let mut segment_length = chrlen;

    let mut segments = Vec::new();

    let mut i = chrlen;
    while i < length {
        mode = recommend_next_mode(&data[i..], length - i, use_kanji_mode);
        chrlen = if mode == Mode::Kanji { 2 } else { 1 };

        let mut commit = true;

        if segment_mode == Mode::Byte && mode == Mode::Kanji {
            segment_length += alnum_run_length + num_run_length;

            kanji_run_length += chrlen;
            alnum_run_length = 0;
            num_run_length = 0;

            if kanji_run_length < byte_to_kanji_run_length {
                commit = false;
            }
        } else if segment_mode == Mode::Byte && mode == Mode::Alphanumeric {
            segment_length += kanji_run_length + num_run_length;

            kanji_run_length = 0;
            alnum_run_length += chrlen;
            num_run_length = 0;

            if alnum_run_length < byte_to_alnum_run_length {
                commit = false;
            }
        } else if segment_mode == Mode::Byte && mode == Mode::Numeric {
            segment_length += kanji_run_length + alnum_run_length;

            kanji_run_length = 0;
            alnum_run_length = 0;
            num_run_length += chrlen;

            if num_run_length < byte_to_num1_run_length {
                commit = false;
            } else if num_run_length < byte_to_num2_run_length
                && i < length - 1
                && !is_exclusive_alphanumeric_subset(data[i + 1])
            {
                commit = false;
            }
        } else if segment_mode == Mode::Alphanumeric && mode == Mode::Numeric {
            num_run_length += chrlen;

            if num_run_length < alnum_to_num_run_length {
                commit = false;
            }
        } else {
            segment_length += kanji_run_length + alnum_run_length + num_run_length;

            kanji_run_length = 0;
            alnum_run_length = 0;
            num_run_length = 0;

            if segment_mode == mode {
                segment_length += chrlen;
                commit = false;
            }
        }

        if commit {
            segments.push(Segment::new(segment_mode, segment_length));

            segment_mode = mode;
            segment_length = kanji_run_length + alnum_run_length + num_run_length;
            if segment_length == 0 {
                segment_length = chrlen;
            }

            kanji_run_length = 0;
            alnum_run_length = 0;
            num_run_length = 0;
        }

        i += chrlen;
    }

    segment_length += kanji_run_length + alnum_run_length + num_run_length;
    segments.push(Segment::new(segment_mode, segment_length));

    segments
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_payload_uses_shortcut() {
        let segs = create_mixed_mode_segments(b"12345", false, VersionClass::Small);
        assert_eq!(segs.len(), 1);
        assert_eq!(segs[0].mode, Mode::Numeric);
    }

    #[test]
    fn byte_to_numeric_switch() {
        // A byte run followed by a long numeric run should split into two
        // segments once the numeric run length crosses the threshold.
        let mut data = b"!!!!!!!!".to_vec();
        data.extend_from_slice(b"123456789012345678");
        let segs = create_mixed_mode_segments(&data, false, VersionClass::Small);
        assert!(segs.len() >= 2);
        assert_eq!(segs[0].mode, Mode::Byte);
        assert_eq!(segs.last().unwrap().mode, Mode::Numeric);
    }

    #[test]
    fn alphanumeric_to_numeric_switch() {
        let mut data = b"ABCDEFGHIJ".to_vec();
        data.extend_from_slice(b"1234567890123456789");
        let segs = create_mixed_mode_segments(&data, false, VersionClass::Small);
        assert_eq!(segs[0].mode, Mode::Alphanumeric);
        assert_eq!(segs.last().unwrap().mode, Mode::Numeric);
    }

    #[test]
    fn total_length_preserved() {
        let data = b"THIS IS A LONGER 1234567890 TEST STRING with punctuation!";
        let segs = create_mixed_mode_segments(data, false, VersionClass::Small);
        let total: usize = segs.iter().map(|s| s.length).sum();
        assert_eq!(total, data.len());
    }
}
