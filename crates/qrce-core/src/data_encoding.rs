use crate::bit_buffer::BitBuffer;
use crate::charset::get_alphanumeric_code;
use crate::code_ecc::CodeEcc;
use crate::rs_block::get_rs_block;
use crate::segment::Segment;
use crate::segment_mode::Mode;
use crate::version::{Version, VersionClass};

const NUM_BITS_MODE_INDICATOR: u8 = 4;

fn num_bits_char_count_indicator(version_class: VersionClass, mode: Mode) -> u8 {
    mode.num_char_count_bits(version_class)
}

fn num_data_codewords(version: Version, ec_level: CodeEcc) -> usize {
    get_rs_block(version, ec_level).total_data_codewords()
}

// Bit length of a segment's payload once packed, per mode. Numeric groups
// digits by 3 (10 bits), with a 7-bit group for a remaining pair and a
// 4-bit group for a single trailing digit; Alphanumeric groups by 2 (11
// bits) with a 6-bit group for a trailing single character; Byte is 8 bits
// per byte; Kanji is 13 bits per 2-byte character.
fn num_bits_encoded_data(mode: Mode, length: usize) -> usize {
    match mode {
        Mode::Numeric => (length / 3) * 10 + (length % 3 / 2) * 7 + (length % 3 % 2) * 4,
        Mode::Alphanumeric => (length / 2) * 11 + (length % 2) * 6,
        Mode::Byte => length * 8,
        Mode::Kanji => (length / 2) * 13,
    }
}

/// Returns the smallest version within `version_class` whose data-codeword
/// capacity (in bits) holds the segmented payload at the given EC level, or
/// `None` if no version in the class suffices.
pub fn recommend_version(
    segments: &[Segment],
    ec_level: CodeEcc,
    version_class: VersionClass,
) -> Option<Version> {
    let mut num_bits = 0usize;
    for segment in segments {
        num_bits += usize::from(NUM_BITS_MODE_INDICATOR);
        num_bits += usize::from(num_bits_char_count_indicator(version_class, segment.mode));
        num_bits += num_bits_encoded_data(segment.mode, segment.length);
    }

    let (start, end) = version_class.version_range();
    for ver in start..=end {
        let version = Version::new(ver);
        if num_bits <= num_data_codewords(version, ec_level) * 8 {
            return Some(version);
        }
    }

    None
}

fn append_numeric(bits: &mut BitBuffer, data: &[u8]) {
    let mut chunks = data.chunks_exact(3);
    for chunk in &mut chunks {
        let value = u32::from(chunk[0] - b'0') * 100
            + u32::from(chunk[1] - b'0') * 10
            + u32::from(chunk[2] - b'0');
        bits.append_bits(value, 10);
    }
    let rest = chunks.remainder();
    match rest.len() {
        2 => {
            let value = u32::from(rest[0] - b'0') * 10 + u32::from(rest[1] - b'0');
            bits.append_bits(value, 7);
        }
        1 => {
            bits.append_bits(u32::from(rest[0] - b'0'), 4);
        }
        _ => {}
    }
}

fn append_alphanumeric(bits: &mut BitBuffer, data: &[u8]) {
    let mut chunks = data.chunks_exact(2);
    for chunk in &mut chunks {
        let value = get_alphanumeric_code(chunk[0]) * 45 + get_alphanumeric_code(chunk[1]);
        bits.append_bits(value as u32, 11);
    }
    let rest = chunks.remainder();
    if rest.len() == 1 {
        bits.append_bits(get_alphanumeric_code(rest[0]) as u32, 6);
    }
}

fn append_byte(bits: &mut BitBuffer, data: &[u8]) {
    for &b in data {
        bits.append_bits(u32::from(b), 8);
    }
}

fn append_kanji(bits: &mut BitBuffer, data: &[u8]) {
    for pair in data.chunks_exact(2) {
        let raw = (u32::from(pair[0]) << 8) | u32::from(pair[1]);
        let value = (raw - 0x8140) & 0x3FFF;
        let value = (value >> 8) * 0xC0 + (value & 0xFF);
        bits.append_bits(value, 13);
    }
}

fn append_terminator(bits: &mut BitBuffer, num_codewords: usize) {
    let num_bits = num_codewords * 8 - bits.0.len();
    bits.append_bits(0, num_bits.min(4) as u8);
}

fn append_padding(bits: &mut BitBuffer, num_codewords: usize) {
    let num_bits = (8 - bits.0.len() % 8) % 8;
    bits.append_bits(0, num_bits as u8);

    let num_padding_codewords = num_codewords - bits.0.len() / 8;
    let mut value = 0xECu32;
    for _ in 0..num_padding_codewords {
        bits.append_bits(value, 8);
        value ^= 0xFD;
    }
}

fn pack_bits_to_bytes(bits: &BitBuffer) -> Vec<u8> {
    let mut bytes = vec![0u8; bits.0.len() / 8];
    for (i, &bit) in bits.0.iter().enumerate() {
        if bit {
            bytes[i / 8] |= 1 << (7 - i % 8);
        }
    }
    bytes
}

/// Serializes `segments` (each paired with its run of `payload`) into
/// exactly the number of data codewords `version`/`ec_level` allot,
/// including the mode and character-count indicators, terminator, and the
/// standard `0xEC`/`0x11` pad-byte alternation.
pub fn encode_data_codewords(
    payload: &[u8],
    segments: &[Segment],
    version: Version,
    ec_level: CodeEcc,
) -> Vec<u8> {
    let num_codewords = num_data_codewords(version, ec_level);
    let version_class = version.class();

    let mut bits = BitBuffer(Vec::with_capacity(num_codewords * 8));
    let mut offset = 0usize;

    for segment in segments {
        bits.append_bits(segment.mode.mode_bits(), NUM_BITS_MODE_INDICATOR);

        let char_count = if segment.mode == Mode::Kanji {
            segment.length / 2
        } else {
            segment.length
        };
        bits.append_bits(
            char_count as u32,
            num_bits_char_count_indicator(version_class, segment.mode),
        );

        let byte_length = segment.length;
        let data = &payload[offset..offset + byte_length];

        match segment.mode {
            Mode::Numeric => append_numeric(&mut bits, data),
            Mode::Alphanumeric => append_alphanumeric(&mut bits, data),
            Mode::Byte => append_byte(&mut bits, data),
            Mode::Kanji => append_kanji(&mut bits, data),
        }

        offset += byte_length;
    }

    append_terminator(&mut bits, num_codewords);
    append_padding(&mut bits, num_codewords);

    pack_bits_to_bytes(&bits)
}
