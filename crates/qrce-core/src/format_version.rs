use crate::module::{Matrix, Module};

// Computes the (numTotalBits - numDataBits)-bit BCH error correction
// codeword for dataBits, by simulating polynomial division over GF(2)
// using generatorPoly as the divisor.
fn calculate_bch_bits(num_total_bits: u32, num_data_bits: u32, data_bits: u32, generator: u32) -> u32 {
    let mut bch_bits = data_bits << (num_total_bits - num_data_bits);

    for i in 0..num_data_bits {
        if bch_bits & (1 << (num_total_bits - 1 - i)) != 0 {
            bch_bits ^= generator << (num_data_bits - 1 - i);
        }
    }

    bch_bits
}

/// Encodes the EC level and chosen mask pattern as the 15-bit BCH(15,5)
/// format information and places it (twice, for redundancy) alongside the
/// two separators.
pub fn place_format_information(matrix: &mut Matrix, ec_level_bits: u8, mask_pattern: u8) {
    let size = matrix.size as i32;

    let data_bits = (u32::from(ec_level_bits) << 3) | u32::from(mask_pattern & 7);
    let bch_bits = calculate_bch_bits(15, 5, data_bits, 0x537);
    let format_information = ((data_bits << 10) | bch_bits) ^ 0x5412;

    let mut y = 0;
    let mut x = size - 1;

    for i in 0..15 {
        if i == 6 {
            y = 7;
        } else if i == 8 {
            y = size - 7;
            x = 7;
        } else if i == 9 {
            x = 5;
        }

        let bit = (format_information >> i) & 1 != 0;
        matrix.set(8, y, Module::data_bit(bit));
        matrix.set(x, 8, Module::data_bit(bit));

        y += 1;
        x -= 1;
    }
}

/// Encodes the version number as the 18-bit BCH(18,6) version information
/// and places it in the two 6x3/3x6 blocks reserved near the top-right and
/// bottom-left finder patterns. A no-op below version 7.
pub fn place_version_information(matrix: &mut Matrix, version: u8) {
    if version < 7 {
        return;
    }

    let size = matrix.size as i32;
    let data_bits = u32::from(version) & 63;
    let bch_bits = calculate_bch_bits(18, 6, data_bits, 0x1F25);
    let version_information = (data_bits << 12) | bch_bits;

    for i in 0..6 {
        for j in 0..3 {
            let bit = (version_information >> (3 * i + j)) & 1 != 0;
            matrix.set(size - 11 + j, i, Module::data_bit(bit));
            matrix.set(i, size - 11 + j, Module::data_bit(bit));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::module_placement::place_modules;

    #[test]
    fn format_information_bits_are_deterministic() {
        let data_bits = (0u32 << 3) | 0;
        let bch_bits = calculate_bch_bits(15, 5, data_bits, 0x537);
        let format_information = ((data_bits << 10) | bch_bits) ^ 0x5412;
        // Same EC level/mask pair should always produce the same 15 bits.
        let bch_bits2 = calculate_bch_bits(15, 5, data_bits, 0x537);
        assert_eq!(bch_bits, bch_bits2);
        assert!(format_information < (1 << 15));
    }

    #[test]
    fn version_information_is_noop_below_7() {
        let mut matrix = place_modules(6, &vec![0u8; 136]);
        let before = matrix.clone();
        place_version_information(&mut matrix, 6);
        assert_eq!(matrix, before);
    }

    #[test]
    fn version_information_written_at_7() {
        let mut matrix = place_modules(7, &vec![0u8; 196]);
        place_version_information(&mut matrix, 7);
        // The version info blocks should now hold plain 0/1 data cells,
        // not the BLANK reservation placeholder.
        assert!(!matrix.get(matrix.size as i32 - 11, 0).is_blank());
    }
}
