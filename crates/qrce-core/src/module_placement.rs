use crate::module::{self, Matrix, Module, DARK, LIGHT, RESERVED};

// Row-center coordinates of alignment patterns, indexed by version - 1. The
// placer iterates every combination of these coordinates and skips the ones
// that would collide with a finder pattern.
#[rustfmt::skip]
const ALIGNMENT_PATTERN_COORDINATES: [&[i32]; 40] = [
    &[], &[6, 18], &[6, 22], &[6, 26], &[6, 30], &[6, 34],
    &[6, 22, 38], &[6, 24, 42], &[6, 26, 46], &[6, 28, 50],
    &[6, 30, 54], &[6, 32, 58], &[6, 34, 62],
    &[6, 26, 46, 66], &[6, 26, 48, 70], &[6, 26, 50, 74],
    &[6, 30, 54, 78], &[6, 30, 56, 82], &[6, 30, 58, 86], &[6, 34, 62, 90],
    &[6, 28, 50, 72, 94], &[6, 26, 50, 74, 98], &[6, 30, 54, 78, 102],
    &[6, 28, 54, 80, 106], &[6, 32, 58, 84, 110], &[6, 30, 58, 86, 114],
    &[6, 34, 62, 90, 118],
    &[6, 26, 50, 74, 98, 122], &[6, 30, 54, 78, 102, 126],
    &[6, 26, 52, 78, 104, 130], &[6, 30, 56, 82, 108, 134],
    &[6, 34, 60, 86, 112, 138], &[6, 30, 58, 86, 114, 142],
    &[6, 34, 62, 90, 118, 146],
    &[6, 30, 54, 78, 102, 126, 150], &[6, 24, 50, 76, 102, 128, 154],
    &[6, 28, 54, 80, 106, 132, 158], &[6, 32, 58, 84, 110, 136, 162],
    &[6, 26, 54, 82, 110, 138, 166], &[6, 30, 58, 86, 114, 142, 170],
];

fn place_horizontal_line(matrix: &mut Matrix, y: i32, x: i32, length: i32, m: Module) {
    for i in 0..length {
        matrix.set(x + i, y, m);
    }
}

fn place_vertical_line(matrix: &mut Matrix, y: i32, x: i32, length: i32, m: Module) {
    for i in 0..length {
        matrix.set(x, y + i, m);
    }
}

fn place_rectangle(matrix: &mut Matrix, y: i32, x: i32, height: i32, width: i32, m: Module) {
    place_horizontal_line(matrix, y, x, width - 1, m);
    place_vertical_line(matrix, y, x + width - 1, height - 1, m);
    place_horizontal_line(matrix, y + height - 1, x + 1, width - 1, m);
    place_vertical_line(matrix, y + 1, x, height - 1, m);
}

fn place_filled_rectangle(matrix: &mut Matrix, y: i32, x: i32, height: i32, width: i32, m: Module) {
    for i in 0..height {
        for j in 0..width {
            matrix.set(x + j, y + i, m);
        }
    }
}

fn place_finder_pattern(matrix: &mut Matrix, y: i32, x: i32) {
    place_filled_rectangle(matrix, y, x, 7, 7, DARK);
    place_rectangle(matrix, y + 1, x + 1, 5, 5, LIGHT);
}

fn place_finder_patterns(matrix: &mut Matrix) {
    let size = matrix.size as i32;
    place_finder_pattern(matrix, 0, 0);
    place_finder_pattern(matrix, 0, size - 7);
    place_finder_pattern(matrix, size - 7, 0);
}

fn place_separators(matrix: &mut Matrix) {
    let size = matrix.size as i32;
    place_vertical_line(matrix, 0, 7, 7, LIGHT);
    place_horizontal_line(matrix, 7, 0, 8, LIGHT);
    place_vertical_line(matrix, 0, size - 8, 7, LIGHT);
    place_horizontal_line(matrix, 7, size - 8, 8, LIGHT);
    place_horizontal_line(matrix, size - 8, 0, 8, LIGHT);
    place_vertical_line(matrix, size - 7, 7, 7, LIGHT);
}

fn place_timing_patterns(matrix: &mut Matrix) {
    let size = matrix.size as i32;
    let mut dark = true;
    for i in 8..size - 8 {
        matrix.set(i, 6, if dark { DARK } else { LIGHT });
        matrix.set(6, i, if dark { DARK } else { LIGHT });
        dark = !dark;
    }
}

fn place_alignment_pattern(matrix: &mut Matrix, y: i32, x: i32) {
    place_filled_rectangle(matrix, y, x, 5, 5, DARK);
    place_rectangle(matrix, y + 1, x + 1, 3, 3, LIGHT);
}

fn place_alignment_patterns(matrix: &mut Matrix, version: u8) {
    let coordinates = ALIGNMENT_PATTERN_COORDINATES[usize::from(version) - 1];
    let n = coordinates.len();
    if n == 0 {
        return;
    }

    for i in 0..n {
        for j in 0..n {
            let interior_i = 0 < i && i < n - 1;
            let interior_j = 0 < j && j < n - 1;
            let both_last = i == n - 1 && j == n - 1;
            if interior_i || interior_j || both_last {
                place_alignment_pattern(matrix, coordinates[i] - 2, coordinates[j] - 2);
            }
        }
    }
}

fn place_dark_module(matrix: &mut Matrix, version: u8) {
    matrix.set(8, 4 * i32::from(version) + 9, DARK);
}

fn reserve_format_information(matrix: &mut Matrix) {
    let size = matrix.size as i32;
    place_vertical_line(matrix, 0, 8, 9, RESERVED);
    place_horizontal_line(matrix, 8, 0, 9, RESERVED);
    place_horizontal_line(matrix, 8, size - 8, 8, RESERVED);
    place_vertical_line(matrix, size - 8, 8, 8, RESERVED);
}

fn reserve_version_information(matrix: &mut Matrix, version: u8) {
    if version < 7 {
        return;
    }
    let size = matrix.size as i32;
    place_filled_rectangle(matrix, 0, size - 11, 6, 3, RESERVED);
    place_filled_rectangle(matrix, size - 11, 0, 3, 6, RESERVED);
}

fn place_function_patterns(matrix: &mut Matrix, version: u8) {
    reserve_format_information(matrix);
    reserve_version_information(matrix, version);
    place_finder_patterns(matrix);
    place_separators(matrix);
    place_timing_patterns(matrix);
    place_alignment_patterns(matrix, version);
    place_dark_module(matrix, version);
}

fn get_bit(bytes: &[u8], index: usize) -> bool {
    (bytes[index / 8] >> (7 - index % 8)) & 1 != 0
}

// Zig-zags upward/downward through two-column strides from the bottom-right
// corner, skipping the vertical timing column (x = 6) by jumping an extra
// column when leaving x = 8, and skipping any cell already claimed by a
// function pattern.
fn place_codeword_modules(matrix: &mut Matrix, codewords: &[u8]) {
    let size = matrix.size as i32;
    let mut x = size - 1;
    let mut y = size - 1;
    let mut vy: i32 = -1;
    let mut index = 0usize;

    let mut i = 0;
    while i < size / 2 {
        for j in 0..size {
            for k in 0..2 {
                let cy = y + vy * j;
                let cx = x - k;
                if matrix.get(cx, cy) == module::UNSET {
                    matrix.set(cx, cy, Module::data_bit(get_bit(codewords, index)));
                    index += 1;
                }
            }
        }

        x -= if x == 8 { 3 } else { 2 };
        y = size - 1 - y;
        vy = -vy;
        i += 1;
    }
}

/// Builds the unmasked matrix for `version`: function patterns drawn first,
/// then the codeword stream placed zig-zag into every remaining cell.
pub fn place_modules(version: u8, codewords: &[u8]) -> Matrix {
    let size = 17 + 4 * i32::from(version);
    let mut matrix = Matrix::new(size as usize);
    place_function_patterns(&mut matrix, version);
    place_codeword_modules(&mut matrix, codewords);
    matrix
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version1_has_no_alignment_patterns() {
        let matrix = place_modules(1, &vec![0u8; 26]);
        assert_eq!(matrix.size, 21);
        // Center of the matrix should not carry a function-pattern flag
        // from an alignment pattern (version 1 has none).
        assert!(!matrix.get(10, 10).is_function());
    }

    #[test]
    fn finder_pattern_present_at_origin() {
        let matrix = place_modules(1, &vec![0u8; 26]);
        assert_eq!(matrix.get(0, 0), DARK);
        assert_eq!(matrix.get(3, 3), DARK);
        assert_eq!(matrix.get(1, 1), LIGHT);
    }

    #[test]
    fn dark_module_position() {
        let matrix = place_modules(1, &vec![0u8; 26]);
        assert_eq!(matrix.get(8, 13), DARK);
    }

    #[test]
    fn version7_reserves_version_information() {
        let matrix = place_modules(7, &vec![0u8; 196]);
        assert!(matrix.get(matrix.size as i32 - 9, 0).is_blank());
        assert!(matrix.get(0, matrix.size as i32 - 9).is_blank());
    }
}
