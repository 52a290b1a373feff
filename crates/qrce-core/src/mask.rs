use crate::module::{Matrix, Module, BLANK, COLOR, FUNCTION};

const N1: u32 = 3;
const N2: u32 = 3;
const N3: u32 = 40;
const N4: u32 = 10;

// The eight mask conditions from JIS X 0510:2018 Table 13. Each returns
// true where the mask flips the underlying color.
fn mask_condition(pattern: u8, y: i32, x: i32) -> bool {
    match pattern {
        0 => (y + x) % 2 == 0,
        1 => y % 2 == 0,
        2 => x % 3 == 0,
        3 => (y + x) % 3 == 0,
        4 => (y / 2 + x / 3) % 2 == 0,
        5 => (y * x) % 2 + (y * x) % 3 == 0,
        6 => ((y * x) % 2 + (y * x) % 3) % 2 == 0,
        7 => ((y + x) % 2 + (y * x) % 3) % 2 == 0,
        _ => unreachable!("mask pattern out of range"),
    }
}

/// Applies `pattern` to `unmasked`, producing a matrix whose non-function
/// cells carry their post-mask color and whose function cells have had
/// their `FUNCTION` flag cleared (reserved format/version cells keep
/// `BLANK`, so penalty scoring can still recognize them as not yet placed).
pub fn apply_mask(unmasked: &Matrix, pattern: u8) -> Matrix {
    let size = unmasked.size as i32;
    let mut masked = Matrix::new(unmasked.size);

    for y in 0..size {
        for x in 0..size {
            let cell = unmasked.get(x, y).raw();
            let out = if cell & FUNCTION != 0 {
                cell ^ FUNCTION
            } else {
                cell ^ u8::from(mask_condition(pattern, y, x))
            };
            masked.set(x, y, Module(out));
        }
    }

    masked
}

fn penalty_condition1(masked: &Matrix) -> u32 {
    let size = masked.size as i32;
    let mut penalty = 0u32;

    for h in 0..2 {
        for i in 0..size {
            let mut feature = 0u8;
            let mut length: u32 = 0;

            for j in 0..size {
                let (y, x) = if h == 0 { (i, j) } else { (j, i) };
                let module = masked.get(x, y).raw();

                if module == feature {
                    length += 1;
                    continue;
                }

                if length >= 5 && feature != BLANK {
                    penalty += N1 + (length - 5);
                }

                feature = module;
                length = 1;
            }

            if length >= 5 && feature != BLANK {
                penalty += N1 + (length - 5);
            }
        }
    }

    penalty
}

fn penalty_condition2(masked: &Matrix) -> u32 {
    let size = masked.size as i32;
    let mut penalty = 0u32;

    for i in 0..size - 1 {
        for j in 0..size - 1 {
            let module = masked.get(j, i).raw();
            if module == masked.get(j + 1, i).raw()
                && module == masked.get(j, i + 1).raw()
                && module == masked.get(j + 1, i + 1).raw()
            {
                penalty += N2;
            }
        }
    }

    penalty
}

fn penalty_condition3(masked: &Matrix) -> u32 {
    let size = masked.size as i32;
    let mut penalty = 0u32;

    for h in 0..2 {
        for i in 0..size {
            let mut feature: u32 = 0;
            let mut length: u32 = 0;

            for j in 0..size {
                let (y, x) = if h == 0 { (i, j) } else { (j, i) };
                let module = masked.get(x, y).raw();

                if module == BLANK {
                    feature = 0;
                    length = 0;
                    continue;
                }

                feature = ((feature << 1) | u32::from(module)) & 0x7FF;
                length += 1;

                if length >= 11 && (feature == 0x5D || feature == 0x5D0) {
                    penalty += N3;
                }
            }
        }
    }

    penalty
}

fn penalty_condition4(masked: &Matrix) -> u32 {
    let size = masked.size as i32;
    let total = size * size;
    let mut dark = 0i32;

    for y in 0..size {
        for x in 0..size {
            if masked.get(x, y).raw() == COLOR {
                dark += 1;
            }
        }
    }

    (((dark * 2 - total).unsigned_abs() * 10) / total as u32) * N4
}

fn penalty_score(masked: &Matrix) -> u32 {
    penalty_condition1(masked)
        + penalty_condition2(masked)
        + penalty_condition3(masked)
        + penalty_condition4(masked)
}

/// Tries all eight mask patterns against `unmasked` and returns the masked
/// matrix and pattern number with the lowest total penalty score, the
/// lowest-numbered pattern winning ties.
pub fn apply_lowest_penalty_mask(unmasked: &Matrix) -> (Matrix, u8) {
    let mut best_pattern = 0u8;
    let mut best_masked = apply_mask(unmasked, 0);
    let mut best_score = penalty_score(&best_masked);

    for pattern in 1..8u8 {
        let masked = apply_mask(unmasked, pattern);
        let score = penalty_score(&masked);
        if score < best_score {
            best_score = score;
            best_pattern = pattern;
            best_masked = masked;
        }
    }

    (best_masked, best_pattern)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::module_placement::place_modules;

    #[test]
    fn picks_a_valid_pattern() {
        let unmasked = place_modules(1, &vec![0u8; 26]);
        let (_masked, pattern) = apply_lowest_penalty_mask(&unmasked);
        assert!(pattern < 8);
    }

    #[test]
    fn function_cells_lose_function_flag_after_masking() {
        let unmasked = place_modules(1, &vec![0u8; 26]);
        let masked = apply_mask(&unmasked, 0);
        assert_eq!(masked.get(0, 0).raw() & FUNCTION, 0);
    }
}
