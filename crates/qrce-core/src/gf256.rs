use std::sync::OnceLock;

// Log/exponent tables for GF(2^8) under the primitive polynomial
// x^8 + x^4 + x^3 + x^2 + 1 (0x11D) with primitive element alpha = 2.
struct Tables {
    exp: [u8; 256],
    log: [u8; 256],
}

fn tables() -> &'static Tables {
    static TABLES: OnceLock<Tables> = OnceLock::new();
    TABLES.get_or_init(|| {
        let mut exp = [0u8; 256];
        let mut log = [0u8; 256];
        let mut x: u32 = 1;
        for i in 0..255usize {
            exp[i] = x as u8;
            log[x as usize] = i as u8;
            x <<= 1;
            if x & 0x100 != 0 {
                x ^= 0x11D;
            }
        }
        exp[255] = 1;
        Tables { exp, log }
    })
}

fn exp(i: usize) -> u8 {
    tables().exp[i % 255]
}

fn log(x: u8) -> u8 {
    tables().log[x as usize]
}

/// Builds the generator polynomial of the given degree, stored as
/// coefficients in increasing degree order with the leading (degree-th)
/// coefficient implicitly 1 and omitted. Each stored byte is the *exponent*
/// of alpha for that coefficient (i.e. already in log form), matching the
/// representation the original division routine expects.
pub fn generator_polynomial(degree: usize) -> Vec<u8> {
    let mut polynomial = vec![0u8; degree];

    // Repeatedly multiplies the running polynomial by (x - a^i), i.e. by
    // (x + a^i) since GF(2) subtraction is XOR.
    for i in 1..degree {
        for j in (1..=i).rev() {
            let a = exp(polynomial[j - 1] as usize);
            let b = exp((polynomial[j] as usize + i) % 255);
            polynomial[j] = log(a ^ b);
        }
        polynomial[0] = ((polynomial[0] as usize + i) % 255) as u8;
    }

    polynomial
}

/// Divides `message` by the generator polynomial (as produced by
/// [`generator_polynomial`]), returning the remainder — the error
/// correction codewords for that block.
pub fn divide_by_generator_polynomial(message: &[u8], generator: &[u8]) -> Vec<u8> {
    let generator_len = generator.len();
    let mut buffer = vec![0u8; message.len() + generator_len];
    buffer[..message.len()].copy_from_slice(message);

    for i in 0..message.len() {
        if buffer[i] != 0 {
            let factor = log(buffer[i]);
            for j in 1..=generator_len {
                let g = generator[generator_len - j];
                buffer[i + j] ^= exp(factor as usize + g as usize);
            }
        }
    }

    buffer[message.len()..].to_vec()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generator_polynomial_degree_2() {
        assert_eq!(generator_polynomial(2), vec![1, 25]);
    }

    #[test]
    fn generator_polynomial_degree_3() {
        assert_eq!(generator_polynomial(3), vec![3, 199, 198]);
    }

    #[test]
    fn generator_polynomial_degree_68() {
        let expected: [u8; 68] = [
            238, 163, 8, 5, 3, 127, 184, 101, 27, 235, 238, 43, 198, 175, 215, 82, 32, 54, 2,
            118, 225, 166, 241, 137, 125, 41, 177, 52, 231, 95, 97, 199, 52, 227, 89, 160, 173,
            253, 84, 15, 84, 93, 151, 203, 220, 165, 202, 60, 52, 133, 205, 190, 101, 84, 150,
            43, 254, 32, 160, 90, 70, 77, 93, 224, 33, 223, 159, 247,
        ];
        assert_eq!(generator_polynomial(68), expected.to_vec());
    }

    #[test]
    fn divide_divisible() {
        let generator = generator_polynomial(2);
        assert_eq!(
            divide_by_generator_polynomial(&[1, 3, 2], &generator),
            vec![0, 0]
        );
        assert_eq!(
            divide_by_generator_polynomial(&[1, 2, 1, 2], &generator),
            vec![0, 0]
        );
        assert_eq!(
            divide_by_generator_polynomial(&[1, 2, 0, 1, 2], &generator),
            vec![0, 0]
        );
    }

    #[test]
    fn divide_small_cases() {
        let generator = generator_polynomial(2);
        assert_eq!(divide_by_generator_polynomial(&[0], &generator), vec![0, 0]);
        assert_eq!(divide_by_generator_polynomial(&[1], &generator), vec![3, 2]);
        assert_eq!(
            divide_by_generator_polynomial(&[0, 0], &generator),
            vec![0, 0]
        );
        assert_eq!(
            divide_by_generator_polynomial(&[0, 1], &generator),
            vec![3, 2]
        );
        assert_eq!(
            divide_by_generator_polynomial(&[1, 0], &generator),
            vec![7, 6]
        );
    }

    #[test]
    fn divide_degree_10() {
        let generator = [45, 32, 94, 64, 70, 118, 61, 46, 67, 251];
        let message = [
            16, 32, 12, 86, 97, 128, 236, 17, 236, 17, 236, 17, 236, 17, 236, 17,
        ];
        let expected = [165, 36, 212, 193, 237, 54, 199, 135, 44, 85];
        assert_eq!(
            divide_by_generator_polynomial(&message, &generator),
            expected.to_vec()
        );
    }

    #[test]
    fn divide_degree_13() {
        let generator = [
            78, 140, 206, 218, 130, 104, 106, 100, 86, 100, 176, 152, 74,
        ];
        let message = [
            32, 91, 11, 120, 209, 114, 220, 77, 67, 64, 236, 17, 236,
        ];
        let expected = [
            168, 72, 22, 82, 217, 54, 156, 0, 46, 15, 180, 122, 16,
        ];
        assert_eq!(
            divide_by_generator_polynomial(&message, &generator),
            expected.to_vec()
        );

        let message = [
            32, 240, 11, 120, 209, 114, 220, 77, 67, 64, 236, 17, 236,
        ];
        let expected = [
            146, 204, 111, 143, 33, 22, 186, 54, 199, 231, 243, 170, 255,
        ];
        assert_eq!(
            divide_by_generator_polynomial(&message, &generator),
            expected.to_vec()
        );
    }
}
