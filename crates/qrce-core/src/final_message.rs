use crate::gf256::{divide_by_generator_polynomial, generator_polynomial};
use crate::rs_block::RsBlock;

// Interleaves `codewords` column-major across the block's two groups: group-1
// blocks contribute `num_data_codewords1` rounds, then the extra round that
// only group-2 blocks have (when `num_data_codewords2 > num_data_codewords1`).
fn interleave(
    codewords: &[u8],
    num_blocks1: usize,
    num_data_codewords1: usize,
    num_blocks2: usize,
    num_data_codewords2: usize,
) -> Vec<u8> {
    let mut interleaved = Vec::with_capacity(codewords.len());

    for i in 0..num_data_codewords1 {
        for j in 0..num_blocks1 {
            interleaved.push(codewords[i + j * num_data_codewords1]);
        }
        for j in 0..num_blocks2 {
            interleaved.push(
                codewords[i + j * num_data_codewords2 + num_blocks1 * num_data_codewords1],
            );
        }
    }

    for i in num_data_codewords1..num_data_codewords2 {
        for j in 0..num_blocks2 {
            interleaved.push(
                codewords[i + j * num_data_codewords2 + num_blocks1 * num_data_codewords1],
            );
        }
    }

    interleaved
}

/// Splits `data_codewords` into the block's groups, computes each block's
/// error correction codewords via Reed-Solomon division, and returns the
/// interleaved final message: interleaved data, then interleaved EC
/// codewords, then a single trailing zero byte for the remainder bits.
pub fn construct_final_message(data_codewords: &[u8], block: RsBlock) -> Vec<u8> {
    let generator = generator_polynomial(block.num_ec_codewords);

    let mut ec_codewords = Vec::with_capacity(block.total_blocks() * block.num_ec_codewords);
    let mut offset = 0;
    for _ in 0..block.num_blocks1 {
        let data = &data_codewords[offset..offset + block.num_data_codewords1];
        ec_codewords.extend(divide_by_generator_polynomial(data, &generator));
        offset += block.num_data_codewords1;
    }
    for _ in 0..block.num_blocks2 {
        let data = &data_codewords[offset..offset + block.num_data_codewords2];
        ec_codewords.extend(divide_by_generator_polynomial(data, &generator));
        offset += block.num_data_codewords2;
    }

    let interleaved_data = interleave(
        data_codewords,
        block.num_blocks1,
        block.num_data_codewords1,
        block.num_blocks2,
        block.num_data_codewords2,
    );
    let interleaved_ec = interleave(
        &ec_codewords,
        block.num_blocks1,
        block.num_ec_codewords,
        block.num_blocks2,
        block.num_ec_codewords,
    );

    let mut message = Vec::with_capacity(interleaved_data.len() + interleaved_ec.len() + 1);
    message.extend(interleaved_data);
    message.extend(interleaved_ec);
    message.push(0);
    message
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_block_passthrough_order() {
        let block = RsBlock {
            num_blocks1: 1,
            num_data_codewords1: 5,
            num_blocks2: 0,
            num_data_codewords2: 0,
            num_ec_codewords: 2,
        };
        let data = [1, 2, 3, 4, 5];
        let message = construct_final_message(&data, block);
        assert_eq!(&message[..5], &data);
        assert_eq!(message.len(), 5 + 2 + 1);
        assert_eq!(*message.last().unwrap(), 0);
    }

    #[test]
    fn two_groups_interleave_columnwise() {
        let block = RsBlock {
            num_blocks1: 2,
            num_data_codewords1: 2,
            num_blocks2: 1,
            num_data_codewords2: 3,
            num_ec_codewords: 1,
        };
        // block0: [1,2], block1: [3,4], block2: [5,6,7]
        let data = [1, 2, 3, 4, 5, 6, 7];
        let message = construct_final_message(&data, block);
        assert_eq!(&message[..7], &[1, 3, 5, 2, 4, 6, 7]);
    }
}
