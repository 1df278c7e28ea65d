/// Converts one synchronized row into codewords
use crate::decoder::assembler::DecodeContext;
use crate::decoder::classifier::{MODULES_IN_SYMBOL, classify};
use crate::error::Result;

/// Build the 17-bit pattern of the block starting at `offset`.
///
/// A column counts as black when at least half of the row's scanlines
/// (integer division) were black there. The leftmost column is bit 16.
pub fn block_pattern(counters: &[u32], offset: usize, row_height: u32) -> u32 {
    let threshold = row_height / 2;
    let mut pattern = 0u32;
    for (k, &count) in counters[offset..offset + MODULES_IN_SYMBOL].iter().enumerate() {
        if count >= threshold {
            pattern |= 1 << (MODULES_IN_SYMBOL - 1 - k);
        }
    }
    pattern
}

/// Decode the blocks of one row into `ctx`.
///
/// The first block is the left row indicator and the last block the right
/// row indicator; neither is kept as payload. Columns past the last whole
/// block are not read. Unknown interior patterns become erasures, an
/// unknown right indicator is ignored.
pub fn decode_row(
    counters: &[u32],
    row_number: usize,
    row_height: u32,
    ctx: &mut DecodeContext,
) -> Result<()> {
    let blocks = counters.len() / MODULES_IN_SYMBOL;

    if cfg!(debug_assertions) && crate::debug::debug_enabled() {
        eprintln!(
            "PDF417: row {} height={} blocks={}",
            row_number, row_height, blocks
        );
    }

    for block in 0..blocks {
        let pattern = block_pattern(counters, block * MODULES_IN_SYMBOL, row_height);
        let codeword = classify(pattern);

        if block == 0 {
            ctx.ec_mut().observe_left(row_number, codeword);
            continue;
        }

        // The right indicator still needs a slot in the working buffer.
        ctx.check_slot()?;
        if block == blocks - 1 {
            ctx.ec_mut().observe_right(row_number, codeword);
            continue;
        }

        match codeword {
            Some(value) => ctx.push_codeword(value)?,
            None => ctx.push_erasure()?,
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decoder::classifier::pattern_for;

    fn counters_for(patterns: &[u32], height: u32) -> Vec<u32> {
        let mut counters = Vec::with_capacity(patterns.len() * MODULES_IN_SYMBOL);
        for &pattern in patterns {
            for k in 0..MODULES_IN_SYMBOL {
                let black = (pattern >> (MODULES_IN_SYMBOL - 1 - k)) & 1 == 1;
                counters.push(if black { height } else { 0 });
            }
        }
        counters
    }

    #[test]
    fn test_block_pattern_majority_vote() {
        let mut counters = vec![0u32; 17];
        counters[0] = 5; // 5 >= 10 / 2
        counters[1] = 4;
        counters[16] = 10;
        assert_eq!(block_pattern(&counters, 0, 10), (1 << 16) | 1);
    }

    #[test]
    fn test_block_pattern_odd_height_rounds_down() {
        let mut counters = vec![0u32; 17];
        counters[3] = 2; // 7 / 2 == 3
        counters[4] = 3;
        assert_eq!(block_pattern(&counters, 0, 7), 1 << 12);
    }

    #[test]
    fn test_indicators_are_not_payload() {
        let patterns = [
            pattern_for(3, 0).unwrap(),
            pattern_for(100, 0).unwrap(),
            pattern_for(200, 0).unwrap(),
            pattern_for(4, 0).unwrap(),
        ];
        let mut ctx = DecodeContext::new();
        decode_row(&counters_for(&patterns, 8), 0, 8, &mut ctx).unwrap();
        assert_eq!(ctx.codewords(), &[100, 200]);
        assert!(ctx.erasures().is_empty());
    }

    #[test]
    fn test_unknown_interior_block_is_erasure() {
        let patterns = [
            pattern_for(3, 0).unwrap(),
            pattern_for(100, 0).unwrap(),
            0,
            pattern_for(4, 0).unwrap(),
        ];
        let mut ctx = DecodeContext::new();
        ctx.push_codeword(9).unwrap();
        decode_row(&counters_for(&patterns, 8), 0, 8, &mut ctx).unwrap();
        assert_eq!(ctx.codewords(), &[9, 100, 0]);
        assert_eq!(ctx.erasures(), &[2]);
    }

    #[test]
    fn test_unknown_right_indicator_is_dropped() {
        let patterns = [pattern_for(3, 0).unwrap(), pattern_for(100, 0).unwrap(), 0];
        let mut ctx = DecodeContext::new();
        decode_row(&counters_for(&patterns, 8), 0, 8, &mut ctx).unwrap();
        assert_eq!(ctx.codewords(), &[100]);
        assert!(ctx.erasures().is_empty());
    }

    #[test]
    fn test_degenerate_rows_emit_nothing() {
        let mut ctx = DecodeContext::new();
        let one = counters_for(&[pattern_for(1, 0).unwrap()], 4);
        decode_row(&one, 0, 4, &mut ctx).unwrap();
        let two = counters_for(&[pattern_for(1, 0).unwrap(), pattern_for(2, 0).unwrap()], 4);
        decode_row(&two, 0, 4, &mut ctx).unwrap();
        decode_row(&[0u32; 10], 0, 4, &mut ctx).unwrap();
        assert!(ctx.codewords().is_empty());
    }

    #[test]
    fn test_partial_trailing_block_is_ignored() {
        let patterns = [
            pattern_for(3, 0).unwrap(),
            pattern_for(100, 0).unwrap(),
            pattern_for(4, 0).unwrap(),
        ];
        let mut counters = counters_for(&patterns, 6);
        counters.extend_from_slice(&[6; 9]);
        let mut ctx = DecodeContext::new();
        decode_row(&counters, 0, 6, &mut ctx).unwrap();
        assert_eq!(ctx.codewords(), &[100]);
    }

    #[test]
    fn test_indicator_triple_recovers_level() {
        let mut ctx = DecodeContext::new();
        for (row, (left, right)) in [(3u16, 4u16), (7, 5), (6, 7)].into_iter().enumerate() {
            let cluster = (row % 3) as u8;
            let patterns = [
                pattern_for(left, cluster).unwrap(),
                pattern_for(100, cluster).unwrap(),
                pattern_for(right, cluster).unwrap(),
            ];
            decode_row(&counters_for(&patterns, 6), row, 6, &mut ctx).unwrap();
        }
        assert_eq!(ctx.ec().level(), Some(2));
        assert_eq!(ctx.codewords(), &[100, 100, 100]);
    }
}
