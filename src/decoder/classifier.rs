/// Exact lookup of 17-module patterns in the PDF417 symbol tables
use crate::decoder::tables::{CODEWORD_TABLE, SYMBOL_TABLE, TABLE_LEN};
use crate::models::MAX_CODEWORD_VALUE;
use std::sync::OnceLock;

/// Modules in one symbol character
pub const MODULES_IN_SYMBOL: usize = 17;
/// Codewords per cluster
pub const CODEWORDS_PER_CLUSTER: u16 = 929;
/// Number of row clusters; row `r` uses cluster `r % 3`
pub const CLUSTERS: u8 = 3;

// Patterns are masked to 18 bits before lookup, one wider than a symbol.
const PATTERN_MASK: u32 = 0x3ffff;

/// Index of `pattern` in [`SYMBOL_TABLE`], if the table holds it exactly
pub fn find_index(pattern: u32) -> Option<usize> {
    SYMBOL_TABLE.binary_search(&(pattern & PATTERN_MASK)).ok()
}

/// Codeword carried by a block pattern, or `None` if the pattern is unknown
pub fn classify(pattern: u32) -> Option<u16> {
    find_index(pattern).map(|idx| (CODEWORD_TABLE[idx] - 1) % CODEWORDS_PER_CLUSTER)
}

/// Cluster (0, 1 or 2) a recognized pattern belongs to
pub fn cluster_of(pattern: u32) -> Option<u8> {
    find_index(pattern).map(|idx| ((CODEWORD_TABLE[idx] - 1) / CODEWORDS_PER_CLUSTER) as u8)
}

static PATTERNS_BY_VALUE: OnceLock<Vec<u32>> = OnceLock::new();

fn patterns_by_value() -> &'static [u32] {
    PATTERNS_BY_VALUE.get_or_init(|| {
        let mut patterns = vec![0u32; TABLE_LEN];
        for (pattern, &value) in SYMBOL_TABLE.iter().zip(CODEWORD_TABLE.iter()) {
            patterns[(value - 1) as usize] = *pattern;
        }
        patterns
    })
}

/// Pattern that encodes `codeword` in the given cluster (inverse of [`classify`])
pub fn pattern_for(codeword: u16, cluster: u8) -> Option<u32> {
    if codeword > MAX_CODEWORD_VALUE || cluster >= CLUSTERS {
        return None;
    }
    let slot = cluster as usize * CODEWORDS_PER_CLUSTER as usize + codeword as usize;
    patterns_by_value().get(slot).copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_table_key_classifies() {
        for (idx, &key) in SYMBOL_TABLE.iter().enumerate() {
            assert_eq!(classify(key), Some((CODEWORD_TABLE[idx] - 1) % 929));
        }
    }

    #[test]
    fn test_first_key() {
        assert_eq!(SYMBOL_TABLE[0], 0x1025e);
        assert_eq!(classify(0x1025e), Some(768));
        assert_eq!(cluster_of(0x1025e), Some(2));
    }

    #[test]
    fn test_gap_between_keys_is_not_found() {
        // 0x1025e and 0x1027a are adjacent keys
        assert_eq!(classify(0x1025f), None);
        assert_eq!(classify(0x10260), None);
        assert_eq!(classify(0), None);
        assert_eq!(classify(0x1ffff), None);
    }

    #[test]
    fn test_mask_keeps_eighteen_bits() {
        // Bit 18 is dropped, bit 17 is not
        assert_eq!(classify(0x1025e | (1 << 18)), Some(768));
        assert_eq!(classify(0x1025e | (1 << 17)), None);
    }

    #[test]
    fn test_pattern_for_round_trips_all_clusters() {
        for cluster in 0..CLUSTERS {
            for codeword in [0u16, 1, 17, 500, 928] {
                let pattern = pattern_for(codeword, cluster).unwrap();
                assert_eq!(classify(pattern), Some(codeword));
                assert_eq!(cluster_of(pattern), Some(cluster));
            }
        }
        assert_eq!(pattern_for(929, 0), None);
        assert_eq!(pattern_for(0, 3), None);
    }

    #[test]
    fn test_pattern_for_stops_at_max_codeword() {
        for cluster in 0..CLUSTERS {
            let pattern = pattern_for(MAX_CODEWORD_VALUE, cluster).unwrap();
            assert_eq!(classify(pattern), Some(MAX_CODEWORD_VALUE));
            assert_eq!(pattern_for(MAX_CODEWORD_VALUE + 1, cluster), None);
        }
    }
}
