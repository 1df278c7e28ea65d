/// Largest codeword value a PDF417 symbol character can carry
pub const MAX_CODEWORD_VALUE: u16 = 928;

/// Raw codewords read from one PDF417 symbol, ready for error correction
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DecodeResult {
    codewords: Vec<u16>,
    erasures: Vec<usize>,
    ec_level: Option<u8>,
    rows: usize,
}

impl DecodeResult {
    /// Create a result from already trimmed buffers
    pub fn new(
        codewords: Vec<u16>,
        erasures: Vec<usize>,
        ec_level: Option<u8>,
        rows: usize,
    ) -> Self {
        Self {
            codewords,
            erasures,
            ec_level,
            rows,
        }
    }

    /// Payload and error-correction codewords in symbol order, row indicators removed.
    /// Erased positions hold a 0 placeholder.
    pub fn codewords(&self) -> &[u16] {
        &self.codewords
    }

    /// Ascending indices into [`codewords`](Self::codewords) that could not be read
    pub fn erasures(&self) -> &[usize] {
        &self.erasures
    }

    /// Error-correction level recovered from the row indicators, if any triple agreed
    pub fn ec_level(&self) -> Option<u8> {
        self.ec_level
    }

    /// Error-correction level with -1 standing for "undetermined"
    pub fn ec_level_or_sentinel(&self) -> i32 {
        self.ec_level.map_or(-1, i32::from)
    }

    /// Number of barcode rows the synchronizer finalized
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// True when no codeword was read at all
    pub fn is_empty(&self) -> bool {
        self.codewords.is_empty()
    }

    /// Split into `(codewords, erasures, ec_level)` for a downstream corrector
    pub fn into_parts(self) -> (Vec<u16>, Vec<usize>, Option<u8>) {
        (self.codewords, self.erasures, self.ec_level)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sentinel_for_missing_level() {
        let result = DecodeResult::default();
        assert!(result.is_empty());
        assert_eq!(result.ec_level_or_sentinel(), -1);

        let result = DecodeResult::new(vec![1, 2], vec![1], Some(3), 1);
        assert_eq!(result.ec_level_or_sentinel(), 3);
        assert_eq!(result.into_parts(), (vec![1, 2], vec![1], Some(3)));
    }
}
