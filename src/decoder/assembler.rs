/// Per-decode working buffers and final result assembly
use crate::decoder::ec_level::EcLevelRecoverer;
use crate::error::{DecodeError, Result};
use crate::models::{DecodeResult, MAX_CODEWORD_VALUE};

/// Maximum codewords (data + error correction) in one symbol
pub const MAX_CODEWORDS: usize = 929;

/// Everything one decode accumulates; dropped or finished at the end of the call
#[derive(Debug, Clone)]
pub struct DecodeContext {
    codewords: Vec<u16>,
    erasures: Vec<usize>,
    ec: EcLevelRecoverer,
}

impl DecodeContext {
    /// Empty context with buffers sized for a full symbol
    pub fn new() -> Self {
        Self {
            codewords: Vec::with_capacity(MAX_CODEWORDS),
            erasures: Vec::with_capacity(MAX_CODEWORDS),
            ec: EcLevelRecoverer::new(),
        }
    }

    /// Fail if the next codeword slot lies past the symbol capacity
    pub fn check_slot(&self) -> Result<()> {
        if self.codewords.len() >= MAX_CODEWORDS {
            return Err(DecodeError::CodewordCapacity {
                capacity: MAX_CODEWORDS,
            });
        }
        Ok(())
    }

    /// Append a payload codeword
    pub fn push_codeword(&mut self, codeword: u16) -> Result<()> {
        debug_assert!(codeword <= MAX_CODEWORD_VALUE);
        self.check_slot()?;
        self.codewords.push(codeword);
        Ok(())
    }

    /// Append a placeholder and flag its position as an erasure
    pub fn push_erasure(&mut self) -> Result<()> {
        self.check_slot()?;
        self.erasures.push(self.codewords.len());
        self.codewords.push(0);
        Ok(())
    }

    /// Codewords written so far
    pub fn codewords(&self) -> &[u16] {
        &self.codewords
    }

    /// Erasure positions written so far
    pub fn erasures(&self) -> &[usize] {
        &self.erasures
    }

    /// Indicator bookkeeping
    pub fn ec(&self) -> &EcLevelRecoverer {
        &self.ec
    }

    /// Mutable indicator bookkeeping
    pub fn ec_mut(&mut self) -> &mut EcLevelRecoverer {
        &mut self.ec
    }

    /// Trim the working buffers and produce the result
    pub fn finish(self) -> DecodeResult {
        let DecodeContext {
            mut codewords,
            mut erasures,
            ec,
        } = self;
        codewords.shrink_to_fit();
        erasures.shrink_to_fit();
        DecodeResult::new(codewords, erasures, ec.level(), ec.rows())
    }
}

impl Default for DecodeContext {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_erasure_indexes_align_with_codewords() {
        let mut ctx = DecodeContext::new();
        ctx.push_codeword(5).unwrap();
        ctx.push_erasure().unwrap();
        ctx.push_codeword(6).unwrap();
        let result = ctx.finish();
        assert_eq!(result.codewords(), &[5, 0, 6]);
        assert_eq!(result.erasures(), &[1]);
    }

    #[test]
    fn test_capacity_is_enforced() {
        let mut ctx = DecodeContext::new();
        for _ in 0..MAX_CODEWORDS {
            ctx.push_codeword(1).unwrap();
        }
        assert_eq!(
            ctx.push_codeword(1),
            Err(DecodeError::CodewordCapacity { capacity: 929 })
        );
        assert!(ctx.push_erasure().is_err());
    }

    #[test]
    fn test_finish_trims_buffers() {
        let mut ctx = DecodeContext::new();
        ctx.push_codeword(1).unwrap();
        let (codewords, erasures, level) = ctx.finish().into_parts();
        assert_eq!(codewords.len(), 1);
        assert!(codewords.capacity() < MAX_CODEWORDS);
        assert!(erasures.is_empty());
        assert_eq!(level, None);
    }
}
