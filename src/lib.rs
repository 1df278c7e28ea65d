//! RustPDF417 - PDF417 row synchronization and codeword extraction
//!
//! Reads a rectified binary image of one PDF417 symbol and returns its raw
//! codewords, the positions of unreadable codewords and the error-correction
//! level advertised by the row indicators. Error correction and payload
//! decoding happen downstream.

#![warn(missing_docs)]
#![allow(clippy::missing_docs_in_private_items)]

/// Codeword extraction (row sync, block decoding, classification)
pub mod decoder;
/// Structural decode failures
pub mod error;
/// Core data structures (BitMatrix, PixelGrid, DecodeResult)
pub mod models;
/// Image loading and synthetic symbol rendering
pub mod tools;

mod debug;

pub use decoder::config::SyncParams;
pub use error::{DecodeError, Result};
pub use models::{BitMatrix, DecodeResult, PixelGrid};

use decoder::assembler::DecodeContext;
use decoder::synchronizer::synchronize;
use rayon::prelude::*;

/// Decode one PDF417 symbol using the environment-configured sync parameters
///
/// # Arguments
/// * `grid` - Rectified square binary image, one pixel per module horizontally
///
/// # Returns
/// The codewords, erasures and error-correction level, or a structural
/// failure when the grid cannot be a PDF417 symbol
pub fn decode<G: PixelGrid + ?Sized>(grid: &G) -> Result<DecodeResult> {
    decode_with_params(grid, &SyncParams::from_env())
}

/// Decode one PDF417 symbol with explicit sync parameters
pub fn decode_with_params<G: PixelGrid + ?Sized>(
    grid: &G,
    params: &SyncParams,
) -> Result<DecodeResult> {
    let mut ctx = DecodeContext::new();
    let rows = synchronize(grid, params, &mut ctx)?;

    if cfg!(debug_assertions) && debug::debug_enabled() {
        eprintln!(
            "PDF417: {} rows, {} codewords, {} erasures, ec level {:?}",
            rows,
            ctx.codewords().len(),
            ctx.erasures().len(),
            ctx.ec().level()
        );
    }

    Ok(ctx.finish())
}

/// Decode independent symbols in parallel
///
/// Results are returned in input order.
pub fn decode_batch<G: PixelGrid + Sync>(grids: &[G]) -> Vec<Result<DecodeResult>> {
    let params = SyncParams::from_env();
    grids
        .par_iter()
        .map(|grid| decode_with_params(grid, &params))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tools::synth::{Block, SymbolRenderer};

    #[test]
    fn test_decode_empty() {
        let grid = BitMatrix::square(0);
        let result = decode_with_params(&grid, &SyncParams::default()).unwrap();
        assert!(result.is_empty());
        assert_eq!(result.rows(), 0);
        assert_eq!(result.ec_level_or_sentinel(), -1);
    }

    #[test]
    fn test_decode_single_row() {
        let grid = SymbolRenderer::new(3)
            .row(vec![Block::Codeword(1), Block::Raw(0x1025e), Block::Codeword(2)])
            .render()
            .unwrap();
        let result = decode_with_params(&grid, &SyncParams::default()).unwrap();
        assert_eq!(result.codewords(), &[768]);
        assert!(result.erasures().is_empty());
        assert_eq!(result.rows(), 1);
    }

    #[test]
    fn test_decode_batch_keeps_order() {
        let first = SymbolRenderer::new(3).codewords(&[1, 10, 2]).render().unwrap();
        let second = SymbolRenderer::new(3).codewords(&[1, 20, 2]).render().unwrap();
        let results = decode_batch(&[first, second]);
        assert_eq!(results[0].as_ref().unwrap().codewords(), &[10]);
        assert_eq!(results[1].as_ref().unwrap().codewords(), &[20]);
    }
}
