//! Synthetic PDF417 symbols for tests, benches and the CLI
//!
//! Renders rows of symbol characters one pixel per module, in the cluster
//! PDF417 assigns to each row (`row % 3`). The rows share the grid height
//! evenly and the last row absorbs the remainder, so no blank scanlines
//! are left below the symbol.

use crate::decoder::classifier::{MODULES_IN_SYMBOL, pattern_for};
use crate::models::BitMatrix;

const SYMBOL_MASK: u32 = (1 << MODULES_IN_SYMBOL) - 1;

/// One 17-module block of a synthetic row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Block {
    /// A codeword rendered in the row's cluster
    Codeword(u16),
    /// A raw module pattern, leftmost module in bit 16
    Raw(u32),
}

/// Builder for square synthetic symbols
#[derive(Debug, Clone)]
pub struct SymbolRenderer {
    columns: usize,
    rows: Vec<Vec<Block>>,
}

impl SymbolRenderer {
    /// Renderer for symbols `columns` blocks wide, indicator columns included
    pub fn new(columns: usize) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    /// Append a row of blocks
    pub fn row(mut self, blocks: Vec<Block>) -> Self {
        self.rows.push(blocks);
        self
    }

    /// Append a row given as codewords, indicators included
    pub fn codewords(self, codewords: &[u16]) -> Self {
        self.row(codewords.iter().map(|&cw| Block::Codeword(cw)).collect())
    }

    /// Side length of the rendered grid
    pub fn dimension(&self) -> usize {
        self.columns * MODULES_IN_SYMBOL
    }

    /// Number of rows added so far
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Render the symbol.
    ///
    /// Returns `None` if a row is wider than the symbol, a codeword is out of
    /// range, or the rows do not fit in the grid height.
    pub fn render(&self) -> Option<BitMatrix> {
        let dimension = self.dimension();
        let mut grid = BitMatrix::square(dimension);
        if self.rows.is_empty() {
            return Some(grid);
        }

        let base_height = dimension / self.rows.len();
        if base_height == 0 {
            return None;
        }

        let mut top = 0;
        for (r, blocks) in self.rows.iter().enumerate() {
            if blocks.len() > self.columns {
                return None;
            }
            let height = if r + 1 == self.rows.len() {
                dimension - top
            } else {
                base_height
            };
            let cluster = (r % 3) as u8;

            for (b, block) in blocks.iter().enumerate() {
                let pattern = match *block {
                    Block::Codeword(cw) => pattern_for(cw, cluster)?,
                    Block::Raw(bits) => bits & SYMBOL_MASK,
                };
                for y in top..top + height {
                    grid.set_bits(b * MODULES_IN_SYMBOL, y, pattern, MODULES_IN_SYMBOL);
                }
            }
            top += height;
        }

        Some(grid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_dimensions() {
        let renderer = SymbolRenderer::new(4).codewords(&[1, 2, 3, 4]).codewords(&[1, 2, 3, 4]);
        assert_eq!(renderer.dimension(), 68);
        assert_eq!(renderer.row_count(), 2);
        let grid = renderer.render().unwrap();
        assert_eq!(grid.width(), 68);
        assert_eq!(grid.height(), 68);
    }

    #[test]
    fn test_raw_block_bits() {
        let grid = SymbolRenderer::new(1)
            .row(vec![Block::Raw(0x10001)])
            .render()
            .unwrap();
        assert!(grid.get(0, 0) && grid.get(16, 16));
        assert!(!grid.get(1, 0));
    }

    #[test]
    fn test_rejects_bad_rows() {
        assert!(SymbolRenderer::new(1).codewords(&[1, 2]).render().is_none());
        assert!(SymbolRenderer::new(2).codewords(&[1, 929]).render().is_none());
        let mut tall = SymbolRenderer::new(1);
        for _ in 0..18 {
            tall = tall.codewords(&[1]);
        }
        assert!(tall.render().is_none());
    }
}
