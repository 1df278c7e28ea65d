//! Row synchronization
//!
//! Consecutive rows of a PDF417 symbol are drawn from different clusters,
//! so the scanline where one row ends and the next begins differs from its
//! predecessor in many pixels, while scanlines inside a row are nearly
//! identical. The synchronizer walks the grid top to bottom, accumulates
//! black-pixel counts per column while scanlines keep matching, and hands
//! each completed row to the row decoder.

use crate::decoder::assembler::DecodeContext;
use crate::decoder::config::SyncParams;
use crate::decoder::row_decoder::decode_row;
use crate::error::{DecodeError, Result};
use crate::models::PixelGrid;

/// Maximum rows in a PDF417 symbol
pub const MAX_ROWS: usize = 90;

/// Counters of the row currently being accumulated
struct RowAccumulator {
    counters: Vec<u32>,
    height: u32,
    matching_scans: usize,
    active: bool,
}

impl RowAccumulator {
    fn new(width: usize) -> Self {
        Self {
            counters: vec![0; width],
            height: 0,
            matching_scans: 0,
            active: false,
        }
    }

    fn accumulate<G: PixelGrid + ?Sized>(&mut self, grid: &G, y: usize, min_matching_scans: usize) {
        for (x, counter) in self.counters.iter_mut().enumerate() {
            if grid.get(x, y) {
                *counter += 1;
            }
        }
        self.matching_scans += 1;
        if self.matching_scans >= min_matching_scans {
            self.active = true;
        }
    }

    fn reset_row(&mut self) {
        self.counters.fill(0);
        self.height = 0;
    }

    fn break_run(&mut self) {
        self.matching_scans = 0;
        self.active = false;
    }
}

/// Number of columns where scanline `y` differs from scanline `y - 1`
pub fn scanline_difference<G: PixelGrid + ?Sized>(grid: &G, y: usize) -> usize {
    (0..grid.dimension())
        .filter(|&x| grid.get(x, y) != grid.get(x, y - 1))
        .count()
}

fn too_many_rows() -> DecodeError {
    if cfg!(debug_assertions) && crate::debug::debug_enabled() {
        eprintln!("PDF417: aborting, more than {} rows", MAX_ROWS);
    }
    DecodeError::TooManyRows { limit: MAX_ROWS }
}

/// Scan `grid` and decode every detected row into `ctx`.
///
/// Returns the number of rows finalized. The row count is also published
/// into the context once the scan completes.
pub fn synchronize<G: PixelGrid + ?Sized>(
    grid: &G,
    params: &SyncParams,
    ctx: &mut DecodeContext,
) -> Result<usize> {
    let dimension = grid.dimension();
    let mut row = RowAccumulator::new(dimension);
    let mut row_number = 0usize;

    for y in 1..dimension {
        if row_number >= MAX_ROWS {
            return Err(too_many_rows());
        }

        if scanline_difference(grid, y) <= params.max_row_difference {
            row.accumulate(grid, y, params.min_matching_scans);
        } else {
            if row.active {
                decode_row(&row.counters, row_number, row.height, ctx)?;
                row.reset_row();
                row_number += 1;
            }
            row.break_run();
        }
        row.height += 1;
    }

    if row.active {
        if row_number >= MAX_ROWS {
            return Err(too_many_rows());
        }
        decode_row(&row.counters, row_number, row.height, ctx)?;
        row_number += 1;
    }

    ctx.ec_mut().publish_rows(row_number);
    Ok(row_number)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::BitMatrix;

    fn stripes(dimension: usize, height: usize) -> BitMatrix {
        let mut grid = BitMatrix::square(dimension);
        for y in 0..dimension {
            for x in 0..dimension {
                grid.set(x, y, (y / height) % 2 == 0);
            }
        }
        grid
    }

    #[test]
    fn test_uniform_grid_is_one_row() {
        let grid = BitMatrix::square(51);
        let mut ctx = DecodeContext::new();
        let rows = synchronize(&grid, &SyncParams::default(), &mut ctx).unwrap();
        assert_eq!(rows, 1);
        // 3 blocks: one blank interior block becomes an erasure
        assert_eq!(ctx.codewords(), &[0]);
        assert_eq!(ctx.erasures(), &[0]);
    }

    #[test]
    fn test_small_differences_stay_in_row() {
        let mut grid = BitMatrix::square(34);
        for y in (0..34).step_by(2) {
            for x in 0..6 {
                grid.set(x, y, true);
            }
        }
        assert_eq!(scanline_difference(&grid, 1), 6);
        let mut ctx = DecodeContext::new();
        assert_eq!(synchronize(&grid, &SyncParams::default(), &mut ctx).unwrap(), 1);
    }

    #[test]
    fn test_short_stripes_never_activate() {
        let grid = stripes(187, 2);
        let mut ctx = DecodeContext::new();
        assert_eq!(synchronize(&grid, &SyncParams::default(), &mut ctx).unwrap(), 0);
        assert!(ctx.codewords().is_empty());
    }

    #[test]
    fn test_each_stripe_is_a_row() {
        let grid = stripes(187, 3);
        let mut ctx = DecodeContext::new();
        let rows = synchronize(&grid, &SyncParams::default(), &mut ctx).unwrap();
        assert_eq!(rows, 62);
        assert_eq!(ctx.codewords().len(), 62 * 9);
        assert_eq!(ctx.erasures().len(), 62 * 9);
        assert_eq!(ctx.ec().rows(), 62);
    }

    #[test]
    fn test_row_cap_aborts() {
        let grid = stripes(187, 2);
        let params = SyncParams {
            min_matching_scans: 1,
            ..SyncParams::default()
        };
        let mut ctx = DecodeContext::new();
        assert_eq!(
            synchronize(&grid, &params, &mut ctx),
            Err(DecodeError::TooManyRows { limit: 90 })
        );
    }

    #[test]
    fn test_row_cap_boundary() {
        let params = SyncParams {
            min_matching_scans: 1,
            ..SyncParams::default()
        };

        let mut ctx = DecodeContext::new();
        assert_eq!(synchronize(&stripes(181, 2), &params, &mut ctx), Ok(90));

        let mut ctx = DecodeContext::new();
        assert_eq!(
            synchronize(&stripes(182, 2), &params, &mut ctx),
            Err(DecodeError::TooManyRows { limit: 90 })
        );
    }

    #[test]
    fn test_codeword_capacity_aborts() {
        let grid = stripes(289, 3);
        let mut ctx = DecodeContext::new();
        assert_eq!(
            synchronize(&grid, &SyncParams::default(), &mut ctx),
            Err(DecodeError::CodewordCapacity { capacity: 929 })
        );
    }
}
