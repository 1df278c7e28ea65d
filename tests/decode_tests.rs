//! Integration tests for PDF417 codeword extraction
//!
//! Symbols are rendered synthetically so every expected codeword, erasure
//! and error-correction level is known exactly.

use rust_pdf417::decoder::tables::{CODEWORD_TABLE, SYMBOL_TABLE};
use rust_pdf417::tools::synth::{Block, SymbolRenderer};
use rust_pdf417::tools::{grid_from_luma, grid_to_luma};
use rust_pdf417::{BitMatrix, DecodeError, SyncParams, decode_batch, decode_with_params};

fn decode(grid: &BitMatrix) -> rust_pdf417::Result<rust_pdf417::DecodeResult> {
    decode_with_params(grid, &SyncParams::default())
}

fn codeword_rows(columns: usize, rows: usize) -> Vec<Vec<u16>> {
    (0..rows)
        .map(|r| {
            (0..columns)
                .map(|c| ((r * 37 + c * 11 + 5) % 929) as u16)
                .collect()
        })
        .collect()
}

fn render(columns: usize, rows: &[Vec<u16>]) -> BitMatrix {
    rows.iter()
        .fold(SymbolRenderer::new(columns), |r, row| r.codewords(row))
        .render()
        .expect("renderable symbol")
}

#[test]
fn test_single_row_first_table_key() {
    let grid = SymbolRenderer::new(3)
        .row(vec![
            Block::Codeword(1),
            Block::Raw(SYMBOL_TABLE[0]),
            Block::Codeword(2),
        ])
        .render()
        .unwrap();

    let result = decode(&grid).unwrap();
    assert_eq!(result.codewords(), &[(CODEWORD_TABLE[0] - 1) % 929]);
    assert!(result.erasures().is_empty());
    assert_eq!(result.rows(), 1);
}

#[test]
fn test_uniform_rows_yield_interior_codewords() {
    for (columns, rows) in [(5, 3), (6, 6), (8, 10), (4, 12)] {
        let symbol = codeword_rows(columns, rows);
        let result = decode(&render(columns, &symbol)).unwrap();

        assert_eq!(result.codewords().len(), rows * (columns - 2));
        assert!(result.erasures().is_empty());
        assert_eq!(result.rows(), rows);

        let expected: Vec<u16> = symbol
            .iter()
            .flat_map(|row| row[1..columns - 1].iter().copied())
            .collect();
        assert_eq!(result.codewords(), expected.as_slice());
    }
}

#[test]
fn test_decode_is_pure() {
    let grid = render(6, &codeword_rows(6, 6));
    let first = decode(&grid).unwrap();
    let second = decode(&grid).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_indicator_agreement_recovers_level() {
    let grid = render(
        4,
        &[vec![3, 100, 200, 4], vec![7, 101, 201, 5], vec![6, 102, 202, 7]],
    );
    let result = decode(&grid).unwrap();
    assert_eq!(result.codewords(), &[100, 200, 101, 201, 102, 202]);
    // rows is still 0 while the scan runs: ((7 % 30) - 0) / 3
    assert_eq!(result.ec_level(), Some(2));
    assert_eq!(result.ec_level_or_sentinel(), 2);
}

#[test]
fn test_indicator_disagreement_leaves_level_unknown() {
    let grid = render(
        4,
        &[vec![3, 100, 200, 4], vec![7, 101, 201, 5], vec![6, 102, 202, 8]],
    );
    let result = decode(&grid).unwrap();
    assert_eq!(result.codewords(), &[100, 200, 101, 201, 102, 202]);
    assert_eq!(result.ec_level(), None);
    assert_eq!(result.ec_level_or_sentinel(), -1);
}

#[test]
fn test_first_agreeing_triple_wins() {
    let grid = render(
        4,
        &[
            vec![3, 100, 200, 4],
            vec![7, 101, 201, 5],
            vec![6, 102, 202, 7],
            vec![3, 100, 200, 4],
            vec![25, 101, 201, 5],
            vec![6, 102, 202, 25],
        ],
    );
    let result = decode(&grid).unwrap();
    assert_eq!(result.rows(), 6);
    assert_eq!(result.codewords().len(), 12);
    assert_eq!(result.ec_level(), Some(2));
}

#[test]
fn test_unreadable_blocks_become_erasures() {
    let grid = SymbolRenderer::new(4)
        .codewords(&[3, 100, 200, 4])
        .row(vec![
            Block::Codeword(7),
            Block::Raw(0),
            Block::Codeword(201),
            Block::Codeword(5),
        ])
        .row(vec![
            Block::Codeword(6),
            Block::Codeword(102),
            Block::Raw(SYMBOL_TABLE[0] + 1),
            Block::Codeword(7),
        ])
        .render()
        .unwrap();

    let result = decode(&grid).unwrap();
    assert_eq!(result.codewords(), &[100, 200, 0, 201, 102, 0]);
    assert_eq!(result.erasures(), &[2, 5]);
    assert_eq!(result.ec_level(), Some(2));
}

#[test]
fn test_unreadable_right_indicator_is_not_an_erasure() {
    let grid = SymbolRenderer::new(4)
        .codewords(&[3, 100, 200, 4])
        .row(vec![
            Block::Codeword(7),
            Block::Codeword(101),
            Block::Codeword(201),
            Block::Raw(0),
        ])
        .codewords(&[6, 102, 202, 7])
        .render()
        .unwrap();

    let result = decode(&grid).unwrap();
    assert_eq!(result.codewords(), &[100, 200, 101, 201, 102, 202]);
    assert!(result.erasures().is_empty());
}

#[test]
fn test_too_many_rows_is_structural_failure() {
    // 96 alternating stripes, 3 scanlines each
    let dimension = 289;
    let mut grid = BitMatrix::square(dimension);
    for y in 0..dimension {
        for x in 0..dimension {
            grid.set(x, y, (y / 3) % 2 == 0);
        }
    }
    // 15 interior slots per row fill the 929-slot buffer before row 90
    assert_eq!(
        decode(&grid),
        Err(DecodeError::CodewordCapacity { capacity: 929 })
    );
}

fn two_scan_stripes(dimension: usize) -> BitMatrix {
    let mut grid = BitMatrix::square(dimension);
    for y in 0..dimension {
        for x in 0..dimension {
            grid.set(x, y, (y / 2) % 2 == 0);
        }
    }
    grid
}

fn single_scan_params() -> SyncParams {
    SyncParams {
        min_matching_scans: 1,
        ..SyncParams::default()
    }
}

#[test]
fn test_row_cap_with_short_rows() {
    assert_eq!(
        decode_with_params(&two_scan_stripes(187), &single_scan_params()),
        Err(DecodeError::TooManyRows { limit: 90 })
    );
}

#[test]
fn test_ninetieth_row_at_end_of_grid_is_accepted() {
    let result = decode_with_params(&two_scan_stripes(181), &single_scan_params()).unwrap();
    assert_eq!(result.rows(), 90);
    assert_eq!(result.codewords().len(), 90 * 8);
}

#[test]
fn test_ninetieth_row_followed_by_scanlines_aborts() {
    assert_eq!(
        decode_with_params(&two_scan_stripes(182), &single_scan_params()),
        Err(DecodeError::TooManyRows { limit: 90 })
    );
}

#[test]
fn test_image_round_trip_decodes() {
    let grid = render(5, &codeword_rows(5, 3));
    let reloaded = grid_from_luma(&grid_to_luma(&grid));
    assert_eq!(decode(&reloaded).unwrap(), decode(&grid).unwrap());
}

#[test]
fn test_batch_matches_sequential() {
    let grids: Vec<BitMatrix> = [(5, 3), (6, 6), (8, 10)]
        .iter()
        .map(|&(columns, rows)| render(columns, &codeword_rows(columns, rows)))
        .collect();
    let batch = decode_batch(&grids);
    for (grid, result) in grids.iter().zip(batch) {
        assert_eq!(result, decode(grid));
    }
}
