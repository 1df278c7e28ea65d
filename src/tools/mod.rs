/// Synthetic symbol rendering
pub mod synth;

use crate::models::BitMatrix;
use image::GrayImage;
use std::path::Path;

/// Luma below this value is treated as a black module
pub const BLACK_THRESHOLD: u8 = 128;

/// Load a rectified symbol image as a square [`BitMatrix`].
///
/// The image is expected to be sampled already (one pixel per module
/// horizontally). Non-square images are cropped to their top-left square.
pub fn load_grid<P: AsRef<Path>>(path: P) -> Result<BitMatrix, image::ImageError> {
    let gray = image::open(path)?.to_luma8();
    Ok(grid_from_luma(&gray))
}

/// Threshold a grayscale image into a square [`BitMatrix`]
pub fn grid_from_luma(gray: &GrayImage) -> BitMatrix {
    let dimension = gray.width().min(gray.height()) as usize;
    let mut grid = BitMatrix::square(dimension);
    for y in 0..dimension {
        for x in 0..dimension {
            let luma = gray.get_pixel(x as u32, y as u32).0[0];
            grid.set(x, y, luma < BLACK_THRESHOLD);
        }
    }
    grid
}

/// Render a [`BitMatrix`] as a black-on-white grayscale image
pub fn grid_to_luma(grid: &BitMatrix) -> GrayImage {
    GrayImage::from_fn(grid.width() as u32, grid.height() as u32, |x, y| {
        if grid.get(x as usize, y as usize) {
            image::Luma([0u8])
        } else {
            image::Luma([255u8])
        }
    })
}

/// Summary statistics for a binary grid.
#[derive(Debug, Clone, Copy)]
pub struct GridStats {
    /// Side length in pixels.
    pub dimension: usize,
    /// Count of black pixels.
    pub black: usize,
    /// Number of scanlines that differ from their predecessor by more than
    /// the default row threshold.
    pub boundaries: usize,
}

/// Compute [`GridStats`] for a grid.
pub fn grid_stats(grid: &BitMatrix) -> GridStats {
    use crate::PixelGrid;
    use crate::decoder::config::DEFAULT_MAX_ROW_DIFFERENCE;
    use crate::decoder::synchronizer::scanline_difference;

    let dimension = PixelGrid::dimension(grid);
    let boundaries = (1..dimension)
        .filter(|&y| scanline_difference(grid, y) > DEFAULT_MAX_ROW_DIFFERENCE)
        .count();
    GridStats {
        dimension,
        black: grid.count_black(),
        boundaries,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_luma_round_trip_keeps_modules() {
        let mut grid = BitMatrix::square(4);
        grid.set(1, 2, true);
        let back = grid_from_luma(&grid_to_luma(&grid));
        assert_eq!(back, grid);
    }

    #[test]
    fn test_non_square_image_is_cropped() {
        let gray = GrayImage::from_pixel(6, 3, image::Luma([0u8]));
        let grid = grid_from_luma(&gray);
        assert_eq!((grid.width(), grid.height()), (3, 3));
        assert_eq!(grid.count_black(), 9);
    }

    #[test]
    fn test_grid_stats_counts_boundaries() {
        let mut grid = BitMatrix::square(20);
        for y in 10..20 {
            for x in 0..20 {
                grid.set(x, y, true);
            }
        }
        let stats = grid_stats(&grid);
        assert_eq!(stats.dimension, 20);
        assert_eq!(stats.black, 200);
        assert_eq!(stats.boundaries, 1);
    }
}
