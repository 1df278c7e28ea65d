use super::PixelGrid;

/// Compact bit matrix for storing a rectified symbol (true = black)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BitMatrix {
    width: usize,
    height: usize,
    data: Vec<u8>,
}

impl BitMatrix {
    /// Create a new all-white bit matrix with given dimensions
    pub fn new(width: usize, height: usize) -> Self {
        let bytes_needed = (width * height).div_ceil(8);
        Self {
            width,
            height,
            data: vec![0; bytes_needed],
        }
    }

    /// Create a square all-white matrix
    pub fn square(dimension: usize) -> Self {
        Self::new(dimension, dimension)
    }

    /// Build a matrix from row-major booleans, one inner slice per scanline.
    ///
    /// Returns `None` when the scanlines are ragged.
    pub fn from_rows<R: AsRef<[bool]>>(rows: &[R]) -> Option<Self> {
        let height = rows.len();
        let width = rows.first().map_or(0, |r| r.as_ref().len());
        let mut matrix = Self::new(width, height);
        for (y, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != width {
                return None;
            }
            for (x, &black) in row.iter().enumerate() {
                matrix.set(x, y, black);
            }
        }
        Some(matrix)
    }

    /// Get matrix width
    pub fn width(&self) -> usize {
        self.width
    }

    /// Get matrix height
    pub fn height(&self) -> usize {
        self.height
    }

    /// Get bit at (x, y)
    pub fn get(&self, x: usize, y: usize) -> bool {
        if x >= self.width || y >= self.height {
            return false;
        }
        let index = y * self.width + x;
        (self.data[index / 8] >> (index % 8)) & 1 == 1
    }

    /// Set bit at (x, y)
    pub fn set(&mut self, x: usize, y: usize, value: bool) {
        if x >= self.width || y >= self.height {
            return;
        }
        let index = y * self.width + x;
        let byte_index = index / 8;
        let bit_index = index % 8;
        if value {
            self.data[byte_index] |= 1 << bit_index;
        } else {
            self.data[byte_index] &= !(1 << bit_index);
        }
    }

    /// Write the low `len` bits of `bits` into scanline `y` starting at
    /// column `x`, most significant bit first.
    pub fn set_bits(&mut self, x: usize, y: usize, bits: u32, len: usize) {
        for k in 0..len {
            let black = (bits >> (len - 1 - k)) & 1 == 1;
            self.set(x + k, y, black);
        }
    }

    /// Count black pixels
    pub fn count_black(&self) -> usize {
        self.data.iter().map(|b| b.count_ones() as usize).sum()
    }

}

impl Default for BitMatrix {
    fn default() -> Self {
        Self::new(0, 0)
    }
}

impl PixelGrid for BitMatrix {
    fn get(&self, column: usize, row: usize) -> bool {
        BitMatrix::get(self, column, row)
    }

    // A non-square matrix is scanned over its largest square corner.
    fn dimension(&self) -> usize {
        self.width.min(self.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bit_matrix() {
        let mut matrix = BitMatrix::new(8, 8);
        assert_eq!(matrix.width(), 8);
        assert_eq!(matrix.height(), 8);

        matrix.set(3, 4, true);
        assert!(matrix.get(3, 4));
        assert!(!matrix.get(3, 3));
        assert_eq!(matrix.count_black(), 1);

        matrix.set(3, 4, false);
        assert!(!matrix.get(3, 4));
    }

    #[test]
    fn test_out_of_bounds() {
        let mut matrix = BitMatrix::new(8, 8);
        matrix.set(10, 10, true); // Should not panic
        assert!(!matrix.get(10, 10));
    }

    #[test]
    fn test_set_bits_msb_first() {
        let mut matrix = BitMatrix::new(17, 1);
        matrix.set_bits(0, 0, 0x10001, 17);
        assert!(matrix.get(0, 0));
        assert!(matrix.get(16, 0));
        assert_eq!(matrix.count_black(), 2);
    }

    #[test]
    fn test_from_rows_rejects_ragged() {
        let ok = BitMatrix::from_rows(&[vec![true, false], vec![false, true]]).unwrap();
        assert!(ok.get(0, 0) && ok.get(1, 1) && !ok.get(1, 0));
        assert!(BitMatrix::from_rows(&[vec![true, false], vec![true]]).is_none());
    }

    #[test]
    fn test_dimension_uses_smaller_side() {
        let matrix = BitMatrix::new(34, 20);
        assert_eq!(PixelGrid::dimension(&matrix), 20);
    }
}
