/// Read-only square binary image of one rectified PDF417 symbol.
///
/// `true` is a black module. Implementations must stay unchanged for the
/// duration of a decode; the decoder never writes through this trait.
pub trait PixelGrid {
    /// Pixel at `(column, row)`
    fn get(&self, column: usize, row: usize) -> bool;

    /// Side length of the square grid in pixels
    fn dimension(&self) -> usize;
}

impl<G: PixelGrid + ?Sized> PixelGrid for &G {
    fn get(&self, column: usize, row: usize) -> bool {
        (**self).get(column, row)
    }

    fn dimension(&self) -> usize {
        (**self).dimension()
    }
}
