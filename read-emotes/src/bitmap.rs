//! Monochrome glyph bitmaps.

use std::slice::ChunksExact;

/// The number of bytes used by each row of a glyph `width` pixels wide.
pub(crate) const fn row_bytes(width: u8) -> usize {
    (width as usize).div_ceil(8)
}

/// The number of bytes used by each glyph in the data blob.
///
/// Rows are padded to a whole byte, so for byte-aligned widths this is
/// `width * height / 8`.
pub const fn glyph_stride(width: u8, height: u8) -> usize {
    row_bytes(width) * height as usize
}

/// A borrowed 1 bit per pixel glyph image.
///
/// Pixels are stored row-major. Each byte holds eight horizontal pixels with
/// the most significant bit leftmost; rows are padded to a whole number of
/// bytes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Bitmap<'a> {
    width: u8,
    height: u8,
    data: &'a [u8],
}

impl<'a> Bitmap<'a> {
    /// Wrap the pixel data for a single glyph.
    ///
    /// Returns `None` if `data` is not exactly one glyph long.
    pub fn new(width: u8, height: u8, data: &'a [u8]) -> Option<Self> {
        (data.len() == glyph_stride(width, height)).then_some(Self {
            width,
            height,
            data,
        })
    }

    /// Width in pixels.
    pub fn width(&self) -> u8 {
        self.width
    }

    /// Height in pixels.
    pub fn height(&self) -> u8 {
        self.height
    }

    /// The raw packed pixel data.
    pub fn data(&self) -> &'a [u8] {
        self.data
    }

    /// Number of bytes in each row.
    pub fn row_bytes(&self) -> usize {
        row_bytes(self.width)
    }

    /// The packed bytes for row `y`, or `None` if `y` is out of range.
    pub fn row(&self, y: u8) -> Option<&'a [u8]> {
        let stride = self.row_bytes();
        let start = y as usize * stride;
        self.data.get(start..start + stride)
    }

    /// Returns an iterator over the packed bytes of each row, top to bottom.
    pub fn rows(&self) -> Rows<'a> {
        // a zero stride would panic in chunks_exact; treat it as no rows
        Rows(self.data.chunks_exact(self.row_bytes().max(1)))
    }

    /// Returns `true` if the pixel at (`x`, `y`) is set.
    ///
    /// Pixels outside of the bitmap are never set.
    pub fn pixel(&self, x: u8, y: u8) -> bool {
        if x >= self.width {
            return false;
        }
        self.row(y)
            .and_then(|row| row.get(x as usize / 8))
            .map(|byte| byte & (0x80 >> (x % 8)) != 0)
            .unwrap_or(false)
    }
}

/// Iterator over the rows of a [`Bitmap`].
#[derive(Clone, Debug)]
pub struct Rows<'a>(ChunksExact<'a, u8>);

impl<'a> Iterator for Rows<'a> {
    type Item = &'a [u8];

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

impl ExactSizeIterator for Rows<'_> {}

#[cfg(test)]
mod tests {
    use super::*;

    #[rustfmt::skip]
    static ARROW: [u8; 8] = [
        0b0001_1000,
        0b0011_1100,
        0b0111_1110,
        0b1111_1111,
        0b0001_1000,
        0b0001_1000,
        0b0001_1000,
        0b0001_1000,
    ];

    #[test]
    fn strides() {
        assert_eq!(glyph_stride(16, 16), 32);
        assert_eq!(glyph_stride(8, 8), 8);
        assert_eq!(glyph_stride(12, 12), 24);
        assert_eq!(glyph_stride(24, 24), 72);
        assert_eq!(row_bytes(1), 1);
    }

    #[test]
    fn pixels() {
        let bitmap = Bitmap::new(8, 8, &ARROW).unwrap();
        assert!(bitmap.pixel(3, 0));
        assert!(bitmap.pixel(4, 0));
        assert!(!bitmap.pixel(2, 0));
        assert!(bitmap.pixel(0, 3));
        assert!(bitmap.pixel(7, 3));
        assert!(!bitmap.pixel(0, 7));
        // out of bounds
        assert!(!bitmap.pixel(8, 3));
        assert!(!bitmap.pixel(3, 8));
    }

    #[test]
    fn rows() {
        let bitmap = Bitmap::new(8, 8, &ARROW).unwrap();
        assert_eq!(bitmap.rows().len(), 8);
        assert_eq!(bitmap.row(3), Some(&[0xFF][..]));
        assert_eq!(bitmap.row(8), None);
        let wide = [0u8; 32];
        let bitmap = Bitmap::new(16, 16, &wide).unwrap();
        assert!(bitmap.rows().all(|row| row.len() == 2));
    }

    #[test]
    fn wrong_size() {
        assert!(Bitmap::new(8, 8, &ARROW[..7]).is_none());
        assert!(Bitmap::new(16, 16, &ARROW).is_none());
    }
}
