//! The emote glyph table

use types::{BigEndian, CompressedCodepoint, GlyphId, EMOTE_MAGIC, EMOTE_VERSION};

use crate::{
    bitmap::{glyph_stride, Bitmap},
    font_data::FontData,
    read::{FontRead, ReadError},
};

/// A table of fixed-size glyph bitmaps indexed by compressed codepoint.
///
/// The table consists of a glyph map, which is a strictly ascending array of
/// [`CompressedCodepoint`]s, and a data blob holding one bitmap per map entry
/// in the same order. All glyphs share the same width and height.
///
/// The invariants are checked once, when the table is constructed; lookups
/// after that never fail for reasons other than a missing glyph.
///
/// # Serialized form
///
/// All values are big-endian.
///
/// | offset         | size             | field                       |
/// |----------------|------------------|-----------------------------|
/// | 0              | 4                | magic, `'EMOT'`             |
/// | 4              | 2                | version, `1`                |
/// | 6              | 2                | glyph count                 |
/// | 8              | 1                | glyph width                 |
/// | 9              | 1                | glyph height                |
/// | 10             | 2 * count        | glyph map                   |
/// | 10 + 2 * count | count * stride   | glyph data                  |
#[derive(Clone, Copy, Debug)]
pub struct EmoteFont<'a> {
    map: &'a [BigEndian<CompressedCodepoint>],
    data: &'a [u8],
    width: u8,
    height: u8,
}

impl<'a> EmoteFont<'a> {
    /// The size of the fixed header of the serialized form.
    pub const HEADER_LEN: usize = 10;

    /// Create a table from a glyph map and bitmap data.
    ///
    /// This validates that the map is strictly ascending and contains only
    /// representable codepoints, and that `data` holds a bitmap for every
    /// entry. Any bytes in `data` past the last bitmap are ignored.
    pub fn new(
        map: &'a [BigEndian<CompressedCodepoint>],
        data: &'a [u8],
        width: u8,
        height: u8,
    ) -> Result<Self, ReadError> {
        if width == 0 || height == 0 {
            return Err(ReadError::InvalidDimensions { width, height });
        }
        if map.len() > u16::MAX as usize {
            return Err(ReadError::TooManyGlyphs(map.len()));
        }
        validate_map(map)?;
        let data_len = map
            .len()
            .checked_mul(glyph_stride(width, height))
            .ok_or(ReadError::OutOfBounds)?;
        let data = data.get(..data_len).ok_or(ReadError::OutOfBounds)?;
        Ok(Self {
            map,
            data,
            width,
            height,
        })
    }

    /// Parse a serialized table.
    pub fn from_bytes(bytes: &'a [u8]) -> Result<Self, ReadError> {
        Self::read(FontData::new(bytes))
    }

    /// The number of glyphs in the table.
    pub fn count(&self) -> u16 {
        // checked in the constructor
        self.map.len() as u16
    }

    /// `true` if the table contains no glyphs.
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Glyph width in pixels.
    pub fn width(&self) -> u8 {
        self.width
    }

    /// Glyph height in pixels.
    pub fn height(&self) -> u8 {
        self.height
    }

    /// The number of bytes occupied by each glyph bitmap.
    pub fn glyph_stride(&self) -> usize {
        glyph_stride(self.width, self.height)
    }

    /// The raw glyph map.
    pub fn map(&self) -> &'a [BigEndian<CompressedCodepoint>] {
        self.map
    }

    /// The raw bitmap data for all glyphs.
    pub fn data(&self) -> &'a [u8] {
        self.data
    }

    /// Find the glyph for a compressed codepoint.
    ///
    /// This is a binary search over the glyph map.
    pub fn find(&self, code: CompressedCodepoint) -> Option<GlyphId> {
        if !code.is_valid() {
            return None;
        }
        self.map
            .binary_search_by(|probe| probe.get().cmp(&code))
            .ok()
            .map(|ix| GlyphId::new(ix as u16))
    }

    /// Map a codepoint to a glyph identifier.
    ///
    /// Returns `None` if the table has no glyph for this codepoint, including
    /// when the codepoint cannot be compressed.
    pub fn map_codepoint(&self, codepoint: impl Into<u32>) -> Option<GlyphId> {
        self.find(CompressedCodepoint::new(codepoint.into()))
    }

    /// Returns the codepoint for the given glyph.
    pub fn codepoint(&self, glyph_id: GlyphId) -> Option<u32> {
        self.map
            .get(usize::from(glyph_id))?
            .get()
            .to_codepoint()
    }

    /// Returns the bitmap for the given glyph, or `None` if the identifier
    /// is out of range.
    pub fn bitmap(&self, glyph_id: GlyphId) -> Option<Bitmap<'a>> {
        let stride = self.glyph_stride();
        let start = usize::from(glyph_id).checked_mul(stride)?;
        let data = self.data.get(start..start.checked_add(stride)?)?;
        Bitmap::new(self.width, self.height, data)
    }

    /// Returns an iterator over all (glyph identifier, codepoint) pairs in
    /// table order.
    pub fn codepoints(&self) -> CodepointIter<'a> {
        CodepointIter {
            inner: self.map.iter().enumerate(),
        }
    }
}

impl<'a> FontRead<'a> for EmoteFont<'a> {
    fn read(data: FontData<'a>) -> Result<Self, ReadError> {
        let mut cursor = data.cursor();
        let magic: u32 = cursor.read()?;
        if magic != EMOTE_MAGIC {
            return Err(ReadError::InvalidMagic(magic));
        }
        let version: u16 = cursor.read()?;
        if version != EMOTE_VERSION {
            return Err(ReadError::InvalidVersion(version));
        }
        let count: u16 = cursor.read()?;
        let width: u8 = cursor.read()?;
        let height: u8 = cursor.read()?;
        debug_assert_eq!(cursor.position(), Self::HEADER_LEN);
        let map = cursor.read_array(count as usize)?;
        let data_len = count as usize * glyph_stride(width, height);
        let glyph_data = cursor.read_bytes(data_len)?;
        Self::new(map, glyph_data, width, height)
    }
}

fn validate_map(map: &[BigEndian<CompressedCodepoint>]) -> Result<(), ReadError> {
    let mut prev: Option<CompressedCodepoint> = None;
    for (index, code) in map.iter().map(BigEndian::get).enumerate() {
        if !code.is_valid() {
            return Err(ReadError::InvalidCodepoint { index, code });
        }
        if prev.is_some_and(|prev| prev >= code) {
            return Err(ReadError::UnsortedMap { index });
        }
        prev = Some(code);
    }
    Ok(())
}

/// Iterator over the (glyph identifier, codepoint) pairs in an [`EmoteFont`].
#[derive(Clone)]
pub struct CodepointIter<'a> {
    inner: std::iter::Enumerate<std::slice::Iter<'a, BigEndian<CompressedCodepoint>>>,
}

impl Iterator for CodepointIter<'_> {
    type Item = (GlyphId, u32);

    fn next(&mut self) -> Option<Self::Item> {
        let (ix, code) = self.inner.next()?;
        // the map is validated on construction, so decompression is exact
        Some((GlyphId::new(ix as u16), code.get().decompress()))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for CodepointIter<'_> {}
