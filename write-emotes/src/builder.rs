//! Building serialized tables from glyph bitmaps

use std::collections::BTreeMap;

use read_emotes::{glyph_stride, EmoteFont};
use types::{CompressedCodepoint, EMOTE_MAGIC, EMOTE_VERSION};

use crate::error::Error;

/// Build an emote table from a set of glyphs.
///
/// Glyphs are kept ordered by their compressed code, so they can be added in
/// any order and the resulting glyph map is always sorted.
#[derive(Clone, Debug)]
pub struct EmoteFontBuilder {
    width: u8,
    height: u8,
    glyphs: BTreeMap<CompressedCodepoint, Vec<u8>>,
}

impl EmoteFontBuilder {
    /// Create a new builder for glyphs of the given size in pixels.
    pub fn new(width: u8, height: u8) -> Self {
        Self {
            width,
            height,
            glyphs: BTreeMap::new(),
        }
    }

    /// The number of bytes each bitmap passed to [`add_glyph`] must have.
    ///
    /// [`add_glyph`]: EmoteFontBuilder::add_glyph
    pub fn glyph_stride(&self) -> usize {
        glyph_stride(self.width, self.height)
    }

    /// The number of glyphs added so far.
    pub fn len(&self) -> usize {
        self.glyphs.len()
    }

    /// `true` if no glyphs have been added.
    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }

    /// `true` if a glyph was added for this codepoint.
    pub fn contains(&self, codepoint: impl Into<u32>) -> bool {
        self.glyphs
            .contains_key(&CompressedCodepoint::new(codepoint.into()))
    }

    /// Add the bitmap for a codepoint.
    ///
    /// The bitmap is packed 1 bit per pixel, row-major, with the most
    /// significant bit leftmost and each row padded to a whole byte.
    pub fn add_glyph(&mut self, codepoint: impl Into<u32>, bitmap: &[u8]) -> Result<(), Error> {
        let codepoint = codepoint.into();
        let code = CompressedCodepoint::new(codepoint);
        if !code.is_valid() {
            return Err(Error::UnrepresentableCodepoint(codepoint));
        }
        let expected = self.glyph_stride();
        if bitmap.len() != expected {
            return Err(Error::BitmapSize {
                codepoint,
                expected,
                actual: bitmap.len(),
            });
        }
        if self.glyphs.contains_key(&code) {
            return Err(Error::DuplicateCodepoint(codepoint));
        }
        log::trace!("adding U+{codepoint:04X} as {code}");
        self.glyphs.insert(code, bitmap.to_vec());
        Ok(())
    }

    /// Serialize the table.
    pub fn build(&self) -> Result<Vec<u8>, Error> {
        let (width, height) = (self.width, self.height);
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimensions { width, height });
        }
        let count = u16::try_from(self.glyphs.len())
            .map_err(|_| Error::TooManyGlyphs(self.glyphs.len()))?;
        let stride = self.glyph_stride();
        let mut out = Vec::with_capacity(
            EmoteFont::HEADER_LEN + self.glyphs.len() * (2 + stride),
        );
        out.extend_from_slice(&EMOTE_MAGIC.to_be_bytes());
        out.extend_from_slice(&EMOTE_VERSION.to_be_bytes());
        out.extend_from_slice(&count.to_be_bytes());
        out.extend_from_slice(&[width, height]);
        for code in self.glyphs.keys() {
            out.extend_from_slice(&code.to_be_bytes());
        }
        for bitmap in self.glyphs.values() {
            out.extend_from_slice(bitmap);
        }
        debug_assert!(EmoteFont::from_bytes(&out).is_ok());
        log::debug!(
            "built {width}x{height} emote table with {count} glyphs, {} bytes",
            out.len()
        );
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use emote_test_data::blobs;
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use types::GlyphId;

    fn init_logging() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    /// A bitmap where every byte is the low byte of the codepoint.
    fn stamp(codepoint: u32, stride: usize) -> Vec<u8> {
        vec![codepoint as u8; stride]
    }

    #[test]
    fn round_trip() {
        init_logging();
        let codepoints = [0x1F600, 0x263A, 0xE123, 0x2764, 0x1F4A9];
        let mut builder = EmoteFontBuilder::new(16, 16);
        for cp in codepoints {
            builder.add_glyph(cp, &stamp(cp, 32)).unwrap();
        }
        let bytes = builder.build().unwrap();
        let font = EmoteFont::from_bytes(&bytes).unwrap();
        assert_eq!(font.count(), 5);
        assert_eq!((font.width(), font.height()), (16, 16));
        for cp in codepoints {
            let gid = font.map_codepoint(cp).unwrap();
            assert_eq!(font.codepoint(gid), Some(cp));
            assert_eq!(font.bitmap(gid).unwrap().data(), stamp(cp, 32));
        }
    }

    #[test]
    fn glyphs_ordered_by_code() {
        let mut builder = EmoteFontBuilder::new(8, 8);
        // the private use range sorts after the pictographs
        for cp in [0xE000_u32, 0x1F000, 0x2000] {
            builder.add_glyph(cp, &stamp(cp, 8)).unwrap();
        }
        let bytes = builder.build().unwrap();
        let font = EmoteFont::from_bytes(&bytes).unwrap();
        let order: Vec<_> = font.codepoints().map(|(_, cp)| cp).collect();
        assert_eq!(order, [0x2000, 0x1F000, 0xE000]);
        assert_eq!(font.map_codepoint(0xE000_u32), Some(GlyphId::new(2)));
    }

    #[test]
    fn matches_fixture() {
        let font = EmoteFont::from_bytes(blobs::ARROWS_8X8).unwrap();
        let mut builder = EmoteFontBuilder::new(8, 8);
        // added in reverse to check sorting
        for (gid, cp) in font.codepoints().collect::<Vec<_>>().into_iter().rev() {
            builder
                .add_glyph(cp, font.bitmap(gid).unwrap().data())
                .unwrap();
        }
        assert_eq!(builder.build().unwrap(), blobs::ARROWS_8X8);
    }

    #[test]
    fn empty_table() {
        let bytes = EmoteFontBuilder::new(12, 12).build().unwrap();
        assert_eq!(bytes.len(), EmoteFont::HEADER_LEN);
        let font = EmoteFont::from_bytes(&bytes).unwrap();
        assert!(font.is_empty());
        assert_eq!(font.glyph_stride(), 24);
    }

    #[rstest]
    #[case::ascii(0x41)]
    #[case::below_symbols(0x1FFF)]
    #[case::after_symbols(0x4000)]
    #[case::before_private_use(0xDFFF)]
    #[case::after_private_use(0x10000)]
    #[case::after_pictographs(0x20000)]
    #[case::out_of_unicode(0x110000)]
    fn reject_unrepresentable(#[case] codepoint: u32) {
        let mut builder = EmoteFontBuilder::new(8, 8);
        assert_eq!(
            builder.add_glyph(codepoint, &[0; 8]),
            Err(Error::UnrepresentableCodepoint(codepoint))
        );
        assert!(builder.is_empty());
    }

    #[rstest]
    #[case(8, 8, 7)]
    #[case(8, 8, 9)]
    #[case(12, 12, 18)]
    #[case(16, 16, 0)]
    fn reject_wrong_size(#[case] width: u8, #[case] height: u8, #[case] len: usize) {
        let mut builder = EmoteFontBuilder::new(width, height);
        let err = builder.add_glyph('☺', &vec![0; len]).unwrap_err();
        assert_eq!(
            err,
            Error::BitmapSize {
                codepoint: 0x263A,
                expected: glyph_stride(width, height),
                actual: len,
            }
        );
    }

    #[test]
    fn reject_duplicate() {
        let mut builder = EmoteFontBuilder::new(8, 8);
        builder.add_glyph('↑', &[1; 8]).unwrap();
        assert_eq!(
            builder.add_glyph(0x2191_u32, &[2; 8]),
            Err(Error::DuplicateCodepoint(0x2191))
        );
        assert_eq!(builder.len(), 1);
        assert!(builder.contains('↑'));
    }

    #[rstest]
    #[case(0, 8)]
    #[case(8, 0)]
    #[case(0, 0)]
    fn reject_zero_dimensions(#[case] width: u8, #[case] height: u8) {
        assert_eq!(
            EmoteFontBuilder::new(width, height).build(),
            Err(Error::InvalidDimensions { width, height })
        );
    }

    #[test]
    fn every_representable_codepoint() {
        let mut builder = EmoteFontBuilder::new(1, 1);
        let codepoints = types::CodepointRange::ALL
            .into_iter()
            .flat_map(|range| range.codepoints());
        for cp in codepoints {
            builder.add_glyph(cp, &[0x80]).unwrap();
        }
        assert_eq!(builder.len(), 0x5000);
        let bytes = builder.build().unwrap();
        let font = EmoteFont::from_bytes(&bytes).unwrap();
        assert_eq!(font.count(), 0x5000);
        assert_eq!(font.map_codepoint(0xFFFF_u32), Some(GlyphId::new(0x4FFF)));
    }
}
