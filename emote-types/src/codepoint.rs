//! Compressed codepoints
//!
//! Emote tables only carry glyphs for a handful of Unicode blocks, so rather
//! than spending 32 bits on every entry in the glyph map we pack codepoints
//! into 16 bits: a 2-bit range tag followed by a 14-bit offset from the start
//! of that range.
//!
//! | tag | source range           |
//! |-----|------------------------|
//! | 0   | `U+2000..U+4000`       |
//! | 1   | `U+1F000..U+20000`     |
//! | 2   | `U+E000..U+10000`      |
//!
//! Tag 3 is unused. Any codepoint outside of these ranges compresses to
//! [`CompressedCodepoint::NOT_REPRESENTABLE`].

use std::ops::Range;

const TAG_SHIFT: u16 = 14;
const OFFSET_MASK: u16 = 0x3FFF;

/// One of the three regions of the Unicode codespace that can be compressed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CodepointRange {
    /// `U+2000..U+4000`: general punctuation, letterlike symbols, arrows,
    /// mathematical and technical symbols, dingbats, CJK symbols and kana.
    Symbols,
    /// `U+1F000..U+20000`: the supplementary pictographs, including most
    /// emoji.
    Pictographs,
    /// `U+E000..U+10000`: the private use area followed by the compatibility,
    /// presentation and halfwidth/fullwidth forms.
    PrivateUse,
}

impl CodepointRange {
    /// All ranges, in tag order.
    pub const ALL: [CodepointRange; 3] = [Self::Symbols, Self::Pictographs, Self::PrivateUse];

    /// Returns the range for a 2-bit tag, or `None` for the unused tag 3.
    pub const fn from_tag(tag: u16) -> Option<Self> {
        match tag {
            0 => Some(Self::Symbols),
            1 => Some(Self::Pictographs),
            2 => Some(Self::PrivateUse),
            _ => None,
        }
    }

    /// The 2-bit tag stored in the high bits of a compressed codepoint.
    pub const fn tag(self) -> u16 {
        match self {
            Self::Symbols => 0,
            Self::Pictographs => 1,
            Self::PrivateUse => 2,
        }
    }

    /// The first codepoint in this range.
    pub const fn base(self) -> u32 {
        match self {
            Self::Symbols => 0x2000,
            Self::Pictographs => 0x1F000,
            Self::PrivateUse => 0xE000,
        }
    }

    /// The half-open range of codepoints covered.
    pub const fn codepoints(self) -> Range<u32> {
        let end = match self {
            Self::Symbols => 0x4000,
            Self::Pictographs => 0x20000,
            Self::PrivateUse => 0x10000,
        };
        self.base()..end
    }

    /// Returns the range containing `codepoint`, if any.
    pub const fn for_codepoint(codepoint: u32) -> Option<Self> {
        let mut i = 0;
        while i < Self::ALL.len() {
            let range = Self::ALL[i];
            let codepoints = range.codepoints();
            if codepoint >= codepoints.start && codepoint < codepoints.end {
                return Some(range);
            }
            i += 1;
        }
        None
    }
}

impl std::fmt::Display for CodepointRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Symbols => "symbols",
            Self::Pictographs => "pictographs",
            Self::PrivateUse => "private-use",
        };
        f.write_str(name)
    }
}

/// A codepoint packed into 16 bits.
///
/// The ordering of compressed codepoints is the ordering of the raw 16-bit
/// values, which groups entries by range tag first. Glyph maps are sorted in
/// this order, not in codepoint order.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CompressedCodepoint(u16);

impl CompressedCodepoint {
    /// The value produced for codepoints outside of all supported ranges.
    pub const NOT_REPRESENTABLE: CompressedCodepoint = CompressedCodepoint(0xFFFF);

    /// Construct from a raw 16-bit value without validation.
    pub const fn from_raw(raw: u16) -> Self {
        CompressedCodepoint(raw)
    }

    /// Compress a codepoint.
    ///
    /// Accepts any 32-bit value; values that cannot be represented become
    /// [`Self::NOT_REPRESENTABLE`].
    pub const fn new(codepoint: u32) -> Self {
        match CodepointRange::for_codepoint(codepoint) {
            Some(range) => {
                let offset = (codepoint - range.base()) as u16;
                CompressedCodepoint((range.tag() << TAG_SHIFT) | offset)
            }
            None => Self::NOT_REPRESENTABLE,
        }
    }

    /// The raw 16-bit value.
    pub const fn to_u16(self) -> u16 {
        self.0
    }

    pub const fn to_be_bytes(self) -> [u8; 2] {
        self.0.to_be_bytes()
    }

    /// The range selected by the tag bits, or `None` for tag 3.
    pub const fn range(self) -> Option<CodepointRange> {
        CodepointRange::from_tag(self.0 >> TAG_SHIFT)
    }

    /// The 14-bit offset into the range.
    pub const fn offset(self) -> u16 {
        self.0 & OFFSET_MASK
    }

    /// Returns `true` if the tag names one of the supported ranges.
    ///
    /// [`Self::NOT_REPRESENTABLE`] is never valid.
    pub const fn is_valid(self) -> bool {
        self.range().is_some()
    }

    /// Expand back into a codepoint, returning `None` for tag 3.
    pub const fn to_codepoint(self) -> Option<u32> {
        match self.range() {
            Some(range) => Some(range.base() + self.offset() as u32),
            None => None,
        }
    }

    /// Expand back into a codepoint.
    ///
    /// Tag 3 (and therefore [`Self::NOT_REPRESENTABLE`]) expands to 0, which
    /// matches existing tables. Use [`Self::to_codepoint`] to distinguish
    /// this case.
    pub const fn decompress(self) -> u32 {
        match self.to_codepoint() {
            Some(codepoint) => codepoint,
            None => 0,
        }
    }
}

/// Compress a codepoint into its 16-bit form.
pub const fn compress(codepoint: u32) -> CompressedCodepoint {
    CompressedCodepoint::new(codepoint)
}

/// Expand a compressed codepoint, mapping the unused tag to 0.
pub const fn decompress(compressed: CompressedCodepoint) -> u32 {
    compressed.decompress()
}

impl Default for CompressedCodepoint {
    fn default() -> Self {
        Self::NOT_REPRESENTABLE
    }
}

impl From<char> for CompressedCodepoint {
    fn from(ch: char) -> Self {
        Self::new(ch as u32)
    }
}

impl From<CompressedCodepoint> for u16 {
    fn from(src: CompressedCodepoint) -> u16 {
        src.0
    }
}

impl std::fmt::Debug for CompressedCodepoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.to_codepoint() {
            Some(cp) => write!(f, "CompressedCodepoint(0x{:04X} => U+{cp:04X})", self.0),
            None => write!(f, "CompressedCodepoint(0x{:04X})", self.0),
        }
    }
}

impl std::fmt::Display for CompressedCodepoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "0x{:04X}", self.0)
    }
}

crate::newtype_scalar!(CompressedCodepoint, [u8; 2]);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roundtrip_every_supported_codepoint() {
        for range in CodepointRange::ALL {
            for cp in range.codepoints() {
                let compressed = compress(cp);
                assert!(compressed.is_valid(), "U+{cp:04X}");
                assert_eq!(compressed.range(), Some(range));
                assert_eq!(decompress(compressed), cp);
                assert_eq!(compressed.to_codepoint(), Some(cp));
            }
        }
    }

    #[test]
    fn tags_and_offsets() {
        assert_eq!(compress(0x2000).to_u16(), 0x0000);
        assert_eq!(compress(0x3FFF).to_u16(), 0x1FFF);
        assert_eq!(compress(0x1F000).to_u16(), 0x4000);
        assert_eq!(compress(0x1F600).to_u16(), 0x4600);
        assert_eq!(compress(0x1FFFF).to_u16(), 0x4FFF);
        assert_eq!(compress(0xE000).to_u16(), 0x8000);
        assert_eq!(compress(0xFFFF).to_u16(), 0x9FFF);
        assert_eq!(compress(0x263A).offset(), 0x063A);
    }

    #[test]
    fn unrepresentable_codepoints() {
        for cp in [
            0, 0x41, 0x1FFF, 0x4000, 0xDFFF, 0x10000, 0x1EFFF, 0x20000, 0x100000, 0x10FFFF,
            u32::MAX,
        ] {
            assert_eq!(
                compress(cp),
                CompressedCodepoint::NOT_REPRESENTABLE,
                "U+{cp:04X}"
            );
        }
    }

    #[test]
    fn unused_tag_decompresses_to_zero() {
        let sentinel = CompressedCodepoint::NOT_REPRESENTABLE;
        assert_eq!(sentinel.range(), None);
        assert!(!sentinel.is_valid());
        assert_eq!(decompress(sentinel), 0);
        assert_eq!(sentinel.to_codepoint(), None);

        let tag3 = CompressedCodepoint::from_raw(0xC123);
        assert_eq!(tag3.decompress(), 0);
        assert_eq!(tag3.to_codepoint(), None);
    }

    #[test]
    fn ranges_are_disjoint() {
        for (i, a) in CodepointRange::ALL.iter().enumerate() {
            for b in &CodepointRange::ALL[i + 1..] {
                let (a, b) = (a.codepoints(), b.codepoints());
                assert!(a.end <= b.start || b.end <= a.start);
            }
        }
        // every offset fits in 14 bits
        for range in CodepointRange::ALL {
            let codepoints = range.codepoints();
            assert!(codepoints.end - codepoints.start <= OFFSET_MASK as u32 + 1);
        }
    }

    #[test]
    fn from_char() {
        assert_eq!(CompressedCodepoint::from('😀'), compress(0x1F600));
        assert_eq!(CompressedCodepoint::from('A'), CompressedCodepoint::NOT_REPRESENTABLE);
    }
}
