//! Traits for interpreting emote table data

use types::CompressedCodepoint;

use crate::font_data::FontData;

/// A type that can be read from raw table data.
pub trait FontRead<'a>: Sized {
    /// Read an instance of `Self` from the provided data, performing validation.
    ///
    /// Implementations are responsible for ensuring the input data is
    /// consistent: that all array lengths are in bounds and that any
    /// ordering invariants the type relies on hold.
    fn read(data: FontData<'a>) -> Result<Self, ReadError>;
}

/// An error that occurs when reading emote table data
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReadError {
    OutOfBounds,
    InvalidMagic(u32),
    InvalidVersion(u16),
    InvalidArrayLen,
    InvalidDimensions {
        width: u8,
        height: u8,
    },
    TooManyGlyphs(usize),
    /// An entry in the glyph map uses the unused range tag.
    InvalidCodepoint {
        index: usize,
        code: CompressedCodepoint,
    },
    /// The entry at `index` is not greater than the one before it.
    UnsortedMap {
        index: usize,
    },
}

impl std::fmt::Display for ReadError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ReadError::OutOfBounds => write!(f, "An offset was out of bounds"),
            ReadError::InvalidMagic(magic) => write!(f, "Invalid magic number 0x{magic:08X}"),
            ReadError::InvalidVersion(version) => write!(f, "Unsupported version {version}"),
            ReadError::InvalidArrayLen => {
                write!(f, "Specified array length not a multiple of item size")
            }
            ReadError::InvalidDimensions { width, height } => {
                write!(f, "Invalid glyph dimensions {width}x{height}")
            }
            ReadError::TooManyGlyphs(count) => {
                write!(f, "{count} glyphs exceeds the limit of {}", u16::MAX)
            }
            ReadError::InvalidCodepoint { index, code } => {
                write!(f, "Glyph map entry {index} ({code}) has no valid range")
            }
            ReadError::UnsortedMap { index } => {
                write!(f, "Glyph map is not strictly ascending at entry {index}")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ReadError {}
