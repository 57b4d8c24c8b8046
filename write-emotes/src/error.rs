//! Errors that occur while building a table

/// An error occured while adding a glyph or building the table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Error {
    /// The codepoint is outside of every supported range.
    UnrepresentableCodepoint(u32),
    /// A glyph was already added for this codepoint.
    DuplicateCodepoint(u32),
    /// The bitmap does not match the glyph dimensions of the builder.
    BitmapSize {
        codepoint: u32,
        expected: usize,
        actual: usize,
    },
    /// Glyphs must be at least one pixel in each direction.
    InvalidDimensions { width: u8, height: u8 },
    /// Glyph ids are 16 bits.
    TooManyGlyphs(usize),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::UnrepresentableCodepoint(cp) => {
                write!(f, "U+{cp:04X} cannot be stored in an emote table")
            }
            Error::DuplicateCodepoint(cp) => write!(f, "duplicate glyph for U+{cp:04X}"),
            Error::BitmapSize {
                codepoint,
                expected,
                actual,
            } => write!(
                f,
                "bitmap for U+{codepoint:04X} is {actual} bytes, expected {expected}"
            ),
            Error::InvalidDimensions { width, height } => {
                write!(f, "invalid glyph dimensions {width}x{height}")
            }
            Error::TooManyGlyphs(count) => {
                write!(f, "{count} glyphs exceeds the limit of {}", u16::MAX)
            }
        }
    }
}

impl std::error::Error for Error {}
