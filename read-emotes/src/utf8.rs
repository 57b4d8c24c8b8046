//! Decoding single codepoints from UTF-8 text.
//!
//! The decoder here is deliberately permissive: it looks only at the lead
//! byte to decide how long a sequence is, and assembles the codepoint from
//! whatever bytes follow without checking continuation markers or overlong
//! forms. It never reads past the end of the input.

/// A codepoint decoded from UTF-8 text.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Decoded {
    /// The scalar value. Malformed input produces a best-effort value.
    pub codepoint: u32,
    /// Number of bytes consumed, in `1..=4`.
    pub len: usize,
}

/// An error encountered while decoding.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Utf8Error {
    /// The offset is at or past the end of the input.
    EndOfInput,
    /// The lead byte announces more bytes than remain in the input.
    Truncated { expected: usize, available: usize },
}

impl std::fmt::Display for Utf8Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Utf8Error::EndOfInput => write!(f, "Unexpected end of input"),
            Utf8Error::Truncated {
                expected,
                available,
            } => write!(
                f,
                "Truncated sequence: expected {expected} bytes, {available} available"
            ),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Utf8Error {}

/// Returns the length of the sequence introduced by `lead`.
///
/// Bytes that cannot start a sequence (continuation bytes and `0xF8..=0xFF`)
/// are treated as single-byte sequences.
pub const fn sequence_len(lead: u8) -> usize {
    if lead & 0x80 == 0 {
        1
    } else if lead & 0xE0 == 0xC0 {
        2
    } else if lead & 0xF0 == 0xE0 {
        3
    } else if lead & 0xF8 == 0xF0 {
        4
    } else {
        1
    }
}

/// Decode the codepoint starting at `offset` in `text`.
///
/// A lead byte that cannot start a sequence decodes to codepoint 0 with a
/// length of 1.
pub fn decode(text: &[u8], offset: usize) -> Result<Decoded, Utf8Error> {
    let bytes = text.get(offset..).unwrap_or_default();
    let (&lead, rest) = bytes.split_first().ok_or(Utf8Error::EndOfInput)?;
    let len = sequence_len(lead);
    let mut codepoint = match len {
        2 => (lead & 0x1F) as u32,
        3 => (lead & 0x0F) as u32,
        4 => (lead & 0x07) as u32,
        _ => {
            let codepoint = if lead < 0x80 { lead as u32 } else { 0 };
            return Ok(Decoded { codepoint, len: 1 });
        }
    };
    let trailing = rest.get(..len - 1).ok_or(Utf8Error::Truncated {
        expected: len,
        available: bytes.len(),
    })?;
    for byte in trailing {
        codepoint = (codepoint << 6) | (byte & 0x3F) as u32;
    }
    Ok(Decoded { codepoint, len })
}
