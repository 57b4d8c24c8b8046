//! Common scalar types used in emote glyph tables.
//!
//! An emote table maps a small set of Unicode codepoints to fixed-size
//! monochrome bitmaps. To keep the table compact, codepoints are stored in a
//! 16-bit [compressed form][CompressedCodepoint] that covers three hand-picked
//! ranges of the Unicode codespace.

#![deny(rustdoc::broken_intra_doc_links)]
#![deny(unsafe_code)]
#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(any(feature = "std", test))]
#[macro_use]
extern crate std;

#[cfg(all(not(feature = "std"), not(test)))]
#[macro_use]
extern crate core as std;

mod codepoint;
mod glyph_id;
mod raw;

#[cfg(all(test, feature = "serde"))]
mod serde_test;

pub use codepoint::{compress, decompress, CodepointRange, CompressedCodepoint};
pub use glyph_id::GlyphId;
pub use raw::{BigEndian, FixedSize, Scalar};

/// The magic number at the start of a serialized emote table (`'EMOT'`).
pub const EMOTE_MAGIC: u32 = 0x454D_4F54;

/// The only version of the serialized emote table format.
pub const EMOTE_VERSION: u16 = 1;
