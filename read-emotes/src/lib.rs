//! Reading emote glyph tables
//!
//! This crate provides memory safe, zero-allocation access to emote tables:
//! small bitmap fonts that map a sorted set of [compressed codepoints] to
//! fixed-size monochrome glyphs.
//!
//! The main entry point is [`EmoteFont`], which can be constructed from
//! static arrays with [`EmoteFont::new`] or parsed from a serialized table
//! with [`FontRead::read`]. Once you have a font, [`EmoteFont::match_at`]
//! resolves a byte position in UTF-8 text to a glyph, and
//! [`EmoteFont::bitmap`] provides the pixels for that glyph.
//!
//! # Example
//!
//! ```no_run
//! # let path_to_my_table = std::path::Path::new("");
//! use read_emotes::EmoteFont;
//! let bytes = std::fs::read(path_to_my_table).unwrap();
//! let font = EmoteFont::from_bytes(&bytes).expect("failed to read emote table");
//!
//! let text = "hello ☺\u{FE0F}";
//! for (offset, found) in font.matches(text.as_bytes()) {
//!     if let Some(bitmap) = found.glyph_id.and_then(|gid| font.bitmap(gid)) {
//!         println!("glyph at byte {offset}: {}x{}", bitmap.width(), bitmap.height());
//!     }
//! }
//! ```
//!
//! [compressed codepoints]: types::CompressedCodepoint

#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]
#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(any(feature = "std", test))]
#[macro_use]
extern crate std;

#[cfg(all(not(feature = "std"), not(test)))]
#[macro_use]
extern crate core as std;

mod bitmap;
mod font;
mod font_data;
mod read;
mod resolve;
pub mod utf8;

pub use bitmap::{glyph_stride, Bitmap, Rows};
pub use font::{CodepointIter, EmoteFont};
pub use font_data::FontData;
pub use read::{FontRead, ReadError};
pub use resolve::{
    is_variation_selector, Match, Matches, EMOJI_PRESENTATION_SELECTOR,
    TEXT_PRESENTATION_SELECTOR,
};

/// Public re-export of the emote-types crate.
pub extern crate emote_types as types;
