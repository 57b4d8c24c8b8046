//! Writing emote glyph tables
//!
//! This crate compiles collections of glyph bitmaps into the serialized
//! table format read by [`read_emotes`]. Start with [`EmoteFontBuilder`].

mod builder;
mod error;

pub use builder::EmoteFontBuilder;
pub use error::Error;

/// Public re-export of the read-emotes crate.
pub extern crate read_emotes as read;

/// Public re-export of the emote-types crate.
pub extern crate emote_types as types;
