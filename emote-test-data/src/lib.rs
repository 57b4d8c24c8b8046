//! test data shared between the emote crates.

pub mod bebuffer;
pub mod blobs;

/// Text exercising every glyph in [`blobs::SMILEYS`], with and without
/// variation selectors.
pub static SMILEY_TEXT: &str = "good morning ☺\u{FE0F} I ❤ this 😀\u{FE0E}!";
