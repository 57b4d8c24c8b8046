//! Resolving positions in UTF-8 text to glyphs.

use types::GlyphId;

use crate::{
    font::EmoteFont,
    utf8::{self, Utf8Error},
};

/// U+FE0E VARIATION SELECTOR-15, requesting text presentation.
pub const TEXT_PRESENTATION_SELECTOR: u32 = 0xFE0E;

/// U+FE0F VARIATION SELECTOR-16, requesting emoji presentation.
pub const EMOJI_PRESENTATION_SELECTOR: u32 = 0xFE0F;

/// Returns `true` for the two presentation selectors that may follow an
/// emote.
pub fn is_variation_selector(codepoint: u32) -> bool {
    matches!(
        codepoint,
        TEXT_PRESENTATION_SELECTOR | EMOJI_PRESENTATION_SELECTOR
    )
}

/// The result of resolving one position in a string.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Match {
    /// The glyph found at this position, if any.
    pub glyph_id: Option<GlyphId>,
    /// The number of bytes covered, always at least 1.
    ///
    /// When a glyph is found this includes a directly following variation
    /// selector.
    pub len: usize,
}

impl<'a> EmoteFont<'a> {
    /// Resolve the character starting at `offset` in `text`.
    ///
    /// Returns `None` only if `offset` is at or past the end of `text`.
    /// Otherwise the returned [`Match`] covers at least one byte, so callers
    /// can advance by [`Match::len`] and are guaranteed to make progress.
    ///
    /// If the character maps to a glyph and is followed by U+FE0E or
    /// U+FE0F, the selector is included in the match. At most one selector
    /// is consumed. A sequence cut short by the end of `text` produces a
    /// single byte match with no glyph.
    pub fn match_at(&self, text: &[u8], offset: usize) -> Option<Match> {
        let decoded = match utf8::decode(text, offset) {
            Ok(decoded) => decoded,
            Err(Utf8Error::EndOfInput) => return None,
            Err(Utf8Error::Truncated { .. }) => {
                return Some(Match {
                    glyph_id: None,
                    len: 1,
                })
            }
        };
        let Some(glyph_id) = self.map_codepoint(decoded.codepoint) else {
            return Some(Match {
                glyph_id: None,
                len: decoded.len,
            });
        };
        let mut len = decoded.len;
        if let Ok(next) = utf8::decode(text, offset + decoded.len) {
            if is_variation_selector(next.codepoint) {
                len += next.len;
            }
        }
        Some(Match {
            glyph_id: Some(glyph_id),
            len,
        })
    }

    /// Returns an iterator over consecutive matches in `text`.
    ///
    /// Each item is the byte offset of the match along with the match
    /// itself. The matches cover all of `text` without gaps.
    pub fn matches<'b>(&self, text: &'b [u8]) -> Matches<'a, 'b> {
        Matches {
            font: *self,
            text,
            offset: 0,
        }
    }
}

/// Iterator over the matches in a string.
///
/// See [`EmoteFont::matches`].
#[derive(Clone, Debug)]
pub struct Matches<'a, 'b> {
    font: EmoteFont<'a>,
    text: &'b [u8],
    offset: usize,
}

impl Iterator for Matches<'_, '_> {
    type Item = (usize, Match);

    fn next(&mut self) -> Option<Self::Item> {
        let offset = self.offset;
        let found = self.font.match_at(self.text, offset)?;
        self.offset += found.len;
        Some((offset, found))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.text.len().saturating_sub(self.offset);
        (remaining.div_ceil(8), Some(remaining))
    }
}

impl std::iter::FusedIterator for Matches<'_, '_> {}

#[cfg(test)]
mod tests {
    use super::*;
    use emote_test_data::blobs;
    use pretty_assertions::assert_eq;

    fn smileys() -> EmoteFont<'static> {
        EmoteFont::from_bytes(blobs::SMILEYS).unwrap()
    }

    fn gid(raw: u16) -> Option<GlyphId> {
        Some(GlyphId::new(raw))
    }

    #[test]
    fn fold_emoji_selector() {
        let font = smileys();
        let text = "☺\u{FE0F}".as_bytes();
        assert_eq!(
            font.match_at(text, 0),
            Some(Match {
                glyph_id: gid(0),
                len: 6
            })
        );
    }

    #[test]
    fn fold_text_selector() {
        let font = smileys();
        let text = "😀\u{FE0E}x".as_bytes();
        assert_eq!(
            font.match_at(text, 0),
            Some(Match {
                glyph_id: gid(2),
                len: 7
            })
        );
    }

    #[test]
    fn only_one_selector() {
        let font = smileys();
        let text = "❤\u{FE0F}\u{FE0F}".as_bytes();
        let found = font.match_at(text, 0).unwrap();
        assert_eq!(found.glyph_id, gid(1));
        assert_eq!(found.len, 6);
        // the second selector is an ordinary miss
        assert_eq!(
            font.match_at(text, 6),
            Some(Match {
                glyph_id: None,
                len: 3
            })
        );
    }

    #[test]
    fn selector_not_folded_without_glyph() {
        let font = smileys();
        let text = "☹\u{FE0F}".as_bytes();
        assert_eq!(
            font.match_at(text, 0),
            Some(Match {
                glyph_id: None,
                len: 3
            })
        );
    }

    #[test]
    fn misses_advance_by_char_len() {
        let font = smileys();
        for ch in ['A', 'é', '中', '🙃', '\u{E000}'] {
            let mut buf = [0u8; 4];
            let text = ch.encode_utf8(&mut buf).as_bytes();
            assert_eq!(
                font.match_at(text, 0),
                Some(Match {
                    glyph_id: None,
                    len: ch.len_utf8()
                }),
                "{ch}"
            );
        }
    }

    #[test]
    fn end_of_input() {
        let font = smileys();
        assert_eq!(font.match_at(b"", 0), None);
        assert_eq!(font.match_at(b"ab", 2), None);
        assert_eq!(font.match_at(b"ab", 10), None);
    }

    #[test]
    fn truncated_input() {
        let font = smileys();
        let smiley = "😀".as_bytes();
        assert_eq!(
            font.match_at(&smiley[..2], 0),
            Some(Match {
                glyph_id: None,
                len: 1
            })
        );
        // a truncated selector is not folded
        let text = "☺\u{FE0F}".as_bytes();
        assert_eq!(
            font.match_at(&text[..4], 0),
            Some(Match {
                glyph_id: gid(0),
                len: 3
            })
        );
    }

    #[test]
    fn walk_string() {
        let font = smileys();
        let text = "hi ☺\u{FE0F}, ❤😀!";
        let found: Vec<_> = font
            .matches(text.as_bytes())
            .filter_map(|(offset, found)| Some((offset, found.glyph_id?)))
            .collect();
        assert_eq!(
            found,
            [
                (3, GlyphId::new(0)),
                (11, GlyphId::new(1)),
                (14, GlyphId::new(2)),
            ]
        );
    }

    #[test]
    fn every_smiley_found() {
        let font = smileys();
        let found: Vec<_> = font
            .matches(emote_test_data::SMILEY_TEXT.as_bytes())
            .filter_map(|(_, found)| found.glyph_id)
            .collect();
        assert_eq!(found, [GlyphId::new(0), GlyphId::new(1), GlyphId::new(2)]);
    }

    #[test]
    fn matches_cover_input() {
        let font = smileys();
        // includes stray continuation bytes and a truncated tail
        let text = b"a\x80\xE2\x98\xBA\xEF\xB8\x8F\xF0\x9F";
        let mut expected_offset = 0;
        for (offset, found) in font.matches(text) {
            assert_eq!(offset, expected_offset);
            assert!(found.len >= 1);
            expected_offset += found.len;
        }
        assert_eq!(expected_offset, text.len());
    }

    #[test]
    fn selectors() {
        assert!(is_variation_selector(0xFE0E));
        assert!(is_variation_selector(0xFE0F));
        assert!(!is_variation_selector(0xFE0D));
        assert!(!is_variation_selector(0xE0100));
    }
}
