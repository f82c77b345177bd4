//! Script classification for the English-only policy.
//!
//! Classification is a deny-list of Unicode block ranges. Anything outside
//! the table is accepted: ASCII, Latin-1 and Latin Extended letters,
//! general punctuation, currency and math symbols, and emoji.
//!
//! A few emoji live inside CJK blocks (U+3030, U+303D, U+3297, U+3299); the
//! table is split around them so they stay neutral.

use std::fmt;

/// A non-Latin script family rejected by the English-only policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Script {
    Greek,
    Cyrillic,
    Armenian,
    Hebrew,
    Arabic,
    Syriac,
    Thaana,
    Indic,
    Thai,
    Lao,
    Tibetan,
    Myanmar,
    Georgian,
    Hangul,
    Ethiopic,
    Khmer,
    Mongolian,
    Hiragana,
    Katakana,
    Han,
    Yi,
}

impl Script {
    pub fn name(&self) -> &'static str {
        match self {
            Script::Greek => "Greek",
            Script::Cyrillic => "Cyrillic",
            Script::Armenian => "Armenian",
            Script::Hebrew => "Hebrew",
            Script::Arabic => "Arabic",
            Script::Syriac => "Syriac",
            Script::Thaana => "Thaana",
            Script::Indic => "Indic",
            Script::Thai => "Thai",
            Script::Lao => "Lao",
            Script::Tibetan => "Tibetan",
            Script::Myanmar => "Myanmar",
            Script::Georgian => "Georgian",
            Script::Hangul => "Hangul",
            Script::Ethiopic => "Ethiopic",
            Script::Khmer => "Khmer",
            Script::Mongolian => "Mongolian",
            Script::Hiragana => "Hiragana",
            Script::Katakana => "Katakana",
            Script::Han => "Han",
            Script::Yi => "Yi",
        }
    }
}

impl fmt::Display for Script {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ---------------------------------------------------------------------------
// Restricted ranges
// ---------------------------------------------------------------------------

/// Inclusive code point ranges, sorted and non-overlapping.
const RESTRICTED_RANGES: &[(u32, u32, Script)] = &[
    (0x0370, 0x03FF, Script::Greek),
    (0x0400, 0x052F, Script::Cyrillic),
    (0x0530, 0x058F, Script::Armenian),
    (0x0590, 0x05FF, Script::Hebrew),
    (0x0600, 0x06FF, Script::Arabic),
    (0x0700, 0x074F, Script::Syriac),
    (0x0750, 0x077F, Script::Arabic),
    (0x0780, 0x07BF, Script::Thaana),
    // Arabic Extended-B and Extended-A
    (0x0870, 0x08FF, Script::Arabic),
    // Devanagari through Sinhala
    (0x0900, 0x0DFF, Script::Indic),
    (0x0E00, 0x0E7F, Script::Thai),
    (0x0E80, 0x0EFF, Script::Lao),
    (0x0F00, 0x0FFF, Script::Tibetan),
    (0x1000, 0x109F, Script::Myanmar),
    (0x10A0, 0x10FF, Script::Georgian),
    (0x1100, 0x11FF, Script::Hangul),
    (0x1200, 0x139F, Script::Ethiopic),
    (0x1780, 0x17FF, Script::Khmer),
    (0x1800, 0x18AF, Script::Mongolian),
    (0x1C80, 0x1C8F, Script::Cyrillic),
    (0x1F00, 0x1FFF, Script::Greek),
    (0x2DE0, 0x2DFF, Script::Cyrillic),
    // CJK and Kangxi radicals
    (0x2E80, 0x2FDF, Script::Han),
    // CJK symbols and punctuation, minus U+3030 and U+303D
    (0x3000, 0x302F, Script::Han),
    (0x3031, 0x303C, Script::Han),
    (0x303E, 0x303F, Script::Han),
    (0x3040, 0x309F, Script::Hiragana),
    (0x30A0, 0x30FF, Script::Katakana),
    // Bopomofo
    (0x3100, 0x312F, Script::Han),
    (0x3130, 0x318F, Script::Hangul),
    (0x31A0, 0x31EF, Script::Han),
    (0x31F0, 0x31FF, Script::Katakana),
    // Enclosed CJK, minus U+3297 and U+3299
    (0x3200, 0x3296, Script::Han),
    (0x3298, 0x3298, Script::Han),
    (0x329A, 0x33FF, Script::Han),
    (0x3400, 0x4DBF, Script::Han),
    (0x4E00, 0x9FFF, Script::Han),
    (0xA000, 0xA4CF, Script::Yi),
    (0xA960, 0xA97F, Script::Hangul),
    (0xAC00, 0xD7FF, Script::Hangul),
    (0xF900, 0xFAFF, Script::Han),
    (0xFB1D, 0xFB4F, Script::Hebrew),
    (0xFB50, 0xFDFF, Script::Arabic),
    // Vertical forms
    (0xFE10, 0xFE1F, Script::Han),
    (0xFE30, 0xFE4F, Script::Han),
    // U+FEFF is the byte order mark, not Arabic
    (0xFE70, 0xFEFC, Script::Arabic),
    // Halfwidth CJK punctuation
    (0xFF61, 0xFF64, Script::Han),
    (0xFF65, 0xFF9F, Script::Katakana),
    (0xFFA0, 0xFFDC, Script::Hangul),
    // Kana Supplement, Kana Extended-A, Small Kana Extension
    (0x1B000, 0x1B16F, Script::Hiragana),
    (0x20000, 0x2FA1F, Script::Han),
    (0x30000, 0x323AF, Script::Han),
];

/// First restricted character found in a string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScriptHit {
    /// Byte offset of the character
    pub offset: usize,
    pub character: char,
    pub script: Script,
}

/// Returns the restricted script `c` belongs to, if any.
pub fn restricted_script(c: char) -> Option<Script> {
    if c.is_ascii() {
        return None;
    }

    let cp = c as u32;
    RESTRICTED_RANGES
        .binary_search_by(|&(start, end, _)| {
            if cp < start {
                std::cmp::Ordering::Greater
            } else if cp > end {
                std::cmp::Ordering::Less
            } else {
                std::cmp::Ordering::Equal
            }
        })
        .ok()
        .map(|idx| RESTRICTED_RANGES[idx].2)
}

/// Check whether `c` belongs to a restricted script.
#[inline]
pub fn is_restricted(c: char) -> bool {
    restricted_script(c).is_some()
}

/// Find the first restricted character in `text`, scanning left to right.
pub fn find_restricted(text: &str) -> Option<ScriptHit> {
    text.char_indices().find_map(|(offset, character)| {
        restricted_script(character).map(|script| ScriptHit {
            offset,
            character,
            script,
        })
    })
}
