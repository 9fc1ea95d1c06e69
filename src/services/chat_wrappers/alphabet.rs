//! Zero-width characters usable as chat markers.

/// One invisible character in both encodings used by the pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvisibleChar {
    /// UTF-8 form, written into translation templates.
    pub narrow: &'static str,
    /// UTF-16 code unit, as the game and the detector see it.
    pub wide: u16,
}

/// Control bytes 0x01..=0x08 are reserved by the game for text colors.
/// U+180E renders as a visible glyph in game and is excluded.
pub const INVISIBLE_CHARS: [InvisibleChar; 5] = [
    InvisibleChar {
        narrow: "\u{200B}",
        wide: 0x200B,
    },
    InvisibleChar {
        narrow: "\u{200C}",
        wide: 0x200C,
    },
    InvisibleChar {
        narrow: "\u{200D}",
        wide: 0x200D,
    },
    InvisibleChar {
        narrow: "\u{FEFF}",
        wide: 0xFEFF,
    },
    InvisibleChar {
        narrow: "\u{2060}",
        wide: 0x2060,
    },
];

pub fn lookup(c: char) -> Option<&'static InvisibleChar> {
    let mut buf = [0u8; 4];
    let encoded: &str = c.encode_utf8(&mut buf);
    INVISIBLE_CHARS.iter().find(|entry| entry.narrow == encoded)
}

/// UTF-8 length of the widest alphabet character.
pub fn max_narrow_len() -> usize {
    INVISIBLE_CHARS
        .iter()
        .map(|entry| entry.narrow.len())
        .max()
        .unwrap_or(0)
}

pub fn is_invisible(c: char) -> bool {
    lookup(c).is_some()
}

/// Remove every alphabet character from `text`.
pub fn strip_invisible(text: &str) -> String {
    text.chars().filter(|c| !is_invisible(*c)).collect()
}
