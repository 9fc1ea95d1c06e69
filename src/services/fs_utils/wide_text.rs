//! UTF-16 ("wide") text handling for the game's localization files.
//!
//! The game ships its `resource/*.txt` files as UTF-16 with a byte order mark,
//! while hand-edited mod files are frequently plain UTF-8.

use encoding_rs::{Encoding, UTF_8};
use thiserror::Error;

const UTF16LE_BOM: [u8; 2] = [0xFF, 0xFE];

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EncodingError {
    #[error("no UTF-16 byte order mark")]
    MissingBom,
    #[error("byte order mark is {0}, not UTF-16")]
    NotWide(&'static str),
    #[error("malformed {0} content")]
    Malformed(&'static str),
}

/// Decode UTF-16 text that starts with a byte order mark (LE or BE).
///
/// Fails without replacement on a missing BOM or invalid code units so the
/// caller can fall back to reading the bytes as-is.
pub fn decode_wide_text(bytes: &[u8]) -> Result<String, EncodingError> {
    let (encoding, bom_len) = Encoding::for_bom(bytes).ok_or(EncodingError::MissingBom)?;
    if encoding == UTF_8 {
        return Err(EncodingError::NotWide(encoding.name()));
    }

    encoding
        .decode_without_bom_handling_and_without_replacement(&bytes[bom_len..])
        .map(|text| text.into_owned())
        .ok_or(EncodingError::Malformed(encoding.name()))
}

/// Decode bytes as UTF-8, dropping a UTF-8 BOM and replacing invalid sequences.
pub fn decode_narrow_text(bytes: &[u8]) -> String {
    let (text, _had_errors) = UTF_8.decode_with_bom_removal(bytes);
    text.into_owned()
}

/// Encode text as UTF-16LE with a leading byte order mark.
pub fn encode_wide_text(text: &str) -> Vec<u8> {
    let mut out = Vec::with_capacity(UTF16LE_BOM.len() + text.len() * 2);
    out.extend_from_slice(&UTF16LE_BOM);
    for unit in text.encode_utf16() {
        out.extend_from_slice(&unit.to_le_bytes());
    }
    out
}
