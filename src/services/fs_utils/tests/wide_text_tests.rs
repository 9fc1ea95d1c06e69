use crate::services::fs_utils::wide_text::{
    decode_narrow_text, decode_wide_text, encode_wide_text, EncodingError,
};

#[test]
fn encode_wide_text_writes_le_bom_and_units() {
    let bytes = encode_wide_text("A\u{200B}");
    assert_eq!(bytes, vec![0xFF, 0xFE, 0x41, 0x00, 0x0B, 0x20]);
}

#[test]
fn decode_wide_text_reads_what_encode_wrote() {
    let text = "\"lang\" { \"Language\" \"russian\" } Привет";
    assert_eq!(decode_wide_text(&encode_wide_text(text)).unwrap(), text);
}

#[test]
fn decode_wide_text_handles_big_endian_bom() {
    let bytes = [0xFE, 0xFF, 0x00, 0x68, 0x00, 0x69];
    assert_eq!(decode_wide_text(&bytes).unwrap(), "hi");
}

#[test]
fn decode_wide_text_rejects_plain_utf8() {
    assert_eq!(
        decode_wide_text(b"\"lang\" {}"),
        Err(EncodingError::MissingBom)
    );
}

#[test]
fn decode_wide_text_rejects_utf8_bom() {
    let bytes = [0xEF, 0xBB, 0xBF, b'h', b'i'];
    assert!(matches!(
        decode_wide_text(&bytes),
        Err(EncodingError::NotWide(_))
    ));
}

#[test]
fn decode_wide_text_rejects_unpaired_surrogate() {
    // BOM, then a lone high surrogate (0xD800)
    let bytes = [0xFF, 0xFE, 0x00, 0xD8];
    assert!(matches!(
        decode_wide_text(&bytes),
        Err(EncodingError::Malformed(_))
    ));
}

#[test]
fn decode_narrow_text_strips_utf8_bom() {
    let bytes = [0xEF, 0xBB, 0xBF, b'o', b'k'];
    assert_eq!(decode_narrow_text(&bytes), "ok");
}
