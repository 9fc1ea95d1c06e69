//! Valve KeyValues (VDF) documents: the nested `"key" "value"` / `"key" { ... }`
//! format used by the game's `resource/*.txt` localization files.

pub mod document;
pub mod write;

pub use document::{parse_document, KvObject, KvParseError};
pub use write::write_document;
