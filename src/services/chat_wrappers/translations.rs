//! Chat template extraction from localization files.

use std::fs;
use std::path::Path;

use super::discovery::{LocalizationFiles, TierOrder};
use super::types::{ChatCategory, ChatFormatStrings, LocaleTier, CHAT_KEY_PREFIX};
use crate::services::fs_utils::wide_text::{decode_narrow_text, decode_wide_text};
use crate::services::vdf::parse_document;

/// `TF_Chat_*` keys that are not chat formats we wrap.
const IGNORED_CHAT_KEYS: &[&str] = &["Team_Loc", "Party", "Disabled", "Unavailable"];

/// Map a localization key to its chat category.
///
/// Keys without the `TF_Chat_` prefix and the known non-format keys yield
/// `None` quietly; unrecognized `TF_Chat_*` keys are logged.
pub fn chat_category_for_key(key: &str) -> Option<ChatCategory> {
    let suffix = key.strip_prefix(CHAT_KEY_PREFIX)?;
    if let Some(category) = ChatCategory::from_key_suffix(suffix) {
        return Some(category);
    }

    if !IGNORED_CHAT_KEYS.contains(&suffix) {
        log::error!("Unknown chat type localization string {suffix:?}");
    }
    None
}

/// Read a localization file, preferring UTF-16 and falling back to the raw bytes.
pub fn read_translation_file(path: &Path) -> std::io::Result<String> {
    let bytes = fs::read(path)?;
    match decode_wide_text(&bytes) {
        Ok(text) => Ok(text),
        Err(e) => {
            log::info!(
                "{}: not readable as UTF-16 ({e}), parsing as-is",
                path.display()
            );
            Ok(decode_narrow_text(&bytes))
        }
    }
}

/// Merge the chat templates of one document into `strings`.
///
/// Later calls overwrite earlier values for the same tier and category. A
/// document that fails to parse contributes nothing.
pub fn collect_chat_formats(
    source: &str,
    text: &str,
    tier: LocaleTier,
    strings: &mut ChatFormatStrings,
) {
    let document = match parse_document(text) {
        Ok(doc) => doc,
        Err(e) => {
            log::error!("Failed to parse translations from {source:?}: {e}");
            return;
        }
    };

    let Some(tokens) = document.child("Tokens") else {
        return;
    };

    for (key, value) in &tokens.attributes {
        let Some(category) = chat_category_for_key(key) else {
            continue;
        };

        if value.is_empty() {
            log::warn!("{source:?}: Empty value read for {key:?} ({category})");
        }

        strings.set(tier, category, value.as_str());
    }
}

/// Chat templates of `language` across the base game and every mod, base first
/// so mods win.
pub fn find_existing_translations(tf_dir: &Path, language: &str) -> ChatFormatStrings {
    let mut strings = ChatFormatStrings::default();

    for file in LocalizationFiles::new(tf_dir, language, TierOrder::BaseFirst).iter() {
        let source = file.path.display().to_string();
        match read_translation_file(&file.path) {
            Ok(text) => collect_chat_formats(&source, &text, file.tier, &mut strings),
            Err(e) => log::error!("Failed to read {source}: {e}"),
        }
    }

    strings
}

#[cfg(test)]
#[path = "tests/translations_tests.rs"]
mod tests;
