//! Localization file discovery across the base game and `custom/` mods.
//!
//! Layout:
//! - `<tf>/resource/{tf,chat}_<lang>.txt`: base tier
//! - `<tf>/custom/<mod>/resource/{tf,chat}_<lang>.txt`: one override tier per mod

use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use super::types::LocaleTier;
use crate::{LEGACY_OUTPUT_DIR_NAME, OUTPUT_DIR_NAME};

/// Whether the base tier is yielded before or after the mod tiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TierOrder {
    BaseFirst,
    BaseLast,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalizationFile {
    pub path: PathBuf,
    pub tier: LocaleTier,
}

/// Restartable listing of one language's localization files.
///
/// Nothing is cached: every call to [`LocalizationFiles::iter`] reads the
/// filesystem again, lazily, as the iterator advances.
#[derive(Debug, Clone)]
pub struct LocalizationFiles {
    tf_dir: PathBuf,
    language: String,
    order: TierOrder,
}

impl LocalizationFiles {
    pub fn new(tf_dir: &Path, language: &str, order: TierOrder) -> Self {
        Self {
            tf_dir: tf_dir.to_path_buf(),
            language: language.to_string(),
            order,
        }
    }

    /// Existing files, in priority order (later files override earlier ones
    /// when `order` is [`TierOrder::BaseFirst`]).
    pub fn iter(&self) -> impl Iterator<Item = LocalizationFile> + '_ {
        let base_first = self.order == TierOrder::BaseFirst;
        let leading = base_first.then(|| self.base_files()).into_iter().flatten();
        let trailing = (!base_first).then(|| self.base_files()).into_iter().flatten();

        leading
            .chain(self.override_files())
            .chain(trailing)
            .filter(|file| file.path.is_file())
    }

    fn base_files(&self) -> impl Iterator<Item = LocalizationFile> {
        resource_pair(&self.tf_dir.join("resource"), &self.language)
            .into_iter()
            .map(|path| LocalizationFile {
                path,
                tier: LocaleTier::English,
            })
    }

    fn override_files(&self) -> impl Iterator<Item = LocalizationFile> + '_ {
        WalkDir::new(self.tf_dir.join("custom"))
            .min_depth(1)
            .max_depth(1)
            .follow_links(true)
            .sort_by_file_name()
            .into_iter()
            .filter_map(|entry| entry.ok())
            .filter(|entry| entry.file_type().is_dir())
            .filter(|entry| !is_tool_output_dir(&entry.file_name().to_string_lossy()))
            .map(|entry| entry.into_path().join("resource"))
            .filter(|resource_dir| resource_dir.is_dir())
            .flat_map(move |resource_dir| resource_pair(&resource_dir, &self.language))
            .map(|path| LocalizationFile {
                path,
                tier: LocaleTier::Localized,
            })
    }
}

/// Our own output folders are never read back as input.
pub fn is_tool_output_dir(dir_name: &str) -> bool {
    dir_name.eq_ignore_ascii_case(OUTPUT_DIR_NAME)
        || dir_name.eq_ignore_ascii_case(LEGACY_OUTPUT_DIR_NAME)
}

fn resource_pair(resource_dir: &Path, language: &str) -> [PathBuf; 2] {
    [
        resource_dir.join(format!("tf_{language}.txt")),
        resource_dir.join(format!("chat_{language}.txt")),
    ]
}

/// Highest-priority `chat_<language>.txt`: the first one found with mods
/// ahead of the base game.
pub fn find_existing_chat_translation_file(tf_dir: &Path, language: &str) -> Option<PathBuf> {
    let desired = format!("chat_{language}.txt");
    LocalizationFiles::new(tf_dir, language, TierOrder::BaseLast)
        .iter()
        .map(|file| file.path)
        .find(|path| {
            path.file_name()
                .map(|name| name.to_string_lossy() == desired)
                .unwrap_or(false)
        })
}

#[cfg(test)]
#[path = "tests/discovery_tests.rs"]
mod tests;
