//! One generation run, end to end.
//!
//! Phases run strictly in order; the two per-language phases fan out over
//! rayon and join before the next phase starts.

use rand::rngs::StdRng;
use rand::SeedableRng;
use rayon::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use super::generator::{describe_wrappers, generate_chat_wrappers};
use super::lengths::ChatFmtStrLengths;
use super::transform::wrap_translation;
use super::translations::find_existing_translations;
use super::types::{ChatCategory, ChatFormatStrings, ChatWrappers};
use crate::services::config::GeneratorConfig;
use crate::services::core::progress::ProgressState;
use crate::services::fs_utils::file_utils::{atomic_write, remove_dir_if_exists};
use crate::services::fs_utils::wide_text::encode_wide_text;
use crate::services::vdf::{write_document, KvObject};
use crate::types::errors::{GenerateError, GenerateResult};
use crate::{LEGACY_OUTPUT_DIR_NAME, OUTPUT_DIR_NAME};

/// Progress steps per language: parse, transform, serialize, write.
pub const STEPS_PER_LANGUAGE: u32 = 4;

#[derive(Debug)]
pub struct GenerationReport {
    pub wrappers: ChatWrappers,
    pub lengths: ChatFmtStrLengths,
    /// `<tf>/custom/<output>/resource`
    pub output_dir: PathBuf,
    pub files_written: Vec<PathBuf>,
    pub failed_languages: Vec<String>,
}

/// Regenerate the wrapped chat translations for every configured language.
///
/// Only configuration problems, output directory creation and wrapper
/// generation abort the run. Per-file problems are logged and skipped.
pub fn randomize_chat_wrappers(
    config: &GeneratorConfig,
    progress: &ProgressState,
) -> GenerateResult<GenerationReport> {
    config.validate()?;
    let languages = config.unique_languages();

    let output_dir = prepare_output_dir(&config.tf_dir)?;

    let steps = languages.len().saturating_mul(STEPS_PER_LANGUAGE as usize);
    progress.reset(u32::try_from(steps).unwrap_or(u32::MAX));

    // Phase 1: read every language and fold its budgets into one maximum.
    let merged = Mutex::new(ChatFmtStrLengths::default());
    let parsed: Vec<(String, ChatFormatStrings)> = languages
        .par_iter()
        .map(|language| {
            let strings = find_existing_translations(&config.tf_dir, language);
            let lengths = ChatFmtStrLengths::from_format_strings(&strings, language);
            {
                let mut merged = merged.lock().unwrap_or_else(|p| p.into_inner());
                *merged = merged.max(&lengths);
            }
            progress.increment();
            (language.clone(), strings)
        })
        .collect();
    let lengths = merged.into_inner().unwrap_or_else(|p| p.into_inner());

    // Phase 2: one randomness source for every wrapper of the run.
    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let wrappers = generate_chat_wrappers(&mut rng, &lengths)?;
    log::debug!("{}", describe_wrappers(&wrappers));

    let cramped = lengths.categories_without_room();
    if !cramped.is_empty() {
        log::warn!("Wrappers exceed the available chat length for: {cramped:?}");
    }

    if let Some(path) = &config.wrappers_json {
        write_wrappers_json(path, &wrappers)?;
    }

    // Phase 3: rewrite and write every language.
    let results: Vec<Result<PathBuf, String>> = parsed
        .par_iter()
        .map(|(language, strings)| {
            let document = build_translation_document(language, strings, &wrappers);
            progress.increment();

            let bytes = encode_wide_text(&write_document(&document));
            progress.increment();

            let path = output_dir.join(format!("closecaption_{language}.txt"));
            let result = match atomic_write(&path, &bytes) {
                Ok(()) => Ok(path),
                Err(e) => {
                    log::error!("Failed to write {}: {e}", path.display());
                    Err(language.clone())
                }
            };
            progress.increment();
            result
        })
        .collect();

    let mut files_written = Vec::new();
    let mut failed_languages = Vec::new();
    for result in results {
        match result {
            Ok(path) => files_written.push(path),
            Err(language) => failed_languages.push(language),
        }
    }

    log::info!(
        "Wrote {} modified translations to {}",
        files_written.len(),
        output_dir.display()
    );

    Ok(GenerationReport {
        wrappers,
        lengths,
        output_dir,
        files_written,
        failed_languages,
    })
}

/// Delete previous output (current and legacy names), then create an empty
/// `custom/<output>/resource`.
pub fn prepare_output_dir(tf_dir: &Path) -> GenerateResult<PathBuf> {
    let custom = tf_dir.join("custom");
    for name in [LEGACY_OUTPUT_DIR_NAME, OUTPUT_DIR_NAME] {
        let stale = custom.join(name);
        if let Err(e) = remove_dir_if_exists(&stale) {
            log::warn!("Failed to delete {}: {e}", stale.display());
        }
    }

    let output_dir = custom.join(OUTPUT_DIR_NAME).join("resource");
    fs::create_dir_all(&output_dir).map_err(|source| GenerateError::OutputDir {
        path: output_dir.clone(),
        source,
    })?;
    Ok(output_dir)
}

/// The `"lang"` document written for one language.
///
/// `TF_Chat_<Name>` carries the wrapped localized template, or the wrapped
/// English one when the language has no override. `[english]TF_Chat_<Name>`
/// is only present when an English template exists. It carries the base
/// game's text for the language, which is not English text for other languages.
pub fn build_translation_document(
    language: &str,
    strings: &ChatFormatStrings,
    wrappers: &ChatWrappers,
) -> KvObject {
    let mut root = KvObject::new("lang");
    root.set_attribute("Language", language);
    let tokens = root.add_child(KvObject::new("Tokens"));

    for category in ChatCategory::ALL {
        let source = format!("{language}/{}", category.key());

        let mut english = strings.english[category.index()].clone();
        if !english.is_empty() {
            wrap_translation(&source, category, &mut english, wrappers);
        }

        let mut localized = strings.localized[category.index()].clone();
        if !localized.is_empty() {
            wrap_translation(&source, category, &mut localized, wrappers);
        }

        let value = if localized.is_empty() {
            english.clone()
        } else {
            localized
        };
        tokens.set_attribute(category.key(), value);

        if !english.is_empty() {
            tokens.set_attribute(format!("[english]{}", category.key()), english);
        }
    }

    root
}

/// Dump the wrappers as JSON for the detector to load.
pub fn write_wrappers_json(path: &Path, wrappers: &ChatWrappers) -> GenerateResult<()> {
    let json = serde_json::to_string_pretty(wrappers)?;
    atomic_write(path, json.as_bytes())?;
    log::info!("Wrote chat wrappers to {}", path.display());
    Ok(())
}

#[cfg(test)]
#[path = "tests/orchestrator_tests.rs"]
mod tests;
