use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::services::chat_wrappers::languages::{is_supported_language, SUPPORTED_LANGUAGES};
use crate::types::errors::{GenerateError, GenerateResult};

/// Settings for one generation run. Every field may be omitted from the file.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct GeneratorConfig {
    /// The game's `tf` directory.
    pub tf_dir: PathBuf,
    pub languages: Vec<String>,
    /// Fixed seed for reproducible output; `None` draws from OS entropy.
    pub seed: Option<u64>,
    /// Where to dump the generated wrappers as JSON, if anywhere.
    pub wrappers_json: Option<PathBuf>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            tf_dir: PathBuf::new(),
            languages: SUPPORTED_LANGUAGES.iter().map(|l| l.to_string()).collect(),
            seed: None,
            wrappers_json: None,
        }
    }
}

impl GeneratorConfig {
    pub fn validate(&self) -> GenerateResult<()> {
        if self.tf_dir.as_os_str().is_empty() {
            return Err(GenerateError::Config("tf_dir is not set".into()));
        }
        if !self.tf_dir.is_dir() {
            return Err(GenerateError::Config(format!(
                "tf_dir {} is not a directory",
                self.tf_dir.display()
            )));
        }
        if self.languages.is_empty() {
            return Err(GenerateError::Config("no languages selected".into()));
        }

        let unknown: Vec<&str> = self
            .languages
            .iter()
            .map(String::as_str)
            .filter(|lang| !is_supported_language(lang))
            .collect();
        if !unknown.is_empty() {
            return Err(GenerateError::Config(format!(
                "unsupported language(s): {}",
                unknown.join(", ")
            )));
        }
        Ok(())
    }

    /// Selected languages, duplicates removed, first occurrence kept.
    pub fn unique_languages(&self) -> Vec<String> {
        let mut out: Vec<String> = Vec::with_capacity(self.languages.len());
        for lang in &self.languages {
            if !out.contains(lang) {
                out.push(lang.clone());
            }
        }
        out
    }
}
