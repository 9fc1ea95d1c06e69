#![allow(dead_code)]

use chatwrap_lib::services::config::GeneratorConfig;
use chatwrap_lib::services::fs_utils::wide_text::{decode_wide_text, encode_wide_text};
use chatwrap_lib::services::vdf::{parse_document, KvObject};
use chatwrap_lib::OUTPUT_DIR_NAME;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Once;
use tempfile::TempDir;

static INIT: Once = Once::new();

pub fn init_logging() {
    INIT.call_once(|| {
        let _ = env_logger::builder().is_test(true).try_init();
    });
}

/// A throwaway `tf` directory populated with localization files.
pub struct GameTree {
    pub dir: TempDir,
}

impl GameTree {
    pub fn new() -> Self {
        init_logging();
        Self {
            dir: TempDir::new().expect("Failed to create temp dir"),
        }
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    /// Write a UTF-16 file the way the game ships them.
    pub fn write_wide(&self, rel: &str, text: &str) -> PathBuf {
        let path = self.root().join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, encode_wide_text(text)).unwrap();
        path
    }

    /// Write a UTF-8 file, as many mods do.
    pub fn write_narrow(&self, rel: &str, text: &str) -> PathBuf {
        let path = self.root().join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, text).unwrap();
        path
    }

    pub fn config(&self, languages: &[&str], seed: Option<u64>) -> GeneratorConfig {
        GeneratorConfig {
            tf_dir: self.root().to_path_buf(),
            languages: languages.iter().map(|l| l.to_string()).collect(),
            seed,
            wrappers_json: None,
        }
    }

    pub fn output_dir(&self) -> PathBuf {
        self.root().join("custom").join(OUTPUT_DIR_NAME).join("resource")
    }

    pub fn output_bytes(&self, language: &str) -> Vec<u8> {
        fs::read(self.output_dir().join(format!("closecaption_{language}.txt"))).unwrap()
    }

    pub fn read_output(&self, language: &str) -> KvObject {
        let text = decode_wide_text(&self.output_bytes(language)).unwrap();
        parse_document(&text).unwrap()
    }
}

/// A `"lang"` document with the given tokens.
pub fn lang_file(language: &str, tokens: &[(&str, &str)]) -> String {
    let mut text = format!("\"lang\"\n{{\n\t\"Language\"\t\"{language}\"\n\t\"Tokens\"\n\t{{\n");
    for (key, value) in tokens {
        text.push_str(&format!("\t\t\"{key}\"\t\"{value}\"\n"));
    }
    text.push_str("\t}\n}\n");
    text
}

/// Base English chat templates close to what the game ships.
pub fn english_chat_tokens() -> Vec<(&'static str, &'static str)> {
    vec![
        ("TF_Chat_All", "\u{1}%s1 :  %s2"),
        ("TF_Chat_AllDead", "*DEAD* %s1 :  %s2"),
        ("TF_Chat_Team", "(TEAM) %s1 :  %s2"),
        ("TF_Chat_Team_Dead", "*DEAD*(TEAM) %s1 :  %s2"),
        ("TF_Chat_AllSpec", "*SPEC* %s1 :  %s2"),
        ("TF_Chat_Spec", "(Spectator) %s1 :  %s2"),
        ("TF_Chat_Coach", "(Coach) %s1 :  %s2"),
        ("TF_Chat_Party", "(PARTY) %s1 :  %s2"),
        ("TF_Chat_Team_Loc", "(TEAM) %s1 @ %s3 :  %s2"),
    ]
}
