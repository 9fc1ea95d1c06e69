pub mod models;

pub use models::*;

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use crate::types::errors::{GenerateError, GenerateResult};

/// Load a JSON config file. A missing file yields the defaults.
pub fn load_config(path: &Path) -> GenerateResult<GeneratorConfig> {
    let text = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            log::info!("No config at {}, using defaults", path.display());
            return Ok(GeneratorConfig::default());
        }
        Err(source) => {
            return Err(GenerateError::ConfigIo {
                path: path.to_path_buf(),
                source,
            })
        }
    };

    serde_json::from_str(&text).map_err(|source| GenerateError::ConfigParse {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
