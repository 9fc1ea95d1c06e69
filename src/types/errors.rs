use serde::Serialize;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that abort a generation run.
///
/// Everything else (unparseable files, templates without placeholders, failed
/// wrapper injection) is logged where it happens and never reaches this type.
#[derive(Debug, Error)]
pub enum GenerateError {
    #[error("Invalid configuration: {0}")]
    Config(String),
    #[error("Failed to read config {}: {source}", path.display())]
    ConfigIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to parse config {}: {source}", path.display())]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("Failed to create output directory {}: {source}", path.display())]
    OutputDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error(
        "Wrapper space exhausted: no unused sequence of length {length} after {attempts} attempts ({issued} already issued)"
    )]
    WrapperSpaceExhausted {
        length: usize,
        attempts: usize,
        issued: usize,
    },
    #[error("Wrapper length {length} yields {available} sequences, {required} are required")]
    WrapperSpaceTooSmall {
        length: usize,
        available: usize,
        required: usize,
    },
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl Serialize for GenerateError {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.to_string().as_ref())
    }
}

pub type GenerateResult<T> = Result<T, GenerateError>;

#[cfg(test)]
#[path = "tests/errors_tests.rs"]
mod tests;
