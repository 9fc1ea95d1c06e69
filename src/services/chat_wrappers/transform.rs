//! Insertion of wrapper markers into a chat template.

use thiserror::Error;

use super::template::{split_template, TemplateError};
use super::types::{CategoryWrappers, ChatCategory, ChatWrappers};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TransformError {
    #[error("empty template")]
    Empty,
    #[error(transparent)]
    Template(#[from] TemplateError),
    #[error("wrapping produced an unchanged template")]
    Unchanged,
}

/// Wrap the whole line, the name and the message of `template` with the
/// markers of one category. A leading control byte stays first.
pub fn apply_chat_wrappers(
    template: &str,
    wrappers: &CategoryWrappers,
) -> Result<String, TransformError> {
    if template.is_empty() {
        return Err(TransformError::Empty);
    }

    let parts = split_template(template)?;
    let pieces = [
        parts.control,
        wrappers.full.start.narrow(),
        parts.prefix,
        wrappers.name.start.narrow(),
        parts.name_token,
        wrappers.name.end.narrow(),
        parts.separator,
        wrappers.message.start.narrow(),
        parts.message_token,
        wrappers.message.end.narrow(),
        parts.suffix,
        wrappers.full.end.narrow(),
    ];

    let wrapped = pieces.concat();
    if wrapped == template {
        return Err(TransformError::Unchanged);
    }
    Ok(wrapped)
}

/// Wrap `translation` in place. On failure the value is left untouched and
/// the problem is logged.
pub fn wrap_translation(
    source: &str,
    category: ChatCategory,
    translation: &mut String,
    wrappers: &ChatWrappers,
) -> bool {
    match apply_chat_wrappers(translation, wrappers.get(category)) {
        Ok(wrapped) => {
            *translation = wrapped;
            true
        }
        Err(e) => {
            log::error!("{source}: Failed to wrap {category} template {translation:?}: {e}");
            false
        }
    }
}

#[cfg(test)]
#[path = "tests/transform_tests.rs"]
mod tests;
