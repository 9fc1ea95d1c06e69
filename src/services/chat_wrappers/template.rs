//! Scanner for the five-part chat template layout:
//! `[control] prefix %s1 separator %s2 suffix`.

use std::ops::RangeInclusive;
use thiserror::Error;

pub const NAME_PLACEHOLDER: &str = "%s1";
pub const MESSAGE_PLACEHOLDER: &str = "%s2";

/// Leading color-control bytes a template may start with.
pub const CONTROL_BYTES: RangeInclusive<u8> = 0x01..=0x05;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TemplateError {
    #[error("missing name placeholder '%s1'")]
    MissingName,
    #[error("missing message placeholder '%s2'")]
    MissingMessage,
    #[error("placeholder '{0}' appears more than once")]
    Duplicate(&'static str),
    #[error("message placeholder '%s2' precedes name placeholder '%s1'")]
    OutOfOrder,
}

/// Borrowed view of a template split around its placeholders.
/// Concatenating the fields in declaration order yields the original string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChatTemplate<'a> {
    /// Empty, or the single leading control byte.
    pub control: &'a str,
    pub prefix: &'a str,
    pub name_token: &'a str,
    pub separator: &'a str,
    pub message_token: &'a str,
    pub suffix: &'a str,
}

/// Locate both placeholders (ASCII case-insensitive) and split around them.
///
/// Each placeholder must occur exactly once, name before message.
pub fn split_template(template: &str) -> Result<ChatTemplate<'_>, TemplateError> {
    let name_at = find_single(template, NAME_PLACEHOLDER)?.ok_or(TemplateError::MissingName)?;
    let message_at =
        find_single(template, MESSAGE_PLACEHOLDER)?.ok_or(TemplateError::MissingMessage)?;
    if message_at < name_at {
        return Err(TemplateError::OutOfOrder);
    }

    let control_len = match template.as_bytes().first() {
        Some(b) if CONTROL_BYTES.contains(b) => 1,
        _ => 0,
    };
    let name_end = name_at + NAME_PLACEHOLDER.len();
    let message_end = message_at + MESSAGE_PLACEHOLDER.len();

    Ok(ChatTemplate {
        control: &template[..control_len],
        prefix: &template[control_len..name_at],
        name_token: &template[name_at..name_end],
        separator: &template[name_end..message_at],
        message_token: &template[message_at..message_end],
        suffix: &template[message_end..],
    })
}

fn find_single(haystack: &str, token: &'static str) -> Result<Option<usize>, TemplateError> {
    let mut offsets = haystack
        .as_bytes()
        .windows(token.len())
        .enumerate()
        .filter(|(_, window)| window.eq_ignore_ascii_case(token.as_bytes()))
        .map(|(offset, _)| offset);

    let first = offsets.next();
    if offsets.next().is_some() {
        return Err(TemplateError::Duplicate(token));
    }
    Ok(first)
}

#[cfg(test)]
#[path = "tests/template_tests.rs"]
mod tests;
