//! Per-category length budgets derived from the existing chat templates.
//!
//! Lengths are counted in UTF-8 bytes, the unit of the game's chat buffer.

use super::alphabet::max_narrow_len;
use super::generator::WRAPPER_LENGTH;
use super::template::{split_template, TemplateError};
use super::types::{
    ChatCategory, ChatFormatStrings, LocaleTier, WrapperSlot, CHAT_CATEGORY_COUNT,
};

pub const MAX_TOTAL_CHATMSG_LENGTH: usize = 255;
pub const MAX_PLAYERNAME_LENGTH: usize = 33;
pub const MAX_CHATMSG_MSG_LENGTH: usize = 127;

/// Fixed text around the placeholders of one template.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FmtStrLengths {
    /// Everything before the name placeholder, control byte included.
    pub prefix: usize,
    pub separator: usize,
    pub suffix: usize,
}

impl FmtStrLengths {
    pub fn new(prefix: usize, separator: usize, suffix: usize) -> Self {
        Self {
            prefix,
            separator,
            suffix,
        }
    }

    pub fn from_template(template: &str) -> Result<Self, TemplateError> {
        let parts = split_template(template)?;
        Ok(Self {
            prefix: parts.control.len() + parts.prefix.len(),
            separator: parts.separator.len(),
            suffix: parts.suffix.len(),
        })
    }

    /// Element-wise maximum.
    pub fn max(self, other: Self) -> Self {
        Self {
            prefix: self.prefix.max(other.prefix),
            separator: self.separator.max(other.separator),
            suffix: self.suffix.max(other.suffix),
        }
    }

    /// Bytes left for markers once the longest name and message are accounted for.
    /// Clamped to zero.
    pub fn available_bytes(&self) -> usize {
        MAX_TOTAL_CHATMSG_LENGTH
            .saturating_sub(MAX_PLAYERNAME_LENGTH)
            .saturating_sub(MAX_CHATMSG_MSG_LENGTH)
            .saturating_sub(self.prefix)
            .saturating_sub(self.separator)
            .saturating_sub(self.suffix)
    }

    /// Wrapper length used for this category. Fixed, independent of
    /// [`FmtStrLengths::available_bytes`].
    pub fn max_wrapper_length(&self) -> usize {
        WRAPPER_LENGTH
    }

    /// UTF-8 bytes the six markers add to one template, at the widest
    /// encoding of any alphabet character.
    pub fn required_wrapper_bytes(&self) -> usize {
        self.max_wrapper_length() * max_narrow_len() * WrapperSlot::ALL.len()
    }
}

/// Merged budgets for every category.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ChatFmtStrLengths {
    types: [FmtStrLengths; CHAT_CATEGORY_COUNT],
}

impl ChatFmtStrLengths {
    pub fn get(&self, category: ChatCategory) -> &FmtStrLengths {
        &self.types[category.index()]
    }

    pub fn max(&self, other: &Self) -> Self {
        let mut merged = *self;
        for (mine, theirs) in merged.types.iter_mut().zip(other.types.iter()) {
            *mine = mine.max(*theirs);
        }
        merged
    }

    /// Fold one template into the budget of `category`.
    ///
    /// Templates without usable placeholders are logged and leave the budget untouched.
    pub fn include(&mut self, category: ChatCategory, template: &str, source: &str) -> bool {
        match FmtStrLengths::from_template(template) {
            Ok(lengths) => {
                let slot = &mut self.types[category.index()];
                *slot = slot.max(lengths);
                true
            }
            Err(e) => {
                log::error!("{source}: {category} template {template:?}: {e}");
                false
            }
        }
    }

    /// Budgets of one language, over both locale tiers. Empty templates are skipped.
    pub fn from_format_strings(formats: &ChatFormatStrings, source: &str) -> Self {
        let mut lengths = Self::default();
        for category in ChatCategory::ALL {
            for tier in [LocaleTier::English, LocaleTier::Localized] {
                let template = formats.get(tier, category);
                if !template.is_empty() {
                    lengths.include(category, template, source);
                }
            }
        }
        lengths
    }

    /// Categories whose fixed-size markers exceed the computed room.
    ///
    /// Diagnostic only: wrapper length does not adapt to the budget.
    pub fn categories_without_room(&self) -> Vec<ChatCategory> {
        ChatCategory::ALL
            .into_iter()
            .filter(|category| {
                let lengths = self.get(*category);
                log::debug!(
                    "{category}: prefix {} separator {} suffix {} -> {} bytes available",
                    lengths.prefix,
                    lengths.separator,
                    lengths.suffix,
                    lengths.available_bytes()
                );
                lengths.required_wrapper_bytes() > lengths.available_bytes()
            })
            .collect()
    }
}

#[cfg(test)]
#[path = "tests/lengths_tests.rs"]
mod tests;
