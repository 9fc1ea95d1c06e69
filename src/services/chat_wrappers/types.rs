use serde::{Deserialize, Serialize};
use std::fmt;

use super::alphabet::{self, InvisibleChar};

pub const CHAT_CATEGORY_COUNT: usize = 7;

/// Prefix shared by every chat-format localization key.
pub const CHAT_KEY_PREFIX: &str = "TF_Chat_";

/// The game's chat scopes, each with its own format template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChatCategory {
    All,
    AllDead,
    Team,
    TeamDead,
    Spec,
    SpecTeam,
    Coach,
}

impl ChatCategory {
    pub const ALL: [ChatCategory; CHAT_CATEGORY_COUNT] = [
        ChatCategory::All,
        ChatCategory::AllDead,
        ChatCategory::Team,
        ChatCategory::TeamDead,
        ChatCategory::Spec,
        ChatCategory::SpecTeam,
        ChatCategory::Coach,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    /// Full localization key, e.g. `TF_Chat_AllDead`.
    pub fn key(self) -> &'static str {
        match self {
            ChatCategory::All => "TF_Chat_All",
            ChatCategory::AllDead => "TF_Chat_AllDead",
            ChatCategory::Team => "TF_Chat_Team",
            ChatCategory::TeamDead => "TF_Chat_Team_Dead",
            ChatCategory::Spec => "TF_Chat_AllSpec",
            ChatCategory::SpecTeam => "TF_Chat_Spec",
            ChatCategory::Coach => "TF_Chat_Coach",
        }
    }

    /// Inverse of [`ChatCategory::key`] without the `TF_Chat_` prefix.
    /// Note the game's naming: `Spec` is spectator *team* chat, `AllSpec` is spectator chat.
    pub fn from_key_suffix(suffix: &str) -> Option<Self> {
        match suffix {
            "All" => Some(ChatCategory::All),
            "AllDead" => Some(ChatCategory::AllDead),
            "Team" => Some(ChatCategory::Team),
            "Team_Dead" => Some(ChatCategory::TeamDead),
            "AllSpec" => Some(ChatCategory::Spec),
            "Spec" => Some(ChatCategory::SpecTeam),
            "Coach" => Some(ChatCategory::Coach),
            _ => None,
        }
    }
}

impl fmt::Display for ChatCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{self:?}")
    }
}

/// Base game resources vs. everything found under `custom/`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LocaleTier {
    English,
    Localized,
}

/// A run of invisible characters, kept in UTF-8 and UTF-16 form in lockstep.
///
/// Equality and hashing cover the content, so sequences can be collected in a
/// set to enforce uniqueness.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct WrapperSequence {
    narrow: String,
    wide: Vec<u16>,
}

impl WrapperSequence {
    pub fn push(&mut self, c: &InvisibleChar) {
        self.narrow.push_str(c.narrow);
        self.wide.push(c.wide);
    }

    pub fn narrow(&self) -> &str {
        &self.narrow
    }

    pub fn wide(&self) -> &[u16] {
        &self.wide
    }

    /// Length in characters (identical for both encodings).
    pub fn len(&self) -> usize {
        self.wide.len()
    }

    pub fn is_empty(&self) -> bool {
        self.wide.is_empty()
    }
}

impl From<WrapperSequence> for String {
    fn from(sequence: WrapperSequence) -> Self {
        sequence.narrow
    }
}

impl TryFrom<String> for WrapperSequence {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        let mut sequence = WrapperSequence::default();
        for c in value.chars() {
            let entry = alphabet::lookup(c)
                .ok_or_else(|| format!("U+{:04X} is not a wrapper character", c as u32))?;
            sequence.push(entry);
        }
        Ok(sequence)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WrapperPair {
    pub start: WrapperSequence,
    pub end: WrapperSequence,
}

/// The six marker roles of one chat category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WrapperSlot {
    FullStart,
    FullEnd,
    NameStart,
    NameEnd,
    MessageStart,
    MessageEnd,
}

impl WrapperSlot {
    pub const ALL: [WrapperSlot; 6] = [
        WrapperSlot::FullStart,
        WrapperSlot::FullEnd,
        WrapperSlot::NameStart,
        WrapperSlot::NameEnd,
        WrapperSlot::MessageStart,
        WrapperSlot::MessageEnd,
    ];
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryWrappers {
    pub full: WrapperPair,
    pub name: WrapperPair,
    pub message: WrapperPair,
}

impl CategoryWrappers {
    pub fn get(&self, slot: WrapperSlot) -> &WrapperSequence {
        match slot {
            WrapperSlot::FullStart => &self.full.start,
            WrapperSlot::FullEnd => &self.full.end,
            WrapperSlot::NameStart => &self.name.start,
            WrapperSlot::NameEnd => &self.name.end,
            WrapperSlot::MessageStart => &self.message.start,
            WrapperSlot::MessageEnd => &self.message.end,
        }
    }

    pub fn get_mut(&mut self, slot: WrapperSlot) -> &mut WrapperSequence {
        match slot {
            WrapperSlot::FullStart => &mut self.full.start,
            WrapperSlot::FullEnd => &mut self.full.end,
            WrapperSlot::NameStart => &mut self.name.start,
            WrapperSlot::NameEnd => &mut self.name.end,
            WrapperSlot::MessageStart => &mut self.message.start,
            WrapperSlot::MessageEnd => &mut self.message.end,
        }
    }
}

/// Wrappers for every chat category. Built once per run, read-only afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(
    into = "Vec<ChatWrappersEntry>",
    try_from = "Vec<ChatWrappersEntry>"
)]
pub struct ChatWrappers {
    types: [CategoryWrappers; CHAT_CATEGORY_COUNT],
}

impl ChatWrappers {
    pub fn new(types: [CategoryWrappers; CHAT_CATEGORY_COUNT]) -> Self {
        Self { types }
    }

    pub fn get(&self, category: ChatCategory) -> &CategoryWrappers {
        &self.types[category.index()]
    }

    /// Every issued sequence, category by category in slot order.
    pub fn sequences(&self) -> impl Iterator<Item = &WrapperSequence> + '_ {
        self.types
            .iter()
            .flat_map(|wrappers| WrapperSlot::ALL.into_iter().map(move |slot| wrappers.get(slot)))
    }
}

/// Wire form of one category: `{ "type": "team", "full": {..}, "name": {..}, "message": {..} }`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatWrappersEntry {
    #[serde(rename = "type")]
    pub category: ChatCategory,
    #[serde(flatten)]
    pub wrappers: CategoryWrappers,
}

impl From<ChatWrappers> for Vec<ChatWrappersEntry> {
    fn from(wrappers: ChatWrappers) -> Self {
        ChatCategory::ALL
            .into_iter()
            .zip(wrappers.types)
            .map(|(category, wrappers)| ChatWrappersEntry { category, wrappers })
            .collect()
    }
}

impl TryFrom<Vec<ChatWrappersEntry>> for ChatWrappers {
    type Error = String;

    fn try_from(entries: Vec<ChatWrappersEntry>) -> Result<Self, Self::Error> {
        let mut slots: [Option<CategoryWrappers>; CHAT_CATEGORY_COUNT] =
            std::array::from_fn(|_| None);
        for entry in entries {
            slots[entry.category.index()] = Some(entry.wrappers);
        }

        let mut types: [CategoryWrappers; CHAT_CATEGORY_COUNT] = Default::default();
        for category in ChatCategory::ALL {
            types[category.index()] = slots[category.index()]
                .take()
                .ok_or_else(|| format!("missing wrappers for chat category {category}"))?;
        }
        Ok(Self { types })
    }
}

/// Raw chat templates of one language, indexed by category, per locale tier.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChatFormatStrings {
    pub english: [String; CHAT_CATEGORY_COUNT],
    pub localized: [String; CHAT_CATEGORY_COUNT],
}

impl ChatFormatStrings {
    pub fn get(&self, tier: LocaleTier, category: ChatCategory) -> &str {
        &self.tier(tier)[category.index()]
    }

    pub fn set(&mut self, tier: LocaleTier, category: ChatCategory, value: impl Into<String>) {
        self.tier_mut(tier)[category.index()] = value.into();
    }

    /// The template the game ends up using: the override when one exists,
    /// otherwise the base value.
    pub fn effective(&self, category: ChatCategory) -> &str {
        let localized = self.get(LocaleTier::Localized, category);
        if localized.is_empty() {
            self.get(LocaleTier::English, category)
        } else {
            localized
        }
    }

    pub fn tier(&self, tier: LocaleTier) -> &[String; CHAT_CATEGORY_COUNT] {
        match tier {
            LocaleTier::English => &self.english,
            LocaleTier::Localized => &self.localized,
        }
    }

    pub fn tier_mut(&mut self, tier: LocaleTier) -> &mut [String; CHAT_CATEGORY_COUNT] {
        match tier {
            LocaleTier::English => &mut self.english,
            LocaleTier::Localized => &mut self.localized,
        }
    }
}

#[cfg(test)]
#[path = "tests/types_tests.rs"]
mod tests;
