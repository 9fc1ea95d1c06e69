//! Chat wrapper pipeline: invisible marker generation and chat-format rewriting.
//!
//! The game formats every chat line from a localized template such as
//! `"\x03(TEAM) %s1 :  %s2"`. This module rewrites those templates so that the
//! full line, the sender name and the message body are each bracketed by a
//! unique run of zero-width characters. A log reader can then split any chat
//! line unambiguously, no matter what the player put in their name.
//!
//! Pipeline: discover localization files → parse chat templates (per language,
//! in parallel) → merge length budgets → generate wrappers once → rewrite and
//! write one translation file per language (in parallel).

pub mod alphabet;
pub mod discovery;
pub mod generator;
pub mod languages;
pub mod lengths;
pub mod orchestrator;
pub mod template;
pub mod transform;
pub mod translations;
pub mod types;

pub use orchestrator::{randomize_chat_wrappers, GenerationReport};
pub use types::{
    CategoryWrappers, ChatCategory, ChatFormatStrings, ChatWrappers, LocaleTier, WrapperPair,
    WrapperSequence,
};
