//! Random wrapper generation with run-wide uniqueness.

use rand::Rng;
use std::collections::HashSet;
use std::fmt::Write as _;

use super::alphabet::INVISIBLE_CHARS;
use super::lengths::ChatFmtStrLengths;
use super::types::{
    CategoryWrappers, ChatCategory, ChatWrappers, WrapperPair, WrapperSequence, WrapperSlot,
    CHAT_CATEGORY_COUNT,
};
use crate::types::errors::{GenerateError, GenerateResult};

/// Characters per wrapper. 5^3 = 125 candidates for the 42 slots of a run.
pub const WRAPPER_LENGTH: usize = 3;

/// Draws per slot before the run is aborted.
pub const MAX_GENERATION_ATTEMPTS: usize = 1000;

/// Sequences a full run must issue: six slots for every category.
pub const MIN_PERMUTATIONS: usize = CHAT_CATEGORY_COUNT * WrapperSlot::ALL.len();

/// Draw `length` characters uniformly from the alphabet.
pub fn generate_sequence<R: Rng>(rng: &mut R, length: usize) -> WrapperSequence {
    let mut sequence = WrapperSequence::default();
    while sequence.len() < length {
        let entry = &INVISIBLE_CHARS[rng.gen_range(0..INVISIBLE_CHARS.len())];
        sequence.push(entry);
    }
    sequence
}

/// Draw sequences until one is not yet in `issued`, then record and return it.
///
/// Gives up with [`GenerateError::WrapperSpaceExhausted`] after
/// [`MAX_GENERATION_ATTEMPTS`] collisions.
pub fn generate_unique_sequence<R: Rng>(
    rng: &mut R,
    length: usize,
    issued: &mut HashSet<WrapperSequence>,
) -> GenerateResult<WrapperSequence> {
    for _ in 0..MAX_GENERATION_ATTEMPTS {
        let candidate = generate_sequence(rng, length);
        if issued.insert(candidate.clone()) {
            return Ok(candidate);
        }
    }

    Err(GenerateError::WrapperSpaceExhausted {
        length,
        attempts: MAX_GENERATION_ATTEMPTS,
        issued: issued.len(),
    })
}

/// Number of distinct sequences of `length` characters, saturating at `usize::MAX`.
pub fn sequence_space(length: usize) -> usize {
    u32::try_from(length)
        .ok()
        .and_then(|exp| INVISIBLE_CHARS.len().checked_pow(exp))
        .unwrap_or(usize::MAX)
}

/// Generate all wrappers of a run from a single randomness source.
///
/// Every sequence is unique across categories and slots.
pub fn generate_chat_wrappers<R: Rng>(
    rng: &mut R,
    lengths: &ChatFmtStrLengths,
) -> GenerateResult<ChatWrappers> {
    let mut issued: HashSet<WrapperSequence> = HashSet::with_capacity(MIN_PERMUTATIONS);
    let mut types: [CategoryWrappers; CHAT_CATEGORY_COUNT] = Default::default();

    for category in ChatCategory::ALL {
        let length = lengths.get(category).max_wrapper_length();
        let available = sequence_space(length);
        if available < MIN_PERMUTATIONS {
            return Err(GenerateError::WrapperSpaceTooSmall {
                length,
                available,
                required: MIN_PERMUTATIONS,
            });
        }

        let wrappers = &mut types[category.index()];
        for slot in WrapperSlot::ALL {
            *wrappers.get_mut(slot) = generate_unique_sequence(rng, length, &mut issued)?;
        }
    }

    Ok(ChatWrappers::new(types))
}

/// Human-readable dump of all wrappers, each code unit as `\xXXXX`.
pub fn describe_wrappers(wrappers: &ChatWrappers) -> String {
    let mut out = String::from("Generated chat message wrappers:");
    for category in ChatCategory::ALL {
        let category_wrappers = wrappers.get(category);
        let _ = write!(out, "\n\t{category}:");
        describe_pair(&mut out, "Full", &category_wrappers.full);
        describe_pair(&mut out, "Name", &category_wrappers.name);
        describe_pair(&mut out, "Message", &category_wrappers.message);
    }
    out
}

fn describe_pair(out: &mut String, label: &str, pair: &WrapperPair) {
    let _ = write!(out, "\n\t\t{label}:");
    let _ = write!(out, "\n\t\t\tbegin: {}", describe_sequence(&pair.start));
    let _ = write!(out, "\n\t\t\tend:   {}", describe_sequence(&pair.end));
}

fn describe_sequence(sequence: &WrapperSequence) -> String {
    sequence
        .wide()
        .iter()
        .map(|unit| format!("\\x{unit:04X}"))
        .collect()
}

#[cfg(test)]
#[path = "tests/generator_tests.rs"]
mod tests;
