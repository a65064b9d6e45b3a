use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::catalog::{Section, SECTION_COUNT, TOTAL_QUESTIONS};

/// Sparse map from global question index to the recorded yes/no answer.
///
/// Serializes as a JSON object keyed by the index, e.g. `{"0": true, "1": false}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnswerSet(BTreeMap<usize, bool>);

impl AnswerSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a set from answers listed in global order. Values past the
    /// last question are dropped.
    pub fn from_ordered(values: &[bool]) -> Self {
        Self(
            values
                .iter()
                .copied()
                .take(TOTAL_QUESTIONS)
                .enumerate()
                .collect(),
        )
    }

    /// Stores an answer. Returns `false` and leaves the set untouched when the
    /// index is outside the catalog.
    pub fn record(&mut self, global_index: usize, value: bool) -> bool {
        if global_index >= TOTAL_QUESTIONS {
            return false;
        }
        self.0.insert(global_index, value);
        true
    }

    pub fn get(&self, global_index: usize) -> Option<bool> {
        self.0.get(&global_index).copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    /// Count of `true` answers to catalog questions. Keys past the last
    /// question (possible after deserializing) are ignored.
    pub fn score(&self) -> u8 {
        let count = self
            .iter()
            .filter(|(index, value)| *index < TOTAL_QUESTIONS && *value)
            .count();
        u8::try_from(count).unwrap_or(u8::MAX)
    }

    pub fn section_score(&self, section_index: usize) -> u8 {
        let count = Section::index_range(section_index)
            .filter(|index| *index < TOTAL_QUESTIONS && self.get(*index) == Some(true))
            .count();
        u8::try_from(count).unwrap_or(u8::MAX)
    }

    pub fn is_section_complete(&self, section_index: usize) -> bool {
        section_index < SECTION_COUNT
            && Section::index_range(section_index).all(|index| self.0.contains_key(&index))
    }

    pub fn is_complete(&self) -> bool {
        (0..TOTAL_QUESTIONS).all(|index| self.0.contains_key(&index))
    }

    pub fn iter(&self) -> impl Iterator<Item = (usize, bool)> + '_ {
        self.0.iter().map(|(index, value)| (*index, *value))
    }
}
