//! Anonymization labels for blind peer ranking
//!
//! Stage-1 responses are shown to the ranking models under single-letter
//! pseudonyms ("Response A", "Response B", ...) so no model knows which
//! peer wrote what. The label alphabet is A..Z; rosters larger than 26 are
//! rejected at configuration time.

use crate::core::model::Model;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A single anonymization label, `A`..`Z`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ResponseLabel(char);

impl ResponseLabel {
    /// Label for the given zero-based position, or None past `Z`
    pub fn from_index(index: usize) -> Option<Self> {
        if index < 26 {
            Some(Self((b'A' + index as u8) as char))
        } else {
            None
        }
    }

    /// Parse a single letter `A`..`Z`
    pub fn from_letter(letter: char) -> Option<Self> {
        letter.is_ascii_uppercase().then_some(Self(letter))
    }

    /// The bare letter
    pub fn letter(&self) -> char {
        self.0
    }
}

impl std::fmt::Display for ResponseLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Response {}", self.0)
    }
}

impl Serialize for ResponseLabel {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for ResponseLabel {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        let letter = s
            .strip_prefix("Response ")
            .and_then(|rest| rest.chars().next())
            .or_else(|| s.chars().next());
        letter
            .and_then(ResponseLabel::from_letter)
            .ok_or_else(|| serde::de::Error::custom(format!("invalid response label: {s}")))
    }
}

/// Per-invocation bijection between labels and council members
///
/// Labels are assigned `A..` in the order the stage-1 results arrive from
/// the collector (declaration order with failed members absent). The map is
/// never persisted across turns.
#[derive(Debug, Clone, Default)]
pub struct LabelMap {
    entries: Vec<(ResponseLabel, Model)>,
}

impl LabelMap {
    /// Assign labels to models in the given order.
    ///
    /// # Panics
    /// Panics past 26 models; rosters are validated before any labeling.
    pub fn assign(models: impl IntoIterator<Item = Model>) -> Self {
        let entries = models
            .into_iter()
            .enumerate()
            .map(|(i, model)| {
                let label = ResponseLabel::from_index(i)
                    .expect("council roster exceeds the label alphabet");
                (label, model)
            })
            .collect();
        Self { entries }
    }

    /// Look up the model behind a label
    pub fn model_for(&self, label: ResponseLabel) -> Option<&Model> {
        self.entries
            .iter()
            .find(|(l, _)| *l == label)
            .map(|(_, m)| m)
    }

    /// Iterate `(label, model)` pairs in assignment order
    pub fn iter(&self) -> impl Iterator<Item = (ResponseLabel, &Model)> {
        self.entries.iter().map(|(l, m)| (*l, m))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Serialize for LabelMap {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        use serde::ser::SerializeMap;
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (label, model) in &self.entries {
            map.serialize_entry(&label.to_string(), model.as_str())?;
        }
        map.end()
    }
}
