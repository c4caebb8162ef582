use std::fmt;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Condition tag used to route a user to a detailed assessment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Condition {
    Depression,
    Anxiety,
    Ptsd,
    Bipolar,
    Ocd,
    EatingDisorder,
    Psychosis,
    SubstanceUse,
    SocialAnxiety,
}

impl Condition {
    pub fn as_str(self) -> &'static str {
        match self {
            Condition::Depression => "depression",
            Condition::Anxiety => "anxiety",
            Condition::Ptsd => "ptsd",
            Condition::Bipolar => "bipolar",
            Condition::Ocd => "ocd",
            Condition::EatingDisorder => "eating_disorder",
            Condition::Psychosis => "psychosis",
            Condition::SubstanceUse => "substance_use",
            Condition::SocialAnxiety => "social_anxiety",
        }
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Set of detected conditions. Keeps first-insertion order; callers
/// should not rely on it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct DetectedConditions(Vec<Condition>);

impl DetectedConditions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `false` if the condition was already present.
    pub fn insert(&mut self, condition: Condition) -> bool {
        if self.contains(condition) {
            return false;
        }
        self.0.push(condition);
        true
    }

    pub fn contains(&self, condition: Condition) -> bool {
        self.0.contains(&condition)
    }

    pub fn iter(&self) -> impl Iterator<Item = Condition> + '_ {
        self.0.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<Condition> for DetectedConditions {
    fn from_iter<T: IntoIterator<Item = Condition>>(iter: T) -> Self {
        let mut set = Self::new();
        for condition in iter {
            set.insert(condition);
        }
        set
    }
}
