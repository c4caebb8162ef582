use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;

/// Highest value a Likert-style scale question accepts.
pub const SCALE_MAX: i64 = 4;

/// A single answer as submitted by the client.
///
/// Values that are neither a boolean nor an integer are kept as
/// `Unrecognized` so validation can report them; every read accessor
/// treats them as a negative answer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(untagged)]
#[ts(export)]
pub enum AnswerValue {
    Bool(bool),
    Scale(i64),
    Unrecognized(serde_json::Value),
}

impl AnswerValue {
    /// Classify one raw JSON value. Never fails: anything that is not a
    /// boolean or an `i64` becomes `Unrecognized`.
    pub fn from_json(value: &serde_json::Value) -> Self {
        match value {
            serde_json::Value::Bool(b) => AnswerValue::Bool(*b),
            serde_json::Value::Number(n) => match n.as_i64() {
                Some(n) => AnswerValue::Scale(n),
                None => AnswerValue::Unrecognized(value.clone()),
            },
            other => AnswerValue::Unrecognized(other.clone()),
        }
    }

    /// `true` for a yes answer or a scale value in `1..=SCALE_MAX`.
    /// Out-of-range integers read as "no", the same way [`Self::score`]
    /// reads them as 0.
    pub fn is_affirmative(&self) -> bool {
        match self {
            AnswerValue::Bool(b) => *b,
            AnswerValue::Scale(n) => (1..=SCALE_MAX).contains(n),
            AnswerValue::Unrecognized(_) => false,
        }
    }

    /// Scale value in `0..=SCALE_MAX`. Anything else reads as 0.
    pub fn score(&self) -> u8 {
        match self {
            AnswerValue::Scale(n) if (0..=SCALE_MAX).contains(n) => *n as u8,
            _ => 0,
        }
    }
}

/// Question id → answer for one screening submission.
///
/// Missing questions read as negative and unknown keys are ignored by the
/// evaluator. Only a non-object payload is rejected.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ScreeningAnswers(BTreeMap<String, AnswerValue>);

impl ScreeningAnswers {
    pub fn new() -> Self {
        Self::default()
    }

    /// Convert raw JSON, failing fast when it is not an object.
    pub fn from_value(value: &serde_json::Value) -> Result<Self, CoreError> {
        let obj = value.as_object().ok_or_else(|| {
            CoreError::InvalidInput(format!(
                "screening answers must be a JSON object, got {}",
                json_kind(value)
            ))
        })?;

        let answers = obj
            .iter()
            .map(|(question_id, raw)| (question_id.clone(), AnswerValue::from_json(raw)))
            .collect();
        Ok(Self(answers))
    }

    pub fn with(mut self, question_id: impl Into<String>, value: AnswerValue) -> Self {
        self.insert(question_id, value);
        self
    }

    pub fn insert(&mut self, question_id: impl Into<String>, value: AnswerValue) {
        self.0.insert(question_id.into(), value);
    }

    pub fn get(&self, question_id: &str) -> Option<&AnswerValue> {
        self.0.get(question_id)
    }

    /// Absent answers count as "no".
    pub fn is_affirmative(&self, question_id: &str) -> bool {
        self.get(question_id).is_some_and(AnswerValue::is_affirmative)
    }

    /// Absent answers count as 0.
    pub fn score(&self, question_id: &str) -> u8 {
        self.get(question_id).map_or(0, AnswerValue::score)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &AnswerValue)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: Into<String>> FromIterator<(K, AnswerValue)> for ScreeningAnswers {
    fn from_iter<T: IntoIterator<Item = (K, AnswerValue)>>(iter: T) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }
}

fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "an array",
        serde_json::Value::Object(_) => "an object",
    }
}
