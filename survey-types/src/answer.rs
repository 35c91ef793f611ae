use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// A single recorded answer.
///
/// The variant must match the owning question's kind; the session enforces
/// this at its single mutation point.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AnswerValue {
    /// A selected option's literal string, or free text.
    Text(String),

    /// A rating in `[1, scale]`.
    Rating(u32),
}

impl AnswerValue {
    /// Try to get this value as a string reference.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            Self::Rating(_) => None,
        }
    }

    /// Try to get this value as a rating.
    pub fn as_rating(&self) -> Option<u32> {
        match self {
            Self::Rating(value) => Some(*value),
            Self::Text(_) => None,
        }
    }

    /// Whether this value counts as unanswered for gating purposes.
    ///
    /// An empty string is equivalent to no answer at all.
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Text(s) => s.is_empty(),
            Self::Rating(_) => false,
        }
    }

    /// Get the type name of this value for error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Text(_) => "Text",
            Self::Rating(_) => "Rating",
        }
    }
}

impl From<String> for AnswerValue {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<&str> for AnswerValue {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<u32> for AnswerValue {
    fn from(value: u32) -> Self {
        Self::Rating(value)
    }
}

/// Recorded answers, keyed by question id.
///
/// Absence of a key means "unanswered". The set never outlives the survey
/// session that owns it; it is cleared on start and restart.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AnswerSet {
    values: HashMap<u32, AnswerValue>,
}

impl AnswerSet {
    /// Create a new empty answer set.
    pub fn new() -> Self {
        Self {
            values: HashMap::new(),
        }
    }

    /// Record an answer for a question, replacing any previous one.
    pub fn record(&mut self, question_id: u32, value: impl Into<AnswerValue>) {
        self.values.insert(question_id, value.into());
    }

    /// Get the answer for a question, if any.
    pub fn get(&self, question_id: u32) -> Option<&AnswerValue> {
        self.values.get(&question_id)
    }

    /// Remove the answer for a question.
    pub fn remove(&mut self, question_id: u32) -> Option<AnswerValue> {
        self.values.remove(&question_id)
    }

    /// Remove all answers.
    pub fn clear(&mut self) {
        self.values.clear();
    }

    /// Get the number of recorded answers.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Check if there are no recorded answers.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Check if a question has a non-empty answer.
    ///
    /// Returns `false` if the answer is missing OR if it is an empty string,
    /// so required-field gating treats both cases the same way.
    pub fn is_answered(&self, question_id: u32) -> bool {
        match self.values.get(&question_id) {
            Some(value) => !value.is_empty(),
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_and_get() {
        let mut answers = AnswerSet::new();
        answers.record(1, "B");
        answers.record(2, 4u32);

        assert_eq!(answers.get(1).and_then(AnswerValue::as_str), Some("B"));
        assert_eq!(answers.get(2).and_then(AnswerValue::as_rating), Some(4));
        assert_eq!(answers.len(), 2);
    }

    #[test]
    fn empty_string_counts_as_unanswered() {
        let mut answers = AnswerSet::new();
        answers.record(1, "");

        assert!(!answers.is_answered(1));
        assert!(answers.get(1).is_some());
    }

    #[test]
    fn missing_key_is_unanswered() {
        let answers = AnswerSet::new();
        assert!(!answers.is_answered(42));
    }

    #[test]
    fn rating_is_always_answered() {
        let mut answers = AnswerSet::new();
        answers.record(3, 1u32);
        assert!(answers.is_answered(3));
    }
}
