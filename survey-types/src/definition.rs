use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::{DefinitionError, Question, QuestionKind};

/// The top-level structure containing all questions for a survey.
///
/// Question order is significant: it is the presentation order and is
/// preserved exactly from the source document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SurveyDefinition {
    /// All questions in the survey, in presentation order.
    pub questions: Vec<Question>,
}

impl SurveyDefinition {
    /// Create a new survey definition with the given questions.
    pub fn new(questions: Vec<Question>) -> Self {
        Self { questions }
    }

    /// Create an empty survey definition.
    pub fn empty() -> Self {
        Self {
            questions: Vec::new(),
        }
    }

    /// Get the questions.
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    /// Get the question at the given presentation index.
    pub fn question_at(&self, index: usize) -> Option<&Question> {
        self.questions.get(index)
    }

    /// Find a question by its id.
    pub fn question_by_id(&self, id: u32) -> Option<&Question> {
        self.questions.iter().find(|q| q.id == id)
    }

    /// Check if the survey has any questions.
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// Get the number of questions.
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    /// Check the structural invariants of the definition.
    ///
    /// Parsing alone cannot catch duplicate ids, empty titles, an empty
    /// option list, or a zero scale; this does.
    pub fn validate(&self) -> Result<(), DefinitionError> {
        let mut seen = HashSet::new();
        for question in &self.questions {
            if !seen.insert(question.id) {
                return Err(DefinitionError::DuplicateId(question.id));
            }
            if question.title.trim().is_empty() {
                return Err(DefinitionError::EmptyTitle(question.id));
            }
            match &question.kind {
                QuestionKind::MultipleChoice { options } => {
                    if options.is_empty() {
                        return Err(DefinitionError::NoOptions(question.id));
                    }
                }
                QuestionKind::Rating { scale, .. } => {
                    if *scale == 0 {
                        return Err(DefinitionError::ZeroScale(question.id));
                    }
                }
                QuestionKind::Text { .. } => {}
            }
        }
        Ok(())
    }
}

impl Default for SurveyDefinition {
    fn default() -> Self {
        Self::empty()
    }
}
