use survey_types::{AnswerSet, AnswerValue, Question, QuestionKind, SurveyDefinition};

use crate::screen::{InputSurface, Progress, Screen};
use crate::results::summarize;

/// The coarse lifecycle state of a survey-taking session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// The survey has not started yet.
    Welcome,
    /// A question is being presented.
    InProgress,
    /// The summary is being presented; stable until restart.
    Results,
}

/// Error type for answer submission.
///
/// Navigation commands fail silently, but rejecting an answer needs a
/// reason the caller can surface next to the input.
#[derive(Debug, thiserror::Error)]
pub enum SubmitError {
    /// Answers can only be recorded while a question is presented.
    #[error("no survey in progress")]
    NotInProgress,

    /// The id does not belong to any question in the loaded definition.
    #[error("unknown question id: {0}")]
    UnknownQuestion(u32),

    /// The value's type does not match the question's kind.
    #[error("question {id} ({kind}) cannot take a {value} answer")]
    TypeMismatch {
        id: u32,
        kind: &'static str,
        value: &'static str,
    },

    /// A multiple-choice answer that is not one of the question's options.
    #[error("\"{value}\" is not an option of question {id}")]
    NotAnOption { id: u32, value: String },

    /// A rating outside `[1, scale]`.
    #[error("rating {value} is outside 1..={scale} for question {id}")]
    RatingOutOfRange { id: u32, value: u32, scale: u32 },
}

/// A single survey-taking session.
///
/// Owns the definition and all mutable state: the phase, the current
/// question index, and the recorded answers. There is no ambient state —
/// construct as many sessions as needed and they cannot interfere.
///
/// Each command returns the [`Screen`] the embedding UI should render
/// next. Illegal commands are no-ops returning the current screen.
#[derive(Debug, Clone)]
pub struct SurveySession {
    definition: SurveyDefinition,
    phase: Phase,
    current_index: usize,
    answers: AnswerSet,
}

impl SurveySession {
    /// Create a session for the given definition, in the Welcome phase.
    pub fn new(definition: SurveyDefinition) -> Self {
        Self {
            definition,
            phase: Phase::Welcome,
            current_index: 0,
            answers: AnswerSet::new(),
        }
    }

    /// The current phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// The loaded definition.
    pub fn definition(&self) -> &SurveyDefinition {
        &self.definition
    }

    /// The recorded answers so far.
    pub fn answers(&self) -> &AnswerSet {
        &self.answers
    }

    /// The current question index. Only meaningful while in progress.
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    /// Begin the survey: Welcome → InProgress at the first question.
    ///
    /// Clears any previously recorded answers. A no-op outside the
    /// Welcome phase, and on a definition with no questions (Welcome is
    /// stable in that case; there is nothing to present).
    pub fn start(&mut self) -> Screen {
        if self.phase == Phase::Welcome && !self.definition.is_empty() {
            tracing::debug!(questions = self.definition.len(), "survey started");
            self.phase = Phase::InProgress;
            self.current_index = 0;
            self.answers.clear();
        }
        self.current_screen()
    }

    /// Advance to the next question, or to Results from the last one.
    ///
    /// Gated: a no-op while the current question is required and
    /// unanswered (an empty text answer counts as unanswered).
    pub fn go_next(&mut self) -> Screen {
        if self.can_go_next() {
            if self.current_index + 1 == self.definition.len() {
                tracing::debug!("survey completed");
                self.phase = Phase::Results;
            } else {
                self.current_index += 1;
            }
        }
        self.current_screen()
    }

    /// Go back one question. Never gated; a no-op at the first question.
    pub fn go_previous(&mut self) -> Screen {
        if self.phase == Phase::InProgress && self.current_index > 0 {
            self.current_index -= 1;
        }
        self.current_screen()
    }

    /// Return to Welcome from Results, clearing all answers.
    ///
    /// The definition is kept; it is not reloaded. A no-op outside the
    /// Results phase.
    pub fn restart(&mut self) -> Screen {
        if self.phase == Phase::Results {
            tracing::debug!("survey restarted");
            self.phase = Phase::Welcome;
            self.current_index = 0;
            self.answers.clear();
        }
        self.current_screen()
    }

    /// Record an answer for a question.
    ///
    /// The value is validated against the owning question before anything
    /// is stored: a multiple-choice answer must be one of the options, a
    /// rating must be within `[1, scale]`, and the value type must match
    /// the question kind. An empty text value removes the recorded answer
    /// instead (empty string is equivalent to unanswered).
    pub fn submit_answer(
        &mut self,
        question_id: u32,
        value: impl Into<AnswerValue>,
    ) -> Result<Screen, SubmitError> {
        if self.phase != Phase::InProgress {
            return Err(SubmitError::NotInProgress);
        }
        let value = value.into();
        let question = self
            .definition
            .question_by_id(question_id)
            .ok_or(SubmitError::UnknownQuestion(question_id))?;

        match (&question.kind, &value) {
            (QuestionKind::MultipleChoice { options }, AnswerValue::Text(choice)) => {
                if !options.iter().any(|option| option == choice) {
                    return Err(SubmitError::NotAnOption {
                        id: question_id,
                        value: choice.clone(),
                    });
                }
                self.answers.record(question_id, value);
            }
            (QuestionKind::Rating { scale, .. }, AnswerValue::Rating(rating)) => {
                if *rating < 1 || *rating > *scale {
                    return Err(SubmitError::RatingOutOfRange {
                        id: question_id,
                        value: *rating,
                        scale: *scale,
                    });
                }
                self.answers.record(question_id, value);
            }
            (QuestionKind::Text { .. }, AnswerValue::Text(text)) => {
                if text.is_empty() {
                    self.answers.remove(question_id);
                } else {
                    self.answers.record(question_id, value);
                }
            }
            (kind, value) => {
                return Err(SubmitError::TypeMismatch {
                    id: question_id,
                    kind: kind.type_name(),
                    value: value.type_name(),
                });
            }
        }
        Ok(self.current_screen())
    }

    /// Whether forward navigation is currently permitted.
    ///
    /// Always permitted for optional questions; for required ones,
    /// permitted iff a non-empty answer is recorded.
    pub fn can_go_next(&self) -> bool {
        match self.phase {
            Phase::InProgress => {
                let question = self.current_question();
                !question.required || self.answers.is_answered(question.id)
            }
            Phase::Welcome | Phase::Results => false,
        }
    }

    /// Whether backward navigation is currently permitted.
    pub fn can_go_previous(&self) -> bool {
        self.phase == Phase::InProgress && self.current_index > 0
    }

    /// Describe what the embedding UI must render for the current state.
    pub fn current_screen(&self) -> Screen {
        match self.phase {
            Phase::Welcome => Screen::Welcome {
                question_count: self.definition.len(),
            },
            Phase::InProgress => {
                let question = self.current_question();
                Screen::Question {
                    question: question.clone(),
                    progress: Progress {
                        position: self.current_index + 1,
                        total: self.definition.len(),
                    },
                    surface: InputSurface::for_question(question, &self.answers),
                    can_go_previous: self.can_go_previous(),
                    can_go_next: self.can_go_next(),
                    is_last: self.current_index + 1 == self.definition.len(),
                }
            }
            Phase::Results => Screen::Results(summarize(&self.definition, &self.answers)),
        }
    }

    /// The question at the current index.
    ///
    /// Only called while InProgress, where `current_index` is always in
    /// bounds.
    fn current_question(&self) -> &Question {
        &self.definition.questions()[self.current_index]
    }
}
