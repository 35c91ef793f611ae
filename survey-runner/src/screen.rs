use survey_types::{AnswerSet, AnswerValue, Question, QuestionKind, ScaleLabels};

use crate::results::ResultsSummary;

/// What the embedding UI must render, one variant per phase.
///
/// The core owns no rendering technology; a binding (web, TUI, tests)
/// consumes these descriptions and translates user input back into
/// session commands.
#[derive(Debug, Clone, PartialEq)]
pub enum Screen {
    /// The landing screen, before the survey starts.
    Welcome {
        /// Number of questions the survey will present.
        question_count: usize,
    },

    /// One question, with its input surface and navigation affordances.
    Question {
        /// The question being presented.
        question: Question,
        /// 1-based position within the survey.
        progress: Progress,
        /// The type-specific input surface, with any prior answer restored.
        surface: InputSurface,
        /// Whether a "back" control should be active.
        can_go_previous: bool,
        /// Whether the forward control should be active.
        can_go_next: bool,
        /// Whether the forward control should carry the "complete"
        /// affordance instead of "next". Gating is unaffected.
        is_last: bool,
    },

    /// The results summary; stable until restart.
    Results(ResultsSummary),
}

/// 1-based progress through the survey.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Progress {
    /// Current position, starting at 1.
    pub position: usize,
    /// Total number of questions.
    pub total: usize,
}

/// The interactive input surface for one question.
///
/// Built from the question and the current answers, so that revisiting a
/// question reproduces exactly what was recorded before: the selected
/// option highlighted, the rating value highlighted, the text populated.
#[derive(Debug, Clone, PartialEq)]
pub enum InputSurface {
    /// Discrete single-select controls, one per option, in list order.
    OptionList {
        options: Vec<String>,
        /// Index into `options` of the recorded answer, if any.
        selected: Option<usize>,
    },

    /// Discrete controls labeled `1..=scale`, with optional end labels.
    RatingScale {
        scale: u32,
        labels: Option<ScaleLabels>,
        /// The recorded rating, if any.
        selected: Option<u32>,
    },

    /// A multi-line free-text input. Every input event should be fed back
    /// through `submit_answer` so gating stays live.
    TextArea {
        placeholder: Option<String>,
        /// The recorded text, or empty if unanswered.
        content: String,
    },
}

impl InputSurface {
    /// Build the input surface for a question, restoring any prior answer.
    pub fn for_question(question: &Question, answers: &AnswerSet) -> Self {
        let answer = answers.get(question.id);
        match &question.kind {
            QuestionKind::MultipleChoice { options } => Self::OptionList {
                options: options.clone(),
                selected: answer
                    .and_then(AnswerValue::as_str)
                    .and_then(|choice| options.iter().position(|option| option == choice)),
            },
            QuestionKind::Rating { scale, labels } => Self::RatingScale {
                scale: *scale,
                labels: labels.clone(),
                selected: answer.and_then(AnswerValue::as_rating),
            },
            QuestionKind::Text { placeholder } => Self::TextArea {
                placeholder: placeholder.clone(),
                content: answer
                    .and_then(AnswerValue::as_str)
                    .unwrap_or_default()
                    .to_string(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn option_list_restores_selection_by_index() {
        let question = Question::new(
            1,
            "Pick",
            QuestionKind::MultipleChoice {
                options: vec!["A".to_string(), "B".to_string()],
            },
        );
        let mut answers = AnswerSet::new();
        answers.record(1, "B");

        let surface = InputSurface::for_question(&question, &answers);
        assert_eq!(
            surface,
            InputSurface::OptionList {
                options: vec!["A".to_string(), "B".to_string()],
                selected: Some(1),
            }
        );
    }

    #[test]
    fn rating_scale_restores_value() {
        let question = Question::new(
            2,
            "Rate",
            QuestionKind::Rating {
                scale: 5,
                labels: Some(ScaleLabels::new("Low", "High")),
            },
        );
        let mut answers = AnswerSet::new();
        answers.record(2, 4u32);

        match InputSurface::for_question(&question, &answers) {
            InputSurface::RatingScale {
                scale,
                labels,
                selected,
            } => {
                assert_eq!(scale, 5);
                assert_eq!(labels.unwrap().high, "High");
                assert_eq!(selected, Some(4));
            }
            other => panic!("expected rating scale, got {other:?}"),
        }
    }

    #[test]
    fn text_area_is_empty_when_unanswered() {
        let question = Question::new(
            3,
            "Comments",
            QuestionKind::Text {
                placeholder: Some("Type here".to_string()),
            },
        );
        let surface = InputSurface::for_question(&question, &AnswerSet::new());
        assert_eq!(
            surface,
            InputSurface::TextArea {
                placeholder: Some("Type here".to_string()),
                content: String::new(),
            }
        );
    }
}
