//! Core types for the survey runner.
//!
//! This crate provides the foundational types for survey-taking sessions:
//! - `SurveyDefinition` - The top-level survey structure
//! - `Question` and `QuestionKind` - Individual questions and their types
//! - `AnswerSet` and `AnswerValue` - Recorded answers keyed by question id
//!
//! Everything here is presentation-agnostic; the `survey-runner` crate owns
//! the session state machine that mutates an `AnswerSet`, and any UI binding
//! renders the screens it produces.

mod answer;
pub use answer::{AnswerSet, AnswerValue};

mod question;
pub use question::{Question, QuestionKind, ScaleLabels};

mod definition;
pub use definition::SurveyDefinition;

mod error;
pub use error::DefinitionError;
