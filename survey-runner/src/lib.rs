//! # survey-runner
//!
//! Headless survey-taking core. Owns the session lifecycle
//! (Welcome → InProgress → Results), records answers, enforces
//! required-field gating, and describes what to render — it never renders
//! anything itself.
//!
//! ## Usage
//!
//! ```rust
//! use survey_runner::{Screen, SurveySession};
//! use survey_types::{Question, QuestionKind, SurveyDefinition};
//!
//! let definition = SurveyDefinition::new(vec![Question::new(
//!     1,
//!     "How did you hear about us?",
//!     QuestionKind::Text { placeholder: None },
//! )]);
//!
//! let mut session = SurveySession::new(definition);
//! session.start();
//! session.submit_answer(1, "A friend").unwrap();
//! let screen = session.go_next();
//! assert!(matches!(screen, Screen::Results(_)));
//! ```
//!
//! Every command returns the next [`Screen`] to render; illegal commands
//! (going back from the first question, starting an empty survey) are
//! no-ops that return the current screen unchanged.

mod session;
pub use session::{Phase, SubmitError, SurveySession};

mod screen;
pub use screen::{InputSurface, Progress, Screen};

mod results;
pub use results::{ResultEntry, ResultsSummary, summarize};

mod loader;
pub use loader::{LoadError, fetch_definition, parse_definition};
