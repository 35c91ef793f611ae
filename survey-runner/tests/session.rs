//! End-to-end session tests: navigation gating, answer restoration,
//! and results aggregation across a full survey run.

use survey_runner::{
    InputSurface, Phase, ResultEntry, ResultsSummary, Screen, SurveySession,
};
use survey_types::{Question, QuestionKind, SurveyDefinition};

fn three_question_survey() -> SurveyDefinition {
    SurveyDefinition::new(vec![
        Question::new(
            1,
            "Which plan do you use?",
            QuestionKind::MultipleChoice {
                options: vec!["A".to_string(), "B".to_string()],
            },
        )
        .required(),
        Question::new(
            2,
            "How satisfied are you?",
            QuestionKind::Rating {
                scale: 5,
                labels: None,
            },
        ),
        Question::new(
            3,
            "Anything to add?",
            QuestionKind::Text { placeholder: None },
        ),
    ])
}

#[test]
fn required_question_gates_forward_navigation() {
    let mut session = SurveySession::new(three_question_survey());
    session.start();

    // Required and unanswered: go_next is a no-op.
    session.go_next();
    assert_eq!(session.phase(), Phase::InProgress);
    assert_eq!(session.current_index(), 0);

    // Any valid answer unlocks the very next go_next.
    session.submit_answer(1, "B").unwrap();
    session.go_next();
    assert_eq!(session.current_index(), 1);
}

#[test]
fn optional_questions_never_gate() {
    let mut session = SurveySession::new(three_question_survey());
    session.start();
    session.submit_answer(1, "A").unwrap();
    session.go_next();

    // Question 2 is optional and unanswered; forward is still allowed.
    session.go_next();
    assert_eq!(session.current_index(), 2);
}

#[test]
fn go_previous_at_first_question_is_idempotent() {
    let mut session = SurveySession::new(three_question_survey());
    session.start();

    let before = session.current_screen();
    let after = session.go_previous();
    assert_eq!(before, after);
    assert_eq!(session.current_index(), 0);
}

#[test]
fn navigating_back_restores_the_recorded_answer() {
    let mut session = SurveySession::new(three_question_survey());
    session.start();
    session.submit_answer(1, "B").unwrap();
    session.go_next();
    session.submit_answer(2, 4u32).unwrap();

    // Retreat to question 1: the selection must be highlighted again.
    let screen = session.go_previous();
    match screen {
        Screen::Question { surface, .. } => {
            assert_eq!(
                surface,
                InputSurface::OptionList {
                    options: vec!["A".to_string(), "B".to_string()],
                    selected: Some(1),
                }
            );
        }
        other => panic!("expected a question screen, got {other:?}"),
    }

    // Forward again: the rating is restored too.
    match session.go_next() {
        Screen::Question { surface, .. } => match surface {
            InputSurface::RatingScale { selected, .. } => assert_eq!(selected, Some(4)),
            other => panic!("expected a rating surface, got {other:?}"),
        },
        other => panic!("expected a question screen, got {other:?}"),
    }
}

#[test]
fn last_question_carries_the_complete_affordance() {
    let mut session = SurveySession::new(three_question_survey());
    session.start();
    session.submit_answer(1, "A").unwrap();
    session.go_next();
    let screen = session.go_next();

    match screen {
        Screen::Question {
            is_last,
            can_go_next,
            progress,
            ..
        } => {
            assert!(is_last);
            assert!(can_go_next);
            assert_eq!(progress.position, 3);
            assert_eq!(progress.total, 3);
        }
        other => panic!("expected a question screen, got {other:?}"),
    }
}

#[test]
fn skipped_questions_are_omitted_from_results() {
    let mut session = SurveySession::new(three_question_survey());
    session.start();
    session.submit_answer(1, "B").unwrap();
    session.go_next();
    session.go_next();
    let screen = session.go_next();

    assert_eq!(
        screen,
        Screen::Results(ResultsSummary::Answered(vec![ResultEntry {
            title: "Which plan do you use?".to_string(),
            answer: "B".to_string(),
        }]))
    );
}

#[test]
fn rating_answers_are_formatted_in_results() {
    let mut session = SurveySession::new(three_question_survey());
    session.start();
    session.submit_answer(1, "B").unwrap();
    session.go_next();
    session.submit_answer(2, 4u32).unwrap();
    session.go_next();
    let screen = session.go_next();

    match screen {
        Screen::Results(ResultsSummary::Answered(entries)) => {
            assert_eq!(entries.len(), 2);
            assert_eq!(entries[1].title, "How satisfied are you?");
            assert_eq!(entries[1].answer, "4 out of 5");
        }
        other => panic!("expected answered results, got {other:?}"),
    }
}

#[test]
fn empty_text_answer_is_omitted_from_results() {
    let mut session = SurveySession::new(three_question_survey());
    session.start();
    session.submit_answer(1, "A").unwrap();
    session.go_next();
    session.go_next();
    session.submit_answer(3, "typed then erased").unwrap();
    session.submit_answer(3, "").unwrap();
    let screen = session.go_next();

    match screen {
        Screen::Results(ResultsSummary::Answered(entries)) => {
            assert_eq!(entries.len(), 1);
            assert_eq!(entries[0].answer, "A");
        }
        other => panic!("expected answered results, got {other:?}"),
    }
}

#[test]
fn fully_skipped_survey_reports_no_responses() {
    let survey = SurveyDefinition::new(vec![Question::new(
        1,
        "Optional only",
        QuestionKind::Text { placeholder: None },
    )]);
    let mut session = SurveySession::new(survey);
    session.start();
    let screen = session.go_next();

    assert_eq!(screen, Screen::Results(ResultsSummary::NoResponses));
}

#[test]
fn restart_returns_to_welcome_without_reloading() {
    let mut session = SurveySession::new(three_question_survey());
    session.start();
    session.submit_answer(1, "A").unwrap();
    session.go_next();
    session.go_next();
    session.go_next();
    assert_eq!(session.phase(), Phase::Results);

    let screen = session.restart();
    assert_eq!(screen, Screen::Welcome { question_count: 3 });
    assert!(session.answers().is_empty());
    assert_eq!(session.definition().len(), 3);
}

#[test]
fn sessions_do_not_interfere() {
    let mut first = SurveySession::new(three_question_survey());
    let mut second = SurveySession::new(three_question_survey());
    first.start();
    second.start();
    first.submit_answer(1, "A").unwrap();

    assert!(first.answers().is_answered(1));
    assert!(second.answers().is_empty());
}
