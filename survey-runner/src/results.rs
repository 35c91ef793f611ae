use survey_types::{AnswerSet, AnswerValue, QuestionKind, SurveyDefinition};

/// The aggregated outcome of a completed survey.
///
/// `NoResponses` is a distinct condition, not an empty list, so a
/// presentation layer can show a "no responses" message instead of a
/// blank section.
#[derive(Debug, Clone, PartialEq)]
pub enum ResultsSummary {
    /// Not a single question was answered.
    NoResponses,

    /// At least one question was answered, in question order.
    Answered(Vec<ResultEntry>),
}

/// One answered question in the results summary.
#[derive(Debug, Clone, PartialEq)]
pub struct ResultEntry {
    /// The question's title.
    pub title: String,

    /// The formatted answer: ratings as `"<value> out of <scale>"`,
    /// everything else as the raw string.
    pub answer: String,
}

/// Walk the questions in order and collect (title, formatted answer)
/// pairs, omitting questions whose answer is absent or an empty string.
pub fn summarize(definition: &SurveyDefinition, answers: &AnswerSet) -> ResultsSummary {
    let entries: Vec<ResultEntry> = definition
        .questions()
        .iter()
        .filter_map(|question| {
            let answer = answers.get(question.id).filter(|value| !value.is_empty())?;
            let formatted = match (&question.kind, answer) {
                (QuestionKind::Rating { scale, .. }, AnswerValue::Rating(value)) => {
                    format!("{value} out of {scale}")
                }
                (_, AnswerValue::Text(text)) => text.clone(),
                // A rating recorded against a non-rating question cannot
                // happen through the session; fall back to the bare value.
                (_, AnswerValue::Rating(value)) => value.to_string(),
            };
            Some(ResultEntry {
                title: question.title.clone(),
                answer: formatted,
            })
        })
        .collect();

    if entries.is_empty() {
        ResultsSummary::NoResponses
    } else {
        ResultsSummary::Answered(entries)
    }
}
