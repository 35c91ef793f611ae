/// Structural problems in a survey definition.
///
/// These are checked once at load time; a definition that passes
/// `SurveyDefinition::validate` upholds every invariant the session
/// relies on afterwards.
#[derive(Debug, thiserror::Error)]
pub enum DefinitionError {
    /// Two questions share the same id.
    #[error("duplicate question id: {0}")]
    DuplicateId(u32),

    /// A question has an empty or whitespace-only title.
    #[error("question {0} has an empty title")]
    EmptyTitle(u32),

    /// A multiple-choice question has no options to choose from.
    #[error("multiple-choice question {0} has no options")]
    NoOptions(u32),

    /// A rating question has a scale of zero.
    #[error("rating question {0} has a zero scale")]
    ZeroScale(u32),
}
