use serde::{Deserialize, Serialize};

/// A single question in a survey.
///
/// On the wire a question is flat — the `type` field discriminates the kind
/// and the kind-specific fields sit next to the common ones:
///
/// ```json
/// { "id": 1, "type": "rating", "title": "How was it?", "scale": 5 }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Question {
    /// Unique identifier within the survey.
    pub id: u32,

    /// The prompt text shown to the user.
    pub title: String,

    /// Optional supporting text shown below the title.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Whether an answer is required before forward navigation.
    #[serde(default)]
    pub required: bool,

    /// The kind of question (determines input type and answer value).
    #[serde(flatten)]
    pub kind: QuestionKind,
}

impl Question {
    /// Create a new question with the given id, title, and kind.
    pub fn new(id: u32, title: impl Into<String>, kind: QuestionKind) -> Self {
        Self {
            id,
            title: title.into(),
            description: None,
            required: false,
            kind,
        }
    }

    /// Set the description text.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Mark this question as required.
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }
}

/// The kind of question, determining the input surface and answer type.
///
/// An unknown `type` tag fails deserialization outright; a question that
/// cannot be matched here can never reach a renderer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum QuestionKind {
    /// Single-select from a fixed list of options.
    MultipleChoice {
        /// The selectable options, in presentation order. Must be non-empty.
        options: Vec<String>,
    },

    /// Pick one value on a 1..=scale rating scale.
    Rating {
        /// The upper end of the scale. Must be positive.
        scale: u32,

        /// Optional labels for the two ends of the scale.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        labels: Option<ScaleLabels>,
    },

    /// Multi-line free text.
    Text {
        /// Optional placeholder shown while the input is empty.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        placeholder: Option<String>,
    },
}

impl QuestionKind {
    /// Get the kind name as it appears in the wire `type` tag.
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::MultipleChoice { .. } => "multiple-choice",
            Self::Rating { .. } => "rating",
            Self::Text { .. } => "text",
        }
    }
}

/// Labels for the low and high ends of a rating scale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScaleLabels {
    /// Label adjacent to the `1` end.
    pub low: String,

    /// Label adjacent to the `scale` end.
    pub high: String,
}

impl ScaleLabels {
    /// Create labels for the two ends of a scale.
    pub fn new(low: impl Into<String>, high: impl Into<String>) -> Self {
        Self {
            low: low.into(),
            high: high.into(),
        }
    }
}
