use survey_types::{DefinitionError, SurveyDefinition};

/// Error type for definition loading.
///
/// Fatal for the session: the caller presents an error state and proceeds
/// no further. There is no retry; the user reloads.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// The source responded with a non-success status.
    #[error("definition source returned status {status}")]
    Http { status: u16 },

    /// The request itself failed (connection, timeout, bad URL).
    #[error("definition fetch failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The body was not a valid `{ "questions": [...] }` document.
    #[error("definition parse failed: {0}")]
    Parse(#[from] serde_json::Error),

    /// The document parsed but violates a structural invariant.
    #[error("invalid definition: {0}")]
    Invalid(#[from] DefinitionError),
}

/// Parse and validate a survey definition from a JSON document.
pub fn parse_definition(body: &str) -> Result<SurveyDefinition, LoadError> {
    let definition: SurveyDefinition = serde_json::from_str(body)?;
    definition.validate()?;
    Ok(definition)
}

/// Fetch a survey definition with a single GET request.
///
/// Awaited once at startup by the embedder; everything after load is
/// synchronous.
pub async fn fetch_definition(
    client: &reqwest::Client,
    url: &str,
) -> Result<SurveyDefinition, LoadError> {
    let response = client.get(url).send().await?;
    let status = response.status();
    if !status.is_success() {
        tracing::warn!(%url, status = status.as_u16(), "definition fetch rejected");
        return Err(LoadError::Http {
            status: status.as_u16(),
        });
    }
    let body = response.text().await?;
    parse_definition(&body)
}
