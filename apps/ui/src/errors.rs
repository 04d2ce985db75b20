use thiserror::Error;

/// Everything that can go wrong between pressing submit and holding a parsed
/// JSON response. Backend non-2xx statuses are deliberately NOT an error:
/// their bodies are parsed and displayed exactly like success bodies.
#[derive(Debug, Error)]
pub enum SubmitError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("could not read {name}: {source}")]
    File {
        name: String,
        #[source]
        source: std::io::Error,
    },

    #[error("response was not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
}
