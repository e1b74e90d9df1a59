use thiserror::Error;

#[derive(Debug, Error)]
pub enum EstimatorError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    #[error("estimator returned invalid response: {0}")]
    InvalidResponse(String),

    #[error("estimator API error: status={status}, body={body}")]
    Api { status: u16, body: String },
}
