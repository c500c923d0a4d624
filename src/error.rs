use super::*;

#[derive(Debug, thiserror::Error)]
pub enum Error {
  /// The client was constructed with a bad or missing setting.
  #[error("invalid client configuration: {0}")]
  Configuration(String),

  /// The payload was not valid JSON or did not match the expected shape.
  /// The record's validator is left untouched so a later call can retry.
  #[error("malformed payload: {0}")]
  Decode(String),

  /// The underlying fetch failed. Surfaced verbatim, never retried.
  #[error("transport failure: {0}")]
  Transport(Box<dyn std::error::Error + Send + Sync>),
}

impl Error {
  pub fn transport(source: impl std::error::Error + Send + Sync + 'static) -> Self {
    Self::Transport(Box::new(source))
  }
}
