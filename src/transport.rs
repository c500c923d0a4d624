use super::*;

/// Result of a conditional fetch: either the resource still matches the
/// validator, or a new payload arrives together with its new validator.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum FetchOutcome {
  Changed { etag: String, payload: Vec<u8> },
  Unchanged,
}

/// The retrieval collaborator the client drives. Implementations own all
/// transport concerns (connections, TLS, authentication); the client only
/// decides what to fetch and how to interpret the outcome.
#[async_trait]
pub trait Transport: Send + Sync {
  /// Retrieves the resource at `path` unconditionally.
  async fn fetch(&self, path: &str) -> Result<Vec<u8>>;

  /// Retrieves the resource at `path` only if it no longer matches
  /// `etag`. An empty `etag` means never fetched and always changes.
  async fn fetch_if_changed(&self, path: &str, etag: &str) -> Result<FetchOutcome>;
}
