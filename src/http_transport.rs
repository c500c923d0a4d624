use super::*;

/// Default [`Transport`] speaking the Firebase REST dialect served by the
/// public Hacker News API: resources live at `{base}/{path}.json`, a
/// validator is requested with the `X-Firebase-ETag` header and conditional
/// retrieval uses `If-None-Match` with `304 Not Modified` for a hit.
pub struct HttpTransport {
  auth_token: Option<String>,
  base_url: String,
  client: reqwest::Client,
}

impl HttpTransport {
  pub fn new(base_url: String, auth_token: Option<String>) -> Self {
    Self {
      auth_token,
      base_url: base_url.trim_end_matches('/').to_string(),
      client: reqwest::Client::new(),
    }
  }

  fn url(&self, path: &str) -> String {
    match &self.auth_token {
      Some(token) => format!("{}/{path}.json?auth={token}", self.base_url),
      None => format!("{}/{path}.json", self.base_url),
    }
  }
}

#[async_trait]
impl Transport for HttpTransport {
  async fn fetch(&self, path: &str) -> Result<Vec<u8>> {
    debug!(path, "unconditional fetch");

    let response = self
      .client
      .get(self.url(path))
      .send()
      .await
      .map_err(Error::transport)?
      .error_for_status()
      .map_err(Error::transport)?;

    Ok(response.bytes().await.map_err(Error::transport)?.to_vec())
  }

  async fn fetch_if_changed(&self, path: &str, etag: &str) -> Result<FetchOutcome> {
    debug!(path, etag, "conditional fetch");

    let mut request = self
      .client
      .get(self.url(path))
      .header("X-Firebase-ETag", "true");

    if !etag.is_empty() {
      request = request.header(reqwest::header::IF_NONE_MATCH, etag);
    }

    let response = request.send().await.map_err(Error::transport)?;

    if response.status() == reqwest::StatusCode::NOT_MODIFIED {
      return Ok(FetchOutcome::Unchanged);
    }

    let response = response.error_for_status().map_err(Error::transport)?;

    let etag = response
      .headers()
      .get(reqwest::header::ETAG)
      .and_then(|value| value.to_str().ok())
      .unwrap_or_default()
      .to_string();

    let payload = response.bytes().await.map_err(Error::transport)?.to_vec();

    Ok(FetchOutcome::Changed { etag, payload })
  }
}
