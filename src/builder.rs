use super::*;

/// Configures and constructs a [`Client`].
///
/// The defaults match the public API: no authentication, ETag validation
/// enabled, the well-known base URL.
pub struct ClientBuilder {
  auth_token: Option<String>,
  base_url: String,
  etags: bool,
  transport: Option<Arc<dyn Transport>>,
}

impl Default for ClientBuilder {
  fn default() -> Self {
    Self {
      auth_token: None,
      base_url: Self::API_BASE_URL.to_string(),
      etags: true,
      transport: None,
    }
  }
}

impl ClientBuilder {
  pub const API_BASE_URL: &str = "https://hacker-news.firebaseio.com";

  /// Token appended to every request for credentialed access. The public
  /// API requires none.
  pub fn auth_token(mut self, token: impl Into<String>) -> Self {
    self.auth_token = Some(token.into());
    self
  }

  pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
    self.base_url = base_url.into();
    self
  }

  pub fn build(self) -> Result<Client> {
    let transport = match self.transport {
      Some(transport) => transport,
      None => {
        if self.base_url.trim().is_empty() {
          return Err(Error::Configuration(
            "base URL must not be empty".to_string(),
          ));
        }

        reqwest::Url::parse(&self.base_url).map_err(|error| {
          Error::Configuration(format!(
            "invalid base URL `{}`: {error}",
            self.base_url
          ))
        })?;

        if self
          .auth_token
          .as_deref()
          .is_some_and(|token| token.trim().is_empty())
        {
          return Err(Error::Configuration(
            "auth token must not be empty".to_string(),
          ));
        }

        Arc::new(HttpTransport::new(self.base_url, self.auth_token))
      }
    };

    Ok(Client::from_parts(transport, self.etags))
  }

  pub fn new() -> Self {
    Self::default()
  }

  /// Replaces the default HTTP transport, e.g. with an in-memory fake.
  /// The base URL and auth token are ignored when a transport is supplied.
  pub fn transport(mut self, transport: Arc<dyn Transport>) -> Self {
    self.transport = Some(transport);
    self
  }

  /// Disabling validators makes every update an unconditional fetch that
  /// reports a change, whether or not the resource differs.
  pub fn use_etags(mut self, enabled: bool) -> Self {
    self.etags = enabled;
    self
  }
}
