use super::*;

/// Capability shared by every fetched record: a resource path and the
/// opaque validator returned by the last successful fetch. Anything
/// implementing this can be passed to [`Client::update`].
pub trait Remote {
  fn etag(&self) -> &str;

  fn path(&self) -> &str;

  fn set_etag(&mut self, etag: String);

  fn set_path(&mut self, path: String);
}

/// Value object holding the two remote fields. Concrete records compose
/// one of these and delegate their [`Remote`] implementation to it.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct RemoteRecord {
  etag: String,
  path: String,
}

impl RemoteRecord {
  pub fn new(path: String) -> Self {
    Self {
      etag: String::new(),
      path,
    }
  }
}

impl Remote for RemoteRecord {
  fn etag(&self) -> &str {
    &self.etag
  }

  fn path(&self) -> &str {
    &self.path
  }

  fn set_etag(&mut self, etag: String) {
    self.etag = etag;
  }

  fn set_path(&mut self, path: String) {
    self.path = path;
  }
}
