use super::*;

/// Ranked list of item ids, e.g. the newest-story ranking. The wire
/// payload is a bare JSON array; position is rank.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct IdList {
  pub ids: Vec<u64>,
  pub(crate) record: RemoteRecord,
}

impl Decode for IdList {
  fn decode(&mut self, payload: &[u8]) -> Result<()> {
    self.ids = serde_json::from_slice(payload)
      .map_err(|error| Error::Decode(error.to_string()))?;

    Ok(())
  }
}

impl Remote for IdList {
  fn etag(&self) -> &str {
    self.record.etag()
  }

  fn path(&self) -> &str {
    self.record.path()
  }

  fn set_etag(&mut self, etag: String) {
    self.record.set_etag(etag);
  }

  fn set_path(&mut self, path: String) {
    self.record.set_path(path);
  }
}
