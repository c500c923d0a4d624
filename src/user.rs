use super::*;

/// A Hacker News user profile. Usernames are case-sensitive.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct User {
  pub about: Option<String>,
  pub created: DateTime<Utc>,
  /// Minutes between a comment's creation and its visibility to others.
  pub delay: u64,
  pub id: String,
  pub karma: i64,
  pub(crate) record: RemoteRecord,
  /// Ids of the user's stories, polls and comments.
  pub submitted: Vec<u64>,
}

#[derive(Deserialize)]
struct UserPayload {
  about: Option<String>,
  #[serde(default)]
  created: i64,
  #[serde(default)]
  delay: u64,
  id: String,
  #[serde(default)]
  karma: i64,
  #[serde(default)]
  submitted: Vec<u64>,
}

impl Decode for User {
  fn decode(&mut self, payload: &[u8]) -> Result<()> {
    let raw = serde_json::from_slice::<UserPayload>(payload)
      .map_err(|error| Error::Decode(error.to_string()))?;

    self.about = raw.about;
    self.created = from_epoch(raw.created)?;
    self.delay = raw.delay;
    self.id = raw.id;
    self.karma = raw.karma;
    self.submitted = raw.submitted;

    Ok(())
  }
}

impl Remote for User {
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
