use super::*;

/// A single Hacker News item: story, comment, job, poll or poll option.
///
/// Every field other than `id` is optional on the wire; absent fields
/// decode to their default.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Item {
  pub by: Option<String>,
  pub dead: bool,
  pub deleted: bool,
  /// Total comment count, for stories and polls.
  pub descendants: u64,
  pub id: u64,
  /// Ids of the item's comments, in ranked display order.
  pub kids: Vec<u64>,
  pub parent: Option<u64>,
  /// Ids of a poll's related poll options, in display order.
  pub parts: Vec<u64>,
  pub poll: Option<u64>,
  pub(crate) record: RemoteRecord,
  pub score: u64,
  pub text: Option<String>,
  pub time: DateTime<Utc>,
  pub title: Option<String>,
  pub r#type: Option<ItemType>,
  pub url: Option<String>,
}

#[derive(Deserialize)]
struct ItemPayload {
  by: Option<String>,
  #[serde(default)]
  dead: bool,
  #[serde(default)]
  deleted: bool,
  #[serde(default)]
  descendants: u64,
  id: u64,
  #[serde(default)]
  kids: Vec<u64>,
  parent: Option<u64>,
  #[serde(default)]
  parts: Vec<u64>,
  poll: Option<u64>,
  #[serde(default)]
  score: u64,
  text: Option<String>,
  #[serde(default)]
  time: i64,
  title: Option<String>,
  r#type: Option<ItemType>,
  url: Option<String>,
}

impl Decode for Item {
  fn decode(&mut self, payload: &[u8]) -> Result<()> {
    let raw = serde_json::from_slice::<ItemPayload>(payload)
      .map_err(|error| Error::Decode(error.to_string()))?;

    self.by = raw.by;
    self.dead = raw.dead;
    self.deleted = raw.deleted;
    self.descendants = raw.descendants;
    self.id = raw.id;
    self.kids = raw.kids;
    self.parent = raw.parent;
    self.parts = raw.parts;
    self.poll = raw.poll;
    self.score = raw.score;
    self.text = raw.text;
    self.time = from_epoch(raw.time)?;
    self.title = raw.title;
    self.r#type = raw.r#type;
    self.url = raw.url;

    Ok(())
  }
}

impl Remote for Item {
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
