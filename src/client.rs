use super::*;

/// Facade over the read-only API.
///
/// Item and user lookups build a fresh record per call; the named id
/// lists are cached for the life of the process, keyed by path and
/// guarded by an internal lock, so a re-fetch that reports no change can
/// hand back the previously decoded list without another decode.
pub struct Client {
  etags: bool,
  lists: Mutex<HashMap<String, IdList>>,
  transport: Arc<dyn Transport>,
}

impl Client {
  pub fn builder() -> ClientBuilder {
    ClientBuilder::new()
  }

  fn cache(&self) -> MutexGuard<'_, HashMap<String, IdList>> {
    self.lists.lock().unwrap_or_else(PoisonError::into_inner)
  }

  pub(crate) fn from_parts(transport: Arc<dyn Transport>, etags: bool) -> Self {
    Self {
      etags,
      lists: Mutex::new(HashMap::new()),
      transport,
    }
  }

  /// Retrieves the item with the given id.
  pub async fn item(&self, id: u64) -> Result<Item> {
    let mut item = Item {
      record: RemoteRecord::new(Endpoint::Item(id).path()),
      ..Item::default()
    };

    self.update(&mut item).await?;

    Ok(item)
  }

  /// Retrieves many items with bounded concurrency, preserving the order
  /// of `ids`. The first failure wins.
  pub async fn items(&self, ids: &[u64]) -> Result<Vec<Item>> {
    stream::iter(ids.iter().copied().map(|id| self.item(id)))
      .buffered(16)
      .collect::<Vec<_>>()
      .await
      .into_iter()
      .collect()
  }

  async fn list(&self, path: &str) -> Result<IdList> {
    let mut list = self.cache().get(path).cloned().unwrap_or_else(|| IdList {
      record: RemoteRecord::new(path.to_string()),
      ..IdList::default()
    });

    let changed = self.update(&mut list).await?;

    if changed {
      self.cache().insert(path.to_string(), list.clone());
    }

    Ok(list)
  }

  /// Id of the most recently created item. Never cached and never
  /// validated; consecutive calls may legitimately differ.
  pub async fn max_item(&self) -> Result<u64> {
    let payload = self.transport.fetch(&Endpoint::MaxItem.path()).await?;

    serde_json::from_slice(&payload).map_err(|error| Error::Decode(error.to_string()))
  }

  /// Client for the public API: unauthenticated, ETags enabled.
  pub fn new() -> Result<Self> {
    Self::builder().build()
  }

  /// Ids of up to 500 of the newest stories, newest first.
  pub async fn new_stories(&self) -> Result<IdList> {
    self.list(&Endpoint::NewStories.path()).await
  }

  /// Re-fetches `record` if the backing store holds a newer version,
  /// decoding the new payload into it and advancing its validator.
  ///
  /// Returns whether the record changed. With ETags disabled the fetch is
  /// unconditional and the result is always `true`, whether or not the
  /// resource differs. The validator only advances after a successful
  /// decode; a decode failure leaves it stale so the next call retries.
  pub async fn update(&self, record: &mut (impl Decode + Remote + Send)) -> Result<bool> {
    if !self.etags {
      let payload = self.transport.fetch(record.path()).await?;

      record.decode(&payload)?;

      return Ok(true);
    }

    let outcome = self
      .transport
      .fetch_if_changed(record.path(), record.etag())
      .await?;

    match outcome {
      FetchOutcome::Changed { etag, payload } => {
        record.decode(&payload)?;
        record.set_etag(etag);

        debug!(path = record.path(), "record changed");

        Ok(true)
      }
      FetchOutcome::Unchanged => Ok(false),
    }
  }

  /// Retrieves the user with the given username. Usernames are
  /// case-sensitive.
  pub async fn user(&self, id: &str) -> Result<User> {
    let mut user = User {
      record: RemoteRecord::new(Endpoint::User(id.to_string()).path()),
      ..User::default()
    };

    self.update(&mut user).await?;

    Ok(user)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[derive(Default)]
  struct FakeTransport {
    fetches: Mutex<Vec<(String, bool)>>,
    resources: Mutex<HashMap<String, (String, Vec<u8>)>>,
  }

  impl FakeTransport {
    fn conditional_fetches(&self) -> usize {
      self
        .fetches
        .lock()
        .unwrap()
        .iter()
        .filter(|(_, conditional)| *conditional)
        .count()
    }

    fn fetch_count(&self) -> usize {
      self.fetches.lock().unwrap().len()
    }

    fn insert(&self, path: &str, etag: &str, payload: &[u8]) {
      self
        .resources
        .lock()
        .unwrap()
        .insert(path.to_string(), (etag.to_string(), payload.to_vec()));
    }

    fn resource(&self, path: &str) -> Result<(String, Vec<u8>)> {
      self
        .resources
        .lock()
        .unwrap()
        .get(path)
        .cloned()
        .ok_or_else(|| Error::Transport(format!("no resource at {path}").into()))
    }
  }

  #[async_trait]
  impl Transport for FakeTransport {
    async fn fetch(&self, path: &str) -> Result<Vec<u8>> {
      self.fetches.lock().unwrap().push((path.to_string(), false));

      Ok(self.resource(path)?.1)
    }

    async fn fetch_if_changed(&self, path: &str, etag: &str) -> Result<FetchOutcome> {
      self.fetches.lock().unwrap().push((path.to_string(), true));

      let (current, payload) = self.resource(path)?;

      if !etag.is_empty() && etag == current {
        return Ok(FetchOutcome::Unchanged);
      }

      Ok(FetchOutcome::Changed {
        etag: current,
        payload,
      })
    }
  }

  fn client(transport: &Arc<FakeTransport>) -> Client {
    Client::builder()
      .transport(transport.clone())
      .build()
      .unwrap()
  }

  #[tokio::test]
  async fn item_fetch_decodes_and_records_the_validator() {
    let transport = Arc::new(FakeTransport::default());

    transport.insert(
      "v0/item/8863",
      "tag-1",
      br#"{"id":8863,"type":"story","time":1175714200,"title":"T"}"#,
    );

    let item = client(&transport).item(8863).await.unwrap();

    assert_eq!(item.id, 8863);
    assert_eq!(item.title.as_deref(), Some("T"));
    assert_eq!(item.etag(), "tag-1");
  }

  #[tokio::test]
  async fn never_fetched_record_reports_changed() {
    let transport = Arc::new(FakeTransport::default());

    transport.insert("v0/item/1", "tag-1", br#"{"id":1}"#);

    let mut item = Item {
      record: RemoteRecord::new("v0/item/1".to_string()),
      ..Item::default()
    };

    assert!(client(&transport).update(&mut item).await.unwrap());
  }

  #[tokio::test]
  async fn unchanged_record_is_left_untouched() {
    let transport = Arc::new(FakeTransport::default());

    transport.insert("v0/item/1", "tag-1", br#"{"id":1,"score":5}"#);

    let hn = client(&transport);

    let mut item = Item {
      record: RemoteRecord::new("v0/item/1".to_string()),
      ..Item::default()
    };

    assert!(hn.update(&mut item).await.unwrap());

    let snapshot = item.clone();

    assert!(!hn.update(&mut item).await.unwrap());
    assert_eq!(item, snapshot);
  }

  #[tokio::test]
  async fn new_stories_returns_the_cached_list_when_unchanged() {
    let transport = Arc::new(FakeTransport::default());

    transport.insert("v0/newstories", "v1", b"[3,2,1]");

    let hn = client(&transport);

    let first = hn.new_stories().await.unwrap();
    let second = hn.new_stories().await.unwrap();

    assert_eq!(first.ids, vec![3, 2, 1]);
    assert_eq!(first, second);
    assert_eq!(transport.fetch_count(), 2);
  }

  #[tokio::test]
  async fn new_stories_replaces_the_cache_on_change() {
    let transport = Arc::new(FakeTransport::default());

    transport.insert("v0/newstories", "v1", b"[3,2,1]");

    let hn = client(&transport);

    assert_eq!(hn.new_stories().await.unwrap().ids, vec![3, 2, 1]);

    transport.insert("v0/newstories", "v2", b"[6,5,4]");

    assert_eq!(hn.new_stories().await.unwrap().ids, vec![6, 5, 4]);

    let cached = hn.new_stories().await.unwrap();

    assert_eq!(cached.ids, vec![6, 5, 4]);
    assert_eq!(cached.etag(), "v2");
  }

  #[tokio::test]
  async fn max_item_never_touches_the_cache_or_validators() {
    let transport = Arc::new(FakeTransport::default());

    transport.insert("v0/maxitem", "ignored", b"9130260");

    let hn = client(&transport);

    assert_eq!(hn.max_item().await.unwrap(), 9130260);

    transport.insert("v0/maxitem", "ignored", b"9130261");

    assert_eq!(hn.max_item().await.unwrap(), 9130261);
    assert_eq!(transport.fetch_count(), 2);
    assert_eq!(transport.conditional_fetches(), 0);
  }

  #[tokio::test]
  async fn disabled_etags_always_report_changed() {
    let transport = Arc::new(FakeTransport::default());

    transport.insert("v0/item/1", "tag-1", br#"{"id":1}"#);

    let hn = Client::builder()
      .transport(transport.clone())
      .use_etags(false)
      .build()
      .unwrap();

    let mut item = Item {
      record: RemoteRecord::new("v0/item/1".to_string()),
      ..Item::default()
    };

    assert!(hn.update(&mut item).await.unwrap());
    assert!(hn.update(&mut item).await.unwrap());
    assert_eq!(transport.conditional_fetches(), 0);
  }

  #[tokio::test]
  async fn decode_failure_leaves_the_validator_stale() {
    let transport = Arc::new(FakeTransport::default());

    transport.insert("v0/item/1", "tag-1", b"{broken");

    let mut item = Item {
      record: RemoteRecord::new("v0/item/1".to_string()),
      ..Item::default()
    };

    assert!(matches!(
      client(&transport).update(&mut item).await,
      Err(Error::Decode(_))
    ));
    assert_eq!(item.etag(), "");
  }

  #[tokio::test]
  async fn missing_resource_is_a_transport_error() {
    let transport = Arc::new(FakeTransport::default());

    assert!(matches!(
      client(&transport).item(404).await,
      Err(Error::Transport(_))
    ));
  }

  #[tokio::test]
  async fn user_fetch_targets_the_user_path() {
    let transport = Arc::new(FakeTransport::default());

    transport.insert(
      "v0/user/jl",
      "tag-1",
      br#"{"id":"jl","created":1173923446,"karma":2937}"#,
    );

    let user = client(&transport).user("jl").await.unwrap();

    assert_eq!(user.id, "jl");
    assert_eq!(user.karma, 2937);
    assert_eq!(user.path(), "v0/user/jl");
  }

  #[tokio::test]
  async fn items_preserves_the_requested_order() {
    let transport = Arc::new(FakeTransport::default());

    for id in [1, 2, 3] {
      transport.insert(
        &format!("v0/item/{id}"),
        &format!("tag-{id}"),
        format!(r#"{{"id":{id}}}"#).as_bytes(),
      );
    }

    let items = client(&transport).items(&[3, 1, 2]).await.unwrap();

    let ids = items.iter().map(|item| item.id).collect::<Vec<_>>();

    assert_eq!(ids, vec![3, 1, 2]);
  }
}
