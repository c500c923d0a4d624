use super::*;

/// Descriptor for one of the read-only API resources.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Endpoint {
  Item(u64),
  MaxItem,
  NewStories,
  User(String),
}

impl Endpoint {
  pub fn path(&self) -> String {
    match self {
      Self::Item(id) => format!("v0/item/{id}"),
      Self::MaxItem => "v0/maxitem".to_string(),
      Self::NewStories => "v0/newstories".to_string(),
      Self::User(name) => format!("v0/user/{name}"),
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn paths_match_the_public_api_layout() {
    assert_eq!(Endpoint::Item(8863).path(), "v0/item/8863");
    assert_eq!(Endpoint::MaxItem.path(), "v0/maxitem");
    assert_eq!(Endpoint::NewStories.path(), "v0/newstories");
    assert_eq!(
      Endpoint::User("dhouston".to_string()).path(),
      "v0/user/dhouston"
    );
  }
}
