use super::*;

#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum ItemType {
  Comment,
  Job,
  Poll,
  Pollopt,
  Story,
}
