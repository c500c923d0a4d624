use super::*;

/// Conversion from a raw fetched payload into a record's data fields.
///
/// Decoding overwrites the data fields only; the composed [`RemoteRecord`]
/// is left untouched so the caller controls when the validator advances.
/// Either the whole payload decodes or the record is unreliable and the
/// call fails with [`Error::Decode`].
pub trait Decode {
  fn decode(&mut self, payload: &[u8]) -> Result<()>;
}

pub(crate) fn from_epoch(seconds: i64) -> Result<DateTime<Utc>> {
  DateTime::<Utc>::from_timestamp(seconds, 0)
    .ok_or_else(|| Error::Decode(format!("unix timestamp {seconds} is out of range")))
}
