//! Read-only client for the Hacker News API.
//!
//! Fetches items, users and ranked id lists from the public Firebase-backed
//! endpoints, using ETag validators to skip payloads that have not changed
//! since the last fetch.

use {
  async_trait::async_trait,
  chrono::{DateTime, Utc},
  decode::from_epoch,
  futures::stream::{self, StreamExt},
  serde::Deserialize,
  std::{
    collections::HashMap,
    sync::{Arc, Mutex, MutexGuard, PoisonError},
  },
  tracing::debug,
};

pub use {
  builder::ClientBuilder,
  client::Client,
  decode::Decode,
  endpoint::Endpoint,
  error::Error,
  http_transport::HttpTransport,
  id_list::IdList,
  item::Item,
  item_type::ItemType,
  remote::{Remote, RemoteRecord},
  transport::{FetchOutcome, Transport},
  user::User,
};

mod builder;
mod client;
mod decode;
mod endpoint;
mod error;
mod http_transport;
mod id_list;
mod item;
mod item_type;
mod remote;
mod transport;
mod user;

pub type Result<T, E = Error> = std::result::Result<T, E>;
