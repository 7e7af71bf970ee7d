//! The record contract.

use serde::de::DeserializeOwned;
use serde::Serialize;

/// A domain entity the client and the list table can work with generically.
///
/// `id` is the stable server-assigned identifier (empty until the server has
/// assigned one); `label` is a human-readable description, not guaranteed
/// unique. Records are immutable once fetched; updates produce new values.
pub trait Record: Serialize + DeserializeOwned + Clone {
    fn id(&self) -> &str;
    fn label(&self) -> String;
}
