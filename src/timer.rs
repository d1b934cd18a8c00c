//! The timer record and its document decoding
//!
//! `time` is an opaque string. It is never parsed or validated.

use mongodb::bson::{self, Document};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};
use tracing::warn;

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Timer {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub time: String,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

impl Timer {
    pub fn new(time: impl Into<String>) -> Self {
        Self { time: time.into() }
    }

    /// Decodes a request body. Anything but a JSON object is rejected,
    /// including a one-element array.
    pub fn from_json(body: &[u8]) -> Result<Self, serde_json::Error> {
        let object: Map<String, Value> = serde_json::from_slice(body)?;
        serde_json::from_value(Value::Object(object))
    }
}

/// Decodes stored documents into timers. Documents that do not decode are
/// logged and dropped; the rest keep their original order.
pub fn decode_timers<I>(documents: I) -> Vec<Timer>
where
    I: IntoIterator<Item = Document>,
{
    documents
        .into_iter()
        .filter_map(|document| match bson::from_document::<Timer>(document) {
            Ok(timer) => Some(timer),
            Err(err) => {
                warn!(error = %err, "skipping undecodable timer document");
                None
            }
        })
        .collect()
}
