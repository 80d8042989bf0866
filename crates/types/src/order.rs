use serde::{Deserialize, Serialize};
use serde_json::Value;
use serde_with::serde_as;

use crate::{lenient, CreateOrder, Swap};

/// Body of `GET /orders/id/{id}/matched`.
#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OrderRecord {
    #[serde(default)]
    #[serde_as(as = "lenient::Text")]
    pub status: Option<String>,
    #[serde(default)]
    #[serde_as(as = "lenient::Section")]
    pub result: MatchedOrder,
}

/// An order together with the two swaps that were matched to it.
#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MatchedOrder {
    #[serde(default)]
    #[serde_as(as = "lenient::Section")]
    pub create_order: CreateOrder,
    #[serde(default)]
    #[serde_as(as = "lenient::Section")]
    pub source_swap: Swap,
    #[serde(default)]
    #[serde_as(as = "lenient::Section")]
    pub destination_swap: Swap,
    #[serde(default)]
    #[serde_as(as = "lenient::Text")]
    pub created_at: Option<String>,
}

impl OrderRecord {
    /// Reads a record out of any JSON document. Non-object documents give an
    /// empty record, the same as an object with none of the expected keys.
    pub fn from_json(value: Value) -> Self {
        match value {
            Value::Object(_) => serde_json::from_value(value).unwrap_or_default(),
            _ => Self::default(),
        }
    }

    pub fn create_id(&self) -> Option<&str> {
        self.result.create_order.create_id.as_deref()
    }
}
