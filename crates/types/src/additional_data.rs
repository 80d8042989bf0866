use serde::{Deserialize, Serialize};
use serde_with::serde_as;

use crate::lenient;

/// Metadata attached to an order by the quote/strategy layer.
#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AdditionalData {
    #[serde(default)]
    #[serde_as(as = "lenient::Text")]
    pub strategy_id: Option<String>,
    #[serde(default)]
    #[serde_as(as = "lenient::Text")]
    pub bitcoin_optional_recipient: Option<String>,
    #[serde(default)]
    #[serde_as(as = "lenient::Flag")]
    pub is_blacklisted: Option<bool>,
    #[serde(default)]
    #[serde_as(as = "lenient::Text")]
    pub tx_hash: Option<String>,
    #[serde(default)]
    #[serde_as(as = "lenient::Numeric")]
    pub input_token_price: Option<f64>,
    #[serde(default)]
    #[serde_as(as = "lenient::Numeric")]
    pub output_token_price: Option<f64>,
    /// Unix seconds.
    #[serde(default)]
    #[serde_as(as = "lenient::Numeric")]
    pub deadline: Option<u64>,
    #[serde(default)]
    #[serde_as(as = "lenient::Text")]
    pub sig: Option<String>,
}

impl AdditionalData {
    /// An absent flag counts as approved.
    pub fn blacklist_status(&self) -> &'static str {
        if self.is_blacklisted.unwrap_or(false) {
            "Blacklisted"
        } else {
            "Approved"
        }
    }
}
