use serde::{Deserialize, Serialize};
use serde_with::serde_as;

use crate::{lenient, AdditionalData};

/// The swap intent as submitted by the user. Never changes after creation.
#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CreateOrder {
    #[serde(default)]
    #[serde_as(as = "lenient::Text")]
    pub create_id: Option<String>,
    #[serde(default)]
    #[serde_as(as = "lenient::Text")]
    pub user_id: Option<String>,
    #[serde(default)]
    #[serde_as(as = "lenient::Text")]
    pub secret_hash: Option<String>,

    #[serde(default)]
    #[serde_as(as = "lenient::Text")]
    pub source_chain: Option<String>,
    #[serde(default)]
    #[serde_as(as = "lenient::Text")]
    pub source_asset: Option<String>,
    #[serde(default)]
    #[serde_as(as = "lenient::Text")]
    pub source_amount: Option<String>,
    #[serde(default)]
    #[serde_as(as = "lenient::Text")]
    pub destination_chain: Option<String>,
    #[serde(default)]
    #[serde_as(as = "lenient::Text")]
    pub destination_asset: Option<String>,
    #[serde(default)]
    #[serde_as(as = "lenient::Text")]
    pub destination_amount: Option<String>,

    #[serde(default)]
    #[serde_as(as = "lenient::Text")]
    pub initiator_source_address: Option<String>,
    #[serde(default)]
    #[serde_as(as = "lenient::Text")]
    pub initiator_destination_address: Option<String>,

    #[serde(default)]
    #[serde_as(as = "lenient::Text")]
    pub fee: Option<String>,
    #[serde(default)]
    #[serde_as(as = "lenient::Numeric")]
    pub timelock: Option<u64>,
    #[serde(default)]
    #[serde_as(as = "lenient::Numeric")]
    pub min_destination_confirmations: Option<u64>,

    #[serde(default)]
    #[serde_as(as = "lenient::Text")]
    pub block_number: Option<String>,
    #[serde(default)]
    #[serde_as(as = "lenient::Text")]
    pub nonce: Option<String>,

    #[serde(default)]
    #[serde_as(as = "lenient::Section")]
    pub additional_data: AdditionalData,

    #[serde(default)]
    #[serde_as(as = "lenient::Text")]
    pub created_at: Option<String>,
    #[serde(default)]
    #[serde_as(as = "lenient::Text")]
    pub updated_at: Option<String>,
}
