use serde::{Deserialize, Serialize};
use serde_with::serde_as;

use crate::lenient;

/// Execution record of one leg of an order on a single chain.
#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Swap {
    #[serde(default)]
    #[serde_as(as = "lenient::Text")]
    pub swap_id: Option<String>,
    #[serde(default)]
    #[serde_as(as = "lenient::Text")]
    pub chain: Option<String>,
    #[serde(default)]
    #[serde_as(as = "lenient::Text")]
    pub asset: Option<String>,
    #[serde(default)]
    #[serde_as(as = "lenient::Text")]
    pub amount: Option<String>,
    #[serde(default)]
    #[serde_as(as = "lenient::Text")]
    pub filled_amount: Option<String>,
    #[serde(default)]
    #[serde_as(as = "lenient::Text")]
    pub initiator: Option<String>,
    #[serde(default)]
    #[serde_as(as = "lenient::Text")]
    pub redeemer: Option<String>,
    #[serde(default)]
    #[serde_as(as = "lenient::Text")]
    pub secret_hash: Option<String>,
    #[serde(default)]
    #[serde_as(as = "lenient::Text")]
    pub secret: Option<String>,
    #[serde(default)]
    #[serde_as(as = "lenient::Text")]
    pub initiate_tx_hash: Option<String>,
    #[serde(default)]
    #[serde_as(as = "lenient::Text")]
    pub redeem_tx_hash: Option<String>,
    #[serde(default)]
    #[serde_as(as = "lenient::Text")]
    pub refund_tx_hash: Option<String>,
    #[serde(default)]
    #[serde_as(as = "lenient::Numeric")]
    pub timelock: Option<u64>,
    #[serde(default)]
    #[serde_as(as = "lenient::Numeric")]
    pub required_confirmations: Option<u64>,
    #[serde(default)]
    #[serde_as(as = "lenient::Numeric")]
    pub current_confirmations: Option<u64>,
    #[serde(default)]
    #[serde_as(as = "lenient::Text")]
    pub initiate_block_number: Option<String>,
    #[serde(default)]
    #[serde_as(as = "lenient::Text")]
    pub redeem_block_number: Option<String>,
    #[serde(default)]
    #[serde_as(as = "lenient::Text")]
    pub refund_block_number: Option<String>,
    #[serde(default)]
    #[serde_as(as = "lenient::Text")]
    pub created_at: Option<String>,
    #[serde(default)]
    #[serde_as(as = "lenient::Text")]
    pub updated_at: Option<String>,
}

impl Swap {
    /// Display name of the chain, empty when the API left it out.
    pub fn chain_name(&self) -> &str {
        self.chain.as_deref().unwrap_or_default()
    }
}
