//! Admission check and request addressing for order lookups.

use crate::InvalidOrderId;

/// Length of an order id (hex encoded 32 bytes).
pub const ORDER_ID_LEN: usize = 64;

/// The only admission check: length in bytes, on the raw input. No charset
/// validation happens here; the API rejects ids it does not know.
pub fn is_valid_identifier(query: &str) -> bool {
    query.len() == ORDER_ID_LEN
}

pub fn check(query: &str) -> Result<(), InvalidOrderId> {
    if is_valid_identifier(query) {
        Ok(())
    } else {
        Err(InvalidOrderId { len: query.len() })
    }
}

/// `{api_url}/orders/id/{id}/matched`, with the id trimmed.
pub fn order_url(api_url: &str, query: &str) -> String {
    format!(
        "{}/orders/id/{}/matched",
        api_url.trim_end_matches('/'),
        query.trim()
    )
}
