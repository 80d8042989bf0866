use reqwest::Client;
use serde_json::Value;
use tracing::{debug, error, info};
use types::OrderRecord;

use crate::{query, ExplorerConfig, FetchError};

/// Fetches matched orders from the order API.
///
/// One GET per search, no timeout beyond the transport default, no retry and
/// no caching.
#[derive(Debug, Clone)]
pub struct OrderClient {
    http: Client,
    api_url: String,
}

impl OrderClient {
    pub fn new(config: &ExplorerConfig) -> Self {
        Self {
            http: Client::new(),
            api_url: config.api_url.clone(),
        }
    }

    pub fn url_for(&self, query: &str) -> String {
        query::order_url(&self.api_url, query)
    }

    /// The body is accepted as long as it is JSON; fields the record expects
    /// but the body lacks are left absent.
    pub async fn search(&self, query: &str) -> Result<OrderRecord, FetchError> {
        let url = self.url_for(query);
        info!("Fetching order {}", query.trim());

        let result = self.fetch(&url).await;
        if let Err(err) = &result {
            error!("Failed to fetch order data: {err}");
        }

        result
    }

    async fn fetch(&self, url: &str) -> Result<OrderRecord, FetchError> {
        let res = self.http.get(url).send().await?;

        let status = res.status();
        if !status.is_success() {
            return Err(FetchError::status(status));
        }

        let body = res.bytes().await?;
        debug!(%status, bytes = body.len(), "Order response received");
        let value = serde_json::from_slice::<Value>(&body)?;

        Ok(OrderRecord::from_json(value))
    }
}
