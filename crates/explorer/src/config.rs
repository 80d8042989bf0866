use reqwest::Url;

use crate::{ConfigError, ResponsePolicy};

pub const DEFAULT_API_URL: &str = "https://api.garden.finance";

#[derive(Debug, Clone)]
pub struct ExplorerConfig {
    pub api_url: String,
    pub policy: ResponsePolicy,
}

impl Default for ExplorerConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            policy: ResponsePolicy::default(),
        }
    }
}

impl ExplorerConfig {
    /// Only `http` and `https` base urls are accepted.
    pub fn new(api_url: &str) -> Result<Self, ConfigError> {
        let invalid = |reason: String| ConfigError::InvalidApiUrl {
            url: api_url.to_string(),
            reason,
        };
        let url = Url::parse(api_url).map_err(|err| invalid(err.to_string()))?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(invalid(format!("unsupported scheme `{}`", url.scheme())));
        }

        Ok(Self {
            api_url: api_url.trim_end_matches('/').to_string(),
            ..Default::default()
        })
    }

    pub fn with_policy(mut self, policy: ResponsePolicy) -> Self {
        self.policy = policy;
        self
    }
}
