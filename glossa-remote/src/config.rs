//! Configuration for the shop admin API.

use serde::{Deserialize, Serialize};

/// Admin API version the adapters speak.
pub const DEFAULT_API_VERSION: &str = "2024-01";

/// Connection settings for one shop.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShopConfig {
    /// Shop domain, e.g. `my-store.myshopify.com`.
    pub shop_domain: String,
    /// Admin API access token (`X-Shopify-Access-Token`).
    pub access_token: String,
    /// Admin API version segment.
    #[serde(default = "default_api_version")]
    pub api_version: String,
    /// Optional custom base URL (used by tests to point at a mock server).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
}

fn default_api_version() -> String {
    DEFAULT_API_VERSION.to_string()
}

impl ShopConfig {
    pub fn new(shop_domain: impl Into<String>, access_token: impl Into<String>) -> Self {
        Self {
            shop_domain: shop_domain.into(),
            access_token: access_token.into(),
            api_version: default_api_version(),
            base_url: None,
        }
    }

    #[must_use]
    pub fn with_api_version(mut self, api_version: impl Into<String>) -> Self {
        self.api_version = api_version.into();
        self
    }

    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Root of all admin API paths, e.g.
    /// `https://my-store.myshopify.com/admin/api/2024-01`.
    pub fn api_root(&self) -> String {
        let base = match &self.base_url {
            Some(base) => base.trim_end_matches('/').to_string(),
            None => format!("https://{}", self.shop_domain),
        };
        format!("{}/admin/api/{}", base, self.api_version)
    }
}
