//! Request-cost probe over the GraphQL cost extension.

use async_trait::async_trait;
use glossa_core::{BudgetProbe, GlossaError, Result};
use reqwest::Client;
use serde_json::json;

use crate::config::ShopConfig;

/// Points assumed when the remote reports nothing usable.
pub const DEFAULT_BUDGET_POINTS: u32 = 1000;

/// Probes the account's remaining request-cost points with a minimal query.
///
/// The cost extension on any GraphQL response carries
/// `throttleStatus.currentlyAvailable`; older API versions only expose the
/// `X-Shopify-Shop-Api-Call-Limit: used/total` header, which is used as a
/// fallback. A response with neither is treated as a full budget so the
/// pipeline never stalls on a blind spot.
pub struct GraphqlCostProbe {
    client: Client,
    config: ShopConfig,
}

impl GraphqlCostProbe {
    pub fn new(config: ShopConfig) -> Result<Self> {
        let client = Client::builder()
            .build()
            .map_err(|e| GlossaError::Remote(format!("Failed to create HTTP client: {}", e)))?;
        Ok(Self { client, config })
    }
}

/// Parse `used/total` into remaining points.
fn parse_call_limit_header(value: &str) -> Option<u32> {
    let (used, total) = value.split_once('/')?;
    let used: u32 = used.trim().parse().ok()?;
    let total: u32 = total.trim().parse().ok()?;
    Some(total.saturating_sub(used))
}

#[async_trait]
impl BudgetProbe for GraphqlCostProbe {
    async fn probe_available(&self) -> Result<u32> {
        let url = format!("{}/graphql.json", self.config.api_root());
        let body = json!({ "query": "query { shop { id } }" });

        let response = self
            .client
            .post(&url)
            .header("X-Shopify-Access-Token", &self.config.access_token)
            .json(&body)
            .send()
            .await
            .map_err(|e| GlossaError::Remote(format!("Budget probe failed: {}", e)))?;

        if !response.status().is_success() {
            return Err(GlossaError::Remote(format!(
                "Budget probe error: HTTP {}",
                response.status()
            )));
        }

        let header_available = response
            .headers()
            .get("X-Shopify-Shop-Api-Call-Limit")
            .and_then(|v| v.to_str().ok())
            .and_then(parse_call_limit_header);

        let payload: serde_json::Value = response
            .json()
            .await
            .map_err(|e| GlossaError::Remote(format!("Failed to parse probe response: {}", e)))?;

        let available = payload["extensions"]["cost"]["throttleStatus"]["currentlyAvailable"]
            .as_f64()
            .map(|v| v.max(0.0) as u32)
            .or(header_available)
            .unwrap_or(DEFAULT_BUDGET_POINTS);

        glossa_telemetry::debug!(available, "Budget probe");
        Ok(available)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_call_limit_header_parsing() {
        assert_eq!(parse_call_limit_header("32/40"), Some(8));
        assert_eq!(parse_call_limit_header(" 5 / 40 "), Some(35));
        assert_eq!(parse_call_limit_header("garbage"), None);
        assert_eq!(parse_call_limit_header("50/40"), Some(0));
    }
}
