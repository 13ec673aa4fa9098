//! Shop admin API implementation of [`CollectionClient`].
//!
//! Listing and record fetches go through the REST surface; write-back uses the
//! GraphQL `translationsRegister` mutation, which overwrites any existing
//! translation for the same locale/key (re-runs are remote no-ops).

use std::sync::{Arc, OnceLock};
use std::time::Duration;

use async_trait::async_trait;
use glossa_core::{
    BudgetObserver, CollectionClient, GlossaError, RemoteItem, Result, TranslatableRecord,
};
use regex::Regex;
use reqwest::{Client, Response, StatusCode};
use serde::Deserialize;
use serde_json::json;

use crate::config::ShopConfig;

const REGISTER_TRANSLATION_MUTATION: &str = r#"
mutation CreateTranslation($id: ID!, $translations: [TranslationInput!]!) {
  translationsRegister(resourceId: $id, translations: $translations) {
    userErrors {
      message
      field
    }
    translations {
      locale
      key
      value
    }
  }
}
"#;

#[derive(Deserialize)]
struct ProductsResponse {
    products: Vec<Product>,
}

#[derive(Deserialize)]
struct Product {
    id: u64,
    #[serde(default)]
    title: String,
    #[serde(default)]
    handle: String,
}

#[derive(Deserialize)]
struct MetafieldsResponse {
    metafields: Vec<Metafield>,
}

#[derive(Deserialize)]
struct Metafield {
    id: u64,
    namespace: String,
    key: String,
    value: String,
}

pub struct ShopAdminClient {
    client: Client,
    config: ShopConfig,
    observer: Option<Arc<dyn BudgetObserver>>,
}

impl std::fmt::Debug for ShopAdminClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ShopAdminClient")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl ShopAdminClient {
    pub fn new(config: ShopConfig) -> Result<Self> {
        if config.access_token.is_empty() {
            return Err(GlossaError::Config("missing admin API access token".to_string()));
        }
        let client = Client::builder()
            .build()
            .map_err(|e| GlossaError::Remote(format!("Failed to create HTTP client: {}", e)))?;
        Ok(Self { client, config, observer: None })
    }

    /// Feed request-cost metadata from GraphQL responses into a budget sink.
    #[must_use]
    pub fn with_observer(mut self, observer: Arc<dyn BudgetObserver>) -> Self {
        self.observer = Some(observer);
        self
    }

    fn get(&self, url: &str) -> reqwest::RequestBuilder {
        self.client.get(url).header("X-Shopify-Access-Token", &self.config.access_token)
    }

    async fn check_status(response: Response) -> Result<Response> {
        let status = response.status();
        if status == StatusCode::TOO_MANY_REQUESTS {
            let retry_after = parse_retry_after(&response);
            return Err(GlossaError::Throttled { retry_after });
        }
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(GlossaError::Remote(format!(
                "Admin API error ({}): {}",
                status, error_text
            )));
        }
        Ok(response)
    }
}

/// Read the `page_info` cursor out of a `Link: <url>; rel="next"` header.
fn next_page_cursor(link_header: Option<&str>) -> Option<String> {
    static NEXT_LINK: OnceLock<Regex> = OnceLock::new();
    static PAGE_INFO: OnceLock<Regex> = OnceLock::new();

    let link = link_header?;
    let next_re =
        NEXT_LINK.get_or_init(|| Regex::new(r#"<([^>]+)>;\s*rel="next""#).expect("static regex"));
    let url = next_re.captures(link)?.get(1)?.as_str();

    let info_re =
        PAGE_INFO.get_or_init(|| Regex::new(r"[?&]page_info=([^&]+)").expect("static regex"));
    Some(info_re.captures(url)?.get(1)?.as_str().to_string())
}

fn parse_retry_after(response: &Response) -> Option<Duration> {
    response
        .headers()
        .get("Retry-After")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.trim().parse::<f64>().ok())
        .map(Duration::from_secs_f64)
}

#[async_trait]
impl CollectionClient for ShopAdminClient {
    async fn list_page(
        &self,
        cursor: Option<&str>,
        page_size: u32,
    ) -> Result<(Vec<RemoteItem>, Option<String>)> {
        let url = format!("{}/products.json", self.config.api_root());
        let limit = page_size.to_string();
        let mut query = vec![("limit", limit.as_str()), ("fields", "id,title,handle")];
        if let Some(cursor) = cursor {
            query.push(("page_info", cursor));
        }

        let response = self
            .get(&url)
            .query(&query)
            .send()
            .await
            .map_err(|e| GlossaError::Remote(format!("Product listing failed: {}", e)))?;
        let response = Self::check_status(response).await?;

        let next_cursor = next_page_cursor(
            response.headers().get("Link").and_then(|v| v.to_str().ok()),
        );

        let parsed: ProductsResponse = response
            .json()
            .await
            .map_err(|e| GlossaError::Remote(format!("Failed to parse product listing: {}", e)))?;

        let items = parsed
            .products
            .into_iter()
            .map(|p| RemoteItem { id: p.id.to_string(), title: p.title, handle: p.handle })
            .collect();

        Ok((items, next_cursor))
    }

    async fn get_record(
        &self,
        item_id: &str,
        namespace: &str,
        key: &str,
    ) -> Result<Option<TranslatableRecord>> {
        let url = format!("{}/products/{}/metafields.json", self.config.api_root(), item_id);

        let response = self
            .get(&url)
            .send()
            .await
            .map_err(|e| GlossaError::Remote(format!("Metafield fetch failed: {}", e)))?;
        let response = Self::check_status(response).await?;

        let parsed: MetafieldsResponse = response
            .json()
            .await
            .map_err(|e| GlossaError::Remote(format!("Failed to parse metafields: {}", e)))?;

        Ok(parsed
            .metafields
            .into_iter()
            .find(|m| m.namespace == namespace && m.key == key)
            .map(|m| TranslatableRecord {
                owner_item_id: item_id.to_string(),
                field_id: m.id.to_string(),
                namespace: m.namespace,
                key: m.key,
                raw_value: m.value,
            }))
    }

    async fn write_record(&self, field_id: &str, locale: &str, content: &str) -> Result<()> {
        let url = format!("{}/graphql.json", self.config.api_root());
        let body = json!({
            "query": REGISTER_TRANSLATION_MUTATION,
            "variables": {
                "id": format!("gid://shopify/Metafield/{}", field_id),
                "translations": [{
                    "locale": locale,
                    "key": "value",
                    "value": content,
                }],
            },
        });

        let response = self
            .client
            .post(&url)
            .header("X-Shopify-Access-Token", &self.config.access_token)
            .json(&body)
            .send()
            .await
            .map_err(|e| GlossaError::Remote(format!("Translation write failed: {}", e)))?;
        let response = Self::check_status(response).await?;

        let payload: serde_json::Value = response
            .json()
            .await
            .map_err(|e| GlossaError::Remote(format!("Failed to parse write response: {}", e)))?;

        if let Some(observer) = &self.observer {
            if let Some(available) =
                payload["extensions"]["cost"]["throttleStatus"]["currentlyAvailable"].as_f64()
            {
                observer.observe(available.max(0.0) as u32);
            }
        }

        let user_errors = &payload["data"]["translationsRegister"]["userErrors"];
        if let Some(errors) = user_errors.as_array() {
            if !errors.is_empty() {
                return Err(GlossaError::Remote(format!(
                    "translationsRegister rejected: {}",
                    serde_json::to_string(errors).unwrap_or_default()
                )));
            }
        }

        glossa_telemetry::debug!(field_id, locale, "Translation registered");
        Ok(())
    }
}
