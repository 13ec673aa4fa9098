//! Azure Translator (v3) backend.

use async_trait::async_trait;
use glossa_core::{GlossaError, Result, TranslationProvider};
use reqwest::Client;
use serde::{Deserialize, Serialize};

/// Default Azure Translator endpoint.
pub const AZURE_API_BASE: &str = "https://api.cognitive.microsofttranslator.com";

/// Region sent when none is configured.
pub const AZURE_DEFAULT_REGION: &str = "global";

/// Configuration for the Azure Translator backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AzureConfig {
    /// Subscription key (`Ocp-Apim-Subscription-Key`).
    pub api_key: String,
    /// Resource region (`Ocp-Apim-Subscription-Region`).
    pub region: String,
    /// Optional custom base URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
}

impl AzureConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            region: AZURE_DEFAULT_REGION.to_string(),
            base_url: None,
        }
    }

    #[must_use]
    pub fn with_region(mut self, region: impl Into<String>) -> Self {
        self.region = region.into();
        self
    }

    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Get the effective base URL.
    pub fn effective_base_url(&self) -> &str {
        self.base_url.as_deref().unwrap_or(AZURE_API_BASE)
    }
}

#[derive(Serialize)]
struct TranslateItem<'a> {
    text: &'a str,
}

#[derive(Deserialize)]
struct TranslateResult {
    translations: Vec<Translation>,
}

#[derive(Deserialize)]
struct Translation {
    text: String,
}

pub struct AzureTranslate {
    client: Client,
    config: AzureConfig,
}

impl AzureTranslate {
    pub fn new(config: AzureConfig) -> Result<Self> {
        let client = Client::builder()
            .build()
            .map_err(|e| GlossaError::Provider(format!("Failed to create HTTP client: {}", e)))?;
        Ok(Self { client, config })
    }

    fn api_url(&self) -> String {
        format!("{}/translate", self.config.effective_base_url().trim_end_matches('/'))
    }
}

#[async_trait]
impl TranslationProvider for AzureTranslate {
    fn name(&self) -> &str {
        "azure"
    }

    async fn translate(&self, text: &str, source_lang: &str, target_lang: &str) -> Result<String> {
        let body = [TranslateItem { text }];

        let response = self
            .client
            .post(self.api_url())
            .query(&[("api-version", "3.0"), ("from", source_lang), ("to", target_lang)])
            .header("Ocp-Apim-Subscription-Key", &self.config.api_key)
            .header("Ocp-Apim-Subscription-Region", &self.config.region)
            .json(&body)
            .send()
            .await
            .map_err(|e| GlossaError::Provider(format!("Azure API request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            return Err(GlossaError::Provider(format!(
                "Azure API error ({}): {}",
                status, error_text
            )));
        }

        // The response mirrors the request array: one result per input item.
        let parsed: Vec<TranslateResult> = response
            .json()
            .await
            .map_err(|e| GlossaError::Provider(format!("Failed to parse Azure response: {}", e)))?;

        parsed
            .into_iter()
            .next()
            .and_then(|r| r.translations.into_iter().next())
            .map(|t| t.text)
            .ok_or_else(|| GlossaError::Provider("Azure response had no translations".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_url_from_custom_base() {
        let config = AzureConfig::new("k").with_base_url("http://localhost:9999/");
        let backend = AzureTranslate::new(config).unwrap();
        assert_eq!(backend.api_url(), "http://localhost:9999/translate");
    }

    #[test]
    fn test_region_defaults_to_global() {
        assert_eq!(AzureConfig::new("k").region, AZURE_DEFAULT_REGION);
        assert_eq!(AzureConfig::new("k").with_region("westeurope").region, "westeurope");
    }

    #[test]
    fn test_response_parsing() {
        let raw = r#"[{"translations":[{"text":"Hallo","to":"de"}]}]"#;
        let parsed: Vec<TranslateResult> = serde_json::from_str(raw).unwrap();
        assert_eq!(parsed[0].translations[0].text, "Hallo");
    }
}
