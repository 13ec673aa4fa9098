//! DeepL (free tier) backend.

use async_trait::async_trait;
use glossa_core::{GlossaError, Result, TranslationProvider};
use reqwest::Client;
use serde::{Deserialize, Serialize};

/// Default DeepL API base URL (free plan).
pub const DEEPL_API_BASE: &str = "https://api-free.deepl.com";

/// Configuration for the DeepL backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeepLConfig {
    /// DeepL auth key, sent as `DeepL-Auth-Key <key>`.
    pub api_key: String,
    /// Optional custom base URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
}

impl DeepLConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self { api_key: api_key.into(), base_url: None }
    }

    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    pub fn effective_base_url(&self) -> &str {
        self.base_url.as_deref().unwrap_or(DEEPL_API_BASE)
    }
}

#[derive(Serialize)]
struct TranslateRequest<'a> {
    text: [&'a str; 1],
    source_lang: String,
    target_lang: String,
}

#[derive(Deserialize)]
struct TranslateResponse {
    translations: Vec<Translation>,
}

#[derive(Deserialize)]
struct Translation {
    text: String,
}

pub struct DeepL {
    client: Client,
    config: DeepLConfig,
}

impl DeepL {
    pub fn new(config: DeepLConfig) -> Result<Self> {
        let client = Client::builder()
            .build()
            .map_err(|e| GlossaError::Provider(format!("Failed to create HTTP client: {}", e)))?;
        Ok(Self { client, config })
    }

    fn api_url(&self) -> String {
        format!("{}/v2/translate", self.config.effective_base_url().trim_end_matches('/'))
    }
}

#[async_trait]
impl TranslationProvider for DeepL {
    fn name(&self) -> &str {
        "deepl"
    }

    async fn translate(&self, text: &str, source_lang: &str, target_lang: &str) -> Result<String> {
        // DeepL wants upper-cased language codes ("EN", "FR").
        let body = TranslateRequest {
            text: [text],
            source_lang: source_lang.to_uppercase(),
            target_lang: target_lang.to_uppercase(),
        };

        let response = self
            .client
            .post(self.api_url())
            .header("Authorization", format!("DeepL-Auth-Key {}", self.config.api_key))
            .json(&body)
            .send()
            .await
            .map_err(|e| GlossaError::Provider(format!("DeepL API request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            return Err(GlossaError::Provider(format!(
                "DeepL API error ({}): {}",
                status, error_text
            )));
        }

        let parsed: TranslateResponse = response
            .json()
            .await
            .map_err(|e| GlossaError::Provider(format!("Failed to parse DeepL response: {}", e)))?;

        parsed
            .translations
            .into_iter()
            .next()
            .map(|t| t.text)
            .ok_or_else(|| GlossaError::Provider("DeepL response had no translations".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_language_codes_upper_cased() {
        let body = TranslateRequest {
            text: ["hi"],
            source_lang: "en".to_uppercase(),
            target_lang: "fr".to_uppercase(),
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["source_lang"], "EN");
        assert_eq!(json["target_lang"], "FR");
    }
}
