//! Google Cloud Translation (v2) backend.

use async_trait::async_trait;
use glossa_core::{GlossaError, Result, TranslationProvider};
use reqwest::Client;
use serde::{Deserialize, Serialize};

/// Default Cloud Translation API base URL.
pub const GOOGLE_TRANSLATE_API_BASE: &str = "https://translation.googleapis.com";

/// Configuration for the Google Cloud Translation backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GoogleTranslateConfig {
    /// API key passed as the `key` query parameter.
    pub api_key: String,
    /// Optional custom base URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
}

impl GoogleTranslateConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self { api_key: api_key.into(), base_url: None }
    }

    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Get the effective base URL.
    pub fn effective_base_url(&self) -> &str {
        self.base_url.as_deref().unwrap_or(GOOGLE_TRANSLATE_API_BASE)
    }
}

#[derive(Serialize)]
struct TranslateRequest<'a> {
    q: &'a str,
    source: &'a str,
    target: &'a str,
    format: &'a str,
}

#[derive(Deserialize)]
struct TranslateResponse {
    data: TranslateData,
}

#[derive(Deserialize)]
struct TranslateData {
    translations: Vec<Translation>,
}

#[derive(Deserialize)]
struct Translation {
    #[serde(rename = "translatedText")]
    translated_text: String,
}

pub struct GoogleTranslate {
    client: Client,
    config: GoogleTranslateConfig,
}

impl GoogleTranslate {
    pub fn new(config: GoogleTranslateConfig) -> Result<Self> {
        let client = Client::builder()
            .build()
            .map_err(|e| GlossaError::Provider(format!("Failed to create HTTP client: {}", e)))?;
        Ok(Self { client, config })
    }

    fn api_url(&self) -> String {
        format!(
            "{}/language/translate/v2",
            self.config.effective_base_url().trim_end_matches('/')
        )
    }
}

#[async_trait]
impl TranslationProvider for GoogleTranslate {
    fn name(&self) -> &str {
        "google"
    }

    async fn translate(&self, text: &str, source_lang: &str, target_lang: &str) -> Result<String> {
        let body = TranslateRequest { q: text, source: source_lang, target: target_lang, format: "text" };

        let response = self
            .client
            .post(self.api_url())
            .query(&[("key", self.config.api_key.as_str())])
            .json(&body)
            .send()
            .await
            .map_err(|e| GlossaError::Provider(format!("Google API request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            return Err(GlossaError::Provider(format!(
                "Google API error ({}): {}",
                status, error_text
            )));
        }

        let parsed: TranslateResponse = response
            .json()
            .await
            .map_err(|e| GlossaError::Provider(format!("Failed to parse Google response: {}", e)))?;

        parsed
            .data
            .translations
            .into_iter()
            .next()
            .map(|t| t.translated_text)
            .ok_or_else(|| GlossaError::Provider("Google response had no translations".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_url_from_custom_base() {
        let config = GoogleTranslateConfig::new("k").with_base_url("http://localhost:9999/");
        let backend = GoogleTranslate::new(config).unwrap();
        assert_eq!(backend.api_url(), "http://localhost:9999/language/translate/v2");
    }

    #[test]
    fn test_response_parsing() {
        let raw = r#"{"data":{"translations":[{"translatedText":"Bonjour"}]}}"#;
        let parsed: TranslateResponse = serde_json::from_str(raw).unwrap();
        assert_eq!(parsed.data.translations[0].translated_text, "Bonjour");
    }
}
