//! Yandex Cloud Translate (v2) backend.

use async_trait::async_trait;
use glossa_core::{GlossaError, Result, TranslationProvider};
use reqwest::Client;
use serde::{Deserialize, Serialize};

/// Default Yandex Translate API base URL.
pub const YANDEX_API_BASE: &str = "https://translate.api.cloud.yandex.net";

/// Configuration for the Yandex Cloud Translate backend.
///
/// Yandex scopes requests to a cloud folder, so a `folder_id` is required in
/// addition to the API key.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct YandexConfig {
    /// Service account API key, sent as `Api-Key <key>`.
    pub api_key: String,
    /// Yandex Cloud folder the requests are billed to.
    pub folder_id: String,
    /// Optional custom base URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
}

impl YandexConfig {
    pub fn new(api_key: impl Into<String>, folder_id: impl Into<String>) -> Self {
        Self { api_key: api_key.into(), folder_id: folder_id.into(), base_url: None }
    }

    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    pub fn effective_base_url(&self) -> &str {
        self.base_url.as_deref().unwrap_or(YANDEX_API_BASE)
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct TranslateRequest<'a> {
    folder_id: &'a str,
    texts: [&'a str; 1],
    source_language_code: &'a str,
    target_language_code: &'a str,
}

#[derive(Deserialize)]
struct TranslateResponse {
    translations: Vec<Translation>,
}

#[derive(Deserialize)]
struct Translation {
    text: String,
}

pub struct YandexTranslate {
    client: Client,
    config: YandexConfig,
}

impl YandexTranslate {
    pub fn new(config: YandexConfig) -> Result<Self> {
        let client = Client::builder()
            .build()
            .map_err(|e| GlossaError::Provider(format!("Failed to create HTTP client: {}", e)))?;
        Ok(Self { client, config })
    }

    fn api_url(&self) -> String {
        format!(
            "{}/translate/v2/translate",
            self.config.effective_base_url().trim_end_matches('/')
        )
    }
}

#[async_trait]
impl TranslationProvider for YandexTranslate {
    fn name(&self) -> &str {
        "yandex"
    }

    async fn translate(&self, text: &str, source_lang: &str, target_lang: &str) -> Result<String> {
        let body = TranslateRequest {
            folder_id: &self.config.folder_id,
            texts: [text],
            source_language_code: source_lang,
            target_language_code: target_lang,
        };

        let response = self
            .client
            .post(self.api_url())
            .header("Authorization", format!("Api-Key {}", self.config.api_key))
            .json(&body)
            .send()
            .await
            .map_err(|e| GlossaError::Provider(format!("Yandex API request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            return Err(GlossaError::Provider(format!(
                "Yandex API error ({}): {}",
                status, error_text
            )));
        }

        let parsed: TranslateResponse = response
            .json()
            .await
            .map_err(|e| GlossaError::Provider(format!("Failed to parse Yandex response: {}", e)))?;

        parsed
            .translations
            .into_iter()
            .next()
            .map(|t| t.text)
            .ok_or_else(|| GlossaError::Provider("Yandex response had no translations".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_uses_camel_case_fields() {
        let body = TranslateRequest {
            folder_id: "f1",
            texts: ["hello"],
            source_language_code: "en",
            target_language_code: "fr",
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["folderId"], "f1");
        assert_eq!(json["targetLanguageCode"], "fr");
    }
}
