//! MyMemory backend. Keyless, so it makes a good last resort before the
//! deterministic fallback marker.

use async_trait::async_trait;
use glossa_core::{GlossaError, Result, TranslationProvider};
use reqwest::Client;
use serde::Deserialize;

/// Default MyMemory API base URL.
pub const MYMEMORY_API_BASE: &str = "https://api.mymemory.translated.net";

#[derive(Deserialize)]
struct TranslateResponse {
    #[serde(rename = "responseStatus")]
    response_status: i64,
    #[serde(rename = "responseData")]
    response_data: ResponseData,
}

#[derive(Deserialize)]
struct ResponseData {
    #[serde(rename = "translatedText")]
    translated_text: String,
}

pub struct MyMemory {
    client: Client,
    base_url: Option<String>,
}

impl MyMemory {
    pub fn new() -> Result<Self> {
        let client = Client::builder()
            .build()
            .map_err(|e| GlossaError::Provider(format!("Failed to create HTTP client: {}", e)))?;
        Ok(Self { client, base_url: None })
    }

    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    fn api_url(&self) -> String {
        let base = self.base_url.as_deref().unwrap_or(MYMEMORY_API_BASE);
        format!("{}/get", base.trim_end_matches('/'))
    }
}

#[async_trait]
impl TranslationProvider for MyMemory {
    fn name(&self) -> &str {
        "mymemory"
    }

    async fn translate(&self, text: &str, source_lang: &str, target_lang: &str) -> Result<String> {
        let langpair = format!("{}|{}", source_lang, target_lang);

        let response = self
            .client
            .get(self.api_url())
            .query(&[("q", text), ("langpair", &langpair)])
            .send()
            .await
            .map_err(|e| GlossaError::Provider(format!("MyMemory request failed: {}", e)))?;

        if !response.status().is_success() {
            return Err(GlossaError::Provider(format!(
                "MyMemory error: HTTP {}",
                response.status()
            )));
        }

        let parsed: TranslateResponse = response.json().await.map_err(|e| {
            GlossaError::Provider(format!("Failed to parse MyMemory response: {}", e))
        })?;

        // MyMemory reports failures in-band with a 200 wrapper.
        if parsed.response_status != 200 {
            return Err(GlossaError::Provider(format!(
                "MyMemory translation failed (status {})",
                parsed.response_status
            )));
        }

        Ok(parsed.response_data.translated_text)
    }
}
