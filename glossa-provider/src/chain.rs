//! Ordered provider fallback.

use std::sync::Arc;

use glossa_core::{GlossaError, Result, TranslationProvider};

/// Translates one string through an ordered list of backends, falling through
/// on any failure. When every backend fails, the output is a visible
/// `"[<TARGET>] <original>"` marker instead of an error: silent failure would
/// leave untranslated content indistinguishable from success downstream.
///
/// This layer never retries a backend; retry on throttling belongs to the
/// orchestrator's write-back path.
pub struct ProviderChain {
    providers: Vec<Arc<dyn TranslationProvider>>,
}

impl std::fmt::Debug for ProviderChain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProviderChain")
            .field("providers", &self.provider_names())
            .finish()
    }
}

impl ProviderChain {
    /// Build a chain from backends in priority order.
    pub fn new(providers: Vec<Arc<dyn TranslationProvider>>) -> Result<Self> {
        if providers.is_empty() {
            return Err(GlossaError::Config("provider chain must not be empty".to_string()));
        }
        Ok(Self { providers })
    }

    /// Backend names in the order they are tried.
    pub fn provider_names(&self) -> Vec<&str> {
        self.providers.iter().map(|p| p.name()).collect()
    }

    /// Translate one string. Never fails and never returns an empty string
    /// for non-empty input.
    ///
    /// Empty or whitespace-only input is returned unchanged without touching
    /// any backend.
    pub async fn translate_text(&self, text: &str, source_lang: &str, target_lang: &str) -> String {
        if text.trim().is_empty() {
            return text.to_string();
        }

        for provider in &self.providers {
            match provider.translate(text, source_lang, target_lang).await {
                Ok(translated) if !translated.is_empty() => return translated,
                Ok(_) => {
                    glossa_telemetry::warn!(
                        provider = provider.name(),
                        "Provider returned empty translation; falling through"
                    );
                }
                Err(error) => {
                    glossa_telemetry::warn!(
                        provider = provider.name(),
                        error = %error,
                        "Provider failed; falling through"
                    );
                }
            }
        }

        fallback_marker(text, target_lang)
    }
}

/// Deterministic terminal fallback: `"[FR] some text"`.
pub fn fallback_marker(text: &str, target_lang: &str) -> String {
    format!("[{}] {}", target_lang.to_uppercase(), text)
}
