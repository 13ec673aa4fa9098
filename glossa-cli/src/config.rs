//! Environment-driven configuration for the CLI.

use std::sync::Arc;

use anyhow::{bail, Context, Result};
use glossa_core::TranslationProvider;
use glossa_provider::{
    AzureConfig, AzureTranslate, DeepL, DeepLConfig, GoogleTranslate, GoogleTranslateConfig,
    MyMemory, ProviderChain, YandexConfig, YandexTranslate,
};
use glossa_remote::ShopConfig;

/// Everything the CLI reads from the environment. Shop credentials are
/// required; each translation backend is enabled only when its key is set.
pub struct EnvConfig {
    pub shop_domain: String,
    pub access_token: String,
    pub google_api_key: Option<String>,
    pub deepl_api_key: Option<String>,
    pub azure_api_key: Option<String>,
    pub azure_region: Option<String>,
    pub yandex_api_key: Option<String>,
    pub yandex_folder_id: Option<String>,
}

fn optional(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.trim().is_empty())
}

impl EnvConfig {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            shop_domain: std::env::var("GLOSSA_SHOP")
                .context("GLOSSA_SHOP is not set (e.g. my-store.myshopify.com)")?,
            access_token: std::env::var("GLOSSA_ACCESS_TOKEN")
                .context("GLOSSA_ACCESS_TOKEN is not set")?,
            google_api_key: optional("GOOGLE_TRANSLATE_API_KEY"),
            deepl_api_key: optional("DEEPL_API_KEY"),
            azure_api_key: optional("AZURE_TRANSLATOR_API_KEY"),
            azure_region: optional("AZURE_TRANSLATOR_REGION"),
            yandex_api_key: optional("YANDEX_API_KEY"),
            yandex_folder_id: optional("YANDEX_FOLDER_ID"),
        })
    }

    pub fn shop_config(&self) -> ShopConfig {
        ShopConfig::new(&self.shop_domain, &self.access_token)
    }

    /// Assemble the provider chain in the requested priority order.
    ///
    /// Backends without credentials are skipped with a warning rather than
    /// failing the run; an unknown backend name is an error.
    pub fn build_chain(&self, order: &str) -> Result<ProviderChain> {
        let mut providers: Vec<Arc<dyn TranslationProvider>> = Vec::new();

        for name in order.split(',').map(str::trim).filter(|n| !n.is_empty()) {
            match name.to_lowercase().as_str() {
                "google" => match &self.google_api_key {
                    Some(key) => providers
                        .push(Arc::new(GoogleTranslate::new(GoogleTranslateConfig::new(key))?)),
                    None => tracing::warn!("GOOGLE_TRANSLATE_API_KEY not set; skipping google"),
                },
                "deepl" => match &self.deepl_api_key {
                    Some(key) => providers.push(Arc::new(DeepL::new(DeepLConfig::new(key))?)),
                    None => tracing::warn!("DEEPL_API_KEY not set; skipping deepl"),
                },
                "azure" => match &self.azure_api_key {
                    Some(key) => {
                        let mut config = AzureConfig::new(key);
                        if let Some(region) = &self.azure_region {
                            config = config.with_region(region);
                        }
                        providers.push(Arc::new(AzureTranslate::new(config)?));
                    }
                    None => tracing::warn!("AZURE_TRANSLATOR_API_KEY not set; skipping azure"),
                },
                "yandex" => match (&self.yandex_api_key, &self.yandex_folder_id) {
                    (Some(key), Some(folder)) => {
                        providers.push(Arc::new(YandexTranslate::new(YandexConfig::new(key, folder))?))
                    }
                    _ => tracing::warn!(
                        "YANDEX_API_KEY or YANDEX_FOLDER_ID not set; skipping yandex"
                    ),
                },
                "mymemory" => providers.push(Arc::new(MyMemory::new()?)),
                other => bail!("unknown translation backend '{other}'"),
            }
        }

        ProviderChain::new(providers)
            .context("no usable translation backend; set at least one API key or add 'mymemory'")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bare_config() -> EnvConfig {
        EnvConfig {
            shop_domain: "demo.myshopify.com".to_string(),
            access_token: "tok".to_string(),
            google_api_key: None,
            deepl_api_key: None,
            azure_api_key: None,
            azure_region: None,
            yandex_api_key: None,
            yandex_folder_id: None,
        }
    }

    #[test]
    fn test_keyless_backends_are_skipped() {
        let chain = bare_config().build_chain("google,deepl,azure,mymemory").unwrap();
        // Only mymemory survives without credentials.
        assert_eq!(chain.provider_names(), vec!["mymemory"]);
    }

    #[test]
    fn test_unknown_backend_is_rejected() {
        assert!(bare_config().build_chain("google,babelfish").is_err());
    }

    #[test]
    fn test_empty_chain_is_an_error() {
        assert!(bare_config().build_chain("google,deepl").is_err());
    }
}
