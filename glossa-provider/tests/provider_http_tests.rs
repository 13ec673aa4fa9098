//! HTTP-level tests for the translation backends, run against a local mock
//! server so no vendor credentials are needed.

use std::sync::Arc;

use glossa_core::TranslationProvider;
use glossa_provider::{
    AzureConfig, AzureTranslate, DeepL, DeepLConfig, GoogleTranslate, GoogleTranslateConfig,
    MyMemory, ProviderChain, YandexConfig, YandexTranslate,
};
use serde_json::json;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn google_parses_translated_text() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/language/translate/v2"))
        .and(query_param("key", "test-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": { "translations": [ { "translatedText": "Bonjour le monde" } ] }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let backend = GoogleTranslate::new(
        GoogleTranslateConfig::new("test-key").with_base_url(server.uri()),
    )
    .unwrap();

    let out = backend.translate("Hello world", "en", "fr").await.unwrap();
    assert_eq!(out, "Bonjour le monde");
}

#[tokio::test]
async fn deepl_sends_auth_header_and_parses_response() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v2/translate"))
        .and(header("Authorization", "DeepL-Auth-Key secret"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "translations": [ { "detected_source_language": "EN", "text": "Guten Tag" } ]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let backend = DeepL::new(DeepLConfig::new("secret").with_base_url(server.uri())).unwrap();
    let out = backend.translate("Good day", "en", "de").await.unwrap();
    assert_eq!(out, "Guten Tag");
}

#[tokio::test]
async fn azure_sends_subscription_headers_and_parses_response() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/translate"))
        .and(query_param("api-version", "3.0"))
        .and(query_param("from", "en"))
        .and(query_param("to", "de"))
        .and(header("Ocp-Apim-Subscription-Key", "az-key"))
        .and(header("Ocp-Apim-Subscription-Region", "global"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "translations": [ { "text": "Hallo Welt", "to": "de" } ] }
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let backend =
        AzureTranslate::new(AzureConfig::new("az-key").with_base_url(server.uri())).unwrap();
    let out = backend.translate("Hello world", "en", "de").await.unwrap();
    assert_eq!(out, "Hallo Welt");
}

#[tokio::test]
async fn yandex_success_and_error_paths() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/translate/v2/translate"))
        .and(header("Authorization", "Api-Key yk"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "translations": [ { "text": "Привет" } ]
        })))
        .mount(&server)
        .await;

    let backend =
        YandexTranslate::new(YandexConfig::new("yk", "folder1").with_base_url(server.uri()))
            .unwrap();
    assert_eq!(backend.translate("Hello", "en", "ru").await.unwrap(), "Привет");

    // Non-2xx must surface as a provider error, not a panic.
    let failing = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(401).set_body_string("unauthorized"))
        .mount(&failing)
        .await;
    let backend =
        YandexTranslate::new(YandexConfig::new("bad", "folder1").with_base_url(failing.uri()))
            .unwrap();
    let err = backend.translate("Hello", "en", "ru").await.unwrap_err();
    assert!(err.to_string().contains("401"));
}

#[tokio::test]
async fn mymemory_rejects_in_band_failure() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/get"))
        .and(query_param("langpair", "en|fr"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "responseStatus": 403,
            "responseData": { "translatedText": "INVALID LANGUAGE PAIR" }
        })))
        .mount(&server)
        .await;

    let backend = MyMemory::new().unwrap().with_base_url(server.uri());
    let err = backend.translate("Hello", "en", "fr").await.unwrap_err();
    assert!(err.to_string().contains("403"));
}

#[tokio::test]
async fn chain_falls_back_across_real_http_backends() {
    // First backend times out at the HTTP layer (500), second succeeds.
    let broken = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(500).set_body_string("internal"))
        .mount(&broken)
        .await;

    let healthy = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/get"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "responseStatus": 200,
            "responseData": { "translatedText": "Bonjour" }
        })))
        .mount(&healthy)
        .await;

    let chain = ProviderChain::new(vec![
        Arc::new(DeepL::new(DeepLConfig::new("k").with_base_url(broken.uri())).unwrap()) as _,
        Arc::new(MyMemory::new().unwrap().with_base_url(healthy.uri())) as _,
    ])
    .unwrap();

    assert_eq!(chain.translate_text("Hello", "en", "fr").await, "Bonjour");
}
