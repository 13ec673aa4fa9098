//! Recursive translation of JSON content trees.

use std::sync::Arc;

use futures::future::{join_all, BoxFuture};
use glossa_core::FieldClassification;
use glossa_provider::ProviderChain;
use serde_json::{Map, Value};

use crate::classify::FieldClassifier;

/// Walks arbitrary JSON, translating string leaves and (per classification)
/// mapping keys, preserving structure exactly: arrays keep their length and
/// order, objects keep their entry count except on key collisions, and
/// non-string scalars pass through untouched.
///
/// When two distinct keys translate to the same target key, the later entry
/// in iteration order wins; collisions are not disambiguated.
pub struct TreeTranslator {
    classifier: FieldClassifier,
    chain: Arc<ProviderChain>,
}

impl TreeTranslator {
    pub fn new(classifier: FieldClassifier, chain: Arc<ProviderChain>) -> Self {
        Self { classifier, chain }
    }

    /// Translate a whole tree. Infallible: string translation bottoms out in
    /// the provider chain's deterministic fallback.
    pub async fn translate(&self, tree: &Value, source_lang: &str, target_lang: &str) -> Value {
        self.walk(tree, source_lang, target_lang).await
    }

    fn walk<'a>(&'a self, node: &'a Value, src: &'a str, tgt: &'a str) -> BoxFuture<'a, Value> {
        Box::pin(async move {
            match node {
                Value::String(text) => {
                    Value::String(self.chain.translate_text(text, src, tgt).await)
                }
                // Siblings are independent; translate them concurrently and
                // reassemble in order.
                Value::Array(items) => {
                    let translated =
                        join_all(items.iter().map(|item| self.walk(item, src, tgt))).await;
                    Value::Array(translated)
                }
                Value::Object(entries) => {
                    let mut translated = Map::with_capacity(entries.len());
                    for (key, value) in entries {
                        match self.classifier.classify(key) {
                            FieldClassification::Skip => {
                                translated.insert(key.clone(), value.clone());
                            }
                            FieldClassification::TranslateValueOnly => {
                                translated.insert(key.clone(), self.walk(value, src, tgt).await);
                            }
                            FieldClassification::TranslateKeyAndValue => {
                                let translated_key = self.chain.translate_text(key, src, tgt).await;
                                let translated_value = self.walk(value, src, tgt).await;
                                translated.insert(translated_key, translated_value);
                            }
                        }
                    }
                    Value::Object(translated)
                }
                // Numbers, bools, null.
                other => other.clone(),
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::KeyPolicy;
    use glossa_provider::MockProvider;
    use serde_json::json;

    fn uppercase_translator(policy: KeyPolicy) -> TreeTranslator {
        let chain =
            ProviderChain::new(vec![Arc::new(MockProvider::uppercase("mock")) as _]).unwrap();
        TreeTranslator::new(FieldClassifier::new(policy), Arc::new(chain))
    }

    #[tokio::test]
    async fn translates_product_specification_scenario() {
        let translator = uppercase_translator(KeyPolicy::KeyAndValue);
        let input = json!({ "Brand": ["Acme"], "price": 10, "Notes": "Good" });

        let output = translator.translate(&input, "en", "fr").await;

        // "Brand" is on the always list: key and value translated.
        assert_eq!(output["BRAND"], json!(["ACME"]));
        // "price" is on the skip list: untouched, number intact.
        assert_eq!(output["price"], json!(10));
        // "Notes" matches nothing: key and value translated.
        assert_eq!(output["NOTES"], json!("GOOD"));
        assert_eq!(output.as_object().unwrap().len(), 3);
    }

    #[tokio::test]
    async fn skip_subtrees_pass_through_unchanged() {
        let translator = uppercase_translator(KeyPolicy::KeyAndValue);
        let input = json!({
            "image_urls": { "main": "https://cdn.example/a.png", "alt": ["x", "y"] },
            "description": "Wireless"
        });

        let output = translator.translate(&input, "en", "de").await;
        // The whole subtree under a skip key is byte-identical, at any depth.
        assert_eq!(output["image_urls"], input["image_urls"]);
        assert_eq!(output["DESCRIPTION"], json!("WIRELESS"));
    }

    #[tokio::test]
    async fn value_only_policy_keeps_keys_stable() {
        let translator = uppercase_translator(KeyPolicy::ValueOnly);
        let input = json!({ "Notes": "Good", "features": ["light", "fast"] });

        let output = translator.translate(&input, "en", "fr").await;
        assert_eq!(output["Notes"], json!("GOOD"));
        assert_eq!(output["features"], json!(["LIGHT", "FAST"]));
    }

    #[tokio::test]
    async fn arrays_preserve_length_and_order() {
        let translator = uppercase_translator(KeyPolicy::KeyAndValue);
        let input = json!(["one", 2, "three", null, true]);

        let output = translator.translate(&input, "en", "fr").await;
        assert_eq!(output, json!(["ONE", 2, "THREE", null, true]));
    }

    #[tokio::test]
    async fn key_collision_last_entry_wins() {
        // Both keys translate to "CLEF"; the later entry's value survives.
        let chain = ProviderChain::new(vec![Arc::new(MockProvider::scripted(
            "mock",
            vec!["CLEF", "first value", "CLEF", "second value"],
        )) as _])
        .unwrap();
        let translator = TreeTranslator::new(
            FieldClassifier::new(KeyPolicy::KeyAndValue),
            Arc::new(chain),
        );

        let input = json!({ "keyA": "a", "keyB": "b" });
        let output = translator.translate(&input, "en", "fr").await;

        let object = output.as_object().unwrap();
        assert_eq!(object.len(), 1);
        assert_eq!(object["CLEF"], json!("second value"));
    }

    #[tokio::test]
    async fn scalars_pass_through() {
        let translator = uppercase_translator(KeyPolicy::KeyAndValue);
        assert_eq!(translator.translate(&json!(42), "en", "fr").await, json!(42));
        assert_eq!(translator.translate(&json!(null), "en", "fr").await, json!(null));
    }
}
