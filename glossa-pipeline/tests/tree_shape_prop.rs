//! Property tests: tree translation never disturbs structure.

use std::sync::Arc;

use glossa_pipeline::{FieldClassifier, KeyPolicy, TreeTranslator};
use glossa_provider::{MockProvider, ProviderChain};
use proptest::prelude::*;
use serde_json::Value;

fn arb_tree() -> impl Strategy<Value = Value> {
    let leaf = prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i64>().prop_map(|n| Value::Number(n.into())),
        "[a-z ]{0,12}".prop_map(Value::String),
    ];
    leaf.prop_recursive(4, 32, 6, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..6).prop_map(Value::Array),
            prop::collection::btree_map("[a-zA-Z_]{1,10}", inner, 0..6)
                .prop_map(|entries| Value::Object(entries.into_iter().collect())),
        ]
    })
}

/// Structural equivalence under the value-only policy: identical variants,
/// array lengths, object key sets and scalar values; only strings under
/// translatable keys may differ.
fn same_shape(classifier: &FieldClassifier, input: &Value, output: &Value) -> bool {
    use glossa_core::FieldClassification;

    match (input, output) {
        (Value::String(_), Value::String(_)) => true,
        (Value::Array(a), Value::Array(b)) => {
            a.len() == b.len()
                && a.iter().zip(b).all(|(x, y)| same_shape(classifier, x, y))
        }
        (Value::Object(a), Value::Object(b)) => {
            a.len() == b.len()
                && a.iter().all(|(key, value)| match b.get(key) {
                    Some(translated) => match classifier.classify(key) {
                        FieldClassification::Skip => value == translated,
                        _ => same_shape(classifier, value, translated),
                    },
                    None => false,
                })
        }
        (a, b) => a == b,
    }
}

fn translate_blocking(tree: &Value) -> Value {
    let chain =
        ProviderChain::new(vec![Arc::new(MockProvider::uppercase("mock")) as _]).unwrap();
    let translator =
        TreeTranslator::new(FieldClassifier::new(KeyPolicy::ValueOnly), Arc::new(chain));

    tokio::runtime::Builder::new_current_thread()
        .enable_time()
        .build()
        .unwrap()
        .block_on(translator.translate(tree, "en", "fr"))
}

proptest! {
    #[test]
    fn translation_preserves_tree_shape(tree in arb_tree()) {
        let output = translate_blocking(&tree);
        let classifier = FieldClassifier::new(KeyPolicy::ValueOnly);
        prop_assert!(same_shape(&classifier, &tree, &output));
    }

    #[test]
    fn translation_is_infallible_on_arbitrary_trees(tree in arb_tree()) {
        // Even with a failing backend, the fallback marker keeps the walk total.
        let chain =
            ProviderChain::new(vec![Arc::new(MockProvider::failing("down")) as _]).unwrap();
        let translator =
            TreeTranslator::new(FieldClassifier::new(KeyPolicy::ValueOnly), Arc::new(chain));

        let output = tokio::runtime::Builder::new_current_thread()
            .enable_time()
            .build()
            .unwrap()
            .block_on(translator.translate(&tree, "en", "fr"));

        let classifier = FieldClassifier::new(KeyPolicy::ValueOnly);
        prop_assert!(same_shape(&classifier, &tree, &output));
    }
}
