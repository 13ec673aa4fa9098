//! Per-key translation rules.

use glossa_core::FieldClassification;

/// Keys worth localizing even though they look like categorical metadata.
/// Checked before the skip rules, so "brand" and "type" translate despite
/// "type" also sitting in the skip list.
pub const DEFAULT_ALWAYS_TRANSLATE: &[&str] = &["brand", "type", "compatibility", "general"];

/// Technical fields that must survive translation byte-identical: ids and
/// codes, urls and media references, prices and dimensions, color codes,
/// timestamps, status/category/tag fields.
pub const DEFAULT_NEVER_TRANSLATE: &[&str] = &[
    "id", "sku", "barcode", "ean", "upc", "isbn", "asin",
    "url", "link", "image", "images", "video", "videos",
    "price", "cost", "weight", "dimensions", "size",
    "color_code", "hex", "rgb", "hsl",
    "date", "time", "timestamp", "created_at", "updated_at",
    "status", "type", "category", "tags", "keywords",
];

/// Whether a "translate this entry" decision covers the key name too.
///
/// Some deployments want translated key names in the stored content; others
/// keep keys stable so round-trip matching against the source stays trivial.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum KeyPolicy {
    /// Translate values only; mapping keys stay as authored.
    ValueOnly,
    /// Translate both the key and the value.
    #[default]
    KeyAndValue,
}

/// Pure, case-insensitive substring classifier over JSON mapping keys.
#[derive(Debug, Clone)]
pub struct FieldClassifier {
    always_translate: Vec<String>,
    never_translate: Vec<String>,
    policy: KeyPolicy,
}

impl Default for FieldClassifier {
    fn default() -> Self {
        Self::new(KeyPolicy::default())
    }
}

impl FieldClassifier {
    pub fn new(policy: KeyPolicy) -> Self {
        Self::with_rules(DEFAULT_ALWAYS_TRANSLATE, DEFAULT_NEVER_TRANSLATE, policy)
    }

    pub fn with_rules(
        always_translate: &[&str],
        never_translate: &[&str],
        policy: KeyPolicy,
    ) -> Self {
        Self {
            always_translate: always_translate.iter().map(|r| r.to_lowercase()).collect(),
            never_translate: never_translate.iter().map(|r| r.to_lowercase()).collect(),
            policy,
        }
    }

    /// Classify one key. Always-translate rules take precedence over the
    /// skip rules; anything matching neither translates.
    pub fn classify(&self, key: &str) -> FieldClassification {
        let key = key.to_lowercase();

        if self.always_translate.iter().any(|rule| key.contains(rule.as_str())) {
            return self.translate_classification();
        }
        if self.never_translate.iter().any(|rule| key.contains(rule.as_str())) {
            return FieldClassification::Skip;
        }
        self.translate_classification()
    }

    fn translate_classification(&self) -> FieldClassification {
        match self.policy {
            KeyPolicy::ValueOnly => FieldClassification::TranslateValueOnly,
            KeyPolicy::KeyAndValue => FieldClassification::TranslateKeyAndValue,
        }
    }
}
