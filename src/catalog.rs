// Feature catalog: the ordered set of product capabilities to mine for.
//
// Loaded from a JSON object mapping feature name to a description and
// keyword list:
//
//   {
//     "quick login": { "desc": "...", "keywords": ["登录", "login"] },
//     ...
//   }
//
// Declaration order is significant: it fixes the evidence output order and
// breaks summary ties, so the file is parsed with serde_json's
// preserve_order map rather than a sorted one.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

/// One feature entry as it appears in the catalog file. Both keys are
/// optional; a feature with no keywords simply yields zero mentions.
#[derive(Debug, Deserialize)]
struct FeatureSpec {
    #[serde(default)]
    desc: String,
    #[serde(default)]
    keywords: Vec<String>,
}

/// A named product capability with its search keywords.
#[derive(Debug, Clone)]
pub struct FeatureDefinition {
    pub name: String,
    pub description: String,
    pub keywords: Vec<String>,
}

/// The full catalog, in declaration order.
#[derive(Debug, Clone, Default)]
pub struct FeatureCatalog {
    features: Vec<FeatureDefinition>,
}

impl FeatureCatalog {
    /// Parse a catalog from JSON text. An unparseable document or a feature
    /// value that is not an object is a hard error; missing `desc` or
    /// `keywords` keys within a feature are not.
    pub fn from_json(json: &str) -> Result<Self> {
        let entries: serde_json::Map<String, serde_json::Value> =
            serde_json::from_str(json).context("feature catalog is not a valid JSON object")?;

        let mut features = Vec::with_capacity(entries.len());
        for (name, value) in entries {
            let spec: FeatureSpec = serde_json::from_value(value)
                .with_context(|| format!("invalid definition for feature '{name}'"))?;
            features.push(FeatureDefinition {
                name,
                description: spec.desc,
                keywords: spec.keywords,
            });
        }

        Ok(Self { features })
    }

    /// Load a catalog from a JSON file.
    pub fn load(path: &Path) -> Result<Self> {
        let json = fs::read_to_string(path)
            .with_context(|| format!("failed to read feature catalog: {}", path.display()))?;
        Self::from_json(&json)
    }

    pub fn features(&self) -> &[FeatureDefinition] {
        &self.features
    }

    pub fn len(&self) -> usize {
        self.features.len()
    }

    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_declaration_order_preserved() {
        let catalog = FeatureCatalog::from_json(
            r#"{
                "zeta": { "desc": "z", "keywords": ["z"] },
                "alpha": { "desc": "a", "keywords": ["a"] },
                "mid": { "desc": "m", "keywords": ["m"] }
            }"#,
        )
        .unwrap();
        let names: Vec<&str> = catalog.features().iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, ["zeta", "alpha", "mid"]);
    }

    #[test]
    fn test_missing_keywords_defaults_to_empty() {
        let catalog = FeatureCatalog::from_json(r#"{ "login": { "desc": "d" } }"#).unwrap();
        assert!(catalog.features()[0].keywords.is_empty());
        assert_eq!(catalog.features()[0].description, "d");
    }

    #[test]
    fn test_missing_desc_defaults_to_empty() {
        let catalog =
            FeatureCatalog::from_json(r#"{ "login": { "keywords": ["登录"] } }"#).unwrap();
        assert_eq!(catalog.features()[0].description, "");
        assert_eq!(catalog.features()[0].keywords, ["登录"]);
    }

    #[test]
    fn test_invalid_document_is_an_error() {
        assert!(FeatureCatalog::from_json("not json").is_err());
        assert!(FeatureCatalog::from_json(r#"["a", "b"]"#).is_err());
    }

    #[test]
    fn test_non_object_feature_value_is_an_error() {
        let result = FeatureCatalog::from_json(r#"{ "login": "just a string" }"#);
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("login"));
    }
}
