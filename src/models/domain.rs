use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// A catalog entry with its descriptive tags
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub name: String,
    pub tags: BTreeSet<String>,
}

impl Product {
    pub fn new<N, I, T>(name: N, tags: I) -> Self
    where
        N: Into<String>,
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        Self {
            name: name.into(),
            tags: tags.into_iter().map(Into::into).collect(),
        }
    }
}

/// Deduplicated customer preferences
///
/// Preferences are collected as a sequence but matched as a set, so repeated
/// entries never count twice.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PreferenceSet(BTreeSet<String>);

impl PreferenceSet {
    pub fn contains(&self, tag: &str) -> bool {
        self.0.contains(tag)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &String> {
        self.0.iter()
    }
}

impl<S: AsRef<str>> FromIterator<S> for PreferenceSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(|s| s.as_ref().to_string()).collect())
    }
}

/// Ranked recommendation result
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recommendation {
    pub name: String,
    pub matches: usize,
}

/// Ordering applied among recommendations with equal match counts
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TieBreak {
    /// Keep the order products appear in the catalog
    #[default]
    CatalogOrder,
    /// Order by product name, ascending
    Name,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preference_set_dedups() {
        let prefs: PreferenceSet = ["durable", "tech", "durable"].into_iter().collect();

        assert_eq!(prefs.len(), 2);
        assert!(prefs.contains("durable"));
        assert!(prefs.contains("tech"));
    }

    #[test]
    fn test_product_tags_are_a_set() {
        let product = Product::new("Widget", ["a", "b", "a"]);
        assert_eq!(product.tags.len(), 2);
    }

    #[test]
    fn test_tie_break_deserializes_snake_case() {
        let tb: TieBreak = serde_json::from_str("\"catalog_order\"").unwrap();
        assert_eq!(tb, TieBreak::CatalogOrder);

        let tb: TieBreak = serde_json::from_str("\"name\"").unwrap();
        assert_eq!(tb, TieBreak::Name);
    }

    #[test]
    fn test_recommendation_serializes() {
        let rec = Recommendation { name: "Smartwatch".to_string(), matches: 1 };
        let json = serde_json::to_string(&rec).unwrap();
        assert_eq!(json, r#"{"name":"Smartwatch","matches":1}"#);
    }
}
