//! Model responses shown side by side in the UI.
//!
//! `ResponseSet` keeps pairs in the order they were supplied. JSON objects are
//! decoded entry by entry, so document order and repeated keys survive.

use anyhow::Context;
use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// One model's answer.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ModelResponse {
    pub model: String,
    pub text: String,
}

/// Ordered mapping from model name to response text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResponseSet {
    items: Vec<ModelResponse>,
}

/// Row of the accordion derived from a `ResponseSet` on every render.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AccordionEntry {
    /// Position of the pair in iteration order
    pub key: usize,
    pub label: String,
    pub body: String,
}

impl ResponseSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a pair. Repeated model names are kept as separate rows.
    pub fn push(&mut self, model: impl Into<String>, text: impl Into<String>) {
        self.items.push(ModelResponse {
            model: model.into(),
            text: text.into(),
        });
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ModelResponse> {
        self.items.iter()
    }

    /// Accordion rows keyed `0..len()` in iteration order.
    pub fn entries(&self) -> Vec<AccordionEntry> {
        self.items
            .iter()
            .enumerate()
            .map(|(key, item)| AccordionEntry {
                key,
                label: item.model.clone(),
                body: item.text.clone(),
            })
            .collect()
    }

    /// Decode a JSON object such as `{"gpt-4o": "Hello"}`.
    pub fn from_json(json: &str) -> anyhow::Result<Self> {
        serde_json::from_str(json).context("Failed to parse model responses")
    }
}

impl<K, V> FromIterator<(K, V)> for ResponseSet
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut set = ResponseSet::new();
        for (model, text) in iter {
            set.push(model, text);
        }
        set
    }
}

impl<K, V> From<Vec<(K, V)>> for ResponseSet
where
    K: Into<String>,
    V: Into<String>,
{
    fn from(pairs: Vec<(K, V)>) -> Self {
        pairs.into_iter().collect()
    }
}

impl<'a> IntoIterator for &'a ResponseSet {
    type Item = &'a ModelResponse;
    type IntoIter = std::slice::Iter<'a, ModelResponse>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl Serialize for ResponseSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.items.len()))?;
        for item in &self.items {
            map.serialize_entry(&item.model, &item.text)?;
        }
        map.end()
    }
}

struct ResponseSetVisitor;

impl<'de> Visitor<'de> for ResponseSetVisitor {
    type Value = ResponseSet;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("an object mapping model names to response text")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
        let mut set = ResponseSet {
            items: Vec::with_capacity(access.size_hint().unwrap_or(0)),
        };
        while let Some((model, text)) = access.next_entry::<String, String>()? {
            set.push(model, text);
        }
        Ok(set)
    }
}

impl<'de> Deserialize<'de> for ResponseSet {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(ResponseSetVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entries_follow_insertion_order() {
        let set = ResponseSet::from(vec![("GPT", "Hello"), ("Claude", "Hi there")]);
        let entries = set.entries();

        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].key, 0);
        assert_eq!(entries[0].label, "GPT");
        assert_eq!(entries[0].body, "Hello");
        assert_eq!(entries[1].key, 1);
        assert_eq!(entries[1].label, "Claude");
        assert_eq!(entries[1].body, "Hi there");
    }

    #[test]
    fn test_empty_set_has_no_entries() {
        let set = ResponseSet::new();
        assert!(set.is_empty());
        assert!(set.entries().is_empty());
    }

    #[test]
    fn test_entries_are_stable_across_renders() {
        let set = ResponseSet::from(vec![("phi-3-small", "a"), ("gemini", "b")]);
        assert_eq!(set.entries(), set.clone().entries());
    }

    #[test]
    fn test_from_json_keeps_document_order() {
        let set = ResponseSet::from_json(
            r#"{"zeta": "last letter", "alpha": "first letter", "mistral": ""}"#,
        )
        .unwrap();
        let labels: Vec<_> = set.iter().map(|r| r.model.as_str()).collect();
        assert_eq!(labels, vec!["zeta", "alpha", "mistral"]);
        assert_eq!(set.entries()[2].body, "");
    }

    #[test]
    fn test_from_json_keeps_repeated_models() {
        let set = ResponseSet::from_json(r#"{"gpt-4o": "one", "gpt-4o": "two"}"#).unwrap();
        assert_eq!(set.len(), 2);
        let keys: Vec<_> = set.entries().iter().map(|e| e.key).collect();
        assert_eq!(keys, vec![0, 1]);
    }

    #[test]
    fn test_from_json_multiline_text() {
        let set = ResponseSet::from_json(r#"{"gemini": "line 1\nline 2"}"#).unwrap();
        assert_eq!(set.entries()[0].body, "line 1\nline 2");
    }

    #[test]
    fn test_from_json_rejects_non_object() {
        assert!(ResponseSet::from_json(r#"["gpt-4o", "hello"]"#).is_err());
        assert!(ResponseSet::from_json("null").is_err());
        assert!(ResponseSet::from_json(r#"{"gpt-4o": 42}"#).is_err());
    }

    #[test]
    fn test_serialize_preserves_order() {
        let set = ResponseSet::from(vec![("b", "2"), ("a", "1")]);
        let json = serde_json::to_string(&set).unwrap();
        assert_eq!(json, r#"{"b":"2","a":"1"}"#);
    }
}
