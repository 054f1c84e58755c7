//! Front-matter parsing

use indexmap::IndexMap;
use serde::de::Error as _;
use serde::Serialize;
use serde_yaml::Value;

/// Marker that opens and closes a front-matter block
const DELIMITER: &str = "---";

/// A loosely-typed front-matter value
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum FrontValue {
    String(String),
    Number(serde_yaml::Number),
    Bool(bool),
    List(Vec<FrontValue>),
    Map(IndexMap<String, FrontValue>),
    /// YAML `null` or an empty value (`key:`)
    Missing,
}

impl FrontValue {
    /// The value as a string slice, only when it is a string
    pub fn as_str(&self) -> Option<&str> {
        match self {
            FrontValue::String(s) => Some(s),
            _ => None,
        }
    }
}

impl From<Value> for FrontValue {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => FrontValue::Missing,
            Value::Bool(b) => FrontValue::Bool(b),
            Value::Number(n) => FrontValue::Number(n),
            Value::String(s) => FrontValue::String(s),
            Value::Sequence(seq) => FrontValue::List(seq.into_iter().map(Into::into).collect()),
            Value::Mapping(map) => FrontValue::Map(mapping_entries(map)),
            Value::Tagged(tagged) => tagged.value.into(),
        }
    }
}

/// Front-matter key/value pairs, in the order they appear in the file
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Frontmatter(IndexMap<String, FrontValue>);

impl Frontmatter {
    /// Split `content` into an optional front-matter block and the body.
    ///
    /// Content that does not start with `---`, or whose opening marker is
    /// never closed, has no front-matter and is returned untouched. When the
    /// block is present the body is everything after the closing marker,
    /// trimmed. A block that is not a valid YAML mapping is logged and the
    /// whole original content comes back as the body, markers included.
    pub fn parse(content: &str) -> (Option<Self>, &str) {
        let Some(rest) = content.strip_prefix(DELIMITER) else {
            return (None, content);
        };
        let Some(end) = rest.find(DELIMITER) else {
            return (None, content);
        };

        let block = &rest[..end];
        let body = &rest[end + DELIMITER.len()..];

        match Self::parse_block(block) {
            Ok(fm) => (Some(fm), body.trim()),
            Err(e) => {
                tracing::warn!("Failed to parse frontmatter, treating as content: {}", e);
                (None, content)
            }
        }
    }

    fn parse_block(block: &str) -> Result<Self, serde_yaml::Error> {
        if block.trim().is_empty() {
            return Ok(Self::default());
        }

        match serde_yaml::from_str::<Value>(block)? {
            Value::Null => Ok(Self::default()),
            Value::Mapping(map) => Ok(Self(mapping_entries(map))),
            other => Err(serde_yaml::Error::custom(format!(
                "expected a mapping of keys to values, found {}",
                kind_name(&other)
            ))),
        }
    }

    pub fn get(&self, key: &str) -> Option<&FrontValue> {
        self.0.get(key)
    }

    /// Look up `key` and return it only if it holds a string.
    ///
    /// Numbers, booleans and absent keys all yield `None`.
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(FrontValue::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &FrontValue)> {
        self.0.iter()
    }
}

fn mapping_entries(map: serde_yaml::Mapping) -> IndexMap<String, FrontValue> {
    map.into_iter()
        .filter_map(|(key, value)| key_string(key).map(|key| (key, value.into())))
        .collect()
}

/// Scalar keys are stringified, composite keys are dropped
fn key_string(key: Value) -> Option<String> {
    match key {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

fn kind_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Sequence(_) => "a sequence",
        Value::Mapping(_) => "a mapping",
        Value::Tagged(_) => "a tagged value",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_yaml_frontmatter() {
        let content = r#"---
title: Hello World
description: First post
author: Jane
date: 2024-01-15
---

This is the content.
"#;

        let (fm, body) = Frontmatter::parse(content);
        let fm = fm.unwrap();
        assert_eq!(fm.get_str("title"), Some("Hello World"));
        assert_eq!(fm.get_str("description"), Some("First post"));
        assert_eq!(fm.get_str("author"), Some("Jane"));
        assert_eq!(fm.get_str("date"), Some("2024-01-15"));
        assert_eq!(fm.len(), 4);
        assert_eq!(body, "This is the content.");
    }

    #[test]
    fn test_no_leading_marker_is_identity() {
        let content = "\n---\ntitle: Not frontmatter\n---\nBody\n";
        let (fm, body) = Frontmatter::parse(content);
        assert!(fm.is_none());
        assert_eq!(body, content);

        let plain = "# Just markdown\n\nwith text  \n";
        let (fm, body) = Frontmatter::parse(plain);
        assert!(fm.is_none());
        assert_eq!(body, plain);
    }

    #[test]
    fn test_unterminated_block_is_not_frontmatter() {
        let content = "---\ntitle: Dangling\n\nNo closing marker here.";
        let (fm, body) = Frontmatter::parse(content);
        assert!(fm.is_none());
        assert_eq!(body, content);
    }

    #[test]
    fn test_malformed_yaml_returns_original_content() {
        let content = "---\ntitle: [unclosed\nauthor: : :\n---\nBody text\n";
        let (fm, body) = Frontmatter::parse(content);
        assert!(fm.is_none());
        assert_eq!(body, content);
    }

    #[test]
    fn test_scalar_block_is_a_parse_failure() {
        let content = "---\njust some prose\n---\nBody";
        let (fm, body) = Frontmatter::parse(content);
        assert!(fm.is_none());
        assert_eq!(body, content);
    }

    #[test]
    fn test_empty_block_yields_empty_mapping() {
        let (fm, body) = Frontmatter::parse("---\n---\n\n  Body  \n");
        let fm = fm.unwrap();
        assert!(fm.is_empty());
        assert_eq!(body, "Body");
    }

    #[test]
    fn test_closing_marker_need_not_start_a_line() {
        let (fm, body) = Frontmatter::parse("---\ntitle: Inline\n--- rest of line\nmore");
        assert_eq!(fm.unwrap().get_str("title"), Some("Inline"));
        assert_eq!(body, "rest of line\nmore");
    }

    #[test]
    fn test_non_string_values_are_not_strings() {
        let content = "---\ntitle: 42\ndraft: true\nauthor:\ntags:\n  - rust\n  - blog\n---\nBody";
        let (fm, _) = Frontmatter::parse(content);
        let fm = fm.unwrap();

        assert_eq!(fm.get_str("title"), None);
        assert!(matches!(fm.get("title"), Some(FrontValue::Number(_))));
        assert_eq!(fm.get("draft"), Some(&FrontValue::Bool(true)));
        assert_eq!(fm.get("author"), Some(&FrontValue::Missing));
        assert_eq!(
            fm.get("tags"),
            Some(&FrontValue::List(vec![
                FrontValue::String("rust".to_string()),
                FrontValue::String("blog".to_string()),
            ]))
        );
        assert_eq!(fm.get("nope"), None);
    }

    #[test]
    fn test_keys_keep_file_order() {
        let (fm, _) = Frontmatter::parse("---\nzeta: 1\nalpha: 2\nmid: 3\n---\n");
        let keys: Vec<_> = fm.unwrap().iter().map(|(k, _)| k.clone()).collect();
        assert_eq!(keys, vec!["zeta", "alpha", "mid"]);
    }
}
