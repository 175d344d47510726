//! Front matter value model
//!
//! The header grammar produces a closed set of value shapes: scalar strings,
//! booleans, sequences of strings, and one level of string-to-string nesting.
//! Modeling them as an enum keeps every consumer an exhaustive match instead
//! of a chain of runtime shape checks.

use std::fmt;

/// A parsed front matter value
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    String(String),
    Bool(bool),
    Sequence(Vec<String>),
    Mapping(Vec<(String, String)>),
}

impl Value {
    /// Check if this value is a string
    pub fn is_string(&self) -> bool {
        matches!(self, Self::String(_))
    }

    /// Check if this value is a boolean
    pub fn is_bool(&self) -> bool {
        matches!(self, Self::Bool(_))
    }

    /// Check if this value is a sequence
    pub fn is_sequence(&self) -> bool {
        matches!(self, Self::Sequence(_))
    }

    /// Check if this value is a nested mapping
    pub fn is_mapping(&self) -> bool {
        matches!(self, Self::Mapping(_))
    }

    /// Try to view this value as a string
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    /// Try to view this value as a boolean
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Try to view this value as a sequence of strings
    pub fn as_sequence(&self) -> Option<&[String]> {
        match self {
            Self::Sequence(items) => Some(items),
            _ => None,
        }
    }

    /// Try to view this value as a nested mapping
    pub fn as_mapping(&self) -> Option<&[(String, String)]> {
        match self {
            Self::Mapping(pairs) => Some(pairs),
            _ => None,
        }
    }

    /// Look up a key in a nested mapping
    pub fn mapping_get(&self, key: &str) -> Option<&str> {
        self.as_mapping()?
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::String(s) => write!(f, "{s}"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Sequence(items) => write!(f, "[{}]", items.join(", ")),
            Self::Mapping(pairs) => {
                let rendered: Vec<String> =
                    pairs.iter().map(|(k, v)| format!("{k}: {v}")).collect();
                write!(f, "{{{}}}", rendered.join(", "))
            }
        }
    }
}

/// An ordered key-value mapping parsed from a document header.
///
/// Declaration order is preserved; later re-declarations of a key overwrite
/// the value in place.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FrontMatter {
    entries: Vec<(String, Value)>,
}

impl FrontMatter {
    /// Create an empty front matter mapping
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a key-value pair, overwriting an existing key in place
    pub fn insert(&mut self, key: impl Into<String>, value: Value) {
        let key = key.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((key, value)),
        }
    }

    /// Look up a value by key
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v)
    }

    /// Check whether the mapping holds no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Iterate over entries in declaration order
    pub fn iter(&self) -> impl Iterator<Item = &(String, Value)> {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_accessors() {
        let s = Value::String("hello".to_string());
        assert!(s.is_string());
        assert_eq!(s.as_str(), Some("hello"));
        assert_eq!(s.as_bool(), None);

        let b = Value::Bool(true);
        assert!(b.is_bool());
        assert_eq!(b.as_bool(), Some(true));
        assert_eq!(b.as_str(), None);

        let seq = Value::Sequence(vec!["a".to_string(), "b".to_string()]);
        assert!(seq.is_sequence());
        assert_eq!(seq.as_sequence().unwrap().len(), 2);
    }

    #[test]
    fn test_mapping_get() {
        let mapping = Value::Mapping(vec![
            ("name".to_string(), "Jane Doe".to_string()),
            ("email".to_string(), "x@y.com".to_string()),
        ]);
        assert_eq!(mapping.mapping_get("name"), Some("Jane Doe"));
        assert_eq!(mapping.mapping_get("email"), Some("x@y.com"));
        assert_eq!(mapping.mapping_get("missing"), None);

        let not_a_mapping = Value::String("Jane".to_string());
        assert_eq!(not_a_mapping.mapping_get("name"), None);
    }

    #[test]
    fn test_front_matter_preserves_order() {
        let mut fm = FrontMatter::new();
        fm.insert("title", Value::String("Post".to_string()));
        fm.insert("date", Value::String("2024-01-15".to_string()));
        fm.insert("featured", Value::Bool(true));

        let keys: Vec<&str> = fm.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(keys, vec!["title", "date", "featured"]);
    }

    #[test]
    fn test_front_matter_insert_overwrites_in_place() {
        let mut fm = FrontMatter::new();
        fm.insert("title", Value::String("First".to_string()));
        fm.insert("date", Value::String("2024-01-15".to_string()));
        fm.insert("title", Value::String("Second".to_string()));

        assert_eq!(fm.len(), 2);
        assert_eq!(fm.get("title").unwrap().as_str(), Some("Second"));
        let keys: Vec<&str> = fm.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(keys, vec!["title", "date"]);
    }

    #[test]
    fn test_value_display() {
        assert_eq!(Value::String("hi".to_string()).to_string(), "hi");
        assert_eq!(Value::Bool(false).to_string(), "false");
        assert_eq!(
            Value::Sequence(vec!["a".to_string(), "b".to_string()]).to_string(),
            "[a, b]"
        );
    }
}
