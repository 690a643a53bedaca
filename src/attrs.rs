use std::fmt;

/// Attribute key under which wrappers inject their tag value.
pub const EXTRA_TAG: &str = "extra_tag";

/// Attribute key under which the harness broadcasts the tick counter.
pub const CONTENT: &str = "content";

/// Value carried by a single attribute entry.
#[derive(Debug, Clone, PartialEq)]
pub enum AttrValue {
    Text(String),
    Int(i64),
    Flag(bool),
}

impl AttrValue {
    /// Borrow the text payload, if this is a text value.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            AttrValue::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            AttrValue::Int(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_flag(&self) -> Option<bool> {
        match self {
            AttrValue::Flag(b) => Some(*b),
            _ => None,
        }
    }
}

impl fmt::Display for AttrValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttrValue::Text(s) => write!(f, "{}", s),
            AttrValue::Int(n) => write!(f, "{}", n),
            AttrValue::Flag(b) => write!(f, "{}", b),
        }
    }
}

// From conversions for AttrValue, enabling with("content", 0), with("tag", "a"), etc.

impl From<&str> for AttrValue {
    fn from(v: &str) -> Self {
        AttrValue::Text(v.to_string())
    }
}

impl From<String> for AttrValue {
    fn from(v: String) -> Self {
        AttrValue::Text(v)
    }
}

impl From<i64> for AttrValue {
    fn from(v: i64) -> Self {
        AttrValue::Int(v)
    }
}

impl From<i32> for AttrValue {
    fn from(v: i32) -> Self {
        AttrValue::Int(i64::from(v))
    }
}

impl From<bool> for AttrValue {
    fn from(v: bool) -> Self {
        AttrValue::Flag(v)
    }
}

/// Ordered mapping from string keys to attribute values.
///
/// Insertion order is preserved; setting an existing key replaces its value
/// in place without moving the entry. Collision precedence across wrapper
/// layers is outermost-wins: a wrapper injects its own entries first and then
/// merges the incoming attributes over them via [`Attributes::merge_from`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Attributes {
    entries: Vec<(String, AttrValue)>,
}

impl Attributes {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    ///
    /// # Example
    /// ```ignore
    /// let attrs = Attributes::new().with("content", 3).with("extra_tag", "a");
    /// ```
    pub fn with(mut self, key: impl Into<String>, value: impl Into<AttrValue>) -> Self {
        self.set(key, value);
        self
    }

    /// Insert a value, replacing in place if the key already exists.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<AttrValue>) {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((key, value)),
        }
    }

    pub fn get(&self, key: &str) -> Option<&AttrValue> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v)
    }

    /// Merge another mapping into this one. Entries from `other` override
    /// same-key entries here; new keys are appended in `other`'s order.
    pub fn merge_from(&mut self, other: &Attributes) {
        for (key, value) in &other.entries {
            self.set(key.clone(), value.clone());
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &AttrValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl fmt::Display for Attributes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (key, value) in &self.entries {
            if !first {
                write!(f, " ")?;
            }
            write!(f, "{}={}", key, value)?;
            first = false;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_builder() {
        let attrs = Attributes::new().with("a", 1).with("b", "two");
        assert_eq!(attrs.len(), 2);
        assert_eq!(attrs.get("a"), Some(&AttrValue::Int(1)));
        assert_eq!(attrs.get("b"), Some(&AttrValue::Text("two".to_string())));
    }

    #[test]
    fn test_set_replaces_in_place() {
        let mut attrs = Attributes::new().with("a", 1).with("b", 2);
        attrs.set("a", 10);
        assert_eq!(attrs.get("a"), Some(&AttrValue::Int(10)));
        // Replaced entry keeps its position.
        let keys: Vec<&str> = attrs.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["a", "b"]);
    }

    #[test]
    fn test_merge_from_overrides_and_appends() {
        let mut base = Attributes::new().with("tag", "inner").with("x", 1);
        let over = Attributes::new().with("tag", "outer").with("y", 2);
        base.merge_from(&over);
        assert_eq!(base.get("tag"), Some(&AttrValue::Text("outer".to_string())));
        assert_eq!(base.get("x"), Some(&AttrValue::Int(1)));
        assert_eq!(base.get("y"), Some(&AttrValue::Int(2)));
        assert_eq!(base.len(), 3);
    }

    #[test]
    fn test_value_equality_is_structural() {
        let a = Attributes::new().with("content", 5).with("flag", true);
        let b = Attributes::new().with("content", 5).with("flag", true);
        assert_eq!(a, b);

        let c = Attributes::new().with("content", 6).with("flag", true);
        assert_ne!(a, c);
    }

    #[test]
    fn test_get_missing_key() {
        let attrs = Attributes::new().with("a", 1);
        assert_eq!(attrs.get("b"), None);
    }

    #[test]
    fn test_display_formats_pairs() {
        let attrs = Attributes::new().with("content", 3).with("extra_tag", "a");
        assert_eq!(attrs.to_string(), "content=3 extra_tag=a");
    }

    #[test]
    fn test_attr_value_accessors() {
        assert_eq!(AttrValue::Text("x".to_string()).as_text(), Some("x"));
        assert_eq!(AttrValue::Int(4).as_int(), Some(4));
        assert_eq!(AttrValue::Flag(true).as_flag(), Some(true));
        assert_eq!(AttrValue::Int(4).as_text(), None);
        assert_eq!(AttrValue::Text("x".to_string()).as_flag(), None);
    }
}
