//! Element Attributes
//!
//! Ordered name/value pairs with linear lookup.

/// Single attribute
#[derive(Debug, Clone)]
pub struct Attribute {
    pub name: String,
    pub value: String,
}

/// Attribute collection for one element
///
/// Lookup is a linear scan: elements carry a handful of attributes at
/// most, so an index map would cost more than it saves.
#[derive(Debug, Default)]
pub struct AttributeMap {
    entries: Vec<Attribute>,
}

impl AttributeMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of attributes
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Get an attribute value
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|a| a.name == name)
            .map(|a| a.value.as_str())
    }

    /// Set an attribute, replacing any existing value
    pub fn set(&mut self, name: &str, value: &str) {
        for attr in self.entries.iter_mut() {
            if attr.name == name {
                attr.value = value.to_string();
                return;
            }
        }
        self.entries.push(Attribute {
            name: name.to_string(),
            value: value.to_string(),
        });
    }

    /// Remove an attribute, returning its old value
    pub fn remove(&mut self, name: &str) -> Option<String> {
        let index = self.entries.iter().position(|a| a.name == name)?;
        Some(self.entries.remove(index).value)
    }

    /// Check if an attribute exists
    pub fn has(&self, name: &str) -> bool {
        self.entries.iter().any(|a| a.name == name)
    }

    /// Iterate over attributes in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &Attribute> {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_get_attribute() {
        let mut attrs = AttributeMap::new();
        attrs.set("class", "btn");
        attrs.set("id", "submit");

        assert_eq!(attrs.len(), 2);
        assert_eq!(attrs.get("class"), Some("btn"));
        assert_eq!(attrs.get("id"), Some("submit"));
    }

    #[test]
    fn test_set_replaces_value() {
        let mut attrs = AttributeMap::new();
        attrs.set("class", "btn");
        attrs.set("class", "btn active");

        assert_eq!(attrs.len(), 1);
        assert_eq!(attrs.get("class"), Some("btn active"));
    }

    #[test]
    fn test_remove_attribute() {
        let mut attrs = AttributeMap::new();
        attrs.set("foo", "bar");

        assert!(attrs.has("foo"));
        assert_eq!(attrs.remove("foo"), Some("bar".to_string()));
        assert!(!attrs.has("foo"));
        assert_eq!(attrs.remove("foo"), None);
    }
}
