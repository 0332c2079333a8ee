use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;
use std::hash::Hash;
use std::marker::PhantomData;

use crate::error::MailnetResult;
use crate::validation;

/// Type-safe identifier wrapper. The phantom type parameter `T` keeps ids
/// from different tables apart, while the value stays the identifier text
/// exactly as the source table spells it.
#[derive(Serialize, Deserialize)]
#[serde(transparent)]
pub struct Id<T> {
    pub value: String,
    #[serde(skip)]
    _phantom: PhantomData<T>,
}

impl<T> Id<T> {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            _phantom: PhantomData,
        }
    }

    /// Parse from a table cell. Surrounding whitespace is dropped; blank cells are rejected.
    pub fn parse(s: &str, field: &str) -> MailnetResult<Self> {
        Ok(Self::new(validation::non_blank(s, field)?))
    }

    pub fn as_str(&self) -> &str {
        &self.value
    }
}

impl<T> Clone for Id<T> {
    fn clone(&self) -> Self {
        Self::new(self.value.clone())
    }
}

impl<T> PartialEq for Id<T> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<T> Eq for Id<T> {}

// Hashes exactly like the inner `str`, so `Borrow<str>` lookups stay consistent.
impl<T> Hash for Id<T> {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

impl<T> Borrow<str> for Id<T> {
    fn borrow(&self) -> &str {
        &self.value
    }
}

impl<T> fmt::Debug for Id<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Id({})", self.value)
    }
}

impl<T> fmt::Display for Id<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    struct Foo;

    #[test]
    fn ids_with_same_value_are_equal() {
        assert_eq!(Id::<Foo>::new("80"), Id::<Foo>::new("80"));
        assert_ne!(Id::<Foo>::new("80"), Id::<Foo>::new("81"));
    }

    #[test]
    fn parse_trims_and_rejects_blank() {
        assert_eq!(Id::<Foo>::parse(" 32 ", "Id").unwrap().as_str(), "32");
        assert!(Id::<Foo>::parse("  ", "Id").is_err());
    }

    #[test]
    fn map_lookup_by_str() {
        let mut map: HashMap<Id<Foo>, &str> = HashMap::new();
        map.insert(Id::new("P1"), "first");
        assert_eq!(map.get("P1"), Some(&"first"));
        assert_eq!(map.get("P2"), None);
    }

    #[test]
    fn serde_is_transparent() {
        let id = Id::<Foo>::new("P7");
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"P7\"");
        let back: Id<Foo> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
    }
}
