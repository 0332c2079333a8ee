use std::collections::HashMap;

use tracing::{debug, warn};

use crate::model::{Alias, Id, Person};

/// Text used for a missing address cell.
pub const MISSING_VALUE: &str = "nan";

/// Reduces a raw address to its lookup key: lowercased, cut at the first
/// `@`, commas removed. A missing value becomes `"nan"`.
///
/// Addresses that differ only by domain produce the same key.
pub fn clean_key(raw: Option<&str>) -> String {
    let lowered = raw.unwrap_or(MISSING_VALUE).to_lowercase();
    let local = match lowered.find('@') {
        Some(at) => &lowered[..at],
        None => lowered.as_str(),
    };
    local.replace(',', "")
}

/// Resolves raw addresses to canonical identities through the alias and
/// person tables.
#[derive(Debug, Clone, Default)]
pub struct IdentityResolver {
    aliases: HashMap<String, Id<Person>>,
    persons: HashMap<Id<Person>, String>,
}

impl IdentityResolver {
    /// Builds both lookup maps. On duplicate keys the later row wins.
    pub fn new(aliases: &[Alias], persons: &[Person]) -> Self {
        let mut alias_map = HashMap::with_capacity(aliases.len());
        for alias in aliases {
            if let Some(previous) = alias_map.insert(alias.alias.clone(), alias.person_id.clone()) {
                if previous != alias.person_id {
                    warn!(alias = %alias.alias, %previous, current = %alias.person_id, "alias remapped");
                }
            }
        }

        let mut person_map = HashMap::with_capacity(persons.len());
        for person in persons {
            if let Some(previous) = person_map.insert(person.id.clone(), person.name.clone()) {
                if previous != person.name {
                    warn!(id = %person.id, %previous, current = %person.name, "person renamed");
                }
            }
        }

        debug!(
            aliases = alias_map.len(),
            persons = person_map.len(),
            "identity tables ready"
        );

        Self {
            aliases: alias_map,
            persons: person_map,
        }
    }

    /// Canonical identity for a raw address.
    ///
    /// The cleaned key is looked up as an alias; the resulting person id (or
    /// the key itself when no alias matches) is then looked up as a person.
    /// Unmatched input falls back to the cleaned key, never an error.
    pub fn resolve(&self, raw: Option<&str>) -> String {
        let key = clean_key(raw);
        let person_key = self
            .aliases
            .get(&key)
            .map(Id::as_str)
            .unwrap_or(key.as_str());

        match self.persons.get(person_key) {
            Some(name) => name.clone(),
            None => key,
        }
    }

    pub fn alias_count(&self) -> usize {
        self.aliases.len()
    }

    pub fn person_count(&self) -> usize {
        self.persons.len()
    }
}
