use serde::{Deserialize, Serialize};

use super::ids::Id;

/// A person known to the alias table, with their display name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    pub id: Id<Person>,
    pub name: String,
}

impl Person {
    pub fn new(id: Id<Person>, name: String) -> Self {
        Self { id, name }
    }
}

/// An alternate textual identifier for a person. Aliases are matched against
/// the local part of an address, so the alias text is kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Alias {
    pub alias: String,
    pub person_id: Id<Person>,
}

impl Alias {
    pub fn new(alias: String, person_id: Id<Person>) -> Self {
        Self { alias, person_id }
    }
}
