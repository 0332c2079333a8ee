use std::io::Read;
use std::path::Path;

use serde::Deserialize;
use tracing::{debug, warn};

use crate::error::MailnetResult;
use crate::model::{Id, Person};
use crate::source::columns;

#[derive(Debug, Deserialize)]
struct PersonRow {
    #[serde(rename = "Id")]
    id: String,
    #[serde(rename = "Name")]
    name: String,
}

pub fn load(path: &Path) -> MailnetResult<Vec<Person>> {
    let file = columns::open(path)?;
    from_reader(file, &path.display().to_string())
}

pub fn from_reader<R: Read>(source: R, name: &str) -> MailnetResult<Vec<Person>> {
    let mut rdr = columns::reader(source);
    columns::require(rdr.headers()?, name, columns::PERSON_COLUMNS)?;

    let mut persons = Vec::new();
    let mut skipped = 0usize;
    for result in rdr.deserialize() {
        let row: PersonRow = result?;
        if columns::is_missing(&row.id) {
            debug!(file = name, person = %row.name, "skipping person row without id");
            skipped += 1;
            continue;
        }
        let id = Id::parse(&row.id, columns::ID)?;
        persons.push(Person::new(id, row.name));
    }

    if skipped > 0 {
        warn!(file = name, skipped, "person rows with a missing id ignored");
    }
    debug!(file = name, count = persons.len(), "loaded persons");
    Ok(persons)
}
