use std::io::Read;
use std::path::Path;

use serde::Deserialize;
use tracing::{debug, warn};

use crate::error::MailnetResult;
use crate::model::{Alias, Id};
use crate::source::columns;

#[derive(Debug, Deserialize)]
struct AliasRow {
    #[serde(rename = "Alias")]
    alias: String,
    #[serde(rename = "PersonId")]
    person_id: String,
}

pub fn load(path: &Path) -> MailnetResult<Vec<Alias>> {
    let file = columns::open(path)?;
    from_reader(file, &path.display().to_string())
}

pub fn from_reader<R: Read>(source: R, name: &str) -> MailnetResult<Vec<Alias>> {
    let mut rdr = columns::reader(source);
    columns::require(rdr.headers()?, name, columns::ALIAS_COLUMNS)?;

    let mut aliases = Vec::new();
    let mut skipped = 0usize;
    for result in rdr.deserialize() {
        let row: AliasRow = result?;
        if columns::is_missing(&row.alias) || columns::is_missing(&row.person_id) {
            debug!(file = name, alias = %row.alias, person_id = %row.person_id, "skipping alias row");
            skipped += 1;
            continue;
        }
        let person_id = Id::parse(&row.person_id, columns::PERSON_ID)?;
        aliases.push(Alias::new(row.alias, person_id));
    }

    if skipped > 0 {
        warn!(file = name, skipped, "alias rows with a missing alias or person id ignored");
    }
    debug!(file = name, count = aliases.len(), "loaded aliases");
    Ok(aliases)
}
