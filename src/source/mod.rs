pub mod columns;
pub mod email_source;
pub mod alias_source;
pub mod person_source;

use tracing::info;

use crate::config::InputPaths;
use crate::error::MailnetResult;
use crate::model::{Alias, EmailRecord, Person};

/// The three input tables of a run.
#[derive(Debug, Clone, Default)]
pub struct RecordSet {
    pub emails: Vec<EmailRecord>,
    pub aliases: Vec<Alias>,
    pub persons: Vec<Person>,
}

/// Loads all input tables. Any missing or malformed file aborts the run.
pub fn load_all(paths: &InputPaths) -> MailnetResult<RecordSet> {
    let emails = email_source::load(&paths.emails)?;
    let aliases = alias_source::load(&paths.aliases)?;
    let persons = person_source::load(&paths.persons)?;

    info!(
        emails = emails.len(),
        aliases = aliases.len(),
        persons = persons.len(),
        "input tables loaded"
    );

    Ok(RecordSet {
        emails,
        aliases,
        persons,
    })
}
