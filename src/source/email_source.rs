use std::io::Read;
use std::path::Path;

use tracing::debug;

use crate::error::MailnetResult;
use crate::model::EmailRecord;
use crate::source::columns;

pub fn load(path: &Path) -> MailnetResult<Vec<EmailRecord>> {
    let file = columns::open(path)?;
    from_reader(file, &path.display().to_string())
}

/// Reads email records. Only `MetadataFrom` and `MetadataTo` are kept; empty
/// cells and null markers such as `NA` or `NULL` become missing values.
pub fn from_reader<R: Read>(source: R, name: &str) -> MailnetResult<Vec<EmailRecord>> {
    let mut rdr = columns::reader(source);
    columns::require(rdr.headers()?, name, columns::EMAIL_COLUMNS)?;

    let mut emails = Vec::new();
    for result in rdr.deserialize() {
        let mut email: EmailRecord = result?;
        email.from = email.from.filter(|v| !columns::is_missing(v));
        email.to = email.to.filter(|v| !columns::is_missing(v));
        emails.push(email);
    }

    debug!(file = name, count = emails.len(), "loaded emails");
    Ok(emails)
}
