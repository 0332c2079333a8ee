use std::fs::File;
use std::path::Path;

use csv::StringRecord;

use crate::error::{MailnetError, MailnetResult};

pub const METADATA_FROM: &str = "MetadataFrom";
pub const METADATA_TO: &str = "MetadataTo";
pub const ALIAS: &str = "Alias";
pub const PERSON_ID: &str = "PersonId";
pub const ID: &str = "Id";
pub const NAME: &str = "Name";

pub const EMAIL_COLUMNS: &[&str] = &[METADATA_FROM, METADATA_TO];
pub const ALIAS_COLUMNS: &[&str] = &[ALIAS, PERSON_ID];
pub const PERSON_COLUMNS: &[&str] = &[ID, NAME];

/// Cell values read as missing besides an empty cell, the usual
/// spreadsheet/dataframe null markers.
pub const NA_TOKENS: &[&str] = &[
    "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN",
    "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

/// True for a blank cell or one of the `NA_TOKENS`.
pub fn is_missing(cell: &str) -> bool {
    let cell = cell.trim();
    cell.is_empty() || NA_TOKENS.contains(&cell)
}

/// Fails with `MissingColumn` for the first required column absent from `headers`.
pub fn require(headers: &StringRecord, file: &str, required: &[&str]) -> MailnetResult<()> {
    for &column in required {
        if !headers.iter().any(|h| h.trim() == column) {
            return Err(MailnetError::MissingColumn {
                file: file.to_string(),
                column: column.to_string(),
            });
        }
    }
    Ok(())
}

pub(crate) fn open(path: &Path) -> MailnetResult<File> {
    File::open(path).map_err(|source| MailnetError::Read {
        path: path.to_path_buf(),
        source,
    })
}

/// Builds a reader that trims header whitespace, so ` Name` still matches `Name`.
pub(crate) fn reader<R: std::io::Read>(source: R) -> csv::Reader<R> {
    csv::ReaderBuilder::new()
        .trim(csv::Trim::Headers)
        .from_reader(source)
}
