use serde::{Deserialize, Serialize};

/// Sender and receiver metadata of a single email. Every other column of the
/// email table is ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmailRecord {
    #[serde(rename = "MetadataFrom")]
    pub from: Option<String>,
    #[serde(rename = "MetadataTo")]
    pub to: Option<String>,
}

impl EmailRecord {
    pub fn new(from: Option<&str>, to: Option<&str>) -> Self {
        Self {
            from: from.map(str::to_string),
            to: to.map(str::to_string),
        }
    }
}
