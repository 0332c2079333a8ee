use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{MailnetError, MailnetResult};
use crate::ops::rank_ops::RankConfig;
use crate::validation;

/// Where the three input tables live.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InputPaths {
    pub emails: PathBuf,
    pub aliases: PathBuf,
    pub persons: PathBuf,
}

impl Default for InputPaths {
    fn default() -> Self {
        let dir = PathBuf::from("input");
        Self {
            emails: dir.join("Emails.csv"),
            aliases: dir.join("Aliases.csv"),
            persons: dir.join("Persons.csv"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    /// Minimum importance kept in the filtered view.
    pub threshold: f64,
    /// How many ranked identities to print per view.
    pub top: usize,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            threshold: 0.005,
            top: 20,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    pub json: Option<PathBuf>,
    pub csv: Option<PathBuf>,
}

/// Settings for one analysis run, read from TOML. Every section and key is optional.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    pub input: InputPaths,
    pub rank: RankConfig,
    pub report: ReportConfig,
    pub export: ExportConfig,
}

impl AnalysisConfig {
    pub fn load(path: &Path) -> MailnetResult<Self> {
        let text = std::fs::read_to_string(path).map_err(|source| MailnetError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&text)?;
        debug!(path = %path.display(), "config loaded");
        Ok(config)
    }

    pub fn from_toml_str(text: &str) -> MailnetResult<Self> {
        Ok(toml::from_str(text)?)
    }

    pub fn validate(&self) -> MailnetResult<()> {
        self.rank.validate()?;
        validation::non_negative_finite(self.report.threshold, "threshold")?;
        validation::positive(self.report.top, "top")?;
        Ok(())
    }
}
